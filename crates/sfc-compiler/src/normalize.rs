//! Single-line text normalization for string-literal embedding.

/// Collapse multi-line text into one line safe to embed inside a
/// double-quoted string literal.
///
/// Each line is trimmed, empty lines are dropped, and survivors rejoin
/// with a single space; joining with no separator could fuse tokens
/// adjacent across a line break into one invalid token. Embedded double
/// quotes are escaped last. Total for any input.
pub fn normalize(input: &str) -> String {
    let joined = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    joined.replace('"', "\\\"").trim().to_string()
}
