/// Canonical form of source text for equality checks only: line endings
/// unified to LF, each line trimmed, blank lines dropped.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when `a` and `b` differ by more than whitespace and line layout.
pub fn is_substantively_different(a: &str, b: &str) -> bool {
    normalize(a) != normalize(b)
}
