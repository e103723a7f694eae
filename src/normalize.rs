//! Token cleanup ahead of palindrome testing.

/// Strips whitespace and ASCII punctuation from a token and lowercases what
/// survives, preserving the relative order of the remaining characters.
///
/// The classification is fixed: Unicode whitespace and the ASCII punctuation
/// block are dropped, everything else is kept. Pure and total; an empty
/// input yields an empty output.
///
/// # Examples
/// ```
/// use sparque::normalize;
/// assert_eq!(normalize("hey  th!ere?"), "heythere");
/// assert_eq!(normalize("Level!"), "level");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
