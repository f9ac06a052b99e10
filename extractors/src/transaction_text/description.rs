pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Punctuation and currency symbols kept alongside letters and digits
const ALLOWED_SYMBOLS: &[char] = &[
    '.', ',', '!', '?', '(', ')', '$', '/', '€', '£', '¥', '%', '+', '-', '_',
];

/// Clean the user's sentence for storage as a description.
///
/// Accented letters survive; emoji and other symbols are dropped. Longer
/// texts are cut at 100 characters and suffixed with "...".
pub fn sanitize_description(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || ALLOWED_SYMBOLS.contains(c))
        .collect();

    if cleaned.chars().count() > MAX_DESCRIPTION_CHARS {
        let truncated: String = cleaned.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{}...", truncated)
    } else {
        cleaned
    }
}
