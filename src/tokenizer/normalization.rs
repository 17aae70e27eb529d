// WHY: sentence text leaves the splitter as a slice of the article body, which may
// carry hard line breaks and indentation from the page layout

/// Collapse every run of whitespace (including `\r\n` and tabs) into a single space
/// and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into supplied buffer to avoid allocation
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            buffer.push(' ');
        }
        buffer.push_str(word);
    }
}

/// Length of a sentence in characters, the unit every length cutoff is measured in
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}
