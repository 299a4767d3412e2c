/// Lower-case a submitted word and drop one trailing space.
///
/// Only a single space is stripped, matching what a text field leaves behind
/// after autocomplete; other whitespace is kept as typed.
pub fn normalize_word(text: &str) -> String {
    let lowered = text.to_lowercase();

    match lowered.strip_suffix(' ') {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}
