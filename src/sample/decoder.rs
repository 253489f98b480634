use encoding_rs::UTF_8;

/// Decode a text file as UTF-8, dropping a leading byte order mark. Returns `None` when the
/// bytes are not valid UTF-8.
pub fn decode_text(raw: &[u8]) -> Option<String> {
    let (text, _, had_errors) = UTF_8.decode(raw);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}
