//! vCard text escaping.

/// Escapes literal newlines in NOTE text as the two-character sequence
/// backslash + `n`.
///
/// CRLF pairs, bare CR, and bare LF all collapse to one `\n` escape.
/// Semicolons, commas, and backslashes pass through untouched to keep the
/// output byte-identical with what contact-import tooling already accepts
/// from this exporter.
#[must_use]
pub fn escape_note_text(text: &str) -> String {
    text.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n")
}
