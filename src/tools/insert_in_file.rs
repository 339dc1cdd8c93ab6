/// Inserts `line` on a new line directly after the first occurrence of `anchor`.
///
/// # Arguments
///
/// * `content` - The manifest text.
/// * `anchor` - The text to locate the insertion point, usually a whole line without its newline.
/// * `line` - The line to insert.
///
/// The new line is joined with the same ending that follows the anchor, so CRLF
/// manifests stay CRLF. Returns `None` when `anchor` does not occur in `content`.
pub fn insert_after(content: &str, anchor: &str, line: &str) -> Option<String> {
    let start = content.find(anchor)?;
    let end = start + anchor.len();
    let eol = if content[end..].starts_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };

    let mut out = String::with_capacity(content.len() + line.len() + eol.len());
    out.push_str(&content[..end]);
    out.push_str(eol);
    out.push_str(line);
    out.push_str(&content[end..]);
    Some(out)
}
