//! Best-effort cleanup of Markdown-fenced model replies

/// Strip a leading and/or trailing Markdown code fence from a model reply.
///
/// The reply is trimmed, one leading ``` marker with an optional language
/// tag is removed, one trailing ``` marker is removed, and the remainder
/// is trimmed again. Fences elsewhere in the text are left untouched; this
/// is a cleanup helper, not a Markdown parser.
pub fn strip_code_fences(reply: &str) -> String {
    let mut text = reply.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // A language tag like `json` sits between the marker and the payload
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim().to_string()
}
