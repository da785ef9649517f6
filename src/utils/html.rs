use ammonia;

/// Sanitize user-supplied free text (descriptions, captions, instructions,
/// comments) before storing it.
///
/// Whitelist-based: safe inline tags survive, <script>/<iframe> and event
/// attributes are stripped. Recipe text is usually plain prose and passes
/// through unchanged; this is a fail-safe against stored XSS when the feed
/// is rendered by a web client.
pub fn clean_text(input: &str) -> String {
    ammonia::clean(input)
}
