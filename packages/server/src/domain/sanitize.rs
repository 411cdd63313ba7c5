//! Input sanitization applied to every user-supplied string.
//!
//! Markup is stripped first and surrounding whitespace trimmed afterwards, so
//! a value such as `"  <b>ana</b> "` is stored and compared as `"ana"`.

use std::sync::LazyLock;

use regex::Regex;

/// `<script>` and `<style>` blocks are dropped together with their content.
static EMBEDDED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid regex")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^<>]*>").expect("valid regex"));

/// Strip markup from `input` and trim the result.
pub fn sanitize(input: &str) -> String {
    let without_blocks = EMBEDDED_BLOCK.replace_all(input, "");
    let without_comments = COMMENT.replace_all(&without_blocks, "");
    let without_tags = TAG.replace_all(&without_comments, "");
    without_tags.trim().to_string()
}
