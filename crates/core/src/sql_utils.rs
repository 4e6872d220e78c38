//! Cleanup of model-generated SQL text.

const FENCE: &str = "```";

/// Language tags that may follow an opening fence. Longest first so
/// `sqlite` is not cut short by `sql`.
const FENCE_TAGS: [&str; 3] = ["sqlite", "duckdb", "sql"];

/// Strip markdown code-fence markers from model output.
///
/// Every fence marker is removed wherever it appears, together with an
/// optional `sql`/`sqlite`/`duckdb` language tag (any case), then
/// surrounding whitespace is trimmed. Applying it twice yields the same
/// text as applying it once.
#[must_use]
pub fn strip_sql_fences(content: &str) -> String {
    let mut cleaned = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(index) = rest.find(FENCE) {
        cleaned.push_str(rest.get(..index).unwrap_or_default());
        rest = skip_fence_tag(rest.get(index + FENCE.len()..).unwrap_or_default());
    }
    cleaned.push_str(rest);
    cleaned.trim().to_owned()
}

fn skip_fence_tag(after_fence: &str) -> &str {
    for tag in FENCE_TAGS {
        if let Some(head) = after_fence.get(..tag.len()) {
            if head.eq_ignore_ascii_case(tag) {
                return after_fence.get(tag.len()..).unwrap_or_default();
            }
        }
    }
    after_fence
}
