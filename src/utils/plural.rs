//! Pluralization for log summaries.

/// Plural form of an English noun, covering the nouns the summaries use.
///
/// - `plural("file")` -> `"files"`
/// - `plural("directory")` -> `"directories"`
fn plural(noun: &str) -> String {
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'o', 'u']) => format!("{stem}ies"),
        _ => format!("{noun}s"),
    }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "link")` -> `"0 links"`
/// - `plural_count(1, "directory")` -> `"1 directory"`
/// - `plural_count(5, "directory")` -> `"5 directories"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {}", plural(noun))
    }
}
