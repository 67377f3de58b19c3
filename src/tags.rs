//! Free-text tag input handling
//!
//! Tags are typed as one comma-separated string. Normalization splits on
//! commas, trims whitespace and drops empty segments, keeping order.

/// Normalize a raw comma-separated tag string into an ordered tag list
///
/// # Examples
/// ```
/// use mediashelf::tags::normalize_tags;
///
/// assert_eq!(normalize_tags(" a , b ,  "), vec!["a", "b"]);
/// assert!(normalize_tags(" , ,").is_empty());
/// ```
#[must_use]
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Element-wise comparison: same length, same values, same order
#[must_use]
pub fn same_tags(left: &[String], right: &[String]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a == b)
}

/// Render tags the way they are presented for editing
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
