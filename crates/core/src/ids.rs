#![forbid(unsafe_code)]

/// Next identifier for a keyed collection: max numeric key + 1, `"1"` when
/// the collection holds no numeric keys. Keys that do not parse as integers
/// are ignored, so gaps are never reused and foreign keys never collide.
pub fn next_id<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    let max = keys
        .into_iter()
        .filter_map(|key| key.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}
