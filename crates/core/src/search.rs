//! In-memory catalog search.
//!
//! Items are fetched in full and filtered here; matching never happens in
//! SQL. A query matches an item when it is a case-insensitive substring of
//! the item's name, description or location.

/// Anything that exposes the three searchable text fields.
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &str;
}

/// Whether `item` matches the (already lower-cased) `needle`.
fn matches<T: Searchable>(item: &T, needle: &str) -> bool {
    [item.name(), item.description(), item.location()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep the items matching `query`, preserving their order. The empty query
/// matches everything.
pub fn filter_items<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches(item, &needle))
        .collect()
}
