//! Search and display ordering for notes
//!
//! The view is derived on every call and never stored. Filtering is a
//! case-insensitive substring match on title or body; ordering puts pinned
//! notes first, then favorites, then the most recently updated.

use std::cmp::Ordering;

use crate::models::Note;

/// Notes matching `query`, in display order.
///
/// The sort is stable: notes that tie on pinned, favorite and `updated_at`
/// keep their relative order from `notes`.
pub fn view<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.to_lowercase();
    let mut matched = notes
        .iter()
        .filter(|note| note.matches(&needle))
        .collect::<Vec<_>>();
    matched.sort_by(|a, b| display_order(a, b));
    matched
}

/// Total order used by [`view`]
pub fn display_order(a: &Note, b: &Note) -> Ordering {
    b.pinned
        .cmp(&a.pinned)
        .then_with(|| b.favorite.cmp(&a.favorite))
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}
