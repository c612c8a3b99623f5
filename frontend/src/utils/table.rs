//! Client-side search, sort and pagination over fully fetched collections.

use std::cmp::Ordering;

/// Case-insensitive substring match of `query` against any of `fields`.
/// A blank query matches everything.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Clicking the active column flips its direction; another column
    /// starts ascending.
    pub fn toggled(self, key: K) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }
}

/// Stable sort of `items` by `key_fn` in `direction`.
pub fn sort_by_key<T, V: Ord>(items: &mut [T], direction: SortDirection, key_fn: impl Fn(&T) -> V) {
    items.sort_by(|a, b| direction.apply(key_fn(a).cmp(&key_fn(b))));
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Zero-based page slice; out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = page.saturating_mul(per_page);
    if per_page == 0 || start >= items.len() {
        return Vec::new();
    }
    let end = (start + per_page).min(items.len());
    items[start..end].to_vec()
}

/// Keeps `page` inside the range left after filtering shrank the list.
pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
    page.min(page_count(total, per_page).saturating_sub(1))
}
