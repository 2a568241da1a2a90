/// Number of questions shown per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number. Numbers below one select nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page(i64);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl Page {
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    /// Reads the `page` parameter of a query string. Absent or non-numeric
    /// values fall back to the first page.
    pub fn from_query(query: Option<&str>) -> Self {
        query
            .into_iter()
            .flat_map(|query| query.split('&'))
            .filter_map(|chunk| chunk.split_once('='))
            .find_map(|(key, value)| (key == "page").then_some(value))
            .and_then(|value| value.parse().ok())
            .map_or_else(Self::default, Self)
    }

    /// Slices out the items on this page. Pages past the end are empty.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let Ok(index) = usize::try_from(self.0.saturating_sub(1)) else {
            return &[];
        };
        let start = index.saturating_mul(QUESTIONS_PER_PAGE);
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }
}
