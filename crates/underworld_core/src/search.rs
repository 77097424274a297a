use crate::{PageId, SEARCH_INDEX};

pub const NO_RESULTS_LABEL: &str = "No results found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub title: &'static str,
    pub page: PageId,
}

/// State of the results surface. `NoResults` is shown (with a placeholder
/// entry) while `Hidden` is not shown at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResults {
    #[default]
    Hidden,
    Matches(Vec<SearchHit>),
    NoResults,
}

impl SearchResults {
    pub fn is_visible(&self) -> bool {
        !matches!(self, SearchResults::Hidden)
    }

    /// Rows to display, including the placeholder row for `NoResults`.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            SearchResults::Hidden => Vec::new(),
            SearchResults::Matches(hits) => hits.iter().map(|hit| hit.title).collect(),
            SearchResults::NoResults => vec![NO_RESULTS_LABEL],
        }
    }

    /// The selectable hit at `index`. The placeholder row is not selectable.
    pub fn hit(&self, index: usize) -> Option<SearchHit> {
        match self {
            SearchResults::Matches(hits) => hits.get(index).copied(),
            SearchResults::Hidden | SearchResults::NoResults => None,
        }
    }
}

/// Case-insensitive substring search over titles and keywords, in index order.
pub fn search(query: &str) -> SearchResults {
    let query = query.trim();
    if query.chars().count() <= 1 {
        return SearchResults::Hidden;
    }
    let needle = query.to_lowercase();
    let hits: Vec<SearchHit> = SEARCH_INDEX
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.keywords.to_lowercase().contains(&needle)
        })
        .map(|entry| SearchHit {
            title: entry.title,
            page: entry.page,
        })
        .collect();

    if hits.is_empty() {
        SearchResults::NoResults
    } else {
        SearchResults::Matches(hits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SearchState {
    pub(crate) input: String,
    pub(crate) results: SearchResults,
}

impl SearchState {
    pub(crate) fn set_input(&mut self, input: String) {
        self.results = search(&input);
        self.input = input;
    }

    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.results = SearchResults::Hidden;
    }
}
