use std::fmt;

/// One of the fixed set of views the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageId {
    #[default]
    Home,
    About,
    Stories,
    Contact,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::About,
        PageId::Stories,
        PageId::Contact,
    ];

    /// The `data-page` identifier used by controls that target this page.
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Stories => "stories",
            PageId::Contact => "contact",
        }
    }

    /// Resolves a raw page identifier. Matching is exact; anything else is unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        PageId::ALL.into_iter().find(|page| page.as_str() == raw)
    }

    /// Breadcrumb title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "🏠 Home",
            PageId::About => "ℹ️ About",
            PageId::Stories => "📚 Stories",
            PageId::Contact => "📧 Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static row of the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: &'static str,
    pub page: PageId,
    pub keywords: &'static str,
}

pub const SEARCH_INDEX: [SearchEntry; 4] = [
    SearchEntry {
        title: "Home",
        page: PageId::Home,
        keywords: "welcome start main",
    },
    SearchEntry {
        title: "About Kuzhi",
        page: PageId::About,
        keywords: "character info kuzhi underworld",
    },
    SearchEntry {
        title: "First Adventure",
        page: PageId::Stories,
        keywords: "story adventure journey",
    },
    SearchEntry {
        title: "Contact",
        page: PageId::Contact,
        keywords: "message email touch",
    },
];
