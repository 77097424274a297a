use crate::PageId;

/// Tracks the active page and the ordered navigation controls.
///
/// The active page is the only view state; the highlighted control, the
/// visible panel and the breadcrumb are all derived from it, so they cannot
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    controls: Vec<PageId>,
    active: PageId,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(PageId::ALL.to_vec())
    }
}

impl Router {
    pub fn new(controls: Vec<PageId>) -> Self {
        Self {
            controls,
            active: PageId::default(),
        }
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn controls(&self) -> &[PageId] {
        &self.controls
    }

    pub fn breadcrumb(&self) -> &'static str {
        self.active.title()
    }

    /// Position of the active page in the control list, if it has a control.
    pub fn active_index(&self) -> Option<usize> {
        self.controls.iter().position(|page| *page == self.active)
    }

    /// Activates the page named by `raw`. Unknown ids leave the router untouched.
    pub(crate) fn navigate_to(&mut self, raw: &str) -> Option<PageId> {
        let page = PageId::parse(raw)?;
        self.active = page;
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let router = Router::default();
        assert_eq!(router.active(), PageId::Home);
        assert_eq!(router.active_index(), Some(0));
        assert_eq!(router.breadcrumb(), "🏠 Home");
    }

    #[test]
    fn unknown_target_is_ignored() {
        let mut router = Router::default();
        router.navigate_to("about");
        let before = router.clone();
        assert_eq!(router.navigate_to("nowhere"), None);
        assert_eq!(router, before);
    }

    #[test]
    fn active_page_without_control_has_no_index() {
        let router = Router::new(vec![PageId::About, PageId::Stories]);
        assert_eq!(router.active(), PageId::Home);
        assert_eq!(router.active_index(), None);
    }
}
