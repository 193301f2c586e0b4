//! FAQ accordion with at most one open panel

/// Class marking the open panel
pub const ACTIVE_CLASS: &str = "active";

/// Which panel of an accordion is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Pick up the panel the markup ships open.
    ///
    /// `active` lists, per panel, whether it carries [`ACTIVE_CLASS`]; only
    /// the first such panel stays open.
    pub fn from_markup<I>(active: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self::with_open(active.into_iter().position(|on| on))
    }

    /// Handle a click on the header of panel `index`.
    ///
    /// A closed panel opens and closes every other one; the open panel closes.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
