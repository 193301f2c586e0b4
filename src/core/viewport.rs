//! One-shot viewport visibility tracking
//!
//! The browser reports intersection changes in batches; [`ViewportRegistry`]
//! turns those reports into a single "became visible" signal per element and
//! forgets the element afterwards.

/// How much of an element must be visible before it counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverPolicy {
    /// Fraction of the element that must intersect, 0.0..=1.0
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    pub root_margin: &'static str,
}

impl ObserverPolicy {
    /// Policy for generic reveal animations
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };

    /// Policy for stat blocks, which must be half visible
    pub const STATS: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };
}

/// Elements still waiting for their first visibility signal
#[derive(Debug, Clone)]
pub struct ViewportRegistry<T> {
    pending: Vec<T>,
}

impl<T: PartialEq> ViewportRegistry<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Start watching an element. Returns `false` if it is already watched.
    pub fn register(&mut self, element: T) -> bool {
        if self.pending.contains(&element) {
            return false;
        }
        self.pending.push(element);
        true
    }

    /// Process one batch of `(element, is_intersecting)` reports.
    ///
    /// Returns the elements that became visible for the first time, in report
    /// order. They are unregistered, so later reports for them are ignored.
    pub fn take_visible<I>(&mut self, entries: I) -> Vec<T>
    where
        I: IntoIterator<Item = (T, bool)>,
    {
        let mut visible = Vec::new();
        for (element, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(index) = self.pending.iter().position(|e| *e == element) {
                visible.push(self.pending.swap_remove(index));
            }
        }
        visible
    }

    pub fn contains(&self, element: &T) -> bool {
        self.pending.contains(element)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T: PartialEq> Default for ViewportRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
