//! Ambient page effects
//!
//! Small stateless computations behind the navigation bar, mobile menu, smooth
//! scrolling, hero parallax, the spots pulse and gallery press feedback.

use std::time::Duration;

/// Scroll distance after which the navigation bar switches style
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

/// Class added to the navigation bar once the page is scrolled
pub const NAV_SCROLLED_CLASS: &str = "scrolled";

/// Class shared by the open mobile menu and its button
pub const MENU_ACTIVE_CLASS: &str = "active";

/// Height of the fixed header kept clear when scrolling to an anchor
pub const HEADER_OFFSET: f64 = 80.0;

/// Hero background moves at this fraction of the scroll speed
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Time between two pulses of the spots label
pub const PULSE_INTERVAL: Duration = Duration::from_secs(30);

/// Length of one pulse
pub const PULSE_DURATION: Duration = Duration::from_millis(300);

pub const PULSE_TRANSFORM: &str = "scale(1.1)";
pub const PULSE_REST_TRANSFORM: &str = "scale(1)";
pub const PULSE_TRANSITION: &str = "transform 0.3s ease";

/// Gallery item press feedback
pub const PRESS_TRANSFORM: &str = "scale(0.98)";
pub const PRESS_DURATION: Duration = Duration::from_millis(150);

/// Whether the navigation bar should carry the scrolled style
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Document offset to scroll to so that an anchor target sits below the header.
///
/// `element_top` is the target's viewport-relative top, `page_offset` the
/// current vertical scroll.
pub fn anchor_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Hero background offset for the current scroll, or `None` past the first viewport
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * PARALLAX_FACTOR)
}

/// CSS transform for a parallax offset
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Whether a gallery item has an image worth giving press feedback for
pub fn has_background_image(background_image: &str) -> bool {
    let value = background_image.trim();
    !value.is_empty() && value != "none"
}

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Start from the state the markup ships with
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    /// Flip the menu; returns whether it is now open
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu, e.g. after a link inside it was followed
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Styled lines printed to the browser console at startup
pub const CONSOLE_BANNER: [(&str, &str); 3] = [
    (
        "%c🪓 КОЛУН",
        "font-size: 24px; font-weight: bold; color: #8B4513;",
    ),
    (
        "%cМужской ретрит по колке дров | Нижний Новгород",
        "font-size: 14px; color: #666;",
    ),
    ("%cРазбей рутину.", "font-size: 12px; color: #999;"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(100.0));
        assert!(nav_is_scrolled(100.5));
        assert!(nav_is_scrolled(2400.0));
    }

    #[test]
    fn test_anchor_scroll_top() {
        // Target 500px below the viewport top while scrolled by 1000px
        assert_eq!(anchor_scroll_top(500.0, 1000.0), 1420.0);
        // Target above the viewport
        assert_eq!(anchor_scroll_top(-300.0, 1000.0), 620.0);
    }

    #[test]
    fn test_parallax_below_ceiling() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(400.0, 800.0), Some(200.0));
        assert_eq!(parallax_offset(799.0, 800.0), Some(399.5));
    }

    #[test]
    fn test_parallax_stops_after_first_viewport() {
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(5000.0, 800.0), None);
    }

    #[test]
    fn test_parallax_transform() {
        assert_eq!(parallax_transform(200.0), "translateY(200px)");
        assert_eq!(parallax_transform(12.5), "translateY(12.5px)");
    }

    #[test]
    fn test_has_background_image() {
        assert!(has_background_image("url(\"/img/forest.jpg\")"));
        assert!(!has_background_image(""));
        assert!(!has_background_image("none"));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_mobile_menu_shipped_open() {
        let mut menu = MobileMenu::with_open(true);
        assert!(menu.is_open());
        assert!(!menu.toggle());

        let mut menu = MobileMenu::with_open(true);
        menu.close();
        assert_eq!(menu, MobileMenu::default());
    }

    #[test]
    fn test_pulse_timing() {
        assert_eq!(PULSE_INTERVAL.as_millis(), 30_000);
        assert_eq!(PULSE_DURATION.as_millis(), 300);
    }
}
