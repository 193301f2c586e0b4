//! Scroll reveal animation styles

/// Class added once an element has scrolled into view
pub const REVEAL_CLASS: &str = "animate-in";

/// Vertical offset of a hidden element, in pixels
pub const REVEAL_OFFSET_PX: u32 = 30;

/// Inline styles applied to every reveal target before it is observed,
/// so elements never flash in their final position first.
pub fn hidden_styles() -> [(&'static str, String); 3] {
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({REVEAL_OFFSET_PX}px)")),
        (
            "transition",
            "opacity 0.6s ease, transform 0.6s ease".to_string(),
        ),
    ]
}

/// Stylesheet injected into `<head>` so the reveal class wins over inline styles
pub fn stylesheet() -> String {
    format!(
        "\n    .{REVEAL_CLASS} {{\n        opacity: 1 !important;\n        transform: translateY(0) !important;\n    }}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_styles() {
        let styles = hidden_styles();
        assert_eq!(styles[0], ("opacity", "0".to_string()));
        assert_eq!(styles[1], ("transform", "translateY(30px)".to_string()));
        assert!(styles[2].1.contains("opacity 0.6s"));
    }

    #[test]
    fn test_stylesheet_overrides_hidden_state() {
        let css = stylesheet();
        assert!(css.contains(".animate-in {"));
        assert!(css.contains("opacity: 1 !important;"));
        assert!(css.contains("transform: translateY(0) !important;"));
    }
}
