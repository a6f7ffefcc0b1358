use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Extract the element id from an in-page anchor href.
///
/// Returns `None` for anything that is not a non-empty `#fragment` link.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll the element addressed by an in-page anchor into view.
/// Missing targets are ignored.
pub fn scroll_to_fragment(href: &str) {
    let id = match fragment_id(href) {
        Some(id) => id,
        None => return,
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(target) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options
                .behavior(ScrollBehavior::Smooth)
                .block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Current vertical scroll offset of the window, 0.0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::fragment_id;

    #[test]
    fn fragment_id_strips_leading_hash() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#stats"), Some("stats"));
    }

    #[test]
    fn non_fragment_links_are_rejected() {
        assert_eq!(fragment_id("/input"), None);
        assert_eq!(fragment_id("https://example.com/#x"), None);
        assert_eq!(fragment_id("#"), None);
    }
}
