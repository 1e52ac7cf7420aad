use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::config::HEADER_OFFSET;

/// The parts of the browser window the page scrolls through.
pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;
    /// Distance from the viewport top to the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    /// `location.hash`, including the leading `#`.
    pub fn hash(&self) -> Option<String> {
        self.window.location().hash().ok()
    }
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Document offset that puts an element `element_top` px below the viewport top
/// just under the fixed header.
pub fn anchor_target(scroll_y: f64, element_top: f64) -> f64 {
    scroll_y + element_top - HEADER_OFFSET
}

/// Smoothly scrolls to the section with `id`. Unknown ids are ignored.
pub fn scroll_to_section<V: Viewport + ?Sized>(viewport: &V, id: &str) -> Option<f64> {
    let Some(element_top) = viewport.element_top(id) else {
        debug!("No anchor target #{}, skipping scroll", id);
        return None;
    };
    let target = anchor_target(viewport.scroll_y(), element_top);
    viewport.smooth_scroll_to(target);
    Some(target)
}

pub fn scroll_to_top<V: Viewport + ?Sized>(viewport: &V) {
    viewport.smooth_scroll_to(0.0);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::Viewport;

    /// Headless page: sections sit at fixed document offsets and smooth scrolls land instantly.
    #[derive(Default)]
    pub struct FakeViewport {
        pub scroll_y: Cell<f64>,
        pub sections: HashMap<&'static str, f64>,
        pub requests: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        pub fn with_sections(sections: &[(&'static str, f64)]) -> Self {
            Self {
                sections: sections.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).map(|doc_top| doc_top - self.scroll_y.get())
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
            self.scroll_y.set(top);
        }
    }
}
