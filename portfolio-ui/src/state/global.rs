//! Global Application State
//!
//! Reactive state shared across the page using Leptos signals.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::widgets::{Section, SectionTracker};

/// Page-wide state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Which section the navigation highlights
    pub tracker: RwSignal<SectionTracker>,
    /// Whether the small-screen menu is expanded
    pub menu_open: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        tracker: create_rw_signal(SectionTracker::default()),
        menu_open: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_active(&self, section: Section) -> bool {
        self.tracker.with(|t| t.is_active(section))
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Smooth-scroll to a section and collapse the mobile menu
    pub fn scroll_to(&self, section: Section) {
        match document().get_element_by_id(section.id()) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => {
                web_sys::console::warn_1(&format!("No element for section {}", section).into());
            }
        }
        self.menu_open.set(false);
    }
}

/// Show a blocking notification
pub fn notify(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        web_sys::console::error_1(&e);
    }
}
