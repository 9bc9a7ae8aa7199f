//! Section Observer
//!
//! Scoped subscription of the page's `section[id]` elements to an
//! `IntersectionObserver`. Every subscription is released when the
//! [`SectionObserver`] is disconnected or dropped.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::widgets::{SectionTracker, Visibility};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live visibility subscription feeding a [`SectionTracker`]
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl SectionObserver {
    /// Observe every `section[id]` currently in the document
    pub fn attach(tracker: RwSignal<SectionTracker>) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let reports: Vec<Visibility> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        Visibility::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                    })
                    .collect();

                tracker.try_update(|t| t.observe(reports));
            },
        );

        let threshold = tracker.with_untracked(|t| t.threshold());
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let sections = document().query_selector_all("section[id]")?;
        for i in 0..sections.length() {
            if let Some(element) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Release every subscription
    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Track the visible section for the lifetime of the calling component.
///
/// Attaching waits one animation frame so the sections exist in the DOM.
/// The observer is disconnected when the component is cleaned up.
pub fn use_section_tracking(tracker: RwSignal<SectionTracker>) {
    let slot: Rc<RefCell<Option<SectionObserver>>> = Rc::new(RefCell::new(None));
    let torn_down = Rc::new(RefCell::new(false));

    let attach_slot = Rc::clone(&slot);
    let attach_torn_down = Rc::clone(&torn_down);
    request_animation_frame(move || {
        if *attach_torn_down.borrow() {
            return;
        }
        match SectionObserver::attach(tracker) {
            Ok(observer) => *attach_slot.borrow_mut() = Some(observer),
            Err(e) => web_sys::console::error_2(&"Section tracking unavailable:".into(), &e),
        }
    });

    on_cleanup(move || {
        *torn_down.borrow_mut() = true;
        if let Some(observer) = slot.borrow_mut().take() {
            observer.disconnect();
        }
    });
}
