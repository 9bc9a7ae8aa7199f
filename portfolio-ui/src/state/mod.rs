//! State Management
//!
//! Global page state and the browser-facing section observer.

pub mod global;
pub mod observer;

pub use global::{notify, provide_global_state, GlobalState};
pub use observer::use_section_tracking;
