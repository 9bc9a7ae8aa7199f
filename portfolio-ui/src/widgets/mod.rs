//! Widget State
//!
//! DOM-free state machines behind the interactive parts of the page.
//! Components in `crate::components` own timers and observers and feed
//! these with the current time, random numbers, and visibility events.

pub mod carousel;
pub mod contact_form;
pub mod section_tracker;
pub mod sparkles;
pub mod typewriter;

pub use carousel::{AutoAdvance, CarouselState, AUTO_ADVANCE_MS};
pub use contact_form::{ContactDraft, ContactField, SubmitOutcome};
pub use section_tracker::{Section, SectionTracker, Visibility};
pub use sparkles::{SparkleField, DEFAULT_PARTICLE_COUNT, SPAWN_INTERVAL_MS};
pub use typewriter::TypewriterState;

/// Wall-clock milliseconds, the time base every widget runs on
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
