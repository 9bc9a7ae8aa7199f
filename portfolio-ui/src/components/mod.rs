//! UI Components
//!
//! Leptos components for the interactive parts of the page.

pub mod contact_form;
pub mod nav;
pub mod projects;
pub mod sparkles;
pub mod testimonials;
pub mod typewriter;

pub use contact_form::ContactForm;
pub use nav::Nav;
pub use projects::Projects;
pub use sparkles::Sparkles;
pub use testimonials::TestimonialsCarousel;
pub use typewriter::Typewriter;
