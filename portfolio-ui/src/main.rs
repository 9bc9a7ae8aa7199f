//! Portfolio Page
//!
//! Single-page portfolio built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. The interactive parts
//! (section tracking, sparkles, testimonials, typewriter, contact form) keep
//! their state in the DOM-free machines under [`widgets`]; components own the
//! timers and browser observers that drive them. The contact form posts to
//! the portfolio server over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod content;
mod pages;
mod state;
mod widgets;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
