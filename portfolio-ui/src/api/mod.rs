//! API access for the page

mod client;

pub use client::submit_contact;
