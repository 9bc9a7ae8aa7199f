//! Navigation Component
//!
//! Fixed header with section links, highlighted by the section tracker.

use leptos::*;

use crate::content::BRAND;
use crate::state::GlobalState;
use crate::widgets::Section;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="fixed top-0 w-full bg-background/90 backdrop-blur-md border-b border-border z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Brand
                    <div class="font-heading font-bold text-xl text-primary">
                        <span class="text-accent">"<"</span>
                        {BRAND}
                        <span class="text-accent">"/>"</span>
                    </div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        {Section::ALL
                            .into_iter()
                            .filter(Section::in_desktop_links)
                            .map(|section| view! { <SectionLink section=section mobile=false /> })
                            .collect_view()}
                        <button
                            on:click=move |_| state.scroll_to(Section::Contact)
                            class="ml-4 px-3 py-1.5 rounded-md bg-primary text-primary-foreground text-sm font-medium"
                        >
                            {Section::Contact.label()}
                        </button>
                    </div>

                    // Mobile menu toggle
                    <div class="md:hidden">
                        <button
                            on:click=move |_| state.toggle_menu()
                            class="p-2 rounded-md hover:bg-muted"
                            aria-label="Toggle menu"
                        >
                            {move || if state.menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile navigation
                <Show when=move || state.menu_open.get()>
                    <div class="md:hidden py-4 border-t border-border">
                        <div class="flex flex-col space-y-4">
                            {Section::ALL
                                .into_iter()
                                .map(|section| view! { <SectionLink section=section mobile=true /> })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Single section link
#[component]
fn SectionLink(section: Section, mobile: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| state.scroll_to(section)
            class=move || {
                let base = if mobile {
                    "capitalize text-left transition-colors hover:text-primary"
                } else {
                    "capitalize transition-colors hover:text-primary"
                };
                if state.is_active(section) {
                    format!("{} text-primary", base)
                } else {
                    format!("{} text-muted-foreground", base)
                }
            }
        >
            {section.label()}
        </button>
    }
}
