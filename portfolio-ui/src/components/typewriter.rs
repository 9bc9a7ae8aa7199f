use gloo_timers::callback::Interval;
use leptos::*;

use crate::widgets::TypewriterState;

/// Reveals `text` one character every `delay` milliseconds
#[component]
pub fn Typewriter(
    text: &'static str,
    #[prop(default = 100)]
    delay: u32,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let state = create_rw_signal(TypewriterState::new(text));

    // Keeps firing as a no-op once the text is complete; dropped on cleanup
    let interval = Interval::new(delay, move || {
        state.try_update(|s| s.tick());
    });
    on_cleanup(move || drop(interval));

    view! {
        <span class=class>
            {move || state.with(|s| s.visible())}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}
