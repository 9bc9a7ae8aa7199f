//! Sparkles Component
//!
//! Decorative particle overlay driven by a [`SparkleField`].

use gloo_timers::callback::Interval;
use leptos::*;

use crate::widgets::{now_ms, SparkleField, DEFAULT_PARTICLE_COUNT, SPAWN_INTERVAL_MS};

fn random() -> f64 {
    js_sys::Math::random()
}

/// Particle overlay filling its positioned parent
#[component]
pub fn Sparkles(
    #[prop(into, optional)]
    class: String,
    #[prop(default = DEFAULT_PARTICLE_COUNT)]
    particle_count: usize,
) -> impl IntoView {
    let field = create_rw_signal(SparkleField::new());
    field.update(|f| f.prime(now_ms(), particle_count, &mut random));

    // One timer spawns and sweeps
    let interval = Interval::new(SPAWN_INTERVAL_MS, move || {
        field.try_update(|f| f.tick(now_ms(), &mut random));
    });

    on_cleanup(move || {
        drop(interval);
        field.try_update(|f| f.stop());
    });

    view! {
        <div class=format!("absolute inset-0 overflow-hidden pointer-events-none {}", class)>
            <For
                each=move || field.with(|f| f.visible().cloned().collect::<Vec<_>>())
                key=|sparkle| sparkle.id
                children=|sparkle| view! {
                    <div
                        class="absolute w-1 h-1 bg-primary rounded-full sparkle"
                        style=sparkle.style()
                    />
                }
            />
        </div>
    }
}
