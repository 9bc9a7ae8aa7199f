//! Testimonials Carousel
//!
//! One quote at a time, with arrows, dots, and a timed auto-advance.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

use crate::content::Testimonial;
use crate::widgets::{now_ms, AutoAdvance, CarouselState, AUTO_ADVANCE_MS};

#[component]
pub fn TestimonialsCarousel(testimonials: &'static [Testimonial]) -> impl IntoView {
    let carousel = create_rw_signal(CarouselState::new(testimonials.len()));

    // Nothing to rotate through without at least one quote
    if testimonials.is_empty() {
        return ().into_view();
    }

    let schedule = Rc::new(RefCell::new(AutoAdvance::new(AUTO_ADVANCE_MS)));
    schedule.borrow_mut().start(now_ms());

    let interval = {
        let schedule = schedule.clone();
        Interval::new(AUTO_ADVANCE_MS, move || {
            if schedule.borrow_mut().tick(now_ms()) {
                carousel.try_update(|c| c.next());
            }
        })
    };

    on_cleanup(move || {
        schedule.borrow_mut().stop();
        drop(interval);
    });

    let navigation = move || carousel.with(|c| c.navigation_enabled());

    let announcement = move || {
        carousel
            .with(|c| c.current(testimonials).map(|t| format!("Testimonial from {}", t.name)))
            .unwrap_or_default()
    };

    view! {
        <div class="relative max-w-4xl mx-auto" role="region" aria-roledescription="carousel">
            <p class="sr-only" aria-live="polite">{announcement}</p>
            <div class="overflow-hidden rounded-2xl">
                <div
                    class="flex transition-transform duration-500 ease-in-out"
                    style=move || format!(
                        "transform: translateX(-{}%)",
                        carousel.with(|c| c.track_offset_percent())
                    )
                >
                    {testimonials
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
                        .collect_view()}
                </div>
            </div>

            // Arrows
            <button
                on:click=move |_| carousel.update(|c| c.previous())
                disabled=move || !navigation()
                class="absolute left-4 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-card border border-border shadow-lg hover:bg-muted"
                aria-label="Previous testimonial"
            >
                "‹"
            </button>
            <button
                on:click=move |_| carousel.update(|c| c.next())
                disabled=move || !navigation()
                class="absolute right-4 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-card border border-border shadow-lg hover:bg-muted"
                aria-label="Next testimonial"
            >
                "›"
            </button>

            // Dots
            <div class="flex justify-center mt-8 space-x-2">
                {(0..testimonials.len())
                    .map(|index| view! {
                        <button
                            on:click=move |_| {
                                carousel.update(|c| {
                                    c.jump_to(index);
                                });
                            }
                            class=move || {
                                if carousel.with(|c| c.is_current(index)) {
                                    "w-3 h-3 rounded-full transition-all duration-300 bg-primary scale-125"
                                } else {
                                    "w-3 h-3 rounded-full transition-all duration-300 bg-muted-foreground/30 hover:bg-muted-foreground/50"
                                }
                            }
                            aria-label=format!("Show testimonial {}", index + 1)
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="w-full flex-shrink-0 p-8 md:p-12 bg-card border border-border">
            <div class="text-center">
                <div class="flex justify-center mb-6 text-yellow-400">
                    {(0..testimonial.stars()).map(|_| view! { <span>"★"</span> }).collect_view()}
                </div>
                <blockquote class="text-lg md:text-xl text-foreground mb-8 leading-relaxed italic">
                    "\"" {testimonial.content} "\""
                </blockquote>
                <div class="font-heading font-semibold text-foreground text-lg">
                    {testimonial.name}
                </div>
                <div class="text-muted-foreground">{testimonial.role}</div>
            </div>
        </div>
    }
}
