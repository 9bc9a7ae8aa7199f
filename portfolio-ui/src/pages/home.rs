//! Home Page
//!
//! The single scrolling page. Every section carries the element id the
//! navigation scrolls to and the section tracker reports.

use leptos::*;

use crate::components::{ContactForm, Projects, Sparkles, TestimonialsCarousel, Typewriter};
use crate::content::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, FIVERR_LINK, HEADLINE, HEADLINE_DELAY_MS,
    HERO_PARTICLES, OWNER_NAME, ROLES, SKILL_GROUPS, SOCIAL_LINKS, TAGLINE, TESTIMONIALS,
};
use crate::state::{use_section_tracking, GlobalState};
use crate::widgets::Section;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    use_section_tracking(state.tracker);

    view! {
        <HeroSection />
        <SkillsSection />
        <ExperienceSection />
        <ProjectsSection />
        <TestimonialsSection />
        <ContactSection />
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="font-heading font-bold text-3xl md:text-4xl mb-4">{title}</h2>
            <p class="text-muted-foreground text-lg max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section
            id=Section::Hero.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-16"
        >
            <Sparkles class="opacity-30" particle_count=HERO_PARTICLES />
            <div class="relative z-10 text-center px-4">
                <p class="text-accent font-medium mb-4">"Hi, I'm " {OWNER_NAME}</p>
                <h1 class="font-heading font-bold text-4xl md:text-6xl mb-6">
                    <Typewriter text=HEADLINE delay=HEADLINE_DELAY_MS />
                </h1>
                <p class="text-muted-foreground text-lg md:text-xl max-w-3xl mx-auto mb-10">
                    {TAGLINE}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        on:click=move |_| state.scroll_to(Section::Projects)
                        class="px-8 py-3 bg-primary text-primary-foreground rounded-md font-medium hover:bg-primary/90"
                    >
                        "View My Work"
                    </button>
                    <button
                        on:click=move |_| state.scroll_to(Section::Contact)
                        class="px-8 py-3 border border-border rounded-md font-medium hover:bg-muted"
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I use to bring ideas to life"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| view! {
                            <div class="bg-card border border-border rounded-xl p-8">
                                <h3 class="font-heading font-semibold text-xl mb-6">{group.title}</h3>
                                <div class="flex flex-wrap gap-3">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| view! {
                                            <span class="px-3 py-1.5 rounded-full bg-muted text-sm">{*skill}</span>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    title="Experience"
                    subtitle="What I have been building for clients and teams"
                />
                <div class="space-y-8">
                    {ROLES
                        .iter()
                        .map(|role| view! {
                            <div class="border-l-2 border-primary pl-6">
                                <h3 class="font-heading font-semibold text-xl">{role.title}</h3>
                                <p class="text-accent text-sm mb-4">{role.summary}</p>
                                <ul class="space-y-2 text-muted-foreground">
                                    {role
                                        .highlights
                                        .iter()
                                        .map(|item| view! { <li>"• " {*item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of recent work across React and WordPress"
                />
                <Projects />
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Client Testimonials"
                    subtitle="What people say about working with me"
                />
                <TestimonialsCarousel testimonials=TESTIMONIALS />
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind? Send me a message."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <ContactDetail label="Email" value=CONTACT_EMAIL />
                        <ContactDetail label="Phone" value=CONTACT_PHONE />
                        <ContactDetail label="Location" value=CONTACT_LOCATION />
                        <div class="flex gap-4 pt-4">
                            {SOCIAL_LINKS
                                .iter()
                                .chain(std::iter::once(&FIVERR_LINK))
                                .map(|link| view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-4 py-2 border border-border rounded-md text-sm hover:bg-muted"
                                    >
                                        {link.label}
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="bg-card border border-border rounded-xl p-8">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm text-muted-foreground">{label}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}
