//! Projects Component
//!
//! Tabbed project grid.

use leptos::*;

use crate::content::{Project, ProjectKind};

#[component]
pub fn Projects() -> impl IntoView {
    let active = create_rw_signal(ProjectKind::Code);

    view! {
        <div>
            <div class="flex justify-center mb-12">
                <div class="inline-flex bg-muted rounded-lg p-1">
                    <ProjectTab kind=ProjectKind::Code active=active />
                    <ProjectTab kind=ProjectKind::WordPress active=active />
                </div>
            </div>

            {move || {
                let kind = active.get();
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {kind
                            .projects()
                            .iter()
                            .map(|project| view! { <ProjectCard project=*project kind=kind /> })
                            .collect_view()}
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn ProjectTab(kind: ProjectKind, active: RwSignal<ProjectKind>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| active.set(kind)
            class=move || {
                if active.get() == kind {
                    "px-6 py-2 rounded-md font-medium transition-all bg-primary text-primary-foreground shadow-md"
                } else {
                    "px-6 py-2 rounded-md font-medium transition-all text-muted-foreground hover:text-foreground"
                }
            }
        >
            {kind.label()}
        </button>
    }
}

#[component]
fn ProjectCard(project: Project, kind: ProjectKind) -> impl IntoView {
    let title_class = if project.featured {
        "font-heading font-semibold text-2xl mb-3"
    } else {
        "font-heading font-semibold text-xl mb-3"
    };

    view! {
        <div class=format!(
            "group bg-card border border-border rounded-xl overflow-hidden hover:shadow-xl transition-all {}",
            project.span
        )>
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-500"
                />
                {project.featured.then(|| view! {
                    <span class="absolute top-4 left-4 px-3 py-1 rounded-full bg-accent text-accent-foreground text-xs font-medium">
                        "Featured"
                    </span>
                })}
            </div>
            <div class="p-6">
                <h3 class=title_class>{project.title}</h3>
                <p class="text-muted-foreground mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .badges(kind)
                        .iter()
                        .map(|tech| view! {
                            <span class="px-2 py-1 rounded bg-muted text-xs">{*tech}</span>
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    {project.code_href().map(|href| view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-3 py-1.5 border border-border rounded-md text-sm hover:bg-muted"
                        >
                            "Code"
                        </a>
                    })}
                    <a
                        href=project.live_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-3 py-1.5 bg-primary text-primary-foreground rounded-md text-sm hover:bg-primary/90"
                    >
                        "Live Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
