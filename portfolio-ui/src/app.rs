//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::content::OWNER_NAME;
use crate::pages::Home;
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-background text-foreground">
                <Nav />

                <main>
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border text-center text-sm text-muted-foreground">
            {format!("© 2025, {}.", OWNER_NAME)}
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-muted-foreground mb-6">"Oops! Page not found"</p>
            <A href="/" class="text-primary underline hover:text-primary/80">
                "Return to Home"
            </A>
        </div>
    }
}
