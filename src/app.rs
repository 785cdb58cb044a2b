mod accessibility;
mod desktop;
mod era_container;
mod era_context;
mod era_navigation;
mod homepage;
mod particles;
mod project;
mod scroll_indicator;
mod typography;

use accessibility::provide_preferences_context;
use era_context::EraProvider;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use project::ProjectPage;

use crate::theme::all_css_vars;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" style=all_css_vars()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/era-portfolio.css" />
                <MetaTags />
            </head>
            <body class="overflow-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_preferences_context();

    view! {
        <Title formatter=|title| format!("Through the Eras - {title}") />

        <Router>
            <EraProvider>
                <main class="min-h-screen w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/:project") view=ProjectPage />
                    </Routes>
                </main>
            </EraProvider>
        </Router>
    }
}
