//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{console::ConsolePage, dashboard::DashboardPage};
use crate::state::{branches::BranchesState, console::ConsoleState, recordings::RecordingsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-session state contexts and sets up client-side
/// routing. Each context owns what used to be an ambient script global:
/// the poll loop handle, the recordings in-flight flag, and the console
/// configuration record.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let branches = RwSignal::new(BranchesState::default());
    let recordings = RwSignal::new(RecordingsState::default());
    let console = RwSignal::new(ConsoleState::default());

    provide_context(branches);
    provide_context(recordings);
    provide_context(console);

    view! {
        <Stylesheet id="leptos" href="/pkg/dispatchboard-ui.css"/>
        <Title text="Branch Control Panel"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("console") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
