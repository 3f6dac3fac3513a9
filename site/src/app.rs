//! Root application component and the in-memory view controller.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{
    contact::ContactPage, expertise::ExpertisePage, home::HomePage, project_detail::ProjectDetailPage,
    work::WorkPage,
};
use crate::state::nav::{NavState, Page, ViewKey};
use crate::util::scroll_fx::scroll_to_top;

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
/// The site is a single document; page switching happens in `SiteShell`
/// without touching the URL. Other paths get the router fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/rebirth-studio.css"/>
        <Title text="Rebirth Studio"/>
        <Meta name="description" content="Rebirth Creative Studio. Redesigning the cultural landscape."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SiteShell/>
            </Routes>
        </Router>
    }
}

/// Navigation state holder: navbar, the one mounted view, footer.
///
/// Views get the current page read-only plus `Callback` setters. The mounted
/// view is derived from `NavState::view_key`; when the key changes the old
/// view is dropped (running its cleanups) and the window scrolls to the top.
#[component]
fn SiteShell() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let on_navigate = Callback::new(move |page: Page| nav.update(|n| n.navigate(page)));
    let on_navigate_to_project = Callback::new(move |id: String| nav.update(|n| n.navigate_to_project(id)));

    let current_page = Signal::derive(move || nav.with(|n| n.page));
    let view_key = Memo::new(move |_| nav.with(NavState::view_key));

    Effect::new(move |prev: Option<ViewKey>| {
        let key = view_key.get();
        if prev.is_some_and(|p| p != key) {
            #[cfg(feature = "hydrate")]
            log::debug!("view -> {}", key.page().slug());
            scroll_to_top(false);
        }
        key
    });

    let render_view = move || {
        let key = view_key.get();
        let slug = key.page().slug();
        let body = match key {
            ViewKey::Home => view! { <HomePage on_navigate/> }.into_any(),
            ViewKey::Expertise => view! { <ExpertisePage on_navigate/> }.into_any(),
            ViewKey::Work => view! { <WorkPage on_navigate on_navigate_to_project/> }.into_any(),
            ViewKey::Project(project_id) => {
                view! { <ProjectDetailPage project_id on_navigate on_navigate_to_project/> }.into_any()
            }
            ViewKey::Contact => view! { <ContactPage/> }.into_any(),
        };
        view! {
            <div class="page-enter" data-page=slug>
                {body}
            </div>
        }
    };

    view! {
        <div class="site">
            <Navbar current_page on_navigate/>
            <main class="site__main">{render_view}</main>
            <Footer on_navigate/>
        </div>
    }
}
