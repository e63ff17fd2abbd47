mod about;
mod homepage;
mod nav;
mod projects;
mod resume;

use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::{
    catalog::CatalogError,
    site,
    state::{Page, UiState},
};
use about::AboutPage;
use homepage::HomePage;
use projects::ProjectsPage;
use resume::ResumePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href=site::asset_path("favicon.ico") />
                <link rel="stylesheet" id="leptos" href=site::asset_path("pkg/portfolio-site.css") />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Shared UI state, provided once by [`App`].
pub fn use_ui_state() -> RwSignal<UiState> {
    expect_context::<RwSignal<UiState>>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(UiState::new());
    provide_context(state);

    view! {
        <Title formatter=|title| format!("{} - {title}", site::OWNER_NAME) />

        <Router base=site::router_base()>
            // tailwind `dark:` variants resolve against this wrapper
            <div class=move || state.with(UiState::theme_class)>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PageView />
                </Routes>
            </div>
        </Router>
    }
}

/// Mounts the page view for the current page. Switching pages drops the
/// previous page's local signals.
#[component]
fn PageView() -> impl IntoView {
    let state = use_ui_state();
    let page = Memo::new(move |_| state.with(UiState::current_page));

    // `#resume` and friends select a page
    let location = use_location();
    Effect::new(move |_| match Page::from_fragment(&location.hash.get()) {
        Ok(Some(target)) => state.update(|s| s.navigate_to(target)),
        Ok(None) => {}
        Err(e) => log::warn!("ignoring fragment: {e}"),
    });

    view! {
        {move || match page.get() {
            Page::Home => EitherOf4::A(view! { <HomePage /> }),
            Page::Projects => EitherOf4::B(view! { <ProjectsPage /> }),
            Page::Resume => EitherOf4::C(view! { <ResumePage /> }),
            Page::About => EitherOf4::D(view! { <AboutPage /> }),
        }}
    }
}

#[component]
fn CatalogUnavailable(err: CatalogError) -> impl IntoView {
    view! {
        <p class="text-center text-rose-500 font-mono text-sm py-10">
            {format!("Content unavailable: {err}")}
        </p>
    }
}
