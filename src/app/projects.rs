use leptos::{either::Either, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use super::{nav::PageChrome, use_ui_state, CatalogUnavailable};
use crate::{
    catalog::{catalog, Catalog, Project},
    state::{Page, UiState},
};

const LIGHT_MASK: &str = "rgba(241, 245, 249, 0.98)";
const DARK_MASK: &str = "rgba(2, 6, 23, 0.98)";

/// Radial mask that leaves a clear circle around the pointer.
fn flashlight_style(x: f64, y: f64, dark: bool) -> String {
    let mask = if dark { DARK_MASK } else { LIGHT_MASK };
    format!(
        "background: radial-gradient(circle 380px at {:.0}px {:.0}px, transparent 185px, {} 187px)",
        x, y, mask
    )
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text=Page::Projects.title() />
        {match catalog() {
            Ok(c) => Either::Left(view! { <ProjectBrowser catalog=c /> }),
            Err(err) => Either::Right(view! { <CatalogUnavailable err /> }),
        }}
    }
}

#[component]
fn ProjectBrowser(catalog: &'static Catalog) -> impl IntoView {
    let state = use_ui_state();
    let container = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        ..
    } = use_mouse_in_element(container);
    let (selected, set_selected) = signal(None::<u32>);

    let select = move |id: u32| {
        set_selected.set(Some(id));
        state.update(UiState::close_menu);
    };

    let cards = catalog
        .projects
        .iter()
        .map(|p| view! { <ProjectCard project=p on_select=select /> })
        .collect_view();

    view! {
        <div
            node_ref=container
            class="relative w-full min-h-screen bg-slate-50 dark:bg-slate-950 overflow-hidden cursor-crosshair transition-colors duration-300"
        >
            <PageChrome open_only=true />
            <div class="absolute inset-0 z-0 px-10 overflow-y-auto">
                <div class="max-w-7xl mx-auto">
                    <div class="relative z-20 pt-24 pointer-events-none">
                        <h2 class="text-4xl md:text-6xl font-black text-slate-600 dark:text-slate-400 uppercase tracking-tighter select-none">
                            "Projects"
                        </h2>
                    </div>
                    <div class="relative z-0 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4 pt-20 pb-20">
                        {cards}
                    </div>
                </div>
                // flashlight mask, desktop only and hidden while a project is open
                <Show when=move || selected.get().is_none()>
                    <div
                        class="hidden md:block absolute inset-0 z-10 pointer-events-none transition-colors duration-500"
                        style=move || {
                            flashlight_style(
                                element_x.get(),
                                element_y.get(),
                                state.with(UiState::dark_mode),
                            )
                        }
                    />
                </Show>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|id| catalog.project(id))
                    .map(|p| view! { <ProjectModal project=p on_close=move || set_selected.set(None) /> })
            }}
        </div>
    }
}

#[component]
fn ProjectCard<F>(project: &'static Project, on_select: F) -> impl IntoView
where
    F: Fn(u32) + Copy + Send + Sync + 'static,
{
    let id = project.id;
    let tags = project
        .preview_tags()
        .iter()
        .map(|t| {
            view! {
                <span class="text-[10px] uppercase tracking-wider bg-slate-100 dark:bg-slate-800 text-slate-500 dark:text-slate-400 px-2 py-1 rounded">
                    {t.as_str()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="group relative bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800 aspect-square rounded-xl p-6 cursor-pointer overflow-hidden hover:border-slate-400 dark:hover:border-slate-600 transition-colors shadow-sm dark:shadow-none"
            on:click=move |_| on_select(id)
        >
            <div class=format!("absolute top-0 left-0 w-full h-1 bg-gradient-to-r {}", project.accent) />
            <div class="h-full flex flex-col justify-between">
                <div>
                    <span class="text-xs font-mono text-slate-400 dark:text-slate-500 mb-2 block">
                        {format!("{} // PROJECT", project.number())}
                    </span>
                    <h3 class="text-xl font-bold text-slate-900 dark:text-slate-200 mb-2 group-hover:text-indigo-600 dark:group-hover:text-white transition-colors">
                        {project.title.as_str()}
                    </h3>
                </div>
                <div>
                    <p class="text-sm text-slate-600 dark:text-slate-400 line-clamp-3 mb-4">
                        {project.summary.as_str()}
                    </p>
                    <div class="flex flex-wrap gap-2">{tags}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal<F>(project: &'static Project, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let tags = project
        .tags
        .iter()
        .map(|t| {
            view! {
                <span class="px-3 py-1 bg-slate-100 dark:bg-slate-800 border border-slate-200 dark:border-slate-700 rounded-full text-xs font-bold text-slate-600 dark:text-slate-300 uppercase tracking-wider">
                    {t.as_str()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 md:p-10">
            <div
                class="absolute inset-0 bg-slate-50/80 dark:bg-black/80 backdrop-blur-sm"
                on:click=move |_| on_close()
            />
            <div class="relative w-full max-w-2xl bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-700 rounded-2xl overflow-hidden shadow-2xl">
                <div class=format!("h-2 w-full bg-gradient-to-r {}", project.accent) />
                <button
                    class="absolute top-4 right-4 p-2 bg-slate-100 dark:bg-black/20 hover:bg-slate-200 dark:hover:bg-black/40 rounded-full text-slate-900 dark:text-white transition-colors"
                    aria-label="Close project"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_close();
                    }
                >
                    "✕"
                </button>
                <div class="p-8 md:p-12">
                    <span class="text-xs font-bold text-slate-400 dark:text-slate-500 uppercase tracking-widest">
                        {format!("Project {}", project.number())}
                    </span>
                    <h2 class="text-3xl md:text-4xl font-black text-slate-900 dark:text-white mt-2 mb-6">
                        {project.title.as_str()}
                    </h2>
                    <p class="text-lg text-slate-600 dark:text-slate-300 leading-relaxed mb-8">
                        {project.details.as_str()}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-8">{tags}</div>
                    {project
                        .link
                        .as_deref()
                        .map(|href| {
                            view! {
                                <div class="flex gap-4">
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noreferrer"
                                        class="flex items-center gap-2 bg-slate-900 dark:bg-white text-white dark:text-slate-900 px-6 py-3 rounded-lg font-bold hover:bg-slate-700 dark:hover:bg-slate-200 transition-colors"
                                    >
                                        <i class="devicon-github-plain" />
                                        "View Code"
                                    </a>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashlight_style() {
        assert_eq!(
            flashlight_style(120.4, 88.6, false),
            "background: radial-gradient(circle 380px at 120px 89px, transparent 185px, rgba(241, 245, 249, 0.98) 187px)"
        );
        assert!(flashlight_style(0.0, 0.0, true).ends_with("rgba(2, 6, 23, 0.98) 187px)"));
    }
}
