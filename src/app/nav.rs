use leptos::prelude::*;

use super::use_ui_state;
use crate::{
    site,
    state::{Page, UiState},
};

const FLOATING_BUTTON: &str = "p-3 bg-white/80 dark:bg-white/10 hover:bg-white dark:hover:bg-white/20 backdrop-blur-md rounded-full text-slate-900 dark:text-white transition-all border border-slate-200 dark:border-white/10 shadow-lg";
const MENU_ITEM: &str = "text-left hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors flex items-center gap-2";
const MENU_ITEM_ACTIVE: &str =
    "text-left text-indigo-700 dark:text-indigo-400 transition-colors flex items-center gap-2";

/// Back arrow, menu button, theme toggle and menu overlay for the sub-pages.
#[component]
pub fn PageChrome(#[prop(optional)] open_only: bool) -> impl IntoView {
    view! {
        <div class="fixed top-6 left-6 z-50">
            <BackHome />
        </div>
        <div class="fixed top-6 right-6 z-50">
            <MenuButton button_class=FLOATING_BUTTON open_only=open_only />
        </div>
        <ThemeToggle />
        <MenuOverlay />
    }
}

#[component]
pub fn BackHome() -> impl IntoView {
    let state = use_ui_state();
    view! {
        <a
            href=Page::Home.fragment()
            class=FLOATING_BUTTON
            aria-label="Go home"
            on:click=move |_| state.update(|s| s.navigate_to(Page::Home))
        >
            "←"
        </a>
    }
}

/// Opens the menu overlay. With `open_only` a second press leaves it open
/// instead of closing it.
#[component]
pub fn MenuButton(button_class: &'static str, #[prop(optional)] open_only: bool) -> impl IntoView {
    let state = use_ui_state();
    view! {
        <button
            class=button_class
            aria-label="Open menu"
            on:click=move |_| {
                if open_only {
                    state.update(UiState::open_menu)
                } else {
                    state.update(UiState::toggle_menu)
                }
            }
        >
            "☰"
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_ui_state();
    let dark = Memo::new(move |_| state.with(UiState::dark_mode));
    view! {
        <button
            class="fixed bottom-6 right-6 z-50 p-4 rounded-full bg-white dark:bg-slate-800 shadow-[0_8px_30px_rgb(0,0,0,0.12)] border border-slate-200 dark:border-slate-700 text-slate-900 dark:text-yellow-400 transition-colors hover:scale-110 active:scale-95"
            aria-label="Toggle theme"
            on:click=move |_| state.update(UiState::toggle_dark_mode)
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}

#[component]
pub fn MenuOverlay() -> impl IntoView {
    let state = use_ui_state();
    let open = Memo::new(move |_| state.with(UiState::menu_open));

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-y-0 right-0 w-full sm:w-80 bg-white/95 dark:bg-slate-900/95 backdrop-blur-xl shadow-2xl z-[60] p-8 flex flex-col pt-24 border-l border-slate-200 dark:border-slate-800">
                <button
                    class="absolute top-6 right-6 p-2 hover:bg-slate-100 dark:hover:bg-slate-800 rounded-full text-slate-900 dark:text-white"
                    aria-label="Close menu"
                    on:click=move |_| state.update(UiState::close_menu)
                >
                    "✕"
                </button>
                <div class="flex flex-col gap-6 text-2xl font-bold text-slate-900 dark:text-white">
                    <MenuItems />
                    <a
                        href=site::mailto()
                        class="text-slate-600 dark:text-slate-300 mt-4 text-lg font-semibold flex items-center gap-2"
                    >
                        "Contact →"
                    </a>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn MenuItems() -> impl IntoView {
    let state = use_ui_state();
    let current = Memo::new(move |_| state.with(UiState::current_page));

    Page::ALL
        .into_iter()
        .map(|page| {
            view! {
                <a
                    href=page.fragment()
                    class=move || if current.get() == page { MENU_ITEM_ACTIVE } else { MENU_ITEM }
                    on:click=move |_| state.update(|s| s.navigate_to(page))
                >
                    {page.label()}
                    <i class=format!("{} mt-1 opacity-50", page.icon()) />
                </a>
            }
        })
        .collect_view()
}
