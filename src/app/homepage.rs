use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    nav::{MenuButton, MenuOverlay, ThemeToggle},
    use_ui_state,
};
use crate::{
    pitch::MAX_LEVEL,
    site,
    state::{Page, UiState},
};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_ui_state();
    let prompt = Memo::new(move |_| state.with(UiState::show_full_screen_contact_prompt));

    view! {
        <Title text=Page::Home.title() />
        <div class="min-h-screen transition-colors duration-300 overflow-hidden relative bg-gradient-to-b from-[#FFFBF5] via-[#F7FAFF] to-[#EEF2FF] dark:from-[#0F172A] dark:via-[#0F172A] dark:to-[#0F172A] selection:bg-indigo-600 selection:text-white">
            <div class="absolute inset-0 z-0 pointer-events-none home-backdrop" />
            <nav class="relative z-50 flex justify-between items-center px-6 py-6 max-w-7xl mx-auto w-full">
                <Brand />
                <MenuButton button_class="p-2 hover:bg-slate-200/70 dark:hover:bg-slate-800 rounded-full transition-colors z-50 text-slate-900 dark:text-white" />
            </nav>
            <MenuOverlay />
            <main class="relative z-10 flex flex-col items-center justify-center min-h-[84vh] px-5 md:px-8 max-w-7xl mx-auto w-full pb-10">
                <PitchPanel />
                <SellSlider />
            </main>
            <footer class="relative z-10 pb-8 w-full text-center text-slate-500 text-sm font-medium">
                {format!("Based in {} • {}", site::LOCATION, site::BUILD_YEAR)}
            </footer>
            <ThemeToggle />
            <Show when=move || prompt.get()>
                <ContactPrompt />
            </Show>
        </div>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="w-9 h-9 bg-slate-900 dark:bg-white rounded-xl flex items-center justify-center text-white dark:text-slate-900 font-black text-sm shadow-lg transition-colors">
                {site::OWNER_INITIALS}
            </div>
            <div class="leading-tight">
                <div class="font-semibold tracking-tight text-lg text-slate-900 dark:text-white transition-colors">
                    {site::OWNER_NAME}
                </div>
                <div class="text-xs text-slate-600 dark:text-slate-400 transition-colors">
                    {site::TAGLINE}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PitchPanel() -> impl IntoView {
    let state = use_ui_state();
    let pitch = Memo::new(move |_| state.with(UiState::pitch));
    let inline_contact = Memo::new(move |_| state.with(UiState::show_inline_contact_link));

    view! {
        <div class="w-full max-w-6xl">
            <div class="glass-panel rounded-[28px] p-8 md:p-14 relative overflow-hidden">
                <div class="absolute top-0 left-0 w-full h-[3px] bg-gradient-to-r from-indigo-500 via-emerald-400 to-rose-400 opacity-80" />
                <span class="text-xs font-bold tracking-[0.2em] uppercase mb-4 block text-slate-600 dark:text-slate-400 transition-colors">
                    {move || pitch.with(|p| p.category)}
                </span>
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight leading-[1.05] text-slate-900 dark:text-white transition-colors">
                    {move || pitch.with(|p| p.headline)}
                </h1>
                <p class="mt-6 text-lg md:text-xl leading-relaxed text-slate-600 dark:text-slate-300 max-w-3xl transition-colors">
                    {move || pitch.with(|p| p.body.clone())}
                </p>
                <Show when=move || inline_contact.get()>
                    <div class="mt-10">
                        <a
                            href=site::mailto()
                            class="inline-flex items-center gap-2 rounded-2xl bg-slate-900 px-5 py-3 text-white dark:bg-white dark:text-slate-900 font-semibold hover:opacity-90 transition"
                        >
                            "Contact me →"
                        </a>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SellSlider() -> impl IntoView {
    let state = use_ui_state();
    let level = Memo::new(move |_| state.with(|s| s.sell_level().get()));

    view! {
        <div class="mt-8 w-4/5 max-w-5xl glass-panel p-6 rounded-2xl flex flex-col gap-4">
            <div class="flex justify-between text-xs font-bold uppercase tracking-widest text-slate-500 dark:text-slate-400 transition-colors">
                <span>"Less hard sell"</span>
                <span>"More hard sell"</span>
            </div>
            <input
                type="range"
                min="0"
                max=MAX_LEVEL.to_string()
                aria-label="Sell level"
                prop:value=move || level.get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    match raw.parse::<i32>() {
                        Ok(v) => state.update(|s| s.set_sell_level(v)),
                        Err(e) => log::warn!("ignoring slider value {raw:?}: {e}"),
                    }
                }
                class="w-full h-2 appearance-none focus:outline-none"
            />
        </div>
    }
}

/// Full-screen takeover once the pitch reaches its hardest sell.
#[component]
fn ContactPrompt() -> impl IntoView {
    let state = use_ui_state();
    view! {
        <div class="fixed inset-0 z-[100] bg-slate-950/95 backdrop-blur-sm flex flex-col items-center justify-center p-6 text-center">
            <h2 class="text-5xl md:text-7xl font-black text-white mb-8 tracking-tight animate-pulse">
                "Let’s build something."
            </h2>
            <div class="bg-white p-8 rounded-3xl max-w-md w-full shadow-2xl space-y-6">
                <div class="space-y-2">
                    <p class="text-2xl font-bold text-slate-900">"Quick call?"</p>
                    <p class="text-slate-500">
                        "If you’re hiring, don’t wait. Let’s talk before someone else snaps me up."
                    </p>
                </div>
                <a
                    href=site::mailto()
                    class="block w-full py-4 bg-slate-900 hover:opacity-90 text-white font-bold rounded-xl transition-all active:scale-[0.99] text-lg"
                >
                    "Email Me Now"
                </a>
                <button
                    class="text-sm text-slate-400 hover:text-slate-600 underline"
                    on:click=move |_| state.update(|s| s.set_sell_level(0))
                >
                    "Back to pitch"
                </button>
            </div>
        </div>
    }
}
