use leptos::prelude::*;
use leptos_meta::Title;

use super::nav::PageChrome;
use crate::{site, state::Page};

const DREAMS: [(&str, &str); 8] = [
    ("extra-code", "Tech Savvy"),
    ("extra-plane", "Traveler"),
    ("extra-dumbbell", "Fitness Enthusiast"),
    ("extra-car", "F1 Driver (Lol, out of budget)"),
    ("extra-camera", "Content Creator"),
    ("extra-heart", "Family Man (someday)"),
    ("devicon-instagram-plain", "Influencer (maybe ?)"),
    ("extra-location", "Startup Founder (Idk)"),
];

const PILL_LINK: &str = "inline-flex items-center gap-3 bg-slate-900 text-white px-7 py-3 rounded-full font-bold hover:shadow-lg transition-all active:scale-95 dark:bg-white dark:text-slate-900";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Page::About.title() />
        <div class="relative w-full min-h-screen bg-slate-50 dark:bg-slate-950 overflow-y-auto transition-colors duration-300">
            <PageChrome />
            <div class="max-w-4xl mx-auto px-6 pt-32 pb-24">
                <Intro />
                <Philosophy />
                <Travel />
                <Sports />
                <Socials />
            </div>
        </div>
    }
}

#[component]
fn Intro() -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row items-center gap-10 mb-20">
            <div class="w-40 h-40 md:w-56 md:h-56 shrink-0 rounded-full bg-slate-200 dark:bg-slate-800 overflow-hidden border-4 border-white dark:border-slate-700 shadow-xl relative">
                <img
                    src=site::asset_path("img/profile.JPG")
                    class="w-full h-full object-cover object-center scale-110"
                    alt="Profile"
                />
            </div>
            <div class="text-center md:text-left">
                <h1 class="text-4xl md:text-6xl font-black text-slate-900 dark:text-white mb-4 tracking-tight">
                    "More than just " <br />
                    <span class="text-indigo-600 dark:text-indigo-400">"lines of code."</span>
                </h1>
                <p class="text-xl text-slate-600 dark:text-slate-400 leading-relaxed">
                    "Hey, I'm Shiv. Welcome to the \"Offline\" version of me."
                </p>
            </div>
        </div>
    }
}

#[component]
fn Philosophy() -> impl IntoView {
    view! {
        <div class="mb-24 relative">
            <div class="absolute -inset-4 bg-slate-100 dark:bg-slate-900/50 rounded-3xl -z-10" />
            <p class="text-2xl md:text-3xl font-bold text-slate-800 dark:text-slate-200 leading-relaxed mb-8">
                "I am 22 years old, and I refuse to believe I have to pick "
                <span class="italic text-indigo-600 dark:text-indigo-400">"just one thing"</span>
                "."
            </p>
            <p class="text-lg text-slate-600 dark:text-slate-400 leading-relaxed mb-8">
                "They say life is short, but I think it's just long enough to be a tech genius, a startup founder, a football player, and an F1 driver (okay, maybe just in the simulator). I know it's just daydreaming at this point and reality will hit me eventually, but for now, I'm trying to do it all."
            </p>
            <div class="flex flex-wrap gap-3">
                {DREAMS
                    .into_iter()
                    .map(|(icon, text)| {
                        view! {
                            <span class="px-4 py-2 bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 rounded-full text-sm font-bold text-slate-700 dark:text-slate-300 flex items-center gap-2 shadow-sm">
                                <i class=icon />
                                {text}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Photo(path: &'static str, alt: &'static str, frame_class: &'static str) -> impl IntoView {
    view! {
        <div class=frame_class>
            <img
                src=site::asset_path(path)
                alt=alt
                class="absolute inset-0 w-full h-full object-cover scale-105"
            />
        </div>
    }
}

#[component]
fn Travel() -> impl IntoView {
    view! {
        <div class="mb-24">
            <div class="flex items-center gap-3 mb-8">
                <i class="extra-plane text-indigo-600 dark:text-indigo-400" />
                <h2 class="text-2xl font-black uppercase tracking-widest text-slate-900 dark:text-white">
                    "Chasing Horizons"
                </h2>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4 h-96 md:h-80">
                <Photo
                    path="img/banff.jpg"
                    alt="Nature shot"
                    frame_class="col-span-2 row-span-2 relative overflow-hidden rounded-2xl"
                />
                <Photo path="img/Ladakh.jpg" alt="Landscape" frame_class="relative overflow-hidden rounded-2xl" />
                <Photo path="img/mountain.jpg" alt="Travel" frame_class="relative overflow-hidden rounded-2xl" />
            </div>
        </div>
    }
}

#[component]
fn Sports() -> impl IntoView {
    let video = format!(
        r#"<video src="{}" class="absolute inset-0 w-full h-full object-cover" autoplay muted loop playsinline></video>"#,
        site::asset_path("videos/football.mp4")
    );
    view! {
        <div class="mb-24">
            <div class="flex items-center gap-3 mb-8">
                <i class="extra-dumbbell text-indigo-600 dark:text-indigo-400" />
                <h2 class="text-2xl font-black uppercase tracking-widest text-slate-900 dark:text-white">
                    "Until My Legs Give Out"
                </h2>
            </div>
            <p class="text-lg text-slate-600 dark:text-slate-400 mb-6">
                "I love football. But honestly, I'll play anything with a scoreboard. I try every sport I can until my body literally refuses to cooperate."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div
                    class="aspect-video relative overflow-hidden rounded-2xl bg-slate-200 dark:bg-slate-800"
                    inner_html=video
                ></div>
                <Photo
                    path="img/cricket.JPG"
                    alt="cricket"
                    frame_class="aspect-video relative overflow-hidden rounded-2xl bg-slate-200 dark:bg-slate-800"
                />
            </div>
        </div>
    }
}

#[component]
fn Socials() -> impl IntoView {
    view! {
        <div class="border-t border-slate-200 dark:border-slate-800 pt-16 text-center">
            <p class="text-2xl font-bold text-slate-900 dark:text-white mb-4">"Think I'm interesting?"</p>
            <p class="text-lg text-slate-600 dark:text-slate-400 mb-8 max-w-lg mx-auto">
                "Even if I'm not the right fit technically, I think I'm at least a fun follow."
            </p>
            <div class="flex flex-wrap justify-center gap-4">
                <a href=site::LINKEDIN_URL target="_blank" rel="noreferrer" class=PILL_LINK>
                    <i class="devicon-linkedin-plain" />
                    "LinkedIn"
                </a>
                <a href=site::GITHUB_URL target="_blank" rel="noreferrer" class=PILL_LINK>
                    <i class="devicon-github-plain" />
                    "GitHub"
                </a>
                <a
                    href=site::INSTAGRAM_URL
                    target="_blank"
                    rel="noreferrer"
                    class="inline-flex items-center gap-3 bg-gradient-to-r from-purple-600 to-pink-600 text-white px-7 py-3 rounded-full font-bold hover:shadow-lg hover:shadow-pink-500/30 transition-all active:scale-95"
                >
                    <i class="devicon-instagram-plain" />
                    "Instagram"
                </a>
            </div>
        </div>
    }
}
