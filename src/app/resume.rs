use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{nav::PageChrome, CatalogUnavailable};
use crate::{
    catalog::{catalog, Education, Experience, Resume, SkillGroup},
    site,
    state::Page,
};

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text=Page::Resume.title() />
        <div class="relative w-full min-h-screen bg-slate-50 dark:bg-slate-950 overflow-y-auto transition-colors duration-300">
            <PageChrome />
            <div class="max-w-4xl mx-auto px-6 pt-32 pb-20">
                <Intro />
                {match catalog() {
                    Ok(c) => Either::Left(view! { <ResumeBody resume=&c.resume /> }),
                    Err(err) => Either::Right(view! { <CatalogUnavailable err /> }),
                }}
                <Download />
            </div>
        </div>
    }
}

#[component]
fn Intro() -> impl IntoView {
    view! {
        <div class="mb-16">
            <h1 class="text-4xl md:text-6xl font-black text-slate-900 dark:text-white mb-6 tracking-tight">
                "The Professional " <br />
                <span class="text-slate-400 dark:text-slate-600">"(and slightly unfiltered)"</span>
                <br /> "Journey."
            </h1>
            <p class="text-lg text-slate-600 dark:text-slate-400 max-w-2xl leading-relaxed">
                "I’m a Computer Science Senior who builds scalable SaaS apps and optimizes databases. I also speak fluent Java, Python, and \"Corporate Client\". Here is what I've actually done, minus the buzzwords (okay, maybe a few buzzwords)."
            </p>
        </div>
    }
}

#[component]
fn ResumeBody(resume: &'static Resume) -> impl IntoView {
    view! {
        <div class="space-y-12 mb-20">
            <h2 class="text-sm font-bold uppercase tracking-widest text-slate-400 mb-8">
                "Experience Log"
            </h2>
            {resume
                .experiences
                .iter()
                .map(|exp| view! { <ExperienceEntry exp /> })
                .collect_view()}
        </div>
        <div class="grid md:grid-cols-2 gap-8 mb-24">
            <EducationCard education=resume.education.as_slice() />
            <SkillsCard skills=resume.skills.as_slice() />
        </div>
    }
}

#[component]
fn ExperienceEntry(exp: &'static Experience) -> impl IntoView {
    view! {
        <div class="relative pl-8 md:pl-0">
            <div class="hidden md:block absolute left-[150px] top-0 bottom-0 w-px bg-slate-200 dark:bg-slate-800" />
            <div class="md:flex gap-10">
                <div class="hidden md:block w-[150px] text-right pt-1 pr-8">
                    <span class="text-xs font-bold text-slate-400 uppercase">
                        {exp.period.as_str()}
                    </span>
                </div>
                <div class="flex-1 pb-12 relative">
                    <div class="absolute -left-[41px] top-1 w-5 h-5 rounded-full bg-white dark:bg-slate-900 border-4 border-indigo-500 hidden md:block" />
                    <div class="flex items-center gap-3 mb-2">
                        <i class=format!("{} text-indigo-500", exp.icon) />
                        <span class="md:hidden text-xs font-bold text-slate-400 uppercase">
                            {exp.period.as_str()}
                        </span>
                    </div>
                    <h3 class="text-xl font-bold text-slate-900 dark:text-white flex items-center gap-2">
                        {exp.role.as_str()}
                        <span class="text-slate-400 font-normal">
                            {format!("@ {}", exp.company)}
                        </span>
                    </h3>
                    <p class="mt-3 text-slate-600 dark:text-slate-300 leading-relaxed text-lg">
                        {exp.summary.as_str()}
                    </p>
                    <div class="flex flex-wrap gap-2 mt-4">
                        {exp
                            .tech
                            .iter()
                            .map(|t| {
                                view! {
                                    <span class="px-2 py-1 bg-slate-100 dark:bg-slate-800 rounded text-xs font-medium text-slate-500 dark:text-slate-400">
                                        {t.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationCard(education: &'static [Education]) -> impl IntoView {
    view! {
        <div class="p-8 rounded-3xl bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800">
            <div class="flex items-center gap-3 mb-6">
                <div class="p-2 bg-emerald-100 dark:bg-emerald-900/30 rounded-lg text-emerald-600 dark:text-emerald-400">
                    <i class="extra-graduation" />
                </div>
                <h3 class="font-bold text-lg text-slate-900 dark:text-white">"Education"</h3>
            </div>
            {education
                .iter()
                .map(|edu| {
                    view! {
                        <div>
                            <h4 class="font-bold text-slate-800 dark:text-slate-200">
                                {edu.degree.as_str()}
                            </h4>
                            <p class="text-sm text-slate-500 mb-2">
                                {format!("{} • {}", edu.school, edu.period)}
                            </p>
                            <p class="text-slate-600 dark:text-slate-400 text-sm leading-relaxed">
                                {edu.details.as_str()}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillsCard(skills: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <div class="p-8 rounded-3xl bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800">
            <div class="flex items-center gap-3 mb-6">
                <div class="p-2 bg-amber-100 dark:bg-amber-900/30 rounded-lg text-amber-600 dark:text-amber-400">
                    <i class="extra-award" />
                </div>
                <h3 class="font-bold text-lg text-slate-900 dark:text-white">"Arsenal"</h3>
            </div>
            <div class="space-y-4">
                {skills
                    .iter()
                    .map(|group| {
                        view! {
                            <div>
                                <span class="text-xs font-bold text-slate-400 uppercase">
                                    {group.label.as_str()}
                                </span>
                                <p class="text-slate-700 dark:text-slate-300">
                                    {group.items.join(", ")}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Download() -> impl IntoView {
    view! {
        <div class="border-t border-slate-200 dark:border-slate-800 pt-16 text-center">
            <p class="text-lg text-slate-600 dark:text-slate-400 mb-6">
                "\"Oh, so you're one of those who lives by the textbook?\""
            </p>
            <div class="inline-block p-1 pr-2 rounded-full bg-slate-100 dark:bg-slate-800/50 border border-slate-200 dark:border-slate-700">
                <a
                    href=site::resume_pdf_path()
                    download=site::RESUME_PDF
                    class="flex items-center gap-3 bg-slate-900 dark:bg-white text-white dark:text-slate-900 px-6 py-3 rounded-full font-bold hover:opacity-90 transition-all active:scale-95"
                >
                    <i class="extra-download" />
                    "Here is a professional PDF for you"
                </a>
            </div>
            <p class="text-xs text-slate-400 mt-4">"(ATS friendly, HR approved)"</p>
        </div>
    }
}
