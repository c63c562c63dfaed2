use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::behavior::{GENERIC_THUMBNAIL, TYPING_INTERVAL};
use crate::content::{Portfolio, Profile, Project, SocialLink};

use super::avatar::{Avatar, FallbackImg};
use super::gallery::Gallery;
use super::hooks::{use_tilt, use_typewriter};

#[component]
pub fn HomePage(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero profile=portfolio.profile.clone() />
        <About text=portfolio.profile.about.clone() />
        <Skills skills=portfolio.skills.clone() />
        <Projects projects=portfolio.projects.clone() />
        <Gallery images=portfolio.gallery.clone() />
        <Contact email=portfolio.profile.email.clone() socials=portfolio.profile.socials.clone() />
    }
}

#[component]
fn Hero(profile: Profile) -> impl IntoView {
    let typed = use_typewriter(
        Signal::stored(profile.headline.clone()),
        Signal::stored(TYPING_INTERVAL),
    );
    let card = NodeRef::<html::Div>::new();
    let tilt = use_tilt(card);

    view! {
        <section aria-labelledby="hero-heading" class="mb-8">
            <div
                node_ref=card
                style:transform=move || tilt.get().to_css()
                class="max-w-5xl p-8 rounded-3xl shadow-2xl border animate-rise transition-transform duration-150 bg-white/60 border-slate-200 dark:bg-gradient-to-br dark:from-indigo-900/50 dark:to-slate-900/40 dark:border-indigo-800/20"
            >
                <div class="flex flex-col md:flex-row items-center gap-8">
                    <div class="flex-1">
                        <h2
                            id="hero-heading"
                            class="text-4xl md:text-5xl font-extrabold leading-tight"
                            aria-label=profile.headline.clone()
                        >
                            {typed}
                            <span class="ml-1 text-indigo-400 animate-pulse" aria-hidden="true">
                                "|"
                            </span>
                        </h2>
                        <p class="mt-4 text-gray-700 dark:text-gray-300">{profile.summary.clone()}</p>
                        <div class="mt-6 flex gap-4">
                            <a
                                href="#projects"
                                class="px-5 py-3 rounded-lg bg-indigo-600 text-white shadow hover:scale-105 transition"
                            >
                                "View Projects"
                            </a>
                            <a
                                href="#contact"
                                class="px-5 py-3 rounded-lg border border-indigo-600 text-indigo-700 dark:text-indigo-200 hover:bg-indigo-700 hover:text-white transition"
                            >
                                "Contact"
                            </a>
                        </div>
                    </div>
                    <div class="w-44 md:w-56 flex-shrink-0">
                        <Avatar name=profile.name.clone() photo=profile.photo.clone() />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About(text: String) -> impl IntoView {
    view! {
        <section id="about" class="mb-8">
            <div class="p-6 rounded-2xl bg-white/5 shadow">
                <h3 class="text-2xl text-indigo-500 dark:text-indigo-300 font-semibold mb-3">
                    "About Me"
                </h3>
                <p class="text-gray-700 dark:text-gray-300">{text}</p>
            </div>
        </section>
    }
}

#[component]
fn Skills(skills: Vec<String>) -> impl IntoView {
    view! {
        <section id="skills" class="mb-8">
            <div class="p-6 rounded-2xl bg-white/5 shadow">
                <h3 class="text-2xl text-indigo-500 dark:text-indigo-300 font-semibold mb-4">
                    "Skills"
                </h3>
                <div class="flex flex-wrap gap-3">
                    {skills
                        .into_iter()
                        .map(|s| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-indigo-700/30 text-sm">{s}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="mb-8">
            <h3 class="text-2xl text-indigo-500 dark:text-indigo-300 font-semibold mb-4">
                "Projects"
            </h3>
            <div class="grid gap-6 md:grid-cols-2">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| view! { <ProjectCard project=p index=i /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        tags,
        live,
        source,
    } = project;
    let alt = title.clone();
    view! {
        <article
            class="p-5 rounded-2xl shadow-lg border animate-rise bg-white/60 border-slate-200 dark:bg-white/5 dark:border-white/10"
            style:animation-delay=format!("{}ms", index * 70)
        >
            <div class="flex gap-4 items-start">
                <FallbackImg
                    src=image
                    fallback=GENERIC_THUMBNAIL
                    alt=alt
                    class="w-32 h-24 rounded-lg object-cover shadow-sm flex-shrink-0 transition-transform duration-500 hover:scale-105"
                />
                <div>
                    <h4 class="text-lg text-indigo-600 dark:text-indigo-200 font-semibold">{title}</h4>
                    <p class="mt-2 text-gray-700 dark:text-gray-300">{description}</p>
                    <div class="flex gap-2 mt-3">
                        {tags
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-indigo-700/30 text-xs">{t}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-6 mt-4">
                        <a href=live class="text-indigo-500 dark:text-indigo-300 font-medium hover:underline">
                            "Live"
                        </a>
                        <a href=source class="text-indigo-500 dark:text-indigo-300 font-medium hover:underline">
                            "Source"
                        </a>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[component]
fn Contact(email: String, socials: Vec<SocialLink>) -> impl IntoView {
    let mailto = format!("mailto:{email}");
    view! {
        <section id="contact" class="mb-24">
            <div class="p-6 rounded-2xl bg-white/5 shadow">
                <h3 class="text-2xl text-indigo-500 dark:text-indigo-300 font-semibold mb-2">
                    "Contact"
                </h3>
                <p class="text-gray-700 dark:text-gray-300">
                    "Email: " <a href=mailto class="hover:underline">{email}</a>
                </p>
                <div class="flex gap-4 mt-4">
                    {socials
                        .into_iter()
                        .map(|SocialLink { label, href }| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-indigo-500 dark:text-indigo-300 hover:underline"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
