use leptos::{ev, prelude::*};

use crate::behavior::MenuState;
use crate::content::Profile;

use super::hooks::use_theme;

const ASIDE_CLASS: &str = "fixed left-0 top-0 w-72 h-screen p-6 flex flex-col gap-6 z-40 transition-transform duration-300 md:translate-x-0 bg-white/70 text-slate-900 border-r border-slate-200 dark:bg-slate-900/80 dark:text-gray-100 dark:border-black/20 backdrop-blur-md";

const SECTIONS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

/// Fixed navigation column on desktop, slide-in menu on small screens.
#[component]
pub fn Sidebar(profile: Profile) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let is_open = move || menu.with(MenuState::is_open);
    let close = move |_: ev::MouseEvent| menu.update(MenuState::close);

    let theme = use_theme();
    let is_dark = move || theme.theme().get().is_dark();

    view! {
        <div class="md:hidden fixed top-0 inset-x-0 z-30 flex items-center justify-between px-4 py-3 bg-white/70 dark:bg-slate-900/80 backdrop-blur-md border-b border-slate-200 dark:border-black/20">
            <span class="font-semibold">{profile.name.clone()}</span>
            <button
                class="px-3 py-1 rounded-md border border-indigo-600"
                aria-label="Open navigation"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| menu.update(MenuState::open)
            >
                "☰"
            </button>
        </div>
        <div
            class="md:hidden fixed inset-0 z-30 bg-black/50"
            class:hidden=move || !is_open()
            on:click=close
        ></div>
        <aside
            aria-label="Main navigation"
            class=move || {
                let slide = if is_open() { "translate-x-0" } else { "-translate-x-full" };
                format!("{ASIDE_CLASS} {slide}")
            }
        >
            <div class="flex items-center gap-3">
                <div class="w-12 h-12 rounded-full bg-gradient-to-br from-indigo-500 to-pink-500 flex items-center justify-center text-white font-bold shadow-lg">
                    {profile.initials.clone()}
                </div>
                <div class="flex-1">
                    <h1 class="text-xl font-semibold">{profile.name.clone()}</h1>
                    <p class="text-sm opacity-60">{profile.tagline.clone()}</p>
                </div>
                <button class="md:hidden text-xl" aria-label="Close navigation" on:click=close>
                    "✕"
                </button>
            </div>

            <nav class="flex flex-col gap-3 mt-4 text-lg" role="navigation">
                {SECTIONS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=href
                                class="hover:text-indigo-300 transition-colors"
                                on:click=close
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="mt-auto flex flex-col gap-3">
                <button
                    class="px-4 py-2 rounded-lg bg-indigo-600 text-white shadow hover:scale-105 transition"
                    aria-pressed=move || is_dark().to_string()
                    on:click=move |_| theme.toggle()
                >
                    "Toggle Theme"
                </button>
                <a
                    href=profile.resume.clone()
                    download=profile.resume_download_name.clone()
                    class="block text-center px-4 py-3 rounded-lg bg-gradient-to-br from-indigo-600 to-purple-600 text-white shadow"
                    aria-label="Download resume"
                >
                    "Download Resume"
                </a>
            </div>
        </aside>
    }
}
