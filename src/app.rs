mod avatar;
mod gallery;
mod hooks;
mod homepage;
mod sidebar;

use homepage::HomePage;
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use sidebar::Sidebar;

use crate::content::{copyright_year, portfolio, Portfolio};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    hooks::provide_theme();

    let page = match portfolio() {
        Ok(p) => Ok(p),
        Err(e) => {
            log::error!("{e}");
            Err(e.to_string())
        }
    };
    let name = page
        .as_ref()
        .map(|p| p.profile.name.clone())
        .unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <div class="min-h-screen flex transition-colors duration-500 bg-gradient-to-br from-white via-indigo-50 to-pink-50 text-slate-900 dark:from-slate-900 dark:via-indigo-950 dark:to-black dark:text-gray-100">
                {match page {
                    Ok(p) => Either::Left(view! { <Page portfolio=p /> }),
                    Err(e) => Either::Right(view! { <ContentUnavailable message=e /> }),
                }}
            </div>
        </Router>
    }
}

#[component]
fn Page(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <Sidebar profile=portfolio.profile.clone() />
        <main class="flex-1 min-w-0 p-6 pt-20 md:p-12 md:ml-72">
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=move || view! { <HomePage portfolio /> } />
            </Routes>
            <Footer name=portfolio.profile.name.clone() />
        </main>
    }
}

#[component]
fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="mt-8 text-sm text-gray-400">
            <div class="max-w-5xl">
                {format!("© {} {name} — Built with Rust, Leptos and Tailwind CSS.", copyright_year())}
            </div>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <h1 class="font-bold text-2xl">"Page not found."</h1>
        <a href="/" class="text-indigo-400 hover:underline">"Back to the portfolio"</a>
    }
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <Title text="Error" />
        <main class="flex-1 p-12">
            <h1 class="font-bold text-2xl">"Something went wrong"</h1>
            <pre class="whitespace-pre-wrap mt-4">{message}</pre>
        </main>
    }
}
