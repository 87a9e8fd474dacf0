mod blog;
mod contact;
mod hire;
mod homepage;
mod nav;
mod projects;
mod reveal;
mod scroll;
mod showcase;
mod suit;

use blog::{BlogHome, BlogPage, BlogWrapper};
use contact::ContactPage;
use hire::HirePage;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use nav::{Footer, Navbar};
use projects::{ProjectPage, ProjectsPage};
use scroll::{ScrollHandle, ScrollProgressBar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Ani Potts builds AI apps, products and quant tools on a very fast timeline."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="Ani Potts Devlog"
                    href="/rss.xml"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // one scroll source shared by every animated section
    provide_context(ScrollHandle::new());

    view! {
        <Title formatter=|title| format!("Ani Potts - {title}") />

        <Router>
            <ScrollProgressBar />
            <Navbar />
            <main class="flex flex-col flex-grow w-full min-h-screen">
                <Routes fallback=|| {
                    view! {
                        <div class="py-32 text-xl text-center text-muted-foreground">
                            "Page not found."
                        </div>
                    }
                }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:slug") view=ProjectPage />
                    <ParentRoute path=path!("/blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":slug") view=BlogPage />
                    </ParentRoute>
                    <Route path=path!("/hire") view=HirePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
