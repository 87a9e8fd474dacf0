use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use super::suit::SuitIcon;
use crate::config::FALLBACK_CONTACT_EMAIL;
use crate::content::Suit;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Projects", "/projects"),
    ("Blog", "/blog"),
    ("Hire Me", "/hire"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/anipotts"),
    ("LinkedIn", "https://linkedin.com/in/anipotts"),
    ("Twitter", "https://twitter.com/anipotts"),
    ("Instagram", "https://instagram.com/anipotts"),
    ("YouTube", "https://youtube.com/@anipotts"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let link_class = move |href: &'static str| {
        let active = pathname.get() == href;
        if active {
            "relative text-sm font-medium text-accent"
        } else {
            "relative text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
        }
    };

    // close the mobile menu on navigation
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_menu_open.set(false),
        false,
    );

    view! {
        <nav class="fixed top-0 right-0 left-0 z-40 border-b backdrop-blur-md bg-background/80 border-border">
            <div class="flex justify-between items-center px-4 mx-auto max-w-7xl h-16 sm:px-6 lg:px-8">
                <A href="/" attr:class="flex gap-2 items-center font-serif text-xl font-bold">
                    <SuitIcon suit=Suit::Spades size=20 />
                    "Ani Potts"
                </A>
                <div class="hidden gap-8 items-center md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, href)| {
                            view! {
                                <A href=href attr:class=move || link_class(href)>
                                    {name}
                                </A>
                            }
                        })
                        .collect_view()}
                    <A
                        href="/contact"
                        attr:class="py-2 px-4 text-sm font-semibold rounded-lg transition-colors bg-accent text-accent-foreground hover:bg-accent/90"
                    >
                        "Contact"
                    </A>
                </div>
                <button
                    class="p-2 md:hidden"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="flex flex-col gap-4 py-4 px-4 border-t md:hidden border-border">
                    {NAV_LINKS
                        .iter()
                        .chain(std::iter::once(&("Contact", "/contact")))
                        .map(|&(name, href)| {
                            view! {
                                <A href=href attr:class=move || link_class(href)>
                                    {name}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.map(|dt| dt.year()).unwrap_or(2025);

    view! {
        <footer class="mt-24 border-t border-border bg-card/50">
            <div class="grid grid-cols-1 gap-12 py-12 px-4 mx-auto max-w-7xl sm:px-6 md:grid-cols-3 lg:px-8">
                <div class="space-y-3">
                    <h3 class="font-serif text-xl font-bold">"Ani Potts"</h3>
                    <p class="text-sm text-muted-foreground">
                        "Shipping AI apps, products and quant tools in weeks, not quarters."
                    </p>
                    <a
                        href=format!("mailto:{FALLBACK_CONTACT_EMAIL}")
                        class="text-sm text-accent hover:underline"
                    >
                        {FALLBACK_CONTACT_EMAIL}
                    </a>
                </div>
                <div class="space-y-3">
                    <h4 class="text-sm font-semibold tracking-wider uppercase">"Explore"</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        {NAV_LINKS
                            .iter()
                            .map(|&(name, href)| {
                                view! {
                                    <li>
                                        <A href=href attr:class="hover:text-foreground">
                                            {name}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a href="/rss.xml" class="hover:text-foreground">
                                "RSS"
                            </a>
                        </li>
                    </ul>
                </div>
                <div class="space-y-3">
                    <h4 class="text-sm font-semibold tracking-wider uppercase">"Elsewhere"</h4>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|&(name, href)| {
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="hover:text-foreground"
                                        >
                                            {name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="flex flex-col gap-2 justify-between py-6 px-4 mx-auto max-w-7xl text-xs border-t sm:flex-row sm:px-6 lg:px-8 text-muted-foreground border-border">
                <span>{format!("© {year} Ani Potts. All rights reserved.")}</span>
                {built
                    .map(|dt| {
                        view! { <span>{format!("Built {}", dt.format("%b %e, %Y %H:%M UTC"))}</span> }
                    })}
            </div>
        </footer>
    }
}
