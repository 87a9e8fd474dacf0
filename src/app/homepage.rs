use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::{
    use_element_visibility, use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions,
};

use super::projects::ProjectGrid;
use super::reveal::TextReveal;
use super::scroll::{band_progress, use_scroll_handle};
use super::showcase::FeaturedShowcase;
use super::suit::{PlayingCard, SuitPattern};
use crate::content::{format_stat, stats, Suit};
use crate::motion::{counter_value, interpolate, ScrollBand, COUNTER_DURATION_MS, COUNTER_STEPS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <AboutSection />
        <StatsRibbon />
        <FeaturedShowcase />
        <div id="projects">
            <ProjectGrid />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let scroll = use_scroll_handle();
    let node = NodeRef::<html::Div>::new();
    let progress = band_progress(scroll, node, ScrollBand::EXIT);

    let style = move || {
        let p = progress.get();
        format!(
            "transform: translateY({:.1}%) scale({:.3}); opacity: {:.3}",
            interpolate(p, &[0.0, 1.0], &[0.0, 50.0]),
            interpolate(p, &[0.0, 1.0], &[1.0, 0.95]),
            interpolate(p, &[0.0, 0.5, 1.0], &[1.0, 0.8, 0.0]),
        )
    };
    let to_projects = move |_| scroll.scroll_to_id("projects", 80.0);

    view! {
        <div
            node_ref=node
            class="flex overflow-hidden relative justify-center items-center px-4 pt-16 min-h-screen sm:px-6 lg:px-8"
        >
            <div class="grid grid-cols-1 gap-12 items-center mx-auto w-full max-w-6xl lg:grid-cols-2" style=style>
                <div class="space-y-6">
                    <h1 class="font-serif font-bold text-display-sm text-foreground md:text-display">
                        "Ani Potts"
                    </h1>
                    <p class="text-xl leading-relaxed md:text-2xl text-muted-foreground">
                        "i'm a software engineer who "
                        <span class="inline-block relative font-semibold text-accent highlight-sweep">
                            "doesn't waste time"
                        </span>
                        " turning ideas into apps."
                    </p>
                    <div class="flex flex-col gap-4 pt-4 sm:flex-row">
                        <A
                            href="/hire"
                            attr:class="inline-flex justify-center items-center py-4 px-8 font-semibold rounded-lg transition-all duration-200 hover:scale-105 bg-accent text-accent-foreground hover:bg-accent/90"
                        >
                            "Work with me →"
                        </A>
                        <button
                            class="inline-flex justify-center items-center py-4 px-8 font-semibold rounded-lg border-2 transition-all duration-200 border-border bg-background text-foreground hover:border-accent hover:text-accent"
                            on:click=to_projects
                        >
                            "View projects"
                        </button>
                    </div>
                </div>
                <div class="relative mx-auto w-full max-w-md aspect-square">
                    <div class="absolute inset-0 rounded-2xl blur-3xl bg-accent/20" />
                    <img
                        src="/assets/images/ani_pfp.jpg"
                        alt="Ani Potts"
                        class="object-cover relative z-10 w-full h-full rounded-2xl ring-2 shadow-2xl ring-accent/10"
                    />
                </div>
            </div>
            <button
                class="hidden absolute bottom-8 left-1/2 flex-col gap-2 items-center -translate-x-1/2 cursor-pointer md:flex text-muted-foreground animate-bounce"
                on:click=to_projects
            >
                <span class="text-xs tracking-wider uppercase">"Scroll"</span>
                <span>"↓"</span>
            </button>
        </div>
    }
}

struct AboutCard {
    number: &'static str,
    rank: &'static str,
    unit: &'static str,
    desc: &'static str,
    suit: Suit,
}

const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        number: "10",
        rank: "10",
        unit: "days",
        desc: "Average time from idea to MVP",
        suit: Suit::Hearts,
    },
    AboutCard {
        number: "50k+",
        rank: "K",
        unit: "users",
        desc: "Served by platforms I've built",
        suit: Suit::Diamonds,
    },
    AboutCard {
        number: "250k+",
        rank: "A",
        unit: "generated",
        desc: "Revenue generated for clients",
        suit: Suit::Spades,
    },
    AboutCard {
        number: "2.5m+",
        rank: "J",
        unit: "views",
        desc: "Views on my projects",
        suit: Suit::Clubs,
    },
];

const CLIENTS: &[(&str, &str, &str)] = &[
    ("Atlantic Records", "https://atlanticrecords.com", "/assets/logos/atlantic_records.png"),
    ("DADA Digital", "https://dadadigital.com", "/assets/logos/dadadigital.png"),
    ("Range Media Partners", "https://rangemediapartners.com", "/assets/logos/range.jpeg"),
];

#[component]
fn AboutSection() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = band_progress(use_scroll_handle(), node, ScrollBand::THROUGH);

    let content_style = move || {
        let p = progress.get();
        let edges = [0.0, 0.2, 0.8, 1.0];
        format!(
            "opacity: {:.3}; transform: scale({:.3})",
            interpolate(p, &edges, &[0.0, 1.0, 1.0, 0.0]),
            interpolate(p, &edges, &[0.8, 1.0, 1.0, 0.8]),
        )
    };
    let glow_style = move || {
        let p = progress.get();
        format!(
            "opacity: {:.3}; transform: scale({:.3})",
            interpolate(p, &[0.0, 0.5, 1.0], &[0.0, 0.5, 0.0]),
            interpolate(p, &[0.0, 1.0], &[0.5, 1.5]),
        )
    };

    view! {
        <div
            node_ref=node
            class="flex overflow-hidden relative items-center py-32 px-4 min-h-screen sm:px-6 lg:px-8"
        >
            <div class="absolute inset-0 -z-10">
                <div
                    class="absolute top-1/4 right-1/4 w-96 h-96 rounded-full blur-3xl bg-accent/10"
                    style=glow_style
                />
                <SuitPattern />
            </div>
            <div class="mx-auto max-w-5xl" style=content_style>
                <div class="flex flex-col gap-8 justify-center items-center font-serif text-3xl font-semibold leading-tight text-center md:text-4xl lg:text-5xl text-foreground">
                    <TextReveal text="currently, i'm building a research networking platform for 300+ quants at PGI." />
                    <div>
                        <TextReveal text="previously, i've built internal analytics dashboards for" />
                        <div class="flex flex-wrap gap-4 justify-center items-center mt-4">
                            {CLIENTS
                                .iter()
                                .map(|&(name, href, logo)| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="inline-block mx-2 transition-all duration-300 hover:scale-110 hover:brightness-110"
                                        >
                                            <img
                                                src=logo
                                                alt=name
                                                class="object-contain w-auto h-8 filter brightness-0 md:h-10 lg:h-12 dark:brightness-100"
                                            />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="grid grid-cols-1 gap-8 mt-20 md:grid-cols-2 lg:grid-cols-4">
                    {ABOUT_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <PlayingCard
                                    suit=card.suit
                                    rank=card.rank
                                    class="flex justify-center items-center p-8 min-h-[280px]"
                                >
                                    <div class="pt-8 text-center">
                                        <div class="mb-3 font-serif text-5xl font-bold md:text-6xl text-accent">
                                            {card.number}
                                        </div>
                                        <div class="mb-2 text-lg font-semibold tracking-wide uppercase text-foreground">
                                            {card.unit}
                                        </div>
                                        <div class="mx-auto text-xs text-muted-foreground max-w-[200px]">
                                            {card.desc}
                                        </div>
                                    </div>
                                </PlayingCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Counts up to `value` once it first scrolls into view.
#[component]
fn Counter(value: u32, label: &'static str) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (step, set_step) = signal(0u32);

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || set_step.update(|s| *s = (*s + 1).min(COUNTER_STEPS)),
        (COUNTER_DURATION_MS / COUNTER_STEPS) as u64,
        UseIntervalFnOptions::default().immediate(false),
    );
    let visible = use_element_visibility(node);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if visible.get() && !started.get_value() {
            started.set_value(true);
            resume();
        }
        if step.get() >= COUNTER_STEPS {
            pause();
        }
    });

    view! {
        <div
            node_ref=node
            class="text-center transition-all duration-500"
            class:opacity-0=move || step.get() == 0
        >
            <div class="mb-2 font-serif text-4xl font-bold md:text-5xl text-accent">
                {move || format_stat(counter_value(value, step.get(), COUNTER_STEPS))}
            </div>
            <div class="text-sm md:text-base text-muted-foreground">{label}</div>
        </div>
    }
}

#[component]
fn StatsRibbon() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = band_progress(use_scroll_handle(), node, ScrollBand::THROUGH);
    let y = move || interpolate(progress.get(), &[0.0, 1.0], &[-20.0, 20.0]);

    view! {
        <div node_ref=node class="overflow-hidden py-16 border-y border-border bg-card/50">
            <div
                class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8"
                style:transform=move || format!("translateY({:.1}px)", y())
            >
                <div class="grid grid-cols-1 gap-12 md:grid-cols-3 md:gap-8">
                    {stats()
                        .iter()
                        .map(|stat| view! { <Counter value=stat.value label=stat.label /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
