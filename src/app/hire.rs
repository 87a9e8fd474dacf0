use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::suit::{PlayingCard, SuitIcon};
use crate::content::{pricing_tiers, PricingTier};

const PHASES: &[(&str, &str, &str)] = &[
    (
        "01",
        "Scope",
        "Send your idea, timeline, and budget. I reply within 24–48h with a clear plan + quote.",
    ),
    (
        "02",
        "Sprint",
        "Short sprints. Weekly working builds you can click, not PDFs.",
    ),
    (
        "03",
        "Polish",
        "QA together. Tighten UX, performance, and edge cases until it feels right.",
    ),
    (
        "04",
        "Launch",
        "Ship to prod with docs, envs, and a clean handoff so you can run.",
    ),
];

#[component]
fn TierCard(tier: &'static PricingTier) -> impl IntoView {
    let cta_class = if tier.featured {
        "block py-3 px-6 mt-auto w-full text-sm font-semibold text-center rounded-lg shadow-lg transition-all duration-200 bg-accent text-accent-foreground hover:bg-accent/90"
    } else {
        "block py-3 px-6 mt-auto w-full text-sm font-semibold text-center rounded-lg border-2 transition-all duration-200 border-border hover:border-accent hover:text-accent"
    };

    let card_class = if tier.featured { "h-full ring-2 ring-accent" } else { "h-full" };

    view! {
        <div class="relative">
            {tier
                .featured
                .then(|| {
                    view! {
                        <div class="absolute -top-4 left-1/2 z-10 py-1 px-4 text-xs font-medium rounded-full shadow-lg -translate-x-1/2 bg-accent text-accent-foreground">
                            "Most popular"
                        </div>
                    }
                })}
            <PlayingCard
                suit=tier.suit
                rank=tier.rank
                class=card_class
            >
                <div class="flex flex-col p-8 space-y-6 h-full">
                    <div class="pt-4 space-y-2">
                        <h3 class="flex gap-2 items-center text-2xl font-bold text-foreground">
                            <SuitIcon suit=tier.suit size=20 />
                            {tier.name}
                        </h3>
                        <p class="text-sm text-muted-foreground min-h-[40px]">{tier.description}</p>
                    </div>
                    <div class="mb-2 space-y-1">
                        <p class="text-3xl font-bold text-accent">{tier.price}</p>
                        <p class="text-xs tracking-wide uppercase text-muted-foreground">
                            "per project"
                        </p>
                    </div>
                    <ul class="flex-grow mb-4 space-y-3">
                        {tier
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex gap-3 items-start text-sm">
                                        <span class="mt-0.5 text-accent shrink-0">"✓"</span>
                                        <span class="text-foreground/90">{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <A href="/contact" attr:class=cta_class>
                        "Let's talk scope"
                    </A>
                </div>
            </PlayingCard>
        </div>
    }
}

#[component]
pub fn HirePage() -> impl IntoView {
    view! {
        <Title text="Hire Me" />
        <div class="py-16 px-4 pt-24 mx-auto max-w-7xl sm:px-6 lg:px-8">
            <div class="mb-16 space-y-6 text-center">
                <h1 class="text-4xl font-bold md:text-6xl text-foreground">"Build with Me"</h1>
                <p class="mx-auto max-w-4xl text-xl md:text-2xl text-muted-foreground">
                    "I build maintainable, scalable, and secure apps on a very fast timeline."
                    <br />
                    "Share your vision, and I'll give you a quote."
                </p>
            </div>
            <div class="grid grid-cols-1 gap-8 mb-16 md:grid-cols-2 lg:grid-cols-4">
                {pricing_tiers().iter().map(|tier| view! { <TierCard tier=tier /> }).collect_view()}
            </div>
            <div class="mx-auto max-w-4xl">
                <h2 class="mb-12 text-3xl font-bold text-center text-foreground">
                    "How we'll work"
                </h2>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-4">
                    {PHASES
                        .iter()
                        .map(|&(step, title, description)| {
                            view! {
                                <div class="space-y-3">
                                    <div class="text-4xl font-bold text-accent/30">{step}</div>
                                    <h3 class="text-xl font-semibold text-foreground">{title}</h3>
                                    <p class="text-sm text-muted-foreground">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="mt-20 space-y-6 text-center">
                <h2 class="text-3xl font-bold text-foreground">"Pick your card, let's build"</h2>
                <p class="mx-auto max-w-xl text-muted-foreground">
                    "Not sure which package fits? Let's talk through your project and I'll help you choose."
                </p>
                <A
                    href="/contact"
                    attr:class="inline-flex gap-2 items-center py-4 px-8 font-semibold rounded-lg transition-all duration-200 hover:scale-105 bg-accent text-accent-foreground hover:bg-accent/90"
                >
                    "Start a project →"
                </A>
            </div>
        </div>
    }
}
