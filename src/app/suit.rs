use leptos::prelude::*;

use crate::content::Suit;

#[component]
pub fn SuitIcon(
    suit: Suit,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <span
            class=format!("inline-block leading-none {} {class}", suit.text_class())
            style:font-size=format!("{size}px")
            aria-hidden="true"
        >
            {suit.glyph()}
        </span>
    }
}

/// Faint grid of all four suits behind a section.
#[component]
pub fn SuitPattern(#[prop(default = 0.05)] opacity: f64) -> impl IntoView {
    view! {
        <div
            class="overflow-hidden absolute inset-0 pointer-events-none"
            style:opacity=opacity.to_string()
        >
            <div class="grid absolute inset-0 grid-cols-8 gap-8 p-8">
                {(0..32usize)
                    .map(|i| view! { <SuitIcon suit=Suit::ALL[i % 4] size=32 class="opacity-50" /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Card-styled container with rank and suit in opposite corners.
#[component]
pub fn PlayingCard(
    #[prop(optional)] suit: Option<Suit>,
    #[prop(optional)] rank: Option<&'static str>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let corners = suit.zip(rank).map(|(suit, rank)| {
        view! {
            <div class="flex absolute top-2 left-2 flex-col gap-0.5 items-center">
                <span class="text-xs font-bold leading-none">{rank}</span>
                <SuitIcon suit=suit size=12 />
            </div>
            <div class="flex absolute right-2 bottom-2 flex-col gap-0.5 items-center rotate-180">
                <span class="text-xs font-bold leading-none">{rank}</span>
                <SuitIcon suit=suit size=12 />
            </div>
        }
    });

    view! {
        <div class=format!(
            "relative overflow-hidden rounded-lg border-2 shadow-lg transition-transform hover:scale-[1.02] bg-card-face border-card-border {class}",
        )>
            {corners}
            <div class="relative z-10">{children()}</div>
        </div>
    }
}
