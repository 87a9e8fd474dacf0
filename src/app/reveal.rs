use leptos::{html, prelude::*};

use super::scroll::{band_progress, use_scroll_handle};
use crate::motion::{ScrollBand, WordReveal};

/// Text whose words brighten one after another as it scrolls into view.
#[component]
pub fn TextReveal(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = band_progress(use_scroll_handle(), node, ScrollBand::REVEAL);
    let reveal = WordReveal::new(&text);

    view! {
        <div node_ref=node class=class>
            {reveal
                .words()
                .map(|(word, range)| {
                    view! {
                        <span
                            class="inline-block mr-2"
                            style:opacity=move || format!("{:.3}", range.opacity(progress.get()))
                        >
                            {word.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
