use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_scroll, use_window_size, UseElementBoundingReturn,
    UseWindowSizeReturn,
};

use crate::motion::{document_progress, ScrollBand};

/// Window scroll state shared by every scroll-linked component.
///
/// Created once by `App` and provided as context. Listeners are owned by the
/// reactive scope that created the handle and removed with it.
#[derive(Clone, Copy)]
pub struct ScrollHandle {
    pub y: Signal<f64>,
    pub viewport_height: Signal<f64>,
    /// Document scroll in `[0, 1]`.
    pub progress: Memo<f64>,
}

impl ScrollHandle {
    pub fn new() -> Self {
        let (_, y) = use_window_scroll();
        let UseWindowSizeReturn { height, .. } = use_window_size();
        let content_height = RwSignal::new(0.0);

        // scrollHeight has no event of its own; re-read it whenever
        // scrolling or resizing could have exposed new layout
        Effect::new(move |_| {
            y.track();
            height.track();
            if let Some(root) = document().document_element() {
                content_height.set(root.scroll_height() as f64);
            }
        });

        let progress =
            Memo::new(move |_| document_progress(y.get(), content_height.get(), height.get()));

        Self {
            y,
            viewport_height: height,
            progress,
        }
    }

    pub fn scroll_to(&self, top: f64) {
        window().scroll_to_with_x_and_y(0.0, top.max(0.0));
    }

    /// Scroll so the element with `id` sits `offset` pixels below the top.
    pub fn scroll_to_id(&self, id: &str, offset: f64) {
        let Some(el) = document().get_element_by_id(id) else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let top = el.get_bounding_client_rect().top() + self.y.get_untracked();
        self.scroll_to(top - offset);
    }
}

impl Default for ScrollHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_scroll_handle() -> ScrollHandle {
    expect_context::<ScrollHandle>()
}

/// Progress of `target` through `band`, recomputed on every scroll tick.
pub fn band_progress(
    scroll: ScrollHandle,
    target: NodeRef<html::Div>,
    band: ScrollBand,
) -> Signal<f64> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    Signal::derive(move || {
        scroll.y.track();
        band.progress(top.get(), height.get(), scroll.viewport_height.get())
    })
}

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let scroll = use_scroll_handle();
    view! {
        <div
            class="fixed top-0 right-0 left-0 z-50 h-1 origin-left bg-accent"
            style:transform=move || format!("scaleX({:.4})", scroll.progress.get())
        />
    }
}
