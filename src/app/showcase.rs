use leptos::{html, prelude::*};
use leptos_router::components::A;
use leptos_use::{use_element_size, UseElementSizeReturn};

use super::reveal::TextReveal;
use super::scroll::{band_progress, use_scroll_handle};
use crate::content::{list_featured_projects, Media, Project};
use crate::motion::{ScrollBand, ShowcaseTrack};

/// A tall section whose pinned stage slides its children sideways while the
/// page scrolls through it.
///
/// The strip and stage are both measured, so the last child lands flush with
/// the stage's trailing edge however many children there are.
#[component]
pub fn HorizontalShowcase(
    #[prop(default = 3)] screens: u32,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let section = NodeRef::<html::Div>::new();
    let stage = NodeRef::<html::Div>::new();
    let strip = NodeRef::<html::Div>::new();

    let progress = band_progress(use_scroll_handle(), section, ScrollBand::PINNED);
    let UseElementSizeReturn {
        width: stage_width, ..
    } = use_element_size(stage);
    let UseElementSizeReturn {
        width: strip_width, ..
    } = use_element_size(strip);

    let offset = move || {
        ShowcaseTrack::new(strip_width.get(), stage_width.get()).offset_at(progress.get())
    };

    view! {
        <div node_ref=section class="relative" style:height=format!("{}vh", screens * 100)>
            <div
                node_ref=stage
                class="flex overflow-hidden sticky top-0 items-center h-screen bg-gradient-to-b from-background via-accent/5 to-background"
            >
                {title
                    .map(|title| {
                        view! {
                            <div class="absolute right-0 left-0 top-20 z-10 px-4 text-center">
                                <TextReveal
                                    text=title
                                    class="font-serif text-4xl font-bold md:text-6xl text-foreground"
                                />
                            </div>
                        }
                    })}
                // no padding on the strip: its measured width must be the card span
                <div
                    node_ref=strip
                    class="flex gap-8 items-center mt-8 w-max lg:mt-16 h-[60vh] will-change-transform"
                    style:transform=move || format!("translateX({:.1}px)", offset())
                >
                    {children()}
                </div>
                <div class="flex absolute bottom-8 left-1/2 gap-2 items-center text-sm -translate-x-1/2 text-muted-foreground">
                    <span>"Scroll to explore"</span>
                    <span class="animate-pulse">"→"</span>
                </div>
            </div>
        </div>
    }
}

/// Video, screenshot or a plain gradient, filling its parent.
#[component]
pub fn ProjectMedia(project: &'static Project) -> impl IntoView {
    match project.media {
        Media::Video(src) => view! {
            <video
                src=src
                class="object-cover w-full h-full pointer-events-none"
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            />
        }
        .into_any(),
        Media::Screenshot(src) => view! {
            <img
                src=src
                alt=project.title
                class="object-cover w-full h-full transition-transform duration-700 group-hover:scale-105"
            />
        }
        .into_any(),
        Media::None => view! {
            <div class="w-full h-full bg-gradient-to-br from-accent/20 via-accent/10 to-background" />
        }
        .into_any(),
    }
}

#[component]
fn ShowcaseCard(project: &'static Project) -> impl IntoView {
    view! {
        <A
            href=project.href()
            attr:class="relative flex-shrink-0 h-full group w-[80vw] md:w-[70vw] lg:w-[60vw]"
        >
            <div class="overflow-hidden relative w-full h-full rounded-3xl border-2 shadow-2xl transition-all duration-500 border-border group-hover:border-accent">
                <div class="absolute inset-0">
                    <ProjectMedia project=project />
                </div>
                <div class="absolute inset-0 transition-all duration-500 ease-out bg-black/0 group-hover:bg-black/80" />
                <div class="flex absolute inset-0 flex-col justify-between p-6 opacity-0 transition-all duration-500 ease-out md:p-8 group-hover:opacity-100">
                    <div class="space-y-4">
                        <div class="inline-block py-2 px-4 text-sm font-medium tracking-wider uppercase rounded-full border bg-accent text-accent-foreground border-accent/30">
                            {project.category.label()}
                        </div>
                        <h3 class="font-serif text-3xl font-bold text-white md:text-4xl">
                            {project.title}
                        </h3>
                        <p class="text-base leading-relaxed text-gray-200">{project.summary}</p>
                        <ul class="space-y-2 text-sm text-gray-300">
                            {project
                                .key_points
                                .iter()
                                .take(3)
                                .map(|point| {
                                    view! {
                                        <li class="flex gap-2 items-start">
                                            <span class="mt-1 text-accent">"•"</span>
                                            <span>{*point}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex gap-4 items-center text-sm text-gray-300">
                            <span class="py-1 px-3 rounded-md backdrop-blur-sm bg-white/10">
                                {project.duration}
                            </span>
                            <span>"•"</span>
                            <span class="py-1 px-3 rounded-md backdrop-blur-sm bg-white/10">
                                {project.role}
                            </span>
                        </div>
                    </div>
                    <div class="flex justify-between items-center">
                        <div class="flex flex-wrap gap-2">
                            {project
                                .stack
                                .iter()
                                .take(4)
                                .map(|tech| {
                                    view! {
                                        <span class="py-1 px-3 text-xs text-white rounded-md border backdrop-blur-sm bg-white/10 border-white/20">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <span class="text-sm font-medium text-accent">"View Case Study →"</span>
                    </div>
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn FeaturedShowcase() -> impl IntoView {
    view! {
        <HorizontalShowcase title="Some of my most impactful work">
            {list_featured_projects()
                .into_iter()
                .map(|project| view! { <ShowcaseCard project=project /> })
                .collect_view()}
        </HorizontalShowcase>
    }
}
