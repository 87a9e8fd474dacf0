use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

use super::reveal::TextReveal;
use super::scroll::{band_progress, use_scroll_handle};
use super::showcase::{FeaturedShowcase, ProjectMedia};
use super::suit::{PlayingCard, SuitIcon};
use crate::content::{get_project_by_slug, list_projects, Category, Project};
use crate::motion::{interpolate, CardMotion, ScrollBand};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <FeaturedShowcase />
        <ProjectGrid />
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = band_progress(use_scroll_handle(), node, ScrollBand::THROUGH);

    view! {
        <div node_ref=node style=move || CardMotion::at(progress.get()).to_style()>
            <A href=project.href() attr:class="block h-full group">
                <PlayingCard
                    suit=project.suit
                    rank=project.category.rank()
                    class="h-full group-hover:border-accent"
                >
                    <div class="overflow-hidden relative rounded-t-md aspect-video">
                        <ProjectMedia project=project />
                        {project
                            .is_revamping()
                            .then(|| {
                                view! {
                                    <span class="absolute top-3 right-3 py-1 px-2 text-xs font-semibold rounded-md bg-background/90">
                                        "Revamp in progress"
                                    </span>
                                }
                            })}
                    </div>
                    <div class="p-6 space-y-3">
                        <div class="flex gap-2 items-center text-xs tracking-wider uppercase text-muted-foreground">
                            <SuitIcon suit=project.suit size=14 />
                            <span>{project.category.label()}</span>
                            <span>"•"</span>
                            <span>{project.duration}</span>
                        </div>
                        <h3 class="font-serif text-2xl font-bold transition-colors group-hover:text-accent">
                            {project.title}
                        </h3>
                        <p class="text-sm leading-relaxed text-muted-foreground">
                            {project.summary}
                        </p>
                        <div class="flex flex-wrap gap-2 pt-2">
                            {project
                                .stack
                                .iter()
                                .take(4)
                                .map(|tech| {
                                    view! {
                                        <span class="py-1 px-2 text-xs rounded-md border bg-muted border-border">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </PlayingCard>
            </A>
        </div>
    }
}

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let query = use_query_map();
    let initial = query
        .get_untracked()
        .get("category")
        .and_then(|raw| match Category::parse_filter(&raw) {
            Ok(filter) => filter,
            Err(e) => {
                log::warn!("{e}");
                None
            }
        });
    let (selected, set_selected) = signal(initial);

    let section = NodeRef::<html::Div>::new();
    let progress = band_progress(use_scroll_handle(), section, ScrollBand::THROUGH);
    let background_y = move || interpolate(progress.get(), &[0.0, 1.0], &[0.0, 100.0]);

    let filter_button = move |value: Option<Category>, label: &'static str| {
        view! {
            <button
                class=move || {
                    if selected.get() == value {
                        "py-2 px-6 text-sm font-medium rounded-full shadow-lg transition-all duration-200 bg-accent text-accent-foreground shadow-accent/20"
                    } else {
                        "py-2 px-6 text-sm font-medium rounded-full border transition-all duration-200 bg-card border-border text-muted-foreground hover:border-accent hover:text-accent"
                    }
                }
                on:click=move |_| set_selected.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div node_ref=section class="overflow-hidden relative py-16">
            <div
                class="absolute inset-0 opacity-10 pointer-events-none bg-[radial-gradient(circle_at_50%_50%,var(--accent)_0%,transparent_50%)]"
                style:transform=move || format!("translateY({:.1}%)", background_y())
            />
            <div class="relative z-10 px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-8 text-center">
                    <TextReveal
                        text="Other things I've worked on"
                        class="font-serif text-4xl font-bold md:text-6xl text-foreground"
                    />
                </div>
                <div class="flex flex-wrap gap-3 justify-center mb-8">
                    {filter_button(None, "All")}
                    {Category::ALL
                        .into_iter()
                        .map(|c| filter_button(Some(c), c.label()))
                        .collect_view()}
                </div>
                {move || {
                    let projects = list_projects(selected.get());
                    if projects.is_empty() {
                        view! {
                            <div class="py-12 text-center">
                                <p class="text-muted-foreground">
                                    "No projects found in this category."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                                {projects
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        {move || match get_project_by_slug(&slug()) {
            Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
            None => {
                view! {
                    <Title text="Project not found" />
                    <div class="py-32 text-center">
                        <h1 class="mb-4 font-serif text-4xl font-bold">"Project not found"</h1>
                        <A href="/projects" attr:class="text-accent hover:underline">
                            "← Back to projects"
                        </A>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let link = |href: Option<&'static str>, label: &'static str| {
        href.map(|href| {
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center py-3 px-6 font-semibold rounded-lg border-2 transition-all duration-200 border-border hover:border-accent hover:text-accent"
                >
                    {label}
                </a>
            }
        })
    };

    view! {
        <Title text=project.title />
        <article class="py-24 px-4 mx-auto max-w-4xl sm:px-6 lg:px-8">
            <A
                href="/projects"
                attr:class="inline-block mb-8 text-sm text-muted-foreground hover:text-accent"
            >
                "← All projects"
            </A>
            <header class="mb-8 space-y-4">
                <div class="flex gap-2 items-center text-sm tracking-wider uppercase text-muted-foreground">
                    <SuitIcon suit=project.suit size=16 />
                    <span>{project.category.label()}</span>
                    {project
                        .is_revamping()
                        .then(|| view! { <span class="text-accent">"• Revamp in progress"</span> })}
                </div>
                <h1 class="font-serif text-5xl font-bold">{project.title}</h1>
                <p class="text-xl leading-relaxed text-muted-foreground">{project.summary}</p>
            </header>
            <div class="overflow-hidden relative mb-12 rounded-2xl border-2 aspect-video border-border">
                <ProjectMedia project=project />
            </div>
            <dl class="grid grid-cols-1 gap-6 mb-12 sm:grid-cols-3">
                <div>
                    <dt class="text-xs tracking-wider uppercase text-muted-foreground">"Role"</dt>
                    <dd class="mt-1 font-medium">{project.role}</dd>
                </div>
                <div>
                    <dt class="text-xs tracking-wider uppercase text-muted-foreground">
                        "Duration"
                    </dt>
                    <dd class="mt-1 font-medium">{project.duration}</dd>
                </div>
                <div>
                    <dt class="text-xs tracking-wider uppercase text-muted-foreground">"Stack"</dt>
                    <dd class="mt-1 font-medium">{project.stack.join(", ")}</dd>
                </div>
            </dl>
            <section class="mb-12">
                <h2 class="mb-4 font-serif text-2xl font-bold">"Highlights"</h2>
                <ul class="space-y-3">
                    {project
                        .key_points
                        .iter()
                        .map(|point| {
                            view! {
                                <li class="flex gap-3 items-start">
                                    <SuitIcon suit=project.suit size=14 class="mt-1" />
                                    <span>{*point}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
            <div class="flex flex-wrap gap-4">
                {link(project.demo_url, "Live demo")}
                {link(project.repo_url, "Source code")}
                <A
                    href="/contact"
                    attr:class="inline-flex items-center py-3 px-6 font-semibold rounded-lg transition-colors bg-accent text-accent-foreground hover:bg-accent/90"
                >
                    "Build something like this"
                </A>
            </div>
        </article>
    }
}
