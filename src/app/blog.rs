use std::sync::LazyLock;

use dashmap::DashMap;
use leptos::{html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::content::blog::{rendered_post, search_posts};
use crate::content::blog::{get_post_by_slug, list_posts_by_tag, BlogPost, RenderedPost};

/// Browser-side memo of search results and rendered bodies.
static SEARCH_CACHE: LazyLock<DashMap<String, Vec<String>>> = LazyLock::new(DashMap::new);
static POST_CACHE: LazyLock<DashMap<String, RenderedPost>> = LazyLock::new(DashMap::new);

#[component]
pub fn BlogWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    view! {
        <Title text="Blog" />
        <div class="py-16 px-4 pt-24 mx-auto max-w-4xl sm:px-6 lg:px-8">
            <div class="mb-12 space-y-4 text-center">
                <h1 class="font-serif text-4xl font-bold md:text-6xl text-foreground">
                    <a
                        href="/blog"
                        on:click=move |_| clicked.notify()
                        class="transition-colors duration-200 hover:text-accent"
                    >
                        "Devlog"
                    </a>
                    <a
                        href="/rss.xml"
                        target="_blank"
                        class="ml-4 text-2xl align-middle transition-colors duration-200 text-muted-foreground hover:text-accent"
                        aria-label="RSS Feed"
                    >
                        "RSS"
                    </a>
                </h1>
                <p class="mx-auto max-w-2xl text-xl text-muted-foreground">
                    "Notes from shipping AI apps, products and quant tools fast."
                </p>
            </div>
            <Outlet />
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn search_posts_server(pattern: String) -> Result<Vec<String>, ServerFnError> {
    search_posts(&pattern)
        .map(|posts| posts.into_iter().map(|p| p.slug.to_string()).collect())
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
fn PostSummary(post: &'static BlogPost) -> impl IntoView {
    let date = post
        .published_on()
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <A href=post.href() attr:class="block p-6 rounded-xl border transition-colors duration-200 group border-border hover:border-accent">
            <div class="flex flex-wrap gap-3 items-center mb-2 text-sm text-muted-foreground">
                <span>{date}</span>
                <span>"•"</span>
                <span>{post.read_time}</span>
            </div>
            <h2 class="mb-2 font-serif text-2xl font-bold transition-colors group-hover:text-accent">
                {post.title}
            </h2>
            <p class="mb-4 text-muted-foreground">{post.excerpt}</p>
            <div class="flex flex-wrap gap-2">
                {post
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="py-1 px-2 text-xs rounded-md border bg-muted border-border">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </A>
    }
}

/// Search hits in result order, narrowed to `tag` when one is selected.
fn listed_posts(slugs: &[String], tag: Option<&str>) -> Vec<&'static BlogPost> {
    let tagged = tag.map(list_posts_by_tag);
    slugs
        .iter()
        .filter_map(|slug| get_post_by_slug(slug))
        .filter(|p| tagged.as_ref().is_none_or(|ts| ts.contains(p)))
        .collect()
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let query = use_query_map();
    let tag = move || query.get().get("tag");

    let slugs = Resource::new(move || search.get(), move |search| async move {
        let cache = &*SEARCH_CACHE;
        if let Some(hit) = cache.get(&search) {
            return Ok((*hit).clone());
        }
        let found = search_posts_server(search.clone()).await?;
        // only cache searches on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, found.clone());
        Ok::<_, ServerFnError>(found)
    });

    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| {
            let Some(el) = input_ref.get_untracked() else {
                return;
            };
            set_search.set(String::new());
            el.set_value("");
        },
        false,
    );

    view! {
        <div class="mb-8">
            <form
                class="flex flex-col gap-3 items-start sm:flex-row sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(el) = input_ref.get_untracked() else {
                        return;
                    };
                    set_search.set(el.value());
                }
            >
                <label for="blog_search" class="font-medium whitespace-nowrap text-accent">
                    "Search (regex):"
                </label>
                <input
                    id="blog_search"
                    class="flex-grow py-2 px-4 w-full rounded-lg border transition-all duration-200 sm:max-w-md focus:ring-2 focus:outline-none border-border bg-background text-foreground placeholder-muted-foreground focus:ring-accent"
                    node_ref=input_ref
                    placeholder="Enter search pattern..."
                />
                <button
                    type="submit"
                    class="py-2 px-4 whitespace-nowrap rounded-lg border transition-all duration-200 bg-accent/20 text-accent border-accent/30 hover:bg-accent/30"
                >
                    "Search"
                </button>
            </form>
            {move || {
                tag()
                    .map(|t| {
                        view! {
                            <p class="mt-3 text-sm text-muted-foreground">
                                "Tagged " <span class="font-semibold text-foreground">{t}</span> " • "
                                <A href="/blog" attr:class="text-accent hover:underline">
                                    "clear"
                                </A>
                            </p>
                        }
                    })
            }}
        </div>
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="h-24 rounded-xl animate-pulse bg-muted"></div>
                    <div class="h-24 rounded-xl animate-pulse bg-muted"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match slugs.await {
                    Err(e) => {
                        view! { <p class="text-red-500">{e.to_string()}</p> }.into_any()
                    }
                    Ok(slugs) => {
                        let posts = listed_posts(&slugs, tag().as_deref());
                        if posts.is_empty() {
                            view! { <p class="text-muted-foreground">"No posts match."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="space-y-6">
                                    {posts
                                        .into_iter()
                                        .map(|post| view! { <PostSummary post=post /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
            })}
        </Transition>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<RenderedPost, ServerFnError> {
    rendered_post(&slug).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let body = Resource::new(slug, move |slug| async move {
        let cache = &*POST_CACHE;
        if let Some(hit) = cache.get(&slug) {
            return Ok((*hit).clone());
        }
        let rendered = get_post_server(slug.clone()).await?;
        #[cfg(feature = "hydrate")]
        cache.insert(slug, rendered.clone());
        Ok::<_, ServerFnError>(rendered)
    });

    view! {
        {move || match get_post_by_slug(&slug()) {
            None => {
                view! {
                    <Title text="Post not found" />
                    <div class="py-16 text-center">
                        <p class="mb-4 text-xl">"Post not found"</p>
                        <A href="/blog" attr:class="text-accent hover:underline">
                            "← Back to the blog"
                        </A>
                    </div>
                }
                    .into_any()
            }
            Some(post) => {
                view! {
                    <Title text=post.title />
                    <article>
                        <A
                            href="/blog"
                            attr:class="inline-block mb-8 text-sm text-muted-foreground hover:text-accent"
                        >
                            "← All posts"
                        </A>
                        <header class="mb-8 space-y-4">
                            <h1 class="font-serif text-4xl font-bold md:text-5xl">{post.title}</h1>
                            <div class="flex flex-wrap gap-3 items-center text-sm text-muted-foreground">
                                <span>{post.author}</span>
                                <span>"•"</span>
                                <span>
                                    {post
                                        .published_on()
                                        .map(|d| d.format("%B %e, %Y").to_string())
                                        .unwrap_or_default()}
                                </span>
                                <span>"•"</span>
                                <span>{post.read_time}</span>
                            </div>
                            <div class="flex flex-wrap gap-2">
                                {post
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <A
                                                href=format!("/blog?tag={tag}")
                                                attr:class="py-1 px-2 text-xs rounded-md border bg-muted border-border hover:border-accent"
                                            >
                                                {*tag}
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </header>
                        {post
                            .cover_image
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt=post.title
                                        class="object-cover mb-10 w-full rounded-2xl border aspect-video border-border"
                                    />
                                }
                            })}
                        <Suspense fallback=move || {
                            view! { <div class="h-64 rounded-xl animate-pulse bg-muted"></div> }
                        }>
                            {move || Suspend::new(async move {
                                body.await
                                    .map(|p| {
                                        view! {
                                            <div class="max-w-none prose prose-invert" inner_html=p.html></div>
                                        }
                                    })
                            })}
                        </Suspense>
                    </article>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::blog::list_posts;

    #[test]
    fn test_listing_without_tag_keeps_search_order() {
        let slugs = list_posts()
            .iter()
            .rev()
            .map(|p| p.slug.to_string())
            .collect::<Vec<_>>();

        let listed = listed_posts(&slugs, None);

        assert_eq!(listed.len(), slugs.len());
        assert_eq!(listed[0].slug, slugs[0]);
    }

    #[test]
    fn test_listing_narrowed_by_tag() {
        let mut slugs = list_posts()
            .iter()
            .map(|p| p.slug.to_string())
            .collect::<Vec<_>>();
        slugs.push("no-such-post".to_string());

        let listed = listed_posts(&slugs, Some("Devlog"));

        assert!(!listed.is_empty());
        assert!(listed.iter().all(|p| p.has_tag("Devlog")));
        assert!(listed_posts(&slugs, Some("nonexistent-tag")).is_empty());
    }
}
