use std::borrow::Cow;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use regex::RegexBuilder;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
use super::ContentError;
#[cfg(feature = "ssr")]
use crate::markdown::render_markdown;

/// Markdown bodies, one `<slug>.md` per post.
#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
pub static GLOBAL_RENDER_CACHE: LazyLock<DashMap<String, RenderedPost>> =
    LazyLock::new(DashMap::new);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub cover_image: Option<&'static str>,
    pub tags: &'static [&'static str],
    /// ISO `YYYY-MM-DD`.
    pub publish_date: &'static str,
    pub author: &'static str,
    pub read_time: &'static str,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.publish_date, "%Y-%m-%d").ok()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Raw markdown body. Not embedded in hydrate builds.
    pub fn body(&self) -> Option<Cow<'static, str>> {
        let file = Assets::get(&format!("{}.md", self.slug))?;
        match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Cow::Owned(bytes) => String::from_utf8(bytes).ok().map(Cow::Owned),
        }
    }
}

/// A post body rendered to HTML on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPost {
    pub slug: String,
    pub html: String,
}

static POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "Building ChainedChat in 2 Weeks",
        slug: "building-chainedchat-in-2-weeks",
        excerpt: "How I shipped a production-ready AI chat app in 14 days, from idea to deployment.",
        cover_image: Some("/assets/projects/screenshots/habittracker.jpg"),
        tags: &["Engineering", "Product", "Devlog"],
        publish_date: "2024-01-15",
        author: "Ani Potts",
        read_time: "5 min read",
    },
    BlogPost {
        id: "2",
        title: "Shipping a Viral Quiz in an Afternoon",
        slug: "shipping-a-viral-quiz-in-an-afternoon",
        excerpt: "Four hours, one idea, ten thousand completions: what the NYU Purity Test taught me about scope.",
        cover_image: None,
        tags: &["Product", "Growth"],
        publish_date: "2024-03-02",
        author: "Ani Potts",
        read_time: "4 min read",
    },
];

/// All posts, newest first. Undated posts sort last.
pub fn list_posts() -> Vec<&'static BlogPost> {
    let mut posts = POSTS.iter().collect::<Vec<_>>();
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    posts
}

pub fn get_post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

pub fn list_posts_by_tag(tag: &str) -> Vec<&'static BlogPost> {
    list_posts().into_iter().filter(|p| p.has_tag(tag)).collect()
}

/// Case-insensitive regex search over title, excerpt, tags and body.
///
/// An empty pattern matches everything.
#[cfg(feature = "ssr")]
pub fn search_posts(pattern: &str) -> Result<Vec<&'static BlogPost>, ContentError> {
    if pattern.trim().is_empty() {
        return Ok(list_posts());
    }
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| ContentError::BadPattern(e.to_string()))?;
    Ok(list_posts()
        .into_iter()
        .filter(|p| {
            re.is_match(p.title)
                || re.is_match(p.excerpt)
                || p.tags.iter().any(|t| re.is_match(t))
                || p.body().is_some_and(|b| re.is_match(&b))
        })
        .collect())
}

/// Render a post body to HTML, caching by slug.
#[cfg(feature = "ssr")]
pub fn rendered_post(slug: &str) -> Result<RenderedPost, ContentError> {
    let cache = &*GLOBAL_RENDER_CACHE;
    if let Some(hit) = cache.get(slug) {
        return Ok(hit.clone());
    }
    let post = get_post_by_slug(slug).ok_or(ContentError::NotFound)?;
    let body = post.body().ok_or(ContentError::NotFound)?;
    let rendered = RenderedPost {
        slug: post.slug.to_string(),
        html: render_markdown(&body),
    };
    cache.insert(slug.to_string(), rendered.clone());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_posts_sorted_newest_first() {
        let posts = list_posts();
        assert_eq!(posts.len(), POSTS.len());
        for pair in posts.windows(2) {
            assert!(pair[0].published_on() >= pair[1].published_on());
        }
        assert_eq!(posts[0].slug, "shipping-a-viral-quiz-in-an-afternoon");
    }

    #[test]
    fn test_dates_parse_and_slugs_unique() {
        assert!(POSTS.iter().all(|p| p.published_on().is_some()));
        let slugs = POSTS.iter().map(|p| p.slug).collect::<HashSet<_>>();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_get_post_by_slug() {
        let post = get_post_by_slug("building-chainedchat-in-2-weeks").expect("post exists");
        assert_eq!(post.author, "Ani Potts");
        assert_eq!(post.href(), "/blog/building-chainedchat-in-2-weeks");
        assert!(get_post_by_slug("missing").is_none());
    }

    #[test]
    fn test_posts_by_tag() {
        let product = list_posts_by_tag("Product");
        assert_eq!(product.len(), 2);
        let devlog = list_posts_by_tag("Devlog");
        assert_eq!(devlog.len(), 1);
        assert_eq!(devlog[0].slug, "building-chainedchat-in-2-weeks");
        assert!(list_posts_by_tag("product").is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_every_post_has_a_body() {
        for post in POSTS {
            let body = post.body().unwrap_or_else(|| panic!("missing body for {}", post.slug));
            assert!(body.contains('#'));
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_search_posts() {
        let hits = search_posts("lighthouse").expect("valid pattern");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "building-chainedchat-in-2-weeks");

        assert_eq!(search_posts("").expect("empty pattern").len(), POSTS.len());
        assert!(search_posts("zzzz-nothing").expect("valid pattern").is_empty());
        assert!(matches!(search_posts("("), Err(ContentError::BadPattern(_))));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_rendered_post_is_cached() {
        let first = rendered_post("building-chainedchat-in-2-weeks").expect("renders");
        assert!(first.html.contains("<h2"));
        assert!(GLOBAL_RENDER_CACHE.contains_key("building-chainedchat-in-2-weeks"));
        let second = rendered_post("building-chainedchat-in-2-weeks").expect("renders");
        assert_eq!(first, second);
        assert_eq!(rendered_post("missing"), Err(ContentError::NotFound));
    }
}
