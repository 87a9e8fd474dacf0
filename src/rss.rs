use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::config::SiteConfig;
use crate::content::BlogPost;

pub fn build_channel(config: &SiteConfig, posts: &[&BlogPost]) -> Channel {
    let items = posts
        .iter()
        .map(|p| {
            let link = format!("{}{}", config.site_url, p.href());
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title.to_string())
                .description(p.excerpt.to_string())
                .author(p.author.to_string())
                .pub_date(
                    p.published_on()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc().to_rfc2822()),
                )
                .categories(
                    p.tags
                        .iter()
                        .map(|t| CategoryBuilder::default().name(t.to_string()).build())
                        .collect::<Vec<_>>(),
                )
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{}/rss.xml", config.site_url));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Ani Potts")
        .description("Devlogs and notes on shipping AI products, quant tools and music tech fast.")
        .link(format!("{}/blog", config.site_url))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::list_posts;

    #[test]
    fn test_channel_links_use_site_url() {
        let config = SiteConfig {
            site_url: "https://example.com".to_string(),
            relay: None,
        };
        let channel = build_channel(&config, &list_posts());

        assert_eq!(channel.link(), "https://example.com/blog");
        assert_eq!(channel.items().len(), list_posts().len());
        let first = &channel.items()[0];
        assert_eq!(
            first.link(),
            Some("https://example.com/blog/shipping-a-viral-quiz-in-an-afternoon")
        );
        assert!(first.pub_date().is_some_and(|d| d.contains("2024")));
    }
}
