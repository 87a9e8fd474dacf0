use std::error::Error;
use std::fs::File;

use portfolio_site::config::SiteConfig;
use portfolio_site::content::list_posts;
use portfolio_site::rss::build_channel;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env()?;

    let posts = list_posts();
    let channel = build_channel(&config, &posts);

    let file = File::create("public/rss.xml")?;
    channel.pretty_write_to(file, b' ', 2)?;
    println!("wrote {} posts to public/rss.xml", posts.len());
    Ok(())
}
