use serde::Serialize;

use super::{Category, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Published,
    RevampPending,
}

/// Hero media for a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "src")]
pub enum Media {
    Video(&'static str),
    Screenshot(&'static str),
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub suit: Suit,
    pub duration: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub media: Media,
    pub public: bool,
    pub case_study: bool,
    pub status: ProjectStatus,
    pub key_points: &'static [&'static str],
}

impl Project {
    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    pub fn is_revamping(&self) -> bool {
        self.status == ProjectStatus::RevampPending
    }
}

static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "ChainedChat",
        slug: "chainedchat",
        summary: "Full-stack AI chat application built and shipped in 2 weeks with real-time conversations and AI model chaining.",
        category: Category::Ai,
        suit: Suit::Spades,
        duration: "2 weeks",
        role: "Full-stack Developer",
        stack: &["Next.js", "TypeScript", "OpenAI API", "Supabase", "Tailwind CSS"],
        repo_url: Some("https://github.com/anipotts/chainedchat"),
        demo_url: Some("https://chainedchat.app"),
        media: Media::Video("/assets/projects/videos/chained_chat.mp4"),
        public: true,
        case_study: true,
        status: ProjectStatus::Published,
        key_points: &[
            "Built and deployed production-ready AI chat app in 2 weeks",
            "Implemented real-time message streaming with AI model chaining",
            "Achieved 95+ Lighthouse performance score",
        ],
    },
    Project {
        id: "2",
        title: "NYU Purity Test",
        slug: "nyu-purity-test",
        summary: "Viral gamified quiz that went viral across NYU campus, built in 4 hours with shareable results.",
        category: Category::Product,
        suit: Suit::Hearts,
        duration: "4 hours",
        role: "Solo Developer",
        stack: &["React", "TypeScript", "Vercel", "Tailwind CSS"],
        repo_url: None,
        demo_url: Some("https://nyupuritytest.com"),
        media: Media::Video("/assets/projects/videos/nyu_purity_test.mp4"),
        public: true,
        case_study: false,
        status: ProjectStatus::Published,
        key_points: &[
            "Viral product across NYU campus with 10k+ completions",
            "Built and shipped in 4 hours",
            "Shareable results drove organic growth",
        ],
    },
    Project {
        id: "3",
        title: "HabitTracks",
        slug: "habitracks",
        summary: "Music habit tracker for Burna Boy's \"Our Bad Habit\" campaign at Atlantic Records.",
        category: Category::Music,
        suit: Suit::Clubs,
        duration: "3 weeks",
        role: "Full-stack Developer",
        stack: &["React", "Node.js", "MongoDB", "Spotify API"],
        repo_url: None,
        demo_url: None,
        media: Media::Screenshot("/assets/projects/screenshots/badhabit.jpg"),
        public: true,
        case_study: false,
        status: ProjectStatus::RevampPending,
        key_points: &[
            "Built for Atlantic Records artist campaign",
            "Integrated Spotify API for music tracking",
            "UI revamp in progress",
        ],
    },
    Project {
        id: "4",
        title: "RSS Scraping Engine",
        slug: "rss-scraping-engine",
        summary: "Real-time RSS feed scraper with intelligent content aggregation and filtering.",
        category: Category::Product,
        suit: Suit::Hearts,
        duration: "4 weeks",
        role: "Backend Engineer",
        stack: &["Node.js", "PostgreSQL", "Redis", "Docker"],
        repo_url: None,
        demo_url: None,
        media: Media::Video("/assets/projects/videos/rss.mov"),
        public: true,
        case_study: false,
        status: ProjectStatus::RevampPending,
        key_points: &[
            "Processes 1000+ RSS feeds in real-time",
            "Intelligent content filtering and deduplication",
            "Architecture diagram available - UI pending",
        ],
    },
    Project {
        id: "5",
        title: "Quantercise",
        slug: "quantercise",
        summary: "Quantitative finance exercise platform with real-time market data integration.",
        category: Category::Quant,
        suit: Suit::Diamonds,
        duration: "4 weeks",
        role: "Full-stack Developer",
        stack: &["React", "Python", "FastAPI", "PostgreSQL", "Redis"],
        repo_url: None,
        demo_url: None,
        media: Media::Video("/assets/projects/videos/quantercise.mov"),
        public: false,
        case_study: true,
        status: ProjectStatus::Published,
        key_points: &[
            "Interactive quant finance exercises with real data",
            "Built custom pricing models and backtesting engine",
            "Used by 200+ students in quant club",
        ],
    },
    Project {
        id: "6",
        title: "300-Member Quant Platform",
        slug: "quant-platform",
        summary: "Full-stack member portal for 300-member intercollegiate quantitative finance club.",
        category: Category::Quant,
        suit: Suit::Diamonds,
        duration: "1 week",
        role: "Full-stack Developer",
        stack: &["Next.js", "TypeScript", "Supabase", "Tailwind CSS", "Vercel"],
        repo_url: Some("https://github.com/anipotts/quant-platform"),
        demo_url: Some("https://quantclub.app"),
        media: Media::Video("/assets/projects/videos/pgi-demo.mp4"),
        public: true,
        case_study: true,
        status: ProjectStatus::Published,
        key_points: &[
            "Built and shipped in 1 week for 300+ active members",
            "Member portal with events, resources, and networking",
            "Reduced admin overhead by 80%",
        ],
    },
    Project {
        id: "7",
        title: "2500 IG Account Tracker",
        slug: "ig-tracker",
        summary: "A&R project tracking 2,500 Instagram accounts for music industry talent discovery.",
        category: Category::Music,
        suit: Suit::Clubs,
        duration: "4 days",
        role: "Data Engineer",
        stack: &["Python", "PostgreSQL", "Instagram API", "Docker"],
        repo_url: None,
        demo_url: None,
        media: Media::Screenshot("/assets/projects/screenshots/spykdb.jpg"),
        public: true,
        case_study: false,
        status: ProjectStatus::RevampPending,
        key_points: &[
            "Tracked 2,500 Instagram accounts for A&R discovery",
            "Automated engagement and growth metrics",
            "Dashboard UI in development - architecture available",
        ],
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

/// Public projects, optionally narrowed to one category.
pub fn list_projects(category: Option<Category>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.public)
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

/// Lookup ignores visibility: hidden projects stay reachable when linked.
pub fn get_project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

pub fn list_featured_projects() -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.case_study && p.public)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_get_by_slug() {
        let p = get_project_by_slug("chainedchat").expect("chainedchat should exist");
        assert_eq!(p.slug, "chainedchat");
        assert_eq!(p.href(), "/projects/chainedchat");
        assert!(get_project_by_slug("no-such-slug").is_none());
    }

    #[test]
    fn test_slugs_unique() {
        let slugs = all_projects().iter().map(|p| p.slug).collect::<HashSet<_>>();
        assert_eq!(slugs.len(), all_projects().len());
    }

    #[test]
    fn test_featured_are_public_case_studies() {
        let featured = list_featured_projects();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.case_study && p.public));
        let slugs = featured.iter().map(|p| p.slug).collect::<Vec<_>>();
        assert_eq!(slugs, vec!["chainedchat", "quant-platform"]);
    }

    #[test]
    fn test_case_studies_resolve() {
        for p in all_projects().iter().filter(|p| p.case_study) {
            assert_eq!(get_project_by_slug(p.slug), Some(p));
        }
    }

    #[test]
    fn test_hidden_project_unlisted_but_reachable() {
        assert!(list_projects(None).iter().all(|p| p.slug != "quantercise"));
        let hidden = get_project_by_slug("quantercise").expect("hidden project reachable");
        assert!(!hidden.public);
    }

    #[test]
    fn test_list_by_category() {
        let all = list_projects(None);
        assert_eq!(all.len(), 6);
        let quant = list_projects(Some(Category::Quant));
        assert_eq!(quant.len(), 1);
        assert_eq!(quant[0].slug, "quant-platform");
        let music = list_projects(Some(Category::Music));
        assert!(music.iter().all(|p| p.category == Category::Music && p.public));
        assert_eq!(music.len(), 2);
    }

    #[test]
    fn test_listing_keeps_registry_order() {
        let ids = list_projects(None).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3", "4", "6", "7"]);
    }
}
