use std::path::PathBuf;

use serde::Deserialize;

/// A project shown as a flip card in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single skill label
pub type Skill = String;

/// Identity block shown over the starfield
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    #[serde(default = "Hero::default_greeting")]
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    /// Bounce the title while the hero is shown
    #[serde(default = "Hero::default_bounce")]
    pub bounce: bool,
}

impl Hero {
    fn default_greeting() -> String {
        "Hi, I'm".to_string()
    }

    fn default_bounce() -> bool {
        true
    }

    pub fn title(&self) -> String {
        if self.greeting.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.greeting, self.name)
        }
    }
}

/// Where an action link points
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Mail address, opened through a `mailto:` URI
    Email(String),
    /// Absolute http(s) URL, opened in the system browser
    External(String),
    /// Path relative to the site root
    Download(PathBuf),
}

impl LinkTarget {
    /// URI handed to the platform opener. Downloads have none.
    pub fn uri(&self) -> Option<String> {
        match self {
            LinkTarget::Email(address) => Some(format!("mailto:{address}")),
            LinkTarget::External(url) => Some(url.clone()),
            LinkTarget::Download(_) => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Footer {
    pub owner: String,
    /// Fixed copyright year; the current year is used when absent
    #[serde(default)]
    pub year: Option<i32>,
}

impl Footer {
    pub fn text(&self) -> String {
        let year = self
            .year
            .unwrap_or_else(|| time::OffsetDateTime::now_utc().year());
        format!("© {} {}", year, self.owner)
    }
}

/// Everything the page displays. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    #[serde(default)]
    pub links: Vec<ActionLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub footer: Footer,
}

impl SiteContent {
    pub fn downloads(&self) -> impl Iterator<Item = &ActionLink> {
        self.links
            .iter()
            .filter(|link| matches!(link.target, LinkTarget::Download(_)))
    }
}
