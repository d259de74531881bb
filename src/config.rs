//! Site configuration.
//!
//! The built-in content ships inside the binary as TOML. A user file is
//! merged over it table by table, so a file that only sets
//! `[scene.stars] count = 8000` keeps every other built-in value.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    content::{ActionLink, Footer, Hero, LinkTarget, Project, SiteContent, Skill},
    scene::SceneConfig,
};

const BUILTIN: &str = include_str!("../assets/portfolio.toml");

/// Site root used with the built-in content
pub const DEFAULT_SITE_ROOT: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    hero: Hero,
    #[serde(default)]
    links: Vec<ActionLink>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skills: Vec<Skill>,
    footer: Footer,
    #[serde(default)]
    scene: SceneConfig,
    #[serde(default)]
    site_root: Option<PathBuf>,
}

/// Everything the view tree is built from
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content: SiteContent,
    pub scene: SceneConfig,
    /// Directory that download links resolve against
    pub site_root: PathBuf,
}

impl SiteConfig {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(None, Path::new(DEFAULT_SITE_ROOT))
    }

    /// Parse a TOML document merged over the built-in content
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(Some(text), Path::new(DEFAULT_SITE_ROOT))
    }

    /// Load from a file, or fall back to the built-in content.
    ///
    /// A relative `site_root` in the file resolves against the file's
    /// directory, which is also the default root for file configs.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("using built-in site config");
            return Self::builtin();
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let config = Self::parse(Some(&text), base_dir)?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    fn parse(overlay: Option<&str>, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut table: toml::Table = BUILTIN.parse()?;
        if let Some(text) = overlay {
            let overlay: toml::Table = text.parse()?;
            merge_tables(&mut table, overlay);
        }

        let raw: RawConfig = toml::Value::Table(table).try_into()?;
        let site_root = match raw.site_root {
            Some(root) if root.is_absolute() => root,
            Some(root) => base_dir.join(root),
            None => base_dir.to_path_buf(),
        };

        let config = Self {
            content: SiteContent {
                hero: raw.hero,
                links: raw.links,
                projects: raw.projects,
                skills: raw.skills,
                footer: raw.footer,
            },
            scene: raw.scene,
            site_root,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_site_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.site_root = root.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.scene.seed = seed;
        self
    }

    pub fn without_background(mut self) -> Self {
        self.scene.enabled = false;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let content = &self.content;

        if content.hero.name.trim().is_empty() {
            return Err(ConfigError::invalid("hero.name", "must not be empty"));
        }

        for (i, link) in content.links.iter().enumerate() {
            let field = format!("links[{i}]");
            if link.label.trim().is_empty() {
                return Err(ConfigError::invalid(format!("{field}.label"), "must not be empty"));
            }
            validate_target(&link.target).map_err(|reason| {
                ConfigError::invalid(format!("{field}.target"), reason)
            })?;
        }

        for (i, project) in content.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("projects[{i}].title"),
                    "must not be empty",
                ));
            }
        }

        if let Some(i) = content.skills.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::invalid(format!("skills[{i}]"), "must not be empty"));
        }

        let stars = &self.scene.stars;
        if stars.count == 0 {
            return Err(ConfigError::invalid("scene.stars.count", "must be positive"));
        }
        if stars.radius.is_nan() || stars.radius <= 0.0 {
            return Err(ConfigError::invalid("scene.stars.radius", "must be positive"));
        }
        if stars.depth.is_nan() || stars.depth < 0.0 {
            return Err(ConfigError::invalid("scene.stars.depth", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&stars.saturation) {
            return Err(ConfigError::invalid(
                "scene.stars.saturation",
                "must be between 0 and 1",
            ));
        }

        Ok(())
    }
}

fn validate_target(target: &LinkTarget) -> Result<(), String> {
    match target {
        LinkTarget::Email(address) => {
            let valid = address
                .split_once('@')
                .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty());
            if valid {
                Ok(())
            } else {
                Err(format!("`{address}` is not an email address"))
            }
        }
        LinkTarget::External(url) => {
            if url.starts_with("https://") || url.starts_with("http://") {
                Ok(())
            } else {
                Err(format!("`{url}` must be an http(s) URL"))
            }
        }
        LinkTarget::Download(path) => {
            let escapes = path.components().any(|c| {
                matches!(
                    c,
                    Component::ParentDir | Component::RootDir | Component::Prefix(_)
                )
            });
            if path.as_os_str().is_empty() || escapes {
                Err(format!(
                    "`{}` must be a path inside the site root",
                    path.display()
                ))
            } else {
                Ok(())
            }
        }
    }
}

/// Recursively merge `overlay` into `base`. Tables merge, everything else
/// (arrays included) is replaced.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
