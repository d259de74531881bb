pub mod config;
pub mod content;
pub mod links;
pub mod logging;
pub mod motion;
pub mod page;
pub mod scene;

pub use config::{ConfigError, SiteConfig};
pub use content::{ActionLink, Footer, Hero, LinkTarget, Project, SiteContent, Skill};
pub use page::{Face, FlipCard, Gallery, PageModel};
pub use scene::{OrbitControls, OrbitInput, SceneBackground, SceneConfig};

#[cfg(feature = "gui")]
pub mod gui;
