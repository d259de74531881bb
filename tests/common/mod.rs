mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::{
    ConfigError, Face, Gallery, LinkTarget, OrbitInput, PageModel, Project, SceneBackground,
    SceneConfig, SiteConfig, SiteContent,
};
