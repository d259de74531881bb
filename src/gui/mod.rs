//! Desktop front end built on iced.

mod app;
mod message;
mod sections;
mod starfield;
mod state;
mod widgets;

use iced::window;

pub use app::PortfolioApp;
pub use message::Message;
pub use state::AppState;

use crate::config::SiteConfig;

/// Open the portfolio window and block until it closes
pub fn run(config: SiteConfig) -> iced::Result {
    iced::application(
        move || PortfolioApp::new(config.clone()),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .subscription(PortfolioApp::subscription)
    .theme(PortfolioApp::theme)
    .window(window::Settings {
        size: state::INITIAL_VIEWPORT,
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}
