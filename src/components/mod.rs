pub mod app;
pub mod chat_panel;
pub mod chrome;
pub mod elevation_view;
pub mod info_panel;
pub mod sidebar;
pub mod zoom_controls;

pub use app::{App, AppProps};
