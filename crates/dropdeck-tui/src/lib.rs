pub mod app;
pub mod components;
pub mod events;
pub mod form;
pub mod theme;
pub mod ui;

pub use app::App;
