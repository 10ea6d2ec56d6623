mod app;
pub use app::App;

pub mod command;
pub mod help;
