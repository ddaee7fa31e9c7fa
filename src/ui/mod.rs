mod app;
mod panels;
mod services;
mod state;
pub mod widgets;

pub use app::AlgobenchApp;
pub use services::DataLoader;
pub use state::AppState;
