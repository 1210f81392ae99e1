#![forbid(unsafe_code)]

pub mod app;
pub mod context;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::AppContext;
pub use routes::Route;
pub use views::ViewError;
