pub mod api;
pub mod controller;
pub mod render;

pub use api::{ApiClient, RemoteApi};
pub use controller::{BackendMode, SyncController};
pub use render::render_lines;
