//! HTTP API handlers for moji-web

pub mod buildinfo;
pub mod explore;
pub mod generate;
pub mod health;
pub mod preview;

pub use buildinfo::buildinfo_routes;
pub use explore::explore_routes;
pub use generate::generate_routes;
pub use health::health_routes;
pub use preview::preview_routes;
