pub mod page;
pub mod render;
pub mod style;
pub mod theme;

#[cfg(feature = "backend")]
pub mod cli;
#[cfg(feature = "backend")]
pub mod config;
#[cfg(feature = "backend")]
pub mod error;
#[cfg(feature = "backend")]
pub mod server;

pub use page::{AssetRef, PageView, TAGLINE};
pub use render::render_document;
