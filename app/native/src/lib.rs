//! gitinbit - UI state and layout coordination for a personal blog.
//!
//! The library holds the client-side core of the site: a small state store
//! (navigator position, wide-screen flag, font scale), the debounced viewport
//! classifier feeding it, the layout composer deciding which chrome is shown,
//! and the renderer turning content records into articles. [`site::Site`] ties
//! them together; the [`cli`] module exposes them on the command line.

pub mod cli;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod layout;
pub mod render;
pub mod schema;
pub mod site;
pub mod state;
pub mod storage;
pub mod throttle;
pub mod viewport;

mod platform;

pub use error::GitinbitError;
pub use site::Site;
