//! Platform helpers shared by the configuration and storage layers.

pub mod path;
