//! Domain types shared by the store and HTTP layers.

pub mod error;
pub mod types;
pub mod video;
