//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! delegate to the injected [`VideoStore`](vidrental_db::store::VideoStore)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod video;
