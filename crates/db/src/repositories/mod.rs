//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod rental_repo;
pub mod video_repo;

pub use customer_repo::CustomerRepo;
pub use rental_repo::RentalRepo;
pub use video_repo::VideoRepo;
