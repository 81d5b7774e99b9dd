//! Row structs for the `videos`, `rentals` and `customers` tables.

pub mod customer;
pub mod rental;
pub mod video;
