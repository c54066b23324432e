//! Individual field generators for an event record.
//!
//! Each generator draws from the RNG it is handed, so a seeded generator
//! reproduces every field except the wall-clock timestamp.

pub mod numeric;
pub mod person;
pub mod status;
pub mod timestamp;
pub mod uuid;
