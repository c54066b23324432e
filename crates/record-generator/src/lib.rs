//! Synthetic event record generator for kinesis-datagen.
//!
//! This crate provides the `RecordGenerator` which produces one fake
//! `EventRecord` per call. Every field except the timestamp is drawn from a
//! single `StdRng`, so a generator built with `RecordGenerator::with_seed`
//! yields the same ids, names and phone numbers on every run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - generated     │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    EventRecord { uuid, event_date, status, name, last_name, email, phone }
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::with_seed(42);
//! let record = generator.generate();
//! let json = record.to_json().unwrap();
//! println!("{json}");
//! ```
//!
//! # Generators
//!
//! - `uuid` - Random UUID v4 drawn from the generator RNG
//! - `timestamp` - Local wall-clock time, ISO 8601 without offset
//! - `status` - Uniform choice over `Active`, `Inactive`, `Canceled`
//! - `person` - Fake first name, last name and email (English locale)
//! - `numeric` - Phone number in `[900000000, 999999999]`

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator};
pub use record::{EventRecord, RecordStatus};
