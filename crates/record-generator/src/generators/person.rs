//! Fake personal details.
//!
//! Names and emails come from the `fake` crate's English locale. The email
//! is drawn independently, so it does not embed the record's name.

use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

pub fn generate_first_name<R: Rng>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn generate_last_name<R: Rng>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

pub fn generate_email<R: Rng>(rng: &mut R) -> String {
    FreeEmail().fake_with_rng(rng)
}
