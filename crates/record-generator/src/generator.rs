//! Main record generator.

use crate::generators::{numeric, person, status, timestamp, uuid};
use crate::record::EventRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Record generator producing one synthetic event per call.
///
/// A generator built with [`RecordGenerator::new`] draws its seed from the
/// operating system. [`RecordGenerator::with_seed`] gives reproducible ids,
/// statuses, names and phone numbers; the timestamp always reflects the
/// wall clock.
pub struct RecordGenerator {
    /// Random number generator shared by all field generators
    rng: StdRng,
    /// Number of records produced so far
    generated: u64,
}

impl RecordGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            generated: 0,
        }
    }

    /// Create a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Number of records generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate the next record.
    pub fn generate(&mut self) -> EventRecord {
        let event_timestamp = timestamp::generate_timestamp_now();
        let status = status::generate_status(&mut self.rng);
        let first_name = person::generate_first_name(&mut self.rng);
        let last_name = person::generate_last_name(&mut self.rng);
        let email = person::generate_email(&mut self.rng);
        let phone = numeric::generate_phone(&mut self.rng);
        let id = uuid::generate_uuid_v4(&mut self.rng);

        self.generated += 1;

        EventRecord {
            id,
            event_timestamp,
            status,
            first_name,
            last_name,
            email,
            phone,
        }
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = EventRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::numeric::{PHONE_MAX, PHONE_MIN};
    use crate::record::RecordStatus;
    use std::collections::HashSet;

    #[test]
    fn test_generate_single_record() {
        let mut generator = RecordGenerator::with_seed(42);
        let record = generator.generate();

        assert_eq!(record.id.get_version_num(), 4);
        assert!(RecordStatus::ALL.contains(&record.status));
        assert!((PHONE_MIN..=PHONE_MAX).contains(&record.phone));
        assert!(!record.first_name.is_empty());
        assert!(!record.last_name.is_empty());
        assert!(record.email.contains('@'));
        assert!(record.event_time().is_some());
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = RecordGenerator::with_seed(42);
        let mut gen2 = RecordGenerator::with_seed(42);

        let record1 = gen1.generate();
        let record2 = gen2.generate();

        assert_eq!(record1.id, record2.id);
        assert_eq!(record1.status, record2.status);
        assert_eq!(record1.first_name, record2.first_name);
        assert_eq!(record1.last_name, record2.last_name);
        assert_eq!(record1.email, record2.email);
        assert_eq!(record1.phone, record2.phone);
    }

    #[test]
    fn test_different_seeds_differ() {
        let record1 = RecordGenerator::with_seed(1).generate();
        let record2 = RecordGenerator::with_seed(2).generate();
        assert_ne!(record1.id, record2.id);
    }

    #[test]
    fn test_unique_ids() {
        let mut generator = RecordGenerator::new();
        let ids: HashSet<_> = generator.records(10_000).map(|r| r.id).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut generator = RecordGenerator::new();
        let times: Vec<_> = generator
            .records(200)
            .map(|r| r.event_time().unwrap())
            .collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_generated_counter() {
        let mut generator = RecordGenerator::with_seed(42);

        assert_eq!(generator.generated(), 0);
        generator.generate();
        assert_eq!(generator.generated(), 1);

        let rows: Vec<_> = generator.records(5).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(generator.generated(), 6);
    }

    #[test]
    fn test_zero_records() {
        let mut generator = RecordGenerator::with_seed(42);
        assert_eq!(generator.records(0).count(), 0);
        assert_eq!(generator.generated(), 0);
    }

    #[test]
    fn test_generated_record_round_trips() {
        let mut generator = RecordGenerator::with_seed(11);
        for record in generator.records(20) {
            let json = record.to_json().unwrap();
            assert_eq!(EventRecord::from_json(&json).unwrap(), record);
        }
    }
}
