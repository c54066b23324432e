//! Status generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::RecordStatus;

/// Pick a status uniformly from [`RecordStatus::ALL`].
pub fn generate_status<R: Rng>(rng: &mut R) -> RecordStatus {
    *RecordStatus::ALL
        .choose(rng)
        .unwrap_or(&RecordStatus::Active)
}
