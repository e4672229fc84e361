//! The lazy record sequence with null-injection.

use crate::synthesizer;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use record_core::{normalize_address, Record};

/// Seeded iterator producing exactly `count` records, then `None`.
///
/// The sequence is lazy (record k+1 is synthesized only after record k has
/// been consumed) and not restartable. Each optional field is present when a
/// uniform draw is strictly greater than `null_probability`, so the
/// probability denotes absence, not presence. The absence draw happens before
/// the field value would be synthesized, so an absent field consumes exactly
/// one draw.
pub struct RecordGenerator {
    rng: StdRng,
    remaining: u64,
    null_probability: f64,
    today: NaiveDate,
}

impl RecordGenerator {
    /// Create a generator for `count` records with the given null-injection
    /// probability and RNG seed.
    pub fn new(count: u64, null_probability: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            remaining: count,
            null_probability,
            today: Utc::now().date_naive(),
        }
    }

    /// Number of records the iterator will still yield.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn synthesize(&mut self) -> Record {
        let rng = &mut self.rng;
        let name = synthesizer::full_name(rng);
        let email = synthesizer::email(rng);
        let address = normalize_address(&synthesizer::postal_address(rng));
        let phone = if rng.random::<f64>() > self.null_probability {
            Some(synthesizer::phone_number(rng))
        } else {
            None
        };
        let birth_date = synthesizer::birth_date(rng, self.today);
        let national_id = synthesizer::national_id(rng);
        let registration_date = synthesizer::registration_date(rng, self.today);
        let payment_date = if rng.random::<f64>() > self.null_probability {
            Some(synthesizer::payment_date(rng, self.today))
        } else {
            None
        };

        Record {
            name,
            email,
            address,
            phone,
            birth_date,
            national_id,
            registration_date,
            payment_date,
        }
    }
}

impl Iterator for RecordGenerator {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.synthesize())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordGenerator {}
