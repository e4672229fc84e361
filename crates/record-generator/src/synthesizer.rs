//! Field-level synthesis of realistic fake values.
//!
//! Thin wrappers over the `fake` crate's fakers, plus the date-window and
//! identifier formats the fakers do not cover. All functions are infallible
//! and draw from the caller's RNG so a fixed seed reproduces the same values.

use chrono::{Duration, Months, NaiveDate};
use fake::faker::address::en::{CityName, StateName, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

// Date windows are expressed in whole days.
const DAYS_PER_YEAR: i64 = 365;

pub fn full_name(rng: &mut StdRng) -> String {
    Name().fake_with_rng(rng)
}

pub fn email(rng: &mut StdRng) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// Two-line postal address (street line, then city/state/zip line).
///
/// Callers normalize the line break to ", " before the value enters a
/// `Record`.
pub fn postal_address(rng: &mut StdRng) -> String {
    let number: u16 = rng.random_range(1..2000);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateName().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}\n{city}, {state} {zip}")
}

pub fn phone_number(rng: &mut StdRng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

/// SSN-shaped identifier (AAA-GG-SSSS).
pub fn national_id(rng: &mut StdRng) -> String {
    format!(
        "{:03}-{:02}-{:04}",
        rng.random_range(100..999),
        rng.random_range(10..99),
        rng.random_range(1000..9999)
    )
}

/// A birth date giving an age between 18 and 80 years as of `today`.
///
/// The window bounds use calendar years, not a 365-day approximation, so the
/// 18-year cutoff holds across leap days.
pub fn birth_date(rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
    let youngest = today - Months::new(12 * 18);
    let oldest = today - Months::new(12 * 80);
    let span_days = (youngest - oldest).num_days();
    oldest + Duration::days(rng.random_range(0..=span_days))
}

/// A date within the trailing 5 years, up to and including `today`.
pub fn registration_date(rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
    today - Duration::days(rng.random_range(0..=5 * DAYS_PER_YEAR))
}

/// A date within the trailing year, up to and including `today`.
pub fn payment_date(rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
    today - Duration::days(rng.random_range(0..=DAYS_PER_YEAR))
}
