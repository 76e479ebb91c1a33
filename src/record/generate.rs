//! Synthetic club entry generation.
//!
//! Entries are drawn uniformly from small built-in pools, which gives the
//! lookup benchmark plenty of repeated trainer names (multimap keys) and the
//! collision benchmark a realistic mix of short strings.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::ClubEntry;

/// Seasons are drawn from this inclusive range.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1990..=2020;

/// Scores are drawn from this inclusive range.
pub const SCORE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

const LOCATIONS: &[(&str, &str)] = &[
    ("England", "London"),
    ("England", "Manchester"),
    ("England", "Liverpool"),
    ("Spain", "Madrid"),
    ("Spain", "Barcelona"),
    ("Spain", "Seville"),
    ("Italy", "Milan"),
    ("Italy", "Turin"),
    ("Italy", "Rome"),
    ("Germany", "Munich"),
    ("Germany", "Dortmund"),
    ("France", "Paris"),
    ("France", "Marseille"),
    ("Portugal", "Lisbon"),
    ("Portugal", "Porto"),
    ("Netherlands", "Amsterdam"),
    ("Russia", "Moscow"),
    ("Russia", "Saint Petersburg"),
];

const CLUBS: &[&str] = &[
    "United",
    "City",
    "Athletic",
    "Rovers",
    "Wanderers",
    "Dynamo",
    "Sporting",
    "Olympique",
    "Real",
    "Inter",
    "Lokomotiv",
    "Spartak",
    "Ajax",
    "Benfica",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Carlo", "Diego", "Fabio", "Hans", "Jose", "Jurgen", "Louis", "Luis", "Marcelo",
    "Pep", "Rafael", "Thomas", "Unai", "Vicente", "Zinedine",
];

const LAST_NAMES: &[&str] = &[
    "Ancelotti", "Benitez", "Capello", "Del Bosque", "Ferguson", "Flick", "Guardiola", "Klopp",
    "Mourinho", "Simeone", "Tuchel", "Van Gaal", "Wenger", "Zidane",
];

/// Generates one random entry.
pub fn generate_entry<R: Rng + ?Sized>(rng: &mut R) -> ClubEntry {
    let (country, city) = LOCATIONS.choose(rng).copied().unwrap_or(("", ""));
    let club = CLUBS.choose(rng).copied().unwrap_or_default();
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
    let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();

    ClubEntry {
        country: country.to_string(),
        city: city.to_string(),
        club: format!("{city} {club}"),
        trainer: format!("{first} {last}"),
        year: rng.gen_range(YEAR_RANGE),
        score: rng.gen_range(SCORE_RANGE),
    }
}

/// Generates `count` random entries.
pub fn generate_entries<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ClubEntry> {
    (0..count).map(|_| generate_entry(rng)).collect()
}
