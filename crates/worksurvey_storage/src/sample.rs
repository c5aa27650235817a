//! Deterministic synthetic survey responses.
//!
//! Produces a wide raw table with the same column layout as the survey
//! export, including missing cells and the occasional malformed birth year.
//! The same seed always produces the same table, which keeps benchmarks and
//! integration tests reproducible.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use worksurvey_foundation::Value;

use crate::columns::{self, support, time};
use crate::table::Table;

const GENDERS: &[&str] = &["Woman", "Man", "Non-binary", "Prefer not to say"];
const INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "Professional services",
        &["Legal services", "Accounting", "Consulting"],
    ),
    ("Public administration", &["State government", "Local government"]),
    ("Health care", &["Hospitals", "Allied health"]),
    ("Education", &["Tertiary education", "School education"]),
    ("Financial services", &["Banking", "Insurance"]),
];
const ORG_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];
const LOCATIONS: &[&str] = &["Metro", "Regional"];

const REMOTE_COLUMNS: &[&str] = &[
    columns::REMOTE_PCT_LAST_YEAR,
    columns::REMOTE_PREF_PCT_LAST_YEAR,
    columns::REMOTE_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_FUTURE,
];
const SUPPORT_COLUMNS: &[&str] = &[
    support::LAST_YEAR_ENCOURAGED,
    support::LAST_YEAR_PREPARED,
    support::LAST_YEAR_COMMON_PRACTICE,
    support::LAST_YEAR_PERMISSION_EASY,
    support::LAST_YEAR_COLLABORATION,
    support::LAST_YEAR_RECOMMEND,
    support::LAST_3_MONTHS_ENCOURAGED,
    support::LAST_3_MONTHS_PREPARED,
    support::LAST_3_MONTHS_COMMON_PRACTICE,
    support::LAST_3_MONTHS_PERMISSION_EASY,
    support::LAST_3_MONTHS_COLLABORATION,
    support::LAST_3_MONTHS_RECOMMEND,
    support::FUTURE_ENCOURAGED,
    support::FUTURE_PREPARED,
    support::FUTURE_CHOICE,
];
const TIME_COLUMNS: &[&str] = &[
    time::ONSITE_COMMUTE,
    time::ONSITE_WORK,
    time::ONSITE_PERSONAL,
    time::ONSITE_CARING,
    time::REMOTE_COMMUTE,
    time::REMOTE_WORK,
    time::REMOTE_PERSONAL,
    time::REMOTE_CARING,
];

/// Configuration for a synthetic survey.
#[derive(Clone, Debug)]
pub struct SampleSurvey {
    /// Number of respondents (rows).
    pub respondents: usize,
    /// RNG seed.
    pub seed: u64,
    missing_rate: f64,
    /// Whether to emit an explicit `response_id` column.
    pub with_response_ids: bool,
}

impl Default for SampleSurvey {
    fn default() -> Self {
        Self {
            respondents: 500,
            seed: 2020,
            missing_rate: 0.05,
            with_response_ids: true,
        }
    }
}

impl SampleSurvey {
    /// Creates a sample with the given number of respondents.
    #[must_use]
    pub fn new(respondents: usize) -> Self {
        Self {
            respondents,
            ..Self::default()
        }
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the blank-answer probability.
    ///
    /// The rate is clamped to `0.0..=1.0`; NaN means no blanks.
    #[must_use]
    pub fn with_missing_rate(mut self, rate: f64) -> Self {
        self.missing_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Probability that any single answer is left blank.
    #[must_use]
    pub fn missing_rate(&self) -> f64 {
        self.missing_rate
    }

    /// Builder method to enable or disable the `response_id` column.
    #[must_use]
    pub fn with_response_ids(mut self, enabled: bool) -> Self {
        self.with_response_ids = enabled;
        self
    }

    /// Generates the raw wide table.
    #[must_use]
    pub fn generate(&self) -> Table {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let records: Vec<Vec<(&str, Value)>> = (0..self.respondents)
            .map(|i| self.respondent(i, &mut rng))
            .collect();
        Table::from_records(records)
    }

    fn respondent(&self, ordinal: usize, rng: &mut ChaCha8Rng) -> Vec<(&'static str, Value)> {
        let mut record = Vec::with_capacity(40);
        if self.with_response_ids {
            record.push((columns::RESPONSE_ID, Value::from(format!("R{ordinal:05}"))));
        }

        let birth_year = if rng.gen_bool(0.02) {
            Value::from("unknown")
        } else {
            Value::Int(rng.gen_range(1950..2003))
        };
        record.push((columns::BIRTH_YEAR, self.blank_or(rng, birth_year)));

        let gender = pick(rng, GENDERS);
        record.push((columns::GENDER, self.blank_or(rng, Value::from(gender))));

        let (industry, details) = INDUSTRIES[rng.gen_range(0..INDUSTRIES.len())];
        let detailed = pick(rng, details);
        record.push((columns::INDUSTRY, self.blank_or(rng, Value::from(industry))));
        record.push((
            columns::INDUSTRY_DETAILED,
            self.blank_or(rng, Value::from(detailed)),
        ));

        let org_size = pick(rng, ORG_SIZES);
        record.push((columns::ORG_SIZE, self.blank_or(rng, Value::from(org_size))));
        let location = pick(rng, LOCATIONS);
        record.push((columns::LOCATION, self.blank_or(rng, Value::from(location))));

        for &column in REMOTE_COLUMNS {
            let pct = Value::Int(rng.gen_range(0..=10) * 10);
            record.push((column, self.blank_or(rng, pct)));
        }
        for &column in SUPPORT_COLUMNS {
            let score = Value::Int(rng.gen_range(1..=5));
            record.push((column, self.blank_or(rng, score)));
        }
        for &column in TIME_COLUMNS {
            let tenths: i32 = rng.gen_range(0..=100);
            let hours = Value::Float(f64::from(tenths) / 10.0);
            record.push((column, self.blank_or(rng, hours)));
        }
        record
    }

    fn blank_or(&self, rng: &mut ChaCha8Rng, value: Value) -> Value {
        if rng.gen_bool(self.missing_rate) {
            Value::Nil
        } else {
            value
        }
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}
