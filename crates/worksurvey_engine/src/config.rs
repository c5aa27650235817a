//! Configuration for the derivation engine.

use std::sync::Arc;

/// A half-open age interval `[lower, upper)` with its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AgeBand {
    /// Inclusive lower bound in years.
    pub lower: u32,
    /// Exclusive upper bound in years.
    pub upper: u32,
    /// Label written to the `age_group` column.
    pub label: Arc<str>,
}

impl AgeBand {
    /// Creates a band.
    #[must_use]
    pub fn new(lower: u32, upper: u32, label: impl Into<Arc<str>>) -> Self {
        Self {
            lower,
            upper,
            label: label.into(),
        }
    }

    /// Returns true if `age` falls inside this band.
    #[must_use]
    pub fn contains(&self, age: f64) -> bool {
        age >= f64::from(self.lower) && age < f64::from(self.upper)
    }
}

/// Configuration for deriving survey tables.
///
/// Controls how ages are computed and bucketed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurveyConfig {
    /// Year the survey was fielded; age is this minus the birth year.
    pub survey_year: i64,

    /// Ordered, non-overlapping age bands. Ages outside every band stay
    /// unbucketed.
    pub age_bands: Vec<AgeBand>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            survey_year: 2020,
            age_bands: vec![
                AgeBand::new(18, 25, "18-24"),
                AgeBand::new(25, 35, "25-34"),
                AgeBand::new(35, 45, "35-44"),
                AgeBand::new(45, 55, "45-54"),
                AgeBand::new(55, 65, "55-64"),
                AgeBand::new(65, 100, "65+"),
            ],
        }
    }
}

impl SurveyConfig {
    /// Builder method to set the survey year.
    #[must_use]
    pub fn with_survey_year(mut self, year: i64) -> Self {
        self.survey_year = year;
        self
    }

    /// Builder method to replace the age bands.
    #[must_use]
    pub fn with_age_bands(mut self, bands: Vec<AgeBand>) -> Self {
        self.age_bands = bands;
        self
    }

    /// Returns the band containing `age`, if any.
    #[must_use]
    pub fn age_band(&self, age: f64) -> Option<&AgeBand> {
        self.age_bands.iter().find(|band| band.contains(age))
    }
}
