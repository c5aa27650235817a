//! Age and age-group computation.

use worksurvey_foundation::Value;

use crate::config::SurveyConfig;

/// Computes age at the survey year from a raw birth-year cell.
///
/// A missing or non-numeric birth year yields `None`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn age_at(birth_year: &Value, survey_year: i64) -> Option<f64> {
    birth_year
        .to_numeric()
        .map(|year| survey_year as f64 - year)
}

/// Computes the `age` cell for a raw birth-year cell.
#[must_use]
pub fn age_value(birth_year: &Value, config: &SurveyConfig) -> Value {
    age_at(birth_year, config.survey_year).map_or(Value::Nil, Value::Float)
}

/// Buckets an `age` cell into its `age_group` label.
///
/// Missing ages and ages outside every band stay unbucketed (nil).
#[must_use]
pub fn age_group_value(age: &Value, config: &SurveyConfig) -> Value {
    age.to_numeric()
        .and_then(|age| config.age_band(age))
        .map_or(Value::Nil, |band| Value::String(band.label.clone()))
}
