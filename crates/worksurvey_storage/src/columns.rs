//! Names of the survey columns read and written by worksurvey.
//!
//! Raw columns follow the cleaned 2020 remote-working survey export.
//! Derived and aggregate columns are the contract between the engine and the
//! presentation layer.

// =============================================================================
// Respondent attributes
// =============================================================================

/// Stable per-respondent identifier.
pub const RESPONSE_ID: &str = "response_id";
/// Year of birth.
pub const BIRTH_YEAR: &str = "birth_year";
/// Respondent gender.
pub const GENDER: &str = "gender";
/// Broad industry.
pub const INDUSTRY: &str = "industry";
/// Detailed industry, nested under [`INDUSTRY`].
pub const INDUSTRY_DETAILED: &str = "industry_detailed";
/// Organisation size band.
pub const ORG_SIZE: &str = "org_size";
/// Respondent location.
pub const LOCATION: &str = "location";

/// Age in whole years at the survey year (derived).
pub const AGE: &str = "age";
/// Age band label (derived).
pub const AGE_GROUP: &str = "age_group";

// =============================================================================
// Remote-work percentages
// =============================================================================

/// Share of time worked remotely in the year before COVID.
pub const REMOTE_PCT_LAST_YEAR: &str = "remote_work_pct_last_year";
/// Preferred remote share in the year before COVID.
pub const REMOTE_PREF_PCT_LAST_YEAR: &str = "remote_work_pref_pct_last_year";
/// Share of time worked remotely in the last three months.
pub const REMOTE_PCT_LAST_3_MONTHS: &str = "remote_work_pct_last_3_months";
/// Preferred remote share in the last three months.
pub const REMOTE_PREF_PCT_LAST_3_MONTHS: &str = "remote_work_pref_pct_last_3_months";
/// Preferred remote share after COVID.
pub const REMOTE_PREF_PCT_FUTURE: &str = "remote_work_pref_pct_future";

// =============================================================================
// Organisation support (1-5 agreement / likelihood)
// =============================================================================

#[allow(missing_docs)]
pub mod support {
    pub const LAST_YEAR_ENCOURAGED: &str = "remote_last_year_org_encouraged_agreement";
    pub const LAST_YEAR_PREPARED: &str = "remote_last_year_org_prepared_agreement";
    pub const LAST_YEAR_COMMON_PRACTICE: &str = "remote_last_year_common_practice_agreement";
    pub const LAST_YEAR_PERMISSION_EASY: &str = "remote_last_year_permission_easy_agreement";
    pub const LAST_YEAR_COLLABORATION: &str = "remote_last_year_collaboration_easy_agreement";
    pub const LAST_YEAR_RECOMMEND: &str = "remote_last_year_recommend_agreement";

    pub const LAST_3_MONTHS_ENCOURAGED: &str = "remote_last_3_months_org_encouraged_agreement";
    pub const LAST_3_MONTHS_PREPARED: &str = "remote_last_3_months_org_prepared_agreement";
    pub const LAST_3_MONTHS_COMMON_PRACTICE: &str =
        "remote_last_3_months_common_practice_agreement";
    pub const LAST_3_MONTHS_PERMISSION_EASY: &str =
        "remote_last_3_months_permission_easy_agreement";
    pub const LAST_3_MONTHS_COLLABORATION: &str =
        "remote_last_3_months_collaboration_easy_agreement";
    pub const LAST_3_MONTHS_RECOMMEND: &str = "remote_last_3_months_recommend_agreement";

    // The export kept the question text verbatim for the post-COVID block.
    pub const FUTURE_ENCOURAGED: &str = "Imagine that COVID-19 is cured or eradicated. How likely would you consider the following statements? - My employer would encourage more remote working";
    pub const FUTURE_PREPARED: &str = "Imagine that COVID-19 is cured or eradicated. How likely would you consider the following statements? - My employer would make changes to support remote working";
    pub const FUTURE_CHOICE: &str = "Imagine that COVID-19 is cured or eradicated. How likely would you consider the following statements? - I would have more choice about whether I work remotely";
}

// =============================================================================
// Time allocation (hours)
// =============================================================================

#[allow(missing_docs)]
pub mod time {
    pub const ONSITE_COMMUTE: &str = "onsite_commute_hours";
    pub const ONSITE_WORK: &str = "onsite_work_hours";
    pub const ONSITE_PERSONAL: &str = "onsite_personal_hours";
    pub const ONSITE_CARING: &str = "onsite_caring_hours";
    pub const REMOTE_COMMUTE: &str = "remote_commute_hours";
    pub const REMOTE_WORK: &str = "remote_work_hours";
    pub const REMOTE_PERSONAL: &str = "remote_personal_hours";
    pub const REMOTE_CARING: &str = "remote_caring_hours";
}

// =============================================================================
// Long-table and aggregate columns
// =============================================================================

/// Measurement period label.
pub const PERIOD: &str = "period";
/// Remote-work percentage in a long table.
pub const REMOTE_PCT: &str = "remote_pct";
/// Gap type label.
pub const PERIOD_GAP: &str = "period_gap";
/// Preferred minus actual percentage.
pub const GAP: &str = "gap";
/// Support question label.
pub const QUESTION: &str = "question";
/// Support score.
pub const SCORE: &str = "score";
/// Onsite or remote.
pub const WORK_TYPE: &str = "work_type";
/// Time-allocation activity label.
pub const ACTIVITY: &str = "activity";
/// Hours spent on an activity.
pub const HOURS: &str = "hours";
/// Row count of a group.
pub const COUNT: &str = "count";
/// Group share of all counted rows, 0-100.
pub const PERCENT: &str = "percent";
