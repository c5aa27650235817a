//! Static column-to-label mapping tables.
//!
//! Every wide survey column that participates in a long table is listed here
//! exactly once, together with the semantic tags it is unpivoted into.
//! Columns not listed never appear in derived output.

use std::fmt;

use worksurvey_storage::columns::{self, support, time};

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the label written to derived tables.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Returns all labels in display order.
            #[must_use]
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.label()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

label_enum! {
    /// Measurement period of a remote-work percentage.
    Period {
        /// The year before COVID.
        PreCovid => "Pre-COVID",
        /// The last three months.
        DuringCovid => "During-COVID",
        /// Stated preference for after COVID.
        FuturePreference => "Future Preference",
    }
}

label_enum! {
    /// Period an organisation-support question refers to.
    SupportPeriod {
        /// The year before COVID.
        LastYear => "Last Year",
        /// The last three months.
        LastThreeMonths => "Last 3 Months",
        /// After COVID.
        Future => "Future",
    }
}

label_enum! {
    /// Organisation-support question.
    SupportQuestion {
        /// Employer encouraged remote work.
        Encouraged => "Encouraged",
        /// Employer was prepared for remote work.
        Prepared => "Prepared",
        /// Remote work was common practice.
        CommonPractice => "Common practice",
        /// Permission to work remotely was easy to get.
        PermissionEasy => "Permission easy",
        /// Collaborating remotely was easy.
        Collaboration => "Collaboration",
        /// Would recommend remote work.
        Recommend => "Recommend",
        /// Would have more choice about remote work.
        Choice => "Choice",
    }
}

label_enum! {
    /// Where the time was spent.
    WorkType {
        /// Working at the workplace.
        Onsite => "Onsite",
        /// Working remotely.
        Remote => "Remote",
    }
}

label_enum! {
    /// What the time was spent on.
    Activity {
        /// Travelling to and from work.
        Commute => "Commute",
        /// Working.
        Work => "Work",
        /// Personal and family time.
        Personal => "Personal",
        /// Caring and domestic responsibilities.
        Caring => "Caring",
    }
}

label_enum! {
    /// Preferred-minus-actual remote percentage comparison.
    GapKind {
        /// Pre-COVID preference against pre-COVID actual.
        PreCovid => "gap_precovid",
        /// Recent preference against recent actual.
        Covid => "gap_covid",
        /// Future preference against the recent actual.
        FutureVsRecent => "gap_future_vs_recent",
    }
}

/// A remote-percentage column and its period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodColumn {
    /// Raw column name.
    pub column: &'static str,
    /// Period tag.
    pub period: Period,
}

/// A support column and its (period, question) tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportColumn {
    /// Raw column name.
    pub column: &'static str,
    /// Period tag.
    pub period: SupportPeriod,
    /// Question tag.
    pub question: SupportQuestion,
}

/// An hours column and its (work type, activity) tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeColumn {
    /// Raw column name.
    pub column: &'static str,
    /// Work-type tag.
    pub work_type: WorkType,
    /// Activity tag.
    pub activity: Activity,
}

/// One gap computed as `preferred - actual`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapDefinition {
    /// Gap tag.
    pub kind: GapKind,
    /// Preferred-percentage column.
    pub preferred: &'static str,
    /// Actual-percentage column.
    pub actual: &'static str,
}

/// Remote-percentage columns stacked into the period long table.
pub const PERIOD_COLUMNS: [PeriodColumn; 3] = [
    PeriodColumn {
        column: columns::REMOTE_PCT_LAST_YEAR,
        period: Period::PreCovid,
    },
    PeriodColumn {
        column: columns::REMOTE_PCT_LAST_3_MONTHS,
        period: Period::DuringCovid,
    },
    PeriodColumn {
        column: columns::REMOTE_PREF_PCT_FUTURE,
        period: Period::FuturePreference,
    },
];

/// The gap table is only built when every one of these columns exists.
pub const GAP_SOURCE_COLUMNS: [&str; 5] = [
    columns::REMOTE_PCT_LAST_YEAR,
    columns::REMOTE_PREF_PCT_LAST_YEAR,
    columns::REMOTE_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_FUTURE,
];

/// Gap computations. No post-COVID actual is observable, so the future
/// preference is compared against the most recent actual.
pub const GAP_DEFINITIONS: [GapDefinition; 3] = [
    GapDefinition {
        kind: GapKind::PreCovid,
        preferred: columns::REMOTE_PREF_PCT_LAST_YEAR,
        actual: columns::REMOTE_PCT_LAST_YEAR,
    },
    GapDefinition {
        kind: GapKind::Covid,
        preferred: columns::REMOTE_PREF_PCT_LAST_3_MONTHS,
        actual: columns::REMOTE_PCT_LAST_3_MONTHS,
    },
    GapDefinition {
        kind: GapKind::FutureVsRecent,
        preferred: columns::REMOTE_PREF_PCT_FUTURE,
        actual: columns::REMOTE_PCT_LAST_3_MONTHS,
    },
];

const fn support_column(
    column: &'static str,
    period: SupportPeriod,
    question: SupportQuestion,
) -> SupportColumn {
    SupportColumn {
        column,
        period,
        question,
    }
}

/// Organisation-support columns unpivoted into the support long table.
pub const SUPPORT_COLUMNS: [SupportColumn; 15] = {
    use SupportPeriod::{Future, LastThreeMonths, LastYear};
    use SupportQuestion::{
        Choice, Collaboration, CommonPractice, Encouraged, PermissionEasy, Prepared, Recommend,
    };
    [
        support_column(support::LAST_YEAR_ENCOURAGED, LastYear, Encouraged),
        support_column(support::LAST_YEAR_PREPARED, LastYear, Prepared),
        support_column(support::LAST_YEAR_COMMON_PRACTICE, LastYear, CommonPractice),
        support_column(support::LAST_YEAR_PERMISSION_EASY, LastYear, PermissionEasy),
        support_column(support::LAST_YEAR_COLLABORATION, LastYear, Collaboration),
        support_column(support::LAST_YEAR_RECOMMEND, LastYear, Recommend),
        support_column(support::LAST_3_MONTHS_ENCOURAGED, LastThreeMonths, Encouraged),
        support_column(support::LAST_3_MONTHS_PREPARED, LastThreeMonths, Prepared),
        support_column(support::LAST_3_MONTHS_COMMON_PRACTICE, LastThreeMonths, CommonPractice),
        support_column(support::LAST_3_MONTHS_PERMISSION_EASY, LastThreeMonths, PermissionEasy),
        support_column(support::LAST_3_MONTHS_COLLABORATION, LastThreeMonths, Collaboration),
        support_column(support::LAST_3_MONTHS_RECOMMEND, LastThreeMonths, Recommend),
        support_column(support::FUTURE_ENCOURAGED, Future, Encouraged),
        support_column(support::FUTURE_PREPARED, Future, Prepared),
        support_column(support::FUTURE_CHOICE, Future, Choice),
    ]
};

const fn time_column(column: &'static str, work_type: WorkType, activity: Activity) -> TimeColumn {
    TimeColumn {
        column,
        work_type,
        activity,
    }
}

/// Hours columns unpivoted into the time long table.
pub const TIME_COLUMNS: [TimeColumn; 8] = [
    time_column(time::ONSITE_COMMUTE, WorkType::Onsite, Activity::Commute),
    time_column(time::ONSITE_WORK, WorkType::Onsite, Activity::Work),
    time_column(time::ONSITE_PERSONAL, WorkType::Onsite, Activity::Personal),
    time_column(time::ONSITE_CARING, WorkType::Onsite, Activity::Caring),
    time_column(time::REMOTE_COMMUTE, WorkType::Remote, Activity::Commute),
    time_column(time::REMOTE_WORK, WorkType::Remote, Activity::Work),
    time_column(time::REMOTE_PERSONAL, WorkType::Remote, Activity::Personal),
    time_column(time::REMOTE_CARING, WorkType::Remote, Activity::Caring),
];
