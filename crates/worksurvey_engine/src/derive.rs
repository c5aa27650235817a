//! Derivation engine.
//!
//! Turns the raw wide survey table into the base table plus four long-format
//! tables. Derivation is a pure function of the raw table and runs once; the
//! result is immutable and shared by every query afterwards.
//!
//! Each long table is derived independently. When its source columns are
//! entirely absent it is `None` (unavailable), which is distinct from an
//! empty table: consumers use it to short-circuit to an empty state.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};
use worksurvey_foundation::Value;
use worksurvey_storage::columns::{
    ACTIVITY, AGE, AGE_GROUP, BIRTH_YEAR, GAP, GENDER, HOURS, INDUSTRY, LOCATION, ORG_SIZE,
    PERIOD, PERIOD_GAP, QUESTION, REMOTE_PCT, RESPONSE_ID, SCORE, WORK_TYPE,
};
use worksurvey_storage::{ColumnIndex, Row, Schema, Table, TableBuilder};

use crate::age;
use crate::config::SurveyConfig;
use crate::labels::{
    GAP_DEFINITIONS, GAP_SOURCE_COLUMNS, PERIOD_COLUMNS, SUPPORT_COLUMNS, TIME_COLUMNS,
};

/// Respondent attributes copied into the period long table, when present.
pub const REMOTE_LONG_ATTRIBUTES: [&str; 5] = [AGE_GROUP, GENDER, ORG_SIZE, INDUSTRY, LOCATION];

/// The full set of tables derived from one raw survey table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedTables {
    /// Raw columns plus `response_id`, `age`, and `age_group`.
    pub base: Table,
    /// One row per (respondent, period) with a remote percentage.
    pub remote_long: Option<Table>,
    /// One row per (respondent, gap type) for complete respondents.
    pub gap: Option<Table>,
    /// One row per (respondent, period, question) support score.
    pub support_long: Option<Table>,
    /// One row per (respondent, work type, activity) hour count.
    pub time_long: Option<Table>,
}

impl DerivedTables {
    /// Returns each long table by name, `None` when unavailable.
    #[must_use]
    pub fn long_tables(&self) -> [(&'static str, Option<&Table>); 4] {
        [
            ("remote_long", self.remote_long.as_ref()),
            ("gap", self.gap.as_ref()),
            ("support_long", self.support_long.as_ref()),
            ("time_long", self.time_long.as_ref()),
        ]
    }
}

/// Derives the base and long tables from the raw survey table.
///
/// Never fails: absent columns make the dependent output unavailable and
/// malformed cells degrade to nil.
#[must_use]
pub fn derive(raw: &Table, config: &SurveyConfig) -> DerivedTables {
    info!(
        rows = raw.len(),
        columns = raw.columns().len(),
        survey_year = config.survey_year,
        "deriving survey tables"
    );

    let base = base_table(raw, config);
    let derived = DerivedTables {
        remote_long: remote_long(&base),
        gap: gap_table(&base),
        support_long: support_long(&base),
        time_long: time_long(&base),
        base,
    };

    for (name, table) in derived.long_tables() {
        match table {
            Some(table) => debug!(table = name, rows = table.len(), "derived long table"),
            None => debug!(table = name, "source columns absent; table unavailable"),
        }
    }
    info!(base_rows = derived.base.len(), "derived survey tables");
    derived
}

// =============================================================================
// Base table
// =============================================================================

fn base_table(raw: &Table, config: &SurveyConfig) -> Table {
    let explicit = raw.column(RESPONSE_ID);
    let mut taken: HashSet<Arc<str>> = raw
        .column_values(RESPONSE_ID)
        .map(|ids| ids.filter_map(Value::to_key).collect())
        .unwrap_or_default();
    let mut ordinal = 0usize;
    let base = raw.with_column(RESPONSE_ID, |row| {
        let id = row
            .get(explicit)
            .to_key()
            .unwrap_or_else(|| synthesized_id(ordinal, &mut taken));
        ordinal += 1;
        Value::String(id)
    });
    warn_on_duplicate_ids(&base);

    let Some(birth_year) = base.column(BIRTH_YEAR) else {
        debug!("no birth_year column; age and age_group not derived");
        return base;
    };
    let base = base.with_column(AGE, |row| age::age_value(row.get(Some(birth_year)), config));
    let age = base.column(AGE);
    base.with_column(AGE_GROUP, |row| age::age_group_value(row.get(age), config))
}

/// The row ordinal as text, suffixed until it differs from every id in use.
fn synthesized_id(ordinal: usize, taken: &mut HashSet<Arc<str>>) -> Arc<str> {
    let mut id: Arc<str> = Arc::from(ordinal.to_string());
    let mut suffix = 0usize;
    while taken.contains(&id) {
        suffix += 1;
        id = Arc::from(format!("{ordinal}-{suffix}"));
    }
    taken.insert(Arc::clone(&id));
    id
}

fn warn_on_duplicate_ids(base: &Table) {
    let mut seen = HashSet::new();
    let duplicates = base
        .column_values(RESPONSE_ID)
        .map_or(0, |ids| ids.filter(|id| !seen.insert(*id)).count());
    if duplicates > 0 {
        warn!(duplicates, "response ids are not unique");
    }
}

// =============================================================================
// Long tables
// =============================================================================

/// Stacks mapped wide columns into a long table, one block per column.
///
/// Output columns are `response_id`, the carried attributes present in the
/// base table, the tag columns, then the value column. A source cell that is
/// missing or non-numeric contributes no row.
struct Unpivot<'a> {
    base: &'a Table,
    id: Option<ColumnIndex>,
    carried: Vec<ColumnIndex>,
    builder: TableBuilder,
    blocks: usize,
}

impl<'a> Unpivot<'a> {
    fn new(base: &'a Table, carried: &[&str], tags: &[&str], value: &str) -> Self {
        let carried: Vec<&str> = carried
            .iter()
            .copied()
            .filter(|name| base.has_column(name))
            .collect();
        let header = std::iter::once(RESPONSE_ID)
            .chain(carried.iter().copied())
            .chain(tags.iter().copied())
            .chain(std::iter::once(value));
        Self {
            base,
            id: base.column(RESPONSE_ID),
            carried: carried.iter().filter_map(|name| base.column(name)).collect(),
            builder: TableBuilder::new(Schema::new(header)),
            blocks: 0,
        }
    }

    fn stack(&mut self, source: &str, tags: &[Value]) {
        let Some(source) = self.base.column(source) else {
            return;
        };
        for row in self.base.rows() {
            let Some(value) = row.get(Some(source)).to_numeric() else {
                continue;
            };
            self.builder.push(self.long_row(row, tags, value));
        }
        self.blocks += 1;
    }

    fn long_row(&self, row: &Row, tags: &[Value], value: f64) -> Vec<Value> {
        let mut cells = Vec::with_capacity(self.builder.schema().len());
        cells.push(row.get(self.id).clone());
        cells.extend(self.carried.iter().map(|&c| row.get(Some(c)).clone()));
        cells.extend_from_slice(tags);
        cells.push(Value::Float(value));
        cells
    }

    fn finish(self) -> Option<Table> {
        (self.blocks > 0).then(|| self.builder.build())
    }
}

fn remote_long(base: &Table) -> Option<Table> {
    let mut unpivot = Unpivot::new(base, &REMOTE_LONG_ATTRIBUTES, &[PERIOD], REMOTE_PCT);
    for mapping in PERIOD_COLUMNS {
        unpivot.stack(mapping.column, &[Value::from(mapping.period.label())]);
    }
    unpivot.finish()
}

fn support_long(base: &Table) -> Option<Table> {
    let mut unpivot = Unpivot::new(base, &[], &[PERIOD, QUESTION], SCORE);
    for mapping in SUPPORT_COLUMNS {
        let tags = [
            Value::from(mapping.period.label()),
            Value::from(mapping.question.label()),
        ];
        unpivot.stack(mapping.column, &tags);
    }
    unpivot.finish()
}

fn time_long(base: &Table) -> Option<Table> {
    let mut unpivot = Unpivot::new(base, &[], &[WORK_TYPE, ACTIVITY], HOURS);
    for mapping in TIME_COLUMNS {
        let tags = [
            Value::from(mapping.work_type.label()),
            Value::from(mapping.activity.label()),
        ];
        unpivot.stack(mapping.column, &tags);
    }
    unpivot.finish()
}

/// Builds the gap table from respondents with every source percentage.
///
/// Complete-case filtering runs before any gap is computed, so a respondent
/// missing one source value contributes none of the three gap rows.
fn gap_table(base: &Table) -> Option<Table> {
    let missing: Vec<&str> = GAP_SOURCE_COLUMNS
        .iter()
        .copied()
        .filter(|name| !base.has_column(name))
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "gap source columns absent");
        return None;
    }

    let sources: Vec<Option<ColumnIndex>> =
        GAP_SOURCE_COLUMNS.iter().map(|name| base.column(name)).collect();
    let complete: Vec<&Row> = base
        .rows()
        .filter(|row| sources.iter().all(|&c| row.get(c).to_numeric().is_some()))
        .collect();

    let id = base.column(RESPONSE_ID);
    let mut builder = Table::builder([RESPONSE_ID, PERIOD_GAP, GAP]);
    for definition in GAP_DEFINITIONS {
        let preferred = base.column(definition.preferred);
        let actual = base.column(definition.actual);
        let label = Value::from(definition.kind.label());
        for row in &complete {
            let pair = (row.get(preferred).to_numeric(), row.get(actual).to_numeric());
            if let (Some(p), Some(a)) = pair {
                builder.push(vec![row.get(id).clone(), label.clone(), Value::Float(p - a)]);
            }
        }
    }
    Some(builder.build())
}
