//! Threshold rules for the red list report.
//!
//! A dashboard row names a rep/brand, its region and the activity counts for the reporting
//! period. Falling below either threshold puts the rep on the red list, in the visit half, the
//! commitment half or both.

/// Visits below this count are a violation.
pub const VISIT_THRESHOLD: i64 = 32;
/// Commitments below this count are a violation.
pub const COMMITMENT_THRESHOLD: i64 = 7;

// Offsets inside a `C:J` dashboard row.
const IDENTITY_OFFSET: usize = 0;
const REGION_OFFSET: usize = 1;
const VISITS_OFFSET: usize = 3;
const COMMITMENTS_OFFSET: usize = 7;
const MIN_CELLS: usize = VISITS_OFFSET + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub identity: String,
    pub region: String,
    pub visits: i64,
    pub commitments: i64,
}

impl ActivityRecord {
    /// Reads a dashboard row. Returns `None` for rows that are too short, have a blank identity
    /// or region, or carry a count that is not an integer.
    pub fn from_dashboard_row<S: AsRef<str>>(row: &[S]) -> Option<Self> {
        if row.len() < MIN_CELLS {
            return None;
        }

        let identity = row[IDENTITY_OFFSET].as_ref();
        let region = row[REGION_OFFSET].as_ref();
        if identity.is_empty() || region.is_empty() {
            return None;
        }

        let visits = parse_count(row[VISITS_OFFSET].as_ref())?;
        let commitments = match row.get(COMMITMENTS_OFFSET) {
            Some(cell) => parse_count(cell.as_ref())?,
            None => 0,
        };

        Some(Self {
            identity: identity.to_owned(),
            region: region.to_owned(),
            visits,
            commitments,
        })
    }

    pub fn misses_visits(&self) -> bool {
        self.visits < VISIT_THRESHOLD
    }

    pub fn misses_commitments(&self) -> bool {
        self.commitments < COMMITMENT_THRESHOLD
    }
}

fn parse_count(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// One appended line of the `Red List` sheet (columns A to E).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedListRow {
    pub date_range: String,
    pub visit_identity: String,
    pub visit_region: String,
    pub commitment_identity: String,
    pub commitment_region: String,
}

impl RedListRow {
    /// Builds the report line for `record`, or `None` when both thresholds are met.
    pub fn for_record(record: &ActivityRecord, date_range: &str) -> Option<Self> {
        let misses_visits = record.misses_visits();
        let misses_commitments = record.misses_commitments();
        if !misses_visits && !misses_commitments {
            return None;
        }

        let pick = |violated: bool, value: &str| {
            if violated {
                value.to_owned()
            } else {
                String::new()
            }
        };

        Some(Self {
            date_range: date_range.to_owned(),
            visit_identity: pick(misses_visits, &record.identity),
            visit_region: pick(misses_visits, &record.region),
            commitment_identity: pick(misses_commitments, &record.identity),
            commitment_region: pick(misses_commitments, &record.region),
        })
    }

    pub fn in_commitment_list(&self) -> bool {
        !self.commitment_identity.is_empty()
    }

    pub fn into_cells(self) -> [String; 5] {
        [
            self.date_range,
            self.visit_identity,
            self.visit_region,
            self.commitment_identity,
            self.commitment_region,
        ]
    }
}

/// Builds red list rows for every qualifying dashboard row, in source order.
pub fn derive_rows<S: AsRef<str>>(dashboard: &[Vec<S>], date_range: &str) -> Vec<RedListRow> {
    dashboard
        .iter()
        .filter_map(|row| ActivityRecord::from_dashboard_row(row))
        .filter_map(|record| RedListRow::for_record(&record, date_range))
        .collect()
}
