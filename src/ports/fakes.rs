//! In-memory port implementations shared by the unit tests.

use std::{
    collections::HashMap,
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use error_stack::report;

use crate::domain::{
    credential::Credential,
    sheets::number_format::ColumnFormatPatch,
    table::{CellValue, Table},
};

use super::{
    credential_source::{AuthError, CredentialSource},
    spreadsheet::{RemoteError, SpreadsheetRead, SpreadsheetWrite, WriteSummary},
    table_source::{DataError, TableSource},
    token_store::TokenStore,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SpreadsheetCall {
    Read(String),
    Clear(String),
    Write {
        range: String,
        rows: Vec<Vec<CellValue>>,
    },
    Format(ColumnFormatPatch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOp {
    Read,
    Clear,
    Write,
    Format,
}

#[derive(Default)]
pub struct FakeSpreadsheet {
    ranges: Mutex<HashMap<String, Vec<Vec<String>>>>,
    /// Writes whose range starts with the prefix append their rows to the extent range.
    extents: Vec<(String, String)>,
    failing: Vec<FakeOp>,
    calls: Mutex<Vec<SpreadsheetCall>>,
}

impl FakeSpreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: &str, rows: Vec<Vec<&str>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(str::to_owned).collect())
            .collect();
        self.ranges
            .get_mut()
            .unwrap()
            .insert(range.to_owned(), rows);
        self
    }

    /// Makes successful writes to `sheet_prefix` ranges grow what `extent_range` reads back.
    pub fn tracking_extent(mut self, sheet_prefix: &str, extent_range: &str) -> Self {
        self.extents
            .push((sheet_prefix.to_owned(), extent_range.to_owned()));
        self
    }

    pub fn failing(mut self, op: FakeOp) -> Self {
        self.failing.push(op);
        self
    }

    pub fn calls(&self) -> Vec<SpreadsheetCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<(String, Vec<Vec<CellValue>>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SpreadsheetCall::Write { range, rows } => Some((range, rows)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SpreadsheetCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: FakeOp, error: RemoteError) -> error_stack::Result<(), RemoteError> {
        if self.failing.contains(&op) {
            return Err(report!(error));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SpreadsheetRead for FakeSpreadsheet {
    async fn read_range(
        &self,
        range: &str,
    ) -> error_stack::Result<Vec<Vec<String>>, RemoteError> {
        self.record(SpreadsheetCall::Read(range.to_owned()));
        self.check(FakeOp::Read, RemoteError::FailedToReadRange)?;
        Ok(self
            .ranges
            .lock()
            .unwrap()
            .get(range)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl SpreadsheetWrite for FakeSpreadsheet {
    async fn clear_range(&self, range: &str) -> error_stack::Result<(), RemoteError> {
        self.record(SpreadsheetCall::Clear(range.to_owned()));
        self.check(FakeOp::Clear, RemoteError::FailedToClearRange)
    }

    async fn write_rows(
        &self,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> error_stack::Result<WriteSummary, RemoteError> {
        self.record(SpreadsheetCall::Write {
            range: range.to_owned(),
            rows: rows.to_vec(),
        });
        self.check(FakeOp::Write, RemoteError::FailedToWriteRange)?;
        for (prefix, extent_range) in &self.extents {
            if range.starts_with(prefix.as_str()) {
                let written = rows.iter().map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            CellValue::Text(text) => text.clone(),
                            other => other.to_json().to_string(),
                        })
                        .collect::<Vec<_>>()
                });
                self.ranges
                    .lock()
                    .unwrap()
                    .entry(extent_range.clone())
                    .or_default()
                    .extend(written);
            }
        }
        Ok(WriteSummary {
            updated_cells: rows.iter().map(Vec::len).sum::<usize>() as u32,
        })
    }

    async fn apply_column_format(
        &self,
        patch: &ColumnFormatPatch,
    ) -> error_stack::Result<(), RemoteError> {
        self.record(SpreadsheetCall::Format(patch.clone()));
        self.check(FakeOp::Format, RemoteError::FailedToFormatCells)
    }
}

#[derive(Default)]
pub struct FakeTokenStore {
    stored: Mutex<Option<Credential>>,
    corrupt: bool,
    saves: AtomicUsize,
}

impl FakeTokenStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holding(credential: Credential) -> Self {
        Self {
            stored: Mutex::new(Some(credential)),
            ..Self::default()
        }
    }

    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<Credential> {
        self.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TokenStore for FakeTokenStore {
    async fn load(&self) -> error_stack::Result<Option<Credential>, AuthError> {
        if self.corrupt {
            return Err(report!(AuthError::CorruptTokenCache));
        }
        Ok(self.stored())
    }

    async fn save(&self, credential: &Credential) -> error_stack::Result<(), AuthError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = Some(credential.clone());
        Ok(())
    }
}

pub struct FakeCredentialSource {
    name: &'static str,
    outcome: Result<Credential, AuthError>,
    calls: AtomicUsize,
}

impl FakeCredentialSource {
    pub fn issuing(name: &'static str, credential: Credential) -> Self {
        Self {
            name,
            outcome: Ok(credential),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &'static str, error: AuthError) -> Self {
        Self {
            name,
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CredentialSource for FakeCredentialSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn acquire(
        &self,
        _cached: Option<&Credential>,
    ) -> error_stack::Result<Credential, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(|error| report!(error))
    }
}

pub struct FakeTableSource {
    outcome: Result<Table, DataError>,
    calls: AtomicUsize,
}

impl FakeTableSource {
    pub fn returning(table: Table) -> Self {
        Self {
            outcome: Ok(table),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DataError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TableSource for FakeTableSource {
    fn load_table(&self, _path: &Path) -> error_stack::Result<Table, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(|error| report!(error))
    }
}
