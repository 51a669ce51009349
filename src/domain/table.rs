use serde_json::Value;

/// Field values the exporter's tooling reads as "no value", matched exactly.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// A single cell as it travels from the CSV export to the sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Types a raw CSV field. Empty fields and missing markers (`NA`, `NaN`, ...) become
    /// [`CellValue::Null`].
    pub fn infer(raw: &str) -> Self {
        if is_missing(raw) {
            return CellValue::Null;
        }
        if let Ok(integer) = raw.parse::<i64>() {
            return CellValue::Integer(integer);
        }
        match raw.parse::<f64>() {
            Ok(float) if float.is_finite() => CellValue::Float(float),
            _ => CellValue::Text(raw.to_owned()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Integer(integer) => Value::from(*integer),
            CellValue::Float(float) => serde_json::Number::from_f64(*float)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Text(text) => Value::String(text.clone()),
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_owned())
    }
}

/// Row-major table of cells. Rows are not required to share a width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops the first `skip_rows` rows and keeps at most `max_columns` cells per row.
    pub fn window(self, skip_rows: usize, max_columns: usize) -> Self {
        let rows = self
            .rows
            .into_iter()
            .skip(skip_rows)
            .map(|mut row| {
                row.truncate(max_columns);
                row
            })
            .collect();
        Self { rows }
    }
}
