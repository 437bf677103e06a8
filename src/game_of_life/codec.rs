//! Conversion between engine state and the portable save record
//!
//! Record format: `{"size": N, "board": [[0|1, ...N], ...N]}`. When reading,
//! `rows` is accepted in place of `size`.

use super::{Grid, GridEngine};
use crate::error::{LifeError, LifeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Portable snapshot of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub size: usize,
    pub board: Vec<Vec<u8>>,
}

impl SaveRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({ "size": self.size, "board": self.board })
    }
}

/// Capture the engine's current grid as an independent record
pub fn encode(engine: &GridEngine) -> SaveRecord {
    let grid = engine.snapshot();
    SaveRecord {
        size: grid.size(),
        board: grid.to_bits(),
    }
}

/// Parse and validate record text
pub fn decode_str(text: &str) -> LifeResult<Grid> {
    let raw: Value = serde_json::from_str(text)?;
    decode(&raw)
}

/// Validate an untrusted record and build a fresh grid from it.
///
/// Checks run in order: size present and positive, board present and an
/// array, board length, each row's length. Cell values are never rejected;
/// anything truthy is alive.
pub fn decode(raw: &Value) -> LifeResult<Grid> {
    let size = declared_size(raw)?;

    let board = match raw.get("board") {
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(LifeError::MalformedRecord("'board' must be an array".into())),
        None => return Err(LifeError::MalformedRecord("missing 'board'".into())),
    };

    if board.len() != size {
        return Err(LifeError::ShapeMismatch {
            expected: size,
            found: board.len(),
            row: None,
        });
    }

    let mut rows = Vec::with_capacity(size);
    for (i, row) in board.iter().enumerate() {
        let cells = match row {
            Value::Array(cells) if cells.len() == size => cells,
            Value::Array(cells) => {
                return Err(LifeError::ShapeMismatch {
                    expected: size,
                    found: cells.len(),
                    row: Some(i),
                })
            }
            // A non-array row has no length to compare against
            _ => {
                return Err(LifeError::ShapeMismatch {
                    expected: size,
                    found: 0,
                    row: Some(i),
                })
            }
        };
        rows.push(cells.iter().map(is_truthy).collect());
    }

    Grid::from_rows(rows)
}

/// `size`, or `rows` when `size` is absent, null or zero
fn declared_size(raw: &Value) -> LifeResult<usize> {
    if !raw.is_object() {
        return Err(LifeError::MalformedRecord("record must be an object".into()));
    }

    let field = ["size", "rows"]
        .into_iter()
        .find_map(|key| raw.get(key).filter(|v| is_truthy(v)).map(|v| (key, v)));

    let (key, value) = field
        .ok_or_else(|| LifeError::MalformedRecord("missing 'size'".into()))?;

    // Whole-number floats such as 3.0 count as integers
    let whole = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u64)
    });

    whole
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            LifeError::MalformedRecord(format!("'{}' must be a positive integer, got {}", key, value))
        })
}

/// Loose truthiness: null, false, zero, NaN and the empty string are dead
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
