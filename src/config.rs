use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MatrixError;
use crate::math::Fill;

/// Dimensions-form construction settings.
///
/// Accepts the legacy key spellings `columns` (for `cols`) and `values` /
/// `val` (for `fill`). Missing dimensions default to 0 and are rejected when
/// the matrix is built.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MatrixConfig<T> {
    #[serde(default)]
    pub rows: i64,

    #[serde(default, alias = "columns")]
    pub cols: i64,

    #[serde(
        default,
        alias = "values",
        alias = "val",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill: Option<T>,
}

impl<T> MatrixConfig<T> {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            fill: None,
        }
    }

    pub fn with_fill(mut self, value: T) -> Self {
        self.fill = Some(value);
        self
    }

    /// Validated `(rows, cols)`.
    pub fn dimensions(&self) -> Result<(usize, usize), MatrixError> {
        positive_dimensions(self.rows, self.cols)
    }
}

pub(crate) fn positive_dimensions(rows: i64, cols: i64) -> Result<(usize, usize), MatrixError> {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok((r, c)),
        _ => {
            log::debug!("Rejecting matrix dimensions {}x{}", rows, cols);
            Err(MatrixError::InvalidDimensions { rows, cols })
        }
    }
}

/// The two ways to construct a [`Matrix`](crate::Matrix).
#[derive(Debug)]
pub enum MatrixInput<'a, T> {
    /// Rows of values; the first row fixes the column count.
    Values(Vec<Vec<T>>),
    Dimensions {
        rows: i64,
        cols: i64,
        fill: Fill<'a, T>,
    },
}

impl<'a, T> From<MatrixConfig<T>> for MatrixInput<'a, T> {
    fn from(config: MatrixConfig<T>) -> Self {
        MatrixInput::Dimensions {
            rows: config.rows,
            cols: config.cols,
            fill: config.fill.map_or(Fill::Zero, Fill::Constant),
        }
    }
}

impl<'a, T: DeserializeOwned> MatrixInput<'a, T> {
    /// Parse a loosely shaped JSON construction argument.
    ///
    /// An array is read as rows of values and an object as a
    /// [`MatrixConfig`]. Anything else is an [`MatrixError::InvalidArgument`].
    pub fn from_json(text: &str) -> Result<Self, MatrixError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| MatrixError::InvalidArgument(format!("unreadable input: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, MatrixError> {
        match value {
            Value::Array(items) => serde_json::from_value(Value::Array(items))
                .map(MatrixInput::Values)
                .map_err(|e| {
                    MatrixError::InvalidArgument(format!("expected an array of rows: {}", e))
                }),
            Value::Object(map) => serde_json::from_value::<MatrixConfig<T>>(Value::Object(map))
                .map(MatrixInput::from)
                .map_err(|e| {
                    MatrixError::InvalidArgument(format!("invalid dimensions object: {}", e))
                }),
            other => {
                let kind = match other {
                    Value::Null => "null",
                    Value::Bool(_) => "a boolean",
                    Value::Number(_) => "a number",
                    _ => "a string",
                };
                log::debug!("Rejecting construction input: got {}", kind);
                Err(MatrixError::InvalidArgument(format!("got {}", kind)))
            }
        }
    }
}
