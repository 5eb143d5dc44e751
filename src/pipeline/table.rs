//! Decision table abstraction consumed by the discretization engine
//!
//! The engine never touches polars directly. It reads through the
//! [`TabularSource`] trait, which [`DecisionTable`] implements with plain
//! columnar vectors built (and validated) from a `DataFrame`.

use polars::prelude::*;

use super::error::DiscretizeError;

/// Read-only view of a validated table: numeric attributes plus one decision column.
///
/// Row identity is the 0-based index; rows are never reordered.
pub trait TabularSource {
    /// Number of rows (objects)
    fn row_count(&self) -> usize;

    /// Attribute names in column order
    fn attribute_names(&self) -> &[String];

    /// All values of one attribute, indexed by row
    fn attribute_values(&self, attribute: usize) -> &[f64];

    /// Decision value of a row, rendered as text
    fn decision(&self, row: usize) -> &str;

    /// Whether two rows carry the same decision
    fn same_decision(&self, a: usize, b: usize) -> bool {
        self.decision(a) == self.decision(b)
    }

    /// Number of attributes
    fn attribute_count(&self) -> usize {
        self.attribute_names().len()
    }
}

/// Columnar decision table.
///
/// Decisions are interned as class ids so the O(n²) pair scan compares integers.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    attribute_names: Vec<String>,
    columns: Vec<Vec<f64>>,
    decision_name: String,
    classes: Vec<String>,
    decision_ids: Vec<u32>,
}

impl DecisionTable {
    /// Build a table from raw columns, validating shape and finiteness.
    pub fn new(
        attribute_names: Vec<String>,
        columns: Vec<Vec<f64>>,
        decision_name: impl Into<String>,
        decisions: Vec<String>,
    ) -> Result<Self, DiscretizeError> {
        if attribute_names.is_empty() {
            return Err(DiscretizeError::MalformedTable(
                "the dataset must contain at least one attribute and one decision column"
                    .to_string(),
            ));
        }
        if attribute_names.len() != columns.len() {
            return Err(DiscretizeError::MalformedTable(format!(
                "{} attribute names for {} columns",
                attribute_names.len(),
                columns.len()
            )));
        }

        for (i, name) in attribute_names.iter().enumerate() {
            if attribute_names[..i].contains(name) {
                return Err(DiscretizeError::MalformedTable(format!(
                    "duplicate attribute name '{}'",
                    name
                )));
            }
        }

        let rows = decisions.len();
        for (name, values) in attribute_names.iter().zip(&columns) {
            if values.len() != rows {
                return Err(DiscretizeError::MalformedTable(format!(
                    "attribute '{}' has {} values but the decision column has {}",
                    name,
                    values.len(),
                    rows
                )));
            }
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(DiscretizeError::NonFiniteValue {
                    attribute: name.clone(),
                    row,
                });
            }
        }

        let mut classes: Vec<String> = Vec::new();
        let decision_ids = decisions
            .into_iter()
            .map(|d| match classes.iter().position(|c| *c == d) {
                Some(id) => id as u32,
                None => {
                    classes.push(d);
                    (classes.len() - 1) as u32
                }
            })
            .collect();

        Ok(Self {
            attribute_names,
            columns,
            decision_name: decision_name.into(),
            classes,
            decision_ids,
        })
    }

    /// Build a table from a DataFrame.
    ///
    /// The decision column defaults to the last column, in which case a frame
    /// with only numeric columns is rejected as ambiguous. Every other column
    /// must be numeric and free of nulls.
    pub fn from_dataframe(df: &DataFrame, decision: Option<&str>) -> Result<Self, DiscretizeError> {
        let columns = df.get_columns();
        if columns.len() < 2 {
            return Err(DiscretizeError::MalformedTable(
                "the dataset must contain at least one attribute and one decision column"
                    .to_string(),
            ));
        }

        let decision_name = match decision {
            Some(name) => {
                if !columns.iter().any(|c| c.name().as_str() == name) {
                    return Err(DiscretizeError::MissingDecisionColumn {
                        column: name.to_string(),
                    });
                }
                name.to_string()
            }
            None => {
                // Without a name, the decision must be the one non-numeric column
                if columns.iter().all(|c| c.dtype().is_primitive_numeric()) {
                    return Err(DiscretizeError::MalformedTable(
                        "Expected n-1 numeric columns and a decision one".to_string(),
                    ));
                }
                columns[columns.len() - 1].name().to_string()
            }
        };

        let mut attribute_names = Vec::with_capacity(columns.len() - 1);
        let mut values = Vec::with_capacity(columns.len() - 1);

        for col in columns.iter().filter(|c| c.name().as_str() != decision_name) {
            let name = col.name().to_string();
            if !col.dtype().is_primitive_numeric() {
                return Err(DiscretizeError::NonNumericAttribute {
                    column: name,
                    dtype: col.dtype().to_string(),
                });
            }
            if col.null_count() > 0 {
                return Err(DiscretizeError::MissingValues {
                    column: name,
                    count: col.null_count(),
                });
            }

            let cast = col.cast(&DataType::Float64)?;
            let column_values: Vec<f64> = cast.f64()?.into_no_null_iter().collect();
            attribute_names.push(name);
            values.push(column_values);
        }

        let decision_col = df.column(&decision_name)?;
        let decisions = decision_strings(decision_col)?;

        Self::new(attribute_names, values, decision_name, decisions)
    }

    /// Name of the decision column
    pub fn decision_name(&self) -> &str {
        &self.decision_name
    }

    /// Distinct decision values in first-seen order
    pub fn decision_classes(&self) -> &[String] {
        &self.classes
    }
}

impl TabularSource for DecisionTable {
    fn row_count(&self) -> usize {
        self.decision_ids.len()
    }

    fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    fn attribute_values(&self, attribute: usize) -> &[f64] {
        &self.columns[attribute]
    }

    fn decision(&self, row: usize) -> &str {
        &self.classes[self.decision_ids[row] as usize]
    }

    fn same_decision(&self, a: usize, b: usize) -> bool {
        self.decision_ids[a] == self.decision_ids[b]
    }
}

/// Render a decision column as strings so equality is well defined for any dtype.
fn decision_strings(col: &Column) -> Result<Vec<String>, DiscretizeError> {
    if col.null_count() > 0 {
        return Err(DiscretizeError::MissingValues {
            column: col.name().to_string(),
            count: col.null_count(),
        });
    }

    let values: Vec<String> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_no_null_iter()
            .map(|s| s.to_string())
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => col
            .cast(&DataType::Int64)?
            .i64()?
            .into_no_null_iter()
            .map(|n| n.to_string())
            .collect(),
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => col
            .cast(&DataType::UInt64)?
            .u64()?
            .into_no_null_iter()
            .map(|n| n.to_string())
            .collect(),
        DataType::Float32 | DataType::Float64 => col
            .cast(&DataType::Float64)?
            .f64()?
            .into_no_null_iter()
            .map(|n| format!("{}", n))
            .collect(),
        DataType::Boolean => col
            .bool()?
            .into_no_null_iter()
            .map(|b| b.to_string())
            .collect(),
        _ => col
            .cast(&DataType::String)?
            .str()?
            .into_no_null_iter()
            .map(|s| s.to_string())
            .collect(),
    };

    Ok(values)
}
