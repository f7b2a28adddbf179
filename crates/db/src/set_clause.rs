//! Partial-update `SET` clause builder.
//!
//! Turns a sparse set of column values into a PostgreSQL `SET` fragment with
//! numbered placeholders plus the values to bind, in the same order. Absent
//! columns are skipped entirely, so an update only touches what the caller
//! supplied.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;
use vms_core::validation::ValidationError;

/// A value bound to one `SET` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Bool(bool),
}

/// A built `SET` fragment and its ordered parameters.
///
/// `clause` uses placeholders `$1..=$n` where `n == values.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetClause {
    pub clause: String,
    pub values: Vec<ColumnValue>,
}

impl SetClause {
    /// Index of the first placeholder available after the `SET` values.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Bind every value onto `query`, in placeholder order.
    pub fn bind<'q>(
        &'q self,
        mut query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        for value in &self.values {
            query = match value {
                ColumnValue::Text(text) => query.bind(text.as_str()),
                ColumnValue::Bool(flag) => query.bind(*flag),
            };
        }
        query
    }
}

/// Accumulates present columns in call order.
#[derive(Debug, Default)]
pub struct SetClauseBuilder {
    assignments: Vec<String>,
    values: Vec<ColumnValue>,
}

impl SetClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text column if `value` is present.
    pub fn text(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(text) => self.push(column, ColumnValue::Text(text.to_string())),
            None => self,
        }
    }

    /// Add a boolean column if `value` is present. `Some(false)` is present.
    pub fn boolean(self, column: &str, value: Option<bool>) -> Self {
        match value {
            Some(flag) => self.push(column, ColumnValue::Bool(flag)),
            None => self,
        }
    }

    /// Finish the clause, or report that no column was supplied.
    pub fn finish(self) -> Result<SetClause, ValidationError> {
        if self.values.is_empty() {
            return Err(ValidationError::NothingToUpdate);
        }
        Ok(SetClause {
            clause: self.assignments.join(", "),
            values: self.values,
        })
    }

    fn push(mut self, column: &str, value: ColumnValue) -> Self {
        self.values.push(value);
        self.assignments
            .push(format!("{column} = ${}", self.values.len()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_columns_is_nothing_to_update() {
        assert_eq!(
            SetClauseBuilder::new()
                .text("model", None)
                .boolean("launched", None)
                .finish(),
            Err(ValidationError::NothingToUpdate)
        );
    }

    #[test]
    fn single_column_has_no_separator() {
        let set = SetClauseBuilder::new()
            .text("name", Some("X"))
            .finish()
            .unwrap();
        assert_eq!(set.clause, "name = $1");
        assert_eq!(set.values, vec![ColumnValue::Text("X".to_string())]);
        assert_eq!(set.next_placeholder(), 2);
    }

    #[test]
    fn absent_columns_are_skipped_and_placeholders_stay_dense() {
        let set = SetClauseBuilder::new()
            .text("model", Some("Q5"))
            .text("color", None)
            .text("number_plate", Some("UK 07 1896"))
            .text("name", None)
            .boolean("launched", Some(true))
            .finish()
            .unwrap();
        assert_eq!(set.clause, "model = $1, number_plate = $2, launched = $3");
        assert_eq!(
            set.values,
            vec![
                ColumnValue::Text("Q5".to_string()),
                ColumnValue::Text("UK 07 1896".to_string()),
                ColumnValue::Bool(true),
            ]
        );
        assert_eq!(set.next_placeholder(), 4);
    }

    #[test]
    fn false_boolean_is_present() {
        let set = SetClauseBuilder::new()
            .boolean("launched", Some(false))
            .finish()
            .unwrap();
        assert_eq!(set.clause, "launched = $1");
        assert_eq!(set.values, vec![ColumnValue::Bool(false)]);
    }

    #[test]
    fn empty_text_is_still_a_value() {
        // Rejecting empty strings is the validation layer's job.
        let set = SetClauseBuilder::new()
            .text("color", Some(""))
            .finish()
            .unwrap();
        assert_eq!(set.values, vec![ColumnValue::Text(String::new())]);
    }
}
