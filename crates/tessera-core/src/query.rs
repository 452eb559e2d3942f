use serde::{Deserialize, Serialize};
use serde_json::Value;

/// SQL produced by a migration or seed: one statement or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    Single(String),
    Many(Vec<String>),
}

impl Query {
    /// Statements in execution order, skipping blank entries.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Query::Single(sql) => std::slice::from_ref(sql),
            Query::Many(sqls) => sqls,
        };
        slice
            .iter()
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.statements().next().is_none()
    }
}

impl From<String> for Query {
    fn from(sql: String) -> Self {
        Query::Single(sql)
    }
}

impl From<&str> for Query {
    fn from(sql: &str) -> Self {
        Query::Single(sql.to_string())
    }
}

impl From<Vec<String>> for Query {
    fn from(sqls: Vec<String>) -> Self {
        Query::Many(sqls)
    }
}

impl From<Vec<&str>> for Query {
    fn from(sqls: Vec<&str>) -> Self {
        Query::Many(sqls.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(sqls: [&str; N]) -> Self {
        Query::Many(sqls.into_iter().map(str::to_string).collect())
    }
}

/// A result row with columns in select order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Rows and affected-row count collected over every statement of a [`Query`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryOutput {
    pub rows: Vec<Row>,
    pub rows_affected: u64,
}

impl QueryOutput {
    pub fn extend(&mut self, other: QueryOutput) {
        self.rows.extend(other.rows);
        self.rows_affected += other.rows_affected;
    }
}
