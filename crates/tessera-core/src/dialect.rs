use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tessera_query::DatabaseBackend;

/// Supported dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Dialect {
    #[serde(rename = "pg")]
    #[cfg_attr(feature = "cli", value(name = "pg"))]
    Postgres,
    #[serde(rename = "mysql")]
    #[cfg_attr(feature = "cli", value(name = "mysql"))]
    MySql,
    #[serde(rename = "sqlite3")]
    #[cfg_attr(feature = "cli", value(name = "sqlite3"))]
    Sqlite,
}

impl Dialect {
    /// Tag used in config files and exposed to migrations.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "pg",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite3",
        }
    }

    pub fn backend(self) -> DatabaseBackend {
        self.into()
    }
}

impl From<Dialect> for DatabaseBackend {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Postgres => DatabaseBackend::Postgres,
            Dialect::MySql => DatabaseBackend::MySql,
            Dialect::Sqlite => DatabaseBackend::Sqlite,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pg" | "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite3" | "sqlite" => Ok(Dialect::Sqlite),
            other => Err(format!(
                "unknown dialect '{other}' (expected one of: pg, mysql, sqlite3)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Dialect::Postgres, "\"pg\"")]
    #[case(Dialect::MySql, "\"mysql\"")]
    #[case(Dialect::Sqlite, "\"sqlite3\"")]
    fn serializes_to_config_tag(#[case] dialect: Dialect, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&dialect).unwrap(), json);
        assert_eq!(serde_json::from_str::<Dialect>(json).unwrap(), dialect);
    }

    #[rstest]
    #[case("postgresql", Dialect::Postgres)]
    #[case("sqlite", Dialect::Sqlite)]
    #[case("mysql", Dialect::MySql)]
    fn parses_aliases(#[case] input: &str, #[case] expected: Dialect) {
        assert_eq!(input.parse::<Dialect>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_dialect() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(err.contains("oracle"));
    }

    #[test]
    fn maps_to_backend() {
        assert_eq!(Dialect::MySql.backend(), DatabaseBackend::MySql);
        assert_eq!(Dialect::Sqlite.to_string(), "sqlite3");
    }
}
