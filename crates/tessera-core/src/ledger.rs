use serde::Serialize;

/// One ledger row: a migration file that has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedMigration {
    pub id: i64,
    pub file_name: String,
}

/// Ledger compared against the migration folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    /// Applied files, oldest first.
    pub applied: Vec<String>,
    /// Files not yet applied, in the order `migrate` would run them.
    pub pending: Vec<String>,
    /// Ledger entries whose file is no longer in the migration folder.
    pub missing: Vec<String>,
}

impl MigrationStatus {
    pub fn from_parts(applied: &[AppliedMigration], available: &[&str]) -> Self {
        let pending = available
            .iter()
            .filter(|name| !applied.iter().any(|a| a.file_name == **name))
            .map(|name| name.to_string())
            .collect();
        let missing = applied
            .iter()
            .filter(|a| !available.contains(&a.file_name.as_str()))
            .map(|a| a.file_name.clone())
            .collect();
        Self {
            applied: applied.iter().map(|a| a.file_name.clone()).collect(),
            pending,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(names: &[&str]) -> Vec<AppliedMigration> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| AppliedMigration {
                id: i as i64 + 1,
                file_name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn splits_applied_pending_and_missing() {
        let status = MigrationStatus::from_parts(
            &applied(&["001_a.sql", "000_gone.sql"]),
            &["001_a.sql", "002_b.sql", "003_c.sql"],
        );
        assert_eq!(status.applied, vec!["001_a.sql", "000_gone.sql"]);
        assert_eq!(status.pending, vec!["002_b.sql", "003_c.sql"]);
        assert_eq!(status.missing, vec!["000_gone.sql"]);
    }

    #[test]
    fn empty_ledger_means_everything_pending() {
        let status = MigrationStatus::from_parts(&[], &["001_a.sql"]);
        assert!(status.applied.is_empty());
        assert_eq!(status.pending, vec!["001_a.sql"]);
        assert!(status.missing.is_empty());
    }
}
