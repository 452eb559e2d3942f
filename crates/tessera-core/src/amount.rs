use std::fmt;
use std::str::FromStr;

/// How many pending migrations to apply; `None` applies all of them.
pub type MigrateAmount = Option<usize>;

/// How many applied migrations to reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackAmount {
    Count(usize),
    All,
}

impl Default for RollbackAmount {
    /// Rolling back without an amount reverses the latest migration only.
    fn default() -> Self {
        RollbackAmount::Count(1)
    }
}

impl RollbackAmount {
    /// Number of records to reverse given how many are applied.
    pub fn resolve(self, applied: usize) -> usize {
        match self {
            RollbackAmount::Count(n) => n.min(applied),
            RollbackAmount::All => applied,
        }
    }
}

impl fmt::Display for RollbackAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollbackAmount::Count(n) => write!(f, "{n}"),
            RollbackAmount::All => f.write_str("all"),
        }
    }
}

impl FromStr for RollbackAmount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(RollbackAmount::All);
        }
        s.parse::<usize>()
            .map(RollbackAmount::Count)
            .map_err(|_| format!("invalid rollback amount '{s}' (expected a number or 'all')"))
    }
}

/// Number of pending migrations `migrate` will apply.
pub fn resolve_migrate_amount(amount: MigrateAmount, pending: usize) -> usize {
    amount.map_or(pending, |n| n.min(pending))
}
