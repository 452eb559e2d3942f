//! File naming conventions for tessera migrations and seeds.
//!
//! Migration files are named `<prefix>_<name>.sql`, where the prefix is a run
//! of ASCII digits (a `YYYYMMDDHHMMSS` timestamp when generated). Byte-wise
//! order of the full filename is the application order. This crate has no
//! dependencies and can be used by any other tessera crate.

/// Extension of generated migration and seed files.
pub const SQL_EXTENSION: &str = "sql";

/// Length of the timestamp prefix produced by [`migration_filename`].
pub const TIMESTAMP_LEN: usize = 14;

/// Lowercase a free-form name and join its words with underscores.
///
/// # Examples
/// ```
/// use tessera_naming::sanitize_name;
///
/// assert_eq!(sanitize_name("Create Users Table"), "create_users_table");
/// assert_eq!(sanitize_name("add-email/index"), "add_email_index");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Filename for a new migration.
///
/// `timestamp` is expected to be `YYYYMMDDHHMMSS`.
///
/// # Examples
/// ```
/// use tessera_naming::migration_filename;
///
/// assert_eq!(
///     migration_filename("20240131120000", "Create users"),
///     "20240131120000_create_users.sql"
/// );
/// ```
pub fn migration_filename(timestamp: &str, name: &str) -> String {
    let sanitized = sanitize_name(name);
    if sanitized.is_empty() {
        format!("{timestamp}.{SQL_EXTENSION}")
    } else {
        format!("{timestamp}_{sanitized}.{SQL_EXTENSION}")
    }
}

/// Filename for a new seed.
pub fn seed_filename(name: &str) -> String {
    format!("{}.{SQL_EXTENSION}", sanitize_name(name))
}

/// Digit prefix of a migration filename, if it has one.
///
/// # Examples
/// ```
/// use tessera_naming::migration_prefix;
///
/// assert_eq!(migration_prefix("001_init.sql"), Some("001"));
/// assert_eq!(migration_prefix("init.sql"), None);
/// ```
pub fn migration_prefix(file_name: &str) -> Option<&str> {
    let end = file_name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(file_name.len(), |(i, _)| i);
    (end > 0).then(|| &file_name[..end])
}

/// Whether `file_name` follows the `<digits>_<name>` or `<digits>.<ext>` shape.
pub fn is_valid_migration_filename(file_name: &str) -> bool {
    let Some(prefix) = migration_prefix(file_name) else {
        return false;
    };
    let rest = &file_name[prefix.len()..];
    match rest.chars().next() {
        Some('_') => rest.len() > 1,
        Some('.') => rest.len() > 1,
        _ => false,
    }
}

/// Migration name without prefix and extension, for display.
///
/// # Examples
/// ```
/// use tessera_naming::display_name;
///
/// assert_eq!(display_name("20240131120000_create_users.sql"), "create users");
/// ```
pub fn display_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    let without_prefix = migration_prefix(stem)
        .map(|p| stem[p.len()..].trim_start_matches('_'))
        .unwrap_or(stem);
    without_prefix.replace('_', " ")
}
