//! Filename version codec for migration scripts.
//!
//! Migration scripts come in pairs: `001_create_users.up.sql` applies a
//! change and `001_create_users.down.sql` reverts it. The version number
//! is the leading decimal-digit run of the filename. Numeric parsing, not
//! string comparison, is authoritative for version identity, so operators
//! may zero-pad names freely to keep lexical sort order aligned with
//! numeric order.

/// Suffix identifying an apply script.
pub const UP_SUFFIX: &str = ".up.sql";

/// Suffix identifying a revert script.
pub const DOWN_SUFFIX: &str = ".down.sql";

/// Parse the version number from a migration filename.
///
/// The version is the integer value of the leading decimal digits of the
/// name; names without leading digits parse to version 0. Arbitrary
/// leading-zero padding is tolerated.
pub fn file_version(name: &str) -> i64 {
    name.bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        })
}

/// Whether a filename is a migration up-file.
pub fn is_up_file(name: &str) -> bool {
    name.ends_with(UP_SUFFIX)
}

/// Derive the down-file name from an up-file name.
///
/// Returns `None` when the name does not end with `.up.sql`.
pub fn down_name(up_name: &str) -> Option<String> {
    up_name
        .strip_suffix(UP_SUFFIX)
        .map(|stem| format!("{}{}", stem, DOWN_SUFFIX))
}

#[cfg(test)]
#[path = "version_test.rs"]
mod version_test;
