//! Rust code generation modules.

pub mod table;

pub use table::OrderTableGenerator;

/// Converts a schema file stem into an upper snake case identifier.
///
/// Characters that cannot appear in an identifier become `_`, and a leading
/// digit is prefixed with `_`.
#[must_use]
pub fn table_ident(stem: &str) -> String {
    let mut ident = String::with_capacity(stem.len() + 1);
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            ident.push(c.to_ascii_uppercase());
        } else {
            ident.push('_');
        }
    }
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
