//! Keystroke normalization applied before a value is stored.

use crate::models::TextField;

/// Prefix every stored Telegram handle carries.
pub const HANDLE_PREFIX: char = '@';

/// Canonical form of a raw input value for the given field.
///
/// Only the handle is rewritten; other fields are stored as typed and trimmed
/// at validation time.
pub fn normalize(field: TextField, raw: &str) -> String {
    match field {
        TextField::TelegramName => normalize_handle(raw),
        _ => raw.to_string(),
    }
}

/// Collapse any run of leading `@` into exactly one.
///
/// An empty input becomes `"@"`, so the stored handle is never empty.
pub fn normalize_handle(raw: &str) -> String {
    let body = raw.trim_start_matches(HANDLE_PREFIX);
    let mut handle = String::with_capacity(body.len() + 1);
    handle.push(HANDLE_PREFIX);
    handle.push_str(body);
    handle
}
