pub mod contact;
pub mod context;
pub mod events;
pub mod search;
pub mod upcoming;

/// Set an optional text field from a flag. An empty value clears it.
pub fn set_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = if value.trim().is_empty() { None } else { Some(value) };
    }
}
