//! Inventory validation rules and the partial-update change vocabulary.
//!
//! Provides length/range validation for item and category fields, and the
//! `ChangedField` tags a partial update reports back to the caller. The
//! confirmation message joins changed-field labels in a fixed order
//! (quantity, name, category) regardless of how the request body was keyed.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for item and category names.
pub const MAX_NAME_LEN: usize = 100;

/// Confirmation message when a mutation request produced no actual change.
pub const NO_CHANGES_MESSAGE: &str = "No changes made";

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate an item or category name: non-empty and within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an item quantity: never negative.
pub fn validate_quantity(quantity: i64) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation(
            "Quantity cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Changed-field reporting
   -------------------------------------------------------------------------- */

/// A logical field that a partial item update actually changed.
///
/// Variant order is the report order: quantity before name before
/// category, matching the order in which the update checks each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedField {
    Quantity,
    Name,
    Category,
}

impl ChangedField {
    /// Lowercase label used in confirmation messages.
    pub fn label(self) -> &'static str {
        match self {
            ChangedField::Quantity => "quantity",
            ChangedField::Name => "name",
            ChangedField::Category => "category",
        }
    }
}

/// Build the confirmation message for a successful partial update.
///
/// Labels are joined with " and ", the combined phrase is capitalized,
/// and " updated" is appended: `[Quantity, Name]` becomes
/// `"Quantity and name updated"`. Callers must pass at least one field;
/// the no-change case uses [`NO_CHANGES_MESSAGE`] instead.
pub fn update_message(changed: &[ChangedField]) -> String {
    debug_assert!(!changed.is_empty());

    let joined = changed
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(" and ");

    let mut message = capitalize(&joined);
    message.push_str(" updated");
    message
}

/// Uppercase the first character of `s`, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
