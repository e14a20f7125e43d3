//! Bridge between `validator` derive output and [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the declared constraints on `input`, mapping any failure to
/// [`CoreError::Validation`].
///
/// The error message lists each failing field as `field: code`, sorted by
/// field name so log output is stable.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten field errors into a single `field: code, field: code` string.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("{field}: {}", e.code))
                .collect::<Vec<_>>()
        })
        .collect();
    parts.sort();
    parts.join(", ")
}
