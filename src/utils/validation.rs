use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};
use crate::form::FormField;

/// Flattens validator output to one message per form field.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<FormField, String> {
    let mut messages = BTreeMap::new();
    for (name, field_errors) in errors.field_errors() {
        let (Some(field), Some(first)) = (FormField::from_name(name), field_errors.first()) else {
            continue;
        };
        let message = first
            .message
            .as_ref()
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| first.code.to_string());
        messages.insert(field, message);
    }
    messages
}

pub fn validate_payload<T: Validate>(payload: &T) -> BTreeMap<FormField, String> {
    match payload.validate() {
        Ok(()) => BTreeMap::new(),
        Err(errors) => field_messages(&errors),
    }
}
