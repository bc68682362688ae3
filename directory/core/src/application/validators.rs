// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Payload validators for the create and update operations.
//!
//! Fields are checked in a fixed order and only the first missing one is
//! reported, so a caller fixing errors one at a time sees them in the same
//! order every run.

use crate::application::error::DirectoryError;
use crate::domain::client::ClientPayload;

/// Validate a creation payload. The identifier is caller-supplied and
/// therefore required here.
pub fn validate_create(payload: &ClientPayload) -> Result<(), DirectoryError> {
    require("id", &payload.id)?;
    require_profile_fields(payload)
}

/// Validate an update payload. The identifier comes from the request path,
/// so only the profile fields are checked.
pub fn validate_update(payload: &ClientPayload) -> Result<(), DirectoryError> {
    require_profile_fields(payload)
}

fn require_profile_fields(payload: &ClientPayload) -> Result<(), DirectoryError> {
    require("firstName", &payload.first_name)?;
    require("lastName", &payload.last_name)?;
    require("phoneNumber", &payload.phone_number)?;
    require("email", &payload.email)?;
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), DirectoryError> {
    if value.is_empty() {
        return Err(DirectoryError::Validation(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ClientPayload {
        ClientPayload {
            id: "c-100".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone_number: "+18202820232".to_string(),
        }
    }

    #[test]
    fn complete_payload_passes_both_validators() {
        let payload = valid_payload();
        assert!(validate_create(&payload).is_ok());
        assert!(validate_update(&payload).is_ok());
    }

    #[test]
    fn each_missing_field_is_reported_by_wire_name() {
        let cases: [(&str, fn(&mut ClientPayload)); 5] = [
            ("id", |p| p.id.clear()),
            ("firstName", |p| p.first_name.clear()),
            ("lastName", |p| p.last_name.clear()),
            ("phoneNumber", |p| p.phone_number.clear()),
            ("email", |p| p.email.clear()),
        ];

        for (expected, clear) in cases {
            let mut payload = valid_payload();
            clear(&mut payload);
            match validate_create(&payload) {
                Err(DirectoryError::Validation(field)) => assert_eq!(field, expected),
                other => panic!("expected validation error for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let mut payload = valid_payload();
        payload.last_name.clear();
        payload.email.clear();

        match validate_create(&payload) {
            Err(DirectoryError::Validation(field)) => assert_eq!(field, "lastName"),
            other => panic!("expected lastName error, got {:?}", other),
        }
    }

    #[test]
    fn update_does_not_require_an_id() {
        let mut payload = valid_payload();
        payload.id.clear();

        assert!(validate_update(&payload).is_ok());
        assert!(matches!(
            validate_create(&payload),
            Err(DirectoryError::Validation("id"))
        ));
    }
}
