//! Phone number value object
//!
//! Evolution API addresses recipients either by bare digits
//! (`5511999998888`) or by WhatsApp JID (`5511999998888@s.whatsapp.net`).
//! Both forms are accepted and stored exactly as given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Suffix WhatsApp appends to individual chat addresses
pub const USER_JID_SUFFIX: &str = "@s.whatsapp.net";

/// A destination or sender number as understood by the Evolution API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Create a phone number from its raw representation
    ///
    /// The value is kept verbatim; only blank input is rejected.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let value = number.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must not be blank".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Build a phone number from a WhatsApp JID, dropping the `@server` part
    pub fn from_jid(jid: &str) -> Result<Self, DomainError> {
        let user = jid.split_once('@').map_or(jid, |(user, _)| user);
        // Multi-device JIDs carry a device suffix: 5511999998888:12@s.whatsapp.net
        let user = user.split_once(':').map_or(user, |(user, _)| user);
        Self::new(user)
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check if the number is a full JID rather than bare digits
    pub fn is_jid(&self) -> bool {
        self.value.contains('@')
    }

    /// Check if the number addresses a group chat
    pub fn is_group(&self) -> bool {
        self.value.ends_with("@g.us")
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_digits_are_kept_verbatim() {
        let phone = PhoneNumber::new("5511999998888").unwrap();
        assert_eq!(phone.as_str(), "5511999998888");
    }

    #[test]
    fn plus_prefix_is_kept() {
        let phone = PhoneNumber::new("+5511999998888").unwrap();
        assert_eq!(phone.as_str(), "+5511999998888");
    }

    #[test]
    fn blank_number_is_rejected() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("   ").is_err());
    }

    #[test]
    fn jid_is_accepted_as_destination() {
        let phone = PhoneNumber::new(format!("5511999998888{USER_JID_SUFFIX}")).unwrap();
        assert!(phone.is_jid());
        assert!(!phone.is_group());
    }

    #[test]
    fn from_jid_strips_server() {
        let phone = PhoneNumber::from_jid("5511999998888@s.whatsapp.net").unwrap();
        assert_eq!(phone.as_str(), "5511999998888");
        assert!(!phone.is_jid());
    }

    #[test]
    fn from_jid_strips_device_suffix() {
        let phone = PhoneNumber::from_jid("5511999998888:7@s.whatsapp.net").unwrap();
        assert_eq!(phone.as_str(), "5511999998888");
    }

    #[test]
    fn from_jid_without_server_is_identity() {
        let phone = PhoneNumber::from_jid("5511999998888").unwrap();
        assert_eq!(phone.as_str(), "5511999998888");
    }

    #[test]
    fn from_jid_rejects_empty_user() {
        assert!(PhoneNumber::from_jid("@s.whatsapp.net").is_err());
    }

    #[test]
    fn group_jid_is_detected() {
        let phone = PhoneNumber::new("120363025246125486@g.us").unwrap();
        assert!(phone.is_group());
    }

    #[test]
    fn display_format() {
        let phone = PhoneNumber::new("5511999998888").unwrap();
        assert_eq!(phone.to_string(), "5511999998888");
    }

    #[test]
    fn serializes_as_plain_string() {
        let phone = PhoneNumber::new("5511999998888").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5511999998888\"");
    }

    #[test]
    fn deserialization_rejects_blank() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}

