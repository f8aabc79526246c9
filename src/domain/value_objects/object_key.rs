use crate::domain::{
    errors::ValidationError,
    value_objects::{KeyPrefix, NanoTimestamp},
};

/// A validated object key (path) in the target bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub const MAX_LEN: usize = 1024;

    /// Create a new ObjectKey with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: Self::MAX_LEN,
            });
        }

        if let Some(c) = value.chars().find(|c| c.is_ascii_control()) {
            return Err(ValidationError::InvalidObjectKeyCharacter(c));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.ends_with('/') {
            return Err(ValidationError::ObjectKeyEndsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        // Stored verbatim, so relative segments would not survive a round trip
        if let Some(segment) = value.split('/').find(|s| *s == "." || *s == "..") {
            return Err(ValidationError::InvalidObjectKeySegment(segment.to_string()));
        }

        Ok(Self(value))
    }

    /// Build the key an event is stored under: `[<prefix>/]<client_id>/<timestamp>`
    pub fn for_event(
        prefix: &KeyPrefix,
        client_id: &str,
        timestamp: NanoTimestamp,
    ) -> Result<Self, ValidationError> {
        if client_id.is_empty() {
            return Err(ValidationError::EmptyClientId);
        }

        let key = match prefix.as_str() {
            Some(prefix) => format!("{}/{}/{}", prefix, client_id, timestamp),
            None => format!("{}/{}", client_id, timestamp),
        };

        Self::new(key)
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the directory part of the key (everything before the last '/')
    pub fn parent(&self) -> Option<&str> {
        self.0.rfind('/').map(|idx| &self.0[..idx])
    }

    /// Get the file name part of the key (everything after the last '/')
    pub fn file_name(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }

    /// Timestamp segment of an event key, if the last segment is one
    pub fn timestamp(&self) -> Option<NanoTimestamp> {
        self.file_name().parse().ok()
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_key() {
        assert!(ObjectKey::new("abc/1700000000000000000").is_ok());
        assert!(ObjectKey::new("events/abc/1700000000000000000").is_ok());
    }

    #[test]
    fn test_invalid_object_key() {
        assert!(ObjectKey::new("").is_err());
        assert!(ObjectKey::new("/leading-slash").is_err());
        assert!(ObjectKey::new("double//slash").is_err());
        assert!(ObjectKey::new("null\0byte").is_err());
        assert!(ObjectKey::new("tab\tbyte/1").is_err());
        assert!(ObjectKey::new("trailing/").is_err());
        assert!(ObjectKey::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_relative_segments_are_rejected() {
        assert_eq!(
            ObjectKey::new("./42"),
            Err(ValidationError::InvalidObjectKeySegment(".".to_string()))
        );
        assert_eq!(
            ObjectKey::new("events/../42"),
            Err(ValidationError::InvalidObjectKeySegment("..".to_string()))
        );
        // Dots inside a segment are fine
        assert!(ObjectKey::new("sensor.1/..42").is_ok());
    }

    #[test]
    fn test_special_characters_are_kept_verbatim() {
        for client_id in ["sensor#1", "a%b", "dev[1]", "a b"] {
            let key =
                ObjectKey::for_event(&KeyPrefix::none(), client_id, NanoTimestamp::from_nanos(42))
                    .unwrap();
            assert_eq!(key.as_str(), format!("{}/42", client_id));
        }
    }

    #[test]
    fn test_event_key_without_prefix() {
        let key =
            ObjectKey::for_event(&KeyPrefix::none(), "abc", NanoTimestamp::from_nanos(42)).unwrap();
        assert_eq!(key.as_str(), "abc/42");
        assert_eq!(key.parent(), Some("abc"));
        assert_eq!(key.timestamp(), Some(NanoTimestamp::from_nanos(42)));
    }

    #[test]
    fn test_event_key_with_prefix() {
        let key = ObjectKey::for_event(
            &KeyPrefix::new("events"),
            "abc",
            NanoTimestamp::from_nanos(1_700_000_000_123_456_789),
        )
        .unwrap();
        assert_eq!(key.as_str(), "events/abc/1700000000123456789");
        assert_eq!(key.file_name(), "1700000000123456789");
    }

    #[test]
    fn test_event_key_rejects_bad_client_ids() {
        let ts = NanoTimestamp::from_nanos(1);
        assert_eq!(
            ObjectKey::for_event(&KeyPrefix::none(), "", ts),
            Err(ValidationError::EmptyClientId)
        );
        assert_eq!(
            ObjectKey::for_event(&KeyPrefix::none(), "/abc", ts),
            Err(ValidationError::ObjectKeyStartsWithSlash)
        );
        assert_eq!(
            ObjectKey::for_event(&KeyPrefix::new("events"), "a//b", ts),
            Err(ValidationError::ObjectKeyContainsDoubleSlash)
        );
        assert_eq!(
            ObjectKey::for_event(&KeyPrefix::none(), "..", ts),
            Err(ValidationError::InvalidObjectKeySegment("..".to_string()))
        );
    }
}
