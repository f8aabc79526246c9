/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    // ObjectKey validation errors
    #[error("Object key cannot be empty")]
    EmptyObjectKey,

    #[error("Object key too long: {actual} bytes (max: {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },

    #[error("Invalid character in object key: {0:?}")]
    InvalidObjectKeyCharacter(char),

    #[error("Object key cannot start with '/'")]
    ObjectKeyStartsWithSlash,

    #[error("Object key cannot end with '/'")]
    ObjectKeyEndsWithSlash,

    #[error("Object key cannot contain '//'")]
    ObjectKeyContainsDoubleSlash,

    #[error("Invalid object key segment: {0:?}")]
    InvalidObjectKeySegment(String),

    #[error("Client identifier cannot be empty")]
    EmptyClientId,

    // BucketName validation errors
    #[error("Bucket name too short: {actual} characters (min: {min})")]
    BucketNameTooShort { actual: usize, min: usize },

    #[error("Bucket name too long: {actual} characters (max: {max})")]
    BucketNameTooLong { actual: usize, max: usize },

    #[error("Bucket name must start with a lowercase letter or number")]
    BucketNameInvalidStart,

    #[error("Bucket name must end with a lowercase letter or number")]
    BucketNameInvalidEnd,

    #[error("Invalid character in bucket name: {0:?}")]
    BucketNameInvalidCharacter(char),

    #[error("Bucket name cannot contain consecutive dots")]
    BucketNameConsecutiveDots,

    #[error("Bucket name cannot be formatted as an IP address")]
    BucketNameLooksLikeIpAddress,
}
