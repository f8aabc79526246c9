pub mod bucket_name;
pub mod key_prefix;
pub mod object_key;
pub mod timestamp;

pub use bucket_name::BucketName;
pub use key_prefix::KeyPrefix;
pub use object_key::ObjectKey;
pub use timestamp::NanoTimestamp;
