pub mod clock;
pub mod provisioning;
mod publisher_impl;

pub use clock::MonotonicNanos;
pub use provisioning::{ensure_bucket, BucketStatus};
pub use publisher_impl::EventPublisher;
