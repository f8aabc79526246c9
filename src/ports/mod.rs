pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use services::Publisher;
pub use storage::EventStore;
