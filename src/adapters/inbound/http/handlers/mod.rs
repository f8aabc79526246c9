pub mod publish_handlers;

pub use publish_handlers::*;
