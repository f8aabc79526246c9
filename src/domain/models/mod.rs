pub mod element;
pub mod object;

pub use element::Element;
pub use object::{ObjectInfo, StoredObject, EVENT_CONTENT_TYPE};
