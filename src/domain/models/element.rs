use bytes::Bytes;

/// One event handed to the publisher: who sent it and what they sent.
///
/// The payload is opaque; it is stored byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub client_id: String,
    pub payload: Bytes,
}

impl Element {
    pub fn new(client_id: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            client_id: client_id.into(),
            payload: payload.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}
