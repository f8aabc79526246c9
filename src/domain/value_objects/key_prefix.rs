/// Optional path prefix prepended to every event key.
///
/// Surrounding whitespace and leading/trailing `/` are removed, e.g.
/// `" /events/ "` becomes `events`. An empty result means no prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPrefix(Option<String>);

impl KeyPrefix {
    pub fn new(value: &str) -> Self {
        let trimmed = value.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
