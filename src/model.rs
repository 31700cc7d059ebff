/// A source→destination pair as accepted by the save endpoint.
///
/// An empty `destination` asks the service to drop the mapping for `source`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Mapping {
    pub source: String,
    pub destination: String,
}

impl Mapping {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn removal(source: impl Into<String>) -> Self {
        Self::new(source, "")
    }

    pub fn is_removal(&self) -> bool {
        self.destination.is_empty()
    }
}
