use chrono::Utc;
use uuid::Uuid;

/// Identity of one comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    run_id: String,
    timestamp: String,
}

impl RunMetadata {
    pub fn new(run_id: String, timestamp: String) -> Self {
        Self { run_id, timestamp }
    }

    /// Fresh metadata: a UUID v4 run id and the current time in RFC 3339
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string(), Utc::now().to_rfc3339())
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_uuid_and_rfc3339() {
        let metadata = RunMetadata::generate();
        assert_eq!(metadata.run_id().len(), 36);
        assert_eq!(metadata.run_id().matches('-').count(), 4);
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(RunMetadata::generate().run_id(), RunMetadata::generate().run_id());
    }
}
