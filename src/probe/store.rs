use crate::probe::ProbeError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A single schemaless document read from a collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Document identifier (the last path segment of its resource name)
    pub id: String,
    /// Decoded field map, plain JSON values
    pub fields: Map<String, Value>,
}

/// Bounded read access to a document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch up to `limit` documents from `collection`, in the store's
    /// default order
    async fn fetch_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<Document>, ProbeError>;
}
