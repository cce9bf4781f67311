use crate::config::Config;
use crate::probe::store::{Document, DocumentStore};
use crate::probe::ProbeError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::Url;

/// Firestore REST `listDocuments` response
#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
}

/// A raw document as Firestore returns it: resource name plus typed fields
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Document store backed by the Firestore REST API
pub struct FirestoreStore {
    client: Client,
    base_url: Url,
    project_id: String,
    api_key: String,
}

impl FirestoreStore {
    /// Create a client for the configured project.
    ///
    /// Config problems (missing project, unusable endpoint) surface here as
    /// [`ProbeError::Initialization`]; nothing touches the network yet.
    pub fn new(config: &Config) -> Result<Self, ProbeError> {
        if config.firebase_project_id.is_empty() {
            return Err(ProbeError::Initialization(
                "Firebase project ID is empty".to_string(),
            ));
        }
        if config.firebase_api_key.is_empty() {
            return Err(ProbeError::Initialization(
                "Firebase API key is empty".to_string(),
            ));
        }

        let base_url = Url::parse(&config.firestore_endpoint).map_err(|e| {
            ProbeError::Initialization(format!(
                "Invalid Firestore endpoint '{}': {}",
                config.firestore_endpoint, e
            ))
        })?;

        let client = Client::builder()
            .build()
            .map_err(|e| ProbeError::Initialization(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "Initialized Firestore client for project '{}'",
            config.firebase_project_id
        );

        Ok(Self {
            client,
            base_url,
            project_id: config.firebase_project_id.clone(),
            api_key: config.firebase_api_key.clone(),
        })
    }

    /// Build the `listDocuments` URL for a collection
    fn collection_url(&self, collection: &str) -> Result<Url, ProbeError> {
        self.base_url
            .join(&format!(
                "v1/projects/{}/databases/(default)/documents/{}",
                self.project_id, collection
            ))
            .map_err(|e| ProbeError::Query(format!("Failed to build query URL: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn fetch_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<Document>, ProbeError> {
        let url = self.collection_url(collection)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("pageSize", limit.to_string()), ("key", self.api_key.clone())])
            .send()
            .await
            .map_err(|e| ProbeError::Query(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProbeError::Query(format!(
                "Firestore returned {}: {}",
                status, error_text
            )));
        }

        let body: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|e| ProbeError::Query(format!("Failed to parse response: {}", e)))?;

        Ok(body.documents.into_iter().map(into_document).collect())
    }
}

/// Convert a raw Firestore document into the plain form the probe reports
fn into_document(raw: FirestoreDocument) -> Document {
    // The document ID is the last segment of the resource name
    let id = raw
        .name
        .rsplit('/')
        .next()
        .unwrap_or(raw.name.as_str())
        .to_string();

    Document {
        id,
        fields: decode_fields(&raw.fields),
    }
}

/// Decode a map of Firestore typed values into plain JSON
fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Decode one Firestore typed value (`{"stringValue": "x"}` and friends)
/// into the plain JSON value it wraps
fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };

    if let Some(v) = obj.get("stringValue") {
        return v.clone();
    }
    if let Some(v) = obj.get("integerValue") {
        // Firestore encodes 64-bit integers as strings on the wire
        return v
            .as_str()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or_else(|| v.clone());
    }
    if let Some(v) = obj.get("doubleValue") {
        return v.clone();
    }
    if let Some(v) = obj.get("booleanValue") {
        return v.clone();
    }
    if let Some(v) = obj.get("timestampValue") {
        return v.clone();
    }
    if let Some(v) = obj.get("referenceValue") {
        return v.clone();
    }
    if obj.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(fields) = obj.get("mapValue").and_then(|m| m.get("fields")) {
        if let Some(map) = fields.as_object() {
            return Value::Object(decode_fields(map));
        }
    }
    if let Some(values) = obj.get("arrayValue").and_then(|a| a.get("values")) {
        if let Some(items) = values.as_array() {
            return Value::Array(items.iter().map(decode_value).collect());
        }
    }
    if let Some(v) = obj.get("geoPointValue") {
        return v.clone();
    }

    value.clone()
}
