//! One-shot Firestore connectivity probe.
//!
//! Opens a client against the configured project, reads the first few
//! documents of the `appointments` collection, and reports the outcome to the
//! log sink. There is deliberately no retry and no timeout: this is a
//! diagnostic, not a resilient client.

mod firestore;
mod store;

pub use firestore::FirestoreStore;
pub use store::{Document, DocumentStore};

use crate::config::Config;
use miette::Diagnostic;
use serde_json::Map;
use thiserror::Error;
use tracing::info;

/// Collection the probe reads from
pub const TARGET_COLLECTION: &str = "appointments";

/// Upper bound on the number of documents fetched
pub const DOCUMENT_LIMIT: u32 = 5;

/// The two ways a probe run can fail
#[derive(Debug, Error, Diagnostic)]
pub enum ProbeError {
    /// The client could not be constructed (bad config, unusable endpoint)
    #[error("Initialization failure: {0}")]
    #[diagnostic(code(aukiolo::probe::initialization))]
    Initialization(String),

    /// The read itself failed (network, permissions, malformed response)
    #[error("Query failure: {0}")]
    #[diagnostic(code(aukiolo::probe::query))]
    Query(String),
}

/// Outcome of a successful probe run. Ephemeral: logged, never stored.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub document_count: usize,
    /// Field map of the first document, when the collection is non-empty
    pub sample_document: Option<Map<String, serde_json::Value>>,
}

/// Run the probe once against the configured Firestore project
pub async fn run(config: &Config) -> Result<ProbeReport, ProbeError> {
    let store = FirestoreStore::new(config)?;
    run_with_store(&store).await
}

/// Run the bounded read against any document store and log the outcome
pub async fn run_with_store(store: &dyn DocumentStore) -> Result<ProbeReport, ProbeError> {
    info!(
        "Fetching first {} documents from '{}'...",
        DOCUMENT_LIMIT, TARGET_COLLECTION
    );

    let documents = store
        .fetch_documents(TARGET_COLLECTION, DOCUMENT_LIMIT)
        .await?;

    if documents.is_empty() {
        // Reaching the store but finding nothing is not a failure
        info!(
            "Connected, but collection '{}' returned no documents",
            TARGET_COLLECTION
        );
        return Ok(ProbeReport {
            document_count: 0,
            sample_document: None,
        });
    }

    info!("Success! Found {} documents", documents.len());

    let first = &documents[0];
    info!("First document ({}):", first.id);
    for (key, value) in &first.fields {
        info!("  {}: {}", key, value);
    }

    Ok(ProbeReport {
        document_count: documents.len(),
        sample_document: Some(first.fields.clone()),
    })
}
