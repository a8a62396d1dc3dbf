//! Shared response envelope types for API handlers.
//!
//! Write operations answer with driver-style acknowledgement bodies
//! (`insertedId`, `matchedCount`, `deletedCount`), which is the wire
//! contract the original clients consume.

use gradeboard_core::id::DocumentId;
use gradeboard_store::UpdateOutcome;
use serde::Serialize;

/// Body for successful inserts: `{ acknowledged, insertedId }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedResponse {
    pub acknowledged: bool,
    pub inserted_id: DocumentId,
}

impl InsertedResponse {
    pub fn new(inserted_id: DocumentId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Body for updates: `{ acknowledged, matchedCount, modifiedCount, upsertedId? }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<DocumentId>,
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_id: outcome.upserted_id,
        }
    }
}

/// Body for deletes: `{ acknowledged, deletedCount }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// `{ "success": true }` body used by the token endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
