//! Document-store boundary for the Gradeboard gateway.
//!
//! This crate defines one trait per collection ([`ProjectStore`],
//! [`SubmissionStore`]) without making storage assumptions, plus two
//! implementations: [`mongo::MongoStore`] against a live MongoDB deployment
//! and [`memory::MemoryStore`] for tests. The gateway receives store handles
//! by injection, so every handler is exercisable against either backend.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use gradeboard_core::id::DocumentId;
use gradeboard_core::project::{Project, ProjectFields, ProjectFilter};
use gradeboard_core::submission::{Grade, SubmissionFields, SubmittedProject};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] mongodb::bson::de::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of an update call, mirroring the driver's update result shape.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    /// Set when the update ran with upsert enabled and inserted a document.
    pub upserted_id: Option<DocumentId>,
}

/// Operations over the project collection.
///
/// Each method maps to exactly one store operation; there is no
/// cross-operation transaction. Listing order is the store's natural
/// (insertion) order, which pagination relies on.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new project, returning its store-assigned id.
    async fn insert(&self, fields: &ProjectFields) -> StoreResult<DocumentId>;

    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Project>>;

    /// One page of the unfiltered listing.
    async fn list_page(&self, skip: u64, limit: i64) -> StoreResult<Vec<Project>>;

    /// Total document count of the whole collection, independent of paging.
    async fn count(&self) -> StoreResult<u64>;

    async fn list_by_creator(&self, email: &str) -> StoreResult<Vec<Project>>;

    async fn list_filtered(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>>;

    /// Overwrite the full field set of the project with the given id.
    ///
    /// With `upsert` set, a miss inserts a new document under that id and
    /// the outcome carries `upserted_id`; otherwise a miss reports
    /// `matched_count == 0` and writes nothing.
    async fn replace_fields(
        &self,
        id: &DocumentId,
        fields: &ProjectFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;

    /// Delete by id, returning the number of documents removed (0 or 1).
    async fn delete(&self, id: &DocumentId) -> StoreResult<u64>;
}

/// Operations over the submitted-project collection.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, fields: &SubmissionFields) -> StoreResult<DocumentId>;

    async fn list_all(&self) -> StoreResult<Vec<SubmittedProject>>;

    async fn list_by_examinee(&self, email: &str) -> StoreResult<Vec<SubmittedProject>>;

    /// Submissions whose creatorEmail matches and whose approveStatus is
    /// still Pending.
    async fn list_pending_by_creator(&self, email: &str) -> StoreResult<Vec<SubmittedProject>>;

    /// Set marks and feedback on a submission and force its approveStatus
    /// to Approved. Upsert semantics are as in
    /// [`ProjectStore::replace_fields`].
    async fn apply_grade(
        &self,
        id: &DocumentId,
        grade: &Grade,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;
}
