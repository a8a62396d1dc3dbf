//! MongoDB-backed store implementation.
//!
//! One shared [`Client`] serves all requests; the driver owns connection
//! pooling. Queries are built with `doc!` and mirror the gateway's contract
//! directly: `$in` for filter axes, `skip`/`limit` for pagination,
//! `count_documents` for totals, and `$set` updates with optional upsert.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson, to_document, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};

use gradeboard_core::id::DocumentId;
use gradeboard_core::project::{Project, ProjectFields, ProjectFilter};
use gradeboard_core::submission::{Grade, SubmissionFields, SubmittedProject};

use crate::{ProjectStore, StoreError, StoreResult, SubmissionStore, UpdateOutcome};

const PROJECTS_COLLECTION: &str = "projects";
const SUBMISSIONS_COLLECTION: &str = "submittedProjects";

/// Store handle over the two gateway collections.
///
/// Cheaply cloneable; clones share the underlying client.
#[derive(Clone)]
pub struct MongoStore {
    projects: Collection<Document>,
    submissions: Collection<Document>,
}

impl MongoStore {
    /// Connect to the deployment, pin the Stable API to v1, and verify the
    /// connection with a `ping` before returning.
    pub async fn connect(uri: &str, db_name: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)?;
        let database = client.database(db_name);
        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(db = db_name, "Connected to MongoDB deployment");

        Ok(Self {
            projects: database.collection(PROJECTS_COLLECTION),
            submissions: database.collection(SUBMISSIONS_COLLECTION),
        })
    }
}

/// Convert a validated [`DocumentId`] into a driver ObjectId.
fn object_id(id: &DocumentId) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| StoreError::Malformed(format!("Invalid ObjectId '{id}': {e}")))
}

/// Split a raw document into its ObjectId and remaining fields.
fn split_id(mut doc: Document) -> StoreResult<(DocumentId, Document)> {
    let id = doc
        .remove("_id")
        .and_then(|v| v.as_object_id())
        .ok_or_else(|| StoreError::Malformed("Document is missing an ObjectId _id".to_string()))?;
    Ok((DocumentId::from_store(id.to_hex()), doc))
}

fn project_from_document(doc: Document) -> StoreResult<Project> {
    let (id, rest) = split_id(doc)?;
    let fields: ProjectFields = mongodb::bson::from_document(rest)?;
    Ok(Project { id, fields })
}

fn submission_from_document(doc: Document) -> StoreResult<SubmittedProject> {
    let (id, rest) = split_id(doc)?;
    let fields: SubmissionFields = mongodb::bson::from_document(rest)?;
    Ok(SubmittedProject { id, fields })
}

fn filter_document(filter: &ProjectFilter) -> Document {
    let mut query = Document::new();
    if let Some(values) = &filter.difficulty {
        query.insert("difficultyLevel", doc! { "$in": values.clone() });
    }
    if let Some(values) = &filter.category {
        query.insert("category", doc! { "$in": values.clone() });
    }
    query
}

fn outcome_from_update(result: mongodb::results::UpdateResult) -> UpdateOutcome {
    UpdateOutcome {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id: result
            .upserted_id
            .as_ref()
            .and_then(|v| v.as_object_id())
            .map(|oid| DocumentId::from_store(oid.to_hex())),
    }
}

#[async_trait]
impl ProjectStore for MongoStore {
    async fn insert(&self, fields: &ProjectFields) -> StoreResult<DocumentId> {
        let result = self.projects.insert_one(to_document(fields)?).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Malformed("Insert did not return an ObjectId".to_string()))?;
        Ok(DocumentId::from_store(id.to_hex()))
    }

    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Project>> {
        let found = self
            .projects
            .find_one(doc! { "_id": object_id(id)? })
            .await?;
        found.map(project_from_document).transpose()
    }

    async fn list_page(&self, skip: u64, limit: i64) -> StoreResult<Vec<Project>> {
        let docs: Vec<Document> = self
            .projects
            .find(Document::new())
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(project_from_document).collect()
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.projects.count_documents(Document::new()).await?)
    }

    async fn list_by_creator(&self, email: &str) -> StoreResult<Vec<Project>> {
        let docs: Vec<Document> = self
            .projects
            .find(doc! { "creatorEmail": email })
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(project_from_document).collect()
    }

    async fn list_filtered(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>> {
        let docs: Vec<Document> = self
            .projects
            .find(filter_document(filter))
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(project_from_document).collect()
    }

    async fn replace_fields(
        &self,
        id: &DocumentId,
        fields: &ProjectFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let result = self
            .projects
            .update_one(
                doc! { "_id": object_id(id)? },
                doc! { "$set": to_document(fields)? },
            )
            .upsert(upsert)
            .await?;
        Ok(outcome_from_update(result))
    }

    async fn delete(&self, id: &DocumentId) -> StoreResult<u64> {
        let result = self
            .projects
            .delete_one(doc! { "_id": object_id(id)? })
            .await?;
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    async fn insert(&self, fields: &SubmissionFields) -> StoreResult<DocumentId> {
        let result = self.submissions.insert_one(to_document(fields)?).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Malformed("Insert did not return an ObjectId".to_string()))?;
        Ok(DocumentId::from_store(id.to_hex()))
    }

    async fn list_all(&self) -> StoreResult<Vec<SubmittedProject>> {
        let docs: Vec<Document> = self
            .submissions
            .find(Document::new())
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(submission_from_document).collect()
    }

    async fn list_by_examinee(&self, email: &str) -> StoreResult<Vec<SubmittedProject>> {
        let docs: Vec<Document> = self
            .submissions
            .find(doc! { "examineeEmail": email })
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(submission_from_document).collect()
    }

    async fn list_pending_by_creator(&self, email: &str) -> StoreResult<Vec<SubmittedProject>> {
        let docs: Vec<Document> = self
            .submissions
            .find(doc! { "creatorEmail": email, "approveStatus": "Pending" })
            .await?
            .try_collect()
            .await?;
        docs.into_iter().map(submission_from_document).collect()
    }

    async fn apply_grade(
        &self,
        id: &DocumentId,
        grade: &Grade,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let set = doc! {
            "givenMarks": to_bson(&grade.given_marks)?,
            "feedback": to_bson(&grade.feedback)?,
            // The grading path is the only Pending -> Approved transition,
            // and it is unconditional.
            "approveStatus": "Approved",
        };
        let mut update = doc! { "$set": set };
        if upsert {
            // An upserted grade has no submission body; seed the email
            // fields so the document stays well-formed for later reads.
            update.insert(
                "$setOnInsert",
                doc! { "examineeEmail": "", "creatorEmail": "" },
            );
        }
        let result = self
            .submissions
            .update_one(doc! { "_id": object_id(id)? }, update)
            .upsert(upsert)
            .await?;
        Ok(outcome_from_update(result))
    }
}
