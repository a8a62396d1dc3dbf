//! In-memory store implementation.
//!
//! Backs the integration tests, which exercise handlers through the real
//! router without a MongoDB deployment. Documents are kept in insertion
//! order, matching the natural order the Mongo backend paginates in.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use gradeboard_core::id::DocumentId;
use gradeboard_core::project::{Project, ProjectFields, ProjectFilter};
use gradeboard_core::submission::{ApproveStatus, Grade, SubmissionFields, SubmittedProject};

use crate::{ProjectStore, StoreResult, SubmissionStore, UpdateOutcome};

/// Insertion-ordered in-memory backend for both collections.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<(DocumentId, ProjectFields)>>,
    submissions: RwLock<Vec<(DocumentId, SubmissionFields)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn fresh_id() -> DocumentId {
    DocumentId::from_store(ObjectId::new().to_hex())
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn insert(&self, fields: &ProjectFields) -> StoreResult<DocumentId> {
        let id = fresh_id();
        self.projects.write().await.push((id.clone(), fields.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|(doc_id, fields)| Project {
                id: doc_id.clone(),
                fields: fields.clone(),
            }))
    }

    async fn list_page(&self, skip: u64, limit: i64) -> StoreResult<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .map(|(id, fields)| Project {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.projects.read().await.len() as u64)
    }

    async fn list_by_creator(&self, email: &str) -> StoreResult<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|(_, fields)| fields.creator_email == email)
            .map(|(id, fields)| Project {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn list_filtered(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|(_, fields)| filter.matches(fields))
            .map(|(id, fields)| Project {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn replace_fields(
        &self,
        id: &DocumentId,
        fields: &ProjectFields,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let mut projects = self.projects.write().await;
        if let Some(entry) = projects.iter_mut().find(|(doc_id, _)| doc_id == id) {
            let modified = entry.1 != *fields;
            entry.1 = fields.clone();
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: modified as u64,
                upserted_id: None,
            });
        }
        if upsert {
            projects.push((id.clone(), fields.clone()));
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id.clone()),
            });
        }
        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
        })
    }

    async fn delete(&self, id: &DocumentId) -> StoreResult<u64> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|(doc_id, _)| doc_id != id);
        Ok((before - projects.len()) as u64)
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, fields: &SubmissionFields) -> StoreResult<DocumentId> {
        let id = fresh_id();
        self.submissions
            .write()
            .await
            .push((id.clone(), fields.clone()));
        Ok(id)
    }

    async fn list_all(&self) -> StoreResult<Vec<SubmittedProject>> {
        Ok(self
            .submissions
            .read()
            .await
            .iter()
            .map(|(id, fields)| SubmittedProject {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn list_by_examinee(&self, email: &str) -> StoreResult<Vec<SubmittedProject>> {
        Ok(self
            .submissions
            .read()
            .await
            .iter()
            .filter(|(_, fields)| fields.examinee_email == email)
            .map(|(id, fields)| SubmittedProject {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn list_pending_by_creator(&self, email: &str) -> StoreResult<Vec<SubmittedProject>> {
        Ok(self
            .submissions
            .read()
            .await
            .iter()
            .filter(|(_, fields)| {
                fields.creator_email == email && fields.approve_status == ApproveStatus::Pending
            })
            .map(|(id, fields)| SubmittedProject {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn apply_grade(
        &self,
        id: &DocumentId,
        grade: &Grade,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let mut submissions = self.submissions.write().await;
        if let Some(entry) = submissions.iter_mut().find(|(doc_id, _)| doc_id == id) {
            entry.1.given_marks = grade.given_marks;
            entry.1.feedback = grade.feedback.clone();
            entry.1.approve_status = ApproveStatus::Approved;
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: 1,
                upserted_id: None,
            });
        }
        if upsert {
            submissions.push((
                id.clone(),
                SubmissionFields {
                    examinee_email: String::new(),
                    creator_email: String::new(),
                    approve_status: ApproveStatus::Approved,
                    given_marks: grade.given_marks,
                    feedback: grade.feedback.clone(),
                },
            ));
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id.clone()),
            });
        }
        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
        })
    }
}
