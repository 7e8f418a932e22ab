//! MongoDB-backed group repository.
//!
//! The group id is stored as the document `_id`, so identity lookups hit the
//! primary key index and upserts cannot create duplicates.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReplaceOptions;
use mongodb::Collection;
use models::db::MongoConnection;
use models::group::Group;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ServiceError;
use crate::group::repository::GroupRepository;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    genre: String,
    formation_date: NaiveDate,
}

impl From<Group> for GroupDocument {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            genre: group.genre,
            formation_date: group.formation_date,
        }
    }
}

impl From<GroupDocument> for Group {
    fn from(doc: GroupDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            genre: doc.genre,
            formation_date: doc.formation_date,
        }
    }
}

pub struct MongoGroupRepository {
    collection: Collection<GroupDocument>,
}

impl MongoGroupRepository {
    pub fn new(conn: Arc<MongoConnection>, collection: &str) -> Self {
        Self { collection: conn.collection(collection) }
    }
}

#[async_trait]
impl GroupRepository for MongoGroupRepository {
    async fn save(&self, group: Group) -> Result<Group, ServiceError> {
        let document = GroupDocument::from(group.clone());
        let options = ReplaceOptions::builder().upsert(true).build();
        let res = self
            .collection
            .replace_one(doc! { "_id": &document.id }, &document)
            .with_options(options)
            .await
            .map_err(ServiceError::db)?;
        debug!(id = %group.id, matched = res.matched_count, upserted = res.upserted_id.is_some(), "group saved");
        Ok(group)
    }

    async fn find_all(&self) -> Result<Vec<Group>, ServiceError> {
        let cursor = self.collection.find(doc! {}).await.map_err(ServiceError::db)?;
        let docs: Vec<GroupDocument> = cursor.try_collect().await.map_err(ServiceError::db)?;
        Ok(docs.into_iter().map(Group::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, ServiceError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map(|opt| opt.map(Group::from))
            .map_err(ServiceError::db)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let res = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(ServiceError::db)?;
        debug!(%id, deleted = res.deleted_count, "group deleted");
        Ok(())
    }
}
