use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};

use crate::config::DatabaseSettings;
use crate::domain::new_submission::NewSubmission;
use crate::domain::submission::Submission;
use crate::store::{StoreError, SubmissionStore};

/// [`SubmissionStore`] over one MongoDB collection.
#[derive(Clone)]
pub struct MongoSubmissionStore {
    client: Client,
    submissions: Collection<Submission>,
}

impl MongoSubmissionStore {
    /// Creates the client. The driver connects lazily, so this succeeds
    /// even when the server is unreachable; failures surface on first use.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let options = settings.client_options().await?;
        let client = Client::with_options(options)?;
        let submissions = client
            .database(&settings.database_name)
            .collection::<Submission>(&settings.collection_name);

        Ok(Self {
            client,
            submissions,
        })
    }
}

/// Every query here is unfiltered.
fn match_all() -> Document {
    doc! {}
}

fn stringify_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[async_trait]
impl SubmissionStore for MongoSubmissionStore {
    #[tracing::instrument(name = "Inserting a submission into MongoDB", skip(self, submission))]
    async fn insert_one(&self, submission: &NewSubmission) -> Result<String, StoreError> {
        let record = Submission::from(submission);
        let result = self
            .submissions
            .insert_one(&record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert submission: {:?}", e);
                e
            })?;

        Ok(stringify_id(result.inserted_id))
    }

    #[tracing::instrument(name = "Reading all submissions from MongoDB", skip(self))]
    async fn find_all(&self) -> Result<Vec<Submission>, StoreError> {
        let options = FindOptions::builder().projection(doc! { "_id": 0 }).build();
        let cursor = self.submissions.find(match_all(), options).await?;
        let submissions: Vec<Submission> = cursor.try_collect().await?;
        Ok(submissions)
    }

    #[tracing::instrument(name = "Counting submissions in MongoDB", skip(self))]
    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.submissions.count_documents(match_all(), None).await?)
    }

    #[tracing::instrument(name = "Pinging MongoDB", skip(self))]
    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
