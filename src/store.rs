use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use thiserror::Error;

use crate::demo_data;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

/// The one store dependency handed to every endpoint filter. `Unavailable`
/// answers reads from the fixed demo dataset and acknowledges writes with
/// a placeholder id without persisting anything, so the HTTP layer sees
/// the same shapes either way.
#[derive(Debug, Clone)]
pub enum Store {
    Connected(Database),
    Unavailable,
}

impl Store {
    /// Reads `DATABASE_URL`/`DATABASE_NAME` and pings the server once.
    /// Any missing variable or failed connect selects the demo fallback
    /// instead of aborting startup.
    pub async fn init() -> Store {
        let url = std::env::var("DATABASE_URL").ok();
        let name = std::env::var("DATABASE_NAME").ok();
        let (Some(url), Some(name)) = (url, name) else {
            log::warn!("DATABASE_URL or DATABASE_NAME not set, serving demo data");
            return Store::Unavailable;
        };
        let client = match Client::with_uri_str(&url).await {
            Ok(client) => client,
            Err(err) => {
                log::error!("database connection failed: {}", err);
                return Store::Unavailable;
            }
        };
        let db = client.database(&name);
        match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                log::info!("connected to database {}", name);
                Store::Connected(db)
            }
            Err(err) => {
                log::error!("database ping failed: {}", err);
                Store::Unavailable
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Store::Connected(_))
    }

    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
        sort: Option<Document>,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        match self {
            Store::Connected(db) => {
                let coll = db.collection::<Document>(collection);
                let mut find = coll.find(filter).limit(limit);
                if let Some(sort) = sort {
                    find = find.sort(sort);
                }
                Ok(find.await?.try_collect().await?)
            }
            Store::Unavailable => Ok(demo_data::find(collection, limit)),
        }
    }

    pub async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        match self {
            Store::Connected(db) => Ok(db
                .collection::<Document>(collection)
                .find_one(filter)
                .await?),
            Store::Unavailable => Ok(demo_data::find_one(collection, &filter)),
        }
    }

    pub async fn insert(&self, collection: &str, doc: Document) -> Result<Bson, StoreError> {
        match self {
            Store::Connected(db) => Ok(db
                .collection::<Document>(collection)
                .insert_one(doc)
                .await?
                .inserted_id),
            Store::Unavailable => Ok(demo_data::placeholder_id(collection)),
        }
    }

    pub async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<usize, StoreError> {
        match self {
            Store::Connected(db) => {
                let result = db
                    .collection::<Document>(collection)
                    .insert_many(docs)
                    .await?;
                Ok(result.inserted_ids.len())
            }
            Store::Unavailable => Ok(docs.len()),
        }
    }

    pub async fn count(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        match self {
            Store::Connected(db) => Ok(db
                .collection::<Document>(collection)
                .count_documents(filter)
                .await?),
            Store::Unavailable => Ok(0),
        }
    }

    /// Connectivity snapshot for `GET /test`. Probe failures never bubble
    /// out; they come back as a truncated message string.
    pub async fn probe(&self) -> Diagnostics {
        match self {
            Store::Connected(db) => match db.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(10);
                    Diagnostics {
                        connected: true,
                        collections: names,
                        error: None,
                    }
                }
                Err(err) => {
                    log::error!("listing collections failed: {}", err);
                    Diagnostics {
                        connected: true,
                        collections: Vec::new(),
                        error: Some(truncate_error(&err.to_string())),
                    }
                }
            },
            Store::Unavailable => Diagnostics {
                connected: false,
                collections: Vec::new(),
                error: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostics {
    pub connected: bool,
    pub collections: Vec<String>,
    pub error: Option<String>,
}

fn truncate_error(msg: &str) -> String {
    msg.chars().take(50).collect()
}
