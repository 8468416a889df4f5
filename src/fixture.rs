//! # Test database fixture
//!
//! Owns the MongoDB client for the duration of one load run. `main` builds it
//! with [`DatabaseFixture::on_test_start`] before the attack and consumes it
//! with [`DatabaseFixture::on_test_stop`] afterwards, so no user ever touches it.
//!
//! Both hooks log and swallow errors: an unreachable database degrades the run
//! (users work against whatever state is there) instead of aborting it.

use mongodb::bson::{doc, Document};
use mongodb::Client;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::DriverError;

pub struct DatabaseFixture {
    config: DatabaseConfig,
    client: Option<Client>,
}

impl DatabaseFixture {
    /// A fixture holding no connection. Cleanup and teardown are no-ops.
    pub fn detached(config: DatabaseConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Connects and creates any missing collection. Safe to call when the
    /// collections already exist.
    pub async fn setup(config: DatabaseConfig) -> Result<Self, DriverError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.name);
        let existing = db.list_collection_names().await?;

        for name in &config.collections {
            if !existing.contains(name) {
                db.create_collection(name).await?;
                info!(collection = %name, "created collection");
            }
        }

        Ok(Self {
            config,
            client: Some(client),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Deletes every document from the fixture's collections.
    pub async fn cleanup(&self) -> Result<(), DriverError> {
        let Some(client) = &self.client else {
            return Ok(());
        };
        let db = client.database(&self.config.name);
        for name in &self.config.collections {
            let result = db.collection::<Document>(name).delete_many(doc! {}).await?;
            info!(
                collection = %name,
                deleted = result.deleted_count,
                "cleaned up collection"
            );
        }
        Ok(())
    }

    /// Document count per collection, in configuration order.
    pub async fn document_counts(&self) -> Result<Vec<(String, u64)>, DriverError> {
        let Some(client) = &self.client else {
            return Ok(Vec::new());
        };
        let db = client.database(&self.config.name);
        let mut counts = Vec::with_capacity(self.config.collections.len());
        for name in &self.config.collections {
            let count = db
                .collection::<Document>(name)
                .count_documents(doc! {})
                .await?;
            counts.push((name.clone(), count));
        }
        Ok(counts)
    }

    /// Global test-start hook: connect, then empty the collections.
    ///
    /// On failure the returned fixture is detached and the run goes on.
    pub async fn on_test_start(config: DatabaseConfig) -> Self {
        info!(database = %config.name, "starting load test");
        let fixture = match Self::setup(config.clone()).await {
            Ok(fixture) => fixture,
            Err(e) => {
                error!(error = %e, "failed to initialize test database");
                return Self::detached(config);
            }
        };
        match fixture.cleanup().await {
            Ok(()) => info!("test database initialized and cleaned"),
            Err(e) => error!(error = %e, "failed to initialize test database"),
        }
        fixture
    }

    /// Global test-stop hook: empty the collections, then close the client.
    pub async fn on_test_stop(self) {
        info!("test completed");
        if let Err(e) = self.cleanup().await {
            error!(error = %e, "failed to cleanup test database");
        }
        if let Some(client) = self.client {
            client.shutdown().await;
            info!("test database cleaned up and connection closed");
        }
    }
}
