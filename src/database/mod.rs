pub mod user_store;

#[cfg(test)]
pub mod memory;

pub use user_store::*;

use crate::config::Config;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use std::error::Error;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Conecta no MongoDB e confirma com `ping`.
    ///
    /// Qualquer falha aqui é fatal para o processo: o servidor não deve subir
    /// sem banco.
    pub async fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(&config.mongodb_uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        // Timeouts da URI têm prioridade
        client_options.connect_timeout.get_or_insert(Duration::from_secs(5));
        client_options.server_selection_timeout.get_or_insert(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.mongodb_database);

        let mongodb = Self { client, db };
        mongodb.ping().await?;

        Ok(mongodb)
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
