use crate::database::MongoDB;
use crate::models::User;
use crate::utils::error::AppError;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use std::future::{Future, IntoFuture};
use std::time::Duration;

/// Operações de persistência de usuários, escopadas a uma única collection.
///
/// Os handlers recebem `web::Data<dyn UserStore>`, então qualquer
/// implementação precisa ser segura para uso concorrente.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError>;

    /// Insere o documento e devolve o `_id` persistido
    async fn insert(&self, user: &User) -> Result<ObjectId, AppError>;

    /// Devolve quantos documentos foram removidos (0 ou 1)
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoUserStore {
    db: MongoDB,
    users: Collection<User>,
    operation_timeout: Duration,
}

impl MongoUserStore {
    pub fn new(db: MongoDB, collection: &str, operation_timeout: Duration) -> Self {
        let users = db.collection::<User>(collection);
        Self {
            db,
            users,
            operation_timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: &str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, mongodb::error::Error>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result.map_err(|e| {
                log::error!("❌ MongoDB {} failed: {}", operation, e);
                AppError::from(e)
            }),
            Err(_) => {
                log::error!(
                    "⏱️  MongoDB {} timed out after {:?}",
                    operation,
                    self.operation_timeout
                );
                Err(AppError::StoreUnavailable(format!(
                    "{} timed out after {}s",
                    operation,
                    self.operation_timeout.as_secs()
                )))
            }
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        self.bounded("find_one", self.users.find_one(doc! { "_id": id }).into_future())
            .await
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, AppError> {
        let result = self
            .bounded("insert_one", self.users.insert_one(user).into_future())
            .await?;

        // O driver devolve o `_id` que enviamos; cai no id local se vier outro tipo
        Ok(result.inserted_id.as_object_id().unwrap_or(user.id))
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .bounded("delete_one", self.users.delete_one(doc! { "_id": id }).into_future())
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded("ping", self.db.ping()).await
    }
}
