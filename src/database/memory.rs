use crate::database::UserStore;
use crate::models::User;
use crate::utils::error::AppError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// UserStore em memória para testes de handler
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<ObjectId, User>>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de operações que chegaram no store
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Faz toda operação seguinte falhar como se o banco estivesse fora
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("connection refused".into()));
        }
        Ok(())
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::StoreUnavailable("lock poisoned".into())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        self.enter()?;
        Ok(self.users.read().map_err(poisoned)?.get(&id).cloned())
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, AppError> {
        self.enter()?;
        let mut users = self.users.write().map_err(poisoned)?;
        if users.contains_key(&user.id) {
            return Err(AppError::StoreUnavailable(format!(
                "duplicate key: {}",
                user.id
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user.id)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, AppError> {
        self.enter()?;
        let removed = self.users.write().map_err(poisoned)?.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.enter()
    }
}
