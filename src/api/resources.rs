use async_trait::async_trait;
use std::marker::PhantomData;

use super::client::{ApiClient, Auth};
use crate::error::ClientError;
use crate::models::Resource;

/// CRUD surface of one REST collection.
///
/// Containers only talk to this trait, which keeps them testable against an
/// in-memory backend.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    /// Fetch a listing from an arbitrary path under the collection
    async fn list_at(&self, path: &str) -> Result<Vec<R>, ClientError>;

    async fn get(&self, id: &str) -> Result<R, ClientError>;

    async fn create(&self, draft: &R::Draft) -> Result<R, ClientError>;

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, ClientError>;

    /// Whatever the server says in the body, success means the record is gone
    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    async fn list(&self) -> Result<Vec<R>, ClientError> {
        self.list_at(&R::list_path()).await
    }
}

/// `ResourceApi` over HTTP
pub struct RestResource<R> {
    client: ApiClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> RestResource<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }

    fn read_auth() -> Auth {
        if R::AUTHENTICATED_READS {
            Auth::Required
        } else {
            Auth::Optional
        }
    }
}

impl<R> Clone for RestResource<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for RestResource<R> {
    async fn list_at(&self, path: &str) -> Result<Vec<R>, ClientError> {
        self.client
            .get::<Vec<R>>(path, Self::read_auth())
            .await?
            .into_data()
    }

    async fn get(&self, id: &str) -> Result<R, ClientError> {
        self.client
            .get::<R>(&R::item_path(id), Self::read_auth())
            .await?
            .into_data()
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, ClientError> {
        self.client
            .post::<_, R>(R::COLLECTION, Auth::Required, draft)
            .await?
            .into_data()
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, ClientError> {
        self.client
            .put::<_, R>(&R::item_path(id), Auth::Required, draft)
            .await?
            .into_data()
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete(&R::item_path(id), Auth::Required).await?;
        Ok(())
    }
}
