use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::CreateProductRequest,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
};
use tokio::sync::RwLock;

/// Store backed by a map keyed on product id. Serves both the query and the
/// command side so one instance can be shared between them.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<i32, ProductModel>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.get(&product_id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut products = self.products.write().await;

        if products.contains_key(&req.product_id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "product_id {}",
                req.product_id
            )));
        }

        let product = ProductModel {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            product_id: req.product_id,
            name: req.name.clone(),
            weight: req.weight,
            created_at: Some(Utc::now().naive_utc()),
        };

        products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.products.write().await.remove(&product_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.products.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product_id: i32) -> CreateProductRequest {
        CreateProductRequest {
            product_id,
            name: format!("name-{product_id}"),
            weight: 1,
            service_address: None,
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create_product(&request(1)).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.product_id, 1);
        assert_eq!(created.name, "name-1");

        let found = repo.find_by_product_id(1).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(repo.find_by_product_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn store_assigns_distinct_internal_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create_product(&request(10)).await.unwrap();
        let second = repo.create_product(&request(20)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_product_id_is_rejected() {
        let repo = InMemoryProductRepository::new();
        repo.create_product(&request(1)).await.unwrap();

        let err = repo.create_product(&request(1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        repo.create_product(&request(1)).await.unwrap();

        repo.delete_by_product_id(1).await.unwrap();
        repo.delete_by_product_id(1).await.unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_all_clears_everything() {
        let repo = InMemoryProductRepository::new();
        repo.create_product(&request(1)).await.unwrap();
        repo.create_product(&request(2)).await.unwrap();

        repo.delete_all().await.unwrap();

        assert!(repo.is_empty().await);
    }
}
