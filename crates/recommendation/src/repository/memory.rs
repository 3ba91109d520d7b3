use crate::{
    abstract_trait::recommendation::repository::{
        RecommendationCommandRepositoryTrait, RecommendationQueryRepositoryTrait,
    },
    domain::requests::recommendation::CreateRecommendationRequest,
    model::recommendation::Recommendation as RecommendationModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};
use tokio::sync::RwLock;

/// Keyed on `(product_id, recommendation_id)`, so iteration over one product's
/// range comes out in recommendation order.
#[derive(Debug, Default)]
pub struct InMemoryRecommendationRepository {
    recommendations: RwLock<BTreeMap<(i32, i32), RecommendationModel>>,
    next_id: AtomicI64,
}

impl InMemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.recommendations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recommendations.read().await.is_empty()
    }
}

#[async_trait]
impl RecommendationQueryRepositoryTrait for InMemoryRecommendationRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<RecommendationModel>, RepositoryError> {
        let recommendations = self.recommendations.read().await;

        Ok(recommendations
            .range((product_id, i32::MIN)..=(product_id, i32::MAX))
            .map(|(_, r)| r.clone())
            .collect())
    }
}

#[async_trait]
impl RecommendationCommandRepositoryTrait for InMemoryRecommendationRepository {
    async fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<RecommendationModel, RepositoryError> {
        let key = (req.product_id, req.recommendation_id);
        let mut recommendations = self.recommendations.write().await;

        if recommendations.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists(format!(
                "product_id {}, recommendation_id {}",
                req.product_id, req.recommendation_id
            )));
        }

        let recommendation = RecommendationModel {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            product_id: req.product_id,
            recommendation_id: req.recommendation_id,
            author: req.author.clone(),
            rating: req.rating,
            content: req.content.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };

        recommendations.insert(key, recommendation.clone());
        Ok(recommendation)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        self.recommendations
            .write()
            .await
            .retain(|(pid, _), _| *pid != product_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.recommendations.write().await.clear();
        Ok(())
    }
}
