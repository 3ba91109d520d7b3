mod command;
mod query;

pub use self::command::{DynRecommendationCommandRepository, RecommendationCommandRepositoryTrait};
pub use self::query::{DynRecommendationQueryRepository, RecommendationQueryRepositoryTrait};
