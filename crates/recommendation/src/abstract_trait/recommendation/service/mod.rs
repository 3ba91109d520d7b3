mod command;
mod query;

pub use self::command::{DynRecommendationCommandService, RecommendationCommandServiceTrait};
pub use self::query::{DynRecommendationQueryService, RecommendationQueryServiceTrait};
