pub mod catalog_service;
pub mod recommendation_service;
pub mod search_composer;
pub mod user_service;
