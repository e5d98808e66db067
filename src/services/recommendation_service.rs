use std::cmp::Reverse;

use crate::{
    database::{ProductStore, UserStore},
    error::Result,
    models::{CharacterType, MemoryType, Product},
    queries::{Clause, ProductFilter, ProductOrder},
};

pub const SIMILAR_LIMIT: i64 = 4;
pub const PERSONALIZED_LIMIT: i64 = 6;
pub const TOP_RARITY_SIZE: i64 = 3;

const CATEGORY_MATCH: i32 = 30;
const OWNER_MATCH: i32 = 20;
const EMOTION_WEIGHT: i32 = 2;
const RARITY_WEIGHT: i32 = 3;

/// How close `candidate` is to `base`. Attributes missing on either side
/// contribute nothing.
pub fn similarity(base: &Product, candidate: &Product) -> i32 {
    let mut score = 0;

    if base.memory_type.is_some() && base.memory_type == candidate.memory_type {
        score += CATEGORY_MATCH;
    }

    if base.original_owner == candidate.original_owner {
        score += OWNER_MATCH;
    }

    if let (Some(a), Some(b)) = (base.emotion_level, candidate.emotion_level) {
        score -= (a - b).abs() * EMOTION_WEIGHT;
    }

    if let (Some(a), Some(b)) = (base.rarity_score, candidate.rarity_score) {
        score -= (a - b).abs() * RARITY_WEIGHT;
    }

    score
}

/// The `k` candidates most similar to `base`, best first, ties by id.
/// `base` itself is never included.
pub fn rank_similar<I>(base: &Product, candidates: I, k: usize) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    let mut scored: Vec<(i32, Product)> = candidates
        .into_iter()
        .filter(|p| p.id != base.id)
        .map(|p| (similarity(base, &p), p))
        .collect();

    scored.sort_by_key(|(score, p)| (Reverse(*score), p.id));
    scored.truncate(k);

    scored.into_iter().map(|(_, p)| p).collect()
}

/// Category a persona is steered towards; `None` means the whole catalog.
pub fn preferred_category(character: CharacterType) -> Option<MemoryType> {
    match character {
        CharacterType::WaffleBear => Some(MemoryType::Experiment),
        CharacterType::Tosim => Some(MemoryType::Childhood),
        CharacterType::Tango => Some(MemoryType::Adventure),
        CharacterType::BusyDog => None,
    }
}

/// Store failures degrade to an empty list; an unknown product has no
/// similar products.
pub async fn similar_recommendations(store: &dyn ProductStore, id: i64, k: i64) -> Vec<Product> {
    match find_similar(store, id, k).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to load similar products for {}: {}", id, e);
            Vec::new()
        }
    }
}

async fn find_similar(store: &dyn ProductStore, id: i64, k: i64) -> Result<Vec<Product>> {
    let Some(base) = store.find_by_id(id).await? else {
        return Ok(Vec::new());
    };

    let catalog = store.find_all().await?;

    Ok(rank_similar(&base, catalog, usize::try_from(k).unwrap_or(0)))
}

/// Store failures degrade to an empty list; an unknown user gets nothing.
pub async fn personalized_recommendations(
    products: &dyn ProductStore,
    users: &dyn UserStore,
    user_id: i64,
    k: i64,
) -> Vec<Product> {
    match find_personalized(products, users, user_id, k).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to load recommendations for user {}: {}", user_id, e);
            Vec::new()
        }
    }
}

async fn find_personalized(
    products: &dyn ProductStore,
    users: &dyn UserStore,
    user_id: i64,
    k: i64,
) -> Result<Vec<Product>> {
    let Some(user) = users.find_by_id(user_id).await? else {
        return Ok(Vec::new());
    };

    let filter = preferred_category(user.character_type)
        .map(Clause::CategoryEquals)
        .into_iter()
        .collect::<ProductFilter>();

    products.find_limited(&filter, ProductOrder::Catalog, k).await
}

pub async fn top_by_rarity(store: &dyn ProductStore, size: i64) -> Vec<Product> {
    match store
        .find_limited(&ProductFilter::match_all(), ProductOrder::RarityDescending, size)
        .await
    {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to load top products by rarity: {}", e);
            Vec::new()
        }
    }
}
