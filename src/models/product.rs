use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    models::{MemoryType, MemoryTypeResponse, OwnerType},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub price: i32,
    pub stock: i32,
    pub memory_type: Option<MemoryType>,
    pub original_owner: String,
    pub emotion_level: Option<i32>,
    pub rarity_score: Option<i32>,
    pub magical_power: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated product ready to be inserted; `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub price: i32,
    pub stock: i32,
    pub memory_type: Option<MemoryType>,
    pub original_owner: String,
    pub emotion_level: Option<i32>,
    pub rarity_score: Option<i32>,
    pub magical_power: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub price: i32,
    pub stock: i32,
    pub memory_type: Option<MemoryType>,
    pub original_owner: String,
    pub emotion_level: Option<i32>,
    pub rarity_score: Option<i32>,
    pub magical_power: Option<String>,
}

const SCORE_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        if self.price < 0 {
            return Err(AppError::BadRequest("price cannot be negative".to_string()));
        }

        if self.stock < 0 {
            return Err(AppError::BadRequest("stock cannot be negative".to_string()));
        }

        for (field, value) in [
            ("emotion_level", self.emotion_level),
            ("rarity_score", self.rarity_score),
        ] {
            if let Some(value) = value {
                if !SCORE_RANGE.contains(&value) {
                    return Err(AppError::BadRequest(format!(
                        "{} must be between 1 and 10",
                        field
                    )));
                }
            }
        }

        let original_owner = self.original_owner.trim().to_string();
        if OwnerType::from_display_name(&original_owner).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown original owner: {}",
                original_owner
            )));
        }

        Ok(NewProduct {
            name,
            description: non_blank(self.description),
            detailed_description: non_blank(self.detailed_description),
            price: self.price,
            stock: self.stock,
            memory_type: self.memory_type,
            original_owner,
            emotion_level: self.emotion_level,
            rarity_score: self.rarity_score,
            magical_power: non_blank(self.magical_power),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub price: i32,
    pub stock: i32,
    pub memory_type: Option<MemoryTypeResponse>,
    pub original_owner: String,
    pub owner_icon: Option<&'static str>,
    pub emotion_level: Option<i32>,
    pub rarity_score: Option<i32>,
    pub magical_power: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let owner_icon = OwnerType::from_display_name(&product.original_owner).map(OwnerType::icon);

        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            detailed_description: product.detailed_description,
            price: product.price,
            stock: product.stock,
            memory_type: product.memory_type.map(MemoryTypeResponse::from),
            original_owner: product.original_owner,
            owner_icon,
            emotion_level: product.emotion_level,
            rarity_score: product.rarity_score,
            magical_power: product.magical_power,
            created_at: product.created_at,
        }
    }
}
