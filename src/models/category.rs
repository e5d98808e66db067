use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

/// Thematic origin of a memory product. Stored as the `memory_type`
/// Postgres enum and matched in search requests by its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "memory_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryType {
    Childhood,
    Friendship,
    Love,
    Adventure,
    Food,
    Toy,
    Experiment,
}

static BY_CODE: LazyLock<HashMap<&'static str, MemoryType>> =
    LazyLock::new(|| MemoryType::ALL.iter().map(|t| (t.code(), *t)).collect());

impl MemoryType {
    pub const ALL: [MemoryType; 7] = [
        MemoryType::Childhood,
        MemoryType::Friendship,
        MemoryType::Love,
        MemoryType::Adventure,
        MemoryType::Food,
        MemoryType::Toy,
        MemoryType::Experiment,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MemoryType::Childhood => "CHILDHOOD",
            MemoryType::Friendship => "FRIENDSHIP",
            MemoryType::Love => "LOVE",
            MemoryType::Adventure => "ADVENTURE",
            MemoryType::Food => "FOOD",
            MemoryType::Toy => "TOY",
            MemoryType::Experiment => "EXPERIMENT",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MemoryType::Childhood => "Childhood",
            MemoryType::Friendship => "Friendship",
            MemoryType::Love => "Love",
            MemoryType::Adventure => "Adventure",
            MemoryType::Food => "Food",
            MemoryType::Toy => "Toy",
            MemoryType::Experiment => "Experiment",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MemoryType::Childhood => "🧸",
            MemoryType::Friendship => "👫",
            MemoryType::Love => "💕",
            MemoryType::Adventure => "🗺️",
            MemoryType::Food => "🍰",
            MemoryType::Toy => "🎮",
            MemoryType::Experiment => "🧪",
        }
    }

    /// Exact, case-sensitive lookup by code (`"EXPERIMENT"`).
    pub fn from_code(code: &str) -> Option<Self> {
        BY_CODE.get(code).copied()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryTypeResponse {
    pub code: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl From<MemoryType> for MemoryTypeResponse {
    fn from(memory_type: MemoryType) -> Self {
        Self {
            code: memory_type.code(),
            display_name: memory_type.display_name(),
            icon: memory_type.icon(),
        }
    }
}
