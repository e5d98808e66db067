use crate::{
    database::ProductStore,
    error::Result,
    models::{MemoryType, NewProduct, OwnerType},
};

struct SampleProduct {
    name: &'static str,
    description: &'static str,
    price: i32,
    stock: i32,
    memory_type: MemoryType,
    owner: OwnerType,
    emotion_level: i32,
    rarity_score: i32,
    magical_power: Option<&'static str>,
}

const SAMPLE_CATALOG: &[SampleProduct] = &[
    SampleProduct {
        name: "First Teddy Bear",
        description: "The bear that guarded every bedtime",
        price: 8_500,
        stock: 3,
        memory_type: MemoryType::Childhood,
        owner: OwnerType::Tosim,
        emotion_level: 9,
        rarity_score: 6,
        magical_power: Some("Chases nightmares away"),
    },
    SampleProduct {
        name: "Chalk Hopscotch Grid",
        description: "Drawn on the alley floor one summer afternoon",
        price: 3_000,
        stock: 10,
        memory_type: MemoryType::Childhood,
        owner: OwnerType::Nureong,
        emotion_level: 6,
        rarity_score: 3,
        magical_power: None,
    },
    SampleProduct {
        name: "Friendship Bracelet",
        description: "Two threads, one promise",
        price: 12_000,
        stock: 5,
        memory_type: MemoryType::Friendship,
        owner: OwnerType::Tango,
        emotion_level: 8,
        rarity_score: 5,
        magical_power: None,
    },
    SampleProduct {
        name: "Folded Love Letter",
        description: "Never sent, always kept",
        price: 55_000,
        stock: 1,
        memory_type: MemoryType::Love,
        owner: OwnerType::Tosim,
        emotion_level: 10,
        rarity_score: 9,
        magical_power: Some("Warms the hand that holds it"),
    },
    SampleProduct {
        name: "Treasure Map Fragment",
        description: "The X is still missing",
        price: 120_000,
        stock: 1,
        memory_type: MemoryType::Adventure,
        owner: OwnerType::Tango,
        emotion_level: 7,
        rarity_score: 10,
        magical_power: Some("Points north when you are lost"),
    },
    SampleProduct {
        name: "Rainy Campsite Lantern",
        description: "Lit the tent through a three-day storm",
        price: 42_000,
        stock: 2,
        memory_type: MemoryType::Adventure,
        owner: OwnerType::Bapugae,
        emotion_level: 5,
        rarity_score: 7,
        magical_power: None,
    },
    SampleProduct {
        name: "Grandma's Honey Cake",
        description: "The smell of a Sunday kitchen",
        price: 9_000,
        stock: 8,
        memory_type: MemoryType::Food,
        owner: OwnerType::WaffleBear,
        emotion_level: 8,
        rarity_score: 4,
        magical_power: None,
    },
    SampleProduct {
        name: "Midnight Ramen",
        description: "Shared before the big exam",
        price: 4_500,
        stock: 20,
        memory_type: MemoryType::Food,
        owner: OwnerType::Guphanyang,
        emotion_level: 5,
        rarity_score: 2,
        magical_power: None,
    },
    SampleProduct {
        name: "Handheld Console",
        description: "Save file at 99 hours",
        price: 68_000,
        stock: 2,
        memory_type: MemoryType::Toy,
        owner: OwnerType::Guphanyang,
        emotion_level: 7,
        rarity_score: 8,
        magical_power: None,
    },
    SampleProduct {
        name: "Baking Soda Volcano",
        description: "The science fair that almost worked",
        price: 15_000,
        stock: 4,
        memory_type: MemoryType::Experiment,
        owner: OwnerType::WaffleBear,
        emotion_level: 6,
        rarity_score: 5,
        magical_power: Some("Erupts on command"),
    },
    SampleProduct {
        name: "Crystal Growing Kit",
        description: "Blue crystals on a string",
        price: 22_000,
        stock: 3,
        memory_type: MemoryType::Experiment,
        owner: OwnerType::WaffleBear,
        emotion_level: 4,
        rarity_score: 6,
        magical_power: None,
    },
    SampleProduct {
        name: "Homemade Rocket",
        description: "Reached the neighbor's roof",
        price: 95_000,
        stock: 1,
        memory_type: MemoryType::Experiment,
        owner: OwnerType::Bapugae,
        emotion_level: 9,
        rarity_score: 9,
        magical_power: Some("Always lands softly"),
    },
];

pub fn sample_catalog() -> Vec<NewProduct> {
    SAMPLE_CATALOG
        .iter()
        .map(|sample| NewProduct {
            name: sample.name.to_string(),
            description: Some(sample.description.to_string()),
            detailed_description: None,
            price: sample.price,
            stock: sample.stock,
            memory_type: Some(sample.memory_type),
            original_owner: sample.owner.display_name().to_string(),
            emotion_level: Some(sample.emotion_level),
            rarity_score: Some(sample.rarity_score),
            magical_power: sample.magical_power.map(str::to_string),
        })
        .collect()
}

/// Inserts the sample catalog when the store holds no products.
/// Returns the number of inserted products.
pub async fn seed_if_empty(store: &dyn ProductStore) -> Result<usize> {
    if !store.find_all().await?.is_empty() {
        return Ok(0);
    }

    let catalog = sample_catalog();
    for product in &catalog {
        store.create_product(product).await?;
    }

    tracing::info!("Seeded {} sample products", catalog.len());

    Ok(catalog.len())
}
