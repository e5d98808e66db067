use chrono::{TimeZone, Utc};
use memory_market::{
    models::{MemoryType, Product, SearchRequest, SortKey},
    services::{recommendation_service::rank_similar, search_composer::compose},
};
use proptest::prelude::*;

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Newest),
        Just(SortKey::Oldest),
        Just(SortKey::PriceLow),
        Just(SortKey::PriceHigh),
        Just(SortKey::EmotionHigh),
        Just(SortKey::RarityHigh),
    ]
}

fn search_request() -> impl Strategy<Value = SearchRequest> {
    (
        1u32..50,
        1u32..=100,
        sort_key(),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(prop_oneof![
            Just("under-10k".to_string()),
            Just("50k-100k".to_string()),
            Just("over-100k".to_string()),
        ]),
        proptest::option::of(-5i32..=10),
    )
        .prop_map(|(page, size, sort, search, price_range, emotion_level_min)| SearchRequest {
            page,
            size,
            sort,
            price_range,
            emotion_level_min,
            search,
            ..SearchRequest::default()
        })
}

fn memory_type() -> impl Strategy<Value = Option<MemoryType>> {
    proptest::option::of(proptest::sample::select(MemoryType::ALL.to_vec()))
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::vec(
        (
            memory_type(),
            proptest::sample::select(vec!["Tosim", "Tango", "Nureong"]),
            proptest::option::of(1i32..=10),
            proptest::option::of(1i32..=10),
        ),
        1..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (memory_type, owner, emotion_level, rarity_score))| Product {
                id: i as i64 + 1,
                name: format!("Memory {}", i + 1),
                description: None,
                detailed_description: None,
                price: 10_000,
                stock: 1,
                memory_type,
                original_owner: owner.to_string(),
                emotion_level,
                rarity_score,
                magical_power: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn unknown_category_composes_like_no_category(
        request in search_request(),
        code in "[a-z]{1,12}",
    ) {
        let with_unknown = SearchRequest {
            category: Some(code),
            ..request.clone()
        };

        prop_assert_eq!(compose(&with_unknown), compose(&request));
    }

    #[test]
    fn unknown_price_label_composes_like_no_price_label(
        request in search_request(),
        label in "cheap|pricey|[0-9]{1,3}",
    ) {
        let without = SearchRequest { price_range: None, ..request.clone() };
        let with_unknown = SearchRequest { price_range: Some(label), ..request };

        prop_assert_eq!(compose(&with_unknown), compose(&without));
    }

    #[test]
    fn page_window_starts_where_the_previous_page_ends(request in search_request()) {
        let (_, _, window) = compose(&request);

        prop_assert_eq!(window.page_number(), request.page);
        prop_assert_eq!(window.offset(), (request.page as i64 - 1) * request.size as i64);
    }

    #[test]
    fn similar_ranking_never_contains_the_base(
        products in catalog(),
        pick in any::<prop::sample::Index>(),
        k in 0usize..8,
    ) {
        let base = pick.get(&products).clone();
        let ranked = rank_similar(&base, products.clone(), k);

        prop_assert!(ranked.len() <= k);
        prop_assert!(ranked.len() <= products.len() - 1);
        prop_assert!(ranked.iter().all(|p| p.id != base.id));
    }
}
