use crate::{
    models::{MemoryType, PriceRange, SearchRequest},
    queries::{Clause, PageWindow, ProductFilter, ProductOrder},
};

/// Turns a normalized search request into the filter, ordering and page
/// window the store executes. Unrecognized category codes and price labels
/// are dropped rather than rejected.
pub fn compose(request: &SearchRequest) -> (ProductFilter, ProductOrder, PageWindow) {
    let filter = [
        request.search.clone().map(Clause::NameContains),
        request.owner.clone().map(Clause::OwnerEquals),
        request.category.as_deref().and_then(category_clause),
        request
            .emotion_level_min
            .filter(|min| *min > 0)
            .map(Clause::EmotionAtLeast),
        request.price_range.as_deref().and_then(price_clause),
    ]
    .into_iter()
    .flatten()
    .collect::<ProductFilter>();

    let order = ProductOrder::from(request.sort);
    let window = PageWindow::from_page_number(request.page, request.size);

    (filter, order, window)
}

fn category_clause(code: &str) -> Option<Clause> {
    match MemoryType::from_code(code) {
        Some(memory_type) => Some(Clause::CategoryEquals(memory_type)),
        None => {
            tracing::warn!("Ignoring unknown category filter: {}", code);
            None
        }
    }
}

fn price_clause(label: &str) -> Option<Clause> {
    match PriceRange::from_label(label) {
        Some(PriceRange::All) => None,
        Some(range) => {
            let (min, max) = range.bounds();
            Some(Clause::PriceWithin { min, max })
        }
        None => {
            tracing::warn!("Ignoring unknown price range filter: {}", label);
            None
        }
    }
}
