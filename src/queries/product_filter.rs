use std::cmp::Ordering;

use sqlx::{Postgres, QueryBuilder};

use crate::models::{MemoryType, Product, SortKey};

/// One predicate over a product row. Every clause has a SQL rendering and
/// an in-memory evaluation; the two must agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Case-insensitive substring match on the name; wildcards in the term are literal.
    NameContains(String),
    OwnerEquals(String),
    CategoryEquals(MemoryType),
    /// Rows without an emotion level never match.
    EmotionAtLeast(i32),
    /// Both bounds inclusive.
    PriceWithin { min: i32, max: Option<i32> },
    IdNot(i64),
}

impl Clause {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Clause::NameContains(term) => product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            Clause::OwnerEquals(owner) => product.original_owner == *owner,
            Clause::CategoryEquals(memory_type) => product.memory_type == Some(*memory_type),
            Clause::EmotionAtLeast(min) => product.emotion_level.is_some_and(|level| level >= *min),
            Clause::PriceWithin { min, max } => {
                product.price >= *min && max.map_or(true, |max| product.price <= max)
            }
            Clause::IdNot(id) => product.id != *id,
        }
    }

    fn push_sql(&self, query: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Clause::NameContains(term) => {
                query.push("name ILIKE ");
                query.push_bind(like_pattern(term));
            }
            Clause::OwnerEquals(owner) => {
                query.push("original_owner = ");
                query.push_bind(owner.clone());
            }
            Clause::CategoryEquals(memory_type) => {
                query.push("memory_type = ");
                query.push_bind(*memory_type);
            }
            Clause::EmotionAtLeast(min) => {
                query.push("emotion_level >= ");
                query.push_bind(*min);
            }
            Clause::PriceWithin { min, max } => {
                query.push("price >= ");
                query.push_bind(*min);
                if let Some(max) = max {
                    query.push(" AND price <= ");
                    query.push_bind(*max);
                }
            }
            Clause::IdNot(id) => {
                query.push("id <> ");
                query.push_bind(*id);
            }
        }
    }
}

/// `%term%` with `%`, `_` and `\` escaped so they match literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// A conjunction of clauses. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    clauses: Vec<Clause>,
}

impl ProductFilter {
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.clauses.iter().all(|clause| clause.matches(product))
    }

    /// Appends ` WHERE ... AND ...` (nothing for the match-all filter).
    pub fn push_where(&self, query: &mut QueryBuilder<'_, Postgres>) {
        for (i, clause) in self.clauses.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            clause.push_sql(query);
        }
    }
}

impl FromIterator<Clause> for ProductFilter {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

/// Result ordering. Every variant ends in an `id` tie-break and puts
/// missing scores last, in SQL and in memory alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    NewestFirst,
    OldestFirst,
    PriceAscending,
    PriceDescending,
    EmotionDescending,
    RarityDescending,
    /// Insertion order, i.e. ascending id.
    Catalog,
}

impl From<SortKey> for ProductOrder {
    fn from(sort: SortKey) -> Self {
        match sort {
            SortKey::Newest => ProductOrder::NewestFirst,
            SortKey::Oldest => ProductOrder::OldestFirst,
            SortKey::PriceLow => ProductOrder::PriceAscending,
            SortKey::PriceHigh => ProductOrder::PriceDescending,
            SortKey::EmotionHigh => ProductOrder::EmotionDescending,
            SortKey::RarityHigh => ProductOrder::RarityDescending,
        }
    }
}

impl ProductOrder {
    pub fn sql(self) -> &'static str {
        match self {
            ProductOrder::NewestFirst => "created_at DESC, id DESC",
            ProductOrder::OldestFirst => "created_at ASC, id ASC",
            ProductOrder::PriceAscending => "price ASC, id ASC",
            ProductOrder::PriceDescending => "price DESC, id ASC",
            ProductOrder::EmotionDescending => "emotion_level DESC NULLS LAST, id ASC",
            ProductOrder::RarityDescending => "rarity_score DESC NULLS LAST, id ASC",
            ProductOrder::Catalog => "id ASC",
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductOrder::NewestFirst => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
            ProductOrder::OldestFirst => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
            ProductOrder::PriceAscending => a.price.cmp(&b.price).then(a.id.cmp(&b.id)),
            ProductOrder::PriceDescending => b.price.cmp(&a.price).then(a.id.cmp(&b.id)),
            ProductOrder::EmotionDescending => {
                desc_nulls_last(a.emotion_level, b.emotion_level).then(a.id.cmp(&b.id))
            }
            ProductOrder::RarityDescending => {
                desc_nulls_last(a.rarity_score, b.rarity_score).then(a.id.cmp(&b.id))
            }
            ProductOrder::Catalog => a.id.cmp(&b.id),
        }
    }
}

fn desc_nulls_last(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A 0-based page window into an ordered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub index: u32,
    pub size: u32,
}

impl PageWindow {
    /// `page` is the 1-based external page number.
    pub fn from_page_number(page: u32, size: u32) -> Self {
        Self {
            index: page.saturating_sub(1),
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        self.index as i64 * self.size as i64
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }

    pub fn page_number(&self) -> u32 {
        self.index.saturating_add(1)
    }

    pub fn total_pages(&self, total: i64) -> u32 {
        if total <= 0 {
            return 0;
        }
        let size = self.size as i64;
        ((total + size - 1) / size).min(u32::MAX as i64) as u32
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            detailed_description: None,
            price: 15_000,
            stock: 1,
            memory_type: Some(MemoryType::Toy),
            original_owner: "Tango".to_string(),
            emotion_level: Some(6),
            rarity_score: None,
            magical_power: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, id as u32, 0, 0, 0).unwrap(),
        }
    }

    fn rendered(filter: &ProductFilter) -> String {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM products");
        filter.push_where(&mut query);
        query.sql().to_string()
    }

    #[test]
    fn match_all_renders_no_where_clause() {
        assert_eq!(rendered(&ProductFilter::match_all()), "SELECT * FROM products");
    }

    #[test]
    fn clauses_render_as_bound_conjunction() {
        let filter = ProductFilter::match_all()
            .and(Clause::NameContains("bear".to_string()))
            .and(Clause::CategoryEquals(MemoryType::Toy))
            .and(Clause::PriceWithin {
                min: 10_000,
                max: Some(50_000),
            })
            .and(Clause::IdNot(3));

        assert_eq!(
            rendered(&filter),
            "SELECT * FROM products WHERE name ILIKE $1 AND memory_type = $2 \
             AND price >= $3 AND price <= $4 AND id <> $5"
        );
    }

    #[test]
    fn open_ended_price_range_has_no_upper_bound() {
        let filter = ProductFilter::match_all().and(Clause::PriceWithin {
            min: 100_000,
            max: None,
        });
        assert_eq!(rendered(&filter), "SELECT * FROM products WHERE price >= $1");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn name_match_is_case_insensitive_and_literal() {
        let teddy = product(1, "Old Teddy Bear");
        assert!(Clause::NameContains("teddy".to_string()).matches(&teddy));
        assert!(Clause::NameContains("BEAR".to_string()).matches(&teddy));
        assert!(!Clause::NameContains("t%y".to_string()).matches(&teddy));
    }

    #[test]
    fn emotion_clause_skips_rows_without_level() {
        let mut item = product(1, "Kite");
        assert!(Clause::EmotionAtLeast(6).matches(&item));
        assert!(!Clause::EmotionAtLeast(7).matches(&item));
        item.emotion_level = None;
        assert!(!Clause::EmotionAtLeast(1).matches(&item));
    }

    #[test]
    fn rarity_order_puts_missing_scores_last() {
        let mut a = product(1, "a");
        let mut b = product(2, "b");
        let c = product(3, "c");
        a.rarity_score = Some(2);
        b.rarity_score = Some(9);

        let mut items = vec![c.clone(), a.clone(), b.clone()];
        items.sort_by(|x, y| ProductOrder::RarityDescending.compare(x, y));
        let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn newest_first_breaks_ties_by_id() {
        let a = product(1, "a");
        let mut b = product(2, "b");
        b.created_at = a.created_at;
        assert_eq!(ProductOrder::NewestFirst.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn page_window_math() {
        let window = PageWindow::from_page_number(3, 12);
        assert_eq!(window.index, 2);
        assert_eq!(window.offset(), 24);
        assert_eq!(window.page_number(), 3);
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(12), 1);
        assert_eq!(window.total_pages(13), 2);
        assert_eq!(PageWindow::from_page_number(0, 12).index, 0);
    }

    #[test]
    fn price_clause_includes_its_upper_edge() {
        let mut item = product(1, "Edge");
        item.price = 10_000;
        let under_10k = Clause::PriceWithin {
            min: 0,
            max: Some(10_000),
        };
        assert!(under_10k.matches(&item));

        item.price = 10_001;
        assert!(!under_10k.matches(&item));
    }
}
