use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    models::ProductResponse,
};

pub const FIRST_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Raw query-string parameters of `GET /api/products`, exactly as sent.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "priceRange")]
    pub price_range: Option<String>,
    pub owner: Option<String>,
    #[serde(alias = "emotionLevelMin")]
    pub emotion_level_min: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    EmotionHigh,
    RarityHigh,
}

impl SortKey {
    /// Unknown keys fall back to newest-first.
    pub fn from_param(value: &str) -> Self {
        match value {
            "oldest" => SortKey::Oldest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "emotion-high" => SortKey::EmotionHigh,
            "rarity-high" => SortKey::RarityHigh,
            _ => SortKey::Newest,
        }
    }
}

/// A normalized search request. Optional text fields are either `None` or
/// non-empty trimmed strings; `page` is 1-based and `size` is within
/// `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub page: u32,
    pub size: u32,
    pub sort: SortKey,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub owner: Option<String>,
    pub emotion_level_min: Option<i32>,
    pub search: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: SortKey::Newest,
            category: None,
            price_range: None,
            owner: None,
            emotion_level_min: None,
            search: None,
        }
    }
}

impl TryFrom<ProductSearchParams> for SearchRequest {
    type Error = AppError;

    fn try_from(params: ProductSearchParams) -> Result<Self> {
        normalize_search(params)
    }
}

/// Applies the request-boundary rules once: blank strings become absent,
/// page numbers below the first page snap to it, page size is clamped.
pub fn normalize_search(params: ProductSearchParams) -> Result<SearchRequest> {
    let page = match parse_number::<i64>("page", params.page)? {
        Some(page) if page >= FIRST_PAGE as i64 => page.min(u32::MAX as i64) as u32,
        _ => FIRST_PAGE,
    };

    let size = match parse_number::<i64>("size", params.size)? {
        Some(size) => size.clamp(1, MAX_PAGE_SIZE as i64) as u32,
        None => DEFAULT_PAGE_SIZE,
    };

    Ok(SearchRequest {
        page,
        size,
        sort: non_blank(params.sort)
            .map(|s| SortKey::from_param(&s))
            .unwrap_or_default(),
        category: non_blank(params.category),
        price_range: non_blank(params.price_range),
        owner: non_blank(params.owner),
        emotion_level_min: parse_number("emotion_level_min", params.emotion_level_min)?,
        search: non_blank(params.search),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(field: &str, value: Option<String>) -> Result<Option<T>> {
    non_blank(value)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| AppError::BadRequest(format!("{} must be a number", field)))
        })
        .transpose()
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total_count: i64,
    /// 1-based.
    pub current_page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ProductSearchParams {
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        from_query(&query)
    }

    fn from_query(query: &str) -> ProductSearchParams {
        let uri: http::Uri = format!("http://localhost/api/products?{}", query)
            .parse()
            .unwrap();
        axum::extract::Query::<ProductSearchParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn empty_request_uses_defaults() {
        let request = normalize_search(ProductSearchParams::default()).unwrap();
        assert_eq!(request, SearchRequest::default());
    }

    #[test]
    fn blank_strings_are_absent() {
        let request = normalize_search(params(&[
            ("category", ""),
            ("priceRange", "%20%20"),
            ("owner", ""),
            ("search", "%20"),
            ("emotionLevelMin", ""),
            ("sort", ""),
        ]))
        .unwrap();

        assert_eq!(request, SearchRequest::default());
    }

    #[test]
    fn values_are_trimmed() {
        let request = normalize_search(params(&[
            ("search", "%20teddy%20"),
            ("owner", "Waffle%20Bear"),
            ("price_range", "under-10k"),
        ]))
        .unwrap();

        assert_eq!(request.search.as_deref(), Some("teddy"));
        assert_eq!(request.owner.as_deref(), Some("Waffle Bear"));
        assert_eq!(request.price_range.as_deref(), Some("under-10k"));
    }

    #[test]
    fn first_page_and_below_snap_to_one() {
        for raw in ["1", "0", "-3"] {
            let request = normalize_search(params(&[("page", raw)])).unwrap();
            assert_eq!(request.page, FIRST_PAGE, "page={}", raw);
        }

        let request = normalize_search(params(&[("page", "7")])).unwrap();
        assert_eq!(request.page, 7);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(normalize_search(params(&[("size", "0")])).unwrap().size, 1);
        assert_eq!(normalize_search(params(&[("size", "5000")])).unwrap().size, MAX_PAGE_SIZE);
        assert_eq!(normalize_search(params(&[("size", "24")])).unwrap().size, 24);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = normalize_search(params(&[("page", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = normalize_search(params(&[("emotion_level_min", "high")])).unwrap_err();
        assert!(err.to_string().contains("emotion_level_min"));
    }

    #[test]
    fn unknown_sort_falls_back_to_newest() {
        assert_eq!(SortKey::from_param("popular"), SortKey::Newest);
        assert_eq!(SortKey::from_param("rarity-high"), SortKey::RarityHigh);
    }
}
