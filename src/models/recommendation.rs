use serde::Deserialize;

pub const MAX_RECOMMENDATIONS: i64 = 50;

/// `?limit=` (or `?size=`) on the related and recommendation endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(alias = "size")]
    pub limit: Option<i64>,
}

impl LimitQuery {
    /// The requested count, or `default`, capped to `0..=MAX_RECOMMENDATIONS`.
    pub fn resolve(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(0, MAX_RECOMMENDATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_and_clamps() {
        assert_eq!(LimitQuery::default().resolve(4), 4);
        assert_eq!(LimitQuery { limit: Some(-2) }.resolve(4), 0);
        assert_eq!(LimitQuery { limit: Some(500) }.resolve(4), MAX_RECOMMENDATIONS);
        assert_eq!(LimitQuery { limit: Some(2) }.resolve(4), 2);
    }
}
