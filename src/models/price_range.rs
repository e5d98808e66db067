use std::{collections::HashMap, sync::LazyLock};

/// Named price buckets used by the search filter. Both bounds are
/// inclusive, so adjacent buckets share their edge price; open-ended
/// buckets have no `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRange {
    All,
    Under10k,
    From10kTo50k,
    From50kTo100k,
    Over100k,
}

// Both slugs and display labels resolve; they never collide.
static BY_LABEL: LazyLock<HashMap<&'static str, PriceRange>> = LazyLock::new(|| {
    PriceRange::ALL
        .iter()
        .flat_map(|r| [(r.slug(), *r), (r.display_name(), *r)])
        .collect()
});

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under10k,
        PriceRange::From10kTo50k,
        PriceRange::From50kTo100k,
        PriceRange::Over100k,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under10k => "under-10k",
            PriceRange::From10kTo50k => "10k-50k",
            PriceRange::From50kTo100k => "50k-100k",
            PriceRange::Over100k => "over-100k",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PriceRange::All => "All",
            PriceRange::Under10k => "Under 10,000",
            PriceRange::From10kTo50k => "10,000 - 50,000",
            PriceRange::From50kTo100k => "50,000 - 100,000",
            PriceRange::Over100k => "100,000 and over",
        }
    }

    pub fn bounds(self) -> (i32, Option<i32>) {
        match self {
            PriceRange::All => (0, None),
            PriceRange::Under10k => (0, Some(10_000)),
            PriceRange::From10kTo50k => (10_000, Some(50_000)),
            PriceRange::From50kTo100k => (50_000, Some(100_000)),
            PriceRange::Over100k => (100_000, None),
        }
    }

    pub fn contains(self, price: i32) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }

    /// Resolves a request label (slug or display name) to a bucket.
    pub fn from_label(label: &str) -> Option<Self> {
        BY_LABEL.get(label).copied()
    }
}
