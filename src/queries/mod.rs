mod product_filter;

pub mod products_queries;
pub mod user_queries;

pub use product_filter::{Clause, PageWindow, ProductFilter, ProductOrder};
pub(crate) use product_filter::like_pattern;
