mod admin;
mod category;
mod owner;
mod price_range;
mod product;
mod recommendation;
mod search;
mod user;

pub use admin::*;
pub use category::*;
pub use owner::*;
pub use price_range::*;
pub use product::*;
pub use recommendation::*;
pub use search::*;
pub use user::*;
