//! Core catalog types.
//!
//! These types validate at construction time, so a value that exists is
//! always usable to build or interpret API URLs.

mod api_url;
mod resource_kind;
mod resource_url;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use resource_kind::ResourceKind;
pub use resource_url::ResourceUrl;
