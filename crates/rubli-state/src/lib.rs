//! # rubli-state
//!
//! Client-side state that decides which request is issued and how its result
//! is shown: page filters, pagination, sort, the per-key query cache, and the
//! review/mutation workflows that invalidate it.
//!
//! Mutations never patch cached data. A successful write invalidates every
//! cache key in the affected collection and the next read refetches.

pub mod error;
pub mod filters;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod review;
pub mod sort;

pub use error::ReviewError;
pub use filters::PageState;
pub use mutation::{Mutations, invalidate_on_success};
pub use pagination::Pagination;
pub use query::{Collection, QueryCache, QueryKey, QuerySnapshot, QueryStatus};
pub use review::{ReviewDraft, review_case, review_hypothesis};
pub use sort::SortState;
