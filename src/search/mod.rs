//! Query-time filtering and ordering of a loaded snapshot.
//!
//! [`search`] keeps the entries whose name contains the query as an in-order subsequence;
//! [`order`] then sorts them by name or recency. Matching gives no score differentiation,
//! so the final order comes entirely from the [`RankKey`].

pub mod matcher;
pub mod ranker;

pub use matcher::{NameMatcher, search};
pub use ranker::{RankKey, order};
