//! Keyword store and keyword lookup helpers.

mod builtin;
mod search;
mod store;

pub use builtin::builtin_keywords;
pub use search::{find_keyword, search_keywords};
pub use store::{KeywordEntry, KeywordStore};
