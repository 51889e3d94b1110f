//! # Search Dispatch
//!
//! Classifies a raw search-box string and routes it to the right
//! repository lookup.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  User types into the search field                           │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  Query::parse                                               │
//! │  ├── blank          → All    → whole collection             │
//! │  ├── parses as i32  → ById   → exact lookup, 0 or 1 hits    │
//! │  └── anything else  → ByName → case-insensitive substring   │
//! │                                match on names               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numeric probe is an explicit parse attempt with the name search
//! as the designated fallback; an ID query that misses returns no rows
//! rather than falling through to a name match.

use stockroom_core::{Part, Product};

use crate::inventory::Inventory;

/// A classified search-box query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Blank input: no filter, show the whole collection.
    All,
    /// Numeric input: exact ID lookup.
    ById(i32),
    /// Anything else: substring match on names.
    ByName(String),
}

impl Query {
    /// Classifies raw search input.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_store::Query;
    ///
    /// assert_eq!(Query::parse(""), Query::All);
    /// assert_eq!(Query::parse("42"), Query::ById(42));
    /// assert_eq!(Query::parse("bolt"), Query::ByName("bolt".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Query {
        let raw = raw.trim();
        if raw.is_empty() {
            return Query::All;
        }
        match raw.parse::<i32>() {
            Ok(id) => Query::ById(id),
            Err(_) => Query::ByName(raw.to_string()),
        }
    }
}

impl Inventory {
    /// Runs a raw search-box query against the part collection.
    pub fn search_parts(&self, raw: &str) -> Vec<&Part> {
        match Query::parse(raw) {
            Query::All => self.parts().iter().collect(),
            Query::ById(id) => self.get_part(id).into_iter().collect(),
            Query::ByName(name) => self.find_parts(&name),
        }
    }

    /// Runs a raw search-box query against the product collection.
    pub fn search_products(&self, raw: &str) -> Vec<&Product> {
        match Query::parse(raw) {
            Query::All => self.products().iter().collect(),
            Query::ById(id) => self.get_product(id).into_iter().collect(),
            Query::ByName(name) => self.find_products(&name),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
