//! # stockroom-store: In-Memory Inventory Repository
//!
//! This crate owns the authoritative part and product collections for
//! Stockroom. The UI layer builds candidate entities (via the form DTOs
//! in `stockroom-core`), validates them, and on success hands them to
//! the [`Inventory`] here; every list, search and lookup the UI displays
//! comes back out of the same instance.
//!
//! ## Module Organization
//!
//! - [`inventory`] - The `Inventory` repository: CRUD, ID assignment,
//!   cross-entity queries
//! - [`search`] - Search-box query classification and dispatch
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_core::form::PartForm;
//! use stockroom_core::validation::validate_part;
//! use stockroom_store::Inventory;
//!
//! let mut inventory = Inventory::new();
//!
//! // The UI fills a form; parsing never fails, validation decides.
//! let form = PartForm {
//!     name: "Hex bolt".to_string(),
//!     in_stock: "12".to_string(),
//!     price: "2.50".to_string(),
//!     ..PartForm::default()
//! };
//! let part = form.parse();
//! assert!(validate_part(&part).is_empty());
//!
//! let id = inventory.add_part(part);
//! assert_eq!(inventory.search_parts("hex").len(), 1);
//! assert_eq!(inventory.search_parts(&id.to_string()).len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod inventory;
pub mod search;

// =============================================================================
// Re-exports
// =============================================================================

pub use inventory::Inventory;
pub use search::Query;
