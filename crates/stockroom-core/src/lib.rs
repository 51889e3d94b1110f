//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the heart of the inventory model. It contains the
//! entity types, money handling, form parsing and validation rules as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Stockroom Data Flow                       │
//! │                                                             │
//! │  UI layer (external collaborator)                           │
//! │    form input ──► PartForm / ProductForm                    │
//! │       │                                                     │
//! │  ┌────▼────────────────────────────────────────────────┐    │
//! │  │            ★ stockroom-core (THIS CRATE) ★          │    │
//! │  │                                                     │    │
//! │  │  ┌────────┐ ┌───────┐ ┌──────┐ ┌────────────┐       │    │
//! │  │  │ types  │ │ money │ │ form │ │ validation │       │    │
//! │  │  │ Part   │ │ Money │ │ DTOs │ │   rules    │       │    │
//! │  │  │ Product│ │ cents │ │      │ │            │       │    │
//! │  │  └────────┘ └───────┘ └──────┘ └────────────┘       │    │
//! │  │                                                     │    │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS │    │
//! │  └────┬────────────────────────────────────────────────┘    │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  stockroom-store: the Inventory repository                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Part, PartSource, Product)
//! - [`money`] - Money type with integer arithmetic (no floating point)
//! - [`form`] - Raw form DTOs and the string→sentinel conversion
//! - [`validation`] - Save-rule validation
//! - [`error`] - Validation error type

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::{Part, PartSource, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================
// Optional numeric fields keep sentinel values instead of Option so that
// "left blank" and "supplied but unparsable" remain distinguishable from
// the form layer all the way into validation.

/// Sentinel price meaning "no price was supplied".
pub const UNSET_PRICE: Money = Money::from_cents(-1);

/// Sentinel for a min/max stock bound that was left blank.
pub const UNSET_BOUND: i32 = -1;

/// Marker for a min/max bound that was supplied but did not parse as a
/// non-negative integer. Reported by validation, never stored past a
/// rejected save.
pub const INVALID_BOUND: i32 = -2;

/// Sentinel for a machine id that was left blank.
pub const UNSET_MACHINE_ID: i32 = -1;

/// Marker for a machine id that was supplied but did not parse as a
/// positive integer.
pub const INVALID_MACHINE_ID: i32 = 0;
