//! # Inventory Repository
//!
//! The single source of truth for parts and products.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Inventory Operations                       │
//! │                                                             │
//! │  UI Action              Repository Call     State Change    │
//! │  ─────────              ───────────────     ────────────    │
//! │  Save new part ───────► add_part() ───────► id assigned,    │
//! │                                             appended        │
//! │  Save modified part ──► update_part() ────► slot replaced   │
//! │                                             in place        │
//! │  Delete part ─────────► products_containing_part() first;   │
//! │                         delete_part() only when empty       │
//! │  Table rendering ─────► parts() / products() (read only)    │
//! │                                                             │
//! │  Every list/search/lookup the UI displays comes from here.  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! The repository never errors: a lookup that finds nothing is `None`,
//! a delete/update that finds nothing is `false` and a no-op. Rejecting
//! bad data is validation's job and happens before anything reaches
//! this type.

use tracing::debug;

use stockroom_core::{Part, Product};

/// The in-memory inventory.
///
/// Created empty at process start, populated only through its own
/// operations, dropped at process exit. The handle is passed explicitly
/// to whatever layer needs it; there is no global instance.
///
/// ## Example
/// ```rust
/// use stockroom_core::{Money, Part};
/// use stockroom_store::Inventory;
///
/// let mut inventory = Inventory::new();
///
/// let mut bolt = Part::outsourced("Acme Fasteners");
/// bolt.name = "Hex bolt".to_string();
/// bolt.price = Money::from_cents(250);
///
/// let id = inventory.add_part(bolt);
/// assert_eq!(inventory.get_part(id).unwrap().name, "Hex bolt");
/// ```
#[derive(Debug, Default)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            parts: Vec::new(),
            products: Vec::new(),
        }
    }

    // =========================================================================
    // Parts
    // =========================================================================

    /// Adds a part, assigning the next ID.
    ///
    /// ## ID Assignment
    /// `max(existing part IDs, 0) + 1` at call time — max-based, not a
    /// monotonic counter, so deleting the highest-numbered part frees
    /// its ID for the next add. Whatever ID the incoming part carried is
    /// overwritten.
    ///
    /// Returns the assigned ID.
    pub fn add_part(&mut self, mut part: Part) -> i32 {
        let part_id = self.parts.iter().map(|p| p.part_id).max().unwrap_or(0) + 1;
        part.part_id = part_id;

        debug!(part_id, name = %part.name, "adding part");
        self.parts.push(part);
        part_id
    }

    /// Removes the part with the given ID.
    ///
    /// Returns whether one was found. Referential integrity is the
    /// caller's policy: consult [`Inventory::products_containing_part`]
    /// first and block the delete when it is non-empty.
    pub fn delete_part(&mut self, part_id: i32) -> bool {
        match self.parts.iter().position(|p| p.part_id == part_id) {
            Some(index) => {
                self.parts.remove(index);
                debug!(part_id, "deleted part");
                true
            }
            None => false,
        }
    }

    /// Looks up a part by ID. Exact-match linear scan.
    pub fn get_part(&self, part_id: i32) -> Option<&Part> {
        self.parts.iter().find(|p| p.part_id == part_id)
    }

    /// Case-insensitive substring match against part names, in
    /// collection order.
    ///
    /// No empty-string special-casing here: the search layer decides
    /// that a blank query means "show all" before this is called.
    pub fn find_parts(&self, query: &str) -> Vec<&Part> {
        let query = query.to_uppercase();
        self.parts
            .iter()
            .filter(|p| p.name.to_uppercase().contains(&query))
            .collect()
    }

    /// Replaces the part with the given ID, preserving its slot.
    ///
    /// The replacement takes over the looked-up ID regardless of what it
    /// carried. Returns false (no-op) when the ID is absent.
    pub fn update_part(&mut self, part_id: i32, mut part: Part) -> bool {
        match self.parts.iter().position(|p| p.part_id == part_id) {
            Some(index) => {
                part.part_id = part_id;
                debug!(part_id, name = %part.name, "updating part");
                self.parts[index] = part;
                true
            }
            None => false,
        }
    }

    /// Save dispatch for the form flow: an unassigned ID (0) adds, an
    /// assigned ID updates in place. Returns the part's ID either way.
    pub fn save_part(&mut self, part: Part) -> i32 {
        if part.part_id == 0 {
            self.add_part(part)
        } else {
            let part_id = part.part_id;
            self.update_part(part_id, part);
            part_id
        }
    }

    /// All parts, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product, assigning `max(existing product IDs, 0) + 1`.
    /// Mirrors [`Inventory::add_part`].
    pub fn add_product(&mut self, mut product: Product) -> i32 {
        let product_id = self
            .products
            .iter()
            .map(|p| p.product_id)
            .max()
            .unwrap_or(0)
            + 1;
        product.product_id = product_id;

        debug!(product_id, name = %product.name, "adding product");
        self.products.push(product);
        product_id
    }

    /// Removes the product with the given ID. Returns whether one was
    /// found.
    pub fn delete_product(&mut self, product_id: i32) -> bool {
        match self.products.iter().position(|p| p.product_id == product_id) {
            Some(index) => {
                self.products.remove(index);
                debug!(product_id, "deleted product");
                true
            }
            None => false,
        }
    }

    /// Looks up a product by ID. Exact-match linear scan.
    pub fn get_product(&self, product_id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    /// Case-insensitive substring match against product names, in
    /// collection order.
    pub fn find_products(&self, query: &str) -> Vec<&Product> {
        let query = query.to_uppercase();
        self.products
            .iter()
            .filter(|p| p.name.to_uppercase().contains(&query))
            .collect()
    }

    /// Replaces the product with the given ID, preserving its slot.
    /// Mirrors [`Inventory::update_part`].
    pub fn update_product(&mut self, product_id: i32, mut product: Product) -> bool {
        match self.products.iter().position(|p| p.product_id == product_id) {
            Some(index) => {
                product.product_id = product_id;
                debug!(product_id, name = %product.name, "updating product");
                self.products[index] = product;
                true
            }
            None => false,
        }
    }

    /// Save dispatch for the form flow. Mirrors [`Inventory::save_part`].
    pub fn save_product(&mut self, product: Product) -> i32 {
        if product.product_id == 0 {
            self.add_product(product)
        } else {
            let product_id = product.product_id;
            self.update_product(product_id, product);
            product_id
        }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    // =========================================================================
    // Cross-Entity Queries
    // =========================================================================

    /// Every product whose association list contains `part_id`.
    ///
    /// Used to block part deletion: a part referenced here must not be
    /// deleted, even though [`Inventory::delete_part`] itself would
    /// succeed.
    pub fn products_containing_part(&self, part_id: i32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.has_associated_part(part_id))
            .collect()
    }

    /// Resolves a product's associated part IDs against the current
    /// part collection, in association order.
    ///
    /// Resolution is by ID, so an earlier `update_part` is always
    /// visible here. IDs that no longer resolve are skipped; with the
    /// deletion-block policy observed they cannot occur.
    pub fn associated_parts(&self, product: &Product) -> Vec<&Part> {
        product
            .associated_part_ids()
            .iter()
            .filter_map(|part_id| self.get_part(*part_id))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
