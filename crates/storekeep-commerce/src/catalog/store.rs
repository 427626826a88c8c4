//! Capacity-bounded product catalog with write-through persistence.

use crate::catalog::persistence::CatalogCodec;
use crate::catalog::{CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashSet;
use std::io::Write;
use tracing::{debug, info, warn};

/// Maximum number of products the catalog can hold.
pub const MAX_PRODUCTS: usize = 50;

/// Message written by [`CatalogStore::print_sorted`] for an empty catalog.
pub const EMPTY_CATALOG_MESSAGE: &str = "No products added";

/// Confirmation port used before destructive operations.
///
/// Any `FnMut(&str) -> bool` closure is a valid implementation.
pub trait Confirm {
    /// Ask the user to confirm; `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Receives catalog change notifications, e.g. to mirror rows in a display.
pub trait CatalogObserver {
    fn on_product_added(&mut self, _product: &Product) {}

    fn on_product_removed(&mut self, _product: &Product) {}

    /// Fired after every mutation with the full, insertion-ordered catalog.
    fn on_catalog_changed(&mut self, _products: &[Product]) {}
}

/// The product catalog.
///
/// Owns every product record. Each successful add or delete rewrites the
/// backing store through the codec. Persistence failures after a mutation are
/// logged; the mutation itself stands.
pub struct CatalogStore<C: CatalogCodec> {
    products: Vec<Product>,
    codec: C,
    observer: Option<Box<dyn CatalogObserver>>,
    resync_on_print: bool,
}

impl<C: CatalogCodec> CatalogStore<C> {
    /// Open a catalog, loading whatever the codec holds.
    ///
    /// A failed load is not fatal: the catalog starts empty and an empty
    /// collection is written back so the backing file exists.
    pub fn open(codec: C) -> Self {
        let mut store = Self::empty(codec);
        match store.codec.load() {
            Ok(products) => {
                store.products = sanitize_loaded(products);
                info!(
                    location = %store.codec.location(),
                    count = store.products.len(),
                    "products loaded"
                );
            }
            Err(e) => {
                warn!(location = %store.codec.location(), error = %e, "could not load products, starting empty");
                store.persist();
            }
        }
        store
    }

    /// A catalog with no products that has not touched the codec.
    pub fn empty(codec: C) -> Self {
        Self {
            products: Vec::new(),
            codec,
            observer: None,
            resync_on_print: true,
        }
    }

    /// Attach a change observer.
    pub fn with_observer(mut self, observer: impl CatalogObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Whether a non-empty [`print_sorted`](Self::print_sorted) also rewrites
    /// the backing store. Enabled by default.
    pub fn with_resync_on_print(mut self, enabled: bool) -> Self {
        self.resync_on_print = enabled;
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Add a product.
    ///
    /// Fails with `CatalogFull` at [`MAX_PRODUCTS`], with `DuplicateId` if
    /// the ID is taken, and with `ValidationError` for a record that fails
    /// [`Product::check`]. The catalog is unchanged in every case.
    pub fn add(&mut self, product: Product) -> Result<(), CommerceError> {
        product.check()?;
        if self.products.len() >= MAX_PRODUCTS {
            warn!(id = %product.id, "product list exceeded limit");
            return Err(CommerceError::CatalogFull {
                capacity: MAX_PRODUCTS,
            });
        }
        if self.contains(&product.id) {
            return Err(CommerceError::DuplicateId(product.id.into_inner()));
        }

        self.products.push(product);
        info!(
            "{}/{} item(s) are in the system",
            self.products.len(),
            MAX_PRODUCTS
        );

        if let (Some(observer), Some(added)) = (self.observer.as_mut(), self.products.last()) {
            observer.on_product_added(added);
            observer.on_catalog_changed(&self.products);
        }
        self.persist();
        Ok(())
    }

    /// Delete a product after confirmation.
    ///
    /// Returns the removed record. A declined confirmation yields
    /// `DeletionCancelled`; an unknown ID yields `ProductNotFound`.
    pub fn delete_by_id(
        &mut self,
        id: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<Product, CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

        let candidate = &self.products[index];
        let prompt = format!(
            "Product details to delete:\n{}\nCategory: {}\nIs this the item you wish to delete?",
            candidate,
            candidate.category()
        );
        if !confirm.confirm(&prompt) {
            info!(id, "deletion cancelled");
            return Err(CommerceError::DeletionCancelled(id.to_string()));
        }

        let removed = self.products.remove(index);
        info!(
            id,
            remaining = self.products.len(),
            "product deleted"
        );

        if let Some(observer) = self.observer.as_mut() {
            observer.on_product_removed(&removed);
            observer.on_catalog_changed(&self.products);
        }
        self.persist();
        Ok(removed)
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products matching a category filter, in insertion order.
    pub fn list_by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products ordered by ID (lexical), without touching storage order.
    pub fn sorted_view(&self) -> Vec<&Product> {
        let mut view: Vec<&Product> = self.products.iter().collect();
        view.sort_by(|a, b| a.id.cmp(&b.id));
        view
    }

    /// Write the catalog sorted by ID, each record preceded by its category.
    ///
    /// Writes [`EMPTY_CATALOG_MESSAGE`] and skips persistence for an empty
    /// catalog. Returns the number of records written.
    pub fn print_sorted(&mut self, out: &mut dyn Write) -> Result<usize, CommerceError> {
        if self.products.is_empty() {
            writeln!(out, "{}", EMPTY_CATALOG_MESSAGE)?;
            return Ok(0);
        }

        let view = self.sorted_view();
        for product in &view {
            writeln!(out, "Product type: {}", product.category())?;
            writeln!(out, "{}", product)?;
        }
        let count = view.len();

        if self.resync_on_print {
            self.persist();
        }
        Ok(count)
    }

    /// Look up a product by ID.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.find_by_id(id.as_str()).is_some()
    }

    /// Persist the catalog now, reporting failures to the caller.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        self.codec.save(&self.products)?;
        info!(location = %self.codec.location(), "products saved");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_PRODUCTS.saturating_sub(self.products.len())
    }

    /// Write-through save after a mutation.
    fn persist(&mut self) {
        match self.codec.save(&self.products) {
            Ok(()) => debug!(location = %self.codec.location(), "products saved"),
            Err(e) => warn!(location = %self.codec.location(), error = %e, "error saving products"),
        }
    }
}

/// Drop invalid records, duplicate IDs and anything beyond capacity from a
/// loaded collection.
fn sanitize_loaded(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(products.len().min(MAX_PRODUCTS));
    for product in products {
        if let Err(e) = product.check() {
            warn!(id = %product.id, error = %e, "stored catalog has invalid product, ignoring it");
            continue;
        }
        if kept.len() == MAX_PRODUCTS {
            warn!(id = %product.id, "stored catalog exceeds capacity, ignoring product");
            continue;
        }
        if !seen.insert(product.id.clone()) {
            warn!(id = %product.id, "stored catalog has duplicate ID, ignoring product");
            continue;
        }
        kept.push(product);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persistence::InMemoryCodec;
    use crate::catalog::Category;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shirt(id: &str) -> Product {
        Product::clothing(id, "T-Shirt", 10, Money::new(1999), "M", "Blue")
    }

    fn phone(id: &str) -> Product {
        Product::electronics(id, "Sony 2", 18, Money::new(15000), "Sony", 2)
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl CatalogObserver for Recorder {
        fn on_product_added(&mut self, product: &Product) {
            self.0.borrow_mut().push(format!("added {}", product.id));
        }

        fn on_product_removed(&mut self, product: &Product) {
            self.0.borrow_mut().push(format!("removed {}", product.id));
        }

        fn on_catalog_changed(&mut self, products: &[Product]) {
            self.0.borrow_mut().push(format!("changed {}", products.len()));
        }
    }

    #[test]
    fn test_open_failure_starts_empty_and_writes_file() {
        let store = CatalogStore::open(InMemoryCodec::new());
        assert!(store.is_empty());
        assert_eq!(store.codec().save_count(), 1);
        assert_eq!(store.codec().stored(), Some(&[][..]));
    }

    #[test]
    fn test_open_loads_products() {
        let store = CatalogStore::open(InMemoryCodec::with_products(vec![shirt("C001"), phone("E001")]));
        assert_eq!(store.len(), 2);
        assert_eq!(store.codec().save_count(), 0);
    }

    #[test]
    fn test_open_drops_duplicates_and_overflow() {
        let mut products: Vec<Product> = (0..MAX_PRODUCTS + 5).map(|i| shirt(&format!("s{}", i))).collect();
        products.insert(1, shirt("s0"));
        let store = CatalogStore::open(InMemoryCodec::with_products(products));
        assert_eq!(store.len(), MAX_PRODUCTS);
        assert_eq!(store.list()[1].id.as_str(), "s1");
    }

    #[test]
    fn test_open_drops_invalid_records() {
        let mut negative = shirt("neg");
        negative.price = Money::from_decimal(-3.5);
        let mut unnamed = phone("E002");
        unnamed.name = "  ".to_string();
        let products = vec![negative, shirt("C001"), unnamed, phone("E001")];

        let store = CatalogStore::open(InMemoryCodec::with_products(products));
        let ids: Vec<&str> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "E001"]);
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let recorder = Recorder::default();
        let mut store = CatalogStore::empty(InMemoryCodec::new()).with_observer(recorder.clone());

        store.add(shirt("C001")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.codec().save_count(), 1);
        assert_eq!(*recorder.0.borrow(), vec!["added C001", "changed 1"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        store.add(shirt("C001")).unwrap();
        let err = store.add(phone("C001")).unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateId(id) if id == "C001"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.codec().save_count(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_record() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        let mut free = shirt("C001");
        free.price = Money::zero();
        assert!(matches!(store.add(free), Err(CommerceError::ValidationError(_))));
        assert!(store.is_empty());
        assert_eq!(store.codec().save_count(), 0);
    }

    #[test]
    fn test_capacity_limit() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        for i in 0..MAX_PRODUCTS {
            store.add(shirt(&format!("C{:03}", i))).unwrap();
        }
        assert_eq!(store.remaining_capacity(), 0);

        let err = store.add(shirt("C999")).unwrap_err();
        assert!(matches!(err, CommerceError::CatalogFull { capacity: 50 }));
        assert_eq!(store.len(), MAX_PRODUCTS);
    }

    #[test]
    fn test_delete_confirmed() {
        let recorder = Recorder::default();
        let mut store = CatalogStore::empty(InMemoryCodec::new()).with_observer(recorder.clone());
        store.add(shirt("C001")).unwrap();
        store.add(phone("E001")).unwrap();

        let mut prompts = Vec::new();
        let removed = store
            .delete_by_id("C001", &mut |prompt: &str| {
                prompts.push(prompt.to_string());
                true
            })
            .unwrap();

        assert_eq!(removed.id.as_str(), "C001");
        assert_eq!(store.len(), 1);
        assert_eq!(store.codec().save_count(), 3);
        assert!(prompts[0].contains("Category: Clothing"));
        assert!(recorder.0.borrow().contains(&"removed C001".to_string()));
    }

    #[test]
    fn test_delete_declined() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        store.add(shirt("C001")).unwrap();

        let err = store.delete_by_id("C001", &mut |_: &str| false).unwrap_err();
        assert!(matches!(err, CommerceError::DeletionCancelled(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.codec().save_count(), 1);
    }

    #[test]
    fn test_delete_unknown_never_prompts() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        let mut asked = false;
        let err = store
            .delete_by_id("nope", &mut |_: &str| {
                asked = true;
                true
            })
            .unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
        assert!(!asked);
    }

    #[test]
    fn test_print_sorted() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        store.add(shirt("top6")).unwrap();
        store.add(phone("PC1")).unwrap();
        store.add(shirt("dress4")).unwrap();
        let saves_before = store.codec().save_count();

        let mut out = Vec::new();
        let count = store.print_sorted(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Product type: Electronics");
        assert!(lines[1].contains("productID='PC1'"));
        assert!(lines[3].contains("productID='dress4'"));
        assert!(lines[5].contains("productID='top6'"));
        // Insertion order is untouched.
        assert_eq!(store.list()[0].id.as_str(), "top6");
        assert_eq!(store.codec().save_count(), saves_before + 1);
    }

    #[test]
    fn test_print_sorted_without_resync() {
        let mut store = CatalogStore::empty(InMemoryCodec::new()).with_resync_on_print(false);
        store.add(shirt("C001")).unwrap();
        store.print_sorted(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(store.codec().save_count(), 1);
    }

    #[test]
    fn test_print_empty() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        let mut out = Vec::new();
        assert_eq!(store.print_sorted(&mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().trim(), EMPTY_CATALOG_MESSAGE);
        assert_eq!(store.codec().save_count(), 0);
    }

    #[test]
    fn test_list_by_category() {
        let mut store = CatalogStore::empty(InMemoryCodec::new());
        store.add(shirt("C001")).unwrap();
        store.add(phone("E001")).unwrap();
        store.add(shirt("C002")).unwrap();

        let clothing = store.list_by_category(CategoryFilter::Only(Category::Clothing));
        let ids: Vec<&str> = clothing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["C001", "C002"]);
        assert_eq!(store.list_by_category(CategoryFilter::All).len(), 3);
    }

    #[test]
    fn test_failed_save_keeps_mutation() {
        let mut store = CatalogStore::empty(InMemoryCodec::new().failing_saves());
        store.add(shirt("C001")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.save().is_err());
        assert_eq!(store.len(), 1);
    }
}
