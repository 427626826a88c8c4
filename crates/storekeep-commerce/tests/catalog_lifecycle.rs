//! File-backed catalog lifecycle tests.

use std::fs;

use storekeep_commerce::catalog::EMPTY_CATALOG_MESSAGE;
use storekeep_commerce::prelude::*;

fn sample_products() -> Vec<Product> {
    vec![
        Product::electronics("watch1", "Samsung Watch 3", 25, Money::from_decimal(275.0), "Samsung", 2),
        Product::clothing("skirt1", "Yellow Dress", 20, Money::from_decimal(39.99), "M", "Yellow"),
        Product::electronics("watch2", "Apple Watch 1", 21, Money::from_decimal(499.99), "Apple", 1),
        Product::clothing("pant4", "Frill Blue Pant", 2, Money::from_decimal(42.0), "S", "Blue"),
    ]
}

#[test]
fn products_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");

    {
        let mut store = CatalogStore::open(JsonFileCodec::new(&path));
        for product in sample_products() {
            store.add(product).unwrap();
        }
    }

    let reopened = CatalogStore::open(JsonFileCodec::new(&path));
    assert_eq!(reopened.list(), sample_products().as_slice());
}

#[test]
fn delete_is_written_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");

    let mut store = CatalogStore::open(JsonFileCodec::new(&path));
    for product in sample_products() {
        store.add(product).unwrap();
    }
    let removed = store.delete_by_id("skirt1", &mut |_: &str| true).unwrap();
    assert_eq!(removed.name, "Yellow Dress");

    let reopened = CatalogStore::open(JsonFileCodec::new(&path));
    assert_eq!(reopened.len(), 3);
    assert!(reopened.find_by_id("skirt1").is_none());
}

#[test]
fn declined_delete_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");

    let mut store = CatalogStore::open(JsonFileCodec::new(&path));
    store.add(sample_products().remove(0)).unwrap();
    let before = fs::read(&path).unwrap();

    let result = store.delete_by_id("watch1", &mut |_: &str| false);
    assert!(matches!(result, Err(CommerceError::DeletionCancelled(_))));
    assert_eq!(store.len(), 1);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn missing_file_starts_empty_and_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");

    let store = CatalogStore::open(JsonFileCodec::new(&path));
    assert!(store.is_empty());
    assert!(path.exists());
    assert!(JsonFileCodec::new(&path).load().unwrap().is_empty());
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");
    fs::write(&path, b"not a catalog").unwrap();

    let store = CatalogStore::open(JsonFileCodec::new(&path));
    assert!(store.is_empty());
}

#[test]
fn save_to_alternate_file() {
    let dir = tempfile::tempdir().unwrap();
    let main = dir.path().join("Product_Data.txt");
    let alternate = dir.path().join("TestProductData.txt");

    let mut store = CatalogStore::open(JsonFileCodec::new(&main));
    for product in sample_products() {
        store.add(product).unwrap();
    }

    let mut codec = JsonFileCodec::new(&alternate);
    codec.save(store.list()).unwrap();
    assert_eq!(codec.load().unwrap(), store.list());
}

#[test]
fn fifty_first_add_is_rejected() {
    let mut store = CatalogStore::open(InMemoryCodec::new());
    for i in 0..MAX_PRODUCTS {
        let product = if i % 2 == 0 {
            Product::clothing(format!("c{:02}", i), "Shirt", 1, Money::new(100), "L", "Red")
        } else {
            Product::electronics(format!("e{:02}", i), "Cable", 1, Money::new(100), "Acme", 1)
        };
        store.add(product).unwrap();
        assert_eq!(store.len(), i + 1);
    }

    let overflow = Product::clothing("extra", "Shirt", 1, Money::new(100), "L", "Red");
    assert!(matches!(
        store.add(overflow),
        Err(CommerceError::CatalogFull { .. })
    ));
    assert_eq!(store.len(), MAX_PRODUCTS);
    assert!(store.find_by_id("extra").is_none());
}

#[test]
fn empty_print_writes_nothing_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Product_Data.txt");
    let mut store = CatalogStore::open(JsonFileCodec::new(&path));
    fs::remove_file(&path).unwrap();

    let mut out = Vec::<u8>::new();
    store.print_sorted(&mut out).unwrap();

    assert!(String::from_utf8(out).unwrap().contains(EMPTY_CATALOG_MESSAGE));
    assert!(!path.exists());
}

#[test]
fn print_lists_category_before_each_record() {
    let mut store = CatalogStore::open(InMemoryCodec::with_products(sample_products()));
    let mut out = Vec::<u8>::new();
    store.print_sorted(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Product type: Clothing"));
    assert!(text.contains("Frill Blue Pant"));
    let pant = text.find("pant4").unwrap();
    let watch = text.find("watch1").unwrap();
    assert!(pant < watch);
}
