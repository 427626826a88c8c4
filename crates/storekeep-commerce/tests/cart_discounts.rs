//! Cart and discount behaviour through a shopping session.

use storekeep_commerce::prelude::*;

fn electronics(id: &str, name: &str, pounds: f64) -> Product {
    Product::electronics(id, name, 10, Money::from_decimal(pounds), "Acme", 12)
}

fn clothing(id: &str, name: &str, pounds: f64) -> Product {
    Product::clothing(id, name, 10, Money::from_decimal(pounds), "M", "Black")
}

#[test]
fn three_electronics_lines_get_category_discount() {
    let mut session = ShoppingSession::new("returning", false);
    let mut pricing = None;
    for (id, name) in [("e1", "Watch"), ("e2", "Phone"), ("e3", "Laptop")] {
        pricing = Some(
            session
                .add_product(&electronics(id, name, 100.0), &mut NoopCartObserver)
                .unwrap(),
        );
    }
    let pricing = pricing.unwrap();

    assert_eq!(pricing.total, Money::from_decimal(300.0));
    assert_eq!(pricing.category_discount, Money::from_decimal(60.0));
    assert_eq!(pricing.first_purchase_discount, Money::zero());
    assert_eq!(pricing.final_price, Money::from_decimal(240.0));
}

#[test]
fn first_purchase_with_two_clothing_lines() {
    let mut session = ShoppingSession::new("newcomer", true);
    session
        .add_product(&clothing("c1", "Dress", 50.0), &mut NoopCartObserver)
        .unwrap();
    let pricing = session
        .add_product(&clothing("c2", "Skirt", 50.0), &mut NoopCartObserver)
        .unwrap();

    assert_eq!(pricing.total, Money::from_decimal(100.0));
    assert_eq!(pricing.first_purchase_discount, Money::from_decimal(10.0));
    assert_eq!(pricing.category_discount, Money::zero());
    assert_eq!(pricing.final_price, Money::from_decimal(90.0));
}

#[test]
fn repeated_product_is_one_line() {
    let mut cart = Cart::new();
    cart.add_line("Long Pink Shirt", Money::from_decimal(25.0), Category::Clothing)
        .unwrap();
    cart.add_line("Long Pink Shirt", Money::from_decimal(25.0), Category::Clothing)
        .unwrap();

    assert_eq!(cart.line_count(), 1);
    let line = &cart.lines()[0];
    assert_eq!(line.quantity, 2);
    assert_eq!(line.accumulated_price, Money::from_decimal(50.0));
}

#[test]
fn three_units_of_one_product_do_not_qualify() {
    let mut session = ShoppingSession::new("returning", false);
    let watch = electronics("e1", "Watch", 100.0);
    for _ in 0..3 {
        session.add_product(&watch, &mut NoopCartObserver).unwrap();
    }
    let pricing = session.pricing();

    assert_eq!(pricing.state.counts.electronics_lines, 1);
    assert!(!pricing.state.category_discount_eligible);
    assert_eq!(pricing.final_price, Money::from_decimal(300.0));
}

#[test]
fn breakdown_reflects_both_discounts() {
    let mut session = ShoppingSession::new("newcomer", true);
    for (id, name) in [("c1", "A"), ("c2", "B"), ("c3", "C")] {
        session
            .add_product(&clothing(id, name, 10.0), &mut NoopCartObserver)
            .unwrap();
    }

    let text = session.pricing().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Total: \u{00a3}30.00");
    assert_eq!(lines[1], "First Purchase Discount: \u{00a3}3.00");
    assert_eq!(lines[2], "Three items in the same Category Discount: \u{00a3}6.00");
    assert_eq!(lines[3], "Final Price: \u{00a3}21.00");
}

#[test]
fn ledger_drives_first_purchase_flag() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = UsernameLedger::open(dir.path().join("existing_usernames.txt")).unwrap();

    let mut first = ShoppingSession::start("dana", &mut ledger).unwrap();
    let pricing = first
        .add_product(&clothing("c1", "Dress", 20.0), &mut NoopCartObserver)
        .unwrap();
    assert_eq!(pricing.first_purchase_discount, Money::from_decimal(2.0));

    let mut again = ShoppingSession::start("dana", &mut ledger).unwrap();
    let pricing = again
        .add_product(&clothing("c1", "Dress", 20.0), &mut NoopCartObserver)
        .unwrap();
    assert_eq!(pricing.first_purchase_discount, Money::zero());
}

#[test]
fn oversized_prices_never_reach_the_cart_total() {
    let draft = ProductDraft {
        id: "yacht".to_string(),
        name: "Yacht".to_string(),
        quantity_available: 1,
        price: 1e18,
        kind: ProductKind::Electronics {
            brand: "Sunseeker".to_string(),
            warranty_months: 12,
        },
    };
    assert!(matches!(
        draft.validate(),
        Err(CommerceError::ValidationError(_))
    ));

    let mut cart = Cart::new();
    let price = Money::new(i64::MAX - 1);
    cart.add_line("Yacht", price, Category::Electronics).unwrap();
    assert!(cart.add_line("Yacht", price, Category::Electronics).is_err());
    assert_eq!(cart.total(), price);
}
