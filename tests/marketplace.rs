//! End-to-end marketplace scenario across the session container.
//!
//! A vendor stocks up for the week: fills a cart, reviews a supplier after
//! an order arrives, and runs a group buy with two other vendors. Exercises
//! the wiring between the stores, identity and storage rather than any one
//! store's edge cases (those live beside the stores).

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use testresult::TestResult;

use mandi::prelude::*;

fn vendor(uid: &str, name: &str) -> Arc<FixedIdentity> {
    Arc::new(FixedIdentity::new(
        User {
            uid: uid.to_string(),
            email: Some(format!("{uid}@example.com")),
            display_name: Some(name.to_string()),
        },
        UserProfile {
            name: name.to_string(),
            email: format!("{uid}@example.com"),
            phone: "+91 98765 43210".to_string(),
            user_type: UserType::Vendor,
            business_name: None,
            location: Some("Andheri, Mumbai".to_string()),
            verified: true,
            created_at: Timestamp::UNIX_EPOCH,
        },
    ))
}

fn onions(quantity: u32) -> NewCartItem {
    NewCartItem {
        product_id: "onions".to_string(),
        product_name: "Onions".to_string(),
        supplier_id: "fresh-farms".to_string(),
        supplier_name: "Fresh Farms".to_string(),
        price: Decimal::new(2550, 2),
        quantity,
        unit: "kg".to_string(),
        image: "onions.jpg".to_string(),
        min_order: "5 kg".to_string(),
        in_stock: true,
    }
}

#[test]
fn a_week_of_vendor_shopping() -> TestResult {
    let storage = Arc::new(MemoryStore::new());
    let mut session = Session::new(storage, vendor("uid-raj", "Raj Kumar"));

    // Monday: load up the cart from two product pages.
    session.cart.add_to_cart(onions(5));
    session.cart.add_to_cart(onions(5));
    assert_eq!(session.cart.items().len(), 1);
    assert_eq!(session.cart.total_items(), 10);
    assert_eq!(session.cart.total_amount(), Decimal::new(25_500, 2));

    // Checkout empties the cart.
    session.cart.clear_cart();
    assert!(session.cart.is_empty());

    // The order arrives; Raj reviews the supplier.
    session.submit_review(ReviewDraft {
        order_id: "order-41".to_string(),
        supplier_id: "fresh-farms".to_string(),
        supplier_name: "Fresh Farms".to_string(),
        rating: 4,
        comment: "Good onions, slightly late.".to_string(),
    })?;

    let rating = session.reviews.supplier_rating("fresh-farms");
    assert_eq!(rating.average_rating, Decimal::new(40, 1));
    assert_eq!(rating.total_reviews, 1);

    // A second attempt for the same order is rejected by the store itself.
    let duplicate = session.submit_review(ReviewDraft {
        order_id: "order-41".to_string(),
        supplier_id: "fresh-farms".to_string(),
        supplier_name: "Fresh Farms".to_string(),
        rating: 5,
        comment: String::new(),
    });
    assert_eq!(
        duplicate,
        Err(SessionError::Reviews(ReviewsError::AlreadyReviewed(
            "order-41".to_string()
        )))
    );

    Ok(())
}

#[test]
fn a_group_buy_from_creation_to_completion() -> TestResult {
    let storage = Arc::new(MemoryStore::new());
    let mut session = Session::new(storage, vendor("uid-raj", "Raj Kumar"));

    let id = session.create_group(NewGroupBuy {
        title: "Bulk Onion Purchase - Andheri".to_string(),
        description: "500kg onions at wholesale price".to_string(),
        location: "Andheri, Mumbai".to_string(),
        category: "vegetables".to_string(),
        target_amount: 15_000,
        max_participants: 12,
        savings: "25%".to_string(),
    })?;
    assert!(session.in_group(id));

    // Two neighbouring vendors join; the engine takes explicit user ids so
    // other devices' joins can be replayed into this session's state.
    session.groups.join_group(id, "uid-priya")?;
    session.groups.join_group(id, "uid-ali")?;

    let group = session.groups.group(id).expect("group should exist");
    assert_eq!(group.participants, 3);
    // 2 × floor(15000 / 12)
    assert_eq!(group.current_amount, 2_500);
    assert_eq!(group.progress().round_dp(1), Decimal::new(167, 1));

    // The organizer closes the campaign when the order goes out.
    session.groups.complete_group(id, "uid-raj")?;
    assert_eq!(
        session.groups.group(id).expect("group should exist").status,
        GroupStatus::Completed
    );

    // Campaign listings reflect the close.
    assert!(session.groups.active_groups().is_empty());
    assert_eq!(session.groups.groups_for("uid-priya").len(), 1);

    Ok(())
}

#[test]
fn sessions_share_persisted_state_but_not_campaigns() -> TestResult {
    let storage = Arc::new(MemoryStore::new());

    let mut first = Session::new(storage.clone(), vendor("uid-raj", "Raj Kumar"));
    first.cart.add_to_cart(onions(5));
    first.create_group(NewGroupBuy {
        title: "Bulk Onion Purchase".to_string(),
        description: String::new(),
        location: "Andheri, Mumbai".to_string(),
        category: "vegetables".to_string(),
        target_amount: 15_000,
        max_participants: 12,
        savings: "25%".to_string(),
    })?;

    let second = Session::new(storage, vendor("uid-raj", "Raj Kumar"));

    // Cart state is durable; campaigns are per-session.
    assert_eq!(second.cart.total_items(), 5);
    assert!(second.groups.groups().is_empty());

    Ok(())
}
