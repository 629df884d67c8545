//! Integration tests for wishlist toggling through `StoreState`.

#![allow(clippy::unwrap_used)]

use khubsurat_core::ProductId;
use khubsurat_integration_tests::{Lcg, bundled_catalog, session};
use khubsurat_storefront::{Intent, Membership, Notice};

#[test]
fn test_toggle_twice_restores_membership_and_count() {
    let catalog = bundled_catalog();
    let mut state = session(catalog.clone());
    let vase = catalog.get(ProductId::new(1)).unwrap();
    let rug = catalog.get(ProductId::new(11)).unwrap();

    state.toggle_wishlist(rug);
    let count_before = state.wishlist_count();

    assert_eq!(state.toggle_wishlist(vase), Membership::Added);
    assert_eq!(state.toggle_wishlist(vase), Membership::Removed);

    assert_eq!(state.wishlist_count(), count_before);
    assert!(!state.is_in_wishlist(vase.id));
    assert!(state.is_in_wishlist(rug.id));
}

#[test]
fn test_no_duplicate_ids_after_random_toggles() {
    let catalog = bundled_catalog();
    let ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
    let mut rng = Lcg::new(7);
    let mut state = session(catalog.clone());

    for _ in 0..200 {
        let pick = usize::try_from(rng.below(ids.len() as u64)).unwrap();
        let id = *ids.get(pick).unwrap();
        let was_member = state.is_in_wishlist(id);

        let membership = state.toggle_wishlist(catalog.get(id).unwrap());

        assert_eq!(membership.is_member(), !was_member);
        assert_eq!(state.is_in_wishlist(id), membership.is_member());
    }

    let mut seen: Vec<ProductId> = state.wishlist_items().iter().map(|p| p.id).collect();
    let len = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), len);
    assert_eq!(state.wishlist_count(), len);
}

#[test]
fn test_toggle_intent_reports_direction() {
    let mut state = session(bundled_catalog());
    let intent = Intent::ToggleWishlist {
        product: ProductId::new(8),
    };

    let added = state.dispatch(intent.clone()).unwrap();
    assert_eq!(
        added,
        Notice::AddedToWishlist {
            name: "Bandhani Saree".to_string()
        }
    );

    let removed = state.dispatch(intent).unwrap();
    assert_eq!(removed.title(), "Removed from wishlist");
    assert_eq!(state.wishlist_count(), 0);
}
