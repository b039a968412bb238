use proptest::prelude::*;
use xdm_node::DeweyId;

/// Non-attribute addresses, optionally with a caret before each level's division.
fn dewey_id() -> impl Strategy<Value = DeweyId> {
    prop::collection::vec((1u32..1_000_000).prop_map(|d| d * 2 + 1), 0..6).prop_flat_map(|odd| {
        prop::collection::vec(any::<bool>(), odd.len()).prop_map(move |carets| {
            let mut divisions = vec![1u32];
            for (&d, &caret) in odd.iter().zip(&carets) {
                if caret {
                    divisions.push(d - 1);
                }
                divisions.push(d);
            }
            DeweyId::from_divisions(divisions).expect("generated address is valid")
        })
    })
}

fn child_of_root() -> impl Strategy<Value = DeweyId> {
    dewey_id().prop_filter("needs a parent", |id| !id.is_root())
}

proptest! {
    #[test]
    fn bytes_roundtrip(id in dewey_id()) {
        prop_assert_eq!(DeweyId::from_bytes(&id.to_bytes()).unwrap(), id);
    }

    #[test]
    fn byte_order_matches_division_order(a in dewey_id(), b in dewey_id()) {
        prop_assert_eq!(a.to_bytes().cmp(&b.to_bytes()), a.cmp(&b));
    }

    #[test]
    fn text_roundtrip(id in dewey_id()) {
        prop_assert_eq!(id.to_string().parse::<DeweyId>().unwrap(), id);
    }

    #[test]
    fn append_after_sorts_after_subtree(left in child_of_root()) {
        let next = DeweyId::new_between(Some(&left), None).unwrap();
        prop_assert!(left < next);
        prop_assert!(left.new_child_id() < next);
        prop_assert!(left.is_sibling_of(&next));
    }

    #[test]
    fn insert_before_sorts_before(right in child_of_root()) {
        let prev = DeweyId::new_between(None, Some(&right)).unwrap();
        prop_assert!(prev < right);
        prop_assert_eq!(prev.parent(), right.parent());
    }

    #[test]
    fn repeated_inserts_stay_strictly_between(
        steps in prop::collection::vec(any::<bool>(), 1..24)
    ) {
        let mut left = "1.3".parse::<DeweyId>().unwrap();
        let mut right = "1.5".parse::<DeweyId>().unwrap();
        for go_left in steps {
            let mid = DeweyId::new_between(Some(&left), Some(&right)).unwrap();
            prop_assert!(left < mid && mid < right, "{} < {} < {}", left, mid, right);
            prop_assert_eq!(mid.parent(), left.parent());
            prop_assert_eq!(mid.level(), left.level());
            if go_left { right = mid } else { left = mid }
        }
    }
}
