//! Property tests for request signatures.

use proptest::prelude::*;
use seller_center::parameters::ParameterSet;
use seller_center::signing::{string_to_sign, Signature};

fn parameter_set() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Za-z][A-Za-z0-9]{0,11}", "[ -~]{0,24}"), 0..8)
}

fn build(pairs: &[(String, String)]) -> ParameterSet {
    let mut set = ParameterSet::new();
    for (key, value) in pairs {
        set.insert(key.clone(), value.clone());
    }
    set
}

proptest! {
    #[test]
    fn signature_is_deterministic(pairs in parameter_set(), key in "[a-z0-9-]{1,32}") {
        let first = Signature::generate(&build(&pairs), &key);
        let second = Signature::generate(&build(&pairs), &key);
        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert_eq!(first.as_str().len(), 64);
        prop_assert!(first.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn insertion_order_does_not_matter(pairs in parameter_set(), key in "[a-z0-9]{1,16}") {
        // Later duplicates win, so compare sets with unique keys only.
        let unique: Vec<(String, String)> = build(&pairs)
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut shuffled = unique.clone();
        shuffled.reverse();

        prop_assert_eq!(
            Signature::generate(&build(&unique), &key),
            Signature::generate(&build(&shuffled), &key)
        );
    }

    #[test]
    fn changing_a_value_changes_the_signature(
        pairs in parameter_set(),
        key in "[a-z0-9]{1,16}",
        extra in "[a-z]{1,8}",
    ) {
        let base = build(&pairs).with("Action", "GetOrders");
        let changed = build(&pairs).with("Action", format!("GetOrders{}", extra));
        prop_assert_ne!(
            Signature::generate(&base, &key),
            Signature::generate(&changed, &key)
        );
    }

    #[test]
    fn changing_the_key_changes_the_signature(pairs in parameter_set(), key in "[a-z0-9]{1,16}") {
        let set = build(&pairs);
        prop_assert_ne!(
            Signature::generate(&set, &key),
            Signature::generate(&set, &format!("{}x", key))
        );
    }

    #[test]
    fn existing_signature_is_ignored(pairs in parameter_set(), stale in "[a-f0-9]{0,64}") {
        let clean = build(&pairs);
        let mut signed = clean.clone();
        signed.insert("Signature", stale);
        prop_assert_eq!(string_to_sign(&clean), string_to_sign(&signed));
    }
}

#[test]
fn test_reference_signatures() {
    let get_order = ParameterSet::new()
        .with("Action", "GetOrder")
        .with("OrderId", 4687503);
    assert_eq!(
        Signature::generate(&get_order, "abc").as_str(),
        "1334fdc7008460bd441291fb31f9f93e6c3292687bbda6834073e7715ceba0b8"
    );

    let get_orders = ParameterSet::new()
        .with("Action", "GetOrders")
        .with("Format", "XML")
        .with("Timestamp", "2024-01-15T10:30:00+00:00")
        .with("UserID", "seller@example.com")
        .with("Version", "1.0");
    assert_eq!(
        Signature::generate(&get_orders, "secret-key").as_str(),
        "44b84c8777f8037cbf590335a274fb3fdab409a1e015860bd30dbddad9edff02"
    );
}
