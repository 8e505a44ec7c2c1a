//! Property-based tests for principal canonicalization.

// std
use std::{
	collections::hash_map::DefaultHasher,
	hash::{Hash, Hasher},
};
// crates.io
use proptest::prelude::*;
// self
use user_principal::auth::{Authority, Principal, authority_list};

fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("ROLE_[A-Z]{1,6}", 0..12)
}

fn principal(labels: &[String]) -> Principal {
	let granted: Vec<Authority> =
		authority_list(labels.iter().cloned()).expect("Generated labels are never empty.");

	Principal::new("rod", "koala", true, true, true, true, granted)
		.expect("Generated principal should be valid.")
}

fn hash_of(principal: &Principal) -> u64 {
	let mut hasher = DefaultHasher::new();

	principal.hash(&mut hasher);

	hasher.finish()
}

proptest! {
	#[test]
	fn equality_is_independent_of_input_order(
		(labels, shuffled) in labels_strategy()
			.prop_flat_map(|labels| (Just(labels.clone()), Just(labels).prop_shuffle()))
	) {
		let lhs = principal(&labels);
		let rhs = principal(&shuffled);

		prop_assert_eq!(&lhs, &rhs);
		prop_assert_eq!(hash_of(&lhs), hash_of(&rhs));
	}

	#[test]
	fn stored_authorities_are_sorted_and_complete(labels in labels_strategy()) {
		let principal = principal(&labels);
		let stored = principal.authorities();

		prop_assert_eq!(stored.len(), labels.len());
		prop_assert!(stored.windows(2).all(|pair| pair[0] <= pair[1]));

		for label in &labels {
			prop_assert!(principal.has_authority(label));
		}
	}
}
