// crates.io
use serde_json::json;
// self
use user_principal::auth::{Principal, authority_labels, comma_separated_authorities};

fn rod() -> Principal {
	Principal::new(
		"rod",
		"koala",
		true,
		false,
		true,
		true,
		comma_separated_authorities("ROLE_TWO, ROLE_ONE")
			.expect("Failed to parse comma-separated authority fixture."),
	)
	.expect("Principal fixture should be valid.")
}

#[test]
fn principals_serialize_as_records_with_canonical_authorities() {
	let value = serde_json::to_value(rod()).expect("Principal should serialize.");

	assert_eq!(
		value,
		json!({
			"username": "rod",
			"password": "koala",
			"enabled": true,
			"account_non_expired": false,
			"credentials_non_expired": true,
			"account_non_locked": true,
			"authorities": ["ROLE_ONE", "ROLE_TWO"],
		})
	);

	let parsed: Principal = serde_json::from_value(value).expect("Principal should deserialize.");

	assert_eq!(parsed, rod());
}

#[test]
fn deserialization_sorts_authorities() {
	let parsed: Principal = serde_json::from_value(json!({
		"username": "rod",
		"password": "koala",
		"enabled": true,
		"account_non_expired": true,
		"credentials_non_expired": true,
		"account_non_locked": true,
		"authorities": ["ROLE_TWO", "ROLE_ONE"],
	}))
	.expect("Unsorted authorities should deserialize.");

	assert_eq!(authority_labels(parsed.authorities()), ["ROLE_ONE", "ROLE_TWO"]);
}

#[test]
fn deserialization_enforces_construction_rules() {
	let base = json!({
		"username": "rod",
		"password": "koala",
		"enabled": true,
		"account_non_expired": true,
		"credentials_non_expired": true,
		"account_non_locked": true,
		"authorities": ["ROLE_ONE"],
	});
	let cases = [
		("username", json!(null), "Username cannot be empty."),
		("username", json!(""), "Username cannot be empty."),
		("password", json!(null), "Password credential cannot be empty."),
		("authorities", json!(null), "Authority collection cannot be absent."),
		(
			"authorities",
			json!(["ROLE_ONE", null]),
			"Authority collection contains an absent element at index 1.",
		),
		("authorities", json!([""]), "Authority label cannot be empty."),
	];

	for (field, replacement, message) in cases {
		let mut payload = base.clone();

		payload[field] = replacement;

		let err = serde_json::from_value::<Principal>(payload)
			.expect_err("Invalid payload must be rejected.");

		assert!(err.to_string().contains(message), "Unexpected error for `{field}`: {err}.");
	}
}

#[test]
fn missing_authorities_key_is_an_absent_collection() {
	let err = serde_json::from_value::<Principal>(json!({
		"username": "rod",
		"password": "koala",
		"enabled": true,
		"account_non_expired": true,
		"credentials_non_expired": true,
		"account_non_locked": true,
	}))
	.expect_err("A payload without authorities must be rejected.");

	assert!(err.to_string().contains("Authority collection cannot be absent."));
}
