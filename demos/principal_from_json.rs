//! Demonstrates loading principals from JSON: authorities arrive sorted, the password stays
//! redacted in every formatter, and malformed records are rejected before a value exists.

// crates.io
use color_eyre::Result;
// self
use user_principal::auth::{Principal, UserDetails, authority_labels};

const VALID: &str = r#"{
	"username": "rod",
	"password": "koala",
	"enabled": true,
	"account_non_expired": true,
	"credentials_non_expired": true,
	"account_non_locked": true,
	"authorities": ["ROLE_USER", "ROLE_ADMIN"]
}"#;
const MISSING_ELEMENT: &str = r#"{
	"username": "rod",
	"password": "koala",
	"enabled": true,
	"account_non_expired": true,
	"credentials_non_expired": true,
	"account_non_locked": true,
	"authorities": ["ROLE_USER", null]
}"#;

fn describe(details: &dyn UserDetails) -> String {
	format!(
		"{} (enabled: {}, authorities: {})",
		details.username(),
		details.is_enabled(),
		authority_labels(details.authorities()).join(", ")
	)
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let principal: Principal = serde_json::from_str(VALID)?;

	println!("Loaded principal: {principal}.");
	println!("Collaborator view: {}.", describe(&principal));

	match serde_json::from_str::<Principal>(MISSING_ELEMENT) {
		Ok(unexpected) => println!("Unexpectedly accepted: {unexpected:?}."),
		Err(e) => println!("Rejected record: {e}"),
	}

	Ok(())
}
