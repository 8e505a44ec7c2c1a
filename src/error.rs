//! Crate-level error types shared by authorities and principals.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs that can fail for more than one reason.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// An authority label failed validation.
	#[error(transparent)]
	Authority(#[from] AuthorityError),
	/// Principal construction was rejected.
	#[error(transparent)]
	Principal(#[from] PrincipalError),
}

/// Errors emitted when validating an authority label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AuthorityError {
	/// Authority labels cannot be empty.
	#[error("Authority label cannot be empty.")]
	Empty,
}
impl AuthorityError {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(&self) -> &'static str {
		match self {
			AuthorityError::Empty => "empty_label",
		}
	}
}

/// Reasons a principal cannot be constructed.
///
/// Every variant is raised before any state is kept, so a rejected construction never leaves a
/// partially built principal behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum PrincipalError {
	/// The username was absent or empty.
	#[error("Username cannot be empty.")]
	EmptyUsername,
	/// The password credential was absent or empty.
	#[error("Password credential cannot be empty.")]
	EmptyPassword,
	/// No authority collection was supplied.
	#[error("Authority collection cannot be absent.")]
	NullAuthorityCollection,
	/// The authority collection contained an absent element.
	#[error("Authority collection contains an absent element at index {index}.")]
	NullAuthorityElement {
		/// Position of the first absent element in the caller's collection.
		index: usize,
	},
}
impl PrincipalError {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(&self) -> &'static str {
		match self {
			PrincipalError::EmptyUsername => "empty_username",
			PrincipalError::EmptyPassword => "empty_password",
			PrincipalError::NullAuthorityCollection => "null_authority_collection",
			PrincipalError::NullAuthorityElement { .. } => "null_authority_element",
		}
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn principal_error_converts_into_crate_error_transparently() {
		let principal_error = PrincipalError::NullAuthorityElement { index: 2 };
		let error: Error = principal_error.clone().into();

		assert!(matches!(error, Error::Principal(PrincipalError::NullAuthorityElement { index: 2 })));
		assert_eq!(error.to_string(), principal_error.to_string());
		assert!(error.to_string().contains("index 2"));
		assert!(StdError::source(&error).is_none(), "Transparent errors forward the source.");
	}

	#[test]
	fn authority_error_converts_into_crate_error() {
		let error: Error = AuthorityError::Empty.into();

		assert_eq!(error, Error::Authority(AuthorityError::Empty));
		assert_eq!(error.to_string(), "Authority label cannot be empty.");
	}

	#[test]
	fn reasons_have_stable_labels() {
		assert_eq!(AuthorityError::Empty.as_str(), "empty_label");
		assert_eq!(PrincipalError::EmptyUsername.as_str(), "empty_username");
		assert_eq!(PrincipalError::EmptyPassword.as_str(), "empty_password");
		assert_eq!(PrincipalError::NullAuthorityCollection.as_str(), "null_authority_collection");
		assert_eq!(
			PrincipalError::NullAuthorityElement { index: 0 }.as_str(),
			"null_authority_element"
		);
	}

	#[test]
	fn reasons_round_trip_through_json() {
		let reason = PrincipalError::NullAuthorityElement { index: 1 };
		let json = serde_json::to_string(&reason).expect("Error reason should serialize.");

		assert_eq!(json, "{\"NullAuthorityElement\":{\"index\":1}}");

		let parsed: PrincipalError =
			serde_json::from_str(&json).expect("Error reason should deserialize.");

		assert_eq!(parsed, reason);
	}
}
