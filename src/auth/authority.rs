//! Granted authority labels and helpers that build authority lists from raw strings.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::{_prelude::*, error::AuthorityError, obs};

/// A single capability label granted to a principal, such as `ROLE_ADMIN`.
///
/// Authorities compare, order, and hash by their label. The lexicographic order exists so a
/// principal can keep its authorities in one canonical sequence; it carries no domain meaning.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Authority(String);
impl Authority {
	/// Creates an authority after validating the label.
	pub fn new(label: impl Into<String>) -> Result<Self, AuthorityError> {
		let label = label.into();
		let _span = obs::ConstructionSpan::new(obs::ConstructionKind::Authority).entered();

		validate_label(&label)
			.inspect_err(|e| obs::record_rejected(obs::ConstructionKind::Authority, e.as_str()))?;
		obs::record_accepted(obs::ConstructionKind::Authority);

		Ok(Self(label))
	}

	/// Returns the granted label.
	pub fn label(&self) -> &str {
		&self.0
	}

	/// Returns the granted label as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for Authority {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for Authority {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for Authority {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<Authority> for String {
	fn from(value: Authority) -> Self {
		value.0
	}
}
impl TryFrom<String> for Authority {
	type Error = AuthorityError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl TryFrom<&str> for Authority {
	type Error = AuthorityError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for Authority {
	type Err = AuthorityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for Authority {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Authority({})", self.0)
	}
}
impl Display for Authority {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Builds an authority list from raw labels, keeping the caller's order.
///
/// Fails on the first empty label.
pub fn authority_list<I, S>(labels: I) -> Result<Vec<Authority>, AuthorityError>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	labels.into_iter().map(Authority::new).collect()
}

/// Builds an authority list from a comma-separated string such as `"ROLE_A, ROLE_B"`.
///
/// Whitespace around each label is trimmed. The empty string yields an empty list, while an
/// empty segment (`"ROLE_A,,ROLE_B"`) is rejected.
pub fn comma_separated_authorities(labels: &str) -> Result<Vec<Authority>, AuthorityError> {
	if labels.trim().is_empty() {
		return Ok(Vec::new());
	}

	authority_list(labels.split(',').map(str::trim))
}

/// Collects the labels of the provided authorities, in order.
pub fn authority_labels(authorities: &[Authority]) -> Vec<&str> {
	authorities.iter().map(Authority::as_str).collect()
}

fn validate_label(label: &str) -> Result<(), AuthorityError> {
	if label.is_empty() {
		return Err(AuthorityError::Empty);
	}

	Ok(())
}
