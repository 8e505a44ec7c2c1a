//! Password credential wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Opaque password credential kept out of logs.
///
/// The value is stored exactly as supplied; hashing and encoding belong to the caller.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordCredential(String);
impl PasswordCredential {
	pub(crate) fn new(value: String) -> Self {
		Self(value)
	}

	/// Returns the raw credential. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for PasswordCredential {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for PasswordCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PasswordCredential").field(&"<redacted>").finish()
	}
}
impl Display for PasswordCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
