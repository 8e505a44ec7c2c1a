//! Immutable principal value type and its validating constructor.

// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError, ser::SerializeStruct};
// self
use crate::{
	_prelude::*,
	auth::{Authority, PasswordCredential, UserDetails},
	error::PrincipalError,
	obs::{self, ConstructionKind, ConstructionSpan},
};

/// Raw, nullable inputs for building a [`Principal`].
///
/// Every field mirrors a constructor argument but may be absent, and so may each authority.
/// Converting into a [`Principal`] runs the same validation as [`Principal::new`], which is how
/// absent usernames, passwords, collections, and elements surface as [`PrincipalError`]s. This
/// is also the shape deserialization goes through.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalParts {
	/// Username presented at authentication time.
	pub username: Option<String>,
	/// Opaque password credential.
	pub password: Option<String>,
	/// Whether the account is enabled.
	pub enabled: bool,
	/// Whether the account has not expired.
	pub account_non_expired: bool,
	/// Whether the credentials have not expired.
	pub credentials_non_expired: bool,
	/// Whether the account is not locked.
	pub account_non_locked: bool,
	/// Granted authorities in any order.
	pub authorities: Option<Vec<Option<Authority>>>,
}
impl Debug for PrincipalParts {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PrincipalParts")
			.field("username", &self.username)
			.field("password", &self.password.as_ref().map(|_| "<redacted>"))
			.field("enabled", &self.enabled)
			.field("account_non_expired", &self.account_non_expired)
			.field("credentials_non_expired", &self.credentials_non_expired)
			.field("account_non_locked", &self.account_non_locked)
			.field("authorities", &self.authorities)
			.finish()
	}
}

/// An authenticated principal: username, password credential, account status flags, and
/// granted authorities.
///
/// A principal can only be obtained through [`Principal::new`] or a conversion from
/// [`PrincipalParts`]; both validate every input before anything is kept. There is no default
/// value and no setter, so every reachable principal is fully initialized and never changes.
///
/// ```compile_fail
/// let _ = user_principal::auth::Principal::default();
/// ```
///
/// Authorities are copied out of the caller's collection and stably sorted. Equality and hashing
/// cover all seven fields and compare authorities position by position in that canonical order,
/// which makes them independent of the order the caller supplied.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Principal {
	username: String,
	password: PasswordCredential,
	enabled: bool,
	account_non_expired: bool,
	credentials_non_expired: bool,
	account_non_locked: bool,
	authorities: Arc<[Authority]>,
}
impl Principal {
	/// Creates a principal after validating every input.
	///
	/// `authorities` may yield [`Authority`] values or `Option<Authority>`; a `None` element is
	/// rejected with [`PrincipalError::NullAuthorityElement`]. An empty collection is accepted.
	pub fn new<I, A>(
		username: impl Into<String>,
		password: impl Into<String>,
		enabled: bool,
		account_non_expired: bool,
		credentials_non_expired: bool,
		account_non_locked: bool,
		authorities: I,
	) -> Result<Self, PrincipalError>
	where
		I: IntoIterator<Item = A>,
		A: Into<Option<Authority>>,
	{
		Self::construct(
			Some(username.into()),
			Some(password.into()),
			[enabled, account_non_expired, credentials_non_expired, account_non_locked],
			Some(authorities),
		)
	}

	/// Username presented at authentication time.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Raw password credential. Callers must avoid logging this string.
	pub fn password(&self) -> &str {
		self.password.expose()
	}

	/// Password credential wrapper with redacting formatters.
	pub fn password_credential(&self) -> &PasswordCredential {
		&self.password
	}

	/// Whether the account is enabled.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Whether the account has not expired.
	pub fn is_account_non_expired(&self) -> bool {
		self.account_non_expired
	}

	/// Whether the credentials have not expired.
	pub fn is_credentials_non_expired(&self) -> bool {
		self.credentials_non_expired
	}

	/// Whether the account is not locked.
	pub fn is_account_non_locked(&self) -> bool {
		self.account_non_locked
	}

	/// Granted authorities in canonical (sorted) order.
	pub fn authorities(&self) -> &[Authority] {
		&self.authorities
	}

	/// Returns true if an authority with the provided label was granted.
	pub fn has_authority(&self, label: &str) -> bool {
		self.authorities.binary_search_by(|candidate| candidate.as_str().cmp(label)).is_ok()
	}

	fn construct<I, A>(
		username: Option<String>,
		password: Option<String>,
		flags: [bool; 4],
		authorities: Option<I>,
	) -> Result<Self, PrincipalError>
	where
		I: IntoIterator<Item = A>,
		A: Into<Option<Authority>>,
	{
		let _span = ConstructionSpan::new(ConstructionKind::Principal).entered();

		Self::validate(username, password, flags, authorities)
			.inspect(|_| obs::record_accepted(ConstructionKind::Principal))
			.inspect_err(|e| obs::record_rejected(ConstructionKind::Principal, e.as_str()))
	}

	// Checks run in a fixed order: username, password, collection, elements.
	fn validate<I, A>(
		username: Option<String>,
		password: Option<String>,
		[enabled, account_non_expired, credentials_non_expired, account_non_locked]: [bool; 4],
		authorities: Option<I>,
	) -> Result<Self, PrincipalError>
	where
		I: IntoIterator<Item = A>,
		A: Into<Option<Authority>>,
	{
		let username =
			username.filter(|value| !value.is_empty()).ok_or(PrincipalError::EmptyUsername)?;
		let password =
			password.filter(|value| !value.is_empty()).ok_or(PrincipalError::EmptyPassword)?;
		let authorities = canonicalize(authorities)?;

		Ok(Self {
			username,
			password: PasswordCredential::new(password),
			enabled,
			account_non_expired,
			credentials_non_expired,
			account_non_locked,
			authorities,
		})
	}
}
impl TryFrom<PrincipalParts> for Principal {
	type Error = PrincipalError;

	fn try_from(parts: PrincipalParts) -> Result<Self, Self::Error> {
		Self::construct(
			parts.username,
			parts.password,
			[
				parts.enabled,
				parts.account_non_expired,
				parts.credentials_non_expired,
				parts.account_non_locked,
			],
			parts.authorities,
		)
	}
}
impl UserDetails for Principal {
	fn username(&self) -> &str {
		&self.username
	}

	fn password(&self) -> &str {
		self.password.expose()
	}

	fn is_enabled(&self) -> bool {
		self.enabled
	}

	fn is_account_non_expired(&self) -> bool {
		self.account_non_expired
	}

	fn is_credentials_non_expired(&self) -> bool {
		self.credentials_non_expired
	}

	fn is_account_non_locked(&self) -> bool {
		self.account_non_locked
	}

	fn authorities(&self) -> &[Authority] {
		&self.authorities
	}
}
impl Debug for Principal {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Principal")
			.field("username", &self.username)
			.field("password", &self.password)
			.field("enabled", &self.enabled)
			.field("account_non_expired", &self.account_non_expired)
			.field("credentials_non_expired", &self.credentials_non_expired)
			.field("account_non_locked", &self.account_non_locked)
			.field("authorities", &self.authorities)
			.finish()
	}
}
impl Display for Principal {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(
			f,
			"Username: {}; Password: {}; Enabled: {}; AccountNonExpired: {}; \
			 CredentialsNonExpired: {}; AccountNonLocked: {}; ",
			self.username,
			self.password,
			self.enabled,
			self.account_non_expired,
			self.credentials_non_expired,
			self.account_non_locked,
		)?;

		if self.authorities.is_empty() {
			return f.write_str("Not granted any authorities");
		}

		f.write_str("Granted Authorities: ")?;

		for (i, authority) in self.authorities.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}

			f.write_str(authority.as_str())?;
		}

		Ok(())
	}
}
impl Serialize for Principal {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("Principal", 7)?;

		state.serialize_field("username", &self.username)?;
		state.serialize_field("password", &self.password)?;
		state.serialize_field("enabled", &self.enabled)?;
		state.serialize_field("account_non_expired", &self.account_non_expired)?;
		state.serialize_field("credentials_non_expired", &self.credentials_non_expired)?;
		state.serialize_field("account_non_locked", &self.account_non_locked)?;
		state.serialize_field("authorities", &*self.authorities)?;

		state.end()
	}
}
impl<'de> Deserialize<'de> for Principal {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let parts = PrincipalParts::deserialize(deserializer)?;

		Principal::try_from(parts).map_err(DeError::custom)
	}
}

// Copies the caller's authorities into an owned, stably sorted buffer. Equal labels keep their
// input order and duplicates are preserved.
fn canonicalize<I, A>(authorities: Option<I>) -> Result<Arc<[Authority]>, PrincipalError>
where
	I: IntoIterator<Item = A>,
	A: Into<Option<Authority>>,
{
	let authorities = authorities.ok_or(PrincipalError::NullAuthorityCollection)?;
	let mut owned = authorities
		.into_iter()
		.enumerate()
		.map(|(index, authority)| {
			authority.into().ok_or(PrincipalError::NullAuthorityElement { index })
		})
		.collect::<Result<Vec<_>, _>>()?;

	owned.sort();

	Ok(Arc::from(owned))
}
