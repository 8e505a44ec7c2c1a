//! Capability contract consumed by authentication and authorization collaborators.

// self
use crate::auth::Authority;

/// Read-only view of an authenticated principal.
///
/// Collaborators that decide whether a principal may sign in or act depend on this trait rather
/// than on a concrete type. Implementations must return authorities in their canonical
/// (sorted) order.
pub trait UserDetails
where
	Self: Send + Sync,
{
	/// Username presented at authentication time.
	fn username(&self) -> &str;

	/// Opaque password credential.
	fn password(&self) -> &str;

	/// Whether the account is enabled.
	fn is_enabled(&self) -> bool;

	/// Whether the account has not expired.
	fn is_account_non_expired(&self) -> bool;

	/// Whether the credentials have not expired.
	fn is_credentials_non_expired(&self) -> bool;

	/// Whether the account is not locked.
	fn is_account_non_locked(&self) -> bool;

	/// Granted authorities in canonical order.
	fn authorities(&self) -> &[Authority];
}
