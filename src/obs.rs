//! Optional observability hooks for value construction.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every construction inside a span named `user_principal.construct`
//!   with a `kind` field, and to emit a `debug` event carrying the rejection `reason`.
//! - Enable `metrics` to increment the `user_principal_construction_total` counter for every
//!   construction, labeled by `kind` + `outcome`.
//!
//! Usernames, passwords, and authority labels are never recorded. With both features disabled
//! every hook is a no-op.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Value types whose construction is observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructionKind {
	/// [`Authority`](crate::auth::Authority) construction.
	Authority,
	/// [`Principal`](crate::auth::Principal) construction.
	Principal,
}
impl ConstructionKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConstructionKind::Authority => "authority",
			ConstructionKind::Principal => "principal",
		}
	}
}
impl Display for ConstructionKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Inputs passed validation and a value was produced.
	Accepted,
	/// Inputs were rejected and no value was produced.
	Rejected,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Accepted => "accepted",
			Outcome::Rejected => "rejected",
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a successful construction.
pub fn record_accepted(kind: ConstructionKind) {
	record_construction(kind, Outcome::Accepted);
}

/// Records a rejected construction along with its stable reason label.
pub fn record_rejected(kind: ConstructionKind, reason: &'static str) {
	trace_rejection(kind, reason);
	record_construction(kind, Outcome::Rejected);
}
