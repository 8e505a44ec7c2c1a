//! Immutable authenticated-principal value type: validated usernames, redacted credentials,
//! account status flags, and canonically ordered authorities.
//!
//! A [`Principal`](auth::Principal) is built once through a validating constructor and never
//! changes afterwards. Its authorities are copied out of the caller's collection and stably sorted,
//! so two principals granted the same authorities compare and hash equal whatever order the
//! authorities were supplied in.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod obs;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		hash::{Hash, Hasher},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use {color_eyre as _, proptest as _};
