//! Authenticated-principal model: authorities, credentials, and the principal value type.

pub mod authority;
pub mod credential;
pub mod details;
pub mod principal;

pub use authority::*;
pub use credential::*;
pub use details::*;
pub use principal::*;
