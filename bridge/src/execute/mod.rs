//! Execute handlers for the Hermes bridge contract.
//!
//! - `roles` - attester role assignment
//! - `swap` - outgoing lock + intent emission
//! - `redeem` - incoming verification + mint

mod redeem;
mod roles;
mod swap;

pub use redeem::*;
pub use roles::*;
pub use swap::*;
