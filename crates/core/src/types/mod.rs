//! Newtype wrappers and wire-facing value types.

mod candidate;
mod category;
mod email;
mod session;

pub use candidate::{ProductCandidate, SupplierCandidate, ValidationError};
pub use category::Category;
pub use email::{Email, EmailError};
pub use session::{AccountType, AuthSession};
