//! Data models for the library server

pub mod checkout;
pub mod patron;
pub mod session;
pub mod title;

// Re-export commonly used types
pub use checkout::{CheckedOut, MyBook};
pub use patron::Patron;
pub use session::SessionClaims;
pub use title::{CatalogEntry, CopyEntry};
