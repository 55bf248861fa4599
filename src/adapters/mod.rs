//! Adapters (implementations of port traits)
//!
//! Concrete implementations of the core port traits:
//!
//! - `github/` - GitHub REST API (commit listing, check runs) and workflow
//!   event loading

#[cfg(feature = "github")]
pub mod github;
