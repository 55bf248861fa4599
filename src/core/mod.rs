//! Core domain logic for dco-validator
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CommitRecord, FailureSet, Verdict, CheckRun)
//! - `services/` - Rule evaluation and verdict building
//! - `ports/` - Trait definitions for the hosting platform
//! - `error` - Error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
