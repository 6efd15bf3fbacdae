//! # ujamaa-shared
//!
//! Entity model for the Ujamaa NGO collaboration platform: plain records
//! with identity, timestamps and foreign-key references by id, plus the
//! outward serialization views and the password credential helpers.
//!
//! This crate performs no I/O; persistence lives in `ujamaa-store`.

pub mod auth;
pub mod models;
pub mod views;

mod error;

pub use error::AuthError;
pub use models::*;
pub use views::{NgoView, UserView};
