//! In-memory user record: username, password, email.
//!
//! This crate defines the shape of the data and nothing else. Credential
//! handling (hashing, verification, never logging the password) belongs to
//! whatever consumes the record.

mod user;

pub use user::User;
