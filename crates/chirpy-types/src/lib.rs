//! Foundation types for Chirpy.
//!
//! This crate provides the entity and identifier types shared by every other
//! Chirpy crate. It performs no I/O.
//!
//! # Key Types
//!
//! - [`ChirpId`] / [`UserId`]: Sequentially assigned entity identifiers
//! - [`Chirp`]: A short, immutable post
//! - [`User`]: An account record, including its password hash
//! - [`UserProfile`]: The public view of a user (never carries the hash)
//! - [`Dataset`]: The single root persisted to disk
//! - [`body`]: Length limit and profanity filter applied to chirp bodies

pub mod body;
pub mod chirp;
pub mod dataset;
pub mod error;
pub mod id;
pub mod user;

pub use body::{clean_body, MASK, MAX_CHIRP_LEN, PROFANE_WORDS};
pub use chirp::Chirp;
pub use dataset::Dataset;
pub use error::TypeError;
pub use id::{ChirpId, UserId};
pub use user::{User, UserProfile};
