//! Sea-ORM entity definitions.
//!
//! `city` and `country` map the world sample schema with its original
//! capitalized column names. `user` and `session` back signup/login and the
//! session store respectively.

pub mod city;
pub mod country;
pub mod user;

/// Session rows read and written by [`DbSessionStore`](crate::DbSessionStore).
pub mod session;
