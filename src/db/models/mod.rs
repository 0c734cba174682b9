//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for cafe table.
pub mod cafe;
/// sqlx structs for review table.
pub mod review;
/// sqlx structs for saved_place table.
pub mod saved_place;
/// sqlx structs for session table.
pub mod session;
/// sqlx structs for user table.
pub mod user;
