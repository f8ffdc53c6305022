//! Core business logic for FinAPI.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the store traits defined here.
//!
//! # Modules
//!
//! - `statement` - Deposits, withdrawals, balance derivation, statement queries
//! - `users` - User directory contract, registration, and authentication
//! - `persistence` - Errors shared by every store implementation

pub mod persistence;
pub mod statement;
pub mod users;
