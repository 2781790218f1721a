//! LendVault Backend Library
//!
//! This library exports the core modules for the LendVault backend server.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod loan;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
