pub mod config;
pub mod hashing;
pub mod persistence;
pub mod validation;
