//! Parameter sets and constants for the LUOV signature scheme
//!
//! This crate holds pure data: scheme dimensions, seed sizes, and the byte
//! sizes derived from them. It contains no cryptographic logic.

pub mod pqc;
