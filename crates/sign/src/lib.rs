//! Digital Signature Schemes
//!
//! This crate implements the LUOV multivariate-quadratic signature scheme
//! instantiated over GF(2).

pub mod error;
pub mod pq;

// Re-exports from post-quantum schemes
pub use pq::luov::{
    generate_private_seed, public_key_size_estimate, Expander, Luov, Luov1, Luov3, Luov5,
    LuovPublicKey, LuovSecretKey, LuovSignatureData, ShakeExpander,
};
