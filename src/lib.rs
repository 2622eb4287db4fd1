//! # luov
//!
//! A pure Rust implementation of the LUOV multivariate-quadratic signature
//! scheme instantiated over GF(2).
//!
//! ## Usage
//!
//! ```no_run
//! use luov::prelude::*;
//!
//! # fn main() -> luov::api::Result<()> {
//! let mut rng = rand::rngs::OsRng;
//! let (pk, sk) = Luov1::keypair(&mut rng)?;
//!
//! let message = b"attack at dawn";
//! let signature = Luov1::sign(message, &sk)?;
//! Luov1::verify(message, &signature, &pk)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `parallel`: run the per-equation key-generation loop on a rayon thread pool
//! - `serde`: serde support for key and signature wrapper types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`luov_api`]: Trait surface (`Signature`, `SignatureDerive`, ...) and error types
//! - [`luov_params`]: Parameter sets (dimensions, seed sizes, derived key sizes)
//! - [`luov_sign`]: The scheme itself (seed expansion, public-map reduction, sign/verify)

// Core re-exports (always available)
pub use luov_api as api;
pub use luov_params as params;
pub use luov_sign as sign;

/// Common imports for luov users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive, SignatureSerialize};

    // Re-export parameter sets
    pub use crate::params::pqc::luov::{
        Luov1Params, Luov3Params, Luov5Params, LuovParams, LuovToyParams,
    };

    // Re-export the scheme and its key/signature types
    pub use crate::sign::{
        Luov, Luov1, Luov3, Luov5, LuovPublicKey, LuovSecretKey, LuovSignatureData,
    };
}
