//! Trait definitions for the luov API surface

pub mod signature;

pub use signature::{Signature, SignatureDerive, SignatureSerialize};
