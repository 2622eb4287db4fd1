//! Shared helpers for the LUOV integration test suite.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible integration tests.
pub fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_seed([7u8; 32])
}

/// Fixed seed shared by the derivation tests.
pub fn fixed_seed() -> Vec<u8> {
    hex::decode("202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f")
        .expect("valid hex")
}
