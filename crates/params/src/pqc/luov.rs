//! Constants for the LUOV multivariate signature scheme over GF(2)

/// Private/public seed size in bytes, shared by all parameter sets
pub const LUOV_SEED_SIZE: usize = 32;

/// Salt size in bytes appended to every signature
pub const LUOV_SALT_SIZE: usize = 16;

/// Common trait for LUOV parameter sets
///
/// Every matrix dimension and byte size below derives from `V` and `M`; a
/// disagreement between these and the shapes produced during key generation
/// is a configuration defect, not an input error.
pub trait LuovParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// Number of vinegar variables
    const V: usize;
    /// Number of oil variables, equal to the number of equations
    const M: usize;
    /// Total number of variables
    const N: usize = Self::V + Self::M;

    /// Claimed security level in bits
    const SECURITY_LEVEL: u32;

    /// Private seed size in bytes
    const SEED_SIZE: usize = LUOV_SEED_SIZE;
    /// Signature salt size in bytes
    const SALT_SIZE: usize = LUOV_SALT_SIZE;

    /// Quadratic coefficients squeezed per equation: the vinegar-vinegar
    /// upper triangle followed by the vinegar-oil rectangle
    const Q1_COLS: usize = Self::V * (Self::V + 1) / 2 + Self::V * Self::M;
    /// Upper-triangular length of one reduced oil matrix
    const PK3_TRIANGLE: usize = Self::M * (Self::M + 1) / 2;
    /// Packed byte length of one Q2 row
    const Q2_ROW_BYTES: usize = (Self::PK3_TRIANGLE + 7) / 8;

    /// Public key size in bytes: public seed followed by M packed Q2 rows
    const PUBLIC_KEY_BYTES: usize = Self::SEED_SIZE + Self::M * Self::Q2_ROW_BYTES;
    /// Secret key size in bytes (the raw private seed, nothing else persisted)
    const SECRET_KEY_BYTES: usize = Self::SEED_SIZE;
    /// Signature size in bytes: packed variable assignment plus salt
    const SIGNATURE_BYTES: usize = (Self::N + 7) / 8 + Self::SALT_SIZE;

    /// Maximum vinegar draws before signing gives up
    const MAX_SIGN_ATTEMPTS: u16 = 256;
}

/// Structure containing LUOV-1 parameters
pub struct Luov1Params {
    /// Number of vinegar variables
    pub v: usize,

    /// Number of oil variables / equations
    pub m: usize,

    /// Seed size in bytes
    pub seed_size: usize,

    /// Security level in bits
    pub security_level: u32,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Signature size in bytes
    pub signature_size: usize,
}

/// LUOV-1 parameters (NIST security level 1 dimensions)
pub const LUOV_1: Luov1Params = Luov1Params {
    v: 197,
    m: 57,
    seed_size: LUOV_SEED_SIZE,
    security_level: 128,
    public_key_size: 11831,
    signature_size: 48,
};

impl LuovParams for Luov1Params {
    const NAME: &'static str = "LUOV-1";
    const V: usize = 197;
    const M: usize = 57;
    const SECURITY_LEVEL: u32 = 128;
}

/// Structure containing LUOV-3 parameters
pub struct Luov3Params {
    /// Number of vinegar variables
    pub v: usize,

    /// Number of oil variables / equations
    pub m: usize,

    /// Seed size in bytes
    pub seed_size: usize,

    /// Security level in bits
    pub security_level: u32,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Signature size in bytes
    pub signature_size: usize,
}

/// LUOV-3 parameters (NIST security level 3 dimensions)
pub const LUOV_3: Luov3Params = Luov3Params {
    v: 283,
    m: 83,
    seed_size: LUOV_SEED_SIZE,
    security_level: 192,
    public_key_size: 36220,
    signature_size: 62,
};

impl LuovParams for Luov3Params {
    const NAME: &'static str = "LUOV-3";
    const V: usize = 283;
    const M: usize = 83;
    const SECURITY_LEVEL: u32 = 192;
}

/// Structure containing LUOV-5 parameters
pub struct Luov5Params {
    /// Number of vinegar variables
    pub v: usize,

    /// Number of oil variables / equations
    pub m: usize,

    /// Seed size in bytes
    pub seed_size: usize,

    /// Security level in bits
    pub security_level: u32,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Signature size in bytes
    pub signature_size: usize,
}

/// LUOV-5 parameters (NIST security level 5 dimensions)
pub const LUOV_5: Luov5Params = Luov5Params {
    v: 374,
    m: 110,
    seed_size: LUOV_SEED_SIZE,
    security_level: 256,
    public_key_size: 84072,
    signature_size: 77,
};

impl LuovParams for Luov5Params {
    const NAME: &'static str = "LUOV-5";
    const V: usize = 374;
    const M: usize = 110;
    const SECURITY_LEVEL: u32 = 256;
}

/// Toy parameters for cross-implementation test vectors
///
/// With v = 4 and m = 2, each reduced oil matrix has 3 upper-triangular
/// entries and packs into a single byte, so the whole public key is
/// `seed_size + 2` bytes. Never use outside tests.
pub struct LuovToyParams;

impl LuovParams for LuovToyParams {
    const NAME: &'static str = "LUOV-toy";
    const V: usize = 4;
    const M: usize = 2;
    const SECURITY_LEVEL: u32 = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sizes_match_published_constants() {
        assert_eq!(Luov1Params::PUBLIC_KEY_BYTES, LUOV_1.public_key_size);
        assert_eq!(Luov1Params::SIGNATURE_BYTES, LUOV_1.signature_size);
        assert_eq!(Luov3Params::PUBLIC_KEY_BYTES, LUOV_3.public_key_size);
        assert_eq!(Luov3Params::SIGNATURE_BYTES, LUOV_3.signature_size);
        assert_eq!(Luov5Params::PUBLIC_KEY_BYTES, LUOV_5.public_key_size);
        assert_eq!(Luov5Params::SIGNATURE_BYTES, LUOV_5.signature_size);
    }

    #[test]
    fn toy_parameters_pack_one_byte_rows() {
        assert_eq!(LuovToyParams::N, 6);
        assert_eq!(LuovToyParams::PK3_TRIANGLE, 3);
        assert_eq!(LuovToyParams::Q2_ROW_BYTES, 1);
        assert_eq!(LuovToyParams::PUBLIC_KEY_BYTES, LUOV_SEED_SIZE + 2);
    }
}
