pub const BYTES_PER_FIELD_ELEMENT: usize = 48; // one BLS12-381 base field limb
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 96; // in bytes, imaginary limb first

// Flag bits carried in the top of byte 0 of every compressed point.
pub const COMPRESSED_FLAG: u8 = 0b1000_0000;
pub const INFINITY_FLAG: u8 = 0b0100_0000;
pub const SIGN_FLAG: u8 = 0b0010_0000;
pub const FLAG_MASK: u8 = COMPRESSED_FLAG | INFINITY_FLAG | SIGN_FLAG;

pub const DEFAULT_CURVE_NAME: &str = "bls12381";

pub const CURVE_ENV_VAR: &str = "GROTH16_COMPRESS_CURVE";
pub const CHECK_ON_CURVE_ENV_VAR: &str = "GROTH16_COMPRESS_CHECK_ON_CURVE";
