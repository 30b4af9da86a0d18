//! ## Library Design / Architecture
//!
//! The main purpose of this library is to take the uncompressed Groth16 points
//! that snarkjs writes for a BLS12-381 circuit and produce the fixed-width
//! compressed point encoding used for storage and on-chain verification.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > proof.json / verification_key.json -> [groth16::Proof] /
//! > [groth16::VerificationKey] -> [compress::Compressor] ->
//! > [groth16::CompressedProof] / [groth16::CompressedVerificationKey] -> hex JSON
//!
//! - Points: [points::G1PointRepr] `[x, y, z]` and [points::G2PointRepr]
//!   `[[x0, x1], [y0, y1], [z0, z1]]`, decimal strings exactly as snarkjs emits
//!   them for the proving pipeline. Each `IC` entry is read on its own as a
//!   [points::IcEntry], so one malformed entry does not reject the key.
//! - Compressed points: [compressed::CompressedG1] (48 bytes) and
//!   [compressed::CompressedG2] (96 bytes, imaginary limb first), the form
//!   verifiers consume, rendered as lowercase hex.
//!
//! ### Compression
//!
//! Byte 0 of every compressed point carries three flags in its top bits:
//! COMPRESSED (always set), INFINITY (set when the third coordinate is not
//! one) and SIGN. For finite points the two square roots of `x^3 + b` are
//! computed, and the SIGN bit is set when `y` is above the smaller of the two
//! under the field's order (plain integers for G1, imaginary-then-real for G2).
//!
//! Verification keys are compressed field by field. The `IC` entries are
//! compressed in parallel and a failing entry becomes `null` instead of
//! failing the whole key.
//!
//! ## Examples
//!
//! ### Compress a single G1 point
//! ```rust
//! use rust_groth16_compress_bls12_381::{compress::compress_g1, points::G1PointRepr};
//!
//! let point = G1PointRepr::new("0", "1", "0");
//! let compressed = compress_g1(&point, "bls12381").unwrap();
//! assert!(compressed.is_infinity());
//! assert_eq!(compressed.to_hex(), format!("c0{}", "00".repeat(47)));
//! ```
//!
//! ### Compress a snarkjs artifact
//! ```rust,no_run
//! use rust_groth16_compress_bls12_381::{config::CompressionConfig, groth16::compress_artifact_json};
//!
//! let input = std::fs::read_to_string("proof.json").unwrap();
//! let output = compress_artifact_json(&input, &CompressionConfig::default()).unwrap();
//! println!("{}", output);
//! ```
//!

pub mod compress;
pub mod compressed;
pub mod config;
pub mod consts;
pub mod curve;
pub mod errors;
pub mod groth16;
pub mod helpers;
pub mod points;
pub mod traits;
