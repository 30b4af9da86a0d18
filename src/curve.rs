use ark_bls12_381::{g1, g2, Fq, Fq2};
use ark_ec::short_weierstrass::SWCurveConfig;
use std::{fmt, str::FromStr};

use crate::{errors::CompressionError, traits::CompressibleField};

/// The field provider behind one named curve: the base field for G1, its
/// quadratic extension for G2, and the `b` constant of each curve equation
/// `y^2 = x^3 + b`.
pub trait CompressionCurve {
    type G1Field: CompressibleField<Repr = str>;
    type G2Field: CompressibleField<Repr = [String; 2]>;

    fn g1_coeff_b() -> Self::G1Field;
    fn g2_coeff_b() -> Self::G2Field;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bls12_381;

impl CompressionCurve for Bls12_381 {
    type G1Field = Fq;
    type G2Field = Fq2;

    fn g1_coeff_b() -> Fq {
        g1::Config::COEFF_B
    }

    fn g2_coeff_b() -> Fq2 {
        g2::Config::COEFF_B
    }
}

/// Curves that can be resolved by name.
///
/// Resolution is a pure function of the name, so the same name always yields
/// the same parameters and nothing needs to be cached globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Bls12_381,
}

impl CurveId {
    /// Resolves a curve name the way snarkjs spells it. Case and any
    /// non-alphanumeric separators are ignored, so `bls12381`, `BLS12-381`
    /// and `bls12_381` all name the same curve.
    pub fn from_name(name: &str) -> Result<Self, CompressionError> {
        match normalize_name(name).as_str() {
            "BLS12381" => Ok(CurveId::Bls12_381),
            _ => Err(CompressionError::CurveLookupError(format!(
                "unsupported curve {:?}",
                name
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Bls12_381 => "bls12381",
        }
    }
}

impl FromStr for CurveId {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveId::from_name(s)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
