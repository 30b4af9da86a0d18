use ark_bls12_381::{Fq, Fq2, G1Affine, G2Affine};
use ark_ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::CompressionError;

/// A G1 point as snarkjs writes it: `[x, y, z]` decimal strings, with
/// `z == "1"` for finite points. Unsigned JSON integers are also accepted and
/// kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct G1PointRepr(#[serde(deserialize_with = "deserialize_g1_coordinates")] pub [String; 3]);

/// A G2 point as snarkjs writes it: `[[x0, x1], [y0, y1], [z0, z1]]` with each
/// pair in `[real, imaginary]` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct G2PointRepr(
    #[serde(deserialize_with = "deserialize_g2_coordinates")] pub [[String; 2]; 3],
);

/// One entry of a verification key's `IC` list.
///
/// Entries are read independently of each other: anything that is not a
/// `[x, y, z]` triple is kept as raw JSON in [IcEntry::Malformed] so the rest
/// of the key still loads, and fails only when that entry is compressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IcEntry {
    Point(G1PointRepr),
    Malformed(Value),
}

impl G1PointRepr {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self([x.into(), y.into(), z.into()])
    }

    /// The representation snarkjs uses for the identity.
    pub fn infinity() -> Self {
        Self::new("0", "1", "0")
    }

    pub fn from_affine(point: &G1Affine) -> Self {
        if point.infinity {
            return Self::infinity();
        }
        Self::new(fq_to_decimal(&point.x), fq_to_decimal(&point.y), "1")
    }

    pub fn x(&self) -> &str {
        &self.0[0]
    }

    pub fn y(&self) -> &str {
        &self.0[1]
    }

    pub fn z(&self) -> &str {
        &self.0[2]
    }
}

impl G2PointRepr {
    pub fn new(x: [&str; 2], y: [&str; 2], z: [&str; 2]) -> Self {
        Self([
            x.map(str::to_owned),
            y.map(str::to_owned),
            z.map(str::to_owned),
        ])
    }

    pub fn infinity() -> Self {
        Self::new(["0", "0"], ["1", "0"], ["0", "0"])
    }

    pub fn from_affine(point: &G2Affine) -> Self {
        if point.infinity {
            return Self::infinity();
        }
        Self([
            fq2_to_decimal(&point.x),
            fq2_to_decimal(&point.y),
            ["1".to_owned(), "0".to_owned()],
        ])
    }

    pub fn x(&self) -> &[String; 2] {
        &self.0[0]
    }

    pub fn y(&self) -> &[String; 2] {
        &self.0[1]
    }

    pub fn z(&self) -> &[String; 2] {
        &self.0[2]
    }
}

impl IcEntry {
    pub fn as_point(&self) -> Result<&G1PointRepr, CompressionError> {
        match self {
            IcEntry::Point(point) => Ok(point),
            IcEntry::Malformed(value) => Err(CompressionError::SerializationError(format!(
                "IC entry is not a [x, y, z] point: {}",
                value
            ))),
        }
    }
}

impl From<G1PointRepr> for IcEntry {
    fn from(point: G1PointRepr) -> Self {
        IcEntry::Point(point)
    }
}

impl From<&G1Affine> for G1PointRepr {
    fn from(point: &G1Affine) -> Self {
        Self::from_affine(point)
    }
}

impl From<&G2Affine> for G2PointRepr {
    fn from(point: &G2Affine) -> Self {
        Self::from_affine(point)
    }
}

fn fq_to_decimal(value: &Fq) -> String {
    BigUint::from(value.into_bigint()).to_string()
}

fn fq2_to_decimal(value: &Fq2) -> [String; 2] {
    [fq_to_decimal(&value.c0), fq_to_decimal(&value.c1)]
}

/// A coordinate as it may appear in snarkjs output: a decimal string, or a
/// plain JSON integer in hand-written files.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Decimal(String),
    Integer(u64),
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        match coordinate {
            Coordinate::Decimal(s) => s,
            Coordinate::Integer(n) => n.to_string(),
        }
    }
}

fn deserialize_g1_coordinates<'de, D>(deserializer: D) -> Result<[String; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let coordinates = <[Coordinate; 3]>::deserialize(deserializer)?;
    Ok(coordinates.map(String::from))
}

fn deserialize_g2_coordinates<'de, D>(deserializer: D) -> Result<[[String; 2]; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let coordinates = <[[Coordinate; 2]; 3]>::deserialize(deserializer)?;
    Ok(coordinates.map(|pair| pair.map(String::from)))
}
