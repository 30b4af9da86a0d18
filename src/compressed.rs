use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{
    consts::{
        COMPRESSED_FLAG, FLAG_MASK, INFINITY_FLAG, SIGN_FLAG, SIZE_OF_G1_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::CompressionError,
};

/// A compressed curve point: the big-endian x-coordinate with the
/// compressed, infinity and sign flags in the top three bits of byte 0.
///
/// Renders as lowercase hex through `Display` and serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPoint<const N: usize>([u8; N]);

pub type CompressedG1 = CompressedPoint<SIZE_OF_G1_AFFINE_COMPRESSED>;
pub type CompressedG2 = CompressedPoint<SIZE_OF_G2_AFFINE_COMPRESSED>;

impl<const N: usize> CompressedPoint<N> {
    pub(crate) fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.0
    }

    pub fn is_compressed(&self) -> bool {
        self.0[0] & COMPRESSED_FLAG != 0
    }

    pub fn is_infinity(&self) -> bool {
        self.0[0] & INFINITY_FLAG != 0
    }

    pub fn sign_bit(&self) -> bool {
        self.0[0] & SIGN_FLAG != 0
    }

    /// The encoded x-coordinate with the flag bits cleared.
    pub fn x_bytes(&self) -> [u8; N] {
        let mut bytes = self.0;
        bytes[0] &= !FLAG_MASK;
        bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, CompressionError> {
        let mut bytes = [0u8; N];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| {
            CompressionError::SerializationError(format!(
                "invalid {}-byte compressed point {:?}: {}",
                N, s, e
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> fmt::Display for CompressedPoint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for CompressedPoint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPoint<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> Serialize for CompressedPoint<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for CompressedPoint<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}
