use ark_bls12_381::{Fq, Fq2};
use ark_ff::{BigInteger, Field, PrimeField};

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::CompressionError, helpers};

/// A field whose elements can be the x/y coordinates of a compressed point.
///
/// Each implementor fixes its own decimal representation (what snarkjs emits
/// for one coordinate), its big-endian byte layout, and the total order used
/// to compare candidate square roots.
pub trait CompressibleField: Field {
    /// Width in bytes of one encoded coordinate.
    const ENCODED_SIZE: usize;

    /// snarkjs representation of one coordinate.
    type Repr: ?Sized;

    /// Key whose `Ord` is the order the sign bit is decided over.
    type OrderKey: Ord;

    fn from_decimal_repr(repr: &Self::Repr) -> Result<Self, CompressionError>;

    /// Writes the big-endian encoding into `out`, which must be `ENCODED_SIZE` long.
    fn write_be(&self, out: &mut [u8]) -> Result<(), CompressionError>;

    fn order_key(&self) -> Self::OrderKey;
}

impl CompressibleField for Fq {
    const ENCODED_SIZE: usize = BYTES_PER_FIELD_ELEMENT;

    type Repr = str;
    type OrderKey = <Fq as PrimeField>::BigInt;

    fn from_decimal_repr(repr: &str) -> Result<Fq, CompressionError> {
        helpers::prime_field_from_decimal(repr)
    }

    fn write_be(&self, out: &mut [u8]) -> Result<(), CompressionError> {
        helpers::write_be_padded(&self.into_bigint().to_bytes_be(), out)
    }

    fn order_key(&self) -> Self::OrderKey {
        self.into_bigint()
    }
}

// Coordinates arrive as [c0, c1] but are laid out and ordered imaginary part first.
impl CompressibleField for Fq2 {
    const ENCODED_SIZE: usize = 2 * BYTES_PER_FIELD_ELEMENT;

    type Repr = [String; 2];
    type OrderKey = (<Fq as PrimeField>::BigInt, <Fq as PrimeField>::BigInt);

    fn from_decimal_repr(repr: &[String; 2]) -> Result<Fq2, CompressionError> {
        let c0 = Fq::from_decimal_repr(&repr[0])?;
        let c1 = Fq::from_decimal_repr(&repr[1])?;
        Ok(Fq2::new(c0, c1))
    }

    fn write_be(&self, out: &mut [u8]) -> Result<(), CompressionError> {
        if out.len() != Self::ENCODED_SIZE {
            return Err(CompressionError::FieldError(format!(
                "expected {} output bytes for an Fq2 element, got {}",
                Self::ENCODED_SIZE,
                out.len()
            )));
        }
        let (imaginary, real) = out.split_at_mut(BYTES_PER_FIELD_ELEMENT);
        self.c1.write_be(imaginary)?;
        self.c0.write_be(real)
    }

    fn order_key(&self) -> Self::OrderKey {
        (self.c1.order_key(), self.c0.order_key())
    }
}
