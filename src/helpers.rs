use ark_ff::PrimeField;
use num_bigint::BigUint;
use num_traits::One;
use std::cmp::Ordering;

use crate::errors::CompressionError;

/// Parses a snarkjs decimal string into an unbounded unsigned integer.
///
/// Only ASCII digits are accepted; signs, whitespace, radix prefixes and the
/// empty string are rejected.
pub fn biguint_from_decimal(value: &str) -> Result<BigUint, CompressionError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CompressionError::FieldError(format!(
            "not a decimal integer: {:?}",
            value
        )));
    }
    BigUint::parse_bytes(value.as_bytes(), 10).ok_or_else(|| {
        CompressionError::FieldError(format!("not a decimal integer: {:?}", value))
    })
}

/// Parses a decimal string into a prime field element, rejecting values that
/// are not strictly below the field modulus.
pub fn prime_field_from_decimal<F: PrimeField>(value: &str) -> Result<F, CompressionError> {
    let integer = biguint_from_decimal(value)?;
    let modulus: BigUint = F::MODULUS.into();
    if integer >= modulus {
        return Err(CompressionError::FieldError(format!(
            "value {} is not below the field modulus",
            value
        )));
    }
    Ok(F::from_le_bytes_mod_order(&integer.to_bytes_le()))
}

/// Returns whether a projective third coordinate marks a finite point.
pub fn is_unit_coordinate(z: &str) -> Result<bool, CompressionError> {
    Ok(biguint_from_decimal(z)?.is_one())
}

/// Decides the sign bit from the two candidate roots and the actual y.
///
/// When `root > neg_root` the bit is set for `y > neg_root`, when
/// `neg_root > root` it is set for `y > root`, and when both roots coincide
/// (y = 0) it stays clear. The comparison runs over whatever total order the
/// field representation defines, so G1 and G2 share this one rule.
pub fn sign_flag<K: Ord>(root: &K, neg_root: &K, y: &K) -> bool {
    match root.cmp(neg_root) {
        Ordering::Greater => y > neg_root,
        Ordering::Less => y > root,
        Ordering::Equal => false,
    }
}

/// Copies a big-endian integer encoding into `out`, left padding with zeros.
pub fn write_be_padded(bytes_be: &[u8], out: &mut [u8]) -> Result<(), CompressionError> {
    if bytes_be.len() > out.len() {
        let significant = bytes_be.iter().position(|b| *b != 0).unwrap_or(bytes_be.len());
        if bytes_be.len() - significant > out.len() {
            return Err(CompressionError::FieldError(format!(
                "integer needs {} bytes, only {} available",
                bytes_be.len() - significant,
                out.len()
            )));
        }
        let trimmed = &bytes_be[bytes_be.len() - out.len()..];
        out.copy_from_slice(trimmed);
        return Ok(());
    }
    let offset = out.len() - bytes_be.len();
    out[..offset].fill(0);
    out[offset..].copy_from_slice(bytes_be);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fq;
    use ark_ff::{BigInteger, Zero};

    #[test]
    fn test_biguint_from_decimal() {
        assert_eq!(biguint_from_decimal("0").unwrap(), BigUint::from(0u8));
        assert_eq!(biguint_from_decimal("007").unwrap(), BigUint::from(7u8));
        assert!(biguint_from_decimal("").is_err());
        assert!(biguint_from_decimal("-1").is_err());
        assert!(biguint_from_decimal("+1").is_err());
        assert!(biguint_from_decimal("0x10").is_err());
        assert!(biguint_from_decimal(" 1").is_err());
        assert!(biguint_from_decimal("12a").is_err());
    }

    #[test]
    fn test_prime_field_from_decimal_range() {
        let modulus: BigUint = Fq::MODULUS.into();
        let below = (&modulus - BigUint::from(1u8)).to_string();
        let fq: Fq = prime_field_from_decimal(&below).unwrap();
        assert_eq!(fq, -Fq::from(1u64));

        let at = modulus.to_string();
        assert!(matches!(
            prime_field_from_decimal::<Fq>(&at),
            Err(CompressionError::FieldError(_))
        ));

        let zero: Fq = prime_field_from_decimal("0").unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_is_unit_coordinate() {
        assert!(is_unit_coordinate("1").unwrap());
        assert!(is_unit_coordinate("01").unwrap());
        assert!(!is_unit_coordinate("0").unwrap());
        assert!(!is_unit_coordinate("2").unwrap());
        assert!(is_unit_coordinate("one").is_err());
    }

    #[test]
    fn test_sign_flag_rule() {
        // root is the larger candidate: only y above neg_root sets the bit
        assert!(sign_flag(&9u32, &2u32, &9u32));
        assert!(!sign_flag(&9u32, &2u32, &2u32));
        // root is the smaller candidate
        assert!(sign_flag(&2u32, &9u32, &9u32));
        assert!(!sign_flag(&2u32, &9u32, &2u32));
        // coinciding roots never set it
        assert!(!sign_flag(&0u32, &0u32, &0u32));
    }

    #[test]
    fn test_sign_flag_lexicographic_pairs() {
        // (imaginary, real) ordering: imaginary part decides first
        let a = (5u32, 0u32);
        let b = (4u32, 100u32);
        assert!(sign_flag(&a, &b, &a));
        assert!(!sign_flag(&a, &b, &b));
        // tie on imaginary falls back to real
        let c = (0u32, 3u32);
        let d = (0u32, 7u32);
        assert!(sign_flag(&c, &d, &d));
        assert!(!sign_flag(&c, &d, &c));
    }

    #[test]
    fn test_write_be_padded() {
        let mut out = [0xffu8; 4];
        write_be_padded(&[1, 2], &mut out).unwrap();
        assert_eq!(out, [0, 0, 1, 2]);

        let mut out = [0u8; 2];
        write_be_padded(&[0, 0, 1, 2], &mut out).unwrap();
        assert_eq!(out, [1, 2]);

        let mut out = [0u8; 2];
        assert!(write_be_padded(&[1, 0, 0], &mut out).is_err());

        let one = Fq::from(1u64).into_bigint().to_bytes_be();
        let mut out = [0u8; 48];
        write_be_padded(&one, &mut out).unwrap();
        assert_eq!(out[47], 1);
    }
}
