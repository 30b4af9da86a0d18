use rayon::prelude::*;
use tracing::debug;

use crate::{
    compressed::{CompressedG1, CompressedG2},
    config::CompressionConfig,
    consts::{
        COMPRESSED_FLAG, INFINITY_FLAG, SIGN_FLAG, SIZE_OF_G1_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    curve::{Bls12_381, CompressionCurve, CurveId},
    errors::CompressionError,
    helpers,
    points::{G1PointRepr, G2PointRepr},
    traits::CompressibleField,
};

/// Turns snarkjs decimal-string points into compressed byte strings for one
/// resolved curve.
///
/// A [Compressor] is immutable and `Sync`; the same instance can compress any
/// number of points concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compressor {
    curve: CurveId,
    check_on_curve: bool,
}

impl Compressor {
    /// Resolves `curve_name` with the default settings.
    pub fn new(curve_name: &str) -> Result<Self, CompressionError> {
        Ok(Self {
            curve: CurveId::from_name(curve_name)?,
            check_on_curve: false,
        })
    }

    pub fn from_config(config: &CompressionConfig) -> Result<Self, CompressionError> {
        Ok(Self {
            curve: CurveId::from_name(&config.curve)?,
            check_on_curve: config.check_on_curve,
        })
    }

    pub fn with_check_on_curve(mut self, check_on_curve: bool) -> Self {
        self.check_on_curve = check_on_curve;
        self
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn check_on_curve(&self) -> bool {
        self.check_on_curve
    }

    pub fn compress_g1(&self, point: &G1PointRepr) -> Result<CompressedG1, CompressionError> {
        match self.curve {
            CurveId::Bls12_381 => self.compress_g1_on::<Bls12_381>(point),
        }
    }

    pub fn compress_g2(&self, point: &G2PointRepr) -> Result<CompressedG2, CompressionError> {
        match self.curve {
            CurveId::Bls12_381 => self.compress_g2_on::<Bls12_381>(point),
        }
    }

    /// Compresses every point independently and in parallel.
    ///
    /// The output has one entry per input, in input order. A failing point
    /// yields an [CompressionError::ElementCompressionError] carrying its index
    /// and does not affect its neighbours.
    pub fn compress_g1_batch(
        &self,
        points: &[G1PointRepr],
    ) -> Vec<Result<CompressedG1, CompressionError>> {
        self.compress_g1_entries(points, |point| Ok(point))
    }

    /// [Compressor::compress_g1_batch] over entries that may not hold a point
    /// at all; `point` failing counts as that entry's error.
    pub(crate) fn compress_g1_entries<T, F>(
        &self,
        entries: &[T],
        point: F,
    ) -> Vec<Result<CompressedG1, CompressionError>>
    where
        T: Sync,
        F: Fn(&T) -> Result<&G1PointRepr, CompressionError> + Sync,
    {
        entries
            .par_iter()
            .enumerate()
            .map(|(index, entry)| {
                point(entry)
                    .and_then(|point| self.compress_g1(point))
                    .map_err(|e| CompressionError::ElementCompressionError {
                        index,
                        source: Box::new(e),
                    })
            })
            .collect()
    }

    fn compress_g1_on<C: CompressionCurve>(
        &self,
        point: &G1PointRepr,
    ) -> Result<CompressedG1, CompressionError> {
        let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        compress_into::<C::G1Field>(
            point.x(),
            point.y(),
            point.z(),
            C::g1_coeff_b(),
            self.check_on_curve,
            &mut bytes,
        )?;
        Ok(CompressedG1::from_bytes(bytes))
    }

    // Only the real limb of z decides finiteness.
    fn compress_g2_on<C: CompressionCurve>(
        &self,
        point: &G2PointRepr,
    ) -> Result<CompressedG2, CompressionError> {
        let mut bytes = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        compress_into::<C::G2Field>(
            point.x(),
            point.y(),
            &point.z()[0],
            C::g2_coeff_b(),
            self.check_on_curve,
            &mut bytes,
        )?;
        Ok(CompressedG2::from_bytes(bytes))
    }
}

/// Writes the compressed encoding of `(x, y, z)` into `out`.
///
/// The x-coordinate is always encoded and the COMPRESSED flag always set. A
/// third coordinate other than one sets INFINITY and nothing else; y is not
/// even parsed in that case. For finite points the SIGN flag is decided by
/// [helpers::sign_flag] over the two square roots of `x^3 + b`.
fn compress_into<F: CompressibleField>(
    x: &F::Repr,
    y: &F::Repr,
    z: &str,
    b: F,
    check_on_curve: bool,
    out: &mut [u8],
) -> Result<(), CompressionError> {
    let x = F::from_decimal_repr(x)?;
    x.write_be(out)?;
    out[0] |= COMPRESSED_FLAG;

    if !helpers::is_unit_coordinate(z)? {
        out[0] |= INFINITY_FLAG;
        return Ok(());
    }

    let y = F::from_decimal_repr(y)?;
    let rhs = x.square() * x + b;
    match rhs.sqrt() {
        Some(root) => {
            let neg_root = -root;
            if check_on_curve && y != root && y != neg_root {
                return Err(CompressionError::NotOnCurveError(
                    "y does not satisfy y^2 = x^3 + b".to_string(),
                ));
            }
            if helpers::sign_flag(&root.order_key(), &neg_root.order_key(), &y.order_key()) {
                out[0] |= SIGN_FLAG;
            }
        },
        None if check_on_curve => {
            return Err(CompressionError::NotOnCurveError(
                "x^3 + b has no square root".to_string(),
            ));
        },
        None => debug!("x^3 + b has no square root, leaving the sign bit unset"),
    }
    Ok(())
}

/// Compresses a G1 point on the named curve.
pub fn compress_g1(
    point: &G1PointRepr,
    curve_name: &str,
) -> Result<CompressedG1, CompressionError> {
    Compressor::new(curve_name)?.compress_g1(point)
}

/// Compresses a G2 point on the named curve.
pub fn compress_g2(
    point: &G2PointRepr,
    curve_name: &str,
) -> Result<CompressedG2, CompressionError> {
    Compressor::new(curve_name)?.compress_g2(point)
}
