use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{
    compress::Compressor,
    compressed::{CompressedG1, CompressedG2},
    config::CompressionConfig,
    errors::CompressionError,
    points::{G1PointRepr, G2PointRepr, IcEntry},
};

/// A Groth16 proof as written by snarkjs (`proof.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub pi_a: G1PointRepr,
    pub pi_b: G2PointRepr,
    pub pi_c: G1PointRepr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

/// A Groth16 verification key as written by snarkjs (`verification_key.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKey {
    pub vk_alpha_1: G1PointRepr,
    pub vk_beta_2: G2PointRepr,
    pub vk_gamma_2: G2PointRepr,
    pub vk_delta_2: G2PointRepr,
    #[serde(rename = "IC")]
    pub ic: Vec<IcEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(rename = "nPublic", default, skip_serializing_if = "Option::is_none")]
    pub n_public: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedProof {
    pub pi_a: CompressedG1,
    pub pi_b: CompressedG2,
    pub pi_c: CompressedG1,
}

/// The compressed key. `IC` keeps the input length; entries that failed to
/// compress are `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedVerificationKey {
    pub vk_alpha_1: CompressedG1,
    pub vk_beta_2: CompressedG2,
    pub vk_gamma_2: CompressedG2,
    pub vk_delta_2: CompressedG2,
    #[serde(rename = "IC")]
    pub ic: Vec<Option<CompressedG1>>,
}

impl Compressor {
    /// Compresses the three proof points concurrently. Any failing point fails
    /// the whole proof.
    pub fn compress_proof(&self, proof: &Proof) -> Result<CompressedProof, CompressionError> {
        let ((pi_a, pi_c), pi_b) = rayon::join(
            || {
                rayon::join(
                    || self.compress_g1(&proof.pi_a),
                    || self.compress_g1(&proof.pi_c),
                )
            },
            || self.compress_g2(&proof.pi_b),
        );
        Ok(CompressedProof {
            pi_a: pi_a?,
            pi_b: pi_b?,
            pi_c: pi_c?,
        })
    }

    /// Compresses a verification key.
    ///
    /// The four fixed points propagate their failures. Each `IC` entry is
    /// isolated instead: an entry that is malformed or fails to compress is
    /// logged and replaced by `None` while the rest of the key is still
    /// produced.
    pub fn compress_verification_key(
        &self,
        vk: &VerificationKey,
    ) -> Result<CompressedVerificationKey, CompressionError> {
        if let Some(n_public) = vk.n_public {
            if vk.ic.len().checked_sub(1) != Some(n_public) {
                warn!(
                    n_public,
                    ic_len = vk.ic.len(),
                    "verification key IC length does not match nPublic + 1"
                );
            }
        }

        let (((alpha, beta), (gamma, delta)), ic) = rayon::join(
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || self.compress_g1(&vk.vk_alpha_1),
                            || self.compress_g2(&vk.vk_beta_2),
                        )
                    },
                    || {
                        rayon::join(
                            || self.compress_g2(&vk.vk_gamma_2),
                            || self.compress_g2(&vk.vk_delta_2),
                        )
                    },
                )
            },
            || self.compress_g1_entries(&vk.ic, IcEntry::as_point),
        );

        let ic = ic
            .into_iter()
            .map(|entry| match entry {
                Ok(point) => Some(point),
                Err(e) => {
                    warn!(error = %e, "replacing IC entry with null");
                    None
                },
            })
            .collect();

        Ok(CompressedVerificationKey {
            vk_alpha_1: alpha?,
            vk_beta_2: beta?,
            vk_gamma_2: gamma?,
            vk_delta_2: delta?,
            ic,
        })
    }
}

/// Compresses a proof on the named curve.
pub fn compress_proof(
    proof: &Proof,
    curve_name: &str,
) -> Result<CompressedProof, CompressionError> {
    Compressor::new(curve_name)?.compress_proof(proof)
}

/// Compresses a verification key on the named curve.
pub fn compress_verification_key(
    vk: &VerificationKey,
    curve_name: &str,
) -> Result<CompressedVerificationKey, CompressionError> {
    Compressor::new(curve_name)?.compress_verification_key(vk)
}

/// Either snarkjs Groth16 artifact, detected from its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Groth16Artifact {
    Proof(Proof),
    VerificationKey(VerificationKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressedArtifact {
    Proof(CompressedProof),
    VerificationKey(CompressedVerificationKey),
}

impl Groth16Artifact {
    /// Parses a proof (an object with `pi_a`) or a verification key (an
    /// object with `vk_alpha_1`). Errors name the artifact the input looked
    /// like and the field that failed.
    pub fn from_json(input: &str) -> Result<Self, CompressionError> {
        let value: Value = serde_json::from_str(input)?;
        if value.get("pi_a").is_some() {
            serde_json::from_value(value)
                .map(Groth16Artifact::Proof)
                .map_err(|e| {
                    CompressionError::SerializationError(format!("invalid Groth16 proof: {}", e))
                })
        } else if value.get("vk_alpha_1").is_some() {
            serde_json::from_value(value)
                .map(Groth16Artifact::VerificationKey)
                .map_err(|e| {
                    CompressionError::SerializationError(format!(
                        "invalid Groth16 verification key: {}",
                        e
                    ))
                })
        } else {
            Err(CompressionError::SerializationError(
                "input is neither a Groth16 proof nor a verification key: \
                 expected a pi_a or vk_alpha_1 field"
                    .to_string(),
            ))
        }
    }

    /// The curve the artifact declares for itself, if any.
    pub fn curve(&self) -> Option<&str> {
        match self {
            Groth16Artifact::Proof(proof) => proof.curve.as_deref(),
            Groth16Artifact::VerificationKey(vk) => vk.curve.as_deref(),
        }
    }

    /// Compresses on the artifact's own curve when it declares one, otherwise
    /// on the configured curve.
    pub fn compress(
        &self,
        config: &CompressionConfig,
    ) -> Result<CompressedArtifact, CompressionError> {
        let mut config = config.clone();
        if let Some(curve) = self.curve() {
            config.curve = curve.to_string();
        }
        let compressor = Compressor::from_config(&config)?;
        match self {
            Groth16Artifact::Proof(proof) => {
                compressor.compress_proof(proof).map(CompressedArtifact::Proof)
            },
            Groth16Artifact::VerificationKey(vk) => compressor
                .compress_verification_key(vk)
                .map(CompressedArtifact::VerificationKey),
        }
    }
}

/// Reads a snarkjs proof or verification key and returns its compressed form
/// as pretty-printed JSON.
pub fn compress_artifact_json(
    input: &str,
    config: &CompressionConfig,
) -> Result<String, CompressionError> {
    let compressed = Groth16Artifact::from_json(input)?.compress(config)?;
    Ok(serde_json::to_string_pretty(&compressed)?)
}
