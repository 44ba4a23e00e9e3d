/*
Copyright 2023 EmeraldPay, Inc

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Seed (16 bytes of entropy) encoding

use super::AddressCodec;
use crate::{codec::VersionSpec, error::CodecError, util::to_arr};
use std::{fmt, str::FromStr};

/// Seed entropy size in bytes
pub const ENTROPY_BYTES: usize = 16;

const SECP256K1_VERSION: &[u8] = &[0x21];
const ED25519_VERSION: &[u8] = &[0x01, 0xe1, 0x4b];

const SEED_VERSIONS: &[&[u8]] = &[SECP256K1_VERSION, ED25519_VERSION];
const SEED_TYPES: &[(SeedType, &[u8])] = &[
    (SeedType::Secp256k1, SECP256K1_VERSION),
    (SeedType::Ed25519, ED25519_VERSION),
];

/// Type of a key derived from the seed. It defines the version of the encoded seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedType {
    /// ECDSA on secp256k1 curve, encoded seed starts with `s`
    Secp256k1,
    /// EdDSA on Curve25519, encoded seed starts with `sEd`
    Ed25519,
}

impl SeedType {
    /// Version bytes used for the seed type
    pub fn version(&self) -> &'static [u8] {
        match self {
            SeedType::Secp256k1 => SECP256K1_VERSION,
            SeedType::Ed25519 => ED25519_VERSION,
        }
    }
}

impl Default for SeedType {
    fn default() -> Self {
        SeedType::Secp256k1
    }
}

impl fmt::Display for SeedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeedType::Secp256k1 => write!(f, "secp256k1"),
            SeedType::Ed25519 => write!(f, "ed25519"),
        }
    }
}

impl FromStr for SeedType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "secp256k1" => Ok(SeedType::Secp256k1),
            "ed25519" => Ok(SeedType::Ed25519),
            _ => Err(CodecError::UnsupportedSeedType(s.to_string())),
        }
    }
}

/// Decoded seed entropy with its type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedSeed {
    /// Entropy
    pub bytes: [u8; ENTROPY_BYTES],
    /// Type defined by the version of the encoded seed
    pub kind: SeedType,
}

impl AddressCodec {
    /// Encode 16 bytes of entropy as a seed of the specified type
    pub fn encode_seed(&self, entropy: &[u8], kind: SeedType) -> Result<String, CodecError> {
        if entropy.len() != ENTROPY_BYTES {
            return Err(CodecError::InvalidEntropyLength(entropy.len()));
        }
        let versions = [kind.version()];
        let spec = VersionSpec::typed(&versions, SEED_TYPES).with_expected_length(ENTROPY_BYTES);
        self.codec().encode(entropy, &spec)
    }

    /// Decode a seed of any of the known types
    pub fn decode_seed(&self, seed: &str) -> Result<DecodedSeed, CodecError> {
        let spec = VersionSpec::typed(SEED_VERSIONS, SEED_TYPES).with_expected_length(ENTROPY_BYTES);
        let decoded = self.codec().decode(seed, &spec)?;
        // all seed versions are in the table
        let kind = decoded.kind.ok_or(CodecError::VersionInvalid)?;
        Ok(DecodedSeed {
            bytes: to_arr(&decoded.bytes),
            kind,
        })
    }
}
