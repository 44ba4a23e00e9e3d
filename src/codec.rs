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
//! # Versioned payload codec
//!
//! Encoded data layout is `VERSION | PAYLOAD | CHECKSUM`, where checksum is 4 bytes of double
//! SHA-256 of `VERSION | PAYLOAD`, and the whole sequence is encoded as Base58.

use crate::{
    base58::{Alphabet, BITCOIN_ALPHABET, XRP_ALPHABET},
    checksum::{append_checksum, verify_checksum, CHECKSUM_BYTES},
    error::CodecError,
};

/// Minimal decoded size, at least one version byte and the checksum
pub const MIN_DECODED_BYTES: usize = 1 + CHECKSUM_BYTES;

/// Allowed versions of an encoded payload.
///
/// Encoding always uses the first version. When more than one version is allowed the payload
/// length must be specified, because that's the only way to find where the version ends.
/// `kinds` optionally maps a type tag to its version bytes, and the decoded value gets the tag
/// of the version it matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionSpec<'a, T = ()> {
    /// Candidate version prefixes
    pub versions: &'a [&'a [u8]],
    /// Required payload length, without version and checksum
    pub expected_length: Option<usize>,
    /// Type tag to version bytes
    pub kinds: &'a [(T, &'a [u8])],
}

/// Result of decoding a versioned payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded<T = ()> {
    /// Version bytes matched by the data
    pub version: Vec<u8>,
    /// Payload
    pub bytes: Vec<u8>,
    /// Type tag of the matched version, if the spec has a type table
    pub kind: Option<T>,
}

impl<'a> VersionSpec<'a, ()> {
    /// Spec without type tags
    pub fn new(versions: &'a [&'a [u8]]) -> Self {
        VersionSpec {
            versions,
            expected_length: None,
            kinds: &[],
        }
    }
}

impl<'a, T: Copy> VersionSpec<'a, T> {
    /// Spec with a table of type tags
    pub fn typed(versions: &'a [&'a [u8]], kinds: &'a [(T, &'a [u8])]) -> Self {
        VersionSpec {
            versions,
            expected_length: None,
            kinds,
        }
    }

    /// Require a payload of the specified length
    pub fn with_expected_length(self, length: usize) -> Self {
        VersionSpec {
            expected_length: Some(length),
            ..self
        }
    }

    /// Size of the version prefix in the decoded data
    fn version_length(&self, decoded: usize) -> Result<usize, CodecError> {
        match self.versions {
            [] => Err(CodecError::VersionInvalid),
            [single] => Ok(single.len()),
            _ => {
                let expected = self
                    .expected_length
                    .ok_or(CodecError::ExpectedLengthRequired)?;
                (decoded - CHECKSUM_BYTES)
                    .checked_sub(expected)
                    .ok_or(CodecError::VersionInvalid)
            }
        }
    }

    fn kind_of(&self, version: &[u8]) -> Option<T> {
        self.kinds
            .iter()
            .find(|(_, v)| *v == version)
            .map(|(kind, _)| *kind)
    }
}

/// Versioned codec bound to an alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codec {
    alphabet: &'static Alphabet,
}

impl Codec {
    /// Create codec using the specified alphabet
    pub fn new(alphabet: &'static Alphabet) -> Codec {
        Codec { alphabet }
    }

    /// Codec with XRP Ledger alphabet
    pub fn xrp() -> Codec {
        Codec::new(&XRP_ALPHABET)
    }

    /// Codec with Bitcoin alphabet
    pub fn bitcoin() -> Codec {
        Codec::new(&BITCOIN_ALPHABET)
    }

    /// Alphabet used by the codec
    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Prefix the payload with the first version of the spec, add a checksum and encode it
    pub fn encode<T: Copy>(&self, payload: &[u8], spec: &VersionSpec<T>) -> Result<String, CodecError> {
        if let Some(expected) = spec.expected_length {
            if payload.len() != expected {
                return Err(CodecError::UnexpectedPayloadLength {
                    expected,
                    actual: payload.len(),
                });
            }
        }
        let version = spec.versions.first().ok_or(CodecError::VersionInvalid)?;
        let mut data = Vec::with_capacity(version.len() + payload.len());
        data.extend_from_slice(version);
        data.extend_from_slice(payload);
        Ok(self.encode_checked(&data))
    }

    /// Decode the value and verify its checksum, version and length
    pub fn decode<T: Copy>(&self, value: &str, spec: &VersionSpec<T>) -> Result<Decoded<T>, CodecError> {
        let data = self.decode_checked(value)?;
        // checksum is verified, only the body is left
        let decoded = data.len() + CHECKSUM_BYTES;
        let version_length = spec.version_length(decoded)?;
        if version_length > data.len() {
            return Err(CodecError::VersionInvalid);
        }
        let (version, payload) = data.split_at(version_length);
        let matched = spec
            .versions
            .iter()
            .find(|v| **v == version)
            .ok_or(CodecError::VersionInvalid)?;
        if let Some(expected) = spec.expected_length {
            // a valid version with a different length is treated as a different version
            if payload.len() != expected {
                debug!(
                    "Payload length {} for version {} doesn't match {}",
                    payload.len(),
                    hex::encode(version),
                    expected
                );
                return Err(CodecError::VersionInvalid);
            }
        }
        Ok(Decoded {
            version: matched.to_vec(),
            bytes: payload.to_vec(),
            kind: spec.kind_of(matched),
        })
    }

    /// Encode data with a checksum, but without any version
    pub fn encode_checked(&self, data: &[u8]) -> String {
        self.alphabet.encode(&append_checksum(data))
    }

    /// Decode data and verify its checksum. Returns data without the checksum.
    pub fn decode_checked(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        let mut data = self.alphabet.decode(value)?;
        if data.len() < MIN_DECODED_BYTES {
            return Err(CodecError::InvalidInputSize(data.len()));
        }
        if !verify_checksum(&data) {
            trace!("Invalid checksum for {}", value);
            return Err(CodecError::ChecksumInvalid);
        }
        data.truncate(data.len() - CHECKSUM_BYTES);
        Ok(data)
    }

    /// Plain Base58 encoding with the codec alphabet
    pub fn encode_raw(&self, data: &[u8]) -> String {
        self.alphabet.encode(data)
    }

    /// Plain Base58 decoding with the codec alphabet
    pub fn decode_raw(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        self.alphabet.decode(value)
    }
}
