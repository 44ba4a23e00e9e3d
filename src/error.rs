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
//! # Codec errors

use std::{error, fmt};

/// Errors raised by the base58 engine, the versioned codec and the address codecs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A symbol outside of the alphabet, with its char position in the input
    InvalidCharacter(char, usize),
    /// Decoded data is too short to hold a version and a checksum
    InvalidInputSize(usize),
    /// Several versions are allowed, but the payload length is not specified
    ExpectedLengthRequired,
    /// Version bytes don't match any of the allowed versions
    VersionInvalid,
    /// Checksum doesn't match the data
    ChecksumInvalid,
    /// Payload length doesn't match the expected length on encode
    UnexpectedPayloadLength {
        /// required payload length
        expected: usize,
        /// actual payload length
        actual: usize,
    },
    /// Seed entropy is not 16 bytes
    InvalidEntropyLength(usize),
    /// Unknown seed type name
    UnsupportedSeedType(String),
    /// Malformed X-address
    InvalidXAddress(String),
    /// X-address uses flags or a tag size this codec can't represent
    UnsupportedXAddress,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CodecError::InvalidCharacter(c, pos) => {
                write!(f, "InvalidCharacter: '{}' at position {}", c, pos)
            }
            CodecError::InvalidInputSize(len) => write!(
                f,
                "invalid_input_size: decoded data must have length >= 5, got {}",
                len
            ),
            CodecError::ExpectedLengthRequired => write!(
                f,
                "expected_length_required: a single version must be provided, or expected length must be specified"
            ),
            CodecError::VersionInvalid => write!(
                f,
                "version_invalid: version bytes do not match any of the provided version(s)"
            ),
            CodecError::ChecksumInvalid => write!(f, "checksum_invalid"),
            CodecError::UnexpectedPayloadLength { expected, actual } => write!(
                f,
                "unexpected_payload_length: payload length {} does not match expected length {}",
                actual, expected
            ),
            CodecError::InvalidEntropyLength(_) => write!(f, "entropy must have length 16"),
            CodecError::UnsupportedSeedType(ref name) => {
                write!(f, "Unsupported seed type: {}", name)
            }
            CodecError::InvalidXAddress(ref msg) => write!(f, "Invalid X-address: {}", msg),
            CodecError::UnsupportedXAddress => write!(f, "Unsupported X-address"),
        }
    }
}

impl error::Error for CodecError {}
