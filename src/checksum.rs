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
//! # Checksum framing (first 4 bytes of double SHA-256)

use sha2::{Digest, Sha256};

/// Checksum size in bytes
pub const CHECKSUM_BYTES: usize = 4;

/// Calculate `SHA256(SHA256(data))`
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(second.as_slice());
    result
}

/// Checksum of the data
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_BYTES] {
    let hash = double_sha256(data);
    let mut result = [0u8; CHECKSUM_BYTES];
    result.copy_from_slice(&hash[..CHECKSUM_BYTES]);
    result
}

/// Copy of the data with its checksum appended
pub fn append_checksum(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() + CHECKSUM_BYTES);
    result.extend_from_slice(data);
    result.extend_from_slice(&checksum(data));
    result
}

/// Check that the last 4 bytes are the checksum of everything before them
pub fn verify_checksum(data: &[u8]) -> bool {
    if data.len() < CHECKSUM_BYTES {
        return false;
    }
    let (body, expected) = data.split_at(data.len() - CHECKSUM_BYTES);
    checksum(body) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_empty() {
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(hex::encode(checksum(b"")), "5df6e0e2");
    }

    #[test]
    fn append_to_data() {
        let data = hex::decode("00ff").unwrap();
        let framed = append_checksum(&data);
        assert_eq!(framed.len(), 6);
        assert_eq!(&framed[..2], data.as_slice());
        assert_eq!(&framed[2..], &checksum(&data));
    }

    #[test]
    fn verify_valid() {
        let framed = append_checksum(b"123456789");
        assert!(verify_checksum(&framed));
        // checksum of nothing
        assert!(verify_checksum(&hex::decode("5df6e0e2").unwrap()));
    }

    #[test]
    fn reject_modified() {
        let framed = append_checksum(b"123456789");
        for i in 0..framed.len() {
            for bit in 0..8 {
                let mut copy = framed.clone();
                copy[i] ^= 1 << bit;
                assert!(!verify_checksum(&copy), "byte {} bit {}", i, bit);
            }
        }
    }

    #[test]
    fn reject_short() {
        assert!(!verify_checksum(&[]));
        assert!(!verify_checksum(&[0x5d, 0xf6, 0xe0]));
    }
}
