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
//! # Account ids, public keys and seeds

mod seed;
mod x_address;

pub use self::seed::{DecodedSeed, SeedType, ENTROPY_BYTES};
pub use self::x_address::{XAddress, X_ADDRESS_BYTES};

use crate::{
    codec::{Codec, VersionSpec},
    error::CodecError,
};

/// Account id size in bytes (160 bit hash)
pub const ACCOUNT_ID_BYTES: usize = 20;

/// Compressed public key size in bytes
pub const PUBLIC_KEY_BYTES: usize = 33;

/// Version of an encoded account id
pub const ACCOUNT_ID_VERSION: [u8; 1] = [0x00];

/// Version of an encoded account public key
pub const ACCOUNT_PUBLIC_VERSION: [u8; 1] = [0x23];

/// Version of an encoded node public key
pub const NODE_PUBLIC_VERSION: [u8; 1] = [0x1c];

/// Codec for the fixed purpose payloads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressCodec {
    codec: Codec,
}

impl AddressCodec {
    /// Use the specified versioned codec
    pub fn new(codec: Codec) -> AddressCodec {
        AddressCodec { codec }
    }

    /// Address codec with XRP Ledger alphabet
    pub fn xrp() -> AddressCodec {
        AddressCodec::new(Codec::xrp())
    }

    /// Address codec with Bitcoin alphabet
    pub fn bitcoin() -> AddressCodec {
        AddressCodec::new(Codec::bitcoin())
    }

    /// Underlying versioned codec
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    fn encode_fixed(&self, payload: &[u8], version: &[u8], length: usize) -> Result<String, CodecError> {
        let versions = [version];
        let spec = VersionSpec::new(&versions).with_expected_length(length);
        self.codec.encode(payload, &spec)
    }

    fn decode_fixed(&self, value: &str, version: &[u8], length: usize) -> Result<Vec<u8>, CodecError> {
        let versions = [version];
        let spec = VersionSpec::new(&versions).with_expected_length(length);
        self.codec.decode(value, &spec).map(|d| d.bytes)
    }

    /// Encode 20 bytes account id as a classic address
    pub fn encode_account_id(&self, account_id: &[u8]) -> Result<String, CodecError> {
        self.encode_fixed(account_id, &ACCOUNT_ID_VERSION, ACCOUNT_ID_BYTES)
    }

    /// Decode classic address into 20 bytes account id
    pub fn decode_account_id(&self, address: &str) -> Result<Vec<u8>, CodecError> {
        self.decode_fixed(address, &ACCOUNT_ID_VERSION, ACCOUNT_ID_BYTES)
    }

    /// Encode 33 bytes node public key
    pub fn encode_node_public(&self, key: &[u8]) -> Result<String, CodecError> {
        self.encode_fixed(key, &NODE_PUBLIC_VERSION, PUBLIC_KEY_BYTES)
    }

    /// Decode node public key
    pub fn decode_node_public(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        self.decode_fixed(value, &NODE_PUBLIC_VERSION, PUBLIC_KEY_BYTES)
    }

    /// Encode 33 bytes account public key
    pub fn encode_account_public(&self, key: &[u8]) -> Result<String, CodecError> {
        self.encode_fixed(key, &ACCOUNT_PUBLIC_VERSION, PUBLIC_KEY_BYTES)
    }

    /// Decode account public key
    pub fn decode_account_public(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        self.decode_fixed(value, &ACCOUNT_PUBLIC_VERSION, PUBLIC_KEY_BYTES)
    }

    /// Check that the value is a well-formed classic address, i.e. checksum, version and
    /// length are all valid
    pub fn is_valid_classic_address(&self, address: &str) -> bool {
        match self.decode_account_id(address) {
            Ok(_) => true,
            Err(e) => {
                debug!("Not a classic address {:?}: {}", address, e);
                false
            }
        }
    }
}

impl Default for AddressCodec {
    fn default() -> Self {
        AddressCodec::bitcoin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT_ID: &str = "1C9C902BD2408F10552509CAD5966C023084C756";
    const NODE_PUBLIC: &str = "0388E5BA87A000CB807240DF8C848EB0B5FFA5C8E5A521BC8E105C0F0A44217828";
    const ACCOUNT_PUBLIC: &str = "023693F15967AE357D0327974AD46FE3C127113B1110D6044FD41E723689F81CC6";

    #[test]
    fn encode_account_id_bitcoin() {
        let id = hex::decode(ACCOUNT_ID).unwrap();
        assert_eq!(
            AddressCodec::bitcoin().encode_account_id(&id).unwrap(),
            "13cHUa7Zw3yQKW5EdBefC11NcWXcw7eMUM"
        );
    }

    #[test]
    fn decode_account_id_bitcoin() {
        assert_eq!(
            AddressCodec::bitcoin()
                .decode_account_id("13cHUa7Zw3yQKW5EdBefC11NcWXcw7eMUM")
                .unwrap(),
            hex::decode(ACCOUNT_ID).unwrap()
        );
    }

    #[test]
    fn encode_account_id_xrp() {
        let codec = AddressCodec::xrp();
        let id = hex::decode("BA8E78626EE42C41B46D46C3048DF3A1C3C87072").unwrap();
        assert_eq!(
            codec.encode_account_id(&id).unwrap(),
            "rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErN"
        );
        assert_eq!(
            codec.decode_account_id("rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErN").unwrap(),
            id
        );
        assert_eq!(
            codec
                .encode_account_id(&hex::decode(ACCOUNT_ID).unwrap())
                .unwrap(),
            "rscH72fZAsyQKWnNdBeCUrr4cWXcAfeM7M"
        );
    }

    #[test]
    fn encode_node_public() {
        let key = hex::decode(NODE_PUBLIC).unwrap();
        let codec = AddressCodec::xrp();
        let encoded = "n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH";
        assert_eq!(codec.encode_node_public(&key).unwrap(), encoded);
        assert_eq!(codec.decode_node_public(encoded).unwrap(), key);
        assert_eq!(
            AddressCodec::bitcoin().encode_node_public(&key).unwrap(),
            "59MXXueon8UzYH8hDvMcs8BAHcqt7wWEJYiczWVb2UuYTjUxsUTH"
        );
    }

    #[test]
    fn encode_account_public() {
        let key = hex::decode(ACCOUNT_PUBLIC).unwrap();
        let codec = AddressCodec::xrp();
        let encoded = "aB44YfzW24VDEJQ2UuLPV2PvqcPCSoLnL7y5M1EzhdW4LnK5xMS3";
        assert_eq!(codec.encode_account_public(&key).unwrap(), encoded);
        assert_eq!(codec.decode_account_public(encoded).unwrap(), key);
    }

    #[test]
    fn keys_dont_mix() {
        let codec = AddressCodec::xrp();
        assert_eq!(
            codec.decode_account_public("n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH"),
            Err(CodecError::VersionInvalid)
        );
        assert_eq!(
            codec.decode_account_id("n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH"),
            Err(CodecError::VersionInvalid)
        );
    }

    #[test]
    fn fail_encode_wrong_length() {
        let codec = AddressCodec::default();
        assert_eq!(
            codec.encode_account_id(&[0u8; 19]),
            Err(CodecError::UnexpectedPayloadLength {
                expected: 20,
                actual: 19
            })
        );
        assert_eq!(
            codec.encode_node_public(&[2u8; 32]),
            Err(CodecError::UnexpectedPayloadLength {
                expected: 33,
                actual: 32
            })
        );
    }

    #[test]
    fn validate_classic_address() {
        let codec = AddressCodec::xrp();
        assert!(codec.is_valid_classic_address("rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErN"));
        assert!(!codec.is_valid_classic_address(""));
        assert!(!codec.is_valid_classic_address("rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35ErM"));
        assert!(!codec.is_valid_classic_address("rJrRMgiRgrU6hDF4pgu5DXQdWyPbY35Er"));
        // other version
        assert!(!codec.is_valid_classic_address("n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH"));
    }

    #[test]
    fn reject_any_single_char_change() {
        let codec = AddressCodec::bitcoin();
        let address = "13cHUa7Zw3yQKW5EdBefC11NcWXcw7eMUM";
        let symbols: Vec<char> = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz0OIl"
            .chars()
            .collect();
        for (i, current) in address.chars().enumerate() {
            for c in symbols.iter().filter(|c| **c != current) {
                let mut modified: Vec<char> = address.chars().collect();
                modified[i] = *c;
                let modified: String = modified.into_iter().collect();
                assert!(!codec.is_valid_classic_address(&modified), "{}", modified);
            }
        }
    }
}
