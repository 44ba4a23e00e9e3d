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
//! # Versioned Base58 codec for ledger account ids, public keys and seeds
//!
//! Payload is prefixed with version bytes, framed with a 4 bytes checksum (double SHA-256)
//! and encoded as Base58. Functions at the crate level use the Bitcoin alphabet, use
//! [`AddressCodec::xrp`] for the XRP Ledger alphabet and X-addresses.
//!
//! ```
//! let id = hex::decode("1C9C902BD2408F10552509CAD5966C023084C756").unwrap();
//! let address = xrpl_address_codec::encode_account_id(&id).unwrap();
//! assert_eq!(address, "13cHUa7Zw3yQKW5EdBefC11NcWXcw7eMUM");
//! assert!(xrpl_address_codec::is_valid_classic_address(&address));
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod address;
pub mod base58;
pub mod checksum;
pub mod codec;
pub mod error;
mod util;

pub use self::address::{
    AddressCodec, DecodedSeed, SeedType, XAddress, ACCOUNT_ID_BYTES, ENTROPY_BYTES, PUBLIC_KEY_BYTES,
};
pub use self::base58::{decode_base58, encode_base58, Alphabet, BITCOIN_ALPHABET, XRP_ALPHABET};
pub use self::codec::{Codec, Decoded, VersionSpec};
pub use self::error::CodecError;

/// Encode 20 bytes account id
pub fn encode_account_id(account_id: &[u8]) -> Result<String, CodecError> {
    AddressCodec::default().encode_account_id(account_id)
}

/// Decode account id from a classic address
pub fn decode_account_id(address: &str) -> Result<Vec<u8>, CodecError> {
    AddressCodec::default().decode_account_id(address)
}

/// Encode 33 bytes node public key
pub fn encode_node_public(key: &[u8]) -> Result<String, CodecError> {
    AddressCodec::default().encode_node_public(key)
}

/// Decode node public key
pub fn decode_node_public(value: &str) -> Result<Vec<u8>, CodecError> {
    AddressCodec::default().decode_node_public(value)
}

/// Encode 33 bytes account public key
pub fn encode_account_public(key: &[u8]) -> Result<String, CodecError> {
    AddressCodec::default().encode_account_public(key)
}

/// Decode account public key
pub fn decode_account_public(value: &str) -> Result<Vec<u8>, CodecError> {
    AddressCodec::default().decode_account_public(value)
}

/// Encode 16 bytes of entropy as a seed
pub fn encode_seed(entropy: &[u8], kind: SeedType) -> Result<String, CodecError> {
    AddressCodec::default().encode_seed(entropy, kind)
}

/// Decode seed entropy and its type
pub fn decode_seed(seed: &str) -> Result<DecodedSeed, CodecError> {
    AddressCodec::default().decode_seed(seed)
}

/// Check that the value is a valid classic address. Never fails, any decoding error means
/// it's not an address.
pub fn is_valid_classic_address(address: &str) -> bool {
    AddressCodec::default().is_valid_classic_address(address)
}
