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
//! # X-address, an account id with an optional destination tag
//!
//! Encoded as checked data without version:
//! `PREFIX (2) | ACCOUNT_ID (20) | FLAG (1) | TAG (4, little endian) | RESERVED (4)`.
//! Flag is `1` when tag is present, reserved bytes are always zero.

use super::{AddressCodec, ACCOUNT_ID_BYTES};
use crate::{error::CodecError, util::to_arr};
use byteorder::{ByteOrder, LittleEndian};

/// Size of decoded X-address, without checksum
pub const X_ADDRESS_BYTES: usize = 31;

const MAINNET_PREFIX: [u8; 2] = [0x05, 0x44];
const TESTNET_PREFIX: [u8; 2] = [0x04, 0x93];

/// Account id with a destination tag and a network flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XAddress {
    /// 20 bytes account id
    pub account_id: [u8; ACCOUNT_ID_BYTES],
    /// Destination tag
    pub tag: Option<u32>,
    /// `true` for a test network address
    pub test: bool,
}

impl AddressCodec {
    /// Encode account id with an optional tag as X-address
    pub fn encode_x_address(&self, account_id: &[u8], tag: Option<u32>, test: bool) -> Result<String, CodecError> {
        if account_id.len() != ACCOUNT_ID_BYTES {
            return Err(CodecError::UnexpectedPayloadLength {
                expected: ACCOUNT_ID_BYTES,
                actual: account_id.len(),
            });
        }
        let mut data = [0u8; X_ADDRESS_BYTES];
        data[..2].copy_from_slice(if test { &TESTNET_PREFIX } else { &MAINNET_PREFIX });
        data[2..22].copy_from_slice(account_id);
        if let Some(tag) = tag {
            data[22] = 1;
            LittleEndian::write_u32(&mut data[23..27], tag);
        }
        Ok(self.codec().encode_checked(&data))
    }

    /// Decode X-address
    pub fn decode_x_address(&self, value: &str) -> Result<XAddress, CodecError> {
        let data = self.codec().decode_checked(value)?;
        if data.len() != X_ADDRESS_BYTES {
            return Err(CodecError::InvalidXAddress(format!(
                "unexpected length {}",
                data.len()
            )));
        }
        let test = if data[..2] == MAINNET_PREFIX {
            false
        } else if data[..2] == TESTNET_PREFIX {
            true
        } else {
            return Err(CodecError::InvalidXAddress("bad prefix".to_string()));
        };
        let tag = decode_tag(&data[22..])?;
        Ok(XAddress {
            account_id: to_arr(&data[2..22]),
            tag,
            test,
        })
    }

    /// Convert classic address into X-address
    pub fn classic_address_to_x_address(&self, classic: &str, tag: Option<u32>, test: bool) -> Result<String, CodecError> {
        let account_id = self.decode_account_id(classic)?;
        self.encode_x_address(&account_id, tag, test)
    }

    /// Convert X-address into classic address, returns it with the tag and the network flag
    pub fn x_address_to_classic_address(&self, value: &str) -> Result<(String, Option<u32>, bool), CodecError> {
        let x = self.decode_x_address(value)?;
        let classic = self.encode_account_id(&x.account_id)?;
        Ok((classic, x.tag, x.test))
    }

    /// Check that the value is a valid X-address
    pub fn is_valid_x_address(&self, value: &str) -> bool {
        match self.decode_x_address(value) {
            Ok(_) => true,
            Err(e) => {
                debug!("Not an X-address {:?}: {}", value, e);
                false
            }
        }
    }
}

fn decode_tag(buf: &[u8]) -> Result<Option<u32>, CodecError> {
    let flag = buf[0];
    let tag = LittleEndian::read_u32(&buf[1..5]);
    // 64 bit tags are reserved, but not supported
    if buf[5..9].iter().any(|b| *b != 0) {
        return Err(CodecError::UnsupportedXAddress);
    }
    match flag {
        0 if tag == 0 => Ok(None),
        1 => Ok(Some(tag)),
        _ => Err(CodecError::UnsupportedXAddress),
    }
}
