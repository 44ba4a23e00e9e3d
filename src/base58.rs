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
//! # Base58 encoding over a configurable alphabet
//!
//! Data is treated as a big-endian unsigned integer. Leading zero bytes have no numeric
//! value, so each of them is carried as a separate "zero" symbol (the first symbol of
//! the alphabet).

use crate::error::CodecError;
use num_bigint::BigUint;
use std::fmt;

/// Number of symbols in a Base58 alphabet
pub const BASE: u32 = 58;

const NO_DIGIT: u8 = 0xff;

/// Ordered set of 58 ASCII symbols with a reverse lookup table
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 58],
    digits: [u8; 128],
}

/// Alphabet used by Bitcoin addresses
pub static BITCOIN_ALPHABET: Alphabet =
    Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// Alphabet used by the XRP Ledger, classic addresses start with `r`
pub static XRP_ALPHABET: Alphabet =
    Alphabet::new(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

impl Alphabet {
    /// Build an alphabet and its lookup table. Panics (at compile time for a `static`) if
    /// symbols are not unique ASCII characters.
    pub const fn new(symbols: &[u8; 58]) -> Alphabet {
        let mut digits = [NO_DIGIT; 128];
        let mut i = 0;
        while i < symbols.len() {
            let c = symbols[i];
            if c >= 128 {
                panic!("base58 alphabet must be ascii");
            }
            if digits[c as usize] != NO_DIGIT {
                panic!("base58 alphabet has duplicate symbols");
            }
            digits[c as usize] = i as u8;
            i += 1;
        }
        Alphabet {
            symbols: *symbols,
            digits,
        }
    }

    /// Symbol for digit zero, used for leading zero bytes
    pub fn zero(&self) -> char {
        self.symbols[0] as char
    }

    /// Digit value of a symbol, `None` if it's not part of the alphabet
    pub fn digit(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.digits[c as usize] {
            NO_DIGIT => None,
            d => Some(d),
        }
    }

    /// Symbol for a digit value (0..57)
    pub fn symbol(&self, digit: u8) -> char {
        self.symbols[digit as usize] as char
    }

    /// Encode bytes into a base58 string
    pub fn encode(&self, data: &[u8]) -> String {
        let zeroes = data.iter().take_while(|b| **b == 0).count();
        let mut result = String::with_capacity(data.len() * 138 / 100 + 1);
        for _ in 0..zeroes {
            result.push(self.zero());
        }
        let rest = &data[zeroes..];
        if !rest.is_empty() {
            let value = BigUint::from_bytes_be(rest);
            for d in value.to_radix_be(BASE) {
                result.push(self.symbol(d));
            }
        }
        result
    }

    /// Decode a base58 string into bytes
    pub fn decode(&self, value: &str) -> Result<Vec<u8>, CodecError> {
        let mut zeroes = 0;
        let mut leading = true;
        let mut digits = Vec::with_capacity(value.len());
        for (pos, c) in value.chars().enumerate() {
            let d = self
                .digit(c)
                .ok_or(CodecError::InvalidCharacter(c, pos))?;
            if leading && d == 0 {
                zeroes += 1;
            } else {
                leading = false;
                digits.push(d);
            }
        }
        let mut result = vec![0u8; zeroes];
        if !digits.is_empty() {
            // all digits are validated against the alphabet, so always below the radix
            let value = BigUint::from_radix_be(&digits, BASE)
                .ok_or(CodecError::InvalidCharacter(self.zero(), zeroes))?;
            result.extend_from_slice(&value.to_bytes_be());
        }
        Ok(result)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Alphabet({})", String::from_utf8_lossy(&self.symbols))
    }
}

/// Encode bytes with the Bitcoin alphabet
pub fn encode_base58(data: &[u8]) -> String {
    BITCOIN_ALPHABET.encode(data)
}

/// Decode a string with the Bitcoin alphabet
pub fn decode_base58(value: &str) -> Result<Vec<u8>, CodecError> {
    BITCOIN_ALPHABET.decode(value)
}
