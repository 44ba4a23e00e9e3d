//! # Util functions module

/// Convert a slice into array
pub fn to_arr<A, T>(slice: &[T]) -> A
where
    A: AsMut<[T]> + Default,
    T: Clone,
{
    let mut arr = Default::default();
    <A as AsMut<[T]>>::as_mut(&mut arr).clone_from_slice(slice);
    arr
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn to_16bytes(hex: &str) -> [u8; 16] {
        to_arr(&hex::decode(hex).unwrap())
    }

    pub fn to_20bytes(hex: &str) -> [u8; 20] {
        to_arr(&hex::decode(hex).unwrap())
    }

    #[test]
    fn should_convert_zero_string_into_16bytes() {
        assert_eq!(to_16bytes("00000000000000000000000000000000"), [0u8; 16]);
    }

    #[test]
    fn should_convert_account_into_20bytes() {
        assert_eq!(
            to_20bytes("1c9c902bd2408f10552509cad5966c023084c756"),
            [
                0x1c, 0x9c, 0x90, 0x2b, 0xd2, 0x40, 0x8f, 0x10, 0x55, 0x25, 0x09, 0xca, 0xd5, 0x96,
                0x6c, 0x02, 0x30, 0x84, 0xc7, 0x56
            ]
        );
    }
}
