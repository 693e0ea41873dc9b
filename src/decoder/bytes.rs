use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::DecodeErrorKind;

/// Максимум значащих байт, который помещается в u128.
const MAX_SIGNIFICANT_BYTES: usize = 16;

/// Беззнаковое целое, старший байт первым (MSB first).
/// Ведущие нулевые байты не считаются: "0000...01" любой длины читается как 1.
pub fn read_be(bytes: &[u8]) -> Result<u128, DecodeErrorKind> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.is_empty() {
        return Ok(0);
    }
    if significant.len() > MAX_SIGNIFICANT_BYTES {
        return Err(DecodeErrorKind::Overflow);
    }
    Ok(BigEndian::read_uint128(significant, significant.len()))
}

/// То же, но байты идут в обратном порядке (младший первым).
pub fn read_le(bytes: &[u8]) -> Result<u128, DecodeErrorKind> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let significant = &bytes[..end];
    if significant.is_empty() {
        return Ok(0);
    }
    if significant.len() > MAX_SIGNIFICANT_BYTES {
        return Err(DecodeErrorKind::Overflow);
    }
    Ok(LittleEndian::read_uint128(significant, significant.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_32bit() {
        assert_eq!(read_be(&[0x65, 0x53, 0xF1, 0x00]), Ok(0x6553_F100));
    }

    #[test]
    fn little_endian_reverses_whole_bytes() {
        assert_eq!(read_le(&[0x00, 0xF1, 0x53, 0x65]), Ok(0x6553_F100));
        assert_eq!(read_le(&[0x65, 0x53, 0xF1, 0x00]), Ok(0x00F1_5365));
    }

    #[test]
    fn zeros() {
        assert_eq!(read_be(&[0, 0, 0]), Ok(0));
        assert_eq!(read_le(&[0]), Ok(0));
    }

    #[test]
    fn padding_zeros_do_not_overflow() {
        let mut be = vec![0u8; 30];
        be.push(0x01);
        assert_eq!(read_be(&be), Ok(1));

        let mut le = vec![0x01];
        le.extend(std::iter::repeat(0u8).take(30));
        assert_eq!(read_le(&le), Ok(1));
    }

    #[test]
    fn more_than_128_bits_overflows() {
        let wide = vec![0xFFu8; 17];
        assert_eq!(read_be(&wide), Err(DecodeErrorKind::Overflow));
        assert_eq!(read_le(&wide), Err(DecodeErrorKind::Overflow));
        assert_eq!(read_be(&[0xFF; 16]), Ok(u128::MAX));
    }
}
