//! Preenchimento word-a-word

use crate::config::LANE_MASK;
use crate::error::{ensure_capacity, MemResult};
use crate::ops::word::{self, WordViewMut};

/// Replica o byte baixo de `pattern` nos quatro lanes de uma word.
///
/// Apenas os 8 bits baixos contam (mesmo truncamento do memset da libc).
/// Padrão zero já é a word zero e pula a composição.
#[inline(always)]
pub const fn broadcast(pattern: u32) -> u32 {
    let mut value = pattern & LANE_MASK;
    if value != 0 {
        value |= value << 8;
        value |= value << 16;
    }
    value
}

/// Preenche os primeiros `len` bytes de `dst` com `pattern` truncado a 8
/// bits e devolve `dst`.
///
/// # Erros
/// `CapacityExceeded` se `len` for maior que `dst`.
pub fn fill(dst: &mut [u8], pattern: u32, len: usize) -> MemResult<&mut [u8]> {
    ensure_capacity(len, dst.len())?;

    fill_unchecked_len(dst, pattern, len);
    Ok(dst)
}

#[inline(always)]
pub(crate) fn fill_unchecked_len(dst: &mut [u8], pattern: u32, len: usize) {
    let value = broadcast(pattern);
    let mut to = WordViewMut::new(dst, len);

    for chunk in to.by_ref() {
        word::store(chunk, value);
    }

    for b in to.into_remainder() {
        *b = value as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_truncates_to_low_byte() {
        assert_eq!(broadcast(0x00), 0x0000_0000);
        assert_eq!(broadcast(0xFF), 0xFFFF_FFFF);
        assert_eq!(broadcast(0x1FF), 0xFFFF_FFFF);
        assert_eq!(broadcast(0x1FFFF), 0xFFFF_FFFF);
        assert_eq!(broadcast(0x5A), 0x5A5A_5A5A);
        // Byte baixo zero com bits altos setados ainda é zero
        assert_eq!(broadcast(0x0100), 0);
        assert_eq!(broadcast(0xABCD_EF12), 0x1212_1212);
    }

    #[test]
    fn test_fill_five_bytes() {
        let mut buf = [0u8; 5];
        fill(&mut buf, 0xFF, 5).unwrap();
        assert_eq!(buf, [0xFF; 5]);
    }

    #[test]
    fn test_fill_partial_leaves_tail() {
        let mut buf = [0u8; 10];
        fill(&mut buf, 0x1FF, 7).unwrap();
        assert_eq!(&buf[..7], &[0xFF; 7]);
        assert_eq!(&buf[7..], &[0u8; 3]);
    }

    #[test]
    fn test_fill_rejects_oversized_len() {
        let mut buf = [0u8; 3];
        assert!(fill(&mut buf, 1, 4).is_err());
        assert_eq!(buf, [0u8; 3]);
    }
}
