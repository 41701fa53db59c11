//! Comparação de três vias word-a-word
//!
//! Words iguais são puladas de 4 em 4 bytes. Na primeira word diferente a
//! ordem é decidida pelo primeiro byte diferente (em ordem de memória), e
//! não pelo valor numérico da word, para manter a semântica do memcmp em
//! qualquer endianness.

use core::cmp::Ordering;

use crate::error::{ensure_capacity, MemError, MemResult};
use crate::ops::scan::length;
use crate::ops::word::{self, WordView};

/// Compara os primeiros `len` bytes de `a` e `b`.
///
/// Se `a` e `b` são o mesmo buffer (mesmo endereço base) retorna `Equal`
/// sem ler nenhum byte.
///
/// # Erros
/// `CapacityExceeded` se `len` for maior que algum dos buffers.
pub fn compare_bytes(a: &[u8], b: &[u8], len: usize) -> MemResult<Ordering> {
    ensure_capacity(len, a.len())?;
    ensure_capacity(len, b.len())?;

    if core::ptr::eq(a.as_ptr(), b.as_ptr()) {
        return Ok(Ordering::Equal);
    }

    Ok(compare_unchecked_len(a, b, len))
}

#[inline(always)]
pub(crate) fn compare_unchecked_len(a: &[u8], b: &[u8], len: usize) -> Ordering {
    let mut left = WordView::new(a, len);
    let mut right = WordView::new(b, len);

    for (x, y) in left.by_ref().zip(right.by_ref()) {
        if x != y {
            return order_word(x, y);
        }
    }

    for (x, y) in left.remainder().iter().zip(right.remainder()) {
        if x != y {
            return x.cmp(y);
        }
    }

    Ordering::Equal
}

/// Ordena duas words diferentes pelo primeiro lane diferente.
#[inline(always)]
pub fn order_word(x: u32, y: u32) -> Ordering {
    // Lane mais baixo com bit diferente = primeiro byte diferente na memória
    let lane = ((x ^ y).trailing_zeros() / 8) as usize;
    word::lane(x, lane).cmp(&word::lane(y, lane))
}

/// Compara duas strings terminadas em nulo.
///
/// Para no primeiro byte diferente ou no terminador de qualquer uma das
/// duas: uma string que é prefixo própria da outra ordena como `Less`.
/// Internamente compara `length(a) + 1` bytes (terminador incluso) na
/// passada de words.
///
/// # Erros
/// `MissingTerminator` se `a` não tem terminador, ou se `b` acaba igual a
/// `a` sem ter terminador.
pub fn compare_strings(a: &[u8], b: &[u8]) -> MemResult<Ordering> {
    let span = length(a)? + 1;
    let len = span.min(b.len());

    // Mesmo endereço só decide se `b` alcança o terminador de `a`
    if len == span && core::ptr::eq(a.as_ptr(), b.as_ptr()) {
        return Ok(Ordering::Equal);
    }

    match compare_unchecked_len(a, b, len) {
        Ordering::Equal if len < span => Err(MemError::MissingTerminator),
        ord => Ok(ord),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_less() {
        assert_eq!(compare_bytes(&[0x01], &[0x02], 1), Ok(Ordering::Less));
        assert_eq!(compare_bytes(&[0x02], &[0x01], 1), Ok(Ordering::Greater));
    }

    #[test]
    fn test_identity_fast_path() {
        let buf = [0x5Au8; 13];
        for len in 0..=buf.len() {
            assert_eq!(compare_bytes(&buf, &buf, len), Ok(Ordering::Equal));
        }
    }

    #[test]
    fn test_first_differing_byte_decides() {
        // Como words little-endian: a = 0x0100_0002, b = 0x0000_0103
        // Numericamente a > b, mas o primeiro byte diferente dá a < b
        let a = [0x02, 0x00, 0x00, 0x01];
        let b = [0x03, 0x01, 0x00, 0x00];
        assert_eq!(compare_bytes(&a, &b, 4), Ok(Ordering::Less));
        assert_eq!(compare_bytes(&b, &a, 4), Ok(Ordering::Greater));

        let c = [0x10, 0x20, 0x30, 0x01];
        let d = [0x10, 0x20, 0x30, 0xFF];
        assert_eq!(compare_bytes(&c, &d, 4), Ok(Ordering::Less));
    }

    #[test]
    fn test_difference_in_remainder() {
        let a = *b"abcdefgh1";
        let b = *b"abcdefgh2";
        assert_eq!(compare_bytes(&a, &b, 9), Ok(Ordering::Less));
        assert_eq!(compare_bytes(&a, &b, 8), Ok(Ordering::Equal));
    }

    #[test]
    fn test_compare_bytes_capacity() {
        assert_eq!(
            compare_bytes(&[1, 2], &[1, 2, 3], 3),
            Err(MemError::CapacityExceeded)
        );
    }

    #[test]
    fn test_strings_equal_and_ordered() {
        assert_eq!(compare_strings(b"abc\0", b"abc\0"), Ok(Ordering::Equal));
        assert_eq!(compare_strings(b"abc\0", b"abd\0"), Ok(Ordering::Less));
        assert_eq!(compare_strings(b"abd\0xx", b"abc\0"), Ok(Ordering::Greater));
        assert_eq!(compare_strings(b"\0", b"\0"), Ok(Ordering::Equal));
    }

    #[test]
    fn test_strings_prefix_orders_shorter_first() {
        // b é prefixo própria de a
        assert_eq!(compare_strings(b"abcdef\0", b"abc\0"), Ok(Ordering::Greater));
        // a é prefixo própria de b
        assert_eq!(compare_strings(b"abc\0", b"abcdef\0"), Ok(Ordering::Less));
    }

    #[test]
    fn test_strings_ignore_bytes_after_terminator() {
        assert_eq!(compare_strings(b"ab\0zz", b"ab\0yy"), Ok(Ordering::Equal));
    }

    #[test]
    fn test_strings_missing_terminator() {
        assert_eq!(
            compare_strings(b"abc", b"abc\0"),
            Err(MemError::MissingTerminator)
        );
        assert_eq!(
            compare_strings(b"abc\0", b"abc"),
            Err(MemError::MissingTerminator)
        );
        assert_eq!(compare_strings(b"abc\0", b"abd"), Ok(Ordering::Less));
    }

    #[test]
    fn test_strings_same_buffer_cut_before_terminator() {
        let buf = *b"abcdef\0";
        assert_eq!(
            compare_strings(&buf, &buf[..3]),
            Err(MemError::MissingTerminator)
        );
        assert_eq!(compare_strings(&buf, &buf[..7]), Ok(Ordering::Equal));
        assert_eq!(compare_strings(&buf, &buf), Ok(Ordering::Equal));
    }
}
