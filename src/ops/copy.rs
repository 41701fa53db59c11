//! Cópia word-a-word
//!
//! Copia de 4 em 4 bytes enquanto houver pelo menos uma word e termina o
//! resto (0..3 bytes) byte a byte.

use crate::error::{ensure_capacity, MemResult};
use crate::ops::word::{self, WordView, WordViewMut};

/// Copia `len` bytes de `src` para `dst` e devolve `dst`.
///
/// Regiões sobrepostas são impossíveis aqui (`&mut` exclusivo), então não há
/// variante memmove.
///
/// # Erros
/// `CapacityExceeded` se `len` for maior que algum dos buffers.
pub fn copy<'a>(dst: &'a mut [u8], src: &[u8], len: usize) -> MemResult<&'a mut [u8]> {
    ensure_capacity(len, dst.len())?;
    ensure_capacity(len, src.len())?;

    copy_unchecked_len(dst, src, len);
    Ok(dst)
}

/// Laço de cópia propriamente dito. `len` já validado contra os dois buffers.
#[inline(always)]
pub(crate) fn copy_unchecked_len(dst: &mut [u8], src: &[u8], len: usize) {
    let mut from = WordView::new(src, len);
    let mut to = WordViewMut::new(dst, len);

    for (chunk, value) in to.by_ref().zip(from.by_ref()) {
        word::store(chunk, value);
    }

    for (d, s) in to.into_remainder().iter_mut().zip(from.remainder()) {
        *d = *s;
    }
}
