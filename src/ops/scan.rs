//! Comprimento de strings terminadas em nulo (word-a-word)
//!
//! Lê 4 bytes por vez e testa cada lane com uma máscara, do menos para o
//! mais significativo. O comprimento é `(offset da word) + (lane nulo)`.
//!
//! A varredura é sempre limitada pelo slice: ao contrário do strlen da libc
//! ela nunca lê além do terminador nem da região endereçável.

use crate::config::WORD_SIZE;
use crate::error::{MemError, MemResult};
use crate::ops::word::{self, WordView};

/// Distância até o primeiro byte zero de `src` (exclusivo).
///
/// # Erros
/// `MissingTerminator` se `src` não contém byte zero.
pub fn length(src: &[u8]) -> MemResult<usize> {
    scan(src, src.len()).ok_or(MemError::MissingTerminator)
}

/// Como [`length`], mas nunca inspeciona mais que `max` bytes.
///
/// # Erros
/// - `ScanLimitExceeded` se os primeiros `max` bytes não têm terminador e
///   `src` continua além deles
/// - `MissingTerminator` se `src` acaba antes de `max` sem terminador
pub fn length_bounded(src: &[u8], max: usize) -> MemResult<usize> {
    let limit = max.min(src.len());
    match scan(src, limit) {
        Some(len) => Ok(len),
        None if limit < src.len() => Err(MemError::ScanLimitExceeded),
        None => Err(MemError::MissingTerminator),
    }
}

/// Procura o terminador nos primeiros `limit` bytes.
#[inline(always)]
fn scan(src: &[u8], limit: usize) -> Option<usize> {
    let mut view = WordView::new(src, limit);

    while let Some(chunk) = view.next() {
        if let Some(lane) = word::zero_lane(chunk) {
            // offset já avançou para depois desta word
            return Some(view.offset() - WORD_SIZE + lane);
        }
    }

    let base = view.offset();
    view.remainder()
        .iter()
        .position(|&b| b == 0)
        .map(|lane| base + lane)
}
