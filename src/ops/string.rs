//! Operações sobre strings terminadas em nulo
//!
//! Concatenação e cópia de strings montadas sobre `length` e sobre o laço de
//! cópia word-a-word.

use crate::error::{ensure_capacity, MemResult};
use crate::ops::copy::copy_unchecked_len;
use crate::ops::fill::fill_unchecked_len;
use crate::ops::scan::length;

/// Anexa a string `src` ao fim da string em `dst`, no lugar, e devolve `dst`.
///
/// O terminador fica em `length(dst) + length(src)`, logo depois do último
/// byte copiado.
///
/// # Erros
/// - `MissingTerminator` se alguma das strings não tem terminador
/// - `CapacityExceeded` se `dst` não comporta o resultado + terminador
pub fn concatenate<'a>(dst: &'a mut [u8], src: &[u8]) -> MemResult<&'a mut [u8]> {
    let head = length(dst)?;
    let tail = length(src)?;
    let end = head + tail;
    ensure_capacity(end + 1, dst.len())?;

    copy_unchecked_len(&mut dst[head..], src, tail);
    dst[end] = 0;

    Ok(dst)
}

/// Copia a string `src` (com terminador) para `dst` e devolve `dst`.
///
/// # Erros
/// - `MissingTerminator` se `src` não tem terminador
/// - `CapacityExceeded` se `dst` tem menos que `length(src) + 1` bytes
pub fn copy_string<'a>(dst: &'a mut [u8], src: &[u8]) -> MemResult<&'a mut [u8]> {
    let total = length(src)? + 1;
    ensure_capacity(total, dst.len())?;

    copy_unchecked_len(dst, src, total);
    Ok(dst)
}

/// Copia no máximo `n` bytes da string `src` para `dst` e devolve `dst`.
///
/// Se a string (com terminador) é menor que `n`, o restante dos `n` bytes
/// é preenchido com zero. Se é maior ou igual, `dst` recebe exatamente `n`
/// bytes e fica sem terminador, como no strncpy.
///
/// # Erros
/// `CapacityExceeded` se `n` for maior que `dst`. Uma `src` sem terminador
/// é aceita desde que tenha pelo menos `n` bytes.
pub fn copy_string_bounded<'a>(dst: &'a mut [u8], src: &[u8], n: usize) -> MemResult<&'a mut [u8]> {
    ensure_capacity(n, dst.len())?;

    let take = match length(&src[..n.min(src.len())]) {
        Ok(len) => len,
        Err(_) => {
            ensure_capacity(n, src.len())?;
            n
        }
    };

    copy_unchecked_len(dst, src, take);
    fill_unchecked_len(&mut dst[take..], 0, n - take);
    Ok(dst)
}
