//! Funções de memória byte-a-byte (referência)
//!
//! Versões ingênuas, um byte por iteração, com o mesmo contrato da API
//! word-a-word. Servem de referência nos testes e de linha de base no
//! harness de benchmark.
//!
//! # Nota
//! Os laços usam `black_box` no índice para o LLVM não reconhecer o idioma
//! e trocar o laço por uma chamada a memcpy/memset.

use core::cmp::Ordering;
use core::hint::black_box;

use crate::error::{ensure_capacity, MemError, MemResult};

/// Copia `len` bytes, um por vez.
pub fn copy<'a>(dst: &'a mut [u8], src: &[u8], len: usize) -> MemResult<&'a mut [u8]> {
    ensure_capacity(len, dst.len())?;
    ensure_capacity(len, src.len())?;

    let mut i = 0;
    while i < len {
        dst[i] = src[i];
        i = black_box(i + 1);
    }
    Ok(dst)
}

/// Preenche `len` bytes com o byte baixo de `pattern`, um por vez.
pub fn fill(dst: &mut [u8], pattern: u32, len: usize) -> MemResult<&mut [u8]> {
    ensure_capacity(len, dst.len())?;

    let value = pattern as u8;
    let mut i = 0;
    while i < len {
        dst[i] = value;
        i = black_box(i + 1);
    }
    Ok(dst)
}

/// Calcula tamanho de string terminada em nulo, um byte por vez.
pub fn length(src: &[u8]) -> MemResult<usize> {
    let mut len = 0;
    while len < src.len() {
        if src[len] == 0 {
            return Ok(len);
        }
        len = black_box(len + 1);
    }
    Err(MemError::MissingTerminator)
}

/// Compara `len` bytes (estilo memcmp), um por vez.
pub fn compare_bytes(a: &[u8], b: &[u8], len: usize) -> MemResult<Ordering> {
    ensure_capacity(len, a.len())?;
    ensure_capacity(len, b.len())?;

    for i in 0..len {
        let (va, vb) = (a[i], b[i]);
        if va != vb {
            return Ok(va.cmp(&vb));
        }
    }
    Ok(Ordering::Equal)
}

/// Compara duas strings (estilo strcmp).
pub fn compare_strings(a: &[u8], b: &[u8]) -> MemResult<Ordering> {
    let mut i = 0;
    loop {
        let (Some(&va), Some(&vb)) = (a.get(i), b.get(i)) else {
            return Err(MemError::MissingTerminator);
        };
        if va != vb {
            return Ok(va.cmp(&vb));
        }
        if va == 0 {
            return Ok(Ordering::Equal);
        }
        i += 1;
    }
}
