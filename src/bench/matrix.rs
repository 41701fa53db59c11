//! Matriz fixa de benchmark
//!
//! Para cópia/preenchimento/comparação os tamanhos são sempre "tamanho
//! declarado, -1, -2, -3", cobrindo as quatro fases de resto (0..3 bytes)
//! depois do laço de words. Para preenchimento, cada tamanho roda com os
//! quatro padrões de `FILL_PATTERNS`.

use core::cmp::Ordering;

use crate::config::{ALIGNMENT_PHASES, BENCH_BUF_LARGE, BENCH_BUF_SMALL};
use crate::error::MemResult;
use crate::ops;

/// Operação medida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Copy,
    Fill,
    Length,
    Compare,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Fill => "fill",
            Self::Length => "length",
            Self::Compare => "compare",
        }
    }
}

/// Implementação medida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Primitiva word-a-word
    Word,
    /// Referência byte-a-byte
    Baseline,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Baseline => "byte",
        }
    }

    pub fn copy_fn(self) -> CopyFn {
        match self {
            Self::Word => ops::copy,
            Self::Baseline => ops::baseline::copy,
        }
    }

    pub fn fill_fn(self) -> FillFn {
        match self {
            Self::Word => ops::fill,
            Self::Baseline => ops::baseline::fill,
        }
    }

    pub fn length_fn(self) -> LengthFn {
        match self {
            Self::Word => ops::length,
            Self::Baseline => ops::baseline::length,
        }
    }

    pub fn compare_fn(self) -> CompareFn {
        match self {
            Self::Word => ops::compare_bytes,
            Self::Baseline => ops::baseline::compare_bytes,
        }
    }
}

pub type CopyFn = for<'a> fn(&'a mut [u8], &[u8], usize) -> MemResult<&'a mut [u8]>;
pub type FillFn = for<'a> fn(&'a mut [u8], u32, usize) -> MemResult<&'a mut [u8]>;
pub type LengthFn = fn(&[u8]) -> MemResult<usize>;
pub type CompareFn = fn(&[u8], &[u8], usize) -> MemResult<Ordering>;

/// Tamanhos de buffer declarados (grande = caso ideal, pequeno = pior caso)
pub const BUFFER_SIZES: [usize; 2] = [BENCH_BUF_LARGE, BENCH_BUF_SMALL];

/// "declarado, -1, -2, -3" (saturando em zero)
pub const fn phase_sizes(declared: usize) -> [usize; ALIGNMENT_PHASES] {
    let mut sizes = [0; ALIGNMENT_PHASES];
    let mut i = 0;
    while i < ALIGNMENT_PHASES {
        sizes[i] = declared.saturating_sub(i);
        i += 1;
    }
    sizes
}

/// Strings de teste do comprimento: 128, 16, 15, 14 e 13 caracteres.
pub const LENGTH_FIXTURES: [&[u8]; 5] = [
    b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. Duis dictum, risus id congue malesuada, nibh urna feugiat velit ligula.\0",
    b"Lorem ipsum leo.\0",
    b"Lorem ipsum ac.\0",
    b"Lorem aliquam.\0",
    b"Lorem lectus.\0",
];
