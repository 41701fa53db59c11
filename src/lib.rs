//! Memword.
//!
//! Primitivas de memória word-a-word para microcontroladores ARM Cortex-M
//! (cópia, preenchimento, comprimento de string, comparação) e o harness que
//! mede em ciclos de clock a vantagem delas sobre as versões byte-a-byte.
//!
//! Sem alocação: toda operação trabalha sobre buffers do chamador.

#![cfg_attr(not(test), no_std)]

// --- Infraestrutura ---
pub mod config; // Constantes de build
pub mod error; // MemError / MemResult
pub mod logging; // Macros de log zero-overhead + sink

// --- Primitivas ---
pub mod ops; // Word-a-word, raw, baseline

// --- Medição ---
pub mod bench; // Harness de ciclos (DWT)

#[cfg(feature = "self_test")]
pub mod selftest; // Testes on-target

#[cfg(test)]
mod tests;

pub use crate::error::{MemError, MemResult};
pub use crate::ops::{
    compare_bytes, compare_strings, concatenate, copy, copy_string, copy_string_bounded, fill,
    length, length_bounded,
};
