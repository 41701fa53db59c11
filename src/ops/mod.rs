//! # Operações de Memória
//!
//! Primitivas word-a-word (32 bits) sobre buffers do chamador: cópia,
//! preenchimento, comprimento de string e comparação de três vias. O laço
//! principal anda de 4 em 4 bytes; o resto (0..3 bytes) é tratado byte a
//! byte.
//!
//! - API segura (este módulo): slices, erros via [`MemResult`]
//! - [`raw`]: ponteiros crus com o contrato da libc
//! - [`baseline`]: versões byte-a-byte de referência
//!
//! Nenhuma função aloca nem loga.
//!
//! [`MemResult`]: crate::error::MemResult

// =============================================================================
// MODULOS DE IMPLEMENTAÇÃO
// =============================================================================

pub mod word;

mod compare;
mod copy;
mod fill;
mod scan;
mod string;

pub mod baseline;
pub mod raw;

// =============================================================================
// INTERFACE PÚBLICA
// =============================================================================

pub use compare::{compare_bytes, compare_strings, order_word};
pub use copy::copy;
pub use fill::{broadcast, fill};
pub use scan::{length, length_bounded};
pub use string::{concatenate, copy_string, copy_string_bounded};
