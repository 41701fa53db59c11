//! Testes de integração entre módulos (host)
//!
//! - `equivalence.rs` - Word-a-word vs byte-a-byte em todos os restos e
//!   deslocamentos
//! - `properties.rs` - Cenários concretos das primitivas de string/buffer
//! - `logging.rs` - Saída dos macros através de um sink de captura

#![cfg(test)]

#[cfg(feature = "log_trace")]
mod logging;
