//! # Configuração da Biblioteca
//!
//! Define constantes de compilação das primitivas e do harness de benchmark.
//! Toda configuração é em tempo de build (features + constantes).

// =============================================================================
// CONSTANTES DE WORD
// =============================================================================

/// Tamanho de uma word do barramento (Cortex-M = 32 bits)
pub const WORD_SIZE: usize = core::mem::size_of::<u32>();

/// Máscara de um lane (byte menos significativo da word)
pub const LANE_MASK: u32 = 0x0000_00FF;

// =============================================================================
// MATRIZ DE BENCHMARK
// =============================================================================

/// Buffer grande (situação ideal, laço de words domina)
pub const BENCH_BUF_LARGE: usize = 128;

/// Buffer pequeno (pior situação, overhead do resto domina)
pub const BENCH_BUF_SMALL: usize = 16;

/// Tamanhos exercitados por buffer: declarado, -1, -2, -3 (restos 0..3)
pub const ALIGNMENT_PHASES: usize = WORD_SIZE;

/// Padrões de preenchimento: zero, byte cheio, > 1 byte, > 2 bytes
pub const FILL_PATTERNS: [u32; 4] = [0x0000_0000, 0x0000_00FF, 0x0000_01FF, 0x0001_FFFF];

/// Capacidade máxima de linhas de um relatório (sem alocação)
pub const REPORT_CAPACITY: usize = 32;

// =============================================================================
// REGISTRADORES DE DEBUG (Cortex-M)
// =============================================================================

/// Debug Exception and Monitor Control Register
pub const DEMCR_ADDR: usize = 0xE000_EDFC;

/// DWT Control Register
pub const DWT_CTRL_ADDR: usize = 0xE000_1000;

/// DWT Cycle Count Register
pub const DWT_CYCCNT_ADDR: usize = 0xE000_1004;

/// DWT Lock Access Register
pub const DWT_LAR_ADDR: usize = 0xE000_1FB0;

/// Chave que destrava a escrita nos registradores do DWT
pub const DWT_LAR_MAGIC: u32 = 0xC5AC_CE55;
