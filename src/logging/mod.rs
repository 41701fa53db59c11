// =============================================================================
// LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging da biblioteca com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Apenas strings literais e valores em hex
// - Escreve no `LogSink` registrado pela plataforma (ver `sink`)
// - As primitivas de `ops` NUNCA logam; apenas harness e self-tests
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Falhas de validação
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Resultados de benchmark, progresso
// - DEBUG: Detalhes de cada suite
// - TRACE: Cada medição individual
//
// COMO USAR:
//   kinfo!("(Bench) Iniciando...");           // Apenas string
//   kinfo!("(Bench) Total=", total);          // String + hex
//   klog!("Size=", size, " Clk=", cycles);    // Múltiplos valores
//
// =============================================================================

pub mod sink;

pub use sink::{install, LogSink};

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// MACRO BASE
// =============================================================================

/// Emite uma linha com prefixo de nível. Uso interno dos macros de nível.
#[doc(hidden)]
#[macro_export]
macro_rules! __klevel {
    ($prefix:expr, $msg:expr) => {{
        $crate::logging::sink::emit_str($prefix);
        $crate::logging::sink::emit_str($msg);
        $crate::logging::sink::emit_nl();
    }};
    ($prefix:expr, $msg:expr, $val:expr) => {{
        $crate::logging::sink::emit_str($prefix);
        $crate::logging::sink::emit_str($msg);
        $crate::logging::sink::emit_hex($val as u64);
        $crate::logging::sink::emit_nl();
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR / WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {
        $crate::__klevel!($crate::logging::P_ERROR, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klevel!($crate::logging::P_ERROR, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {
        $crate::__klevel!($crate::logging::P_WARN, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klevel!($crate::logging::P_WARN, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(any(feature = "log_info", feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {
        $crate::__klevel!($crate::logging::P_INFO, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klevel!($crate::logging::P_INFO, $msg, $val)
    };
}

#[cfg(not(any(feature = "log_info", feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {
        $crate::__klevel!($crate::logging::P_DEBUG, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klevel!($crate::logging::P_DEBUG, $msg, $val)
    };
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {
        $crate::__klevel!($crate::logging::P_TRACE, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klevel!($crate::logging::P_TRACE, $msg, $val)
    };
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Log genérico sem prefixo de nível.
///
/// Útil para montar linhas de tabela com múltiplos valores.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    ($msg:expr) => {{
        $crate::logging::sink::emit_str($msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::logging::sink::emit_str($msg);
        $crate::logging::sink::emit_dec($val as usize);
    }};
    ($msg1:expr, $val:expr, $msg2:expr) => {{
        $crate::logging::sink::emit_str($msg1);
        $crate::logging::sink::emit_dec($val as usize);
        $crate::logging::sink::emit_str($msg2);
    }};
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        $crate::logging::sink::emit_str($msg1);
        $crate::logging::sink::emit_dec($val1 as usize);
        $crate::logging::sink::emit_str($msg2);
        $crate::logging::sink::emit_dec($val2 as usize);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($t:tt)*) => {{}};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        $crate::logging::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::logging::sink::emit_str("\x1b[32m[OK]\x1b[0m ");
        $crate::logging::sink::emit_str($msg);
        $crate::logging::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::logging::sink::emit_str("\x1b[1;31m[FAIL]\x1b[0m ");
        $crate::logging::sink::emit_str($msg);
        $crate::logging::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
