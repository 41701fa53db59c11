// =============================================================================
// LOG SINK - SAÍDA DE BYTES
// =============================================================================
//
// Destino dos logs da biblioteca. A plataforma (UART, ITM, semihosting)
// registra um `LogSink` uma única vez no boot; sem sink registrado os bytes
// são descartados.
//
// ARQUITETURA:
// - SEM core::fmt - Apenas strings literais e números convertidos à mão
// - SEM alocação - Buffers de stack de tamanho fixo
// - Um spin::Mutex protege o ponteiro do sink (nunca segurado no hot path
//   das primitivas, que não logam)
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal
// - emit_dec(v)      : Envia usize em decimal
// - emit_nl()        : Envia newline (\r\n)
//
// =============================================================================

use spin::Mutex;

/// Destino de bytes de log fornecido pela plataforma.
pub trait LogSink: Sync {
    /// Escreve os bytes, sem bufferização obrigatória.
    fn write_bytes(&self, bytes: &[u8]);
}

/// Sink ativo (None = descartar)
static SINK: Mutex<Option<&'static dyn LogSink>> = Mutex::new(None);

// =============================================================================
// FUNÇÕES DE INICIALIZAÇÃO
// =============================================================================

/// Registra o sink de log. Substitui qualquer sink anterior.
pub fn install(sink: &'static dyn LogSink) {
    *SINK.lock() = Some(sink);
}

/// Verifica se existe sink registrado.
pub fn is_installed() -> bool {
    SINK.lock().is_some()
}

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

#[inline(always)]
fn write(bytes: &[u8]) {
    if let Some(sink) = *SINK.lock() {
        sink.write_bytes(bytes);
    }
}

/// Envia um único byte.
#[inline]
pub fn emit(byte: u8) {
    write(&[byte]);
}

/// Envia uma string.
#[inline(never)]
pub fn emit_str(s: &str) {
    write(s.as_bytes());
}

/// Envia newline (\r\n).
#[inline(never)]
pub fn emit_nl() {
    write(b"\r\n");
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    for (i, slot) in buf[2..].iter_mut().enumerate() {
        let shift = 60 - (i as u32) * 4;
        *slot = nibble_to_ascii(((value >> shift) & 0xF) as u8);
    }
    write(&buf);
}

/// Envia um valor usize em formato decimal.
///
/// Útil para contadores de ciclos e tamanhos.
///
/// # Nota
/// Esta função usa um buffer de stack de 20 bytes (máximo para u64).
#[inline(never)]
pub fn emit_dec(mut value: usize) {
    let mut buf: [u8; 20] = [0; 20];
    let mut pos = 20;

    if value == 0 {
        emit(b'0');
        return;
    }

    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }

    write(&buf[pos..]);
}

// =============================================================================
// FUNÇÕES AUXILIARES
// =============================================================================

/// Converte nibble (0-15) para caractere ASCII ('0'-'9', 'A'-'F').
#[inline(always)]
const fn nibble_to_ascii(n: u8) -> u8 {
    if n < 10 {
        b'0' + n
    } else {
        b'A' + (n - 10)
    }
}
