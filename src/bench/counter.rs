//! Capacidades consumidas pelo harness
//!
//! O harness não conhece registradores: recebe um contador de ciclos e um
//! controle de interrupções injetados. Em hardware usa-se o DWT (`dwt`);
//! em host, um contador de software.

use core::cell::Cell;

/// Contador de ciclos livre (incrementa a cada clock da CPU enquanto
/// habilitado).
pub trait CycleCounter {
    /// Liga o trace e o contador. Chamado uma vez antes das medições.
    fn enable_tracing(&mut self);

    /// Zera o contador.
    fn reset(&mut self);

    /// Ciclos desde o último `reset`.
    fn read(&self) -> u32;
}

/// Controle de interrupções durante as medições.
pub trait IrqControl {
    /// Desabilita interrupções
    fn disable(&mut self);

    /// Habilita interrupções
    fn enable(&mut self);
}

/// Controle de IRQ que não faz nada (host, ou quando o chamador já mascarou
/// as interrupções).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIrq;

impl IrqControl for NoIrq {
    fn disable(&mut self) {}
    fn enable(&mut self) {}
}

/// Contador de software determinístico.
///
/// Cada `read` avança o relógio em `step` ciclos, então toda medição
/// isolada vale exatamente `step`. Serve para rodar o harness em host e
/// validar o protocolo reset → operação → leitura.
#[derive(Debug)]
pub struct SoftCycleCounter {
    step: u32,
    now: Cell<u32>,
    enabled: bool,
}

impl SoftCycleCounter {
    /// Cria contador que avança `step` ciclos por leitura.
    pub const fn new(step: u32) -> Self {
        Self {
            step,
            now: Cell::new(0),
            enabled: false,
        }
    }

    /// Verifica se `enable_tracing` já foi chamado.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl CycleCounter for SoftCycleCounter {
    fn enable_tracing(&mut self) {
        self.enabled = true;
        self.now.set(0);
    }

    fn reset(&mut self) {
        self.now.set(0);
    }

    fn read(&self) -> u32 {
        if !self.enabled {
            return 0;
        }
        let next = self.now.get().wrapping_add(self.step);
        self.now.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_counter_disabled_reads_zero() {
        let counter = SoftCycleCounter::new(7);
        assert_eq!(counter.read(), 0);
    }

    #[test]
    fn test_soft_counter_reset_isolates_reads() {
        let mut counter = SoftCycleCounter::new(7);
        counter.enable_tracing();
        assert!(counter.is_enabled());
        assert_eq!(counter.read(), 7);
        assert_eq!(counter.read(), 14);
        counter.reset();
        assert_eq!(counter.read(), 7);
    }
}
