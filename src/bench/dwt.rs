//! # Contador de Ciclos DWT (Cortex-M3/M4/M7)
//!
//! Driver mínimo da unidade Data Watchpoint and Trace: destrava o acesso,
//! liga o trace no DEMCR e habilita o CYCCNT. Acesso aos registradores via
//! `volatile`, bits via `bitflags`.
//!
//! O DWT conta ciclos de clock da CPU em 32 bits e dá a volta em ~60 s a
//! 72 MHz; medições do harness duram poucos milhares de ciclos.

use core::ptr::NonNull;

use bitflags::bitflags;
use volatile::VolatilePtr;

#[cfg(target_arch = "arm")]
use crate::bench::counter::IrqControl;
use crate::bench::counter::CycleCounter;
use crate::config::{DEMCR_ADDR, DWT_CTRL_ADDR, DWT_CYCCNT_ADDR, DWT_LAR_ADDR, DWT_LAR_MAGIC};

bitflags! {
    /// Bits do Debug Exception and Monitor Control Register usados aqui.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Demcr: u32 {
        /// Habilita DWT e ITM.
        const TRCENA = 1 << 24;
    }
}

bitflags! {
    /// Bits do DWT_CTRL usados aqui.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DwtCtrl: u32 {
        /// Habilita o contador de ciclos.
        const CYCCNTENA = 1 << 0;
    }
}

/// Registrador MMIO de 32 bits em endereço fixo.
#[inline(always)]
fn reg(addr: usize) -> VolatilePtr<'static, u32> {
    // SAFETY: endereços fixos do System Control Space, sempre mapeados em
    // Cortex-M; a exclusividade é garantida por `DwtCycleCounter::new`.
    unsafe { VolatilePtr::new(NonNull::new_unchecked(addr as *mut u32)) }
}

/// Contador de ciclos sobre o DWT_CYCCNT.
#[derive(Debug)]
pub struct DwtCycleCounter {
    _owned: (),
}

impl DwtCycleCounter {
    /// Toma posse do DWT.
    ///
    /// # Safety
    /// - Deve rodar em um núcleo Cortex-M com DWT implementado
    /// - Deve existir uma única instância (o harness é o dono exclusivo do
    ///   contador)
    pub const unsafe fn new() -> Self {
        Self { _owned: () }
    }
}

impl CycleCounter for DwtCycleCounter {
    fn enable_tracing(&mut self) {
        reg(DWT_LAR_ADDR).write(DWT_LAR_MAGIC);
        reg(DEMCR_ADDR).update(|v| v | Demcr::TRCENA.bits());
        reg(DWT_CTRL_ADDR).update(|v| v | DwtCtrl::CYCCNTENA.bits());
        reg(DWT_CYCCNT_ADDR).write(0);
    }

    #[inline(always)]
    fn reset(&mut self) {
        reg(DWT_CYCCNT_ADDR).write(0);
    }

    #[inline(always)]
    fn read(&self) -> u32 {
        reg(DWT_CYCCNT_ADDR).read()
    }
}

/// Controle de interrupções via PRIMASK (`cpsid i` / `cpsie i`).
#[cfg(target_arch = "arm")]
#[derive(Debug, Default)]
pub struct PrimaskIrq;

#[cfg(target_arch = "arm")]
impl IrqControl for PrimaskIrq {
    #[inline(always)]
    fn disable(&mut self) {
        unsafe { core::arch::asm!("cpsid i", options(nostack, preserves_flags)) };
    }

    #[inline(always)]
    fn enable(&mut self) {
        unsafe { core::arch::asm!("cpsie i", options(nostack, preserves_flags)) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_bits() {
        assert_eq!(Demcr::TRCENA.bits(), 0x0100_0000);
        assert_eq!(DwtCtrl::CYCCNTENA.bits(), 0x0000_0001);
    }
}
