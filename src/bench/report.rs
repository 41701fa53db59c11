//! Relatórios de benchmark
//!
//! Tabelas de capacidade fixa (sem alocação): uma linha por chamada medida
//! e o total acumulado da suite.

use crate::bench::matrix::{Operation, Variant};
use crate::config::REPORT_CAPACITY;
use crate::error::{MemError, MemResult};

/// Uma medição: uma chamada isolada da primitiva.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    /// Tamanho em bytes (ou comprimento da string, em `length`)
    pub size: usize,
    /// Padrão de preenchimento (apenas `fill`)
    pub pattern: Option<u32>,
    /// Ciclos gastos na chamada
    pub cycles: u32,
}

/// Resultado de uma suite (operação × variante).
#[derive(Debug, Clone)]
pub struct SuiteReport {
    operation: Operation,
    variant: Variant,
    samples: [Sample; REPORT_CAPACITY],
    len: usize,
    total: u32,
}

impl SuiteReport {
    pub const fn new(operation: Operation, variant: Variant) -> Self {
        Self {
            operation,
            variant,
            samples: [Sample {
                size: 0,
                pattern: None,
                cycles: 0,
            }; REPORT_CAPACITY],
            len: 0,
            total: 0,
        }
    }

    /// Adiciona uma medição e acumula o total.
    ///
    /// # Erros
    /// `CapacityExceeded` se a tabela já tem `REPORT_CAPACITY` linhas.
    pub fn push(&mut self, sample: Sample) -> MemResult<()> {
        let slot = self
            .samples
            .get_mut(self.len)
            .ok_or(MemError::CapacityExceeded)?;
        *slot = sample;
        self.len += 1;
        self.total = self.total.wrapping_add(sample.cycles);
        Ok(())
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples[..self.len]
    }

    /// Soma dos ciclos de todas as medições
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Emite a tabela no log (nível INFO para o total, TRACE por linha).
    pub fn log(&self) {
        crate::kinfo!("┌─ Bench ─────────────────────────────────────");
        crate::klog!("│  ");
        crate::klog!(self.operation.as_str());
        crate::klog!(" / ");
        crate::klog!(self.variant.as_str());
        crate::knl!();

        for sample in self.samples() {
            crate::klog!("│    size=", sample.size, " clk=", sample.cycles);
            if let Some(pattern) = sample.pattern {
                crate::klog!(" pattern=", pattern);
            }
            crate::knl!();
        }

        crate::klog!("│  total=", self.total, " clocks");
        crate::knl!();
        crate::kinfo!("└───────────────────────────────────────────");
    }
}

/// Par word × byte da mesma operação.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub word: SuiteReport,
    pub baseline: SuiteReport,
}

impl Comparison {
    /// Ciclos economizados pela versão word (negativo = mais lenta).
    pub fn saved_cycles(&self) -> i64 {
        i64::from(self.baseline.total()) - i64::from(self.word.total())
    }

    /// Razão baseline/word em centésimos (250 = 2,5x mais rápido).
    pub fn speedup_x100(&self) -> Option<u32> {
        let word = u64::from(self.word.total());
        if word == 0 {
            return None;
        }
        u32::try_from(u64::from(self.baseline.total()) * 100 / word).ok()
    }

    pub fn log(&self) {
        self.baseline.log();
        self.word.log();
        match self.speedup_x100() {
            Some(x) => {
                crate::klog!("│  speedup x100=", x);
                crate::knl!();
            }
            None => crate::kwarn!("(Bench) speedup indefinido (total word = 0)"),
        }
    }
}
