//! Runner do benchmark
//!
//! Protocolo por chamada: zera o contador → executa a operação uma vez →
//! lê o contador → zera de novo. Nenhum resultado muda o fluxo: a matriz é
//! um roteiro sequencial fixo.

use core::hint::black_box;

use crate::bench::counter::{CycleCounter, IrqControl};
use crate::bench::matrix::{phase_sizes, Operation, Variant, BUFFER_SIZES, LENGTH_FIXTURES};
use crate::bench::report::{Comparison, Sample, SuiteReport};
use crate::config::{BENCH_BUF_LARGE, BENCH_BUF_SMALL, FILL_PATTERNS};
use crate::error::MemResult;

/// Buffers de trabalho da matriz completa (fornecidos pelo chamador,
/// tipicamente `static mut` ou stack do firmware).
pub struct Workspace {
    pub large_dst: [u8; BENCH_BUF_LARGE],
    pub large_src: [u8; BENCH_BUF_LARGE],
    pub small_dst: [u8; BENCH_BUF_SMALL],
    pub small_src: [u8; BENCH_BUF_SMALL],
}

impl Workspace {
    /// Buffers com conteúdo conhecido (fonte = índice, destino = zero).
    pub const fn new() -> Self {
        let mut large_src = [0u8; BENCH_BUF_LARGE];
        let mut i = 0;
        while i < BENCH_BUF_LARGE {
            large_src[i] = i as u8;
            i += 1;
        }
        let mut small_src = [0u8; BENCH_BUF_SMALL];
        let mut i = 0;
        while i < BENCH_BUF_SMALL {
            small_src[i] = i as u8;
            i += 1;
        }
        Self {
            large_dst: [0; BENCH_BUF_LARGE],
            large_src,
            small_dst: [0; BENCH_BUF_SMALL],
            small_src,
        }
    }

    /// Par (destino, fonte) para um tamanho declarado da matriz.
    fn pair(&mut self, declared: usize) -> (&mut [u8], &[u8]) {
        if declared == BENCH_BUF_SMALL {
            (&mut self.small_dst, &self.small_src)
        } else {
            (&mut self.large_dst, &self.large_src)
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Resultado da matriz completa.
#[derive(Debug, Clone)]
pub struct BenchSummary {
    pub copy: Comparison,
    pub fill: Comparison,
    pub length: Comparison,
    pub compare: Comparison,
}

impl BenchSummary {
    pub fn log(&self) {
        self.copy.log();
        self.fill.log();
        self.length.log();
        self.compare.log();
    }
}

/// Harness de medição; dono exclusivo do contador de ciclos.
pub struct Harness<C: CycleCounter, I: IrqControl> {
    counter: C,
    irq: I,
}

impl<C: CycleCounter, I: IrqControl> Harness<C, I> {
    /// Desabilita interrupções, liga o trace e zera o contador.
    pub fn new(mut counter: C, mut irq: I) -> Self {
        irq.disable();
        counter.enable_tracing();
        counter.reset();
        crate::kdebug!("(Bench) Contador de ciclos habilitado");
        Self { counter, irq }
    }

    /// Reabilita interrupções e devolve as capacidades.
    pub fn finish(mut self) -> (C, I) {
        self.irq.enable();
        (self.counter, self.irq)
    }

    /// Mede uma única execução de `op`, isolada por reset antes e depois.
    #[inline(never)]
    pub fn measure<R>(&mut self, op: impl FnOnce() -> R) -> u32 {
        self.counter.reset();
        black_box(op());
        let cycles = self.counter.read();
        self.counter.reset();
        cycles
    }

    /// Cópia: tamanhos declarado, -1, -2, -3 do menor dos dois buffers.
    pub fn bench_copy(
        &mut self,
        dst: &mut [u8],
        src: &[u8],
        variant: Variant,
    ) -> MemResult<SuiteReport> {
        let mut report = SuiteReport::new(Operation::Copy, variant);
        self.copy_into(&mut report, dst, src, variant)?;
        Ok(report)
    }

    fn copy_into(
        &mut self,
        report: &mut SuiteReport,
        dst: &mut [u8],
        src: &[u8],
        variant: Variant,
    ) -> MemResult<()> {
        let op = variant.copy_fn();
        for size in phase_sizes(dst.len().min(src.len())) {
            let cycles = self.measure(|| op(&mut *dst, src, size).is_ok());
            crate::ktrace!("(Bench) copy clk=", cycles);
            report.push(Sample {
                size,
                pattern: None,
                cycles,
            })?;
        }
        Ok(())
    }

    /// Preenchimento: cada tamanho com os quatro padrões.
    pub fn bench_fill(&mut self, dst: &mut [u8], variant: Variant) -> MemResult<SuiteReport> {
        let mut report = SuiteReport::new(Operation::Fill, variant);
        self.fill_into(&mut report, dst, variant)?;
        Ok(report)
    }

    fn fill_into(
        &mut self,
        report: &mut SuiteReport,
        dst: &mut [u8],
        variant: Variant,
    ) -> MemResult<()> {
        let op = variant.fill_fn();
        for size in phase_sizes(dst.len()) {
            for pattern in FILL_PATTERNS {
                let cycles = self.measure(|| op(&mut *dst, pattern, size).is_ok());
                crate::ktrace!("(Bench) fill clk=", cycles);
                report.push(Sample {
                    size,
                    pattern: Some(pattern),
                    cycles,
                })?;
            }
        }
        Ok(())
    }

    /// Comprimento: uma medição por string.
    pub fn bench_length(&mut self, fixtures: &[&[u8]], variant: Variant) -> MemResult<SuiteReport> {
        let op = variant.length_fn();
        let mut report = SuiteReport::new(Operation::Length, variant);
        for &fixture in fixtures {
            let mut result = Ok(0);
            let cycles = self.measure(|| {
                result = op(fixture);
            });
            let size = result?;
            crate::ktrace!("(Bench) length clk=", cycles);
            report.push(Sample {
                size,
                pattern: None,
                cycles,
            })?;
        }
        Ok(report)
    }

    /// Comparação de buffers iguais (pior caso: varre tudo).
    pub fn bench_compare(
        &mut self,
        a: &[u8],
        b: &[u8],
        variant: Variant,
    ) -> MemResult<SuiteReport> {
        let mut report = SuiteReport::new(Operation::Compare, variant);
        self.compare_into(&mut report, a, b, variant)?;
        Ok(report)
    }

    fn compare_into(
        &mut self,
        report: &mut SuiteReport,
        a: &[u8],
        b: &[u8],
        variant: Variant,
    ) -> MemResult<()> {
        let op = variant.compare_fn();
        for size in phase_sizes(a.len().min(b.len())) {
            let cycles = self.measure(|| op(a, b, size).is_ok());
            crate::ktrace!("(Bench) compare clk=", cycles);
            report.push(Sample {
                size,
                pattern: None,
                cycles,
            })?;
        }
        Ok(())
    }

    /// Executa a matriz completa para as duas variantes.
    pub fn run(&mut self, ws: &mut Workspace) -> MemResult<BenchSummary> {
        crate::kinfo!("╔════════════════════════════════════════╗");
        crate::kinfo!("║     ⏱  BENCHMARK DE CICLOS             ║");
        crate::kinfo!("╚════════════════════════════════════════╝");

        let summary = BenchSummary {
            copy: self.run_copy(ws)?,
            fill: self.run_fill(ws)?,
            length: Comparison {
                word: self.bench_length(&LENGTH_FIXTURES, Variant::Word)?,
                baseline: self.bench_length(&LENGTH_FIXTURES, Variant::Baseline)?,
            },
            compare: self.run_compare(ws)?,
        };

        summary.log();
        Ok(summary)
    }

    fn run_copy(&mut self, ws: &mut Workspace) -> MemResult<Comparison> {
        let mut word = SuiteReport::new(Operation::Copy, Variant::Word);
        let mut baseline = SuiteReport::new(Operation::Copy, Variant::Baseline);
        for declared in BUFFER_SIZES {
            let (dst, src) = ws.pair(declared);
            self.copy_into(&mut baseline, dst, src, Variant::Baseline)?;
            self.copy_into(&mut word, dst, src, Variant::Word)?;
        }
        Ok(Comparison { word, baseline })
    }

    fn run_fill(&mut self, ws: &mut Workspace) -> MemResult<Comparison> {
        let mut word = SuiteReport::new(Operation::Fill, Variant::Word);
        let mut baseline = SuiteReport::new(Operation::Fill, Variant::Baseline);
        for declared in BUFFER_SIZES {
            let (dst, _) = ws.pair(declared);
            self.fill_into(&mut baseline, dst, Variant::Baseline)?;
            self.fill_into(&mut word, dst, Variant::Word)?;
        }
        Ok(Comparison { word, baseline })
    }

    fn run_compare(&mut self, ws: &mut Workspace) -> MemResult<Comparison> {
        let mut word = SuiteReport::new(Operation::Compare, Variant::Word);
        let mut baseline = SuiteReport::new(Operation::Compare, Variant::Baseline);
        for declared in BUFFER_SIZES {
            let (dst, src) = ws.pair(declared);
            // Conteúdos iguais em endereços diferentes: sem atalho de identidade
            dst.copy_from_slice(src);
            self.compare_into(&mut baseline, dst, src, Variant::Baseline)?;
            self.compare_into(&mut word, dst, src, Variant::Word)?;
        }
        Ok(Comparison { word, baseline })
    }
}
