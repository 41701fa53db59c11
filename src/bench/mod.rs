//! # Benchmark de Ciclos
//!
//! Mede em ciclos de clock as primitivas word-a-word contra as versões
//! byte-a-byte, numa matriz fixa de tamanhos e padrões.
//!
//! ```text
//! Harness ──► CycleCounter (reset/read)  ◄── DwtCycleCounter | SoftCycleCounter
//!    │    └─► IrqControl (disable/enable) ◄── PrimaskIrq | NoIrq
//!    └──────► ops (word) / ops::baseline (byte)
//! ```
//!
//! As primitivas não dependem deste módulo.

pub mod counter;
pub mod dwt;
pub mod harness;
pub mod matrix;
pub mod report;

pub use counter::{CycleCounter, IrqControl, NoIrq, SoftCycleCounter};
pub use dwt::DwtCycleCounter;
#[cfg(target_arch = "arm")]
pub use dwt::PrimaskIrq;
pub use harness::{BenchSummary, Harness, Workspace};
pub use matrix::{Operation, Variant};
pub use report::{Comparison, Sample, SuiteReport};

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Contador que registra a ordem das chamadas do protocolo.
    #[derive(Default)]
    struct ProtocolCounter {
        resets: usize,
        reads: Cell<usize>,
        enabled: bool,
        armed: Cell<bool>,
    }

    impl CycleCounter for ProtocolCounter {
        fn enable_tracing(&mut self) {
            self.enabled = true;
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.armed.set(true);
        }

        fn read(&self) -> u32 {
            // Toda leitura precisa vir depois de um reset
            assert!(self.armed.replace(false));
            self.reads.set(self.reads.get() + 1);
            3
        }
    }

    #[derive(Default)]
    struct FlagIrq {
        disabled: bool,
        toggles: usize,
    }

    impl IrqControl for FlagIrq {
        fn disable(&mut self) {
            self.disabled = true;
            self.toggles += 1;
        }

        fn enable(&mut self) {
            self.disabled = false;
            self.toggles += 1;
        }
    }

    #[test]
    fn test_harness_setup_and_teardown() {
        let harness = Harness::new(ProtocolCounter::default(), FlagIrq::default());
        let (counter, irq) = harness.finish();
        assert!(counter.enabled);
        assert_eq!(counter.resets, 1);
        assert_eq!(counter.reads.get(), 0);
        assert!(!irq.disabled);
        assert_eq!(irq.toggles, 2);
    }

    #[test]
    fn test_measure_resets_before_and_after() {
        let mut harness = Harness::new(ProtocolCounter::default(), NoIrq);
        let mut ran = false;
        let cycles = harness.measure(|| ran = true);
        assert!(ran);
        assert_eq!(cycles, 3);
        let (counter, _) = harness.finish();
        // 1 do setup + 2 por medição
        assert_eq!(counter.resets, 3);
        assert_eq!(counter.reads.get(), 1);
    }

    #[test]
    fn test_fill_matrix_shape() {
        let mut harness = Harness::new(SoftCycleCounter::new(5), NoIrq);
        let mut buf = [0u8; 16];
        let report = harness.bench_fill(&mut buf, Variant::Word).unwrap();
        assert_eq!(report.samples().len(), 16);
        assert_eq!(report.total(), 16 * 5);
        assert_eq!(report.samples()[0].size, 16);
        assert_eq!(report.samples()[0].pattern, Some(0x00));
        assert_eq!(report.samples()[3].pattern, Some(0x1FFFF));
        assert_eq!(report.samples()[15].size, 13);
        // Último padrão gravado foi 0x1FFFF nos 13 primeiros bytes
        assert!(buf.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_copy_matrix_copies_data() {
        let mut harness = Harness::new(SoftCycleCounter::new(1), NoIrq);
        let src: [u8; 16] = core::array::from_fn(|i| i as u8 + 1);
        let mut dst = [0u8; 16];
        let report = harness.bench_copy(&mut dst, &src, Variant::Baseline).unwrap();
        let sizes: [usize; 4] = core::array::from_fn(|i| report.samples()[i].size);
        assert_eq!(sizes, [16, 15, 14, 13]);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_length_suite_records_lengths() {
        let mut harness = Harness::new(SoftCycleCounter::new(2), NoIrq);
        let report = harness
            .bench_length(&matrix::LENGTH_FIXTURES, Variant::Word)
            .unwrap();
        let sizes: [usize; 5] = core::array::from_fn(|i| report.samples()[i].size);
        assert_eq!(sizes, [128, 16, 15, 14, 13]);
        assert_eq!(report.total(), 10);
    }

    #[test]
    fn test_length_suite_rejects_unterminated_fixture() {
        let mut harness = Harness::new(SoftCycleCounter::new(2), NoIrq);
        let fixtures: [&[u8]; 2] = [b"ok\0", b"sem-terminador"];
        let result = harness.bench_length(&fixtures, Variant::Word);
        assert_eq!(result.err(), Some(crate::MemError::MissingTerminator));
    }

    #[test]
    fn test_full_run() {
        let mut harness = Harness::new(SoftCycleCounter::new(4), NoIrq);
        let mut ws = Workspace::new();
        let summary = harness.run(&mut ws).unwrap();

        assert_eq!(summary.copy.word.samples().len(), 8);
        assert_eq!(summary.fill.word.samples().len(), 32);
        assert_eq!(summary.length.word.samples().len(), 5);
        assert_eq!(summary.compare.baseline.samples().len(), 8);
        // Contador de software: custo idêntico para as duas variantes
        assert_eq!(summary.fill.saved_cycles(), 0);
        assert_eq!(summary.copy.speedup_x100(), Some(100));
        assert_eq!(ws.large_dst, ws.large_src);
    }
}
