//! # Self-Tests On-Target
//!
//! Testes executados no próprio microcontrolador (feature `self_test`),
//! com resultados enviados para o sink de log. Complementam os testes de
//! host (`cargo test`): aqui o código roda com o codegen e o alinhamento do
//! alvo real.
//!
//! # Uso
//! Chamar `run_selftests()` depois de registrar o sink de log e antes do
//! benchmark.

pub mod framework;

pub use framework::{run_test_suite, SuiteOutcome, TestCase, TestResult};

/// Executa todos os self-tests. Retorna `true` se nenhum falhou.
pub fn run_selftests() -> bool {
    crate::kinfo!("╔════════════════════════════════════════╗");
    crate::kinfo!("║     🧪 TESTES DAS PRIMITIVAS           ║");
    crate::kinfo!("╚════════════════════════════════════════╝");

    let outcome = run_test_suite("ops", ops_test::OPS_TESTS);

    if outcome.is_ok() {
        crate::kinfo!("╔════════════════════════════════════════╗");
        crate::kinfo!("║  ✅ PRIMITIVAS VALIDADAS!              ║");
        crate::kinfo!("╚════════════════════════════════════════╝");
    } else {
        crate::kerror!("(SelfTest) falhas=", outcome.failed);
    }
    outcome.is_ok()
}
