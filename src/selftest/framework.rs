//! Framework de testes on-target

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Contagem de resultados de uma suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteOutcome {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SuiteOutcome {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Executa suite de testes
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> SuiteOutcome {
    crate::kinfo!("=== Executando suite:");
    crate::klog!("    ");
    crate::klog!(name);
    crate::knl!();

    let mut outcome = SuiteOutcome::default();

    for test in tests {
        match (test.func)() {
            TestResult::Pass => {
                crate::kok!(test.name);
                outcome.passed += 1;
            }
            TestResult::Fail => {
                crate::kfail!(test.name);
                outcome.failed += 1;
            }
            TestResult::Skip => {
                crate::kwarn!("[SKIP]");
                crate::kwarn!(test.name);
                outcome.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", outcome.passed);
    if outcome.failed != 0 {
        crate::kerror!("Resultados: failed=", outcome.failed);
    }
    outcome
}
