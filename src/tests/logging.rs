//! Saída dos macros de log através de um sink de captura
//!
//! O sink é global e os testes rodam em paralelo: as asserções só procuram
//! pelas linhas emitidas aqui, nunca pelo conteúdo exato do buffer.

use spin::Mutex;

use crate::bench::{Comparison, Operation, Sample, SuiteReport, Variant};
use crate::logging::{self, LogSink};

const CAPTURE_SIZE: usize = 1024 * 1024;

struct CaptureSink {
    buf: Mutex<([u8; CAPTURE_SIZE], usize)>,
}

impl CaptureSink {
    fn contains(&self, needle: &[u8]) -> bool {
        let guard = self.buf.lock();
        let (buf, len) = &*guard;
        buf[..*len].windows(needle.len()).any(|w| w == needle)
    }
}

impl LogSink for CaptureSink {
    fn write_bytes(&self, bytes: &[u8]) {
        let mut guard = self.buf.lock();
        let (buf, len) = &mut *guard;
        let room = CAPTURE_SIZE - *len;
        let n = bytes.len().min(room);
        buf[*len..*len + n].copy_from_slice(&bytes[..n]);
        *len += n;
    }
}

static CAPTURE: CaptureSink = CaptureSink {
    buf: Mutex::new(([0; CAPTURE_SIZE], 0)),
};

#[test]
fn test_macros_reach_sink() {
    logging::install(&CAPTURE);
    assert!(logging::sink::is_installed());

    crate::kinfo!("(Test) marcador-info");
    crate::kerror!("(Test) marcador-hex=", 0xABCDu32);
    crate::klog!("(Test) marcador-dec=", 1234usize);
    crate::knl!();

    assert!(CAPTURE.contains(b"[INFO]"));
    assert!(CAPTURE.contains(b"(Test) marcador-info"));
    assert!(CAPTURE.contains(b"(Test) marcador-hex="));
    assert!(CAPTURE.contains(b"0x000000000000ABCD"));
    assert!(CAPTURE.contains(b"(Test) marcador-dec="));
    assert!(CAPTURE.contains(b"1234"));
}

#[test]
fn test_speedup_logged_in_decimal() {
    logging::install(&CAPTURE);

    let sample = |cycles| Sample {
        size: 4,
        pattern: None,
        cycles,
    };
    let mut word = SuiteReport::new(Operation::Copy, Variant::Word);
    let mut baseline = SuiteReport::new(Operation::Copy, Variant::Baseline);
    word.push(sample(100)).unwrap();
    baseline.push(sample(250)).unwrap();
    Comparison { word, baseline }.log();

    assert!(CAPTURE.contains(b"speedup x100="));
    assert!(CAPTURE.contains(b"250"));
    assert!(!CAPTURE.contains(b"0x00000000000000FA"));
}
