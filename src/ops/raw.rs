//! # API Raw (ponteiros)
//!
//! Versões das primitivas com o contrato da `<string.h>`: ponteiros crus,
//! sem checagem de capacidade, comportamento indefinido se o chamador
//! violar as pré-condições. Úteis para código C e para substituir as
//! funções da libc em firmware.
//!
//! Com a feature `null_check` as funções devolvem nulo (ou 0) quando
//! recebem ponteiro nulo, sem sinalizar mais nada. O chamador precisa
//! checar o retorno.
//!
//! Com a feature `c_abi` as funções são exportadas como símbolos
//! `extern "C"` com prefixo `mw_`.

use core::cmp::Ordering;
use core::slice;

use crate::ops::compare::compare_unchecked_len;
use crate::ops::copy::copy_unchecked_len;
use crate::ops::fill::fill_unchecked_len;

/// Retorna cedo com `$ret` se algum ponteiro for nulo (feature `null_check`).
macro_rules! null_guard {
    ($ret:expr; $($p:expr),+) => {
        #[cfg(feature = "null_check")]
        {
            if $($p.is_null())||+ {
                return $ret;
            }
        }
    };
}

/// Ordering → -1/0/+1 (convenção memcmp)
#[inline(always)]
const fn to_c(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Copia `len` bytes de `src` para `dst` e devolve `dst`.
///
/// # Safety
/// - `dst` válido para escrita e `src` válido para leitura de `len` bytes
/// - Regiões não devem se sobrepor
pub unsafe fn copy(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    null_guard!(core::ptr::null_mut(); dst, src);

    if len != 0 {
        let d = slice::from_raw_parts_mut(dst, len);
        let s = slice::from_raw_parts(src, len);
        copy_unchecked_len(d, s, len);
    }
    dst
}

/// Preenche `len` bytes com o byte baixo de `pattern` e devolve `dst`.
///
/// # Safety
/// `dst` deve ser válido para escrita de `len` bytes.
pub unsafe fn fill(dst: *mut u8, pattern: u32, len: usize) -> *mut u8 {
    null_guard!(core::ptr::null_mut(); dst);

    if len != 0 {
        fill_unchecked_len(slice::from_raw_parts_mut(dst, len), pattern, len);
    }
    dst
}

/// Tamanho da string terminada em nulo em `src`.
///
/// Em Cortex-M avança byte a byte até um endereço alinhado e só então lê
/// words alinhadas com `ldr`. Nos demais alvos a varredura é
/// byte a byte.
///
/// # Safety
/// `src` deve apontar para uma string com terminador em memória mapeada.
pub unsafe fn length(src: *const u8) -> usize {
    null_guard!(0; src);

    scan_terminator(src)
}

#[cfg(all(target_arch = "arm", not(miri)))]
#[inline(always)]
unsafe fn scan_terminator(src: *const u8) -> usize {
    use crate::config::WORD_SIZE;
    use crate::ops::word::{self, is_word_aligned};

    let mut p = src;
    while !is_word_aligned(p as usize) {
        if *p == 0 {
            return p.offset_from(src) as usize;
        }
        p = p.add(1);
    }

    loop {
        // lane 0 = primeiro byte na memória (little-endian)
        if let Some(lane) = word::zero_lane(load_aligned(p as *const u32)) {
            return p.offset_from(src) as usize + lane;
        }
        p = p.add(WORD_SIZE);
    }
}

#[cfg(not(all(target_arch = "arm", not(miri))))]
#[inline(always)]
unsafe fn scan_terminator(src: *const u8) -> usize {
    let mut p = src;
    while *p != 0 {
        p = p.add(1);
    }
    p.offset_from(src) as usize
}

/// Lê uma word alinhada com `ldr`.
///
/// A word que contém o terminador pode passar do fim do objeto que o
/// chamador alocou. A leitura fica dentro do `asm!`, fora do modelo de
/// memória do Rust; no hardware uma word alinhada nunca cruza o fim de uma
/// região mapeada.
///
/// # Safety
/// `w` alinhado a word e com pelo menos um byte legível.
#[cfg(all(target_arch = "arm", not(miri)))]
#[inline(always)]
unsafe fn load_aligned(w: *const u32) -> u32 {
    let value: u32;
    core::arch::asm!(
        "ldr {value}, [{addr}]",
        value = out(reg) value,
        addr = in(reg) w,
        options(pure, readonly, nostack, preserves_flags),
    );
    value
}

/// Compara `len` bytes; devolve -1, 0 ou +1.
///
/// # Safety
/// `a` e `b` válidos para leitura de `len` bytes.
pub unsafe fn compare_bytes(a: *const u8, b: *const u8, len: usize) -> i32 {
    null_guard!(0; a, b);

    if a == b || len == 0 {
        return 0;
    }
    let x = slice::from_raw_parts(a, len);
    let y = slice::from_raw_parts(b, len);
    to_c(compare_unchecked_len(x, y, len))
}

/// Compara duas strings; devolve -1, 0 ou +1.
///
/// Compara até o menor dos dois terminadores (inclusive), então nenhuma
/// das strings é lida além do próprio terminador na passada de words.
///
/// # Safety
/// `a` e `b` devem ser strings com terminador em memória mapeada.
pub unsafe fn compare_strings(a: *const u8, b: *const u8) -> i32 {
    null_guard!(0; a, b);

    if a == b {
        return 0;
    }
    // Limita `b` ao próprio terminador para não ler além dele
    let span = length(a).min(length(b)) + 1;
    compare_bytes(a, b, span)
}

/// Anexa `src` ao fim de `dst` e devolve `dst`.
///
/// # Safety
/// - `dst` e `src` devem ser strings com terminador
/// - `dst` precisa de capacidade para `length(dst) + length(src) + 1` bytes
/// - Regiões não devem se sobrepor
pub unsafe fn concatenate(dst: *mut u8, src: *const u8) -> *mut u8 {
    null_guard!(core::ptr::null_mut(); dst, src);

    let head = length(dst);
    let tail = length(src);

    copy(dst.add(head), src, tail);
    *dst.add(head + tail) = 0;
    dst
}

/// Copia a string `src` (com terminador) para `dst` e devolve `dst`.
///
/// # Safety
/// `dst` precisa de capacidade para `length(src) + 1` bytes, sem overlap.
pub unsafe fn copy_string(dst: *mut u8, src: *const u8) -> *mut u8 {
    null_guard!(core::ptr::null_mut(); dst, src);

    copy(dst, src, length(src) + 1)
}

/// Copia no máximo `n` bytes da string `src`, completando com zeros.
///
/// # Safety
/// `dst` válido para `n` bytes; `src` legível até o terminador ou `n` bytes.
pub unsafe fn copy_string_bounded(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    null_guard!(core::ptr::null_mut(); dst, src);

    let mut take = 0;
    while take < n && *src.add(take) != 0 {
        take += 1;
    }
    copy(dst, src, take);
    fill(dst.add(take), 0, n - take);
    dst
}

// =============================================================================
// EXPORTS C (feature `c_abi`)
// =============================================================================

#[cfg(feature = "c_abi")]
mod exports {
    use super::*;

    #[no_mangle]
    pub unsafe extern "C" fn mw_memcpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
        copy(dst, src, n)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_memset(dst: *mut u8, c: u32, n: usize) -> *mut u8 {
        fill(dst, c, n)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_strlen(s: *const u8) -> usize {
        length(s)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_memcmp(a: *const u8, b: *const u8, n: usize) -> i32 {
        compare_bytes(a, b, n)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_strcmp(a: *const u8, b: *const u8) -> i32 {
        compare_strings(a, b)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_strcat(dst: *mut u8, src: *const u8) -> *mut u8 {
        concatenate(dst, src)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_strcpy(dst: *mut u8, src: *const u8) -> *mut u8 {
        copy_string(dst, src)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mw_strncpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
        copy_string_bounded(dst, src, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer alinhado a word para testar todos os deslocamentos iniciais.
    #[repr(C, align(4))]
    struct Aligned([u8; 32]);

    #[test]
    fn test_raw_length_every_start_offset() {
        let mut buf = Aligned([b'z'; 32]);
        buf.0[20] = 0;
        for start in 0..8 {
            let len = unsafe { length(buf.0.as_ptr().add(start)) };
            assert_eq!(len, 20 - start);
        }
    }

    #[test]
    fn test_raw_length_stays_inside_allocation() {
        // Alocação de 6 bytes: a word do terminador passaria do fim
        let buf: Box<[u8]> = Box::new(*b"abcd\0x");
        assert_eq!(buf.len(), 6);
        for start in 0..=4 {
            let len = unsafe { length(buf.as_ptr().add(start)) };
            assert_eq!(len, 4 - start);
        }
        assert_eq!(unsafe { compare_strings(buf.as_ptr(), b"abcd\0".as_ptr()) }, 0);

        let mut dst = [0xFFu8; 6];
        unsafe { copy_string(dst.as_mut_ptr(), buf.as_ptr()) };
        assert_eq!(&dst, b"abcd\0\xFF");
    }

    #[test]
    fn test_raw_copy_and_compare() {
        let src = *b"0123456789abc";
        let mut dst = [0u8; 13];
        let out = unsafe { copy(dst.as_mut_ptr(), src.as_ptr(), 13) };
        assert_eq!(out, dst.as_mut_ptr());
        assert_eq!(dst, src);
        assert_eq!(unsafe { compare_bytes(dst.as_ptr(), src.as_ptr(), 13) }, 0);
        dst[12] = b'0';
        assert_eq!(unsafe { compare_bytes(dst.as_ptr(), src.as_ptr(), 13) }, -1);
    }

    #[test]
    fn test_raw_fill() {
        let mut buf = [0u8; 9];
        unsafe { fill(buf.as_mut_ptr(), 0x1FFFF, 9) };
        assert_eq!(buf, [0xFF; 9]);
    }

    #[test]
    fn test_raw_strings() {
        let mut dst = [0u8; 16];
        dst[..3].copy_from_slice(b"ab\0");
        unsafe { concatenate(dst.as_mut_ptr(), b"cd\0".as_ptr()) };
        assert_eq!(&dst[..5], b"abcd\0");

        assert_eq!(unsafe { compare_strings(b"abc\0".as_ptr(), b"abcd\0".as_ptr()) }, -1);
        assert_eq!(unsafe { compare_strings(b"abd\0".as_ptr(), b"abc\0".as_ptr()) }, 1);
        assert_eq!(unsafe { compare_strings(b"abc\0".as_ptr(), b"abc\0".as_ptr()) }, 0);

        let mut out = [0xAAu8; 6];
        unsafe { copy_string(out.as_mut_ptr(), b"xyz\0".as_ptr()) };
        assert_eq!(&out, b"xyz\0\xAA\xAA");
        unsafe { copy_string_bounded(out.as_mut_ptr(), b"q\0".as_ptr(), 5) };
        assert_eq!(&out, b"q\0\0\0\0\xAA");
    }

    #[cfg(feature = "null_check")]
    #[test]
    fn test_raw_null_guard() {
        use core::ptr;

        let mut buf = [0u8; 4];
        assert!(unsafe { copy(ptr::null_mut(), buf.as_ptr(), 4) }.is_null());
        assert!(unsafe { copy(buf.as_mut_ptr(), ptr::null(), 4) }.is_null());
        assert!(unsafe { fill(ptr::null_mut(), 1, 4) }.is_null());
        assert_eq!(unsafe { length(ptr::null()) }, 0);
        assert_eq!(unsafe { compare_bytes(ptr::null(), buf.as_ptr(), 4) }, 0);
    }
}
