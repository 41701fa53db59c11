//! # Visão em Words
//!
//! Reinterpreta um buffer de bytes como uma sequência de words de 32 bits
//! seguida de um resto de 0..3 bytes. O limite é calculado uma única vez a
//! partir do comprimento, então nenhum acesso passa do fim do slice.
//!
//! Lanes são numerados na ordem de memória: o lane 0 é o primeiro byte,
//! que é o byte menos significativo da word (leitura little-endian, igual
//! ao Cortex-M).

use core::slice::{ChunksExact, ChunksExactMut};

use crate::config::{LANE_MASK, WORD_SIZE};

/// Alinha um comprimento para baixo ao múltiplo de `WORD_SIZE`.
///
/// # Exemplo
/// `word_floor(10) -> 8`
#[inline(always)]
pub const fn word_floor(len: usize) -> usize {
    len & !(WORD_SIZE - 1)
}

/// Bytes que sobram depois do laço de words (0..3).
#[inline(always)]
pub const fn remainder_len(len: usize) -> usize {
    len & (WORD_SIZE - 1)
}

/// Verifica se um endereço está alinhado a word.
#[inline(always)]
pub const fn is_word_aligned(addr: usize) -> bool {
    (addr & (WORD_SIZE - 1)) == 0
}

/// Carrega uma word de um pedaço de exatamente `WORD_SIZE` bytes.
#[inline(always)]
pub fn load(chunk: &[u8]) -> u32 {
    u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}

/// Grava uma word em um pedaço de exatamente `WORD_SIZE` bytes.
#[inline(always)]
pub fn store(chunk: &mut [u8], word: u32) {
    chunk.copy_from_slice(&word.to_le_bytes());
}

/// Valor do lane `lane` (0..3) de uma word.
#[inline(always)]
pub const fn lane(word: u32, lane: usize) -> u8 {
    ((word >> (lane * 8)) & LANE_MASK) as u8
}

/// Índice do primeiro lane nulo, testando do menos significativo para o
/// mais significativo com uma máscara por lane.
#[inline(always)]
pub const fn zero_lane(word: u32) -> Option<usize> {
    if word & 0x0000_00FF == 0 {
        Some(0)
    } else if word & 0x0000_FF00 == 0 {
        Some(1)
    } else if word & 0x00FF_0000 == 0 {
        Some(2)
    } else if word & 0xFF00_0000 == 0 {
        Some(3)
    } else {
        None
    }
}

/// Visão somente-leitura: words inteiras e depois o resto.
pub struct WordView<'a> {
    words: ChunksExact<'a, u8>,
    offset: usize,
}

impl<'a> WordView<'a> {
    /// Cria a visão sobre os primeiros `len` bytes de `buf`.
    ///
    /// `len` deve caber em `buf` (verificado pelos chamadores).
    pub fn new(buf: &'a [u8], len: usize) -> Self {
        Self {
            words: buf[..len].chunks_exact(WORD_SIZE),
            offset: 0,
        }
    }

    /// Deslocamento em bytes da próxima word a ser lida.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes finais que não formam uma word (0..3).
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        self.words.remainder()
    }
}

impl Iterator for WordView<'_> {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<u32> {
        let chunk = self.words.next()?;
        self.offset += WORD_SIZE;
        Some(load(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}

/// Visão mutável: fatias de uma word para escrita e depois o resto.
pub struct WordViewMut<'a> {
    words: ChunksExactMut<'a, u8>,
}

impl<'a> WordViewMut<'a> {
    /// Cria a visão sobre os primeiros `len` bytes de `buf`.
    pub fn new(buf: &'a mut [u8], len: usize) -> Self {
        Self {
            words: buf[..len].chunks_exact_mut(WORD_SIZE),
        }
    }

    /// Consome a visão e devolve o resto (0..3 bytes) para escrita.
    #[inline]
    pub fn into_remainder(self) -> &'a mut [u8] {
        self.words.into_remainder()
    }
}

impl<'a> Iterator for WordViewMut<'a> {
    type Item = &'a mut [u8];

    #[inline(always)]
    fn next(&mut self) -> Option<&'a mut [u8]> {
        self.words.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}
