//! Tipos de Erro das Primitivas de Memória
//!
//! Onde a libc teria comportamento indefinido (buffer pequeno, string sem
//! terminador) a API segura devolve um erro estruturado.

/// Erros das primitivas de memória
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemError {
    /// Comprimento pedido maior que a capacidade de um dos buffers
    CapacityExceeded,
    /// Nenhum byte zero dentro da região endereçável
    MissingTerminator,
    /// Varredura limitada atingiu o máximo antes do terminador
    ScanLimitExceeded,
}

impl MemError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CapacityExceeded => "Capacidade do buffer excedida",
            Self::MissingTerminator => "String sem terminador nulo",
            Self::ScanLimitExceeded => "Limite de varredura atingido",
        }
    }
}

impl core::fmt::Display for MemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tipo Result específico para operações de memória
pub type MemResult<T> = Result<T, MemError>;

/// Garante que `len` cabe em um buffer de `capacity` bytes
#[inline(always)]
pub(crate) fn ensure_capacity(len: usize, capacity: usize) -> MemResult<()> {
    if len > capacity {
        return Err(MemError::CapacityExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_capacity_limits() {
        assert_eq!(ensure_capacity(0, 0), Ok(()));
        assert_eq!(ensure_capacity(16, 16), Ok(()));
        assert_eq!(ensure_capacity(17, 16), Err(MemError::CapacityExceeded));
    }

    #[test]
    fn test_error_descriptions_are_distinct() {
        let all = [
            MemError::CapacityExceeded,
            MemError::MissingTerminator,
            MemError::ScanLimitExceeded,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
