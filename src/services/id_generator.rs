// src/services/id_generator.rs

use std::{fmt, str::FromStr};

/// Gera o próximo ID de ficha a partir de uma contagem: `F` + (contagem + 1)
/// com pelo menos 3 dígitos. Contagem 3 vira `F004`; acima de 999 o número
/// cresce sem truncar (`F1000`).
pub fn next_id(current_count: usize) -> String {
    // u128 para que a soma nunca estoure
    format!("F{:03}", current_count as u128 + 1)
}

/// Lê o sufixo numérico de um ID no formato `F###`.
pub fn sequence_of(id: &str) -> Option<usize> {
    let digits = id.strip_prefix('F')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// De onde sai a contagem passada para [`next_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Marca d'água que só sobe: nunca reemite um ID, mesmo após exclusões.
    #[default]
    Monotonic,
    /// Tamanho atual do store. Pode repetir o ID de uma ficha viva depois
    /// de uma exclusão.
    StoreSize,
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "store-size" | "store_size" => Ok(Self::StoreSize),
            other => Err(format!("política de ID desconhecida: '{other}'")),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monotonic => f.write_str("monotonic"),
            Self::StoreSize => f.write_str("store-size"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(next_id(0), "F001");
        assert_eq!(next_id(3), "F004");
        assert_eq!(next_id(98), "F099");
    }

    #[test]
    fn grows_past_three_digits() {
        assert_eq!(next_id(999), "F1000");
    }

    #[test]
    fn largest_count_does_not_overflow() {
        assert_eq!(next_id(usize::MAX), format!("F{}", usize::MAX as u128 + 1));
    }

    #[test]
    fn reads_sequence_back() {
        assert_eq!(sequence_of("F004"), Some(4));
        assert_eq!(sequence_of("F1000"), Some(1000));
        assert_eq!(sequence_of("X004"), None);
        assert_eq!(sequence_of("F"), None);
        assert_eq!(sequence_of("F+12"), None);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("monotonic".parse::<IdPolicy>(), Ok(IdPolicy::Monotonic));
        assert_eq!(" Store-Size ".parse::<IdPolicy>(), Ok(IdPolicy::StoreSize));
        assert!("random".parse::<IdPolicy>().is_err());
    }
}
