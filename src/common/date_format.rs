// src/common/date_format.rs

use chrono::{NaiveDate, NaiveTime};

use crate::middleware::i18n::Locale;

/// Data por extenso, como aparece no seletor de data do painel.
/// `2024-03-01` vira "1 de março de 2024" (pt-BR) ou "March 1, 2024" (en).
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::PtBr => date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%-d de %B de %Y", chrono::Locale::pt_BR)
            .to_string(),
        Locale::En => date.format("%B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn portuguese_long_form() {
        assert_eq!(long_date(day(2024, 3, 1), Locale::PtBr), "1 de março de 2024");
        assert_eq!(long_date(day(2024, 12, 25), Locale::PtBr), "25 de dezembro de 2024");
    }

    #[test]
    fn english_long_form() {
        assert_eq!(long_date(day(2024, 3, 1), Locale::En), "March 1, 2024");
    }
}
