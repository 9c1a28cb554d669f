// src/services/date_filter.rs

use chrono::NaiveDate;

use crate::models::ficha::Ficha;

/// Dia de calendário em que a ficha foi criada, no offset gravado na própria
/// ficha. Não altera `creation_date`.
pub fn creation_day(ficha: &Ficha) -> NaiveDate {
    ficha.creation_date.date_naive()
}

/// Fichas visíveis para o dia selecionado, na ordem recebida.
/// Sem dia selecionado, devolve todas.
pub fn visible<'a, I>(fichas: I, selected_date: Option<NaiveDate>) -> Vec<&'a Ficha>
where
    I: IntoIterator<Item = &'a Ficha>,
{
    match selected_date {
        None => fichas.into_iter().collect(),
        Some(day) => fichas
            .into_iter()
            .filter(|ficha| creation_day(ficha) == day)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ficha::FichaDraft;
    use chrono::DateTime;

    fn ficha(id: &str, created: &str) -> Ficha {
        FichaDraft::new("C001", "Maria")
            .complete(id.to_string(), DateTime::parse_from_rfc3339(created).unwrap())
    }

    fn ids(fichas: Vec<&Ficha>) -> Vec<&str> {
        fichas.into_iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn no_date_returns_everything_in_order() {
        let all = vec![
            ficha("F003", "2024-03-02T00:05:00-03:00"),
            ficha("F002", "2024-03-01T23:50:00-03:00"),
            ficha("F001", "2024-02-28T10:00:00-03:00"),
        ];

        assert_eq!(ids(visible(&all, None)), ["F003", "F002", "F001"]);
    }

    #[test]
    fn midnight_splits_days() {
        let all = vec![
            ficha("F002", "2024-03-02T00:05:00-03:00"),
            ficha("F001", "2024-03-01T23:50:00-03:00"),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(ids(visible(&all, Some(day))), ["F001"]);
    }

    #[test]
    fn day_is_taken_in_the_record_offset() {
        // 23:50 em São Paulo já é dia 2 em UTC
        let all = vec![ficha("F001", "2024-03-01T23:50:00-03:00")];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(ids(visible(&all, Some(day))), ["F001"]);
        assert_eq!(all[0].creation_date.to_rfc3339(), "2024-03-01T23:50:00-03:00");
    }

    #[test]
    fn keeps_insertion_order_among_matches() {
        let all = vec![
            ficha("F004", "2024-03-01T08:00:00-03:00"),
            ficha("F003", "2024-03-05T12:00:00-03:00"),
            ficha("F002", "2024-03-01T18:00:00-03:00"),
            ficha("F001", "2024-03-01T07:00:00-03:00"),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(ids(visible(&all, Some(day))), ["F004", "F002", "F001"]);
    }

    #[test]
    fn empty_day_yields_nothing() {
        let all = vec![ficha("F001", "2024-03-01T08:00:00-03:00")];
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        assert!(visible(&all, Some(day)).is_empty());
    }
}
