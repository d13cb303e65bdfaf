//! Утилиты сортировки для табличных заголовков

use crate::shared::datatable::SortDir;

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, dir: SortDir) -> &'static str {
    if current_field == Some(field) {
        match dir {
            SortDir::Asc => " ▲",
            SortDir::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора (активная колонка подсвечивается)
pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("name"), "name", SortDir::Asc), " ▲");
        assert_eq!(
            get_sort_indicator(Some("name"), "name", SortDir::Desc),
            " ▼"
        );
        assert_eq!(get_sort_indicator(Some("name"), "email", SortDir::Asc), " ⇅");
        assert_eq!(get_sort_indicator(None, "email", SortDir::Asc), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(
            get_sort_class(Some("name"), "name"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class(None, "name"), "table__sort-indicator");
    }
}
