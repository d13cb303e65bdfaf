//! Сборка query-строки list-эндпоинта из состояния таблицы

use std::collections::BTreeMap;

use urlencoding::encode;

use super::types::{FilterValue, SortDir};

/// Протокол эндпоинта: активные фильтры, `start`/`length` пагинации,
/// `sortBy`/`sortDir` при заданной сортировке. Массивные значения
/// повторяют ключ. Значения percent-кодируются.
pub fn build_list_query(
    filters: &BTreeMap<String, FilterValue>,
    current_page: usize,
    rows_per_page: usize,
    sort_by: Option<&str>,
    sort_dir: SortDir,
) -> String {
    let mut pairs: Vec<String> = Vec::new();

    for (field, value) in filters {
        match value {
            FilterValue::Text(text) => {
                pairs.push(format!("{}={}", encode(field), encode(text)));
            }
            FilterValue::Flag(flag) => {
                pairs.push(format!("{}={}", encode(field), flag));
            }
            FilterValue::Many(values) => {
                for item in values {
                    pairs.push(format!("{}={}", encode(field), encode(item)));
                }
            }
        }
    }

    pairs.push(format!("start={}", current_page * rows_per_page));
    pairs.push(format!("length={}", rows_per_page));

    if let Some(field) = sort_by {
        pairs.push(format!("sortBy={}", encode(field)));
        pairs.push(format!("sortDir={}", sort_dir.as_str()));
    }

    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_only() {
        let query = build_list_query(&BTreeMap::new(), 2, 25, None, SortDir::Asc);
        assert_eq!(query, "start=50&length=25");
    }

    #[test]
    fn test_sort_params() {
        let query = build_list_query(&BTreeMap::new(), 0, 10, Some("name"), SortDir::Desc);
        assert_eq!(query, "start=0&length=10&sortBy=name&sortDir=desc");
    }

    #[test]
    fn test_filters_precede_paging() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), FilterValue::Text("blocked".into()));
        filters.insert("only_mine".to_string(), FilterValue::Flag(true));
        let query = build_list_query(&filters, 0, 10, None, SortDir::Asc);
        assert_eq!(query, "only_mine=true&status=blocked&start=0&length=10");
    }

    #[test]
    fn test_many_repeats_key() {
        let mut filters = BTreeMap::new();
        filters.insert(
            "doctor".to_string(),
            FilterValue::Many(vec!["d1".into(), "d2".into()]),
        );
        let query = build_list_query(&filters, 0, 10, None, SortDir::Asc);
        assert_eq!(query, "doctor=d1&doctor=d2&start=0&length=10");
    }

    #[test]
    fn test_values_are_encoded() {
        let mut filters = BTreeMap::new();
        filters.insert("search".to_string(), FilterValue::Text("Иванов И".into()));
        let query = build_list_query(&filters, 0, 10, None, SortDir::Asc);
        assert_eq!(
            query,
            "search=%D0%98%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2%20%D0%98&start=0&length=10"
        );
    }
}
