use serde::{Deserialize, Serialize};

/// Конверт постраничного ответа всех list-эндпоинтов.
///
/// `records_total` — всего записей без учёта фильтров,
/// `records_filtered` — записей, удовлетворяющих текущим фильтрам.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsPage<T> {
    pub data: Vec<T>,
    #[serde(rename = "recordsTotal")]
    pub records_total: usize,
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_envelope_field_names() {
        let json = r#"{"data":[{"id":"1"}],"recordsTotal":47,"recordsFiltered":12}"#;
        let page: RecordsPage<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.records_total, 47);
        assert_eq!(page.records_filtered, 12);
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let page = RecordsPage::<Row> {
            data: Vec::new(),
            records_total: 0,
            records_filtered: 0,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("recordsTotal"));
        assert!(json.contains("recordsFiltered"));
    }

    #[test]
    fn test_missing_counts_is_error() {
        let json = r#"{"data":[]}"#;
        assert!(serde_json::from_str::<RecordsPage<Row>>(json).is_err());
    }
}
