//! Машина состояния таблицы
//!
//! Чистая структура без реактивности и сети: все переходы — синхронные
//! методы, поэтому машина тестируется на host-таргете без DOM.
//! Методы, меняющие результирующую выборку, возвращают `true` —
//! контроллер в этом случае обязан выполнить ровно один запрос.

use std::collections::{BTreeMap, HashSet};

use contracts::shared::records::RecordsPage;

use super::query::build_list_query;
use super::types::{DataRow, FilterValue, SortDir, PAGE_SIZES};

#[derive(Debug, Clone)]
pub struct TableState<T> {
    /// Текущая страница записей; заменяется целиком при каждом успешном ответе
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Номер страницы, с нуля
    pub current_page: usize,
    pub rows_per_page: usize,
    /// recordsTotal сервера — всего записей без учёта фильтров
    pub record_count: usize,
    /// ceil(recordsFiltered / rows_per_page); пересчитывается после ответа
    pub pages: usize,
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
    /// Выбор переживает листание: строки с других страниц остаются
    pub selected_rows: Vec<T>,
    pub visible_columns: Vec<String>,
    pub filters: BTreeMap<String, FilterValue>,

    declared_columns: Vec<String>,
    /// Монотонный номер запроса; ответы чужих поколений игнорируются
    generation: u64,
    /// Query последнего отправленного и последнего применённого запроса.
    /// Совпадение означает refresh той же выборки — только тогда
    /// выбор сверяется со свежей страницей.
    pending_query: String,
    applied_query: Option<String>,
}

impl<T: DataRow + Clone> TableState<T> {
    pub fn new(declared_columns: Vec<String>) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            current_page: 0,
            rows_per_page: PAGE_SIZES[0],
            record_count: 0,
            pages: 0,
            sort_by: None,
            sort_dir: SortDir::Asc,
            selected_rows: Vec::new(),
            visible_columns: declared_columns.clone(),
            filters: BTreeMap::new(),
            declared_columns,
            generation: 0,
            pending_query: String::new(),
            applied_query: None,
        }
    }

    pub fn set_current_page(&mut self, page: usize) -> bool {
        self.current_page = page;
        true
    }

    /// Размеры вне допустимого набора игнорируются
    pub fn set_rows_per_page(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.rows_per_page = size;
        self.current_page = 0;
        true
    }

    /// Повторный клик по текущей колонке меняет направление
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_dir = SortDir::Asc;
        }
        true
    }

    /// Заменяет фильтры целиком, отбросив пустые значения,
    /// и возвращает на первую страницу
    pub fn apply_filters(&mut self, values: BTreeMap<String, FilterValue>) -> bool {
        self.filters = values.into_iter().filter(|(_, v)| !v.is_blank()).collect();
        self.current_page = 0;
        true
    }

    /// Стартовые значения фильтров до первого запроса
    pub fn seed_filters(&mut self, values: BTreeMap<String, FilterValue>) {
        self.filters = values.into_iter().filter(|(_, v)| !v.is_blank()).collect();
    }

    /// Видимость колонок — только отображение, без перезапроса.
    /// Неизвестные поля отбрасываются, порядок объявления сохраняется.
    pub fn set_visible_columns(&mut self, fields: Vec<String>) {
        self.visible_columns = self
            .declared_columns
            .iter()
            .filter(|column| fields.contains(column))
            .cloned()
            .collect();
    }

    pub fn is_visible(&self, field: &str) -> bool {
        self.visible_columns.iter().any(|c| c == field)
    }

    pub fn toggle_row(&mut self, row: T, checked: bool) {
        let id = row.id();
        self.selected_rows.retain(|r| r.id() != id);
        if checked {
            self.selected_rows.push(row);
        }
    }

    /// Выбор всей текущей страницы. Снятие сбрасывает выбор целиком,
    /// включая строки с других страниц.
    pub fn select_all_on_page(&mut self, checked: bool) {
        if checked {
            self.selected_rows = self.data.clone();
        } else {
            self.selected_rows.clear();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_rows.iter().any(|r| r.id() == id)
    }

    pub fn query_string(&self) -> String {
        build_list_query(
            &self.filters,
            self.current_page,
            self.rows_per_page,
            self.sort_by.as_deref(),
            self.sort_dir,
        )
    }

    /// Начало запроса: новое поколение и query на момент отправки
    pub fn begin_fetch(&mut self) -> (u64, String) {
        self.generation += 1;
        self.loading = true;
        self.pending_query = self.query_string();
        (self.generation, self.pending_query.clone())
    }

    /// Успешный ответ. Ответы устаревших поколений не трогают состояние.
    pub fn apply_page(&mut self, generation: u64, page: RecordsPage<T>) {
        if generation != self.generation {
            return;
        }

        // Refresh той же выборки: строки, бывшие на странице и исчезнувшие
        // из неё (удалены на сервере), выпадают из выбора. При листании
        // query отличается и выбор не трогается.
        if self.applied_query.as_deref() == Some(self.pending_query.as_str()) {
            let prev_ids: HashSet<String> = self.data.iter().map(|r| r.id()).collect();
            let new_ids: HashSet<String> = page.data.iter().map(|r| r.id()).collect();
            self.selected_rows.retain(|row| {
                let id = row.id();
                !prev_ids.contains(&id) || new_ids.contains(&id)
            });
        }

        self.data = page.data;
        self.record_count = page.records_total;
        self.pages = (page.records_filtered + self.rows_per_page - 1) / self.rows_per_page;
        self.applied_query = Some(self.pending_query.clone());
        self.loading = false;
        self.error = None;
    }

    /// Ошибка запроса: данные и выбор остаются как были
    pub fn apply_error(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.error = Some(message);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRow {
        id: String,
        name: String,
    }

    impl DataRow for TestRow {
        fn id(&self) -> String {
            self.id.clone()
        }

        fn field_text(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    fn row(id: &str) -> TestRow {
        TestRow {
            id: id.to_string(),
            name: format!("row {}", id),
        }
    }

    fn page(rows: Vec<TestRow>, total: usize, filtered: usize) -> RecordsPage<TestRow> {
        RecordsPage {
            data: rows,
            records_total: total,
            records_filtered: filtered,
        }
    }

    fn state() -> TableState<TestRow> {
        TableState::new(vec!["name".to_string(), "email".to_string()])
    }

    /// Загружает страницу, как это делает контроллер
    fn load(s: &mut TableState<TestRow>, rows: Vec<TestRow>, total: usize, filtered: usize) {
        let (generation, _) = s.begin_fetch();
        s.apply_page(generation, page(rows, total, filtered));
    }

    #[test]
    fn test_defaults() {
        let s = state();
        assert_eq!(s.rows_per_page, 10);
        assert_eq!(s.current_page, 0);
        assert!(s.filters.is_empty());
        assert_eq!(s.visible_columns, vec!["name", "email"]);
        assert!(!s.loading);
    }

    #[test]
    fn test_one_fetch_per_mutation() {
        let mut s = state();
        let mut fetches = 0;

        for due in [
            s.set_current_page(2),
            s.set_rows_per_page(25),
            s.toggle_sort("name"),
            s.apply_filters(BTreeMap::new()),
        ] {
            if due {
                fetches += 1;
                let (_, query) = s.begin_fetch();
                assert_eq!(query, s.query_string());
            }
        }

        assert_eq!(fetches, 4);
        // выбор и видимость колонок запрос не порождают
        s.toggle_row(row("1"), true);
        s.set_visible_columns(vec!["name".to_string()]);
        s.select_all_on_page(false);
    }

    #[test]
    fn test_filters_reset_page() {
        let mut s = state();
        s.set_current_page(7);
        s.apply_filters(BTreeMap::new());
        assert_eq!(s.current_page, 0);
    }

    #[test]
    fn test_rows_per_page_resets_page() {
        let mut s = state();
        s.set_current_page(3);
        assert!(s.set_rows_per_page(50));
        assert_eq!(s.current_page, 0);
        assert_eq!(s.rows_per_page, 50);
    }

    #[test]
    fn test_rows_per_page_rejects_unknown_size() {
        let mut s = state();
        assert!(!s.set_rows_per_page(33));
        assert_eq!(s.rows_per_page, 10);
    }

    #[test]
    fn test_sort_toggle_sequence() {
        let mut s = state();
        s.toggle_sort("name");
        assert_eq!(s.sort_by.as_deref(), Some("name"));
        assert_eq!(s.sort_dir, SortDir::Asc);
        s.toggle_sort("name");
        assert_eq!(s.sort_by.as_deref(), Some("name"));
        assert_eq!(s.sort_dir, SortDir::Desc);
        s.toggle_sort("email");
        assert_eq!(s.sort_by.as_deref(), Some("email"));
        assert_eq!(s.sort_dir, SortDir::Asc);
    }

    #[test]
    fn test_blank_filters_stripped() {
        let mut s = state();
        let mut values = BTreeMap::new();
        values.insert("status".to_string(), FilterValue::Text("blocked".into()));
        values.insert("name".to_string(), FilterValue::Text(String::new()));
        values.insert("doctor".to_string(), FilterValue::Many(vec![]));
        s.apply_filters(values);

        assert_eq!(s.filters.len(), 1);
        assert_eq!(
            s.filters.get("status"),
            Some(&FilterValue::Text("blocked".into()))
        );
    }

    #[test]
    fn test_pages_derived_from_envelope() {
        let mut s = state();
        load(&mut s, vec![row("1")], 47, 12);
        assert_eq!(s.pages, 2);
        assert_eq!(s.record_count, 47);
        assert!(!s.loading);
        assert!(s.error.is_none());
    }

    #[test]
    fn test_selection_survives_page_change() {
        let mut s = state();
        load(&mut s, vec![row("1"), row("2")], 20, 20);
        s.toggle_row(row("1"), true);

        s.set_current_page(1);
        load(&mut s, vec![row("3"), row("4")], 20, 20);

        assert!(s.is_selected("1"));
        assert!(!s.data.iter().any(|r| r.id == "1"));
    }

    #[test]
    fn test_refresh_prunes_deleted_rows_only() {
        let mut s = state();
        load(&mut s, vec![row("1"), row("2")], 20, 20);
        s.toggle_row(row("1"), true);
        // строка с другой страницы, её id текущая выборка не возвращала
        s.toggle_row(row("9"), true);

        // refresh той же выборки: "1" удалена на сервере
        load(&mut s, vec![row("2")], 19, 19);

        assert!(!s.is_selected("1"));
        assert!(s.is_selected("9"));
    }

    #[test]
    fn test_toggle_row_deduplicates() {
        let mut s = state();
        s.toggle_row(row("1"), true);
        s.toggle_row(row("1"), true);
        assert_eq!(s.selected_rows.len(), 1);
        s.toggle_row(row("1"), false);
        assert!(s.selected_rows.is_empty());
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut s = state();
        load(&mut s, vec![row("1"), row("2")], 20, 20);
        // выбор со "старой" страницы
        s.toggle_row(row("9"), true);

        s.select_all_on_page(true);
        assert_eq!(s.selected_rows.len(), 2);
        assert!(!s.is_selected("9"));

        s.toggle_row(row("9"), true);
        s.select_all_on_page(false);
        assert!(s.selected_rows.is_empty());
    }

    #[test]
    fn test_fetch_error_keeps_data_and_selection() {
        let mut s = state();
        load(&mut s, vec![row("1"), row("2")], 2, 2);
        s.toggle_row(row("1"), true);

        let (generation, _) = s.begin_fetch();
        s.apply_error(generation, "HTTP ошибка: 500".to_string());

        assert_eq!(s.data.len(), 2);
        assert!(s.is_selected("1"));
        assert_eq!(s.error.as_deref(), Some("HTTP ошибка: 500"));
        assert!(!s.loading);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut s = state();
        let (old_generation, _) = s.begin_fetch();
        let (new_generation, _) = s.begin_fetch();

        // медленный устаревший ответ приходит после нового запроса
        s.apply_page(old_generation, page(vec![row("stale")], 1, 1));
        assert!(s.data.is_empty());
        assert!(s.loading);

        s.apply_page(new_generation, page(vec![row("fresh")], 1, 1));
        assert_eq!(s.data.len(), 1);
        assert_eq!(s.data[0].id, "fresh");
        assert!(!s.loading);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut s = state();
        let (old_generation, _) = s.begin_fetch();
        let (new_generation, _) = s.begin_fetch();

        s.apply_error(old_generation, "таймаут".to_string());
        assert!(s.error.is_none());
        assert!(s.loading);

        s.apply_page(new_generation, page(vec![], 0, 0));
        assert!(s.error.is_none());
    }

    #[test]
    fn test_visible_columns_subset_of_declared() {
        let mut s = state();
        s.set_visible_columns(vec!["email".to_string(), "ghost".to_string()]);
        assert_eq!(s.visible_columns, vec!["email"]);
        assert!(!s.is_visible("name"));
        assert!(s.is_visible("email"));
    }

    #[test]
    fn test_query_reflects_state_at_dispatch() {
        let mut s = state();
        let mut values = BTreeMap::new();
        values.insert("status".to_string(), FilterValue::Text("pending".into()));
        s.apply_filters(values);
        s.set_rows_per_page(25);
        s.set_current_page(2);
        s.toggle_sort("name");

        let (_, query) = s.begin_fetch();
        assert_eq!(query, "status=pending&start=50&length=25&sortBy=name&sortDir=asc");
    }
}
