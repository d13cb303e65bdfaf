use leptos::prelude::*;

/// Допустимые размеры страницы
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Строка таблицы: стабильный id плюс текст полей для стандартного рендера
pub trait DataRow {
    fn id(&self) -> String;

    /// Текст поля для ячейки без кастомного рендера.
    /// `None` и неизвестные поля отображаются пустой строкой.
    fn field_text(&self, field: &str) -> Option<String>;
}

/// Значение фильтра: скаляр, набор значений или флажок
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Many(Vec<String>),
    Flag(bool),
}

impl FilterValue {
    /// Пустые значения не попадают в состояние фильтров
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Many(values) => values.is_empty(),
            FilterValue::Flag(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            FilterValue::Many(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Контекст кастомного рендера ячейки
#[derive(Clone)]
pub struct CellContext<T: 'static> {
    /// Текст поля по умолчанию (field_text)
    pub value: Option<String>,
    pub row: T,
    /// Перезапрос текущей страницы (после мутации из ячейки)
    pub refresh: Callback<()>,
}

/// Стратегия рендера ячейки
#[derive(Clone)]
pub enum CellRender<T: 'static> {
    /// field_text как есть
    Text,
    Custom(Callback<CellContext<T>, AnyView>),
}

/// Статическое описание колонки; неизменно на всё время жизни таблицы
#[derive(Clone)]
pub struct Column<T: 'static> {
    pub field: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub width: Option<&'static str>,
    pub render: CellRender<T>,
}

impl<T: 'static> Column<T> {
    pub fn text(field: &'static str, label: &'static str, sortable: bool) -> Self {
        Self {
            field,
            label,
            sortable,
            width: None,
            render: CellRender::Text,
        }
    }

    pub fn custom(
        field: &'static str,
        label: &'static str,
        sortable: bool,
        render: Callback<CellContext<T>, AnyView>,
    ) -> Self {
        Self {
            field,
            label,
            sortable,
            width: None,
            render: CellRender::Custom(render),
        }
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Привязка кастомного контрола фильтра к черновику тулбара
#[derive(Clone)]
pub struct FilterBinding {
    pub value: Signal<Option<FilterValue>>,
    pub set: Callback<Option<FilterValue>>,
}

/// Тип контрола фильтра в тулбаре
#[derive(Clone)]
pub enum FilterKind {
    Text,
    Number,
    Date,
    Select(Vec<SelectOption>),
    Checkbox,
    /// Опции подгружаются из другого list-эндпоинта (id + label_field)
    RemoteSelect {
        endpoint: &'static str,
        label_field: &'static str,
    },
    RemoteMultiSelect {
        endpoint: &'static str,
        label_field: &'static str,
    },
    Custom(Callback<FilterBinding, AnyView>),
}

/// Статическое описание фильтра
#[derive(Clone)]
pub struct FilterDef {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    pub default: Option<FilterValue>,
}

impl FilterDef {
    pub fn new(field: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self {
            field,
            label,
            kind,
            default: None,
        }
    }

    pub fn default_value(mut self, value: FilterValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// Контекст массовой операции
#[derive(Clone)]
pub struct BulkContext<T: 'static> {
    pub rows: Vec<T>,
    pub refresh: Callback<()>,
}

/// Массовая операция над выбранными строками
#[derive(Clone)]
pub struct BulkAction<T: 'static> {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: Callback<BulkContext<T>>,
    pub disabled: Option<Callback<Vec<T>, bool>>,
}

impl<T: Clone + 'static> BulkAction<T> {
    pub fn new(label: &'static str, icon: &'static str, action: Callback<BulkContext<T>>) -> Self {
        Self {
            label,
            icon,
            action,
            disabled: None,
        }
    }

    pub fn disabled_when(mut self, predicate: Callback<Vec<T>, bool>) -> Self {
        self.disabled = Some(predicate);
        self
    }

    /// Доступность кнопки для текущего выбора
    pub fn is_disabled(&self, rows: &[T]) -> bool {
        match &self.disabled {
            Some(predicate) => predicate.run(rows.to_vec()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_value_blank() {
        assert!(FilterValue::Text(String::new()).is_blank());
        assert!(FilterValue::Many(vec![]).is_blank());
        assert!(!FilterValue::Text("a".into()).is_blank());
        assert!(!FilterValue::Flag(false).is_blank());
    }

    #[test]
    fn test_sort_dir_toggle() {
        assert_eq!(SortDir::Asc.toggled(), SortDir::Desc);
        assert_eq!(SortDir::Desc.toggled(), SortDir::Asc);
    }

    #[test]
    fn test_bulk_action_disabled_predicate() {
        let action = BulkAction::<String>::new("Удалить", "trash", Callback::new(|_| ()))
            .disabled_when(Callback::new(|rows: Vec<String>| rows.len() > 5));

        let five: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        let six: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        assert!(!action.is_disabled(&five));
        assert!(action.is_disabled(&six));
    }

    #[test]
    fn test_bulk_action_without_predicate_is_enabled() {
        let action = BulkAction::<String>::new("Отмена", "x", Callback::new(|_| ()));
        assert!(!action.is_disabled(&["a".to_string()]));
    }
}
