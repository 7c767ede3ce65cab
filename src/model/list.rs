//! List state types shared by the make and model lists.
//!
//! A [`ListState`] combines sorting, filtering and pagination for one list view. Every change
//! that alters the result set resets the page to 1, so the state never points past the end of
//! a freshly filtered or re-sorted list.

use std::{fmt::Debug, hash::Hash};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Page size used when no state has been persisted yet.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Storage key of the persisted make list state.
pub const MAKE_LIST_STATE_KEY: &str = "vehicleMakeListState";
/// Storage key of the persisted model list state.
pub const MODEL_LIST_STATE_KEY: &str = "vehicleModelListState";

/// How a column is matched when used as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Case-insensitive substring match.
    Text,
    /// Exact numeric match on a foreign key.
    ForeignKey,
}

/// A backend column that can be sorted or filtered on.
pub trait Column:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + PartialEq + 'static
{
    /// Column selected on first load.
    const DEFAULT: Self;

    /// Every column in display order.
    fn all() -> &'static [Self];

    /// Backend column name.
    fn column_name(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    fn kind(&self) -> ColumnKind {
        ColumnKind::Text
    }

    fn from_column_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|column| column.column_name() == name)
    }
}

/// A column a list can be ordered by.
pub trait SortColumn: Column {
    /// Fallback ordering when no sort field is given.
    const ID: Self;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MakeSortField {
    Name,
    Abrv,
    Id,
}

impl Column for MakeSortField {
    const DEFAULT: Self = Self::Name;

    fn all() -> &'static [Self] {
        &[Self::Name, Self::Abrv, Self::Id]
    }

    fn column_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Abrv => "abrv",
            Self::Id => "id",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Abrv => "Abbreviation",
            Self::Id => "ID",
        }
    }
}

impl SortColumn for MakeSortField {
    const ID: Self = Self::Id;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MakeFilterField {
    Name,
    Abrv,
}

impl Column for MakeFilterField {
    const DEFAULT: Self = Self::Name;

    fn all() -> &'static [Self] {
        &[Self::Name, Self::Abrv]
    }

    fn column_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Abrv => "abrv",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Abrv => "Abbreviation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSortField {
    Name,
    Abrv,
    Id,
    MakeId,
}

impl Column for ModelSortField {
    const DEFAULT: Self = Self::Name;

    fn all() -> &'static [Self] {
        &[Self::Name, Self::Abrv, Self::Id, Self::MakeId]
    }

    fn column_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Abrv => "abrv",
            Self::Id => "id",
            Self::MakeId => "make_id",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => "Model Name",
            Self::Abrv => "Abbreviation",
            Self::Id => "ID",
            Self::MakeId => "Manufacturer",
        }
    }
}

impl SortColumn for ModelSortField {
    const ID: Self = Self::Id;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFilterField {
    Name,
    Abrv,
    MakeId,
}

impl Column for ModelFilterField {
    const DEFAULT: Self = Self::Name;

    fn all() -> &'static [Self] {
        &[Self::Name, Self::Abrv, Self::MakeId]
    }

    fn column_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Abrv => "abrv",
            Self::MakeId => "make_id",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => "Model Name",
            Self::Abrv => "Abbreviation",
            Self::MakeId => "Manufacturer",
        }
    }

    fn kind(&self) -> ColumnKind {
        match self {
            Self::MakeId => ColumnKind::ForeignKey,
            _ => ColumnKind::Text,
        }
    }
}

/// Sort, filter and pagination state of one list view.
///
/// Serialized with the field names `sortField`, `sortDir`, `page`, `pageSize`,
/// `filterField` and `filterValue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState<S, F> {
    sort_field: S,
    #[serde(rename = "sortDir", alias = "sortDirection")]
    sort_direction: SortDirection,
    page: u32,
    page_size: u32,
    filter_field: F,
    filter_value: String,
}

pub type MakeListState = ListState<MakeSortField, MakeFilterField>;
pub type ModelListState = ListState<ModelSortField, ModelFilterField>;

impl<S: SortColumn, F: Column> Default for ListState<S, F> {
    fn default() -> Self {
        Self {
            sort_field: S::DEFAULT,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter_field: F::DEFAULT,
            filter_value: String::new(),
        }
    }
}

impl<S: SortColumn, F: Column> ListState<S, F> {
    pub fn sort_field(&self) -> S {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filter_field(&self) -> F {
        self.filter_field
    }

    pub fn filter_value(&self) -> &str {
        &self.filter_value
    }

    /// Returns the filter to apply, `None` when the value is blank.
    pub fn active_filter(&self) -> Option<(F, &str)> {
        let value = self.filter_value.trim();

        if value.is_empty() {
            None
        } else {
            Some((self.filter_field, value))
        }
    }

    pub fn set_sort_field(&mut self, field: S) {
        self.sort_field = field;
        self.page = 1;
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Changes the filter column.
    ///
    /// Switching between a text column and a foreign key column clears the value, a
    /// substring typed for a name is never a valid manufacturer ID and vice versa.
    pub fn set_filter_field(&mut self, field: F) {
        if field.kind() != self.filter_field.kind() {
            self.filter_value.clear();
        }

        self.filter_field = field;
        self.page = 1;
    }

    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        self.filter_value = value.into();
        self.page = 1;
    }

    /// Jumps to a page, clamped to the first page.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    /// A full page implies more rows may follow, a short page is the last one.
    pub fn has_next_page(&self, last_page_len: usize) -> bool {
        last_page_len == self.page_size as usize
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advances one page if the last response was full, returns whether it advanced.
    pub fn next_page(&mut self, last_page_len: usize) -> bool {
        if self.has_next_page(last_page_len) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Repairs values a hand-edited or outdated persisted state may carry.
    pub fn sanitized(mut self) -> Self {
        self.page = self.page.max(1);
        self.page_size = self.page_size.max(1);
        self
    }
}
