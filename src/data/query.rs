//! Query parameter builder.
//!
//! Maps user-facing list parameters (sort, page, filter) onto a [`ListQuery`] descriptor and
//! from there onto PostgREST query string parameters. Building is pure: identical inputs
//! always produce identical queries, which is what lets a [`ListQuery`] key the list cache.

use crate::{
    error::validation::ValidationError,
    model::list::{Column, ColumnKind, ListState, SortColumn, SortDirection},
};

/// Page size used when none is given.
pub const FALLBACK_PAGE_SIZE: u32 = 10;

/// Raw list parameters, every field optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams<S, F> {
    pub field: Option<S>,
    pub direction: Option<SortDirection>,
    /// 1-based page number
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_field: Option<F>,
    pub filter_value: Option<String>,
}

impl<S, F> Default for ListParams<S, F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: None,
            page: None,
            page_size: None,
            filter_field: None,
            filter_value: None,
        }
    }
}

impl<S: SortColumn, F: Column> From<&ListState<S, F>> for ListParams<S, F> {
    fn from(state: &ListState<S, F>) -> Self {
        let filter = state.active_filter();

        Self {
            field: Some(state.sort_field()),
            direction: Some(state.sort_direction()),
            page: Some(state.page()),
            page_size: Some(state.page_size()),
            filter_field: filter.map(|(field, _)| field),
            filter_value: filter.map(|(_, value)| value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    pub column: &'static str,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Case-insensitive substring match (`ilike`).
    Contains { column: &'static str, value: String },
    /// Exact numeric match (`eq`).
    Equals { column: &'static str, value: i64 },
}

/// Backend-agnostic description of one list request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub order: Order,
    pub offset: u64,
    /// `None` fetches every matching row.
    pub limit: Option<u64>,
    pub filter: Option<Filter>,
}

impl ListQuery {
    /// Every row, ordered by a single column. Used for dropdown options.
    pub fn unpaginated(column: &'static str, direction: SortDirection) -> Self {
        Self {
            order: Order { column, direction },
            offset: 0,
            limit: None,
            filter: None,
        }
    }

    /// Encodes the query as PostgREST query string parameters.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "order".to_string(),
            format!("{}.{}", self.order.column, self.order.direction.as_str()),
        )];

        params.push(("offset".to_string(), self.offset.to_string()));

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        match &self.filter {
            Some(Filter::Contains { column, value }) => {
                params.push((column.to_string(), format!("ilike.*{}*", value)));
            }
            Some(Filter::Equals { column, value }) => {
                params.push((column.to_string(), format!("eq.{}", value)));
            }
            None => (),
        }

        params
    }
}

/// Builds a list query from optional parameters.
///
/// # Arguments
/// - `params` - Sort, pagination and filter parameters
///
/// # Returns
/// - `Ok(ListQuery)` - Query with `offset = (page - 1) * page_size` and `limit = page_size`
/// - `Err(ValidationError::InvalidFilterValue)` - Foreign key filter value is not an integer
pub fn build_list_query<S: SortColumn, F: Column>(
    params: &ListParams<S, F>,
) -> Result<ListQuery, ValidationError> {
    let field = params.field.unwrap_or(S::ID);
    let direction = params.direction.unwrap_or_default();
    let page = params.page.unwrap_or(1).max(1) as u64;
    let page_size = params.page_size.unwrap_or(FALLBACK_PAGE_SIZE).max(1) as u64;

    let filter = match (params.filter_field, params.filter_value.as_deref()) {
        (Some(filter_field), Some(value)) if !value.trim().is_empty() => {
            Some(build_filter(filter_field, value.trim())?)
        }
        _ => None,
    };

    Ok(ListQuery {
        order: Order {
            column: field.column_name(),
            direction,
        },
        offset: (page - 1) * page_size,
        limit: Some(page_size),
        filter,
    })
}

fn build_filter<F: Column>(field: F, value: &str) -> Result<Filter, ValidationError> {
    match field.kind() {
        ColumnKind::Text => Ok(Filter::Contains {
            column: field.column_name(),
            value: value.to_string(),
        }),
        ColumnKind::ForeignKey => {
            let id = value
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidFilterValue {
                    label: field.label(),
                    value: value.to_string(),
                })?;

            Ok(Filter::Equals {
                column: field.column_name(),
                value: id,
            })
        }
    }
}
