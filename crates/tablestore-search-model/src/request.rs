//! Top-level search and parallel-scan requests.
//!
//! These are the shapes handed to the transport layer. Session and
//! pagination tokens are opaque bytes issued by the service.

use bytes::Bytes;
use typed_builder::TypedBuilder;

use crate::aggregation::Aggregation;
use crate::group_by::GroupBy;
use crate::query::Query;
use crate::sort::Sort;
use crate::types::Highlight;

/// Query, paging and analysis part of a search request.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct SearchQuery {
    /// Rows to skip.
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    /// Maximum rows to return.
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// Row predicate.
    #[builder(default, setter(into, strip_option))]
    pub query: Option<Query>,
    /// Keep only the first row per distinct value of a field.
    #[builder(default, setter(strip_option))]
    pub collapse: Option<Collapse>,
    /// Row order.
    #[builder(default, setter(strip_option))]
    pub sort: Option<Sort>,
    /// Whether the service reports the total match count.
    #[builder(default)]
    pub get_total_count: bool,
    /// Continuation token of the previous page.
    #[builder(default, setter(into, strip_option))]
    pub token: Option<Bytes>,
    /// Aggregations over all matched rows.
    #[builder(default)]
    pub aggregations: Vec<Aggregation>,
    /// Group-bys over all matched rows.
    #[builder(default)]
    pub group_bys: Vec<GroupBy>,
    /// Highlighting, forwarded untouched.
    #[builder(default, setter(strip_option))]
    pub highlight: Option<Highlight>,
}

/// Field-collapsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collapse {
    /// Field whose distinct values collapse. Required.
    pub field_name: Option<String>,
}

impl Collapse {
    /// Collapse on `field_name`.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: Some(field_name.into()),
        }
    }
}

/// Query part of a parallel-scan request.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct ScanQuery {
    /// Row predicate.
    #[builder(default, setter(into, strip_option))]
    pub query: Option<Query>,
    /// Maximum rows per response.
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// Seconds the scan session stays alive between calls.
    #[builder(default, setter(strip_option))]
    pub alive_time: Option<i32>,
    /// Continuation token of the previous response.
    #[builder(default, setter(into, strip_option))]
    pub token: Option<Bytes>,
    /// Partition scanned by this caller.
    #[builder(default, setter(strip_option))]
    pub current_parallel_id: Option<i32>,
    /// Total number of partitions.
    #[builder(default, setter(strip_option))]
    pub max_parallel: Option<i32>,
}

domain_enum! {
    /// Which columns a search returns.
    pub enum ColumnReturnType {
        /// Every column of the table.
        All => "all",
        /// Only the listed columns.
        Specified => "specified",
        /// Primary key only.
        None => "none",
        /// Every column stored in the index.
        AllFromIndex => "all_from_index",
    }
}

/// Column projection of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsToGet {
    /// Projection kind.
    pub return_type: ColumnReturnType,
    /// Column names, used with [`ColumnReturnType::Specified`].
    pub column_names: Vec<String>,
}

impl ColumnsToGet {
    /// Return every column.
    #[must_use]
    pub const fn all() -> Self {
        Self::of(ColumnReturnType::All)
    }

    /// Return the primary key only.
    #[must_use]
    pub const fn none() -> Self {
        Self::of(ColumnReturnType::None)
    }

    /// Return every column stored in the index.
    #[must_use]
    pub const fn all_from_index() -> Self {
        Self::of(ColumnReturnType::AllFromIndex)
    }

    /// Return the named columns.
    #[must_use]
    pub fn specified<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            return_type: ColumnReturnType::Specified,
            column_names: column_names.into_iter().map(Into::into).collect(),
        }
    }

    const fn of(return_type: ColumnReturnType) -> Self {
        Self {
            return_type,
            column_names: Vec::new(),
        }
    }
}

impl Default for ColumnsToGet {
    fn default() -> Self {
        Self::all()
    }
}

/// A search request against one index.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct SearchRequest {
    /// Table name. Required.
    #[builder(default, setter(into, strip_option))]
    pub table_name: Option<String>,
    /// Index name. Required.
    #[builder(default, setter(into, strip_option))]
    pub index_name: Option<String>,
    /// Column projection.
    #[builder(default, setter(strip_option))]
    pub columns_to_get: Option<ColumnsToGet>,
    /// Query and analysis. Required.
    #[builder(default, setter(strip_option))]
    pub search_query: Option<SearchQuery>,
    /// Server-side timeout in milliseconds.
    #[builder(default, setter(strip_option))]
    pub timeout_ms: Option<i32>,
}

/// A parallel-scan request against one index.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct ParallelScanRequest {
    /// Table name. Required.
    #[builder(default, setter(into, strip_option))]
    pub table_name: Option<String>,
    /// Index name. Required.
    #[builder(default, setter(into, strip_option))]
    pub index_name: Option<String>,
    /// Column projection.
    #[builder(default, setter(strip_option))]
    pub columns_to_get: Option<ColumnsToGet>,
    /// Scan session lease issued by the service.
    #[builder(default, setter(into, strip_option))]
    pub session_id: Option<Bytes>,
    /// Query and partitioning. Required.
    #[builder(default, setter(strip_option))]
    pub scan_query: Option<ScanQuery>,
    /// Server-side timeout in milliseconds.
    #[builder(default, setter(strip_option))]
    pub timeout_ms: Option<i32>,
}
