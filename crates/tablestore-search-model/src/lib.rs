//! Search expression model types for the table store search client.
//!
//! This crate holds the plain value types application code builds before a
//! search or parallel-scan request is sent: query predicates, group-bys,
//! aggregations and sorters, plus the top-level request shapes that carry
//! them. The types have no behavior beyond field storage; the wire codec
//! lives in `tablestore-search-core`.
//!
//! Every family is a closed enum with one struct per variant. Structs derive
//! [`typed_builder::TypedBuilder`] so optional fields can be left unset and
//! required fields are checked when the value is encoded, not when it is
//! built.
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::large_enum_variant)]

#[macro_use]
mod macros;

pub mod aggregation;
pub mod column_value;
pub mod group_by;
pub mod kind;
pub mod query;
pub mod request;
pub mod score;
pub mod sort;
pub mod types;

pub use aggregation::Aggregation;
pub use column_value::ColumnValue;
pub use group_by::GroupBy;
pub use kind::{AggregationKind, GroupByKind, QueryKind, SorterKind};
pub use query::Query;
pub use request::{ColumnsToGet, ParallelScanRequest, ScanQuery, SearchQuery, SearchRequest};
pub use sort::{Sort, Sorter};
pub use types::Weight;
