//! Aggregations.
//!
//! Every aggregation carries a `name` under which the service reports its
//! result. All variants are leaves except `TopRows`, which may carry a
//! [`Sort`].

use typed_builder::TypedBuilder;

use crate::column_value::ColumnValue;
use crate::kind::AggregationKind;
use crate::sort::Sort;

family_enum! {
    /// A metric computed over the matched rows or a group-by bucket.
    pub enum Aggregation: AggregationKind {
        /// Arithmetic mean.
        Avg(AvgAggregation),
        /// Row count.
        Count(CountAggregation),
        /// Maximum.
        Max(MaxAggregation),
        /// Minimum.
        Min(MinAggregation),
        /// Sum.
        Sum(SumAggregation),
        /// Approximate distinct count.
        DistinctCount(DistinctCountAggregation),
        /// Percentile estimates.
        Percentiles(PercentilesAggregation),
        /// Top rows.
        TopRows(TopRowsAggregation),
    }
}

impl Aggregation {
    /// The result name of this aggregation.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Avg(agg) => agg.name.as_deref(),
            Self::Count(agg) => agg.name.as_deref(),
            Self::Max(agg) => agg.name.as_deref(),
            Self::Min(agg) => agg.name.as_deref(),
            Self::Sum(agg) => agg.name.as_deref(),
            Self::DistinctCount(agg) => agg.name.as_deref(),
            Self::Percentiles(agg) => agg.name.as_deref(),
            Self::TopRows(agg) => agg.name.as_deref(),
        }
    }
}

/// Declares a single-field metric aggregation with an optional `missing`
/// substitute.
macro_rules! metric_aggregation {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
        pub struct $name {
            /// Result name. Required.
            #[builder(default, setter(into, strip_option))]
            pub name: Option<String>,
            /// Field aggregated. Required.
            #[builder(default, setter(into, strip_option))]
            pub field_name: Option<String>,
            /// Value used for rows missing the field.
            #[builder(default, setter(into, strip_option))]
            pub missing: Option<ColumnValue>,
        }

        impl $name {
            /// Aggregate `field_name`, reporting the result as `name`.
            #[must_use]
            pub fn new(name: impl Into<String>, field_name: impl Into<String>) -> Self {
                Self::builder().name(name).field_name(field_name).build()
            }
        }
    };
}

metric_aggregation! {
    /// Arithmetic mean of a numeric field.
    AvgAggregation
}

metric_aggregation! {
    /// Maximum of a numeric field.
    MaxAggregation
}

metric_aggregation! {
    /// Minimum of a numeric field.
    MinAggregation
}

metric_aggregation! {
    /// Sum of a numeric field.
    SumAggregation
}

metric_aggregation! {
    /// Approximate number of distinct values of a field.
    DistinctCountAggregation
}

/// Number of rows where a field has a value.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder)]
pub struct CountAggregation {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Field counted. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
}

impl CountAggregation {
    /// Count rows where `field_name` is present.
    #[must_use]
    pub fn new(name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::builder().name(name).field_name(field_name).build()
    }
}

/// Percentile estimates of a numeric field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct PercentilesAggregation {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Field aggregated. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Requested percentiles, each in `[0, 100]`.
    #[builder(default)]
    pub percentiles: Vec<f64>,
    /// Value used for rows missing the field.
    #[builder(default, setter(into, strip_option))]
    pub missing: Option<ColumnValue>,
}

/// The first rows of each bucket, in `sort` order.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct TopRowsAggregation {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Number of rows to return.
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// Order of the rows.
    #[builder(default, setter(strip_option))]
    pub sort: Option<Sort>,
}
