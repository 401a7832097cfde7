//! Group-bys.
//!
//! Every group-by variant carries a result `name` and two recursive slots:
//! `sub_aggregations` computed per bucket and `sub_group_bys` that split
//! each bucket further.

use typed_builder::TypedBuilder;

use crate::aggregation::Aggregation;
use crate::column_value::ColumnValue;
use crate::kind::GroupByKind;
use crate::query::Query;
use crate::types::{DateTimeValue, GeoHashPrecision, GeoPoint, SortOrder};

family_enum! {
    /// A bucketing of the matched rows.
    pub enum GroupBy: GroupByKind {
        /// Distinct field values.
        Field(GroupByField),
        /// One bucket per filter query.
        Filter(GroupByFilter),
        /// Numeric ranges.
        Range(GroupByRange),
        /// Fixed-width numeric buckets.
        Histogram(GroupByHistogram),
        /// Calendar buckets.
        DateHistogram(GroupByDateHistogram),
        /// Combination of source group-bys.
        Composite(GroupByComposite),
        /// Distance rings around a point.
        GeoDistance(GroupByGeoDistance),
        /// Geohash cells.
        GeoGrid(GroupByGeoGrid),
    }
}

impl GroupBy {
    /// The result name of this group-by.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(g) => g.name.as_deref(),
            Self::Filter(g) => g.name.as_deref(),
            Self::Range(g) => g.name.as_deref(),
            Self::Histogram(g) => g.name.as_deref(),
            Self::DateHistogram(g) => g.name.as_deref(),
            Self::Composite(g) => g.name.as_deref(),
            Self::GeoDistance(g) => g.name.as_deref(),
            Self::GeoGrid(g) => g.name.as_deref(),
        }
    }

    /// Aggregations computed per bucket.
    #[must_use]
    pub fn sub_aggregations(&self) -> &[Aggregation] {
        match self {
            Self::Field(g) => &g.sub_aggregations,
            Self::Filter(g) => &g.sub_aggregations,
            Self::Range(g) => &g.sub_aggregations,
            Self::Histogram(g) => &g.sub_aggregations,
            Self::DateHistogram(g) => &g.sub_aggregations,
            Self::Composite(g) => &g.sub_aggregations,
            Self::GeoDistance(g) => &g.sub_aggregations,
            Self::GeoGrid(g) => &g.sub_aggregations,
        }
    }

    /// Group-bys nested under each bucket.
    #[must_use]
    pub fn sub_group_bys(&self) -> &[GroupBy] {
        match self {
            Self::Field(g) => &g.sub_group_bys,
            Self::Filter(g) => &g.sub_group_bys,
            Self::Range(g) => &g.sub_group_bys,
            Self::Histogram(g) => &g.sub_group_bys,
            Self::DateHistogram(g) => &g.sub_group_bys,
            Self::Composite(g) => &g.sub_group_bys,
            Self::GeoDistance(g) => &g.sub_group_bys,
            Self::GeoGrid(g) => &g.sub_group_bys,
        }
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// One bucket per distinct value of a field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByField {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Field whose values form the buckets. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Maximum number of buckets.
    #[builder(default, setter(strip_option))]
    pub size: Option<i32>,
    /// Bucket order.
    #[builder(default, setter(strip_option))]
    pub sort: Option<GroupBySort>,
    /// Buckets with fewer rows are dropped.
    #[builder(default, setter(strip_option))]
    pub min_doc_count: Option<i64>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// One bucket per filter query.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByFilter {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Filter queries, one bucket each.
    #[builder(default)]
    pub filters: Vec<Query>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// One bucket per numeric range.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByRange {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Numeric field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Bucket ranges.
    #[builder(default)]
    pub ranges: Vec<Range>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// Fixed-width buckets over a numeric field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByHistogram {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Numeric field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Bucket width. Required.
    #[builder(default, setter(into, strip_option))]
    pub interval: Option<ColumnValue>,
    /// Value used for rows missing the field.
    #[builder(default, setter(into, strip_option))]
    pub missing: Option<ColumnValue>,
    /// Buckets with fewer rows are dropped.
    #[builder(default, setter(strip_option))]
    pub min_doc_count: Option<i64>,
    /// Bucket order.
    #[builder(default, setter(strip_option))]
    pub sort: Option<GroupBySort>,
    /// Bounds of the bucketed range.
    #[builder(default, setter(strip_option))]
    pub field_range: Option<FieldRange>,
    /// Shift of the bucket boundaries.
    #[builder(default, setter(into, strip_option))]
    pub offset: Option<ColumnValue>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// Calendar buckets over a date field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByDateHistogram {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Date field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Bucket width. Required.
    #[builder(default, setter(strip_option))]
    pub interval: Option<DateTimeValue>,
    /// Bounds of the bucketed range.
    #[builder(default, setter(strip_option))]
    pub field_range: Option<FieldRange>,
    /// Value used for rows missing the field.
    #[builder(default, setter(into, strip_option))]
    pub missing: Option<ColumnValue>,
    /// Buckets with fewer rows are dropped.
    #[builder(default, setter(strip_option))]
    pub min_doc_count: Option<i64>,
    /// Shift of the bucket boundaries.
    #[builder(default, setter(strip_option))]
    pub offset: Option<DateTimeValue>,
    /// Time zone of the bucket boundaries, e.g. `+08:00`.
    #[builder(default, setter(into, strip_option))]
    pub time_zone: Option<String>,
    /// Bucket order.
    #[builder(default, setter(strip_option))]
    pub sort: Option<GroupBySort>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// Buckets formed by combining several source group-bys, paged by token.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByComposite {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Source group-bys whose keys combine.
    #[builder(default)]
    pub sources: Vec<GroupBy>,
    /// Page size.
    #[builder(default, setter(strip_option))]
    pub size: Option<i32>,
    /// Preferred page size when `size` is unset.
    #[builder(default, setter(strip_option))]
    pub suggested_size: Option<i32>,
    /// Continuation token of the previous page.
    #[builder(default, setter(into, strip_option))]
    pub next_token: Option<String>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// Distance rings around an origin.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByGeoDistance {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Center of the rings. Required.
    #[builder(default, setter(strip_option))]
    pub origin: Option<GeoPoint>,
    /// Rings in meters.
    #[builder(default)]
    pub ranges: Vec<Range>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

/// One bucket per geohash cell.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GroupByGeoGrid {
    /// Result name. Required.
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Cell size. Required.
    #[builder(default, setter(strip_option))]
    pub precision: Option<GeoHashPrecision>,
    /// Maximum number of buckets.
    #[builder(default, setter(strip_option))]
    pub size: Option<i32>,
    /// Aggregations per bucket.
    #[builder(default)]
    pub sub_aggregations: Vec<Aggregation>,
    /// Nested group-bys per bucket.
    #[builder(default)]
    pub sub_group_bys: Vec<GroupBy>,
}

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Half-open numeric range `[from, to)`; infinite bounds are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Inclusive lower bound.
    pub from: f64,
    /// Exclusive upper bound.
    pub to: f64,
}

impl Range {
    /// `[from, to)`.
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// `[from, +inf)`.
    #[must_use]
    pub const fn at_least(from: f64) -> Self {
        Self::new(from, f64::INFINITY)
    }

    /// `(-inf, to)`.
    #[must_use]
    pub const fn below(to: f64) -> Self {
        Self::new(f64::NEG_INFINITY, to)
    }
}

/// Bounds of the values a histogram buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRange {
    /// Lowest value.
    pub min: ColumnValue,
    /// Highest value.
    pub max: ColumnValue,
}

impl FieldRange {
    /// Create a range.
    #[must_use]
    pub fn new(min: impl Into<ColumnValue>, max: impl Into<ColumnValue>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Bucket order of a group-by; earlier sorters take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupBySort {
    /// Sorters in precedence order.
    pub sorters: Vec<GroupBySorter>,
}

impl GroupBySort {
    /// Create a sort from sorters.
    #[must_use]
    pub fn new(sorters: impl IntoIterator<Item = GroupBySorter>) -> Self {
        Self {
            sorters: sorters.into_iter().collect(),
        }
    }
}

/// One bucket sort criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBySorter {
    /// By bucket key.
    GroupKey(GroupKeySort),
    /// By number of rows in the bucket.
    RowCount(RowCountSort),
    /// By the value of a sub-aggregation.
    SubAggregation(SubAggregationSort),
}

/// Sort buckets by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupKeySort {
    /// Direction.
    pub order: Option<SortOrder>,
}

/// Sort buckets by row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCountSort {
    /// Direction.
    pub order: Option<SortOrder>,
}

/// Sort buckets by a sub-aggregation result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubAggregationSort {
    /// Name of the sub-aggregation. Required.
    pub sub_aggregation_name: Option<String>,
    /// Direction.
    pub order: Option<SortOrder>,
}

impl GroupBySorter {
    /// Sort by bucket key.
    #[must_use]
    pub const fn group_key(order: SortOrder) -> Self {
        Self::GroupKey(GroupKeySort { order: Some(order) })
    }

    /// Sort by row count.
    #[must_use]
    pub const fn row_count(order: SortOrder) -> Self {
        Self::RowCount(RowCountSort { order: Some(order) })
    }

    /// Sort by the named sub-aggregation.
    #[must_use]
    pub fn sub_aggregation(name: impl Into<String>, order: SortOrder) -> Self {
        Self::SubAggregation(SubAggregationSort {
            sub_aggregation_name: Some(name.into()),
            order: Some(order),
        })
    }
}
