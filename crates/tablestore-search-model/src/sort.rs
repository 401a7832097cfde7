//! Sort orders.
//!
//! A [`Sort`] is an ordered list of [`Sorter`]s; earlier sorters take
//! precedence.

use typed_builder::TypedBuilder;

use crate::column_value::ColumnValue;
use crate::kind::SorterKind;
use crate::query::Query;
use crate::types::{GeoDistanceType, SortMode, SortOrder};

/// An ordered list of sorters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sort {
    /// Sorters in precedence order.
    pub sorters: Vec<Sorter>,
}

impl Sort {
    /// Create a sort from sorters.
    #[must_use]
    pub fn new<I, S>(sorters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sorter>,
    {
        Self {
            sorters: sorters.into_iter().map(Into::into).collect(),
        }
    }
}

family_enum! {
    /// One sort criterion.
    pub enum Sorter: SorterKind {
        /// By field value.
        Field(FieldSort),
        /// By distance from points.
        GeoDistance(GeoDistanceSort),
        /// By relevance score.
        Score(ScoreSort),
        /// By primary key.
        PrimaryKey(PrimaryKeySort),
        /// By internal document order.
        Doc(DocSort),
    }
}

/// Sort by the value of a field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct FieldSort {
    /// Field to sort by. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Direction.
    #[builder(default, setter(strip_option))]
    pub order: Option<SortOrder>,
    /// Which value of a multi-valued field is used.
    #[builder(default, setter(strip_option))]
    pub mode: Option<SortMode>,
    /// Restricts nested values considered.
    #[builder(default, setter(strip_option))]
    pub nested_filter: Option<NestedFilter>,
    /// Value used for rows missing the field.
    #[builder(default, setter(into, strip_option))]
    pub missing_value: Option<ColumnValue>,
    /// Field used for rows missing the field.
    #[builder(default, setter(into, strip_option))]
    pub missing_field: Option<String>,
}

impl FieldSort {
    /// Sort by `field_name` in `order`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, order: SortOrder) -> Self {
        Self::builder().field_name(field_name).order(order).build()
    }
}

/// Sort by distance from one or more points.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GeoDistanceSort {
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Reference points as `"lat,lon"` strings.
    #[builder(default)]
    pub points: Vec<String>,
    /// Direction.
    #[builder(default, setter(strip_option))]
    pub order: Option<SortOrder>,
    /// Which distance is used when there are several points.
    #[builder(default, setter(strip_option))]
    pub mode: Option<SortMode>,
    /// Distance formula.
    #[builder(default, setter(strip_option))]
    pub distance_type: Option<GeoDistanceType>,
    /// Restricts nested values considered.
    #[builder(default, setter(strip_option))]
    pub nested_filter: Option<NestedFilter>,
}

/// Sort by relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSort {
    /// Direction.
    pub order: Option<SortOrder>,
}

/// Sort by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrimaryKeySort {
    /// Direction.
    pub order: Option<SortOrder>,
}

/// Sort by internal document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocSort {
    /// Direction.
    pub order: Option<SortOrder>,
}

impl ScoreSort {
    /// Sort by score in `order`.
    #[must_use]
    pub const fn new(order: SortOrder) -> Self {
        Self { order: Some(order) }
    }
}

impl PrimaryKeySort {
    /// Sort by primary key in `order`.
    #[must_use]
    pub const fn new(order: SortOrder) -> Self {
        Self { order: Some(order) }
    }
}

impl DocSort {
    /// Sort by document order in `order`.
    #[must_use]
    pub const fn new(order: SortOrder) -> Self {
        Self { order: Some(order) }
    }
}

/// Limits a sort on a nested field to nested documents matching `filter`.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct NestedFilter {
    /// Path of the nested field. Required.
    #[builder(default, setter(into, strip_option))]
    pub path: Option<String>,
    /// Filter on nested documents. Required.
    #[builder(default, setter(transform = |filter: Query| Some(Box::new(filter))))]
    pub filter: Option<Box<Query>>,
}
