//! Query predicates.
//!
//! [`Query`] is the closed family of predicate nodes. Composite variants
//! (`Bool`, `Nested`, `ConstScore`, the function-score variants and
//! `KnnVector`) own their child queries by value, so a query is always a
//! tree.
//!
//! Fields the service requires are still `Option`s here: a node can be
//! built with them unset and the codec reports the missing field when the
//! node is encoded.

use typed_builder::TypedBuilder;

use crate::column_value::ColumnValue;
use crate::kind::QueryKind;
use crate::sort::Sort;
use crate::types::{Highlight, QueryOperator, ScoreMode, Weight};

pub use crate::score::{
    DecayFunction, DecayParam, DecayParamKind, DateDecayParam, FieldValueFactor,
    FieldValueFactorFunction, FunctionScoreQuery, FunctionsScoreQuery, GeoDecayParam,
    NumericDecayParam, RandomScoreFunction, ScoreFunction,
};

family_enum! {
    /// A search query predicate.
    pub enum Query: QueryKind {
        /// Full-text match.
        Match(MatchQuery),
        /// Full-text phrase match.
        MatchPhrase(MatchPhraseQuery),
        /// Exact term.
        Term(TermQuery),
        /// Value range.
        Range(RangeQuery),
        /// String prefix.
        Prefix(PrefixQuery),
        /// Boolean composition.
        Bool(BoolQuery),
        /// Constant-score filter.
        ConstScore(ConstScoreQuery),
        /// Legacy field-value-factor scoring.
        FunctionScore(FunctionScoreQuery),
        /// Multi-function scoring.
        FunctionsScore(FunctionsScoreQuery),
        /// Nested document query.
        Nested(NestedQuery),
        /// Wildcard pattern.
        Wildcard(WildcardQuery),
        /// Match every row.
        MatchAll(MatchAllQuery),
        /// Geo bounding box.
        GeoBoundingBox(GeoBoundingBoxQuery),
        /// Geo distance.
        GeoDistance(GeoDistanceQuery),
        /// Geo polygon.
        GeoPolygon(GeoPolygonQuery),
        /// Any of several terms.
        Terms(TermsQuery),
        /// Field presence.
        Exists(ExistsQuery),
        /// Vector nearest neighbours.
        KnnVector(KnnVectorQuery),
        /// String suffix.
        Suffix(SuffixQuery),
    }
}

impl Query {
    /// A query matching every row.
    #[must_use]
    pub fn match_all() -> Self {
        Self::MatchAll(MatchAllQuery)
    }
}

// ---------------------------------------------------------------------------
// Leaf queries
// ---------------------------------------------------------------------------

/// Matches every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchAllQuery;

/// Full-text match against an analyzed field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct MatchQuery {
    /// Field to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Text to analyze and match. Required.
    #[builder(default, setter(into, strip_option))]
    pub text: Option<String>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
    /// How tokens combine.
    #[builder(default, setter(strip_option))]
    pub operator: Option<QueryOperator>,
    /// Minimum number of tokens that must match.
    #[builder(default, setter(strip_option))]
    pub minimum_should_match: Option<i32>,
}

impl MatchQuery {
    /// Match `text` against `field_name`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).text(text).build()
    }
}

/// Full-text phrase match.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct MatchPhraseQuery {
    /// Field to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Phrase to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub text: Option<String>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl MatchPhraseQuery {
    /// Match the phrase `text` against `field_name`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).text(text).build()
    }
}

/// Exact term match.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct TermQuery {
    /// Field to compare. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Value the field must equal. Required.
    #[builder(default, setter(into, strip_option))]
    pub term: Option<ColumnValue>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl TermQuery {
    /// Match rows whose `field_name` equals `term`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, term: impl Into<ColumnValue>) -> Self {
        Self::builder().field_name(field_name).term(term).build()
    }
}

/// Matches rows whose field equals any of several terms.
///
/// The term list may be empty, but only if it was set explicitly.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct TermsQuery {
    /// Field to compare. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Candidate values. Required.
    #[builder(default, setter(strip_option))]
    pub terms: Option<Vec<ColumnValue>>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl TermsQuery {
    /// Match rows whose `field_name` equals one of `terms`.
    #[must_use]
    pub fn new<I, V>(field_name: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ColumnValue>,
    {
        Self::builder()
            .field_name(field_name)
            .terms(terms.into_iter().map(Into::into).collect())
            .build()
    }
}

/// Range comparison; either bound may be absent.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct RangeQuery {
    /// Field to compare. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Lower bound.
    #[builder(default, setter(into, strip_option))]
    pub from: Option<ColumnValue>,
    /// Upper bound.
    #[builder(default, setter(into, strip_option))]
    pub to: Option<ColumnValue>,
    /// Whether the lower bound is inclusive.
    #[builder(default)]
    pub include_lower: bool,
    /// Whether the upper bound is inclusive.
    #[builder(default)]
    pub include_upper: bool,
}

impl RangeQuery {
    /// `from <= field_name < to`.
    #[must_use]
    pub fn half_open(
        field_name: impl Into<String>,
        from: impl Into<ColumnValue>,
        to: impl Into<ColumnValue>,
    ) -> Self {
        Self::builder()
            .field_name(field_name)
            .from(from)
            .to(to)
            .include_lower(true)
            .build()
    }

    /// `field_name > from`.
    #[must_use]
    pub fn greater_than(field_name: impl Into<String>, from: impl Into<ColumnValue>) -> Self {
        Self::builder().field_name(field_name).from(from).build()
    }

    /// `field_name < to`.
    #[must_use]
    pub fn less_than(field_name: impl Into<String>, to: impl Into<ColumnValue>) -> Self {
        Self::builder().field_name(field_name).to(to).build()
    }
}

/// String prefix match.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct PrefixQuery {
    /// Field to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Prefix. Required.
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl PrefixQuery {
    /// Match rows whose `field_name` starts with `prefix`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).prefix(prefix).build()
    }
}

/// String suffix match.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct SuffixQuery {
    /// Field to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Suffix. Required.
    #[builder(default, setter(into, strip_option))]
    pub suffix: Option<String>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl SuffixQuery {
    /// Match rows whose `field_name` ends with `suffix`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).suffix(suffix).build()
    }
}

/// Wildcard pattern match (`*` and `?`).
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct WildcardQuery {
    /// Field to match. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Pattern. Required.
    #[builder(default, setter(into, strip_option))]
    pub value: Option<String>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl WildcardQuery {
    /// Match rows whose `field_name` matches `pattern`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).value(pattern).build()
    }
}

/// Matches rows where a field has a value.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder)]
pub struct ExistsQuery {
    /// Field to test. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
}

impl ExistsQuery {
    /// Match rows where `field_name` is present.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self::builder().field_name(field_name).build()
    }
}

// ---------------------------------------------------------------------------
// Compound queries
// ---------------------------------------------------------------------------

/// Boolean composition of sub-queries.
///
/// `must` clauses are ANDed and scored, `must_not` clauses exclude,
/// `filter` clauses are ANDed without scoring and `should` clauses are ORed
/// with an optional threshold.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct BoolQuery {
    /// Clauses that must match.
    #[builder(default)]
    pub must: Vec<Query>,
    /// Clauses that must not match.
    #[builder(default)]
    pub must_not: Vec<Query>,
    /// Clauses that must match, without affecting the score.
    #[builder(default)]
    pub filter: Vec<Query>,
    /// Clauses of which at least `minimum_should_match` must match.
    #[builder(default)]
    pub should: Vec<Query>,
    /// Threshold for `should` clauses.
    #[builder(default, setter(strip_option))]
    pub minimum_should_match: Option<i32>,
}

/// Scores every row matching `filter` with the same constant.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct ConstScoreQuery {
    /// Filter query. Required.
    #[builder(default, setter(transform = |filter: Query| Some(Box::new(filter))))]
    pub filter: Option<Box<Query>>,
}

impl ConstScoreQuery {
    /// Wrap `filter` in a constant-score query.
    #[must_use]
    pub fn new(filter: impl Into<Query>) -> Self {
        Self::builder().filter(filter.into()).build()
    }
}

/// Query over nested documents stored under `path`.
///
/// `score_mode` has no default: a nested query encoded without one is
/// rejected.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct NestedQuery {
    /// Path of the nested field. Required.
    #[builder(default, setter(into, strip_option))]
    pub path: Option<String>,
    /// Query run against each nested document. Required.
    #[builder(default, setter(transform = |query: Query| Some(Box::new(query))))]
    pub query: Option<Box<Query>>,
    /// How child scores fold into the parent score. Required.
    #[builder(default, setter(strip_option))]
    pub score_mode: Option<ScoreMode>,
    /// Return the matching nested documents.
    #[builder(default, setter(strip_option))]
    pub inner_hits: Option<InnerHits>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl NestedQuery {
    /// Run `query` against the nested documents under `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, query: impl Into<Query>, score_mode: ScoreMode) -> Self {
        Self::builder()
            .path(path)
            .query(query.into())
            .score_mode(score_mode)
            .build()
    }
}

/// Which nested documents a nested query returns alongside each row.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct InnerHits {
    /// Order of the returned nested documents.
    #[builder(default, setter(strip_option))]
    pub sort: Option<Sort>,
    /// Number of nested documents to skip.
    #[builder(default, setter(strip_option))]
    pub offset: Option<i32>,
    /// Maximum number of nested documents to return.
    #[builder(default, setter(strip_option))]
    pub limit: Option<i32>,
    /// Highlighting of the nested documents.
    #[builder(default, setter(strip_option))]
    pub highlight: Option<Highlight>,
}

// ---------------------------------------------------------------------------
// Geo queries
// ---------------------------------------------------------------------------

/// Matches geo points inside a rectangle.
///
/// Corners are `"lat,lon"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder)]
pub struct GeoBoundingBoxQuery {
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Top-left corner. Required.
    #[builder(default, setter(into, strip_option))]
    pub top_left: Option<String>,
    /// Bottom-right corner. Required.
    #[builder(default, setter(into, strip_option))]
    pub bottom_right: Option<String>,
}

impl GeoBoundingBoxQuery {
    /// Match points of `field_name` inside the box.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        top_left: impl Into<String>,
        bottom_right: impl Into<String>,
    ) -> Self {
        Self::builder()
            .field_name(field_name)
            .top_left(top_left)
            .bottom_right(bottom_right)
            .build()
    }
}

/// Matches geo points within a distance of a center point.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GeoDistanceQuery {
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Center as `"lat,lon"`. Required.
    #[builder(default, setter(into, strip_option))]
    pub center_point: Option<String>,
    /// Radius in meters. Required.
    #[builder(default, setter(strip_option))]
    pub distance_in_meter: Option<f64>,
}

impl GeoDistanceQuery {
    /// Match points of `field_name` within `distance_in_meter` of `center_point`.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        center_point: impl Into<String>,
        distance_in_meter: f64,
    ) -> Self {
        Self::builder()
            .field_name(field_name)
            .center_point(center_point)
            .distance_in_meter(distance_in_meter)
            .build()
    }
}

/// Matches geo points inside a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder)]
pub struct GeoPolygonQuery {
    /// Geo point field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Polygon vertices as `"lat,lon"` strings. Required.
    #[builder(default, setter(strip_option))]
    pub points: Option<Vec<String>>,
}

impl GeoPolygonQuery {
    /// Match points of `field_name` inside the polygon.
    #[must_use]
    pub fn new<I, P>(field_name: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::builder()
            .field_name(field_name)
            .points(points.into_iter().map(Into::into).collect())
            .build()
    }
}

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

/// Approximate nearest-neighbour search over a vector field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct KnnVectorQuery {
    /// Vector field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Number of neighbours to return. Required.
    #[builder(default, setter(strip_option))]
    pub top_k: Option<i32>,
    /// Query vector. Required.
    #[builder(default, setter(strip_option))]
    pub query_vector: Option<Vec<f32>>,
    /// Pre-filter applied before the neighbour search.
    #[builder(default, setter(transform = |filter: Query| Some(Box::new(filter))))]
    pub filter: Option<Box<Query>>,
    /// Boost weight.
    #[builder(default, setter(transform = |weight: f32| Weight::new(weight)))]
    pub weight: Weight,
}

impl KnnVectorQuery {
    /// Return the `top_k` rows nearest to `query_vector` in `field_name`.
    #[must_use]
    pub fn new(field_name: impl Into<String>, top_k: i32, query_vector: Vec<f32>) -> Self {
        Self::builder()
            .field_name(field_name)
            .top_k(top_k)
            .query_vector(query_vector)
            .build()
    }
}
