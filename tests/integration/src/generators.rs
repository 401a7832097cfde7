//! Proptest strategies for every kind of every family.
//!
//! Each family has an `arb_<family>_of(kind)` that matches its kind enum
//! exhaustively, so a kind added without a generator does not compile.
//! Generated nodes always encode: required fields are set, score functions
//! carry at most one function kind and decay parameters stay in range.
//! Floats are drawn from finite ranges so decoded trees compare equal.
//!
//! Recursive families take a `depth`; at depth 0 only leaf queries and
//! group-bys without children are produced.

use bytes::Bytes;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use tablestore_search_model::aggregation::{
    Aggregation, AvgAggregation, CountAggregation, DistinctCountAggregation, MaxAggregation,
    MinAggregation, PercentilesAggregation, SumAggregation, TopRowsAggregation,
};
use tablestore_search_model::group_by::{
    FieldRange, GroupBy, GroupByComposite, GroupByDateHistogram, GroupByField, GroupByFilter,
    GroupByGeoDistance, GroupByGeoGrid, GroupByHistogram, GroupByRange, GroupBySort,
    GroupBySorter, GroupKeySort, Range, RowCountSort, SubAggregationSort,
};
use tablestore_search_model::query::{
    BoolQuery, ConstScoreQuery, DateDecayParam, DecayFunction, DecayParam, ExistsQuery,
    FieldValueFactorFunction, FunctionScoreQuery, FunctionsScoreQuery, GeoBoundingBoxQuery,
    GeoDecayParam, GeoDistanceQuery, GeoPolygonQuery, InnerHits, KnnVectorQuery, MatchPhraseQuery,
    MatchQuery, NestedQuery, NumericDecayParam, PrefixQuery, Query, RandomScoreFunction,
    RangeQuery, ScoreFunction, SuffixQuery, TermQuery, TermsQuery, WildcardQuery,
};
use tablestore_search_model::request::{
    Collapse, ColumnsToGet, ParallelScanRequest, ScanQuery, SearchQuery, SearchRequest,
};
use tablestore_search_model::sort::{
    DocSort, FieldSort, GeoDistanceSort, NestedFilter, PrimaryKeySort, ScoreSort, Sort, Sorter,
};
use tablestore_search_model::types::{
    DateTimeUnit, DateTimeValue, DecayMathFunction, FieldValueFactorModifier, FunctionCombineMode,
    FunctionScoreMode, GeoDistanceType, GeoHashPrecision, GeoPoint, Highlight, MultiValueMode,
    QueryOperator, ScoreMode, SortMode, SortOrder, Weight,
};
use tablestore_search_model::{AggregationKind, ColumnValue, GroupByKind, QueryKind, SorterKind};

/// Depth used by the round-trip properties.
pub const MAX_DEPTH: u32 = 3;

/// Units a decay scale or offset may use.
const DECAY_UNITS: &[DateTimeUnit] = &[
    DateTimeUnit::Day,
    DateTimeUnit::Hour,
    DateTimeUnit::Minute,
    DateTimeUnit::Second,
    DateTimeUnit::Millisecond,
];

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

fn arb_field() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,7}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,24}"
}

fn arb_geo_text() -> impl Strategy<Value = String> {
    (-90.0_f64..90.0, -180.0_f64..180.0).prop_map(|(lat, lon)| format!("{lat:.5},{lon:.5}"))
}

fn arb_weight() -> impl Strategy<Value = Weight> {
    prop_oneof![
        Just(Weight::unset()),
        Just(Weight::new(Weight::DEFAULT)),
        (0.0_f32..100.0).prop_map(Weight::new),
    ]
}

fn arb_bytes() -> impl Strategy<Value = Bytes> {
    vec(any::<u8>(), 1..16).prop_map(Bytes::from)
}

fn arb_highlight() -> impl Strategy<Value = Highlight> {
    vec(any::<u8>(), 0..16).prop_map(|encoded| Highlight::from_encoded(encoded))
}

fn arb_sort_order() -> impl Strategy<Value = Option<SortOrder>> {
    option::of(select(SortOrder::ALL))
}

/// Any column value with a finite double.
pub fn arb_column_value() -> impl Strategy<Value = ColumnValue> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(ColumnValue::String),
        any::<i64>().prop_map(ColumnValue::Integer),
        (-1.0e9_f64..1.0e9).prop_map(ColumnValue::Double),
        any::<bool>().prop_map(ColumnValue::Boolean),
        vec(any::<u8>(), 0..8).prop_map(ColumnValue::from),
    ]
}

fn arb_numeric_value() -> impl Strategy<Value = ColumnValue> {
    prop_oneof![
        (1..1000_i64).prop_map(ColumnValue::Integer),
        (0.5_f64..1000.0).prop_map(ColumnValue::Double),
    ]
}

fn arb_date_time_value() -> impl Strategy<Value = DateTimeValue> {
    (1..100_i32, select(DateTimeUnit::ALL))
        .prop_map(|(value, unit)| DateTimeValue::new(value, unit))
}

fn arb_geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0_f64..90.0, -180.0_f64..180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

fn arb_range() -> impl Strategy<Value = Range> {
    prop_oneof![
        (-1000.0_f64..0.0, 0.0_f64..1000.0).prop_map(|(from, to)| Range::new(from, to)),
        (-1000.0_f64..1000.0).prop_map(Range::at_least),
        (-1000.0_f64..1000.0).prop_map(Range::below),
    ]
}

fn arb_field_range() -> impl Strategy<Value = FieldRange> {
    (arb_column_value(), arb_column_value()).prop_map(|(min, max)| FieldRange { min, max })
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

const fn has_child_query(kind: QueryKind) -> bool {
    matches!(
        kind,
        QueryKind::Bool
            | QueryKind::ConstScore
            | QueryKind::FunctionScore
            | QueryKind::FunctionsScore
            | QueryKind::Nested
            | QueryKind::KnnVector
    )
}

/// A query tree at most `depth` compound levels deep.
pub fn arb_query(depth: u32) -> BoxedStrategy<Query> {
    let kinds: Vec<QueryKind> = QueryKind::ALL
        .iter()
        .copied()
        .filter(|kind| depth > 0 || !has_child_query(*kind))
        .collect();
    select(kinds)
        .prop_flat_map(move |kind| arb_query_of(kind, depth))
        .boxed()
}

/// A query of the given kind. Children are drawn from `arb_query(depth - 1)`.
pub fn arb_query_of(kind: QueryKind, depth: u32) -> BoxedStrategy<Query> {
    let child = arb_query(depth.saturating_sub(1));
    match kind {
        QueryKind::Match => (
            arb_field(),
            arb_text(),
            arb_weight(),
            option::of(select(QueryOperator::ALL)),
            option::of(any::<i32>()),
        )
            .prop_map(|(field_name, text, weight, operator, minimum_should_match)| {
                Query::from(MatchQuery {
                    field_name: Some(field_name),
                    text: Some(text),
                    weight,
                    operator,
                    minimum_should_match,
                })
            })
            .boxed(),
        QueryKind::MatchPhrase => (arb_field(), arb_text(), arb_weight())
            .prop_map(|(field_name, text, weight)| {
                Query::from(MatchPhraseQuery {
                    field_name: Some(field_name),
                    text: Some(text),
                    weight,
                })
            })
            .boxed(),
        QueryKind::Term => (arb_field(), arb_column_value(), arb_weight())
            .prop_map(|(field_name, term, weight)| {
                Query::from(TermQuery {
                    field_name: Some(field_name),
                    term: Some(term),
                    weight,
                })
            })
            .boxed(),
        QueryKind::Range => (
            arb_field(),
            option::of(arb_column_value()),
            option::of(arb_column_value()),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(field_name, from, to, include_lower, include_upper)| {
                Query::from(RangeQuery {
                    field_name: Some(field_name),
                    from,
                    to,
                    include_lower,
                    include_upper,
                })
            })
            .boxed(),
        QueryKind::Prefix => (arb_field(), arb_text(), arb_weight())
            .prop_map(|(field_name, prefix, weight)| {
                Query::from(PrefixQuery {
                    field_name: Some(field_name),
                    prefix: Some(prefix),
                    weight,
                })
            })
            .boxed(),
        QueryKind::Bool => (
            vec(child.clone(), 0..3),
            vec(child.clone(), 0..3),
            vec(child.clone(), 0..3),
            vec(child, 0..3),
            option::of(0..4_i32),
        )
            .prop_map(|(must, must_not, filter, should, minimum_should_match)| {
                Query::from(BoolQuery {
                    must,
                    must_not,
                    filter,
                    should,
                    minimum_should_match,
                })
            })
            .boxed(),
        QueryKind::ConstScore => child
            .prop_map(|filter| {
                Query::from(ConstScoreQuery {
                    filter: Some(Box::new(filter)),
                })
            })
            .boxed(),
        QueryKind::FunctionScore => (child, arb_field())
            .prop_map(|(query, field_name)| Query::from(FunctionScoreQuery::new(query, field_name)))
            .boxed(),
        QueryKind::FunctionsScore => (
            option::of(child),
            vec(arb_score_function(depth.saturating_sub(1)), 0..3),
            option::of(select(FunctionScoreMode::ALL)),
            option::of(select(FunctionCombineMode::ALL)),
            option::of(0.0_f32..10.0),
            option::of(10.0_f32..100.0),
        )
            .prop_map(
                |(query, functions, score_mode, combine_mode, min_score, max_score)| {
                    Query::from(FunctionsScoreQuery {
                        query: query.map(Box::new),
                        functions,
                        score_mode,
                        combine_mode,
                        min_score,
                        max_score,
                    })
                },
            )
            .boxed(),
        QueryKind::Nested => (
            arb_field(),
            child,
            select(ScoreMode::ALL),
            option::of(arb_inner_hits(depth.saturating_sub(1))),
            arb_weight(),
        )
            .prop_map(|(path, query, score_mode, inner_hits, weight)| {
                Query::from(NestedQuery {
                    path: Some(path),
                    query: Some(Box::new(query)),
                    score_mode: Some(score_mode),
                    inner_hits,
                    weight,
                })
            })
            .boxed(),
        QueryKind::Wildcard => (arb_field(), "[a-z*?]{1,8}", arb_weight())
            .prop_map(|(field_name, value, weight)| {
                Query::from(WildcardQuery {
                    field_name: Some(field_name),
                    value: Some(value),
                    weight,
                })
            })
            .boxed(),
        QueryKind::MatchAll => Just(Query::match_all()).boxed(),
        QueryKind::GeoBoundingBox => (arb_field(), arb_geo_text(), arb_geo_text())
            .prop_map(|(field_name, top_left, bottom_right)| {
                Query::from(GeoBoundingBoxQuery::new(field_name, top_left, bottom_right))
            })
            .boxed(),
        QueryKind::GeoDistance => (arb_field(), arb_geo_text(), 0.0_f64..1.0e6)
            .prop_map(|(field_name, center_point, distance)| {
                Query::from(GeoDistanceQuery::new(field_name, center_point, distance))
            })
            .boxed(),
        QueryKind::GeoPolygon => (arb_field(), vec(arb_geo_text(), 0..5))
            .prop_map(|(field_name, points)| {
                Query::from(GeoPolygonQuery {
                    field_name: Some(field_name),
                    points: Some(points),
                })
            })
            .boxed(),
        QueryKind::Terms => (arb_field(), vec(arb_column_value(), 0..5), arb_weight())
            .prop_map(|(field_name, terms, weight)| {
                Query::from(TermsQuery {
                    field_name: Some(field_name),
                    terms: Some(terms),
                    weight,
                })
            })
            .boxed(),
        QueryKind::Exists => arb_field()
            .prop_map(|field_name| Query::from(ExistsQuery::new(field_name)))
            .boxed(),
        QueryKind::KnnVector => (
            arb_field(),
            1..1000_i32,
            vec(-1.0_f32..1.0, 0..8),
            option::of(child),
            arb_weight(),
        )
            .prop_map(|(field_name, top_k, query_vector, filter, weight)| {
                Query::from(KnnVectorQuery {
                    field_name: Some(field_name),
                    top_k: Some(top_k),
                    query_vector: Some(query_vector),
                    filter: filter.map(Box::new),
                    weight,
                })
            })
            .boxed(),
        QueryKind::Suffix => (arb_field(), arb_text(), arb_weight())
            .prop_map(|(field_name, suffix, weight)| {
                Query::from(SuffixQuery {
                    field_name: Some(field_name),
                    suffix: Some(suffix),
                    weight,
                })
            })
            .boxed(),
    }
}

fn arb_inner_hits(depth: u32) -> impl Strategy<Value = InnerHits> {
    (
        option::of(arb_sort(depth)),
        option::of(0..100_i32),
        option::of(1..100_i32),
        option::of(arb_highlight()),
    )
        .prop_map(|(sort, offset, limit, highlight)| InnerHits {
            sort,
            offset,
            limit,
            highlight,
        })
}

// ---------------------------------------------------------------------------
// Score functions
// ---------------------------------------------------------------------------

type FunctionBody = (
    Option<FieldValueFactorFunction>,
    Option<DecayFunction>,
    Option<RandomScoreFunction>,
);

/// A score function with at most one function kind and a filter of at most
/// `depth` levels.
pub fn arb_score_function(depth: u32) -> impl Strategy<Value = ScoreFunction> {
    let body = prop_oneof![
        Just::<FunctionBody>((None, None, None)),
        arb_field_value_factor_function().prop_map(|f| -> FunctionBody { (Some(f), None, None) }),
        arb_decay_function().prop_map(|d| -> FunctionBody { (None, Some(d), None) }),
        Just::<FunctionBody>((None, None, Some(RandomScoreFunction))),
    ];
    (option::of(0.0_f32..10.0), option::of(arb_query(depth)), body).prop_map(
        |(weight, filter, (field_value_factor, decay, random))| ScoreFunction {
            weight,
            filter: filter.map(Box::new),
            field_value_factor,
            decay,
            random,
        },
    )
}

fn arb_field_value_factor_function() -> impl Strategy<Value = FieldValueFactorFunction> {
    (
        arb_field(),
        option::of(0.1_f32..10.0),
        option::of(select(FieldValueFactorModifier::ALL)),
        option::of(-100.0_f64..100.0),
    )
        .prop_map(|(field_name, factor, modifier, missing)| FieldValueFactorFunction {
            field_name: Some(field_name),
            factor,
            modifier,
            missing,
        })
}

fn arb_decay_function() -> impl Strategy<Value = DecayFunction> {
    (
        arb_field(),
        option::of(select(DecayMathFunction::ALL)),
        arb_decay_param(),
        option::of(0.01_f64..0.99),
        option::of(select(MultiValueMode::ALL)),
    )
        .prop_map(
            |(field_name, math_function, param, decay, multi_value_mode)| DecayFunction {
                field_name: Some(field_name),
                math_function,
                param: Some(param),
                decay,
                multi_value_mode,
            },
        )
}

/// A decay parameter that passes validation.
pub fn arb_decay_param() -> impl Strategy<Value = DecayParam> {
    prop_oneof![
        arb_date_decay_param().prop_map(DecayParam::Date),
        arb_numeric_decay_param().prop_map(DecayParam::Numeric),
        arb_geo_decay_param().prop_map(DecayParam::Geo),
    ]
}

fn arb_date_decay_param() -> impl Strategy<Value = DateDecayParam> {
    let origin = prop_oneof![
        any::<i64>().prop_map(|millis| (Some(millis), None::<String>)),
        "2024-0[1-9]-1[0-9]".prop_map(|date| (None::<i64>, Some(date))),
        (any::<i64>(), "2024-0[1-9]-1[0-9]").prop_map(|(millis, date)| (Some(millis), Some(date))),
    ];
    (
        origin,
        (1..1000_i32, select(DECAY_UNITS)),
        option::of((0..1000_i32, select(DECAY_UNITS))),
    )
        .prop_map(|((origin_long, origin_string), (scale, scale_unit), offset)| DateDecayParam {
            origin_long,
            origin_string,
            scale: Some(DateTimeValue::new(scale, scale_unit)),
            offset: offset.map(|(value, unit)| DateTimeValue::new(value, unit)),
        })
}

fn arb_numeric_decay_param() -> impl Strategy<Value = NumericDecayParam> {
    (
        -1.0e6_f64..1.0e6,
        0.001_f64..1.0e6,
        option::of(0.0_f64..1.0e6),
    )
        .prop_map(|(origin, scale, offset)| NumericDecayParam {
            origin: Some(origin),
            scale: Some(scale),
            offset,
        })
}

fn arb_geo_decay_param() -> impl Strategy<Value = GeoDecayParam> {
    (arb_geo_text(), 1.0_f64..1.0e5, option::of(0.0_f64..1.0e5)).prop_map(
        |(origin, scale, offset)| GeoDecayParam {
            origin: Some(origin),
            scale: Some(scale),
            offset,
        },
    )
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// A sorter whose nested filters are at most `depth` levels deep.
pub fn arb_sorter(depth: u32) -> BoxedStrategy<Sorter> {
    select(SorterKind::ALL)
        .prop_flat_map(move |kind| arb_sorter_of(kind, depth))
        .boxed()
}

/// A sorter of the given kind.
pub fn arb_sorter_of(kind: SorterKind, depth: u32) -> BoxedStrategy<Sorter> {
    match kind {
        SorterKind::Field => (
            arb_field(),
            arb_sort_order(),
            option::of(select(SortMode::ALL)),
            option::of(arb_nested_filter(depth)),
            option::of(arb_column_value()),
            option::of(arb_field()),
        )
            .prop_map(
                |(field_name, order, mode, nested_filter, missing_value, missing_field)| {
                    Sorter::from(FieldSort {
                        field_name: Some(field_name),
                        order,
                        mode,
                        nested_filter,
                        missing_value,
                        missing_field,
                    })
                },
            )
            .boxed(),
        SorterKind::GeoDistance => (
            arb_field(),
            vec(arb_geo_text(), 0..3),
            arb_sort_order(),
            option::of(select(SortMode::ALL)),
            option::of(select(GeoDistanceType::ALL)),
            option::of(arb_nested_filter(depth)),
        )
            .prop_map(
                |(field_name, points, order, mode, distance_type, nested_filter)| {
                    Sorter::from(GeoDistanceSort {
                        field_name: Some(field_name),
                        points,
                        order,
                        mode,
                        distance_type,
                        nested_filter,
                    })
                },
            )
            .boxed(),
        SorterKind::Score => arb_sort_order()
            .prop_map(|order| Sorter::from(ScoreSort { order }))
            .boxed(),
        SorterKind::PrimaryKey => arb_sort_order()
            .prop_map(|order| Sorter::from(PrimaryKeySort { order }))
            .boxed(),
        SorterKind::Doc => arb_sort_order()
            .prop_map(|order| Sorter::from(DocSort { order }))
            .boxed(),
    }
}

fn arb_nested_filter(depth: u32) -> impl Strategy<Value = NestedFilter> {
    (arb_field(), arb_query(depth)).prop_map(|(path, filter)| NestedFilter {
        path: Some(path),
        filter: Some(Box::new(filter)),
    })
}

/// A sort of up to two sorters.
pub fn arb_sort(depth: u32) -> impl Strategy<Value = Sort> {
    vec(arb_sorter(depth), 0..3).prop_map(|sorters| Sort { sorters })
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Any aggregation.
pub fn arb_aggregation() -> BoxedStrategy<Aggregation> {
    select(AggregationKind::ALL)
        .prop_flat_map(arb_aggregation_of)
        .boxed()
}

fn arb_metric() -> impl Strategy<Value = (String, String, Option<ColumnValue>)> {
    (arb_name(), arb_field(), option::of(arb_column_value()))
}

/// An aggregation of the given kind.
pub fn arb_aggregation_of(kind: AggregationKind) -> BoxedStrategy<Aggregation> {
    match kind {
        AggregationKind::Avg => arb_metric()
            .prop_map(|(name, field_name, missing)| {
                Aggregation::from(AvgAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    missing,
                })
            })
            .boxed(),
        AggregationKind::Count => (arb_name(), arb_field())
            .prop_map(|(name, field_name)| {
                Aggregation::from(CountAggregation::new(name, field_name))
            })
            .boxed(),
        AggregationKind::Max => arb_metric()
            .prop_map(|(name, field_name, missing)| {
                Aggregation::from(MaxAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    missing,
                })
            })
            .boxed(),
        AggregationKind::Min => arb_metric()
            .prop_map(|(name, field_name, missing)| {
                Aggregation::from(MinAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    missing,
                })
            })
            .boxed(),
        AggregationKind::Sum => arb_metric()
            .prop_map(|(name, field_name, missing)| {
                Aggregation::from(SumAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    missing,
                })
            })
            .boxed(),
        AggregationKind::DistinctCount => arb_metric()
            .prop_map(|(name, field_name, missing)| {
                Aggregation::from(DistinctCountAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    missing,
                })
            })
            .boxed(),
        AggregationKind::Percentiles => (
            arb_name(),
            arb_field(),
            vec(0.0_f64..100.0, 0..5),
            option::of(arb_column_value()),
        )
            .prop_map(|(name, field_name, percentiles, missing)| {
                Aggregation::from(PercentilesAggregation {
                    name: Some(name),
                    field_name: Some(field_name),
                    percentiles,
                    missing,
                })
            })
            .boxed(),
        AggregationKind::TopRows => (arb_name(), option::of(1..100_i32), option::of(arb_sort(0)))
            .prop_map(|(name, limit, sort)| {
                Aggregation::from(TopRowsAggregation {
                    name: Some(name),
                    limit,
                    sort,
                })
            })
            .boxed(),
    }
}

// ---------------------------------------------------------------------------
// GroupBy
// ---------------------------------------------------------------------------

/// A group-by tree with sub-group-bys at most `depth` levels deep.
pub fn arb_group_by(depth: u32) -> BoxedStrategy<GroupBy> {
    select(GroupByKind::ALL)
        .prop_flat_map(move |kind| arb_group_by_of(kind, depth))
        .boxed()
}

fn arb_child_group_bys(depth: u32) -> BoxedStrategy<Vec<GroupBy>> {
    if depth == 0 {
        Just(Vec::new()).boxed()
    } else {
        vec(arb_group_by(depth - 1), 0..2).boxed()
    }
}

fn arb_sub_nodes(depth: u32) -> impl Strategy<Value = (Vec<Aggregation>, Vec<GroupBy>)> {
    (vec(arb_aggregation(), 0..3), arb_child_group_bys(depth))
}

fn arb_group_by_sort() -> impl Strategy<Value = GroupBySort> {
    let sorter = prop_oneof![
        arb_sort_order().prop_map(|order| GroupBySorter::GroupKey(GroupKeySort { order })),
        arb_sort_order().prop_map(|order| GroupBySorter::RowCount(RowCountSort { order })),
        (arb_name(), arb_sort_order()).prop_map(|(name, order)| {
            GroupBySorter::SubAggregation(SubAggregationSort {
                sub_aggregation_name: Some(name),
                order,
            })
        }),
    ];
    vec(sorter, 0..3).prop_map(|sorters| GroupBySort { sorters })
}

/// A group-by of the given kind.
pub fn arb_group_by_of(kind: GroupByKind, depth: u32) -> BoxedStrategy<GroupBy> {
    match kind {
        GroupByKind::Field => (
            arb_name(),
            arb_field(),
            option::of(1..100_i32),
            option::of(arb_group_by_sort()),
            option::of(0..10_i64),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(name, field_name, size, sort, min_doc_count, (sub_aggregations, sub_group_bys))| {
                    GroupBy::from(GroupByField {
                        name: Some(name),
                        field_name: Some(field_name),
                        size,
                        sort,
                        min_doc_count,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
        GroupByKind::Filter => (arb_name(), vec(arb_query(1), 0..3), arb_sub_nodes(depth))
            .prop_map(|(name, filters, (sub_aggregations, sub_group_bys))| {
                GroupBy::from(GroupByFilter {
                    name: Some(name),
                    filters,
                    sub_aggregations,
                    sub_group_bys,
                })
            })
            .boxed(),
        GroupByKind::Range => (
            arb_name(),
            arb_field(),
            vec(arb_range(), 0..3),
            arb_sub_nodes(depth),
        )
            .prop_map(|(name, field_name, ranges, (sub_aggregations, sub_group_bys))| {
                GroupBy::from(GroupByRange {
                    name: Some(name),
                    field_name: Some(field_name),
                    ranges,
                    sub_aggregations,
                    sub_group_bys,
                })
            })
            .boxed(),
        GroupByKind::Histogram => (
            arb_name(),
            arb_field(),
            arb_numeric_value(),
            option::of(arb_numeric_value()),
            option::of(0..10_i64),
            option::of(arb_group_by_sort()),
            option::of(arb_field_range()),
            option::of(arb_numeric_value()),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(
                    name,
                    field_name,
                    interval,
                    missing,
                    min_doc_count,
                    sort,
                    field_range,
                    offset,
                    (sub_aggregations, sub_group_bys),
                )| {
                    GroupBy::from(GroupByHistogram {
                        name: Some(name),
                        field_name: Some(field_name),
                        interval: Some(interval),
                        missing,
                        min_doc_count,
                        sort,
                        field_range,
                        offset,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
        GroupByKind::DateHistogram => (
            arb_name(),
            arb_field(),
            arb_date_time_value(),
            option::of(arb_field_range()),
            option::of(arb_column_value()),
            option::of(0..10_i64),
            option::of(arb_date_time_value()),
            option::of("[+-](0[0-9]|1[0-2]):00"),
            option::of(arb_group_by_sort()),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(
                    name,
                    field_name,
                    interval,
                    field_range,
                    missing,
                    min_doc_count,
                    offset,
                    time_zone,
                    sort,
                    (sub_aggregations, sub_group_bys),
                )| {
                    GroupBy::from(GroupByDateHistogram {
                        name: Some(name),
                        field_name: Some(field_name),
                        interval: Some(interval),
                        field_range,
                        missing,
                        min_doc_count,
                        offset,
                        time_zone,
                        sort,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
        GroupByKind::Composite => (
            arb_name(),
            arb_child_group_bys(depth),
            option::of(1..1000_i32),
            option::of(1..1000_i32),
            option::of("[a-zA-Z0-9]{4,16}"),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(
                    name,
                    sources,
                    size,
                    suggested_size,
                    next_token,
                    (sub_aggregations, sub_group_bys),
                )| {
                    GroupBy::from(GroupByComposite {
                        name: Some(name),
                        sources,
                        size,
                        suggested_size,
                        next_token,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
        GroupByKind::GeoDistance => (
            arb_name(),
            arb_field(),
            arb_geo_point(),
            vec(arb_range(), 0..3),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(name, field_name, origin, ranges, (sub_aggregations, sub_group_bys))| {
                    GroupBy::from(GroupByGeoDistance {
                        name: Some(name),
                        field_name: Some(field_name),
                        origin: Some(origin),
                        ranges,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
        GroupByKind::GeoGrid => (
            arb_name(),
            arb_field(),
            select(GeoHashPrecision::ALL),
            option::of(1..1000_i32),
            arb_sub_nodes(depth),
        )
            .prop_map(
                |(name, field_name, precision, size, (sub_aggregations, sub_group_bys))| {
                    GroupBy::from(GroupByGeoGrid {
                        name: Some(name),
                        field_name: Some(field_name),
                        precision: Some(precision),
                        size,
                        sub_aggregations,
                        sub_group_bys,
                    })
                },
            )
            .boxed(),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn arb_columns_to_get() -> impl Strategy<Value = ColumnsToGet> {
    prop_oneof![
        Just(ColumnsToGet::all()),
        Just(ColumnsToGet::none()),
        Just(ColumnsToGet::all_from_index()),
        vec(arb_field(), 0..4).prop_map(|names| ColumnsToGet::specified(names)),
    ]
}

/// The query part of a search request.
pub fn arb_search_query() -> impl Strategy<Value = SearchQuery> {
    (
        option::of(0..1000_i32),
        option::of(1..100_i32),
        option::of(arb_query(MAX_DEPTH - 1)),
        option::of(arb_field().prop_map(|field_name| Collapse::new(field_name))),
        option::of(arb_sort(1)),
        any::<bool>(),
        option::of(arb_bytes()),
        vec(arb_aggregation(), 0..3),
        vec(arb_group_by(1), 0..2),
        option::of(arb_highlight()),
    )
        .prop_map(
            |(
                offset,
                limit,
                query,
                collapse,
                sort,
                get_total_count,
                token,
                aggregations,
                group_bys,
                highlight,
            )| SearchQuery {
                offset,
                limit,
                query,
                collapse,
                sort,
                get_total_count,
                token,
                aggregations,
                group_bys,
                highlight,
            },
        )
}

/// The query part of a parallel-scan request.
pub fn arb_scan_query() -> impl Strategy<Value = ScanQuery> {
    (
        option::of(arb_query(MAX_DEPTH - 1)),
        option::of(1..5000_i32),
        option::of(1..3600_i32),
        option::of(arb_bytes()),
        option::of(0..8_i32),
        option::of(1..8_i32),
    )
        .prop_map(
            |(query, limit, alive_time, token, current_parallel_id, max_parallel)| ScanQuery {
                query,
                limit,
                alive_time,
                token,
                current_parallel_id,
                max_parallel,
            },
        )
}

/// A complete search request.
pub fn arb_search_request() -> impl Strategy<Value = SearchRequest> {
    (
        arb_field(),
        arb_field(),
        option::of(arb_columns_to_get()),
        arb_search_query(),
        option::of(1..60_000_i32),
    )
        .prop_map(
            |(table_name, index_name, columns_to_get, search_query, timeout_ms)| SearchRequest {
                table_name: Some(table_name),
                index_name: Some(index_name),
                columns_to_get,
                search_query: Some(search_query),
                timeout_ms,
            },
        )
}

/// A complete parallel-scan request.
pub fn arb_parallel_scan_request() -> impl Strategy<Value = ParallelScanRequest> {
    (
        arb_field(),
        arb_field(),
        option::of(arb_columns_to_get()),
        option::of(arb_bytes()),
        arb_scan_query(),
        option::of(1..60_000_i32),
    )
        .prop_map(
            |(table_name, index_name, columns_to_get, session_id, scan_query, timeout_ms)| {
                ParallelScanRequest {
                    table_name: Some(table_name),
                    index_name: Some(index_name),
                    columns_to_get,
                    session_id,
                    scan_query: Some(scan_query),
                    timeout_ms,
                }
            },
        )
}
