//! Kind tags for the four expression families.
//!
//! A kind selects which variant struct a serialized payload holds. Each kind
//! enum lists exactly the variants of its family; the codec maps these to
//! the wire's own numbering.

domain_enum! {
    /// Discriminator of [`crate::Query`].
    pub enum QueryKind {
        /// Full-text match.
        Match => "Match",
        /// Full-text phrase match.
        MatchPhrase => "MatchPhrase",
        /// Exact term.
        Term => "Term",
        /// Value range.
        Range => "Range",
        /// String prefix.
        Prefix => "Prefix",
        /// Boolean composition of sub-queries.
        Bool => "Bool",
        /// Constant-score filter.
        ConstScore => "ConstScore",
        /// Legacy single field-value-factor scoring.
        FunctionScore => "FunctionScore",
        /// Multi-function scoring.
        FunctionsScore => "FunctionsScore",
        /// Query over nested documents.
        Nested => "Nested",
        /// Wildcard pattern.
        Wildcard => "Wildcard",
        /// Matches every row.
        MatchAll => "MatchAll",
        /// Geo bounding box.
        GeoBoundingBox => "GeoBoundingBox",
        /// Geo distance from a point.
        GeoDistance => "GeoDistance",
        /// Geo polygon.
        GeoPolygon => "GeoPolygon",
        /// Any of several exact terms.
        Terms => "Terms",
        /// Field presence.
        Exists => "Exists",
        /// Approximate nearest-neighbour vector search.
        KnnVector => "KnnVector",
        /// String suffix.
        Suffix => "Suffix",
    }
}

domain_enum! {
    /// Discriminator of [`crate::GroupBy`].
    pub enum GroupByKind {
        /// Group by distinct field values.
        Field => "Field",
        /// Group by filter queries.
        Filter => "Filter",
        /// Group by numeric ranges.
        Range => "Range",
        /// Group by fixed-width numeric buckets.
        Histogram => "Histogram",
        /// Group by calendar buckets.
        DateHistogram => "DateHistogram",
        /// Group by a combination of sources.
        Composite => "Composite",
        /// Group by distance rings around a point.
        GeoDistance => "GeoDistance",
        /// Group by geohash cell.
        GeoGrid => "GeoGrid",
    }
}

domain_enum! {
    /// Discriminator of [`crate::Aggregation`].
    pub enum AggregationKind {
        /// Arithmetic mean.
        Avg => "Avg",
        /// Row count.
        Count => "Count",
        /// Maximum.
        Max => "Max",
        /// Minimum.
        Min => "Min",
        /// Sum.
        Sum => "Sum",
        /// Approximate distinct count.
        DistinctCount => "DistinctCount",
        /// Percentile estimates.
        Percentiles => "Percentiles",
        /// Top rows per bucket.
        TopRows => "TopRows",
    }
}

domain_enum! {
    /// Discriminator of [`crate::Sorter`].
    pub enum SorterKind {
        /// Sort by a field value.
        Field => "Field",
        /// Sort by distance from points.
        GeoDistance => "GeoDistance",
        /// Sort by relevance score.
        Score => "Score",
        /// Sort by primary key.
        PrimaryKey => "PrimaryKey",
        /// Sort by internal document order.
        Doc => "Doc",
    }
}
