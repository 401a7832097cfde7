//! Wire enums and their mapping to the model enums.
//!
//! The wire numbers its enums independently of the model: kinds start at
//! 1 with 0 reserved, some enums start at 0, and the order differs from the
//! model's declaration order. Each table below is declared once and
//! generates the wire enum, its code lookup and both directions of the
//! mapping, all as exhaustive matches.

use tablestore_search_model::{kind, request, score, types};

/// A wire-level enum with stable integer codes.
pub trait WireEnum: Copy + Sized + 'static {
    /// Name used in error messages.
    const NAME: &'static str;
    /// Every value, in wire code order.
    const ALL: &'static [Self];

    /// The wire code.
    fn code(self) -> i32;

    /// The value for a wire code, if the code is known.
    fn from_code(code: i32) -> Option<Self>;
}

/// A model enum with a wire counterpart.
pub trait WireMapped: Copy + Sized {
    /// The wire enum.
    type Wire: WireEnum;

    /// The wire value of this model value.
    fn to_wire(self) -> Self::Wire;

    /// The model value of a wire value.
    fn from_wire(wire: Self::Wire) -> Self;
}

/// Declares a wire enum together with its bidirectional model mapping.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $wire:ident for $domain:path {
            $($model:ident => $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $wire {
            $($variant = $code,)+
        }

        impl WireEnum for $wire {
            const NAME: &'static str = stringify!($wire);
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn code(self) -> i32 {
                self as i32
            }

            fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl WireMapped for $domain {
            type Wire = $wire;

            fn to_wire(self) -> $wire {
                match self {
                    $(Self::$model => $wire::$variant,)+
                }
            }

            fn from_wire(wire: $wire) -> Self {
                match wire {
                    $($wire::$variant => Self::$model,)+
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Kind enums
// ---------------------------------------------------------------------------

wire_enum! {
    /// Query kind codes.
    pub enum QueryType for kind::QueryKind {
        Match => MatchQuery = 1,
        MatchPhrase => MatchPhraseQuery = 2,
        Term => TermQuery = 3,
        Range => RangeQuery = 4,
        Prefix => PrefixQuery = 5,
        Bool => BoolQuery = 6,
        ConstScore => ConstScoreQuery = 7,
        FunctionScore => FunctionScoreQuery = 8,
        Nested => NestedQuery = 9,
        Wildcard => WildcardQuery = 10,
        MatchAll => MatchAllQuery = 11,
        GeoBoundingBox => GeoBoundingBoxQuery = 12,
        GeoDistance => GeoDistanceQuery = 13,
        GeoPolygon => GeoPolygonQuery = 14,
        Terms => TermsQuery = 15,
        Exists => ExistsQuery = 16,
        KnnVector => KnnVectorQuery = 17,
        FunctionsScore => FunctionsScoreQuery = 18,
        Suffix => SuffixQuery = 19,
    }
}

wire_enum! {
    /// Group-by kind codes.
    pub enum GroupByType for kind::GroupByKind {
        Field => GroupByField = 1,
        Range => GroupByRange = 2,
        Filter => GroupByFilter = 3,
        GeoDistance => GroupByGeoDistance = 4,
        Histogram => GroupByHistogram = 5,
        DateHistogram => GroupByDateHistogram = 6,
        GeoGrid => GroupByGeoGrid = 7,
        Composite => GroupByComposite = 8,
    }
}

wire_enum! {
    /// Aggregation kind codes.
    pub enum AggregationType for kind::AggregationKind {
        Avg => AggAvg = 1,
        Max => AggMax = 2,
        Min => AggMin = 3,
        Sum => AggSum = 4,
        Count => AggCount = 5,
        DistinctCount => AggDistinctCount = 6,
        TopRows => AggTopRows = 7,
        Percentiles => AggPercentiles = 8,
    }
}

wire_enum! {
    /// Sorter kind codes.
    pub enum SorterType for kind::SorterKind {
        Field => FieldSort = 1,
        GeoDistance => GeoDistanceSort = 2,
        Score => ScoreSort = 3,
        PrimaryKey => PrimaryKeySort = 4,
        Doc => DocSort = 5,
    }
}

// ---------------------------------------------------------------------------
// Field enums
// ---------------------------------------------------------------------------

wire_enum! {
    /// Match query operator codes.
    pub enum QueryOperator for types::QueryOperator {
        Or => Or = 1,
        And => And = 2,
    }
}

wire_enum! {
    /// Nested score mode codes.
    pub enum ScoreMode for types::ScoreMode {
        None => ScoreModeNone = 1,
        Avg => ScoreModeAvg = 2,
        Max => ScoreModeMax = 3,
        Total => ScoreModeTotal = 4,
        Min => ScoreModeMin = 5,
    }
}

wire_enum! {
    /// Function score mode codes.
    pub enum FunctionScoreMode for types::FunctionScoreMode {
        Avg => FsmAvg = 1,
        Max => FsmMax = 2,
        Sum => FsmSum = 3,
        Min => FsmMin = 4,
        Multiply => FsmMultiply = 5,
        First => FsmFirst = 6,
    }
}

wire_enum! {
    /// Function combine mode codes.
    pub enum FunctionCombineMode for types::FunctionCombineMode {
        Multiply => FcmMultiply = 1,
        Avg => FcmAvg = 2,
        Max => FcmMax = 3,
        Sum => FcmSum = 4,
        Min => FcmMin = 5,
        Replace => FcmReplace = 6,
    }
}

wire_enum! {
    /// Field value factor modifier codes.
    pub enum FunctionModifier for types::FieldValueFactorModifier {
        None => FmNone = 1,
        Log => FmLog = 2,
        Log1p => FmLog1p = 3,
        Log2p => FmLog2p = 4,
        Ln => FmLn = 5,
        Ln1p => FmLn1p = 6,
        Ln2p => FmLn2p = 7,
        Square => FmSquare = 8,
        Sqrt => FmSqrt = 9,
        Reciprocal => FmReciprocal = 10,
    }
}

wire_enum! {
    /// Decay curve codes.
    pub enum DecayMathFunction for types::DecayMathFunction {
        Gauss => Gauss = 1,
        Exp => Exp = 2,
        Linear => Linear = 3,
    }
}

wire_enum! {
    /// Multi-value mode codes.
    pub enum MultiValueMode for types::MultiValueMode {
        Max => MvmMax = 1,
        Min => MvmMin = 2,
        Sum => MvmSum = 3,
        Avg => MvmAvg = 4,
    }
}

wire_enum! {
    /// Decay parameter type codes.
    pub enum DecayFuncParamType for score::DecayParamKind {
        Date => DfDate = 1,
        Numeric => DfNumeric = 2,
        Geo => DfGeo = 3,
    }
}

wire_enum! {
    /// Sort order codes.
    pub enum SortOrder for types::SortOrder {
        Asc => SortOrderAsc = 0,
        Desc => SortOrderDesc = 1,
    }
}

wire_enum! {
    /// Sort mode codes.
    pub enum SortMode for types::SortMode {
        Min => SortModeMin = 0,
        Max => SortModeMax = 1,
        Avg => SortModeAvg = 2,
    }
}

wire_enum! {
    /// Geo distance formula codes.
    pub enum GeoDistanceType for types::GeoDistanceType {
        Arc => GeoDistanceArc = 0,
        Plane => GeoDistancePlane = 1,
    }
}

wire_enum! {
    /// Calendar unit codes.
    pub enum DateTimeUnit for types::DateTimeUnit {
        Year => Year = 1,
        QuarterYear => QuarterYear = 2,
        Month => Month = 3,
        Week => Week = 4,
        Day => Day = 5,
        Hour => Hour = 6,
        Minute => Minute = 7,
        Second => Second = 8,
        Millisecond => Millisecond = 9,
    }
}

wire_enum! {
    /// Geohash precision codes.
    pub enum GeoHashPrecision for types::GeoHashPrecision {
        Level1 => Ghp5009km4992km = 1,
        Level2 => Ghp1252km624km = 2,
        Level3 => Ghp156km156km = 3,
        Level4 => Ghp39km19km = 4,
        Level5 => Ghp4900m4900m = 5,
        Level6 => Ghp1200m609m = 6,
        Level7 => Ghp152m152m = 7,
        Level8 => Ghp38m19m = 8,
        Level9 => Ghp480cm480cm = 9,
        Level10 => Ghp120cm595mm = 10,
        Level11 => Ghp149mm149mm = 11,
        Level12 => Ghp37mm19mm = 12,
    }
}

wire_enum! {
    /// Column projection codes.
    pub enum ColumnReturnType for request::ColumnReturnType {
        All => ReturnAll = 1,
        Specified => ReturnSpecified = 2,
        None => ReturnNone = 3,
        AllFromIndex => ReturnAllFromIndex = 4,
    }
}
