//! Shared enums and small value types used across the expression families.
//!
//! Enum variants use idiomatic Rust names; the codec owns the mapping to the
//! wire numbering, which follows a different naming and ordering convention.

use bytes::Bytes;

// ---------------------------------------------------------------------------
// Weight
// ---------------------------------------------------------------------------

/// Boost weight of a query clause.
///
/// A weight the caller never set is distinguishable from one explicitly set
/// to the default, but both compare equal. Queries whose weight is always on
/// the wire serialize both as `1.0`; a vector query writes only an explicit
/// weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weight(Option<f32>);

impl Weight {
    /// Weight used when none was set.
    pub const DEFAULT: f32 = 1.0;

    /// A weight left at its default.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// An explicitly set weight.
    #[must_use]
    pub const fn new(weight: f32) -> Self {
        Self(Some(weight))
    }

    /// The effective weight, with the default substituted when unset.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0.unwrap_or(Self::DEFAULT)
    }

    /// The weight exactly as the caller set it.
    #[must_use]
    pub const fn explicit(self) -> Option<f32> {
        self.0
    }

    /// Whether the caller set this weight.
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        self.0.is_some()
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.value().to_bits() == other.value().to_bits()
    }
}

impl From<f32> for Weight {
    fn from(weight: f32) -> Self {
        Self::new(weight)
    }
}

// ---------------------------------------------------------------------------
// Query enums
// ---------------------------------------------------------------------------

domain_enum! {
    /// How the tokens of a match query combine.
    pub enum QueryOperator {
        /// Any token may match.
        Or => "OR",
        /// Every token must match.
        And => "AND",
    }
}

domain_enum! {
    /// How child document scores fold into a nested query's score.
    pub enum ScoreMode {
        /// Ignore child scores.
        None => "none",
        /// Average of child scores.
        Avg => "avg",
        /// Highest child score.
        Max => "max",
        /// Sum of child scores.
        Total => "total",
        /// Lowest child score.
        Min => "min",
    }
}

domain_enum! {
    /// How the scores of several score functions combine.
    pub enum FunctionScoreMode {
        /// Average.
        Avg => "avg",
        /// Maximum.
        Max => "max",
        /// Sum.
        Sum => "sum",
        /// Minimum.
        Min => "min",
        /// Product.
        Multiply => "multiply",
        /// First matching function only.
        First => "first",
    }
}

domain_enum! {
    /// How the combined function score merges with the query score.
    pub enum FunctionCombineMode {
        /// Product.
        Multiply => "multiply",
        /// Average.
        Avg => "avg",
        /// Maximum.
        Max => "max",
        /// Sum.
        Sum => "sum",
        /// Minimum.
        Min => "min",
        /// Function score replaces query score.
        Replace => "replace",
    }
}

domain_enum! {
    /// Transformation applied to a field value before it becomes a score.
    pub enum FieldValueFactorModifier {
        /// Identity.
        None => "none",
        /// `log10(x)`.
        Log => "log",
        /// `log10(x + 1)`.
        Log1p => "log1p",
        /// `log10(x + 2)`.
        Log2p => "log2p",
        /// `ln(x)`.
        Ln => "ln",
        /// `ln(x + 1)`.
        Ln1p => "ln1p",
        /// `ln(x + 2)`.
        Ln2p => "ln2p",
        /// `x * x`.
        Square => "square",
        /// `sqrt(x)`.
        Sqrt => "sqrt",
        /// `1 / x`.
        Reciprocal => "reciprocal",
    }
}

domain_enum! {
    /// Curve of a decay function.
    pub enum DecayMathFunction {
        /// Gaussian decay.
        Gauss => "gauss",
        /// Exponential decay.
        Exp => "exp",
        /// Linear decay.
        Linear => "linear",
    }
}

domain_enum! {
    /// Which value of a multi-valued field a decay function uses.
    pub enum MultiValueMode {
        /// Largest value.
        Max => "max",
        /// Smallest value.
        Min => "min",
        /// Sum of values.
        Sum => "sum",
        /// Average of values.
        Avg => "avg",
    }
}

// ---------------------------------------------------------------------------
// Sort enums
// ---------------------------------------------------------------------------

domain_enum! {
    /// Sort direction.
    pub enum SortOrder {
        /// Ascending.
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

domain_enum! {
    /// Which value of a multi-valued field a sorter uses.
    pub enum SortMode {
        /// Smallest value.
        Min => "min",
        /// Largest value.
        Max => "max",
        /// Average value.
        Avg => "avg",
    }
}

domain_enum! {
    /// Distance formula for geo distance sorting.
    pub enum GeoDistanceType {
        /// Great-circle arc.
        Arc => "arc",
        /// Planar approximation.
        Plane => "plane",
    }
}

// ---------------------------------------------------------------------------
// Time and geo
// ---------------------------------------------------------------------------

domain_enum! {
    /// Calendar unit of a [`DateTimeValue`].
    pub enum DateTimeUnit {
        /// Year.
        Year => "year",
        /// Quarter of a year.
        QuarterYear => "quarter_year",
        /// Month.
        Month => "month",
        /// Week.
        Week => "week",
        /// Day.
        Day => "day",
        /// Hour.
        Hour => "hour",
        /// Minute.
        Minute => "minute",
        /// Second.
        Second => "second",
        /// Millisecond.
        Millisecond => "millisecond",
    }
}

impl DateTimeUnit {
    /// Whether this unit is a day or finer.
    #[must_use]
    pub const fn is_day_or_finer(self) -> bool {
        matches!(
            self,
            Self::Day | Self::Hour | Self::Minute | Self::Second | Self::Millisecond
        )
    }
}

/// An amount of calendar time, e.g. `3 day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeValue {
    /// Number of units.
    pub value: i32,
    /// The unit.
    pub unit: DateTimeUnit,
}

impl DateTimeValue {
    /// Create a new value.
    #[must_use]
    pub const fn new(value: i32, unit: DateTimeUnit) -> Self {
        Self { value, unit }
    }

    /// `value` days.
    #[must_use]
    pub const fn days(value: i32) -> Self {
        Self::new(value, DateTimeUnit::Day)
    }

    /// `value` hours.
    #[must_use]
    pub const fn hours(value: i32) -> Self {
        Self::new(value, DateTimeUnit::Hour)
    }
}

impl std::fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

domain_enum! {
    /// Geohash cell size used by geo grid grouping.
    ///
    /// Level 1 is the coarsest cell (about 5009km x 4992km), level 12 the
    /// finest (about 37mm x 19mm).
    pub enum GeoHashPrecision {
        /// About 5009km x 4992km.
        Level1 => "5009km_4992km",
        /// About 1252km x 624km.
        Level2 => "1252km_624km",
        /// About 156km x 156km.
        Level3 => "156km_156km",
        /// About 39km x 19km.
        Level4 => "39km_19km",
        /// About 4900m x 4900m.
        Level5 => "4900m_4900m",
        /// About 1200m x 609m.
        Level6 => "1200m_609m",
        /// About 152m x 152m.
        Level7 => "152m_152m",
        /// About 38m x 19m.
        Level8 => "38m_19m",
        /// About 480cm x 480cm.
        Level9 => "480cm_480cm",
        /// About 120cm x 595mm.
        Level10 => "120cm_595mm",
        /// About 149mm x 149mm.
        Level11 => "149mm_149mm",
        /// About 37mm x 19mm.
        Level12 => "37mm_19mm",
    }
}

// ---------------------------------------------------------------------------
// Opaque pass-through
// ---------------------------------------------------------------------------

/// Highlight configuration, carried as already-encoded bytes.
///
/// Highlighting is configured elsewhere; this layer forwards the bytes
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Highlight(Bytes);

impl Highlight {
    /// Wrap an encoded highlight message.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<Bytes>) -> Self {
        Self(encoded.into())
    }

    /// The encoded highlight message.
    #[must_use]
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}
