//! Function-score queries and their score functions.

use typed_builder::TypedBuilder;

use crate::query::Query;
use crate::types::{
    DateTimeValue, DecayMathFunction, FieldValueFactorModifier, FunctionCombineMode,
    FunctionScoreMode, MultiValueMode,
};

/// Legacy function-score query scoring by a single numeric field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct FunctionScoreQuery {
    /// Query whose matches are rescored. Required.
    #[builder(default, setter(transform = |query: Query| Some(Box::new(query))))]
    pub query: Option<Box<Query>>,
    /// Field supplying the score. Required.
    #[builder(default, setter(strip_option))]
    pub field_value_factor: Option<FieldValueFactor>,
}

impl FunctionScoreQuery {
    /// Rescore matches of `query` by the value of `field_name`.
    #[must_use]
    pub fn new(query: impl Into<Query>, field_name: impl Into<String>) -> Self {
        Self::builder()
            .query(query.into())
            .field_value_factor(FieldValueFactor::new(field_name))
            .build()
    }
}

/// Field reference of a [`FunctionScoreQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValueFactor {
    /// Numeric field. Required.
    pub field_name: Option<String>,
}

impl FieldValueFactor {
    /// Score by `field_name`.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: Some(field_name.into()),
        }
    }
}

/// Rescores the matches of `query` with a list of score functions.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct FunctionsScoreQuery {
    /// Query whose matches are rescored.
    #[builder(default, setter(transform = |query: Query| Some(Box::new(query))))]
    pub query: Option<Box<Query>>,
    /// Score functions, applied in order.
    #[builder(default)]
    pub functions: Vec<ScoreFunction>,
    /// How function scores combine with each other.
    #[builder(default, setter(strip_option))]
    pub score_mode: Option<FunctionScoreMode>,
    /// How the combined function score merges with the query score.
    #[builder(default, setter(strip_option))]
    pub combine_mode: Option<FunctionCombineMode>,
    /// Rows scoring below this are dropped.
    #[builder(default, setter(strip_option))]
    pub min_score: Option<f32>,
    /// Cap on the function score.
    #[builder(default, setter(strip_option))]
    pub max_score: Option<f32>,
}

/// One function of a [`FunctionsScoreQuery`].
///
/// At most one of `field_value_factor`, `decay` and `random` may be set.
/// All three fields exist so that a conflicting combination can be
/// expressed and rejected by the codec.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct ScoreFunction {
    /// Multiplier applied to the function score. No default.
    #[builder(default, setter(strip_option))]
    pub weight: Option<f32>,
    /// Only rows matching this filter are scored by the function.
    #[builder(default, setter(transform = |filter: Query| Some(Box::new(filter))))]
    pub filter: Option<Box<Query>>,
    /// Score by a field value.
    #[builder(default, setter(strip_option))]
    pub field_value_factor: Option<FieldValueFactorFunction>,
    /// Score by distance from an origin.
    #[builder(default, setter(strip_option))]
    pub decay: Option<DecayFunction>,
    /// Random score.
    #[builder(default, setter(strip_option))]
    pub random: Option<RandomScoreFunction>,
}

/// Scores by a numeric field, optionally transformed.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct FieldValueFactorFunction {
    /// Numeric field. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Multiplier applied before the modifier.
    #[builder(default, setter(strip_option))]
    pub factor: Option<f32>,
    /// Transformation of the field value.
    #[builder(default, setter(strip_option))]
    pub modifier: Option<FieldValueFactorModifier>,
    /// Value used when the field is absent.
    #[builder(default, setter(strip_option))]
    pub missing: Option<f64>,
}

/// Random score; carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomScoreFunction;

/// Scores by how far a field value lies from an origin.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct DecayFunction {
    /// Field to measure. Required.
    #[builder(default, setter(into, strip_option))]
    pub field_name: Option<String>,
    /// Decay curve.
    #[builder(default, setter(strip_option))]
    pub math_function: Option<DecayMathFunction>,
    /// Origin, scale and offset. Required.
    #[builder(default, setter(into, strip_option))]
    pub param: Option<DecayParam>,
    /// Score at distance `scale` from the origin.
    #[builder(default, setter(strip_option))]
    pub decay: Option<f64>,
    /// Which value of a multi-valued field is measured.
    #[builder(default, setter(strip_option))]
    pub multi_value_mode: Option<MultiValueMode>,
}

domain_enum! {
    /// Discriminator of [`DecayParam`].
    pub enum DecayParamKind {
        /// Date origin and durations.
        Date => "date",
        /// Numeric origin and distances.
        Numeric => "numeric",
        /// Geo origin and distances in meters.
        Geo => "geo",
    }
}

/// Origin, scale and offset of a decay function.
///
/// `scale` must be positive and `offset` non-negative in every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DecayParam {
    /// Date field.
    Date(DateDecayParam),
    /// Numeric field.
    Numeric(NumericDecayParam),
    /// Geo point field.
    Geo(GeoDecayParam),
}

impl DecayParam {
    /// The kind tag of this parameter.
    #[must_use]
    pub const fn kind(&self) -> DecayParamKind {
        match self {
            Self::Date(_) => DecayParamKind::Date,
            Self::Numeric(_) => DecayParamKind::Numeric,
            Self::Geo(_) => DecayParamKind::Geo,
        }
    }
}

impl From<DateDecayParam> for DecayParam {
    fn from(param: DateDecayParam) -> Self {
        Self::Date(param)
    }
}

impl From<NumericDecayParam> for DecayParam {
    fn from(param: NumericDecayParam) -> Self {
        Self::Numeric(param)
    }
}

impl From<GeoDecayParam> for DecayParam {
    fn from(param: GeoDecayParam) -> Self {
        Self::Geo(param)
    }
}

/// Decay parameters of a date field.
///
/// The origin is either epoch milliseconds or a date string. Durations must
/// use a unit of a day or finer.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder)]
pub struct DateDecayParam {
    /// Origin as epoch milliseconds.
    #[builder(default, setter(strip_option))]
    pub origin_long: Option<i64>,
    /// Origin as a date string.
    #[builder(default, setter(into, strip_option))]
    pub origin_string: Option<String>,
    /// Distance at which the score equals `decay`. Required.
    #[builder(default, setter(strip_option))]
    pub scale: Option<DateTimeValue>,
    /// Distance within which the score is not reduced.
    #[builder(default, setter(strip_option))]
    pub offset: Option<DateTimeValue>,
}

/// Decay parameters of a numeric field.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct NumericDecayParam {
    /// Origin. Required.
    #[builder(default, setter(strip_option))]
    pub origin: Option<f64>,
    /// Distance at which the score equals `decay`. Required.
    #[builder(default, setter(strip_option))]
    pub scale: Option<f64>,
    /// Distance within which the score is not reduced.
    #[builder(default, setter(strip_option))]
    pub offset: Option<f64>,
}

/// Decay parameters of a geo point field, distances in meters.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct GeoDecayParam {
    /// Origin as `"lat,lon"`. Required.
    #[builder(default, setter(into, strip_option))]
    pub origin: Option<String>,
    /// Distance at which the score equals `decay`. Required.
    #[builder(default, setter(strip_option))]
    pub scale: Option<f64>,
    /// Distance within which the score is not reduced.
    #[builder(default, setter(strip_option))]
    pub offset: Option<f64>,
}
