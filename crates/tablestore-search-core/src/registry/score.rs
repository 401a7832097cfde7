//! Function-score queries, score functions and decay parameters.

use tablestore_search_model::query::{
    DateDecayParam, DecayFunction, DecayParam, DecayParamKind, FieldValueFactor,
    FieldValueFactorFunction, FunctionScoreQuery, FunctionsScoreQuery, GeoDecayParam,
    NumericDecayParam, Query, RandomScoreFunction, ScoreFunction,
};
use tablestore_search_model::types::DateTimeValue;

use super::{decode_message, encode_message, WireMessage};
use crate::error::{required, CodecError, CodecResult, PathSegment};
use crate::wire::{WireReader, WireWriter};

impl WireMessage for FunctionScoreQuery {
    const NAME: &'static str = "FunctionScoreQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            query,
            field_value_factor,
        } = self;
        let query = required(query.as_deref(), Self::NAME, "query")?;
        writer.put_node::<Query>(1, "query", query)?;
        let factor = required(field_value_factor.as_ref(), Self::NAME, "fieldValueFactor")?;
        writer.put_message(2, "fieldValueFactor", factor)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut query, mut field_value_factor) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => query = Some(Box::new(field.into_node("query")?)),
                2 => field_value_factor = Some(field.into_message("fieldValueFactor")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            query: Some(required(query, Self::NAME, "query")?),
            field_value_factor: Some(required(
                field_value_factor,
                Self::NAME,
                "fieldValueFactor",
            )?),
        })
    }
}

impl WireMessage for FieldValueFactor {
    const NAME: &'static str = "FieldValueFactor";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { field_name } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut field_name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
        })
    }
}

impl WireMessage for FunctionsScoreQuery {
    const NAME: &'static str = "FunctionsScoreQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            query,
            functions,
            score_mode,
            combine_mode,
            min_score,
            max_score,
        } = self;
        writer.put_opt_node::<Query>(1, "query", query.as_deref())?;
        writer.put_messages(2, "functions", functions)?;
        writer.put_opt_mapped(3, *score_mode);
        writer.put_opt_mapped(4, *combine_mode);
        writer.put_opt_f32(5, *min_score);
        writer.put_opt_f32(6, *max_score);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => query.query = Some(Box::new(field.into_node("query")?)),
                2 => query.functions.push(field.into_message_item("functions")?),
                3 => query.score_mode = Some(field.into_mapped()?),
                4 => query.combine_mode = Some(field.into_mapped()?),
                5 => query.min_score = Some(field.into_f32()?),
                6 => query.max_score = Some(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(query)
    }
}

/// Rejects a score function carrying more than one function kind.
fn check_single_function_kind(function: &ScoreFunction) -> CodecResult<()> {
    let kinds: Vec<&str> = [
        function.field_value_factor.is_some().then_some("fieldValueFactor"),
        function.decay.is_some().then_some("decay"),
        function.random.is_some().then_some("random"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if kinds.len() > 1 {
        return Err(CodecError::invalid(
            ScoreFunction::NAME,
            format!("at most one function kind may be set, found {}", kinds.join(" and ")),
        ));
    }
    Ok(())
}

impl WireMessage for ScoreFunction {
    const NAME: &'static str = "Function";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        check_single_function_kind(self)?;
        let Self {
            weight,
            filter,
            field_value_factor,
            decay,
            random,
        } = self;
        writer.put_opt_f32(1, *weight);
        writer.put_opt_node::<Query>(2, "filter", filter.as_deref())?;
        writer.put_opt_message(3, "fieldValueFactor", field_value_factor.as_ref())?;
        writer.put_opt_message(4, "decay", decay.as_ref())?;
        writer.put_opt_message(5, "random", random.as_ref())?;
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut function = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => function.weight = Some(field.into_f32()?),
                2 => function.filter = Some(Box::new(field.into_node("filter")?)),
                3 => function.field_value_factor = Some(field.into_message("fieldValueFactor")?),
                4 => function.decay = Some(field.into_message("decay")?),
                5 => function.random = Some(field.into_message("random")?),
                _ => return Err(field.unexpected()),
            }
        }
        check_single_function_kind(&function)?;
        Ok(function)
    }
}

impl WireMessage for FieldValueFactorFunction {
    const NAME: &'static str = "FieldValueFactorFunction";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            factor,
            modifier,
            missing,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_opt_f32(2, *factor);
        writer.put_opt_mapped(3, *modifier);
        writer.put_opt_f64(4, *missing);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut function = Self::default();
        let mut field_name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => function.factor = Some(field.into_f32()?),
                3 => function.modifier = Some(field.into_mapped()?),
                4 => function.missing = Some(field.into_f64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..function
        })
    }
}

impl WireMessage for RandomScoreFunction {
    const NAME: &'static str = "RandomScoreFunction";

    fn encode(&self, _writer: &mut WireWriter) -> CodecResult<()> {
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        if let Some(field) = reader.next_field()? {
            return Err(field.unexpected());
        }
        Ok(Self)
    }
}

// ---------------------------------------------------------------------------
// Decay
// ---------------------------------------------------------------------------

impl WireMessage for DecayFunction {
    const NAME: &'static str = "DecayFunction";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            math_function,
            param,
            decay,
            multi_value_mode,
        } = self;
        let param = required(param.as_ref(), Self::NAME, "param")?;
        let within_param = |err: CodecError| err.within(PathSegment::new(Self::NAME, "param"));
        validate_decay_param(param).map_err(within_param)?;

        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_opt_mapped(2, *math_function);
        writer.put_mapped(3, param.kind());
        let encoded = match param {
            DecayParam::Date(date) => encode_message(date),
            DecayParam::Numeric(numeric) => encode_message(numeric),
            DecayParam::Geo(geo) => encode_message(geo),
        }
        .map_err(within_param)?;
        writer.put_bytes(4, &encoded);
        writer.put_opt_f64(5, *decay);
        writer.put_opt_mapped(6, *multi_value_mode);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut function = Self::default();
        let (mut field_name, mut param_type, mut param_bytes) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => function.math_function = Some(field.into_mapped()?),
                3 => param_type = Some(field.into_mapped::<DecayParamKind>()?),
                4 => param_bytes = Some(field.into_bytes()?),
                5 => function.decay = Some(field.into_f64()?),
                6 => function.multi_value_mode = Some(field.into_mapped()?),
                _ => return Err(field.unexpected()),
            }
        }

        let field_name = required(field_name, Self::NAME, "fieldName")?;
        let param_type = required(param_type, Self::NAME, "paramType")?;
        let param_bytes = required(param_bytes, Self::NAME, "param")?;
        let within_param = |err: CodecError| err.within(PathSegment::new(Self::NAME, "param"));
        let param = match param_type {
            DecayParamKind::Date => decode_message(param_bytes).map(DecayParam::Date),
            DecayParamKind::Numeric => decode_message(param_bytes).map(DecayParam::Numeric),
            DecayParamKind::Geo => decode_message(param_bytes).map(DecayParam::Geo),
        }
        .map_err(within_param)?;
        validate_decay_param(&param).map_err(within_param)?;

        Ok(Self {
            field_name: Some(field_name),
            param: Some(param),
            ..function
        })
    }
}

/// Check a decay parameter before it is written or after it is read.
///
/// Every variant needs an origin and a positive `scale`; `offset`, when
/// set, must not be negative. Date durations must use a unit of a day or
/// finer. A date origin may be given as epoch millis, a string or both.
pub fn validate_decay_param(param: &DecayParam) -> CodecResult<()> {
    match param {
        DecayParam::Date(date) => {
            const NAME: &str = DateDecayParam::NAME;
            if date.origin_long.is_none() && date.origin_string.is_none() {
                return Err(CodecError::required(NAME, "origin"));
            }
            let scale = required(date.scale, NAME, "scale")?;
            check_date_unit(NAME, "scale", scale)?;
            if scale.value <= 0 {
                return Err(CodecError::invalid(
                    NAME,
                    format!("scale must be positive, got {}", scale.value),
                ));
            }
            if let Some(offset) = date.offset {
                check_date_unit(NAME, "offset", offset)?;
                if offset.value < 0 {
                    return Err(CodecError::invalid(
                        NAME,
                        format!("offset must not be negative, got {}", offset.value),
                    ));
                }
            }
            Ok(())
        }
        DecayParam::Numeric(numeric) => {
            required(numeric.origin, NumericDecayParam::NAME, "origin")?;
            check_distances(NumericDecayParam::NAME, numeric.scale, numeric.offset)
        }
        DecayParam::Geo(geo) => {
            required(geo.origin.as_ref(), GeoDecayParam::NAME, "origin")?;
            check_distances(GeoDecayParam::NAME, geo.scale, geo.offset)
        }
    }
}

fn check_date_unit(
    message: &'static str,
    field: &str,
    value: DateTimeValue,
) -> CodecResult<()> {
    if value.unit.is_day_or_finer() {
        Ok(())
    } else {
        Err(CodecError::invalid(
            message,
            format!("{field} unit must be day or finer, got {}", value.unit),
        ))
    }
}

fn check_distances(
    message: &'static str,
    scale: Option<f64>,
    offset: Option<f64>,
) -> CodecResult<()> {
    let scale = required(scale, message, "scale")?;
    if scale.is_nan() || scale <= 0.0 {
        return Err(CodecError::invalid(
            message,
            format!("scale must be positive, got {scale}"),
        ));
    }
    if let Some(offset) = offset {
        if offset.is_nan() || offset < 0.0 {
            return Err(CodecError::invalid(
                message,
                format!("offset must not be negative, got {offset}"),
            ));
        }
    }
    Ok(())
}

impl WireMessage for DateDecayParam {
    const NAME: &'static str = "DecayFuncDateParam";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            origin_long,
            origin_string,
            scale,
            offset,
        } = self;
        writer.put_opt_i64(1, *origin_long);
        writer.put_opt_str(2, origin_string.as_deref());
        writer.put_opt_message(3, "scale", scale.as_ref())?;
        writer.put_opt_message(4, "offset", offset.as_ref())?;
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut param = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => param.origin_long = Some(field.into_i64()?),
                2 => param.origin_string = Some(field.into_string()?),
                3 => param.scale = Some(field.into_message("scale")?),
                4 => param.offset = Some(field.into_message("offset")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(param)
    }
}

impl WireMessage for NumericDecayParam {
    const NAME: &'static str = "DecayFuncNumericParam";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            origin,
            scale,
            offset,
        } = self;
        writer.put_opt_f64(1, *origin);
        writer.put_opt_f64(2, *scale);
        writer.put_opt_f64(3, *offset);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut param = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => param.origin = Some(field.into_f64()?),
                2 => param.scale = Some(field.into_f64()?),
                3 => param.offset = Some(field.into_f64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(param)
    }
}

impl WireMessage for GeoDecayParam {
    const NAME: &'static str = "DecayFuncGeoParam";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            origin,
            scale,
            offset,
        } = self;
        writer.put_opt_str(1, origin.as_deref());
        writer.put_opt_f64(2, *scale);
        writer.put_opt_f64(3, *offset);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut param = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => param.origin = Some(field.into_string()?),
                2 => param.scale = Some(field.into_f64()?),
                3 => param.offset = Some(field.into_f64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(param)
    }
}
