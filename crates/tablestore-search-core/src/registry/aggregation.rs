//! Aggregation encoders and decoders.

use tablestore_search_model::aggregation::{
    Aggregation, AvgAggregation, CountAggregation, DistinctCountAggregation, MaxAggregation,
    MinAggregation, PercentilesAggregation, SumAggregation, TopRowsAggregation,
};
use tablestore_search_model::AggregationKind;

use super::{family_codec, WireMessage};
use crate::error::{required, CodecResult};
use crate::wire::{WireReader, WireWriter};

family_codec! {
    Aggregation: AggregationKind as "Aggregation" {
        Avg => AvgAggregation,
        Count => CountAggregation,
        Max => MaxAggregation,
        Min => MinAggregation,
        Sum => SumAggregation,
        DistinctCount => DistinctCountAggregation,
        Percentiles => PercentilesAggregation,
        TopRows => TopRowsAggregation,
    }
}

macro_rules! metric_codec {
    ($($agg:ident => $name:literal,)+) => {$(
        impl WireMessage for $agg {
            const NAME: &'static str = $name;

            fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
                let Self {
                    name,
                    field_name,
                    missing,
                } = self;
                writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
                writer.put_str(2, required(field_name.as_deref(), Self::NAME, "fieldName")?);
                writer.put_opt_column_value(3, missing.as_ref())
            }

            fn decode(mut reader: WireReader) -> CodecResult<Self> {
                let (mut name, mut field_name, mut missing) = (None, None, None);
                while let Some(field) = reader.next_field()? {
                    match field.number() {
                        1 => name = Some(field.into_string()?),
                        2 => field_name = Some(field.into_string()?),
                        3 => missing = Some(field.into_column_value()?),
                        _ => return Err(field.unexpected()),
                    }
                }
                Ok(Self {
                    name: Some(required(name, Self::NAME, "name")?),
                    field_name: Some(required(field_name, Self::NAME, "fieldName")?),
                    missing,
                })
            }
        }
    )+};
}

metric_codec! {
    AvgAggregation => "AvgAggregation",
    MaxAggregation => "MaxAggregation",
    MinAggregation => "MinAggregation",
    SumAggregation => "SumAggregation",
    DistinctCountAggregation => "DistinctCountAggregation",
}

impl WireMessage for CountAggregation {
    const NAME: &'static str = "CountAggregation";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { name, field_name } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_str(2, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut name, mut field_name) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => field_name = Some(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
        })
    }
}

impl WireMessage for PercentilesAggregation {
    const NAME: &'static str = "PercentilesAggregation";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            percentiles,
            missing,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_str(2, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        if !percentiles.is_empty() {
            writer.put_packed_f64(3, percentiles);
        }
        writer.put_opt_column_value(4, missing.as_ref())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut name, mut field_name, mut missing) = (None, None, None);
        let mut percentiles = Vec::new();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => field_name = Some(field.into_string()?),
                3 => percentiles.extend(field.into_packed_f64()?),
                4 => missing = Some(field.into_column_value()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            percentiles,
            missing,
        })
    }
}

impl WireMessage for TopRowsAggregation {
    const NAME: &'static str = "TopRowsAggregation";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { name, limit, sort } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_opt_i32(2, *limit);
        writer.put_opt_message(3, "sort", sort.as_ref())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut name, mut limit, mut sort) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => limit = Some(field.into_i32()?),
                3 => sort = Some(field.into_message("sort")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            limit,
            sort,
        })
    }
}
