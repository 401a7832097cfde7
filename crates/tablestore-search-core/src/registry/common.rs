//! Small value messages shared by several families.

use tablestore_search_model::group_by::{FieldRange, Range};
use tablestore_search_model::types::{DateTimeValue, GeoPoint};

use super::WireMessage;
use crate::error::{required, CodecResult};
use crate::wire::{WireReader, WireWriter};

impl WireMessage for DateTimeValue {
    const NAME: &'static str = "DateTimeValue";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { value, unit } = *self;
        writer.put_i32(1, value);
        writer.put_mapped(2, unit);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut value, mut unit) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => value = Some(field.into_i32()?),
                2 => unit = Some(field.into_mapped()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            value: required(value, Self::NAME, "value")?,
            unit: required(unit, Self::NAME, "unit")?,
        })
    }
}

impl WireMessage for GeoPoint {
    const NAME: &'static str = "GeoPoint";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { lat, lon } = *self;
        writer.put_f64(1, lat);
        writer.put_f64(2, lon);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut lat, mut lon) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => lat = Some(field.into_f64()?),
                2 => lon = Some(field.into_f64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            lat: required(lat, Self::NAME, "lat")?,
            lon: required(lon, Self::NAME, "lon")?,
        })
    }
}

impl WireMessage for Range {
    const NAME: &'static str = "Range";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { from, to } = *self;
        writer.put_f64(1, from);
        writer.put_f64(2, to);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut from, mut to) = (f64::NEG_INFINITY, f64::INFINITY);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => from = field.into_f64()?,
                2 => to = field.into_f64()?,
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self { from, to })
    }
}

impl WireMessage for FieldRange {
    const NAME: &'static str = "FieldRange";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { min, max } = self;
        writer.put_column_value(1, min)?;
        writer.put_column_value(2, max)?;
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut min, mut max) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => min = Some(field.into_column_value()?),
                2 => max = Some(field.into_column_value()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            min: required(min, Self::NAME, "min")?,
            max: required(max, Self::NAME, "max")?,
        })
    }
}
