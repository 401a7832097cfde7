//! Sort and sorter encoders and decoders.

use tablestore_search_model::query::Query;
use tablestore_search_model::sort::{
    DocSort, FieldSort, GeoDistanceSort, NestedFilter, PrimaryKeySort, ScoreSort, Sort, Sorter,
};
use tablestore_search_model::SorterKind;

use super::{family_codec, WireMessage};
use crate::error::{required, CodecResult};
use crate::wire::{WireReader, WireWriter};

family_codec! {
    Sorter: SorterKind as "Sorter" {
        Field => FieldSort,
        GeoDistance => GeoDistanceSort,
        Score => ScoreSort,
        PrimaryKey => PrimaryKeySort,
        Doc => DocSort,
    }
}

impl WireMessage for Sort {
    const NAME: &'static str = "Sort";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { sorters } = self;
        writer.put_nodes(1, "sorter", sorters)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut sorters = Vec::new();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => sorters.push(field.into_node_item("sorter")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self { sorters })
    }
}

impl WireMessage for FieldSort {
    const NAME: &'static str = "FieldSort";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            order,
            mode,
            nested_filter,
            missing_value,
            missing_field,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_opt_mapped(2, *order);
        writer.put_opt_mapped(3, *mode);
        writer.put_opt_message(4, "nestedFilter", nested_filter.as_ref())?;
        writer.put_opt_column_value(5, missing_value.as_ref())?;
        writer.put_opt_str(6, missing_field.as_deref());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut sort = Self::default();
        let mut field_name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => sort.order = Some(field.into_mapped()?),
                3 => sort.mode = Some(field.into_mapped()?),
                4 => sort.nested_filter = Some(field.into_message("nestedFilter")?),
                5 => sort.missing_value = Some(field.into_column_value()?),
                6 => sort.missing_field = Some(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..sort
        })
    }
}

impl WireMessage for GeoDistanceSort {
    const NAME: &'static str = "GeoDistanceSort";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            points,
            order,
            mode,
            distance_type,
            nested_filter,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        for point in points {
            writer.put_str(2, point);
        }
        writer.put_opt_mapped(3, *order);
        writer.put_opt_mapped(4, *mode);
        writer.put_opt_mapped(5, *distance_type);
        writer.put_opt_message(6, "nestedFilter", nested_filter.as_ref())?;
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut sort = Self::default();
        let mut field_name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => sort.points.push(field.into_string()?),
                3 => sort.order = Some(field.into_mapped()?),
                4 => sort.mode = Some(field.into_mapped()?),
                5 => sort.distance_type = Some(field.into_mapped()?),
                6 => sort.nested_filter = Some(field.into_message("nestedFilter")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..sort
        })
    }
}

/// Score, primary key and doc sorts carry only an order.
macro_rules! order_only_sort {
    ($sort:ident, $name:literal) => {
        impl WireMessage for $sort {
            const NAME: &'static str = $name;

            fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
                let Self { order } = *self;
                writer.put_opt_mapped(1, order);
                Ok(())
            }

            fn decode(mut reader: WireReader) -> CodecResult<Self> {
                let mut order = None;
                while let Some(field) = reader.next_field()? {
                    match field.number() {
                        1 => order = Some(field.into_mapped()?),
                        _ => return Err(field.unexpected()),
                    }
                }
                Ok(Self { order })
            }
        }
    };
}

order_only_sort!(ScoreSort, "ScoreSort");
order_only_sort!(PrimaryKeySort, "PrimaryKeySort");
order_only_sort!(DocSort, "DocSort");

impl WireMessage for NestedFilter {
    const NAME: &'static str = "NestedFilter";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { path, filter } = self;
        writer.put_str(1, required(path.as_deref(), Self::NAME, "path")?);
        let filter = required(filter.as_deref(), Self::NAME, "filter")?;
        writer.put_node::<Query>(2, "filter", filter)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut path, mut filter) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => path = Some(field.into_string()?),
                2 => filter = Some(Box::new(field.into_node("filter")?)),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            path: Some(required(path, Self::NAME, "path")?),
            filter: Some(required(filter, Self::NAME, "filter")?),
        })
    }
}
