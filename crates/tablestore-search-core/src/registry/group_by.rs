//! Group-by encoders and decoders.
//!
//! Every variant starts with the same three fields: 1 `name`,
//! 2 `sub_aggregations` and 3 `sub_group_bys`. Variant fields follow from 4.

use tablestore_search_model::group_by::{
    GroupBy, GroupByComposite, GroupByDateHistogram, GroupByField, GroupByFilter,
    GroupByGeoDistance, GroupByGeoGrid, GroupByHistogram, GroupByRange, GroupBySort,
    GroupBySorter, GroupKeySort, RowCountSort, SubAggregationSort,
};
use tablestore_search_model::GroupByKind;

use super::{family_codec, WireMessage};
use crate::error::{required, CodecError, CodecResult};
use crate::wire::{WireReader, WireWriter};

family_codec! {
    GroupBy: GroupByKind as "GroupBy" {
        Field => GroupByField,
        Filter => GroupByFilter,
        Range => GroupByRange,
        Histogram => GroupByHistogram,
        DateHistogram => GroupByDateHistogram,
        Composite => GroupByComposite,
        GeoDistance => GroupByGeoDistance,
        GeoGrid => GroupByGeoGrid,
    }
}

impl WireMessage for GroupByField {
    const NAME: &'static str = "GroupByField";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            size,
            sort,
            min_doc_count,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_opt_i32(5, *size);
        writer.put_opt_message(6, "sort", sort.as_ref())?;
        writer.put_opt_i64(7, *min_doc_count);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => group_by.size = Some(field.into_i32()?),
                6 => group_by.sort = Some(field.into_message("sort")?),
                7 => group_by.min_doc_count = Some(field.into_i64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByFilter {
    const NAME: &'static str = "GroupByFilter";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            filters,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_nodes(4, "filters", filters)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let mut name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => group_by.filters.push(field.into_node_item("filters")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByRange {
    const NAME: &'static str = "GroupByRange";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            ranges,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_messages(5, "ranges", ranges)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => group_by.ranges.push(field.into_message_item("ranges")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByHistogram {
    const NAME: &'static str = "GroupByHistogram";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            interval,
            missing,
            min_doc_count,
            sort,
            field_range,
            offset,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_column_value(5, required(interval.as_ref(), Self::NAME, "interval")?)?;
        writer.put_opt_column_value(6, missing.as_ref())?;
        writer.put_opt_i64(7, *min_doc_count);
        writer.put_opt_message(8, "sort", sort.as_ref())?;
        writer.put_opt_message(9, "fieldRange", field_range.as_ref())?;
        writer.put_opt_column_value(10, offset.as_ref())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name, mut interval) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => interval = Some(field.into_column_value()?),
                6 => group_by.missing = Some(field.into_column_value()?),
                7 => group_by.min_doc_count = Some(field.into_i64()?),
                8 => group_by.sort = Some(field.into_message("sort")?),
                9 => group_by.field_range = Some(field.into_message("fieldRange")?),
                10 => group_by.offset = Some(field.into_column_value()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            interval: Some(required(interval, Self::NAME, "interval")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByDateHistogram {
    const NAME: &'static str = "GroupByDateHistogram";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            interval,
            field_range,
            missing,
            min_doc_count,
            offset,
            time_zone,
            sort,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        let interval = required(interval.as_ref(), Self::NAME, "interval")?;
        writer.put_message(5, "interval", interval)?;
        writer.put_opt_message(6, "fieldRange", field_range.as_ref())?;
        writer.put_opt_column_value(7, missing.as_ref())?;
        writer.put_opt_i64(8, *min_doc_count);
        writer.put_opt_message(9, "offset", offset.as_ref())?;
        writer.put_opt_str(10, time_zone.as_deref());
        writer.put_opt_message(11, "sort", sort.as_ref())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name, mut interval) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => interval = Some(field.into_message("interval")?),
                6 => group_by.field_range = Some(field.into_message("fieldRange")?),
                7 => group_by.missing = Some(field.into_column_value()?),
                8 => group_by.min_doc_count = Some(field.into_i64()?),
                9 => group_by.offset = Some(field.into_message("offset")?),
                10 => group_by.time_zone = Some(field.into_string()?),
                11 => group_by.sort = Some(field.into_message("sort")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            interval: Some(required(interval, Self::NAME, "interval")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByComposite {
    const NAME: &'static str = "GroupByComposite";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            sources,
            size,
            suggested_size,
            next_token,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_nodes(4, "sources", sources)?;
        writer.put_opt_i32(5, *size);
        writer.put_opt_i32(6, *suggested_size);
        writer.put_opt_str(7, next_token.as_deref());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let mut name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => group_by.sources.push(field.into_node_item("sources")?),
                5 => group_by.size = Some(field.into_i32()?),
                6 => group_by.suggested_size = Some(field.into_i32()?),
                7 => group_by.next_token = Some(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByGeoDistance {
    const NAME: &'static str = "GroupByGeoDistance";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            origin,
            ranges,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        let origin = required(origin.as_ref(), Self::NAME, "origin")?;
        writer.put_message(5, "origin", origin)?;
        writer.put_messages(6, "ranges", ranges)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name, mut origin) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => origin = Some(field.into_message("origin")?),
                6 => group_by.ranges.push(field.into_message_item("ranges")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            origin: Some(required(origin, Self::NAME, "origin")?),
            ..group_by
        })
    }
}

impl WireMessage for GroupByGeoGrid {
    const NAME: &'static str = "GroupByGeoGrid";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            name,
            field_name,
            precision,
            size,
            sub_aggregations,
            sub_group_bys,
        } = self;
        writer.put_str(1, required(name.as_deref(), Self::NAME, "name")?);
        writer.put_nodes(2, "subAggregations", sub_aggregations)?;
        writer.put_nodes(3, "subGroupBys", sub_group_bys)?;
        writer.put_str(4, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_mapped(5, required(*precision, Self::NAME, "precision")?);
        writer.put_opt_i32(6, *size);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut group_by = Self::default();
        let (mut name, mut field_name, mut precision) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => name = Some(field.into_string()?),
                2 => group_by.sub_aggregations.push(field.into_node_item("subAggregations")?),
                3 => group_by.sub_group_bys.push(field.into_node_item("subGroupBys")?),
                4 => field_name = Some(field.into_string()?),
                5 => precision = Some(field.into_mapped()?),
                6 => group_by.size = Some(field.into_i32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            name: Some(required(name, Self::NAME, "name")?),
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            precision: Some(required(precision, Self::NAME, "precision")?),
            ..group_by
        })
    }
}

// ---------------------------------------------------------------------------
// Bucket sorts
// ---------------------------------------------------------------------------

impl WireMessage for GroupBySort {
    const NAME: &'static str = "GroupBySort";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { sorters } = self;
        writer.put_messages(1, "sorters", sorters)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut sorters = Vec::new();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => sorters.push(field.into_message_item("sorters")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self { sorters })
    }
}

/// Written as a message with one field set per sorter kind; exactly one
/// must be present.
impl WireMessage for GroupBySorter {
    const NAME: &'static str = "GroupBySorter";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        match self {
            Self::GroupKey(sort) => writer.put_message(1, "groupKeySort", sort),
            Self::RowCount(sort) => writer.put_message(2, "rowCountSort", sort),
            Self::SubAggregation(sort) => writer.put_message(3, "subAggSort", sort),
        }
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut found = Vec::with_capacity(1);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => found.push(Self::GroupKey(field.into_message("groupKeySort")?)),
                2 => found.push(Self::RowCount(field.into_message("rowCountSort")?)),
                3 => found.push(Self::SubAggregation(field.into_message("subAggSort")?)),
                _ => return Err(field.unexpected()),
            }
        }
        if found.len() > 1 {
            return Err(CodecError::invalid(
                Self::NAME,
                format!("exactly one sorter kind may be set, found {}", found.len()),
            ));
        }
        found.pop().ok_or(CodecError::required(Self::NAME, "sorter"))
    }
}

impl WireMessage for GroupKeySort {
    const NAME: &'static str = "GroupKeySort";

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

impl WireMessage for RowCountSort {
    const NAME: &'static str = "RowCountSort";

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

impl WireMessage for SubAggregationSort {
    const NAME: &'static str = "SubAggSort";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            sub_aggregation_name,
            order,
        } = self;
        writer.put_str(
            1,
            required(sub_aggregation_name.as_deref(), Self::NAME, "subAggName")?,
        );
        writer.put_opt_mapped(2, *order);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut sub_aggregation_name, mut order) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => sub_aggregation_name = Some(field.into_string()?),
                2 => order = Some(field.into_mapped()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            sub_aggregation_name: Some(required(
                sub_aggregation_name,
                Self::NAME,
                "subAggName",
            )?),
            order,
        })
    }
}
