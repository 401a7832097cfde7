//! Search and parallel-scan request encoders and decoders.

use tablestore_search_model::request::{
    Collapse, ColumnReturnType, ColumnsToGet, ParallelScanRequest, ScanQuery, SearchQuery,
    SearchRequest,
};
use tablestore_search_model::types::Highlight;

use super::WireMessage;
use crate::error::{required, CodecResult};
use crate::wire::{WireReader, WireWriter};

impl WireMessage for SearchQuery {
    const NAME: &'static str = "SearchQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
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
        } = self;
        writer.put_opt_i32(1, *offset);
        writer.put_opt_i32(2, *limit);
        writer.put_opt_node(3, "query", query.as_ref())?;
        writer.put_opt_message(4, "collapse", collapse.as_ref())?;
        writer.put_opt_message(5, "sort", sort.as_ref())?;
        writer.put_bool(6, *get_total_count);
        writer.put_opt_bytes(7, token.as_deref());
        writer.put_nodes(8, "aggregations", aggregations)?;
        writer.put_nodes(9, "groupBys", group_bys)?;
        writer.put_opt_bytes(10, highlight.as_ref().map(|h| &h.as_bytes()[..]));
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => query.offset = Some(field.into_i32()?),
                2 => query.limit = Some(field.into_i32()?),
                3 => query.query = Some(field.into_node("query")?),
                4 => query.collapse = Some(field.into_message("collapse")?),
                5 => query.sort = Some(field.into_message("sort")?),
                6 => query.get_total_count = field.into_bool()?,
                7 => query.token = Some(field.into_bytes()?),
                8 => query.aggregations.push(field.into_node_item("aggregations")?),
                9 => query.group_bys.push(field.into_node_item("groupBys")?),
                10 => query.highlight = Some(Highlight::from_encoded(field.into_bytes()?)),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(query)
    }
}

impl WireMessage for Collapse {
    const NAME: &'static str = "Collapse";

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

impl WireMessage for ScanQuery {
    const NAME: &'static str = "ScanQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            query,
            limit,
            alive_time,
            token,
            current_parallel_id,
            max_parallel,
        } = self;
        writer.put_opt_node(1, "query", query.as_ref())?;
        writer.put_opt_i32(2, *limit);
        writer.put_opt_i32(3, *alive_time);
        writer.put_opt_bytes(4, token.as_deref());
        writer.put_opt_i32(5, *current_parallel_id);
        writer.put_opt_i32(6, *max_parallel);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => query.query = Some(field.into_node("query")?),
                2 => query.limit = Some(field.into_i32()?),
                3 => query.alive_time = Some(field.into_i32()?),
                4 => query.token = Some(field.into_bytes()?),
                5 => query.current_parallel_id = Some(field.into_i32()?),
                6 => query.max_parallel = Some(field.into_i32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(query)
    }
}

impl WireMessage for ColumnsToGet {
    const NAME: &'static str = "ColumnsToGet";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            return_type,
            column_names,
        } = self;
        writer.put_mapped(1, *return_type);
        for name in column_names {
            writer.put_str(2, name);
        }
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut return_type, mut column_names) = (None::<ColumnReturnType>, Vec::new());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => return_type = Some(field.into_mapped()?),
                2 => column_names.push(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            return_type: required(return_type, Self::NAME, "returnType")?,
            column_names,
        })
    }
}

impl WireMessage for SearchRequest {
    const NAME: &'static str = "SearchRequest";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            table_name,
            index_name,
            columns_to_get,
            search_query,
            timeout_ms,
        } = self;
        writer.put_str(1, required(table_name.as_deref(), Self::NAME, "tableName")?);
        writer.put_str(2, required(index_name.as_deref(), Self::NAME, "indexName")?);
        writer.put_opt_message(3, "columnsToGet", columns_to_get.as_ref())?;
        let search_query = required(search_query.as_ref(), Self::NAME, "searchQuery")?;
        writer.put_message(4, "searchQuery", search_query)?;
        writer.put_opt_i32(5, *timeout_ms);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut request = Self::default();
        let (mut table_name, mut index_name, mut search_query) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => table_name = Some(field.into_string()?),
                2 => index_name = Some(field.into_string()?),
                3 => request.columns_to_get = Some(field.into_message("columnsToGet")?),
                4 => search_query = Some(field.into_message("searchQuery")?),
                5 => request.timeout_ms = Some(field.into_i32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            table_name: Some(required(table_name, Self::NAME, "tableName")?),
            index_name: Some(required(index_name, Self::NAME, "indexName")?),
            search_query: Some(required(search_query, Self::NAME, "searchQuery")?),
            ..request
        })
    }
}

impl WireMessage for ParallelScanRequest {
    const NAME: &'static str = "ParallelScanRequest";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            table_name,
            index_name,
            columns_to_get,
            session_id,
            scan_query,
            timeout_ms,
        } = self;
        writer.put_str(1, required(table_name.as_deref(), Self::NAME, "tableName")?);
        writer.put_str(2, required(index_name.as_deref(), Self::NAME, "indexName")?);
        writer.put_opt_message(3, "columnsToGet", columns_to_get.as_ref())?;
        writer.put_opt_bytes(4, session_id.as_deref());
        let scan_query = required(scan_query.as_ref(), Self::NAME, "scanQuery")?;
        writer.put_message(5, "scanQuery", scan_query)?;
        writer.put_opt_i32(6, *timeout_ms);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut request = Self::default();
        let (mut table_name, mut index_name, mut scan_query) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => table_name = Some(field.into_string()?),
                2 => index_name = Some(field.into_string()?),
                3 => request.columns_to_get = Some(field.into_message("columnsToGet")?),
                4 => request.session_id = Some(field.into_bytes()?),
                5 => scan_query = Some(field.into_message("scanQuery")?),
                6 => request.timeout_ms = Some(field.into_i32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            table_name: Some(required(table_name, Self::NAME, "tableName")?),
            index_name: Some(required(index_name, Self::NAME, "indexName")?),
            scan_query: Some(required(scan_query, Self::NAME, "scanQuery")?),
            ..request
        })
    }
}
