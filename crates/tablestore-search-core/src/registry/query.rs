//! Query encoders and decoders.

use tablestore_search_model::query::{
    BoolQuery, ConstScoreQuery, ExistsQuery, FunctionScoreQuery, FunctionsScoreQuery,
    GeoBoundingBoxQuery, GeoDistanceQuery, GeoPolygonQuery, InnerHits, KnnVectorQuery,
    MatchAllQuery, MatchPhraseQuery, MatchQuery, NestedQuery, PrefixQuery, Query, RangeQuery,
    SuffixQuery, TermQuery, TermsQuery, WildcardQuery,
};
use tablestore_search_model::types::{Highlight, Weight};
use tablestore_search_model::QueryKind;

use super::{family_codec, WireMessage};
use crate::error::{required, CodecResult};
use crate::wire::{WireReader, WireWriter};

family_codec! {
    Query: QueryKind as "Query" {
        Match => MatchQuery,
        MatchPhrase => MatchPhraseQuery,
        Term => TermQuery,
        Range => RangeQuery,
        Prefix => PrefixQuery,
        Bool => BoolQuery,
        ConstScore => ConstScoreQuery,
        FunctionScore => FunctionScoreQuery,
        FunctionsScore => FunctionsScoreQuery,
        Nested => NestedQuery,
        Wildcard => WildcardQuery,
        MatchAll => MatchAllQuery,
        GeoBoundingBox => GeoBoundingBoxQuery,
        GeoDistance => GeoDistanceQuery,
        GeoPolygon => GeoPolygonQuery,
        Terms => TermsQuery,
        Exists => ExistsQuery,
        KnnVector => KnnVectorQuery,
        Suffix => SuffixQuery,
    }
}

// ---------------------------------------------------------------------------
// Full text
// ---------------------------------------------------------------------------

impl WireMessage for MatchAllQuery {
    const NAME: &'static str = "MatchAllQuery";

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

impl WireMessage for MatchQuery {
    const NAME: &'static str = "MatchQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            text,
            weight,
            operator,
            minimum_should_match,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_str(2, required(text.as_deref(), Self::NAME, "text")?);
        writer.put_opt_i32(3, *minimum_should_match);
        writer.put_opt_mapped(4, *operator);
        writer.put_f32(5, weight.value());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        let (mut field_name, mut text) = (None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => text = Some(field.into_string()?),
                3 => query.minimum_should_match = Some(field.into_i32()?),
                4 => query.operator = Some(field.into_mapped()?),
                5 => query.weight = Weight::new(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            text: Some(required(text, Self::NAME, "text")?),
            ..query
        })
    }
}

impl WireMessage for MatchPhraseQuery {
    const NAME: &'static str = "MatchPhraseQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            text,
            weight,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_str(2, required(text.as_deref(), Self::NAME, "text")?);
        writer.put_f32(3, weight.value());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut text, mut weight) = (None, None, Weight::unset());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => text = Some(field.into_string()?),
                3 => weight = Weight::new(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            text: Some(required(text, Self::NAME, "text")?),
            weight,
        })
    }
}

// ---------------------------------------------------------------------------
// Term level
// ---------------------------------------------------------------------------

impl WireMessage for TermQuery {
    const NAME: &'static str = "TermQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            term,
            weight,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_column_value(2, required(term.as_ref(), Self::NAME, "term")?)?;
        writer.put_f32(3, weight.value());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut term, mut weight) = (None, None, Weight::unset());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => term = Some(field.into_column_value()?),
                3 => weight = Weight::new(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            term: Some(required(term, Self::NAME, "term")?),
            weight,
        })
    }
}

impl WireMessage for TermsQuery {
    const NAME: &'static str = "TermsQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            terms,
            weight,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        for term in required(terms.as_ref(), Self::NAME, "terms")? {
            writer.put_column_value(2, term)?;
        }
        writer.put_f32(3, weight.value());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut terms, mut weight) = (None, Vec::new(), Weight::unset());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => terms.push(field.into_column_value()?),
                3 => weight = Weight::new(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            terms: Some(terms),
            weight,
        })
    }
}

impl WireMessage for RangeQuery {
    const NAME: &'static str = "RangeQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            from,
            to,
            include_lower,
            include_upper,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_opt_column_value(2, from.as_ref())?;
        writer.put_opt_column_value(3, to.as_ref())?;
        writer.put_bool(4, *include_lower);
        writer.put_bool(5, *include_upper);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        let mut field_name = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => query.from = Some(field.into_column_value()?),
                3 => query.to = Some(field.into_column_value()?),
                4 => query.include_lower = field.into_bool()?,
                5 => query.include_upper = field.into_bool()?,
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            ..query
        })
    }
}

/// Prefix, suffix and wildcard queries share one layout: a field, a
/// pattern and a weight.
macro_rules! pattern_query {
    ($query:ident, $name:literal, $pattern:ident, $label:literal) => {
        impl WireMessage for $query {
            const NAME: &'static str = $name;

            fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
                let Self {
                    field_name,
                    $pattern,
                    weight,
                } = self;
                writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
                writer.put_str(2, required($pattern.as_deref(), Self::NAME, $label)?);
                writer.put_f32(3, weight.value());
                Ok(())
            }

            fn decode(mut reader: WireReader) -> CodecResult<Self> {
                let (mut field_name, mut $pattern, mut weight) = (None, None, Weight::unset());
                while let Some(field) = reader.next_field()? {
                    match field.number() {
                        1 => field_name = Some(field.into_string()?),
                        2 => $pattern = Some(field.into_string()?),
                        3 => weight = Weight::new(field.into_f32()?),
                        _ => return Err(field.unexpected()),
                    }
                }
                Ok(Self {
                    field_name: Some(required(field_name, Self::NAME, "fieldName")?),
                    $pattern: Some(required($pattern, Self::NAME, $label)?),
                    weight,
                })
            }
        }
    };
}

pattern_query!(PrefixQuery, "PrefixQuery", prefix, "prefix");
pattern_query!(SuffixQuery, "SuffixQuery", suffix, "suffix");
pattern_query!(WildcardQuery, "WildcardQuery", value, "value");

impl WireMessage for ExistsQuery {
    const NAME: &'static str = "ExistsQuery";

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

// ---------------------------------------------------------------------------
// Compound
// ---------------------------------------------------------------------------

impl WireMessage for BoolQuery {
    const NAME: &'static str = "BoolQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            must,
            must_not,
            filter,
            should,
            minimum_should_match,
        } = self;
        writer.put_nodes(1, "must", must)?;
        writer.put_nodes(2, "mustNot", must_not)?;
        writer.put_nodes(3, "filter", filter)?;
        writer.put_nodes(4, "should", should)?;
        writer.put_opt_i32(5, *minimum_should_match);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut query = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => query.must.push(field.into_node_item("must")?),
                2 => query.must_not.push(field.into_node_item("mustNot")?),
                3 => query.filter.push(field.into_node_item("filter")?),
                4 => query.should.push(field.into_node_item("should")?),
                5 => query.minimum_should_match = Some(field.into_i32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(query)
    }
}

impl WireMessage for ConstScoreQuery {
    const NAME: &'static str = "ConstScoreQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { filter } = self;
        let filter = required(filter.as_deref(), Self::NAME, "filter")?;
        writer.put_node::<Query>(1, "filter", filter)
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut filter = None;
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => filter = Some(Box::new(field.into_node("filter")?)),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            filter: Some(required(filter, Self::NAME, "filter")?),
        })
    }
}

impl WireMessage for NestedQuery {
    const NAME: &'static str = "NestedQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            path,
            query,
            score_mode,
            inner_hits,
            weight,
        } = self;
        writer.put_str(1, required(path.as_deref(), Self::NAME, "path")?);
        let query = required(query.as_deref(), Self::NAME, "query")?;
        writer.put_node::<Query>(2, "query", query)?;
        writer.put_mapped(3, required(*score_mode, Self::NAME, "scoreMode")?);
        writer.put_f32(4, weight.value());
        writer.put_opt_message(5, "innerHits", inner_hits.as_ref())?;
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut path, mut query, mut score_mode) = (None, None, None);
        let (mut inner_hits, mut weight) = (None, Weight::unset());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => path = Some(field.into_string()?),
                2 => query = Some(Box::new(field.into_node("query")?)),
                3 => score_mode = Some(field.into_mapped()?),
                4 => weight = Weight::new(field.into_f32()?),
                5 => inner_hits = Some(field.into_message("innerHits")?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            path: Some(required(path, Self::NAME, "path")?),
            query: Some(required(query, Self::NAME, "query")?),
            score_mode: Some(required(score_mode, Self::NAME, "scoreMode")?),
            inner_hits,
            weight,
        })
    }
}

impl WireMessage for InnerHits {
    const NAME: &'static str = "InnerHits";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            sort,
            offset,
            limit,
            highlight,
        } = self;
        writer.put_opt_message(1, "sort", sort.as_ref())?;
        writer.put_opt_i32(2, *offset);
        writer.put_opt_i32(3, *limit);
        writer.put_opt_bytes(4, highlight.as_ref().map(|h| &h.as_bytes()[..]));
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let mut hits = Self::default();
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => hits.sort = Some(field.into_message("sort")?),
                2 => hits.offset = Some(field.into_i32()?),
                3 => hits.limit = Some(field.into_i32()?),
                4 => hits.highlight = Some(Highlight::from_encoded(field.into_bytes()?)),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(hits)
    }
}

// ---------------------------------------------------------------------------
// Geo
// ---------------------------------------------------------------------------

impl WireMessage for GeoBoundingBoxQuery {
    const NAME: &'static str = "GeoBoundingBoxQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            top_left,
            bottom_right,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_str(2, required(top_left.as_deref(), Self::NAME, "topLeft")?);
        writer.put_str(3, required(bottom_right.as_deref(), Self::NAME, "bottomRight")?);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut top_left, mut bottom_right) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => top_left = Some(field.into_string()?),
                3 => bottom_right = Some(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            top_left: Some(required(top_left, Self::NAME, "topLeft")?),
            bottom_right: Some(required(bottom_right, Self::NAME, "bottomRight")?),
        })
    }
}

impl WireMessage for GeoDistanceQuery {
    const NAME: &'static str = "GeoDistanceQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            center_point,
            distance_in_meter,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_str(2, required(center_point.as_deref(), Self::NAME, "centerPoint")?);
        writer.put_f64(3, required(*distance_in_meter, Self::NAME, "distance")?);
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut center_point, mut distance) = (None, None, None);
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => center_point = Some(field.into_string()?),
                3 => distance = Some(field.into_f64()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            center_point: Some(required(center_point, Self::NAME, "centerPoint")?),
            distance_in_meter: Some(required(distance, Self::NAME, "distance")?),
        })
    }
}

impl WireMessage for GeoPolygonQuery {
    const NAME: &'static str = "GeoPolygonQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self { field_name, points } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        for point in required(points.as_ref(), Self::NAME, "points")? {
            writer.put_str(2, point);
        }
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut points) = (None, Vec::new());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => points.push(field.into_string()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            points: Some(points),
        })
    }
}

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

impl WireMessage for KnnVectorQuery {
    const NAME: &'static str = "KnnVectorQuery";

    fn encode(&self, writer: &mut WireWriter) -> CodecResult<()> {
        let Self {
            field_name,
            top_k,
            query_vector,
            filter,
            weight,
        } = self;
        writer.put_str(1, required(field_name.as_deref(), Self::NAME, "fieldName")?);
        writer.put_i32(2, required(*top_k, Self::NAME, "topK")?);
        writer.put_packed_f32(3, required(query_vector.as_deref(), Self::NAME, "queryVector")?);
        writer.put_opt_node::<Query>(4, "filter", filter.as_deref())?;
        writer.put_opt_f32(5, weight.explicit());
        Ok(())
    }

    fn decode(mut reader: WireReader) -> CodecResult<Self> {
        let (mut field_name, mut top_k, mut query_vector) = (None, None, None::<Vec<f32>>);
        let (mut filter, mut weight) = (None, Weight::unset());
        while let Some(field) = reader.next_field()? {
            match field.number() {
                1 => field_name = Some(field.into_string()?),
                2 => top_k = Some(field.into_i32()?),
                3 => query_vector
                    .get_or_insert_with(Vec::new)
                    .extend(field.into_packed_f32()?),
                4 => filter = Some(Box::new(field.into_node("filter")?)),
                5 => weight = Weight::new(field.into_f32()?),
                _ => return Err(field.unexpected()),
            }
        }
        Ok(Self {
            field_name: Some(required(field_name, Self::NAME, "fieldName")?),
            top_k: Some(required(top_k, Self::NAME, "topK")?),
            query_vector: Some(required(query_vector, Self::NAME, "queryVector")?),
            filter,
            weight,
        })
    }
}
