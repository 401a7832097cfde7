//! Every value of every field enum survives a round trip inside a real node.

#[cfg(test)]
mod tests {
    use tablestore_search_core::envelope::encode_envelope;
    use tablestore_search_core::wire::WireWriter;
    use tablestore_search_core::CodecError;
    use tablestore_search_model::group_by::{GroupByDateHistogram, GroupByGeoGrid};
    use tablestore_search_model::query::{MatchQuery, NestedQuery, Query, TermQuery};
    use tablestore_search_model::request::ColumnReturnType;
    use tablestore_search_model::score::{
        DecayFunction, FieldValueFactorFunction, FunctionsScoreQuery, NumericDecayParam,
        ScoreFunction,
    };
    use tablestore_search_model::sort::{FieldSort, GeoDistanceSort};
    use tablestore_search_model::types::{
        DateTimeUnit, DateTimeValue, DecayMathFunction, FieldValueFactorModifier,
        FunctionCombineMode, FunctionScoreMode, GeoDistanceType, GeoHashPrecision,
        MultiValueMode, QueryOperator, ScoreMode, SortMode, SortOrder,
    };
    use tablestore_search_model::{
        ColumnsToGet, GroupBy, QueryKind, SearchQuery, SearchRequest, Sorter, SorterKind,
    };

    use crate::codec;

    fn assert_query_round_trip(query: &Query) {
        let codec = codec();
        let bytes = codec.encode_query(query).expect("test encode");
        assert_eq!(&codec.decode_query(bytes).expect("test decode"), query);
    }

    fn assert_sorter_round_trip(sorter: &Sorter) {
        let codec = codec();
        let bytes = codec.encode_sorter(sorter).expect("test encode");
        assert_eq!(&codec.decode_sorter(bytes).expect("test decode"), sorter);
    }

    fn assert_group_by_round_trip(group_by: &GroupBy) {
        let codec = codec();
        let bytes = codec.encode_group_by(group_by).expect("test encode");
        assert_eq!(&codec.decode_group_by(bytes).expect("test decode"), group_by);
    }

    fn functions_score(function: ScoreFunction) -> FunctionsScoreQuery {
        FunctionsScoreQuery::builder()
            .query(Query::match_all())
            .functions(vec![function])
            .build()
    }

    #[test]
    fn test_should_round_trip_every_query_operator() {
        for &operator in QueryOperator::ALL {
            let query = MatchQuery::builder()
                .field_name("title")
                .text("quick fox")
                .operator(operator)
                .build();
            assert_query_round_trip(&query.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_score_mode() {
        for &score_mode in ScoreMode::ALL {
            let query = NestedQuery::new("user", TermQuery::new("user.name", "alice"), score_mode);
            assert_query_round_trip(&query.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_function_score_and_combine_mode() {
        for &score_mode in FunctionScoreMode::ALL {
            let mut query = functions_score(ScoreFunction::builder().weight(2.0).build());
            query.score_mode = Some(score_mode);
            assert_query_round_trip(&query.into());
        }
        for &combine_mode in FunctionCombineMode::ALL {
            let mut query = functions_score(ScoreFunction::builder().weight(2.0).build());
            query.combine_mode = Some(combine_mode);
            assert_query_round_trip(&query.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_field_value_factor_modifier() {
        for &modifier in FieldValueFactorModifier::ALL {
            let function = ScoreFunction::builder()
                .field_value_factor(
                    FieldValueFactorFunction::builder()
                        .field_name("sales")
                        .modifier(modifier)
                        .build(),
                )
                .build();
            assert_query_round_trip(&functions_score(function).into());
        }
    }

    #[test]
    fn test_should_round_trip_every_decay_math_function_and_multi_value_mode() {
        let decay = |math_function: DecayMathFunction, multi_value_mode: MultiValueMode| {
            ScoreFunction::builder()
                .decay(
                    DecayFunction::builder()
                        .field_name("price")
                        .math_function(math_function)
                        .multi_value_mode(multi_value_mode)
                        .param(NumericDecayParam::builder().origin(10.0).scale(2.0).build())
                        .build(),
                )
                .build()
        };
        for &math_function in DecayMathFunction::ALL {
            for &multi_value_mode in MultiValueMode::ALL {
                let query = functions_score(decay(math_function, multi_value_mode));
                assert_query_round_trip(&query.into());
            }
        }
    }

    #[test]
    fn test_should_round_trip_every_sort_order_and_mode() {
        for &order in SortOrder::ALL {
            for &mode in SortMode::ALL {
                let sorter = FieldSort::builder()
                    .field_name("price")
                    .order(order)
                    .mode(mode)
                    .build();
                assert_sorter_round_trip(&sorter.into());
            }
        }
    }

    #[test]
    fn test_should_round_trip_every_geo_distance_type() {
        for &distance_type in GeoDistanceType::ALL {
            let sorter = GeoDistanceSort::builder()
                .field_name("location")
                .points(vec!["30.1,120.2".to_owned()])
                .distance_type(distance_type)
                .build();
            assert_sorter_round_trip(&sorter.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_date_time_unit() {
        for &unit in DateTimeUnit::ALL {
            let group_by = GroupByDateHistogram::builder()
                .name("per_period")
                .field_name("created_at")
                .interval(DateTimeValue::new(3, unit))
                .build();
            assert_group_by_round_trip(&group_by.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_geo_hash_precision() {
        for &precision in GeoHashPrecision::ALL {
            let group_by = GroupByGeoGrid::builder()
                .name("cells")
                .field_name("location")
                .precision(precision)
                .build();
            assert_group_by_round_trip(&group_by.into());
        }
    }

    #[test]
    fn test_should_round_trip_every_column_return_type() {
        let codec = codec();
        for &return_type in ColumnReturnType::ALL {
            let columns_to_get = if return_type == ColumnReturnType::Specified {
                ColumnsToGet::specified(["a", "b"])
            } else {
                ColumnsToGet {
                    return_type,
                    column_names: Vec::new(),
                }
            };
            let request = SearchRequest::builder()
                .table_name("orders")
                .index_name("orders_index")
                .columns_to_get(columns_to_get)
                .search_query(SearchQuery::builder().query(Query::match_all()).build())
                .build();
            let bytes = codec.encode_search_request(&request).expect("test encode");
            assert_eq!(codec.decode_search_request(bytes).expect("test decode"), request);
        }
    }

    #[test]
    fn test_should_reject_unknown_score_mode_code() {
        let mut payload = WireWriter::new();
        payload.put_str(1, "user");
        payload
            .put_node(2, "query", &Query::from(TermQuery::new("user.name", "alice")))
            .expect("test encode child");
        payload.put_i32(3, 99);
        let bytes = encode_envelope(QueryKind::Nested, &payload.finish());

        assert_eq!(
            codec().decode_query(bytes),
            Err(CodecError::UnknownEnumValue {
                enum_name: "ScoreMode",
                raw: 99,
            })
        );
    }

    #[test]
    fn test_should_reject_unknown_sort_order_code() {
        let mut payload = WireWriter::new();
        payload.put_str(1, "price");
        payload.put_i32(2, 7);
        let bytes = encode_envelope(SorterKind::Field, &payload.finish());

        let err = codec().decode_sorter(bytes).expect_err("unknown order");
        assert_eq!(
            err,
            CodecError::UnknownEnumValue {
                enum_name: "SortOrder",
                raw: 7,
            }
        );
    }
}
