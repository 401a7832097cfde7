//! Documented encode/decode scenarios and required-field rejection.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use tablestore_search_core::envelope::{decode_envelope, encode_envelope};
    use tablestore_search_core::wire::WireWriter;
    use tablestore_search_core::{CodecError, Family, FieldPath, PathSegment};
    use tablestore_search_model::query::{
        BoolQuery, DecayFunction, ExistsQuery, FunctionsScoreQuery, NestedQuery, NumericDecayParam,
        PrefixQuery, Query, RandomScoreFunction, ScoreFunction, SuffixQuery, TermQuery,
        WildcardQuery,
    };
    use tablestore_search_model::types::{ScoreMode, Weight};
    use tablestore_search_model::{ColumnValue, QueryKind};

    use crate::codec;

    #[test]
    fn test_should_frame_exists_query_behind_its_kind() {
        let codec = codec();
        let query = Query::from(ExistsQuery::new("FieldName"));

        let bytes = codec.encode_query(&query).expect("test encode");
        let (kind, payload) =
            decode_envelope::<QueryKind>("Query", bytes.clone()).expect("test envelope");
        assert_eq!(kind, QueryKind::Exists);

        let Query::Exists(decoded) =
            Query::decode_payload(kind, payload).expect("test payload")
        else {
            panic!("payload decoded to another variant");
        };
        assert_eq!(decoded.field_name.as_deref(), Some("FieldName"));
        assert_eq!(codec.decode_query(bytes).expect("test decode"), query);
    }

    #[test]
    fn test_should_decode_unset_term_weight_as_default() {
        let codec = codec();
        let query = Query::from(TermQuery::new("FieldName", "FieldValue"));

        let bytes = codec.encode_query(&query).expect("test encode");
        let Query::Term(term) = codec.decode_query(bytes).expect("test decode") else {
            panic!("expected a term query");
        };
        assert_eq!(term.field_name.as_deref(), Some("FieldName"));
        assert_eq!(term.term, Some(ColumnValue::from("FieldValue")));
        assert_eq!(term.weight.value().to_bits(), 1.0_f32.to_bits());
    }

    #[test]
    fn test_should_reject_nested_query_without_score_mode() {
        let query = Query::from(
            NestedQuery::builder()
                .path("user")
                .query(TermQuery::new("user.name", "alice").into())
                .build(),
        );
        assert_eq!(
            codec().encode_query(&query),
            Err(CodecError::required("NestedQuery", "scoreMode"))
        );
    }

    #[test]
    fn test_should_reject_function_with_decay_and_random() {
        let function = ScoreFunction::builder()
            .decay(
                DecayFunction::builder()
                    .field_name("price")
                    .param(
                        NumericDecayParam::builder()
                            .origin(100.0)
                            .scale(10.0)
                            .build(),
                    )
                    .build(),
            )
            .random(RandomScoreFunction)
            .build();
        let query = Query::from(
            FunctionsScoreQuery::builder()
                .query(Query::match_all())
                .functions(vec![function])
                .build(),
        );

        let err = codec().encode_query(&query).expect_err("two function kinds");
        let CodecError::InvalidFieldCombination { message, reason } = err else {
            panic!("expected invalid field combination, got {err}");
        };
        assert_eq!(message, "Function");
        assert!(reason.contains("decay"), "reason was {reason}");
        assert!(reason.contains("random"), "reason was {reason}");
    }

    #[test]
    fn test_should_encode_unset_weight_like_explicit_default() {
        let codec = codec();
        let pairs = [
            (
                Query::from(TermQuery::new("f", 7_i64)),
                Query::from(
                    TermQuery::builder()
                        .field_name("f")
                        .term(7_i64)
                        .weight(1.0)
                        .build(),
                ),
            ),
            (
                Query::from(PrefixQuery::new("f", "ab")),
                Query::from(
                    PrefixQuery::builder()
                        .field_name("f")
                        .prefix("ab")
                        .weight(1.0)
                        .build(),
                ),
            ),
            (
                Query::from(SuffixQuery::new("f", "yz")),
                Query::from(
                    SuffixQuery::builder()
                        .field_name("f")
                        .suffix("yz")
                        .weight(1.0)
                        .build(),
                ),
            ),
            (
                Query::from(WildcardQuery::new("f", "a*z")),
                Query::from(
                    WildcardQuery::builder()
                        .field_name("f")
                        .value("a*z")
                        .weight(1.0)
                        .build(),
                ),
            ),
            (
                Query::from(NestedQuery::new("p", Query::match_all(), ScoreMode::Avg)),
                Query::from(
                    NestedQuery::builder()
                        .path("p")
                        .query(Query::match_all())
                        .score_mode(ScoreMode::Avg)
                        .weight(1.0)
                        .build(),
                ),
            ),
        ];

        for (unset, explicit) in pairs {
            let unset_bytes = codec.encode_query(&unset).expect("test encode unset");
            let explicit_bytes = codec.encode_query(&explicit).expect("test encode explicit");
            assert_eq!(unset_bytes, explicit_bytes, "kind {}", unset.kind());
            assert_eq!(unset, explicit);
        }
    }

    #[test]
    fn test_should_keep_explicit_weight() {
        let codec = codec();
        let query = Query::from(
            TermQuery::builder()
                .field_name("f")
                .term(true)
                .weight(2.5)
                .build(),
        );
        let Query::Term(term) = codec
            .decode_query(codec.encode_query(&query).expect("test encode"))
            .expect("test decode")
        else {
            panic!("expected a term query");
        };
        assert_eq!(term.weight, Weight::new(2.5));
        assert!(term.weight.is_explicit());
    }

    #[test]
    fn test_should_reject_missing_required_fields() {
        let codec = codec();
        let cases = [
            (
                Query::from(ExistsQuery::default()),
                CodecError::required("ExistsQuery", "fieldName"),
            ),
            (
                Query::from(TermQuery::builder().field_name("f").build()),
                CodecError::required("TermQuery", "term"),
            ),
            (
                Query::from(
                    NestedQuery::builder()
                        .path("p")
                        .query(Query::match_all())
                        .build(),
                ),
                CodecError::required("NestedQuery", "scoreMode"),
            ),
        ];

        for (query, expected) in cases {
            assert_eq!(codec.encode_query(&query), Err(expected));
        }
    }

    #[test]
    fn test_should_reject_payload_missing_required_field_on_decode() {
        // Exists envelope with an empty payload.
        let bytes = Bytes::from_static(&[0x08, 16, 0x12, 0x00]);
        assert_eq!(
            codec().decode_query(bytes),
            Err(CodecError::required("ExistsQuery", "fieldName"))
        );
    }

    #[test]
    fn test_should_report_missing_field_deep_in_tree() {
        let inner = Query::from(
            NestedQuery::builder()
                .path("p")
                .query(ExistsQuery::default().into())
                .score_mode(ScoreMode::Max)
                .build(),
        );
        let query = Query::from(
            BoolQuery::builder()
                .must(vec![Query::match_all(), inner])
                .build(),
        );
        let err = codec().encode_query(&query).expect_err("exists without field");
        assert_eq!(
            err.to_string(),
            "BoolQuery.must[1] > NestedQuery.query > ExistsQuery.fieldName is required"
        );
        assert_eq!(
            err,
            CodecError::RequiredFieldMissing {
                path: FieldPath::from(vec![
                    PathSegment::item("BoolQuery", "must", 1),
                    PathSegment::new("NestedQuery", "query"),
                ]),
                message: "ExistsQuery",
                field: "fieldName",
            }
        );
    }

    #[test]
    fn test_should_report_missing_field_path_on_decode() {
        let mut bool_query = WireWriter::new();
        bool_query
            .put_node(4, "should", &Query::match_all())
            .expect("test encode");
        bool_query.put_bytes(4, &encode_envelope(QueryKind::Exists, &[]));
        let bytes = encode_envelope(QueryKind::Bool, &bool_query.finish());

        let err = codec().decode_query(bytes).expect_err("exists without field");
        assert_eq!(
            err.to_string(),
            "BoolQuery.should[1] > ExistsQuery.fieldName is required"
        );
    }
}
