//! The [`SearchCodec`] facade.
//!
//! Wraps the registry with the configured size limit and logging. Every
//! top-level encode or decode goes through [`SearchCodec::encode_node`],
//! [`SearchCodec::decode_node`], [`SearchCodec::encode_message`] or
//! [`SearchCodec::decode_message`]; the named methods are shorthands.

use bytes::Bytes;
use tablestore_search_model::{
    Aggregation, GroupBy, ParallelScanRequest, Query, ScanQuery, SearchQuery, SearchRequest, Sort,
    Sorter,
};
use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::registry::{self, Family, WireMessage};

/// Encodes and decodes search expressions and requests.
///
/// # Examples
///
/// ```
/// use tablestore_search_core::SearchCodec;
/// use tablestore_search_model::query::{Query, TermQuery};
///
/// let codec = SearchCodec::default();
/// let query = Query::from(TermQuery::new("status", "open"));
/// let bytes = codec.encode_query(&query).unwrap();
/// assert_eq!(codec.decode_query(bytes).unwrap(), query);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchCodec {
    config: CodecConfig,
}

impl SearchCodec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        debug!(
            max_message_size = config.max_message_size,
            log_payloads = config.log_payloads,
            "creating SearchCodec"
        );
        Self { config }
    }

    /// Create a codec configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CodecConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a node of any family into its envelope.
    pub fn encode_node<F: Family>(&self, node: &F) -> CodecResult<Bytes> {
        let kind = node.node_kind();
        let bytes = registry::encode_node(node)?;
        self.check_size(bytes.len())?;
        debug!(family = F::FAMILY, kind = %kind, len = bytes.len(), "encoded node");
        self.trace_payload(F::FAMILY, &bytes);
        Ok(bytes)
    }

    /// Decode a node of family `F` from its envelope.
    pub fn decode_node<F: Family>(&self, bytes: Bytes) -> CodecResult<F> {
        self.check_size(bytes.len())?;
        self.trace_payload(F::FAMILY, &bytes);
        let len = bytes.len();
        match registry::decode_node::<F>(bytes) {
            Ok(node) => {
                debug!(family = F::FAMILY, kind = %node.node_kind(), len, "decoded node");
                Ok(node)
            }
            Err(err) => {
                debug!(family = F::FAMILY, len, error = %err, "failed to decode node");
                Err(err)
            }
        }
    }

    /// Encode a fixed-layout message such as a request.
    pub fn encode_message<M: WireMessage>(&self, message: &M) -> CodecResult<Bytes> {
        let bytes = registry::encode_message(message)?;
        self.check_size(bytes.len())?;
        debug!(message = M::NAME, len = bytes.len(), "encoded message");
        self.trace_payload(M::NAME, &bytes);
        Ok(bytes)
    }

    /// Decode a fixed-layout message such as a request.
    pub fn decode_message<M: WireMessage>(&self, bytes: Bytes) -> CodecResult<M> {
        self.check_size(bytes.len())?;
        self.trace_payload(M::NAME, &bytes);
        let len = bytes.len();
        registry::decode_message::<M>(bytes)
            .inspect(|_| debug!(message = M::NAME, len, "decoded message"))
            .inspect_err(|err| {
                debug!(message = M::NAME, len, error = %err, "failed to decode message");
            })
    }

    /// Encode a query.
    pub fn encode_query(&self, query: &Query) -> CodecResult<Bytes> {
        self.encode_node(query)
    }

    /// Decode a query.
    pub fn decode_query(&self, bytes: Bytes) -> CodecResult<Query> {
        self.decode_node(bytes)
    }

    /// Encode a group-by.
    pub fn encode_group_by(&self, group_by: &GroupBy) -> CodecResult<Bytes> {
        self.encode_node(group_by)
    }

    /// Decode a group-by.
    pub fn decode_group_by(&self, bytes: Bytes) -> CodecResult<GroupBy> {
        self.decode_node(bytes)
    }

    /// Encode an aggregation.
    pub fn encode_aggregation(&self, aggregation: &Aggregation) -> CodecResult<Bytes> {
        self.encode_node(aggregation)
    }

    /// Decode an aggregation.
    pub fn decode_aggregation(&self, bytes: Bytes) -> CodecResult<Aggregation> {
        self.decode_node(bytes)
    }

    /// Encode a sorter.
    pub fn encode_sorter(&self, sorter: &Sorter) -> CodecResult<Bytes> {
        self.encode_node(sorter)
    }

    /// Decode a sorter.
    pub fn decode_sorter(&self, bytes: Bytes) -> CodecResult<Sorter> {
        self.decode_node(bytes)
    }

    /// Encode a sort.
    pub fn encode_sort(&self, sort: &Sort) -> CodecResult<Bytes> {
        self.encode_message(sort)
    }

    /// Decode a sort.
    pub fn decode_sort(&self, bytes: Bytes) -> CodecResult<Sort> {
        self.decode_message(bytes)
    }

    /// Encode the query part of a search request.
    pub fn encode_search_query(&self, query: &SearchQuery) -> CodecResult<Bytes> {
        self.encode_message(query)
    }

    /// Decode the query part of a search request.
    pub fn decode_search_query(&self, bytes: Bytes) -> CodecResult<SearchQuery> {
        self.decode_message(bytes)
    }

    /// Encode the query part of a parallel-scan request.
    pub fn encode_scan_query(&self, query: &ScanQuery) -> CodecResult<Bytes> {
        self.encode_message(query)
    }

    /// Decode the query part of a parallel-scan request.
    pub fn decode_scan_query(&self, bytes: Bytes) -> CodecResult<ScanQuery> {
        self.decode_message(bytes)
    }

    /// Encode a search request.
    pub fn encode_search_request(&self, request: &SearchRequest) -> CodecResult<Bytes> {
        self.encode_message(request)
    }

    /// Decode a search request.
    pub fn decode_search_request(&self, bytes: Bytes) -> CodecResult<SearchRequest> {
        self.decode_message(bytes)
    }

    /// Encode a parallel-scan request.
    pub fn encode_parallel_scan_request(
        &self,
        request: &ParallelScanRequest,
    ) -> CodecResult<Bytes> {
        self.encode_message(request)
    }

    /// Decode a parallel-scan request.
    pub fn decode_parallel_scan_request(&self, bytes: Bytes) -> CodecResult<ParallelScanRequest> {
        self.decode_message(bytes)
    }

    fn check_size(&self, size: usize) -> CodecResult<()> {
        if size > self.config.max_message_size {
            debug!(size, limit = self.config.max_message_size, "message exceeds size limit");
            return Err(CodecError::MessageTooLarge {
                size,
                limit: self.config.max_message_size,
            });
        }
        Ok(())
    }

    fn trace_payload(&self, name: &'static str, bytes: &[u8]) {
        if self.config.log_payloads {
            trace!(name, hex = %hex::encode(bytes), "payload");
        }
    }
}
