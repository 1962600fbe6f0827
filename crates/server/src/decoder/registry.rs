// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dispatch of decoded messages to their parser and involvers extractor.
//!
//! Resolution has two tiers. A handler registered for a specific type URL wins;
//! otherwise the default parser and default extractor are used. The defaults
//! know every built-in message kind and, for the extractor, fall back to
//! scanning the transaction's events for account addresses.
//!
//! A registry is assembled once at start-up with [`MessageRegistryBuilder`] and
//! is immutable afterwards.

use super::codec::{MessageCodec, UnpackError};
use super::denoms::{DenomFallback, DenomsMetadata, fetch_denoms_metadata};
use super::friendly::{FriendlyText, FriendlyTextBuilder};
use super::involvers::{InvolverRole, InvolversSet};
use super::kinds;
use super::message::CosmosMsg;
use crate::chain::ChainQueryClient;
use crate::proto::{Any, Coin, TypeUrl};
use crate::utils::Bech32Config;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Deepest chain of authz-wrapped messages that is still decoded.
pub const MAX_NESTED_MESSAGE_DEPTH: usize = 8;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not supported message type {0}")]
    UnsupportedMessageType(String),

    #[error("unsupported message detail: {0}")]
    UnsupportedDetail(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("failed to get tx result for tx {tx_hash} when processing msg {msg_type}: {reason}")]
    Internal {
        tx_hash: String,
        msg_type: String,
        reason: String,
    },
}

/// Structured content of a message plus its friendly description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent {
    /// Always a JSON object.
    pub content: Value,
    pub friendly: FriendlyText,
}

impl ParsedContent {
    pub fn new(content: Value, friendly: FriendlyTextBuilder) -> Self {
        Self {
            content,
            friendly: friendly.finalize(),
        }
    }

    /// Sets `key` on the content object.
    pub fn insert(&mut self, key: &str, value: Value) {
        if let Some(map) = self.content.as_object_mut() {
            map.insert(key.to_string(), value);
        }
    }
}

/// Everything a handler may consult while decoding one message of one transaction.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    pub chain: &'a dyn ChainQueryClient,
    pub registry: &'a MessageRegistry,
    pub addresses: &'a Bech32Config,
    pub denom_fallback: &'a DenomFallback,
    /// Native hash of the transaction owning the message.
    pub tx_hash: &'a str,
    depth: usize,
}

impl<'a> DecodeContext<'a> {
    pub fn new(
        chain: &'a dyn ChainQueryClient,
        registry: &'a MessageRegistry,
        addresses: &'a Bech32Config,
        denom_fallback: &'a DenomFallback,
        tx_hash: &'a str,
    ) -> Self {
        Self {
            chain,
            registry,
            addresses,
            denom_fallback,
            tx_hash,
            depth: 0,
        }
    }

    /// Context for a message wrapped inside the current one, `None` past the depth limit.
    pub fn nested(&self) -> Option<Self> {
        (self.depth < MAX_NESTED_MESSAGE_DEPTH).then(|| Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub async fn denoms_metadata(&self, coins: &[Coin]) -> DenomsMetadata {
        fetch_denoms_metadata(self.chain, coins, self.denom_fallback).await
    }
}

#[async_trait]
pub trait MessageParser: Send + Sync {
    async fn parse(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<ParsedContent, ParseError>;
}

#[async_trait]
pub trait InvolversExtractor: Send + Sync {
    async fn extract(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<InvolversSet, ExtractError>;
}

/// A message kind the explorer describes natively.
///
/// Implementing this trait and registering the type with
/// [`MessageRegistryBuilder::kind`] is all it takes to support a new message.
#[async_trait]
pub trait KnownMessage: CosmosMsg + TypeUrl + prost::Message + Default {
    async fn parse(&self, ctx: &DecodeContext<'_>) -> Result<ParsedContent, ParseError>;

    async fn involvers(&self, ctx: &DecodeContext<'_>) -> Result<InvolversSet, ExtractError>;
}

/// Adapts a [`KnownMessage`] type to the type-erased handler traits.
struct Kind<M>(PhantomData<fn() -> M>);

impl<M> Kind<M> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<M: KnownMessage> MessageParser for Kind<M> {
    async fn parse(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<ParsedContent, ParseError> {
        match msg.downcast::<M>() {
            Some(msg) => KnownMessage::parse(msg, ctx).await,
            None => Err(ParseError::UnsupportedMessageType(
                msg.proto_name().to_string(),
            )),
        }
    }
}

#[async_trait]
impl<M: KnownMessage> InvolversExtractor for Kind<M> {
    async fn extract(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<InvolversSet, ExtractError> {
        match msg.downcast::<M>() {
            Some(msg) => msg.involvers(ctx).await,
            None => scan_event_involvers(msg, ctx).await,
        }
    }
}

trait KindHandler: MessageParser + InvolversExtractor {}

impl<T: MessageParser + InvolversExtractor> KindHandler for T {}

type BuiltinKinds = HashMap<&'static str, Box<dyn KindHandler>>;

/// Parses every built-in kind; anything else is [`ParseError::UnsupportedMessageType`].
pub struct DefaultMessageParser {
    kinds: Arc<BuiltinKinds>,
}

#[async_trait]
impl MessageParser for DefaultMessageParser {
    async fn parse(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<ParsedContent, ParseError> {
        match self.kinds.get(msg.type_url()) {
            Some(kind) => kind.parse(msg, ctx).await,
            None => Err(ParseError::UnsupportedMessageType(
                msg.proto_name().to_string(),
            )),
        }
    }
}

/// Extracts involvers of built-in kinds; for anything else scans the transaction events.
pub struct DefaultInvolversExtractor {
    kinds: Arc<BuiltinKinds>,
}

#[async_trait]
impl InvolversExtractor for DefaultInvolversExtractor {
    async fn extract(
        &self,
        msg: &dyn CosmosMsg,
        ctx: &DecodeContext<'_>,
    ) -> Result<InvolversSet, ExtractError> {
        match self.kinds.get(msg.type_url()) {
            Some(kind) => kind.extract(msg, ctx).await,
            None => {
                tracing::debug!(msg_type = msg.proto_name(), "Missing message involvers extractor");
                scan_event_involvers(msg, ctx).await
            }
        }
    }
}

/// Every event attribute value of the owning transaction that is an account address.
async fn scan_event_involvers(
    msg: &dyn CosmosMsg,
    ctx: &DecodeContext<'_>,
) -> Result<InvolversSet, ExtractError> {
    let internal = |reason: String| ExtractError::Internal {
        tx_hash: ctx.tx_hash.to_string(),
        msg_type: msg.proto_name().to_string(),
        reason,
    };

    let result = ctx
        .chain
        .tx_result(ctx.tx_hash)
        .await
        .map_err(|e| internal(e.to_string()))?
        .ok_or_else(|| internal("transaction result not found".to_string()))?;

    let mut involvers = InvolversSet::new();
    for event in &result.events {
        involvers.add(
            InvolverRole::Generic,
            event
                .attributes
                .iter()
                .filter(|attr| ctx.addresses.is_account_address(&attr.value))
                .map(|attr| attr.value.as_str()),
        );
    }
    Ok(involvers)
}

pub struct MessageRegistry {
    codec: MessageCodec,
    default_parser: DefaultMessageParser,
    default_extractor: DefaultInvolversExtractor,
    parsers: HashMap<String, Box<dyn MessageParser>>,
    extractors: HashMap<String, Box<dyn InvolversExtractor>>,
}

impl MessageRegistry {
    pub fn builder() -> MessageRegistryBuilder {
        MessageRegistryBuilder::default()
    }

    /// Built-in kinds plus the chain-specific handlers the explorer ships with.
    pub fn standard() -> Self {
        let mut builder = Self::builder();
        kinds::register_builtin(&mut builder);
        kinds::register_chain_specific(&mut builder);
        builder.build()
    }

    pub fn unpack(&self, any: &Any) -> Result<Box<dyn CosmosMsg>, UnpackError> {
        self.codec.unpack(any)
    }

    pub fn resolve_parser(&self, type_url: &str) -> &dyn MessageParser {
        match self.parsers.get(type_url) {
            Some(parser) => parser.as_ref(),
            None => &self.default_parser,
        }
    }

    pub fn resolve_extractor(&self, type_url: &str) -> &dyn InvolversExtractor {
        match self.extractors.get(type_url) {
            Some(extractor) => extractor.as_ref(),
            None => &self.default_extractor,
        }
    }

    pub fn default_parser(&self) -> &dyn MessageParser {
        &self.default_parser
    }

    pub fn default_extractor(&self) -> &dyn InvolversExtractor {
        &self.default_extractor
    }
}

#[derive(Default)]
pub struct MessageRegistryBuilder {
    codec: MessageCodec,
    kinds: BuiltinKinds,
    parsers: HashMap<String, Box<dyn MessageParser>>,
    extractors: HashMap<String, Box<dyn InvolversExtractor>>,
}

impl MessageRegistryBuilder {
    /// Makes `M` decodable and handled by the default parser and extractor.
    pub fn kind<M: KnownMessage>(&mut self) -> &mut Self {
        self.codec.register::<M>();
        self.kinds.insert(M::TYPE_URL, Box::new(Kind::<M>::new()));
        self
    }

    /// Makes `M` decodable and routes it to its own handlers ahead of the defaults.
    pub fn specific<M: KnownMessage>(&mut self) -> &mut Self {
        self.codec.register::<M>();
        self.parser(M::TYPE_URL, Kind::<M>::new())
            .extractor(M::TYPE_URL, Kind::<M>::new())
    }

    pub fn parser(
        &mut self,
        type_url: impl Into<String>,
        parser: impl MessageParser + 'static,
    ) -> &mut Self {
        self.parsers.insert(type_url.into(), Box::new(parser));
        self
    }

    pub fn extractor(
        &mut self,
        type_url: impl Into<String>,
        extractor: impl InvolversExtractor + 'static,
    ) -> &mut Self {
        self.extractors.insert(type_url.into(), Box::new(extractor));
        self
    }

    pub fn build(self) -> MessageRegistry {
        let kinds = Arc::new(self.kinds);
        MessageRegistry {
            codec: self.codec,
            default_parser: DefaultMessageParser {
                kinds: Arc::clone(&kinds),
            },
            default_extractor: DefaultInvolversExtractor { kinds },
            parsers: self.parsers,
            extractors: self.extractors,
        }
    }
}
