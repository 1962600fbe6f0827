// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Type URL to protobuf decoder mapping, the explorer's interface registry.

use super::message::{CosmosMsg, UnknownMsg};
use crate::proto::{Any, TypeUrl};
use std::collections::HashMap;
use thiserror::Error;

type DecodeFn = fn(&[u8]) -> Result<Box<dyn CosmosMsg>, prost::DecodeError>;

#[derive(Debug, Error)]
pub enum UnpackError {
    #[error("failed to decode {type_url}: {source}")]
    Decode {
        type_url: String,
        #[source]
        source: prost::DecodeError,
    },
}

fn decode_as<M>(bytes: &[u8]) -> Result<Box<dyn CosmosMsg>, prost::DecodeError>
where
    M: CosmosMsg + TypeUrl + prost::Message + Default,
{
    Ok(Box::new(M::decode(bytes)?))
}

#[derive(Debug, Clone, Default)]
pub struct MessageCodec {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl MessageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M>(&mut self) -> &mut Self
    where
        M: CosmosMsg + TypeUrl + prost::Message + Default,
    {
        self.decoders.insert(M::TYPE_URL, decode_as::<M>);
        self
    }

    /// Decodes `any` into its registered type.
    ///
    /// Unregistered type URLs yield an [`UnknownMsg`]; only bytes that do not
    /// decode as their registered type are an error.
    pub fn unpack(&self, any: &Any) -> Result<Box<dyn CosmosMsg>, UnpackError> {
        let Some(decode) = self.decoders.get(any.type_url.as_str()) else {
            return Ok(Box::new(UnknownMsg {
                type_url: any.type_url.clone(),
                value: any.value.clone(),
            }));
        };
        decode(&any.value).map_err(|source| UnpackError::Decode {
            type_url: any.type_url.clone(),
            source,
        })
    }
}
