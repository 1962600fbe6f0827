// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Protobuf definitions for the Cosmos SDK, IBC and Ethermint types the explorer decodes.
//!
//! The structs are hand-derived with `prost` and carry only the fields the
//! explorer reads. Unknown fields are skipped by the decoder, so a message
//! produced by a newer chain version still decodes.

/// Canonical `Any` type URL of a protobuf message.
pub trait TypeUrl {
    const TYPE_URL: &'static str;
}

macro_rules! impl_type_url {
    ($($ty:ty => $url:literal),+ $(,)?) => {
        $(
            impl $crate::proto::TypeUrl for $ty {
                const TYPE_URL: &'static str = $url;
            }
        )+
    };
}

pub mod authz;
pub mod bank;
pub mod crisis;
pub mod distribution;
pub mod ethermint;
pub mod evidence;
pub mod gov;
pub mod ibc;
pub mod query;
pub mod slashing;
pub mod staking;
pub mod tx;

pub use prost_types::{Any, Timestamp};

/// Builds an `Any` wrapping `msg` under its canonical type URL.
pub fn to_any<M: TypeUrl + prost::Message>(msg: &M) -> Any {
    Any {
        type_url: M::TYPE_URL.to_string(),
        value: msg.encode_to_vec(),
    }
}

/// `cosmos.base.v1beta1.Coin`
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// `cosmos.base.v1beta1.DecCoin`; `amount` holds a fixed-point decimal with 18 fractional digits.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DecCoin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}
