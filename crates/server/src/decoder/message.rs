// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::proto::TypeUrl;
use std::any::Any;
use std::fmt::Debug;

/// A decoded message whose concrete type is only known at run time.
pub trait CosmosMsg: Any + Debug + Send + Sync {
    fn type_url(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

impl<M> CosmosMsg for M
where
    M: TypeUrl + Any + Debug + Send + Sync,
{
    fn type_url(&self) -> &str {
        M::TYPE_URL
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A message of a type URL no decoder is registered for, kept as raw bytes.
///
/// It still flows through the registry, where the default handlers take it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMsg {
    pub type_url: String,
    pub value: Vec<u8>,
}

impl CosmosMsg for UnknownMsg {
    fn type_url(&self) -> &str {
        &self.type_url
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<'a> dyn CosmosMsg + 'a {
    pub fn downcast<M: CosmosMsg>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }

    /// Fully-qualified protobuf name, the type URL without its leading `/`.
    pub fn proto_name(&self) -> &str {
        proto_name(self.type_url())
    }
}

pub fn proto_name(type_url: &str) -> &str {
    type_url.strip_prefix('/').unwrap_or(type_url)
}
