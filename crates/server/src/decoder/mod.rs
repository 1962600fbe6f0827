// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns protobuf messages into explorer content, friendly text and involvers.

pub mod codec;
pub mod denoms;
pub mod evm;
pub mod friendly;
pub mod involvers;
pub mod kinds;
pub mod message;
pub mod registry;

pub use codec::{MessageCodec, UnpackError};
pub use denoms::{DenomFallback, DenomsMetadata};
pub use friendly::{FriendlyFragment, FriendlyText, FriendlyTextBuilder};
pub use involvers::{InvolverRole, InvolversSet};
pub use message::{CosmosMsg, UnknownMsg};
pub use registry::{
    DecodeContext, ExtractError, InvolversExtractor, KnownMessage, MessageParser,
    MessageRegistry, MessageRegistryBuilder, ParseError, ParsedContent,
};
