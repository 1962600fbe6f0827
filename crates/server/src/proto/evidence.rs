// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use prost_types::Any;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitEvidence {
    #[prost(string, tag = "1")]
    pub submitter: String,
    #[prost(message, optional, tag = "2")]
    pub evidence: Option<Any>,
}

impl_type_url! {
    MsgSubmitEvidence => "/cosmos.evidence.v1beta1.MsgSubmitEvidence",
}
