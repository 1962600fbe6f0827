// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUnjail {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

impl_type_url! {
    MsgUnjail => "/cosmos.slashing.v1beta1.MsgUnjail",
}
