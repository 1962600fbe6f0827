// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgVerifyInvariant {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub invariant_module_name: String,
    #[prost(string, tag = "3")]
    pub invariant_route: String,
}

impl_type_url! {
    MsgVerifyInvariant => "/cosmos.crisis.v1beta1.MsgVerifyInvariant",
}
