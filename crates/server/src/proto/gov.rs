// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

//! Governance messages, both the current `v1` API and the legacy `v1beta1` one.

/// `cosmos.gov.v1.VoteOption`, shared by both API versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    Unspecified = 0,
    Yes = 1,
    Abstain = 2,
    No = 3,
    NoWithVeto = 4,
}

impl VoteOption {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            VoteOption::Unspecified => "VOTE_OPTION_UNSPECIFIED",
            VoteOption::Yes => "VOTE_OPTION_YES",
            VoteOption::Abstain => "VOTE_OPTION_ABSTAIN",
            VoteOption::No => "VOTE_OPTION_NO",
            VoteOption::NoWithVeto => "VOTE_OPTION_NO_WITH_VETO",
        }
    }

    /// Protobuf enum name of a raw option value; unknown values render as their number.
    pub fn name_of(raw: i32) -> String {
        VoteOption::try_from(raw)
            .map(|option| option.as_str_name().to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProposalStatus {
    Unspecified = 0,
    DepositPeriod = 1,
    VotingPeriod = 2,
    Passed = 3,
    Rejected = 4,
    Failed = 5,
}

impl ProposalStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ProposalStatus::Unspecified => "PROPOSAL_STATUS_UNSPECIFIED",
            ProposalStatus::DepositPeriod => "PROPOSAL_STATUS_DEPOSIT_PERIOD",
            ProposalStatus::VotingPeriod => "PROPOSAL_STATUS_VOTING_PERIOD",
            ProposalStatus::Passed => "PROPOSAL_STATUS_PASSED",
            ProposalStatus::Rejected => "PROPOSAL_STATUS_REJECTED",
            ProposalStatus::Failed => "PROPOSAL_STATUS_FAILED",
        }
    }

    pub fn name_of(raw: i32) -> String {
        ProposalStatus::try_from(raw)
            .map(|status| status.as_str_name().to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

pub mod v1 {
    use super::super::query::{PageRequest, PageResponse};
    use super::super::Coin;
    use prost_types::{Any, Timestamp};

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitProposal {
        #[prost(message, repeated, tag = "1")]
        pub messages: Vec<Any>,
        #[prost(message, repeated, tag = "2")]
        pub initial_deposit: Vec<Coin>,
        #[prost(string, tag = "3")]
        pub proposer: String,
        #[prost(string, tag = "4")]
        pub metadata: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeposit {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub depositor: String,
        #[prost(message, repeated, tag = "3")]
        pub amount: Vec<Coin>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgVote {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: String,
        #[prost(enumeration = "super::VoteOption", tag = "3")]
        pub option: i32,
        #[prost(string, tag = "4")]
        pub metadata: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct WeightedVoteOption {
        #[prost(enumeration = "super::VoteOption", tag = "1")]
        pub option: i32,
        #[prost(string, tag = "2")]
        pub weight: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgVoteWeighted {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: String,
        #[prost(message, repeated, tag = "3")]
        pub options: Vec<WeightedVoteOption>,
        #[prost(string, tag = "4")]
        pub metadata: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TallyResult {
        #[prost(string, tag = "1")]
        pub yes_count: String,
        #[prost(string, tag = "2")]
        pub abstain_count: String,
        #[prost(string, tag = "3")]
        pub no_count: String,
        #[prost(string, tag = "4")]
        pub no_with_veto_count: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Proposal {
        #[prost(uint64, tag = "1")]
        pub id: u64,
        #[prost(message, repeated, tag = "2")]
        pub messages: Vec<Any>,
        #[prost(enumeration = "super::ProposalStatus", tag = "3")]
        pub status: i32,
        #[prost(message, optional, tag = "4")]
        pub final_tally_result: Option<TallyResult>,
        #[prost(message, optional, tag = "5")]
        pub submit_time: Option<Timestamp>,
        #[prost(message, optional, tag = "6")]
        pub deposit_end_time: Option<Timestamp>,
        #[prost(message, repeated, tag = "7")]
        pub total_deposit: Vec<Coin>,
        #[prost(message, optional, tag = "8")]
        pub voting_start_time: Option<Timestamp>,
        #[prost(message, optional, tag = "9")]
        pub voting_end_time: Option<Timestamp>,
        #[prost(string, tag = "10")]
        pub metadata: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct QueryProposalsRequest {
        #[prost(enumeration = "super::ProposalStatus", tag = "1")]
        pub proposal_status: i32,
        #[prost(string, tag = "2")]
        pub voter: String,
        #[prost(string, tag = "3")]
        pub depositor: String,
        #[prost(message, optional, tag = "4")]
        pub pagination: Option<PageRequest>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct QueryProposalsResponse {
        #[prost(message, repeated, tag = "1")]
        pub proposals: Vec<Proposal>,
        #[prost(message, optional, tag = "2")]
        pub pagination: Option<PageResponse>,
    }

    impl_type_url! {
        MsgSubmitProposal => "/cosmos.gov.v1.MsgSubmitProposal",
        MsgDeposit => "/cosmos.gov.v1.MsgDeposit",
        MsgVote => "/cosmos.gov.v1.MsgVote",
        MsgVoteWeighted => "/cosmos.gov.v1.MsgVoteWeighted",
    }
}

pub mod v1beta1 {
    use super::super::Coin;
    use prost_types::Any;

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgSubmitProposal {
        #[prost(message, optional, tag = "1")]
        pub content: Option<Any>,
        #[prost(message, repeated, tag = "2")]
        pub initial_deposit: Vec<Coin>,
        #[prost(string, tag = "3")]
        pub proposer: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgDeposit {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub depositor: String,
        #[prost(message, repeated, tag = "3")]
        pub amount: Vec<Coin>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgVote {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: String,
        #[prost(enumeration = "super::VoteOption", tag = "3")]
        pub option: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct WeightedVoteOption {
        #[prost(enumeration = "super::VoteOption", tag = "1")]
        pub option: i32,
        #[prost(string, tag = "2")]
        pub weight: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MsgVoteWeighted {
        #[prost(uint64, tag = "1")]
        pub proposal_id: u64,
        #[prost(string, tag = "2")]
        pub voter: String,
        #[prost(message, repeated, tag = "3")]
        pub options: Vec<WeightedVoteOption>,
    }

    impl_type_url! {
        MsgSubmitProposal => "/cosmos.gov.v1beta1.MsgSubmitProposal",
        MsgDeposit => "/cosmos.gov.v1beta1.MsgDeposit",
        MsgVote => "/cosmos.gov.v1beta1.MsgVote",
        MsgVoteWeighted => "/cosmos.gov.v1beta1.MsgVoteWeighted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_option_names() {
        assert_eq!(VoteOption::name_of(1), "VOTE_OPTION_YES");
        assert_eq!(VoteOption::name_of(4), "VOTE_OPTION_NO_WITH_VETO");
        assert_eq!(VoteOption::name_of(9), "9");
    }

    #[test]
    fn proposal_status_names() {
        assert_eq!(ProposalStatus::name_of(3), "PROPOSAL_STATUS_PASSED");
        assert_eq!(ProposalStatus::name_of(-1), "-1");
    }
}
