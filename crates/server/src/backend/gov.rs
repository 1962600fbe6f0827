// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BackendError, ExplorerBackend};
use crate::proto::Timestamp;
use crate::proto::gov::ProposalStatus;
use crate::proto::gov::v1::{Proposal, TallyResult};
use crate::proto::query::PageRequest;
use crate::utils::coins_to_map;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const PROPOSALS_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalMessage {
    #[serde(rename = "type")]
    pub type_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyCounts {
    pub yes: String,
    pub abstain: String,
    pub no: String,
    pub no_with_veto: String,
}

impl From<TallyResult> for TallyCounts {
    fn from(tally: TallyResult) -> Self {
        Self {
            yes: tally.yes_count,
            abstain: tally.abstain_count,
            no: tally.no_count,
            no_with_veto: tally.no_with_veto_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    pub id: u64,
    pub metadata: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ProposalMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_tally_result: Option<TallyCounts>,
    #[serde(rename = "submitTimeEpochUTC", skip_serializing_if = "Option::is_none")]
    pub submit_time_epoch_utc: Option<i64>,
    #[serde(rename = "depositEndTimeEpochUTC", skip_serializing_if = "Option::is_none")]
    pub deposit_end_time_epoch_utc: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deposit: Option<Map<String, Value>>,
    #[serde(rename = "votingStartTimeEpochUTC", skip_serializing_if = "Option::is_none")]
    pub voting_start_time_epoch_utc: Option<i64>,
    #[serde(rename = "votingEndTimeEpochUTC", skip_serializing_if = "Option::is_none")]
    pub voting_end_time_epoch_utc: Option<i64>,
}

impl From<Proposal> for ProposalSummary {
    fn from(proposal: Proposal) -> Self {
        let seconds = |time: Option<Timestamp>| time.map(|time| time.seconds);

        Self {
            id: proposal.id,
            metadata: proposal.metadata,
            status: ProposalStatus::name_of(proposal.status),
            messages: (!proposal.messages.is_empty()).then(|| {
                proposal
                    .messages
                    .into_iter()
                    .map(|any| ProposalMessage {
                        type_url: any.type_url,
                    })
                    .collect()
            }),
            final_tally_result: proposal.final_tally_result.map(TallyCounts::from),
            submit_time_epoch_utc: seconds(proposal.submit_time),
            deposit_end_time_epoch_utc: seconds(proposal.deposit_end_time),
            total_deposit: (!proposal.total_deposit.is_empty())
                .then(|| coins_to_map(&proposal.total_deposit)),
            voting_start_time_epoch_utc: seconds(proposal.voting_start_time),
            voting_end_time_epoch_utc: seconds(proposal.voting_end_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsPage {
    pub proposals: BTreeMap<u64, ProposalSummary>,
    pub page_no: i64,
    pub page_size: u64,
}

impl ExplorerBackend {
    /// One page of governance proposals, `page_no` counting from 1.
    pub async fn gov_proposals(&self, page_no: i64) -> Result<ProposalsPage, BackendError> {
        if page_no < 1 {
            return Err(BackendError::BadRequest(format!(
                "page number must be at least 1, got {page_no}"
            )));
        }

        let pagination = PageRequest {
            offset: (page_no as u64 - 1) * PROPOSALS_PAGE_SIZE,
            limit: PROPOSALS_PAGE_SIZE,
            ..Default::default()
        };
        let response = self
            .chain()
            .gov_proposals(pagination)
            .await
            .map_err(|e| BackendError::chain("failed to get gov proposals", e))?;

        let proposals = response
            .proposals
            .into_iter()
            .map(|proposal| (proposal.id, ProposalSummary::from(proposal)))
            .collect();

        Ok(ProposalsPage {
            proposals,
            page_no,
            page_size: PROPOSALS_PAGE_SIZE,
        })
    }
}
