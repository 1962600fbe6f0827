// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BackendError, ExplorerBackend};
use crate::proto::DecCoin;
use crate::utils::{dec_coins_is_zero, dec_coins_to_string, sum_dec_coins};
use serde::Serialize;
use std::collections::BTreeMap;

/// Delegations and pending rewards of an account, plus validator earnings when
/// the address is a validator operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingInfo {
    /// Delegated amount per validator operator address.
    pub staking: BTreeMap<String, String>,
    pub rewards: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_commission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_outstanding_rewards: Option<String>,
}

impl ExplorerBackend {
    pub async fn staking_info(&self, address: &str) -> Result<StakingInfo, BackendError> {
        let address = address.trim().to_lowercase();
        let account = self
            .addresses()
            .to_account_address(&address)
            .unwrap_or_else(|| address.clone());

        let delegations = self
            .chain()
            .delegator_delegations(&account)
            .await
            .map_err(|e| BackendError::chain("failed to get delegator delegations", e))?;
        let rewards = self
            .chain()
            .delegation_total_rewards(&account)
            .await
            .map_err(|e| BackendError::chain("failed to get delegation rewards", e))?;

        let staking = delegations
            .delegation_responses
            .into_iter()
            .filter_map(|response| {
                let validator = response.delegation?.validator_address;
                let amount = response.balance.map(|coin| coin.amount).unwrap_or_default();
                Some((validator, amount))
            })
            .collect();

        let rewards = sum_dec_coins(rewards.rewards.iter().flat_map(|reward| &reward.reward));

        let mut info = StakingInfo {
            staking,
            rewards: dec_coins_to_string(&rewards),
            validator_commission: None,
            validator_outstanding_rewards: None,
        };

        if self.addresses().is_validator_address(&address) {
            let commission = match self.chain().validator_commission(&address).await {
                Ok(response) => response
                    .commission
                    .map(|commission| commission.commission)
                    .unwrap_or_default(),
                Err(e) => {
                    tracing::error!(validator = %address, error = %e, "Failed to get validator commission");
                    Vec::new()
                }
            };
            let outstanding = match self.chain().validator_outstanding_rewards(&address).await {
                Ok(response) => response
                    .rewards
                    .map(|rewards| rewards.rewards)
                    .unwrap_or_default(),
                Err(e) => {
                    tracing::error!(validator = %address, error = %e, "Failed to get validator outstanding rewards");
                    Vec::new()
                }
            };

            info.validator_commission = non_zero(&commission);
            info.validator_outstanding_rewards = non_zero(&outstanding);
        }

        Ok(info)
    }
}

fn non_zero(coins: &[DecCoin]) -> Option<String> {
    (!dec_coins_is_zero(coins)).then(|| dec_coins_to_string(coins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_backend;
    use crate::proto::Coin;
    use crate::proto::distribution::{
        DelegationDelegatorReward, QueryDelegationTotalRewardsResponse,
        QueryValidatorCommissionResponse, QueryValidatorOutstandingRewardsResponse,
        ValidatorAccumulatedCommission, ValidatorOutstandingRewards,
    };
    use crate::proto::staking::{Delegation, DelegationResponse, QueryDelegatorDelegationsResponse};
    use crate::test_fixtures::{MockChainClient, account_address, validator_address};
    use serde_json::json;

    fn dec(amount: &str, denom: &str) -> DecCoin {
        DecCoin {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    fn delegations(delegator: &str, entries: &[(&str, &str)]) -> QueryDelegatorDelegationsResponse {
        QueryDelegatorDelegationsResponse {
            delegation_responses: entries
                .iter()
                .map(|(validator, amount)| DelegationResponse {
                    delegation: Some(Delegation {
                        delegator_address: delegator.into(),
                        validator_address: validator.to_string(),
                        shares: format!("{amount}000000000000000000"),
                    }),
                    balance: Some(Coin::new(*amount, "uatom")),
                })
                .collect(),
            pagination: None,
        }
    }

    fn rewards(entries: &[(&str, DecCoin)]) -> QueryDelegationTotalRewardsResponse {
        QueryDelegationTotalRewardsResponse {
            rewards: entries
                .iter()
                .map(|(validator, coin)| DelegationDelegatorReward {
                    validator_address: validator.to_string(),
                    reward: vec![coin.clone()],
                })
                .collect(),
            total: Vec::new(),
        }
    }

    #[tokio::test]
    async fn delegator_info_sums_rewards_across_validators() {
        let delegator = account_address(1);
        let (v1, v2) = (validator_address(10), validator_address(11));
        let chain = MockChainClient::new()
            .with_delegations(&delegator, delegations(&delegator, &[(&v1, "1000"), (&v2, "250")]))
            .with_rewards(
                &delegator,
                rewards(&[
                    (&v1, dec("1500000000000000000", "uatom")),
                    (&v2, dec("500000000000000000", "uatom")),
                ]),
            );
        let backend = test_backend(chain);

        let info = backend
            .staking_info(&format!("  {}  ", delegator.to_uppercase()))
            .await
            .unwrap();

        assert_eq!(info.staking.get(&v1).map(String::as_str), Some("1000"));
        assert_eq!(info.staking.get(&v2).map(String::as_str), Some("250"));
        assert_eq!(info.rewards, "2.000000000000000000uatom");
        assert!(info.validator_commission.is_none());

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("validatorCommission").is_none());
        assert!(json.get("validatorOutstandingRewards").is_none());
    }

    #[tokio::test]
    async fn validator_address_reports_commission_and_outstanding_rewards() {
        let operator = validator_address(5);
        let account = account_address(5);
        let chain = MockChainClient::new()
            .with_delegations(&account, delegations(&account, &[(&operator, "42")]))
            .with_commission(
                &operator,
                QueryValidatorCommissionResponse {
                    commission: Some(ValidatorAccumulatedCommission {
                        commission: vec![dec("3000000000000000000", "uatom")],
                    }),
                },
            )
            .with_outstanding_rewards(
                &operator,
                QueryValidatorOutstandingRewardsResponse {
                    rewards: Some(ValidatorOutstandingRewards {
                        rewards: vec![dec("0", "uatom")],
                    }),
                },
            );
        let backend = test_backend(chain);

        let info = backend.staking_info(&operator).await.unwrap();

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "staking": { operator.clone(): "42" },
                "rewards": "",
                "validatorCommission": "3.000000000000000000uatom",
            })
        );
    }

    #[tokio::test]
    async fn validator_query_failures_count_as_zero() {
        let operator = validator_address(6);
        let backend = test_backend(MockChainClient::new().failing_validator(&operator));

        let info = backend.staking_info(&operator).await.unwrap();
        assert!(info.staking.is_empty());
        assert!(info.validator_commission.is_none());
        assert!(info.validator_outstanding_rewards.is_none());
    }

    #[tokio::test]
    async fn hex_address_is_converted_to_account_form() {
        let account = account_address(0xab);
        let chain = MockChainClient::new().with_delegations(
            &account,
            delegations(&account, &[(&validator_address(1), "7")]),
        );
        let backend = test_backend(chain);

        let info = backend
            .staking_info(&format!("0x{}", "AB".repeat(20)))
            .await
            .unwrap();
        assert_eq!(info.staking.len(), 1);
    }

    #[tokio::test]
    async fn delegation_query_failure_is_internal() {
        let delegator = account_address(2);
        let backend = test_backend(MockChainClient::new().failing_account(&delegator));

        let err = backend.staking_info(&delegator).await.unwrap_err();
        assert!(
            matches!(&err, BackendError::Internal(msg) if msg.starts_with("failed to get delegator delegations"))
        );
    }
}
