multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_QUORUM, ERR_INVALID_VOTING_PERIOD, ERR_ONLY_OWNER};

/// Suggested voting window: roughly one day of 10-minute blocks
pub const DEFAULT_VOTING_PERIOD: u64 = 144;

/// No participation floor unless the deployer sets one
pub const DEFAULT_QUORUM_BPS: u64 = 0;

pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_TITLE_LEN: usize = 100;

pub const MAX_DESCRIPTION_LEN: usize = 500;

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    fn configure(&self, voting_period: u64, quorum_bps: u64) {
        self.apply_voting_period(voting_period);
        self.apply_quorum_bps(quorum_bps);
    }

    /// Owner gate checked inside the method body.
    fn require_caller_is_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_ONLY_OWNER
        );
    }

    /// Only proposals submitted afterwards use the new window.
    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, blocks: u64) {
        self.require_caller_is_owner();
        self.apply_voting_period(blocks);
        self.voting_period_changed_event(blocks);
    }

    /// Applied when a proposal is finalized, not when it is submitted.
    #[endpoint(setQuorumBps)]
    fn set_quorum_bps(&self, quorum_bps: u64) {
        self.require_caller_is_owner();
        self.apply_quorum_bps(quorum_bps);
        self.quorum_changed_event(quorum_bps);
    }

    fn apply_voting_period(&self, blocks: u64) {
        require!(blocks > 0, ERR_INVALID_VOTING_PERIOD);
        self.voting_period().set(blocks);
    }

    fn apply_quorum_bps(&self, quorum_bps: u64) {
        require!(quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_QUORUM);
        self.quorum_bps().set(quorum_bps);
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue4<u64, u64, u64, u64> {
        (
            self.voting_period().get(),
            self.quorum_bps().get(),
            MAX_TITLE_LEN as u64,
            MAX_DESCRIPTION_LEN as u64,
        )
            .into()
    }

    #[view(getVotingPeriod)]
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[view(getQuorumBps)]
    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;
}
