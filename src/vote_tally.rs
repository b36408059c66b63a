multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_PROPOSAL_NOT_ACTIVE, ERR_VOTING_CLOSED, ERR_ZERO_WEIGHT,
};
use crate::types::{Proposal, ProposalStatus, VoteRecord};

/// Weighted yes/no totals and the voters who produced them.
#[multiversx_sc::module]
pub trait VoteTallyModule {
    fn cast_vote(
        &self,
        proposal: &Proposal<Self::Api>,
        voter: &ManagedAddress,
        weight: BigUint,
        support: bool,
    ) {
        require!(
            proposal.status == ProposalStatus::Active,
            ERR_PROPOSAL_NOT_ACTIVE
        );
        require!(
            !self.voters(proposal.id).contains(voter),
            ERR_ALREADY_VOTED
        );
        require!(
            self.blockchain().get_block_nonce() < proposal.voting_ends_at,
            ERR_VOTING_CLOSED
        );
        require!(weight > 0u64, ERR_ZERO_WEIGHT);

        if support {
            self.yes_weight(proposal.id).update(|w| *w += &weight);
        } else {
            self.no_weight(proposal.id).update(|w| *w += &weight);
        }

        self.voters(proposal.id).insert(voter.clone());
        self.vote_records(proposal.id, voter)
            .set(VoteRecord { support, weight });
    }

    /// Pure read of `(yes_weight, no_weight)`.
    #[view(getVoteTally)]
    fn result(&self, proposal_id: u64) -> MultiValue2<BigUint, BigUint> {
        (
            self.yes_weight(proposal_id).get(),
            self.no_weight(proposal_id).get(),
        )
            .into()
    }

    fn total_weight_cast(&self, proposal_id: u64) -> BigUint {
        self.yes_weight(proposal_id).get() + self.no_weight(proposal_id).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: &ManagedAddress) -> Option<VoteRecord<Self::Api>> {
        let record = self.vote_records(proposal_id, voter);
        if record.is_empty() {
            None
        } else {
            Some(record.get())
        }
    }

    #[view(getVoters)]
    fn get_voters(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("yesWeight")]
    fn yes_weight(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("noWeight")]
    fn no_weight(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;
}
