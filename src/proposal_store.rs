multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_TRANSITION, ERR_PROPOSAL_NOT_FOUND};
use crate::types::{Proposal, ProposalStatus};

/// Proposal records keyed by sequential id, starting at 0.
#[multiversx_sc::module]
pub trait ProposalStoreModule {
    fn store_proposal(
        &self,
        submitter: ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        requested_amount: BigUint,
        voting_period: u64,
    ) -> Proposal<Self::Api> {
        let id = self.proposal_count().get();
        let now = self.blockchain().get_block_nonce();

        let proposal = Proposal {
            id,
            title,
            description,
            requested_amount,
            submitter,
            submitted_at: now,
            voting_ends_at: now + voting_period,
            status: ProposalStatus::Active,
        };

        self.proposals(id).set(&proposal);
        self.proposal_count().set(id + 1);
        proposal
    }

    fn require_proposal(&self, id: u64) -> Proposal<Self::Api> {
        require!(id < self.proposal_count().get(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(id).get()
    }

    fn transition(&self, proposal: &mut Proposal<Self::Api>, next: ProposalStatus) {
        require!(
            proposal.status.can_transition_to(next),
            ERR_INVALID_TRANSITION
        );
        proposal.status = next;
        self.proposals(proposal.id).set(&*proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.require_proposal(id)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, id: u64) -> ProposalStatus {
        self.require_proposal(id).status
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);

        for id in from..end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Proposals in ids `from..from + count` whose voting window is still open.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_nonce();
        let end = core::cmp::min(from.saturating_add(count), self.proposal_count().get());

        for id in from..end {
            let proposal = self.proposals(id).get();
            if proposal.status == ProposalStatus::Active && now < proposal.voting_ends_at {
                result.push(proposal);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
