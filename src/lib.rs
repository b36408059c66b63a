#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod proposal_store;
pub mod types;
pub mod vote_tally;

use config::{BPS_DENOMINATOR, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use errors::{
    ERR_ALREADY_FINALIZED, ERR_INSUFFICIENT_TREASURY, ERR_INVALID_DESCRIPTION, ERR_INVALID_TITLE,
    ERR_VOTING_STILL_ACTIVE,
};
use types::{Proposal, ProposalStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait OmegaDao:
    config::ConfigModule
    + events::EventsModule
    + ledger::LedgerModule
    + proposal_store::ProposalStoreModule
    + vote_tally::VoteTallyModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `voting_period` is in blocks. `treasury_allocation` is minted to the
    /// contract's own address and funds executed proposals.
    #[init]
    fn init(&self, voting_period: u64, quorum_bps: u64, treasury_allocation: BigUint) {
        self.configure(voting_period, quorum_bps);

        if treasury_allocation > 0u64 {
            let treasury = self.treasury_address();
            self.mint_to(&treasury, &treasury_allocation);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // Anyone can propose; submission is not gated by stake.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        requested_amount: BigUint,
    ) -> u64 {
        self.require_valid_text(&title, &description);

        let caller = self.blockchain().get_caller();
        let voting_period = self.voting_period().get();
        let proposal = self.store_proposal(
            caller,
            title,
            description,
            requested_amount,
            voting_period,
        );

        self.proposal_submitted_event(
            proposal.id,
            &proposal.submitter,
            proposal.voting_ends_at,
            &proposal.requested_amount,
        );

        proposal.id
    }

    // ========================================================
    // ENDPOINT: vote
    // Yes/No voting weighted by the caller's balance right now.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) -> bool {
        let caller = self.blockchain().get_caller();
        let proposal = self.require_proposal(proposal_id);
        let weight = self.balance_of(&caller);

        self.cast_vote(&proposal, &caller, weight.clone(), support);
        self.vote_cast_event(proposal_id, &caller, support, &weight);

        true
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // First call after the window finalizes Active → Passed/Rejected.
    // Passed proposals then pay out from the treasury → Executed.
    // ========================================================

    /// Returns whether the proposal passed. A passed proposal whose payout the
    /// treasury cannot cover stays `Passed` and can be executed again later.
    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) -> bool {
        let mut proposal = self.require_proposal(proposal_id);

        let now = self.blockchain().get_block_nonce();
        require!(now >= proposal.voting_ends_at, ERR_VOTING_STILL_ACTIVE);
        require!(!proposal.status.is_terminal(), ERR_ALREADY_FINALIZED);

        let finalizing = proposal.status == ProposalStatus::Active;
        if finalizing && !self.finalize_outcome(&mut proposal) {
            return false;
        }

        // ── Disbursement ──
        let treasury = self.treasury_address();
        if !self.try_transfer(&treasury, &proposal.submitter, &proposal.requested_amount) {
            // The finalized outcome must persist, so only a retry may revert.
            require!(finalizing, ERR_INSUFFICIENT_TREASURY);
            self.disbursement_deferred_event(
                proposal_id,
                &proposal.requested_amount,
                &self.treasury_balance(),
            );
            return true;
        }

        self.transition(&mut proposal, ProposalStatus::Executed);
        self.proposal_executed_event(
            proposal_id,
            &proposal.submitter,
            &proposal.requested_amount,
        );

        true
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Strict weighted majority, plus the quorum floor when one is configured.
    fn finalize_outcome(&self, proposal: &mut Proposal<Self::Api>) -> bool {
        let (yes_weight, no_weight) = self.result(proposal.id).into_tuple();
        let passed = yes_weight > no_weight && self.quorum_reached(proposal.id);

        let next = if passed {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        };
        self.transition(proposal, next);
        self.proposal_finalized_event(proposal.id, passed, &yes_weight, &no_weight);

        passed
    }

    /// weight cast / circulating supply >= quorum_bps / 10_000
    fn quorum_reached(&self, proposal_id: u64) -> bool {
        let quorum_bps = self.quorum_bps().get();
        if quorum_bps == 0 {
            return true;
        }

        let cast = self.total_weight_cast(proposal_id);
        let circulating = self.circulating_supply();
        &cast * BPS_DENOMINATOR >= &circulating * quorum_bps
    }

    fn require_valid_text(&self, title: &ManagedBuffer, description: &ManagedBuffer) {
        let title_len = title.len();
        require!(
            title_len > 0 && title_len <= MAX_TITLE_LEN,
            ERR_INVALID_TITLE
        );
        let mut title_buf = [0u8; MAX_TITLE_LEN];
        let title_bytes = title.load_to_byte_array(&mut title_buf);
        require!(title_bytes.is_ascii(), ERR_INVALID_TITLE);

        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ERR_INVALID_DESCRIPTION
        );
        let mut description_buf = [0u8; MAX_DESCRIPTION_LEN];
        let description_bytes = description.load_to_byte_array(&mut description_buf);
        require!(
            core::str::from_utf8(description_bytes).is_ok(),
            ERR_INVALID_DESCRIPTION
        );
    }
}
