multiversx_sc::imports!();

/// On-chain logs for every governance state change.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("mint")]
    fn mint_event(&self, #[indexed] recipient: &ManagedAddress, amount: &BigUint);

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] submitter: &ManagedAddress,
        #[indexed] voting_ends_at: u64,
        requested_amount: &BigUint,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
        #[indexed] yes_weight: &BigUint,
        no_weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] submitter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("disbursementDeferred")]
    fn disbursement_deferred_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] requested_amount: &BigUint,
        treasury_balance: &BigUint,
    );

    #[event("votingPeriodChanged")]
    fn voting_period_changed_event(&self, #[indexed] blocks: u64);

    #[event("quorumChanged")]
    fn quorum_changed_event(&self, #[indexed] quorum_bps: u64);
}
