multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Voting is open until `voting_ends_at`.
    Active,
    /// Finalized with yes > no and quorum met. Waiting on disbursement.
    Passed,
    /// Finalized without a majority or quorum. Terminal state.
    Rejected,
    /// Requested funds sent to the submitter. Terminal state.
    Executed,
}

impl ProposalStatus {
    /// The only legal edges are Active→Passed, Active→Rejected and Passed→Executed.
    pub fn can_transition_to(self, next: ProposalStatus) -> bool {
        matches!(
            (self, next),
            (ProposalStatus::Active, ProposalStatus::Passed)
                | (ProposalStatus::Active, ProposalStatus::Rejected)
                | (ProposalStatus::Passed, ProposalStatus::Executed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ProposalStatus::Rejected | ProposalStatus::Executed)
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub requested_amount: BigUint<M>,
    pub submitter: ManagedAddress<M>,
    /// Block nonce at submission
    pub submitted_at: u64,
    /// First block nonce at which the proposal can be executed.
    /// Snapshotted at submission so later config changes never move it.
    pub voting_ends_at: u64,
    pub status: ProposalStatus,
}

// ============================================================
// Vote Record — one per voter per proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub support: bool,
    pub weight: BigUint<M>,
}
