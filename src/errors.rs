pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_INVALID_TRANSITION: &str = "Invalid proposal status transition";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_ZERO_WEIGHT: &str = "No voting power";
pub const ERR_VOTING_CLOSED: &str = "Voting period has expired";
pub const ERR_VOTING_STILL_ACTIVE: &str = "Voting period has not ended";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";
pub const ERR_INSUFFICIENT_TREASURY: &str = "Insufficient treasury balance";

pub const ERR_ONLY_OWNER: &str = "Endpoint can only be called by owner";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_INVALID_TITLE: &str = "Title must be 1-100 ASCII bytes";
pub const ERR_INVALID_DESCRIPTION: &str = "Description must be valid UTF-8 of at most 500 bytes";
pub const ERR_INVALID_VOTING_PERIOD: &str = "Voting period must be greater than zero";
pub const ERR_INVALID_QUORUM: &str = "Quorum cannot exceed 10000 basis points";
