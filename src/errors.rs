pub const ERR_INSUFFICIENT_DEPOSIT: &str = "Insufficient deposit";
pub const ERR_INSUFFICIENT_STAKE: &str = "Insufficient stake";
pub const ERR_PAGE_NOT_FOUND: &str = "Page not found";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_VOTING_CLOSED: &str = "Voting closed";
pub const ERR_VOTING_STILL_OPEN: &str = "Voting still open";
pub const ERR_DUPLICATE_VOTE: &str = "Already voted on this proposal";
pub const ERR_NOT_FINALIZED: &str = "Proposal not finalized";
pub const ERR_NOTHING_TO_CLAIM: &str = "Nothing to claim";
pub const ERR_ALREADY_CLAIMED: &str = "Already claimed";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_FEE: &str = "Fee exceeds 10000 basis points";
pub const ERR_INVALID_DURATION: &str = "Voting duration must be positive";
