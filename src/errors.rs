pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_VOTING_CLOSED: &str = "Voting period has ended";
pub const ERR_VOTING_OPEN: &str = "Voting period has not ended";
pub const ERR_NOT_ELIGIBLE: &str = "Caller does not hold a membership token";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this proposal";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient treasury funds";
pub const ERR_MARKETPLACE_FAILURE: &str = "Marketplace purchase failed";

pub const ERR_EXECUTION_IN_PROGRESS: &str = "Execution already in progress";
pub const ERR_ZERO_FUNDING: &str = "Funding amount must be positive";
pub const ERR_INVALID_MARKETPLACE: &str = "Invalid marketplace address";
pub const ERR_INVALID_MEMBERSHIP: &str = "Invalid membership address";
