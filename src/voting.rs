multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_VOTING_CLOSED};
use crate::types::{Proposal, Vote};

/// One address, one vote. Holding more than one membership token only
/// matters for eligibility, never for weight.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::proposal_store::ProposalStoreModule
    + crate::membership::MembershipModule
    + crate::events::EventsModule
{
    /// Checks run in a fixed order and the first failure wins:
    /// existence, deadline, membership, duplicate vote.
    fn apply_vote(&self, proposal_id: u64, vote: Vote, voter: &ManagedAddress, now: u64) -> Proposal {
        let proposal = self.load_proposal(proposal_id);
        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);
        self.require_member(voter);
        require!(!self.has_voted(proposal_id, voter), ERR_ALREADY_VOTED);

        let proposal = self.record_vote(proposal_id, voter, vote);
        self.vote_event(proposal_id, voter, vote);

        proposal
    }
}
