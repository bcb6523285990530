multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_PROPOSAL_NOT_FOUND};
use crate::types::{Proposal, Vote};

/// Voting window: 24 hours in seconds
pub const VOTING_PERIOD: u64 = 86_400;

/// Owns the proposal table and its id sequence.
///
/// Ids are dense and start at 0. Records are never removed; after
/// creation only the tallies, the voter set and the `executed` flag
/// change, and only through `record_vote` / `mark_executed`.
#[multiversx_sc::module]
pub trait ProposalStoreModule {
    fn create_proposal_record(&self, item_id: u64, now: u64) -> u64 {
        let proposal_id = self.num_proposals().get();
        let proposal = Proposal::new(proposal_id, item_id, now + VOTING_PERIOD);

        self.proposals(proposal_id).set(&proposal);
        self.num_proposals().set(proposal_id + 1);

        proposal_id
    }

    fn load_proposal(&self, proposal_id: u64) -> Proposal {
        require!(
            proposal_id < self.num_proposals().get(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// Eligibility is the caller's job. The voter-set insert is the last
    /// line against double counting.
    fn record_vote(&self, proposal_id: u64, voter: &ManagedAddress, vote: Vote) -> Proposal {
        let mut proposal = self.load_proposal(proposal_id);
        require!(
            self.voters(proposal_id).insert(voter.clone()),
            ERR_ALREADY_VOTED
        );

        proposal.tally(vote);
        self.proposals(proposal_id).set(&proposal);
        proposal
    }

    fn mark_executed(&self, proposal_id: u64) -> Proposal {
        let mut proposal = self.load_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        proposal
    }

    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.voters(proposal_id).contains(voter)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal {
        self.load_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal> {
        let mut result = MultiValueEncoded::new();
        let total = self.num_proposals().get();
        if count == 0 || from >= total {
            return result;
        }

        let end = core::cmp::min(from.saturating_add(count), total);
        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getNumProposals)]
    #[storage_mapper("numProposals")]
    fn num_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal>;

    #[storage_mapper("voters")]
    fn voters(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
