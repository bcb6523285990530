#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod execution;
pub mod marketplace;
pub mod marketplace_proxy;
pub mod membership;
pub mod membership_proxy;
pub mod nft_dao_proxy;
pub mod proposal_store;
pub mod treasury;
pub mod types;
pub mod voting;

use errors::{ERR_INVALID_MARKETPLACE, ERR_INVALID_MEMBERSHIP};
use proposal_store::VOTING_PERIOD;
use types::Vote;

// ============================================================
// Contract
// ============================================================

/// Treasury-backed DAO: membership token holders propose marketplace
/// purchases, vote on them, and anyone settles them after the deadline.
#[multiversx_sc::contract]
pub trait NftDao:
    proposal_store::ProposalStoreModule
    + voting::VotingModule
    + execution::ExecutionModule
    + membership::MembershipModule
    + marketplace::MarketplaceModule
    + treasury::TreasuryModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Any attached EGLD becomes the initial treasury.
    #[init]
    #[payable("EGLD")]
    fn init(&self, marketplace_address: ManagedAddress, membership_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&marketplace_address),
            ERR_INVALID_MARKETPLACE
        );
        require!(
            self.blockchain().is_smart_contract(&membership_address),
            ERR_INVALID_MEMBERSHIP
        );

        self.marketplace_address().set(&marketplace_address);
        self.membership_address().set(&membership_address);
        self.num_proposals().set(0u64);

        let initial_funding = self.call_value().egld_value().clone_value();
        if initial_funding > 0u64 {
            let caller = self.blockchain().get_caller();
            self.treasury_funded_event(&caller, &initial_funding);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, item_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let now = self.blockchain().get_block_timestamp();
        let proposal_id = self.create_proposal_record(item_id, now);

        self.proposal_created_event(proposal_id, &caller, item_id, now + VOTING_PERIOD);
        proposal_id
    }

    // ========================================================
    // ENDPOINT: voteOnProposal
    // ========================================================

    #[endpoint(voteOnProposal)]
    fn vote_on_proposal(&self, proposal_id: u64, vote: Vote) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.apply_vote(proposal_id, vote, &caller, now);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Open to anyone once the deadline has passed.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let now = self.blockchain().get_block_timestamp();
        self.apply_execution(proposal_id, now);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<ManagedAddress, ManagedAddress, u64> {
        let marketplace = self.marketplace_address().get();
        let membership = self.membership_address().get();
        (marketplace, membership, VOTING_PERIOD).into()
    }
}
