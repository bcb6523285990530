multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_EXECUTED, ERR_EXECUTION_IN_PROGRESS, ERR_MARKETPLACE_FAILURE, ERR_VOTING_OPEN,
};
use crate::types::Proposal;

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::proposal_store::ProposalStoreModule
    + crate::marketplace::MarketplaceModule
    + crate::treasury::TreasuryModule
    + crate::events::EventsModule
{
    /// Settles a proposal once its deadline has passed.
    ///
    /// A passing proposal buys its item: price lookup, treasury check,
    /// then the paid marketplace call. The `executed` flag is committed
    /// only after the marketplace has answered, so any failure on that
    /// path leaves the proposal executable again. A failing proposal
    /// moves no value and is simply closed.
    fn apply_execution(&self, proposal_id: u64, now: u64) -> Proposal {
        let proposal = self.load_proposal(proposal_id);
        require!(!proposal.is_voting_open(now), ERR_VOTING_OPEN);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(
            !self.execution_in_progress().get(),
            ERR_EXECUTION_IN_PROGRESS
        );

        let passed = proposal.passed();
        let amount_paid = if passed {
            self.buy_item(proposal.item_id)
        } else {
            BigUint::zero()
        };

        let proposal = self.mark_executed(proposal_id);
        self.proposal_executed_event(proposal_id, passed, &amount_paid);

        proposal
    }

    fn buy_item(&self, item_id: u64) -> BigUint {
        let price = self.item_price(item_id);
        self.require_treasury_covers(&price);

        // ── Held across the external call; blocks reentrant execution ──
        self.execution_in_progress().set(true);
        let purchased = self.purchase_item(item_id, &price);
        self.execution_in_progress().clear();

        require!(purchased, ERR_MARKETPLACE_FAILURE);
        price
    }

    #[storage_mapper("executionInProgress")]
    fn execution_in_progress(&self) -> SingleValueMapper<bool>;
}
