multiversx_sc::imports!();

use crate::types::Vote;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] item_id: u64,
        deadline: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote: Vote,
    );

    /// `amount_paid` is zero when the proposal failed.
    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
        amount_paid: &BigUint,
    );

    #[event("treasuryFunded")]
    fn treasury_funded_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);
}
