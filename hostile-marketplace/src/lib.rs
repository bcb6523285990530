#![no_std]

multiversx_sc::imports!();

pub mod hostile_marketplace_proxy;

/// Misbehaving marketplace for exercising the DAO's failure paths.
///
/// With a reentry target configured, `purchase` calls straight back into
/// the target's `executeProposal`. Without one, it rejects every purchase.
#[multiversx_sc::contract]
pub trait HostileMarketplace {
    #[init]
    fn init(&self, item_price: BigUint) {
        self.item_price().set(&item_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setReentry)]
    fn set_reentry(&self, target: ManagedAddress, proposal_id: u64) {
        self.reentry_target().set(&target);
        self.reentry_proposal().set(proposal_id);
    }

    #[endpoint(purchase)]
    #[payable("EGLD")]
    fn purchase(&self, _item_id: u64) -> bool {
        require!(!self.reentry_target().is_empty(), "Purchase rejected");

        let target = self.reentry_target().get();
        let proposal_id = self.reentry_proposal().get();
        self.tx()
            .to(&target)
            .raw_call("executeProposal")
            .argument(&proposal_id)
            .sync_call();
        true
    }

    #[view(getPrice)]
    fn get_price(&self, _item_id: u64) -> BigUint {
        self.item_price().get()
    }

    #[storage_mapper("itemPrice")]
    fn item_price(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reentryTarget")]
    fn reentry_target(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("reentryProposal")]
    fn reentry_proposal(&self) -> SingleValueMapper<u64>;
}
