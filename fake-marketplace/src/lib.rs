#![no_std]

multiversx_sc::imports!();

pub mod fake_marketplace_proxy;

/// Stand-in marketplace: every item costs the same fixed price and can be
/// bought once.
#[multiversx_sc::contract]
pub trait FakeMarketplace {
    #[init]
    fn init(&self, item_price: BigUint) {
        self.item_price().set(&item_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Returns `false` without recording anything if the item already has
    /// an owner. The payment is not refunded in that case; callers are
    /// expected to revert on `false`.
    #[endpoint(purchase)]
    #[payable("EGLD")]
    fn purchase(&self, item_id: u64) -> bool {
        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment == self.item_price().get(),
            "Incorrect payment amount"
        );

        if !self.owners(item_id).is_empty() {
            return false;
        }

        let buyer = self.blockchain().get_caller();
        self.owners(item_id).set(&buyer);
        self.purchase_event(item_id, &buyer, &payment);
        true
    }

    #[view(getPrice)]
    fn get_price(&self, _item_id: u64) -> BigUint {
        self.item_price().get()
    }

    #[view(isAvailable)]
    fn is_available(&self, item_id: u64) -> bool {
        self.owners(item_id).is_empty()
    }

    #[event("purchase")]
    fn purchase_event(
        &self,
        #[indexed] item_id: u64,
        #[indexed] buyer: &ManagedAddress,
        price: &BigUint,
    );

    #[storage_mapper("itemPrice")]
    fn item_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getOwner)]
    #[storage_mapper("owners")]
    fn owners(&self, item_id: u64) -> SingleValueMapper<ManagedAddress>;
}
