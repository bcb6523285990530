multiversx_sc::imports!();

use crate::marketplace_proxy;

#[multiversx_sc::module]
pub trait MarketplaceModule {
    fn item_price(&self, item_id: u64) -> BigUint {
        let marketplace_addr = self.marketplace_address().get();
        self.tx()
            .to(&marketplace_addr)
            .typed(marketplace_proxy::MarketplaceProxy)
            .get_price(item_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Pays `price` out of the contract balance. A revert inside the
    /// marketplace reverts the whole transaction; a `false` answer is
    /// left to the caller to handle.
    fn purchase_item(&self, item_id: u64, price: &BigUint) -> bool {
        let marketplace_addr = self.marketplace_address().get();
        self.tx()
            .to(&marketplace_addr)
            .typed(marketplace_proxy::MarketplaceProxy)
            .purchase(item_id)
            .egld(price)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getMarketplaceAddress)]
    #[storage_mapper("marketplaceAddress")]
    fn marketplace_address(&self) -> SingleValueMapper<ManagedAddress>;
}
