use multiversx_sc::proxy_imports::*;

/// Marketplace contract, as seen by the DAO: price lookup and purchase.
pub struct MarketplaceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MarketplaceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MarketplaceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MarketplaceProxyMethods { wrapped_tx: tx }
    }
}

pub struct MarketplaceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> MarketplaceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_price<Arg0: ProxyArg<u64>>(
        self,
        item_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrice")
            .argument(&item_id)
            .original_result()
    }

    /// Payable: the price travels as the EGLD payment of the call.
    pub fn purchase<Arg0: ProxyArg<u64>>(
        self,
        item_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, bool> {
        self.wrapped_tx
            .raw_call("purchase")
            .argument(&item_id)
            .original_result()
    }
}
