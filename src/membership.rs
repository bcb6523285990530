multiversx_sc::imports!();

use crate::errors::ERR_NOT_ELIGIBLE;
use crate::membership_proxy;

/// Gate on the membership token. Balances are read live on every call;
/// nothing is snapshotted at proposal creation.
#[multiversx_sc::module]
pub trait MembershipModule {
    fn membership_balance(&self, holder: &ManagedAddress) -> u64 {
        let membership_addr = self.membership_address().get();
        self.tx()
            .to(&membership_addr)
            .typed(membership_proxy::MembershipProxy)
            .balance_of(holder.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn require_member(&self, holder: &ManagedAddress) {
        require!(self.membership_balance(holder) > 0, ERR_NOT_ELIGIBLE);
    }

    #[view(getMembershipAddress)]
    #[storage_mapper("membershipAddress")]
    fn membership_address(&self) -> SingleValueMapper<ManagedAddress>;
}
