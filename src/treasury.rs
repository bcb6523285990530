multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_ZERO_FUNDING};

/// The treasury is the contract's own EGLD balance. Anyone may add to it;
/// only proposal execution spends from it.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::events::EventsModule {
    #[payable("EGLD")]
    #[endpoint(fundTreasury)]
    fn fund_treasury(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_FUNDING);

        self.treasury_funded_event(&caller, &amount);
    }

    #[view(getTreasuryBalance)]
    fn treasury_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    fn require_treasury_covers(&self, amount: &BigUint) {
        require!(
            &self.treasury_balance() >= amount,
            ERR_INSUFFICIENT_FUNDS
        );
    }
}
