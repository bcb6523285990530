#![no_std]

multiversx_sc::imports!();

pub mod membership_nft_proxy;

/// Stand-in for the governance token ledger. Only the owner can mint or
/// burn; there is no transfer.
#[multiversx_sc::contract]
pub trait MembershipNft {
    #[init]
    fn init(&self) {
        self.minted_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Token ids are sequential from 0.
    #[only_owner]
    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress) -> u64 {
        let token_id = self.minted_count().get();
        self.token_owner(token_id).set(&to);
        self.balance(&to).update(|b| *b += 1);
        self.minted_count().set(token_id + 1);

        self.mint_event(token_id, &to);
        token_id
    }

    #[only_owner]
    #[endpoint(burn)]
    fn burn(&self, token_id: u64) {
        require!(!self.token_owner(token_id).is_empty(), "Token does not exist");

        let holder = self.token_owner(token_id).take();
        self.balance(&holder).update(|b| *b -= 1);

        self.burn_event(token_id, &holder);
    }

    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> u64 {
        self.balance(&holder).get()
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        require!(!self.token_owner(token_id).is_empty(), "Token does not exist");
        self.token_owner(token_id).get()
    }

    #[event("mint")]
    fn mint_event(&self, #[indexed] token_id: u64, #[indexed] to: &ManagedAddress);

    #[event("burn")]
    fn burn_event(&self, #[indexed] token_id: u64, #[indexed] holder: &ManagedAddress);

    #[view(getMintedCount)]
    #[storage_mapper("mintedCount")]
    fn minted_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("balance")]
    fn balance(&self, holder: &ManagedAddress) -> SingleValueMapper<u64>;
}
