multiversx_sc::imports!();

use crate::errors::ERR_ZERO_AMOUNT;

/// Governance-token balances. The contract's own address holds the treasury.
///
/// Tokens only leave an account through treasury disbursement; there is no
/// holder-to-holder transfer endpoint, so one balance backs at most one vote
/// per proposal.
#[multiversx_sc::module]
pub trait LedgerModule: crate::config::ConfigModule + crate::events::EventsModule {
    #[endpoint(mint)]
    fn mint(&self, amount: BigUint, recipient: ManagedAddress) -> bool {
        self.require_caller_is_owner();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        self.mint_to(&recipient, &amount);
        true
    }

    fn mint_to(&self, recipient: &ManagedAddress, amount: &BigUint) {
        self.balance(recipient).update(|b| *b += amount);
        self.total_supply().update(|s| *s += amount);
        self.mint_event(recipient, amount);
    }

    /// Moves `amount` unless `from` cannot cover it, in which case nothing changes.
    fn try_transfer(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) -> bool {
        let from_balance = self.balance(from).get();
        if &from_balance < amount {
            return false;
        }
        if from == to {
            return true;
        }

        self.balance(from).set(&from_balance - amount);
        self.balance(to).update(|b| *b += amount);
        true
    }

    fn treasury_address(&self) -> ManagedAddress {
        self.blockchain().get_sc_address()
    }

    #[view(getTreasuryBalance)]
    fn treasury_balance(&self) -> BigUint {
        self.balance(&self.treasury_address()).get()
    }

    /// Total supply minus the treasury, which never votes.
    #[view(getCirculatingSupply)]
    fn circulating_supply(&self) -> BigUint {
        self.total_supply().get() - self.treasury_balance()
    }

    #[view(getBalance)]
    fn balance_of(&self, address: &ManagedAddress) -> BigUint {
        self.balance(address).get()
    }

    #[view(getTotalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
