multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_RECEIPT_ALLOWANCE, ERROR_INSUFFICIENT_RECEIPT_BALANCE, ERROR_INVALID_ADDRESS,
    ERROR_ZERO_AMOUNT,
};
use common_proxies::yield_distributor_proxy;

use crate::{storage, validation};

/// Receipt balance movements. Every mint, burn and transfer reports each touched
/// account to the reserve's yield distributor before returning.
#[multiversx_sc::module]
pub trait ReceiptModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    #[endpoint(approveReceipt)]
    fn approve_receipt(&self, asset: TokenIdentifier, spender: ManagedAddress, amount: BigUint) {
        self.require_reserve(&asset);
        let caller = self.blockchain().get_caller();
        self.receipt_allowance(&asset, &caller, &spender).set(&amount);
    }

    #[endpoint(transferReceipt)]
    fn transfer_receipt(&self, asset: TokenIdentifier, to: ManagedAddress, amount: BigUint) {
        self.require_reserve(&asset);
        let caller = self.blockchain().get_caller();
        self.move_receipt(&asset, &caller, &to, &amount);
    }

    /// Moves receipt balance out of `from` against the allowance granted to the caller.
    #[endpoint(transferReceiptFrom)]
    fn transfer_receipt_from(
        &self,
        asset: TokenIdentifier,
        from: ManagedAddress,
        to: ManagedAddress,
        amount: BigUint,
    ) {
        self.require_reserve(&asset);
        let caller = self.blockchain().get_caller();
        if caller != from {
            self.receipt_allowance(&asset, &from, &caller).update(|allowance| {
                require!(*allowance >= amount, ERROR_INSUFFICIENT_RECEIPT_ALLOWANCE);
                *allowance -= &amount;
            });
        }

        self.move_receipt(&asset, &from, &to, &amount);
    }

    fn move_receipt(
        &self,
        asset: &TokenIdentifier,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) {
        require!(*amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(!to.is_zero(), ERROR_INVALID_ADDRESS);

        self.burn_receipt(asset, from, amount);
        self.mint_receipt(asset, to, amount);

        self.receipt_transfer_event(asset, from, to, amount);
    }

    fn mint_receipt(&self, asset: &TokenIdentifier, user: &ManagedAddress, amount: &BigUint) {
        let old_balance = self.receipt_balance(asset, user).get();
        let new_balance = &old_balance + amount;

        self.receipt_balance(asset, user).set(&new_balance);
        self.receipt_supply(asset).update(|supply| *supply += amount);

        self.notify_balance_change(asset, user, old_balance, new_balance);
    }

    fn burn_receipt(&self, asset: &TokenIdentifier, user: &ManagedAddress, amount: &BigUint) {
        let old_balance = self.receipt_balance(asset, user).get();
        require!(old_balance >= *amount, ERROR_INSUFFICIENT_RECEIPT_BALANCE);
        let new_balance = &old_balance - amount;

        self.receipt_balance(asset, user).set(&new_balance);
        self.receipt_supply(asset).update(|supply| *supply -= amount);

        self.notify_balance_change(asset, user, old_balance, new_balance);
    }

    fn notify_balance_change(
        &self,
        asset: &TokenIdentifier,
        user: &ManagedAddress,
        old_balance: BigUint,
        new_balance: BigUint,
    ) {
        let distributor = self.yield_distributor(asset);
        if distributor.is_empty() {
            return;
        }

        self.tx()
            .to(distributor.get())
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .on_balance_change(user, old_balance, new_balance)
            .sync_call();
    }
}
