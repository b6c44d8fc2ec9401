multiversx_sc::imports!();

use common_constants::REFERRAL_CODE;
use common_proxies::pool_proxy;
use common_periphery::config;

/// Thin wrappers over the pool calls the wrapper forwards.
#[multiversx_sc::module]
pub trait PoolInteractionModule: config::ConfigModule {
    fn pool_supply(&self, asset: &TokenIdentifier, amount: &BigUint, on_behalf_of: &ManagedAddress) {
        self.tx()
            .to(self.pool_address().get())
            .typed(pool_proxy::LendingPoolProxy)
            .supply(on_behalf_of)
            .single_esdt(asset, 0, amount)
            .sync_call();
    }

    /// Pulls `amount` of the owner's receipt (the owner approved the wrapper beforehand)
    /// and withdraws it from the pool to `to`. Returns the withdrawn amount.
    fn pool_withdraw(
        &self,
        owner: &ManagedAddress,
        asset: &TokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> BigUint {
        let pool = self.pool_address().get();
        let sc_address = self.blockchain().get_sc_address();

        self.tx()
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .transfer_receipt_from(asset, owner, &sc_address, amount)
            .sync_call();

        self.tx()
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .withdraw(asset, amount, to)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Borrows against `on_behalf_of`'s delegation; the tokens land in the wrapper.
    fn pool_borrow(
        &self,
        asset: &TokenIdentifier,
        amount: &BigUint,
        interest_rate_mode: u64,
        on_behalf_of: &ManagedAddress,
    ) {
        self.tx()
            .to(self.pool_address().get())
            .typed(pool_proxy::LendingPoolProxy)
            .borrow(asset, amount, interest_rate_mode, REFERRAL_CODE, on_behalf_of)
            .sync_call();
    }

    /// Repays up to `amount`; the pool hands any excess back to the wrapper.
    /// Returns the amount actually repaid.
    fn pool_repay(
        &self,
        asset: &TokenIdentifier,
        amount: &BigUint,
        interest_rate_mode: u64,
        on_behalf_of: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(self.pool_address().get())
            .typed(pool_proxy::LendingPoolProxy)
            .repay(interest_rate_mode, on_behalf_of)
            .single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }
}
