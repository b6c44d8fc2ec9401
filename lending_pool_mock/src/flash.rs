multiversx_sc::imports!();

use common_constants::FLASH_LOAN_MODE_NO_DEBT;
use common_errors::{
    ERROR_FLASH_LOAN_NOT_EXECUTED, ERROR_INVALID_FLASHLOAN_REPAYMENT,
    ERROR_INVALID_FLASH_LOAN_ARGS, ERROR_ZERO_AMOUNT,
};
use common_proxies::flash_receiver_proxy;

use crate::{liquidity, storage, validation};

#[multiversx_sc::module]
pub trait FlashLoanModule:
    storage::Storage
    + validation::ValidationModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lends `amounts` of `assets` to `receiver` and calls its `executeOperation`.
    ///
    /// Mode 0 entries must be returned with the premium before the call completes.
    /// Repayment is pushed: the receiver transfers it to the pool and the pool checks its
    /// unaccounted balance, so the receiver is free to call back into the pool meanwhile.
    /// Any other mode leaves the amount as debt of `on_behalf_of`.
    #[endpoint(flashLoan)]
    fn flash_loan(
        &self,
        receiver: ManagedAddress,
        assets: ManagedVec<TokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        modes: ManagedVec<u64>,
        on_behalf_of: ManagedAddress,
        params: ManagedBuffer,
        _referral_code: u16,
    ) {
        let len = assets.len();
        require!(
            len > 0 && amounts.len() == len && modes.len() == len,
            ERROR_INVALID_FLASH_LOAN_ARGS
        );

        let caller = self.blockchain().get_caller();
        let premium_bps = self.flash_loan_premium().get();

        let mut payments = ManagedVec::<Self::Api, EsdtTokenPayment>::new();
        let mut premiums = ManagedVec::<Self::Api, BigUint>::new();
        let mut unaccounted_before = ManagedVec::<Self::Api, BigUint>::new();

        for index in 0..len {
            let asset = assets.get(index).clone_value();
            let amount = amounts.get(index).clone_value();
            self.require_reserve(&asset);
            require!(amount > 0u64, ERROR_ZERO_AMOUNT);
            for previous in 0..index {
                require!(*assets.get(previous) != asset, ERROR_INVALID_FLASH_LOAN_ARGS);
            }

            unaccounted_before.push(self.unaccounted_balance(&asset));
            self.take_liquidity(&asset, &amount);

            premiums.push(self.percent_mul_half_up(&amount, premium_bps));
            payments.push(EsdtTokenPayment::new(asset, 0, amount));
        }

        let executed = self
            .tx()
            .to(&receiver)
            .typed(flash_receiver_proxy::FlashLoanReceiverProxy)
            .execute_operation(assets.clone(), amounts.clone(), premiums.clone(), &caller, params)
            .payment(payments)
            .returns(ReturnsResult)
            .sync_call();
        require!(executed, ERROR_FLASH_LOAN_NOT_EXECUTED);

        for index in 0..len {
            let asset = assets.get(index).clone_value();
            let amount = amounts.get(index).clone_value();
            let premium = premiums.get(index).clone_value();
            let mode = modes.get(index);

            if mode == FLASH_LOAN_MODE_NO_DEBT {
                let before = unaccounted_before.get(index).clone_value();
                let after = self.unaccounted_balance(&asset);
                require!(
                    after >= &before + &amount + &premium,
                    ERROR_INVALID_FLASHLOAN_REPAYMENT
                );
                self.add_liquidity(&asset, &(after - before));
            } else {
                self.require_rate_mode(mode);
                self.consume_borrow_allowance(&asset, &on_behalf_of, &caller, &amount);
                self.open_debt(&asset, &on_behalf_of, &amount);
            }

            self.pool_flash_loan_event(&asset, &receiver, &amount, &premium, mode);
        }
    }
}
