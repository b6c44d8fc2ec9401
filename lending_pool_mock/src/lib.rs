#![no_std]

multiversx_sc::imports!();

pub mod flash;
pub mod liquidity;
pub mod receipt;
pub mod storage;
pub mod validation;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::MAX_FLASH_LOAN_PREMIUM_BPS;

/// Minimal lending pool used to exercise the periphery contracts.
///
/// One reserve per listed ESDT. No interest accrues and no health factor is enforced:
/// supply mints receipt balance one to one, borrow opens debt one to one. Borrowing
/// on behalf of another account requires that account's delegation.
#[multiversx_sc::contract]
pub trait LendingPoolMock:
    storage::Storage
    + validation::ValidationModule
    + liquidity::LiquidityModule
    + receipt::ReceiptModule
    + flash::FlashLoanModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(&self, flash_loan_premium_bps: u64) {
        self.set_flash_loan_premium(flash_loan_premium_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addReserve)]
    fn add_reserve(&self, asset: TokenIdentifier) {
        require!(asset.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);
        require!(self.reserves().insert(asset), ERROR_RESERVE_ALREADY_EXISTS);
    }

    /// Hooks a yield distributor on the reserve's receipt balances. Only allowed while
    /// the receipt supply is empty so the distributor starts in sync.
    #[only_owner]
    #[endpoint(setYieldDistributor)]
    fn set_yield_distributor(&self, asset: TokenIdentifier, distributor: ManagedAddress) {
        self.require_reserve(&asset);
        require!(
            self.blockchain().is_smart_contract(&distributor),
            ERROR_INVALID_ADDRESS
        );
        require!(
            self.receipt_supply(&asset).get() == 0u64,
            ERROR_DISTRIBUTOR_ATTACH_WITH_SUPPLY
        );

        self.yield_distributor(&asset).set(&distributor);
    }

    #[only_owner]
    #[endpoint(setFlashLoanPremium)]
    fn set_flash_loan_premium(&self, premium_bps: u64) {
        require!(
            premium_bps <= MAX_FLASH_LOAN_PREMIUM_BPS,
            ERROR_INVALID_FLASH_LOAN_PREMIUM
        );
        self.flash_loan_premium().set(premium_bps);
    }

    /// Deposits the attached reserve asset and credits receipt balance to `on_behalf_of`.
    #[payable("*")]
    #[endpoint(supply)]
    fn supply(&self, on_behalf_of: ManagedAddress) {
        let payment = self.require_reserve_payment();
        let caller = self.blockchain().get_caller();

        self.add_liquidity(&payment.token_identifier, &payment.amount);
        self.mint_receipt(&payment.token_identifier, &on_behalf_of, &payment.amount);

        self.pool_supply_event(
            &payment.token_identifier,
            &caller,
            &on_behalf_of,
            &payment.amount,
        );
    }

    /// Burns the caller's receipt balance and sends the underlying to `to`.
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: TokenIdentifier, amount: BigUint, to: ManagedAddress) -> BigUint {
        self.require_reserve(&asset);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        let caller = self.blockchain().get_caller();

        self.burn_receipt(&asset, &caller, &amount);
        self.take_liquidity(&asset, &amount);

        self.tx().to(&to).single_esdt(&asset, 0, &amount).transfer();

        self.pool_withdraw_event(&asset, &caller, &to, &amount);
        amount
    }

    /// Opens debt for `on_behalf_of` and sends the borrowed amount to the caller.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        asset: TokenIdentifier,
        amount: BigUint,
        interest_rate_mode: u64,
        _referral_code: u16,
        on_behalf_of: ManagedAddress,
    ) {
        self.require_reserve(&asset);
        self.require_rate_mode(interest_rate_mode);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        let caller = self.blockchain().get_caller();

        self.consume_borrow_allowance(&asset, &on_behalf_of, &caller, &amount);
        self.take_liquidity(&asset, &amount);
        self.open_debt(&asset, &on_behalf_of, &amount);

        self.tx().to(&caller).single_esdt(&asset, 0, &amount).transfer();

        self.pool_borrow_event(&asset, &caller, &on_behalf_of, &amount, interest_rate_mode);
    }

    /// Repays up to the debt of `on_behalf_of` with the attached asset. The excess goes
    /// back to the caller. Returns the amount repaid.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, interest_rate_mode: u64, on_behalf_of: ManagedAddress) -> BigUint {
        self.require_rate_mode(interest_rate_mode);
        let payment = self.require_reserve_payment();
        let asset = &payment.token_identifier;
        let caller = self.blockchain().get_caller();

        let debt = self.debt_balance(asset, &on_behalf_of).get();
        require!(debt > 0u64, ERROR_NO_DEBT);

        let repaid = core::cmp::min(debt, payment.amount.clone());
        self.close_debt(asset, &on_behalf_of, &repaid);
        self.add_liquidity(asset, &repaid);

        let excess = &payment.amount - &repaid;
        self.tx()
            .to(&caller)
            .single_esdt(asset, 0, &excess)
            .transfer_if_not_empty();

        self.pool_repay_event(asset, &caller, &on_behalf_of, &repaid);
        repaid
    }

    /// Lets `delegatee` open up to `amount` of debt on behalf of the caller.
    #[endpoint(approveDelegation)]
    fn approve_delegation(&self, asset: TokenIdentifier, delegatee: ManagedAddress, amount: BigUint) {
        self.require_reserve(&asset);
        let caller = self.blockchain().get_caller();
        self.borrow_allowance(&asset, &caller, &delegatee).set(&amount);
    }

    #[view(getReserveData)]
    fn get_reserve_data(&self, asset: TokenIdentifier) -> ReserveData<Self::Api> {
        self.require_reserve(&asset);
        let distributor = self.yield_distributor(&asset);

        ReserveData {
            receipt_supply: self.receipt_supply(&asset).get(),
            debt_supply: self.debt_supply(&asset).get(),
            available_liquidity: self.available_liquidity(&asset).get(),
            flash_loan_premium_bps: self.flash_loan_premium().get(),
            yield_distributor: if distributor.is_empty() {
                None
            } else {
                Some(distributor.get())
            },
            asset,
        }
    }
}
