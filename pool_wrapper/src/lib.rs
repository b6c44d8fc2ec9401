#![no_std]

multiversx_sc::imports!();

pub mod gas;
pub mod pool;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

use common_periphery::{config, leverage, native, rescue};

#[multiversx_sc::contract]
pub trait PoolWrapper:
    config::ConfigModule
    + native::NativeModule
    + leverage::LeverageModule
    + rescue::RescueModule
    + gas::GasRebateModule
    + pool::PoolInteractionModule
    + common_events::EventsModule
{
    /// Initializes the wrapper.
    ///
    /// # Arguments
    /// - `pool_address`: Lending pool every operation is forwarded to.
    /// - `wegld_swap_address`: WEGLD swap contract backing the EGLD endpoints.
    /// - `wegld_token_id`: Token minted by the WEGLD swap.
    #[init]
    fn init(
        &self,
        pool_address: ManagedAddress,
        wegld_swap_address: ManagedAddress,
        wegld_token_id: TokenIdentifier,
    ) {
        self.init_config(&pool_address, &wegld_swap_address, &wegld_token_id);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies the attached ESDT to the pool on behalf of `on_behalf_of`.
    ///
    /// # Payment
    /// - One fungible ESDT, non zero. EGLD is rejected.
    #[payable("*")]
    #[endpoint(supplyToken)]
    fn supply_token(&self, on_behalf_of: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        let (asset, amount) = self.require_esdt_payment();

        self.pool_supply(&asset, &amount, &on_behalf_of);

        self.wrapper_operation_event(
            &caller,
            OperationKind::Supply,
            &EgldOrEsdtTokenIdentifier::esdt(asset),
            &amount,
            &on_behalf_of,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Supply);
    }

    /// Wraps the attached EGLD and supplies the WEGLD on behalf of `on_behalf_of`.
    ///
    /// # Payment
    /// - EGLD, non zero.
    #[payable("*")]
    #[endpoint(supplyEgld)]
    fn supply_egld(&self, on_behalf_of: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        let amount = self.require_egld_payment();

        self.wrap_egld(&amount);
        self.pool_supply(&self.wegld_token_id().get(), &amount, &on_behalf_of);

        self.wrapper_operation_event(
            &caller,
            OperationKind::Supply,
            &EgldOrEsdtTokenIdentifier::egld(),
            &amount,
            &on_behalf_of,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Supply);
    }

    /// Withdraws `amount` of the caller's supply of `asset` and sends it to `to`.
    /// The caller must have approved the wrapper on the pool's receipt ledger.
    #[endpoint(withdrawToken)]
    fn withdraw_token(&self, asset: TokenIdentifier, amount: BigUint, to: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let withdrawn = self.pool_withdraw(&caller, &asset, &amount, &to);

        self.wrapper_operation_event(
            &caller,
            OperationKind::Withdraw,
            &EgldOrEsdtTokenIdentifier::esdt(asset),
            &withdrawn,
            &to,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Withdraw);
    }

    /// Withdraws `amount` of the caller's WEGLD supply, unwraps it and sends EGLD to `to`.
    #[endpoint(withdrawEgld)]
    fn withdraw_egld(&self, amount: BigUint, to: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let sc_address = self.blockchain().get_sc_address();
        let wegld = self.wegld_token_id().get();
        let withdrawn = self.pool_withdraw(&caller, &wegld, &amount, &sc_address);

        self.unwrap_wegld(&withdrawn);
        self.tx().to(&to).egld(&withdrawn).transfer();

        self.wrapper_operation_event(
            &caller,
            OperationKind::Withdraw,
            &EgldOrEsdtTokenIdentifier::egld(),
            &withdrawn,
            &to,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Withdraw);
    }

    /// Borrows `amount` of `asset` against the caller's position and sends it to the caller.
    /// The caller must have approved borrow delegation to the wrapper.
    #[endpoint(borrowToken)]
    fn borrow_token(&self, asset: TokenIdentifier, amount: BigUint, interest_rate_mode: u64) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.pool_borrow(&asset, &amount, interest_rate_mode, &caller);
        self.tx().to(&caller).single_esdt(&asset, 0, &amount).transfer();

        self.wrapper_operation_event(
            &caller,
            OperationKind::Borrow,
            &EgldOrEsdtTokenIdentifier::esdt(asset),
            &amount,
            &caller,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Borrow);
    }

    /// Borrows WEGLD against the caller's position and pays it out as EGLD.
    #[endpoint(borrowEgld)]
    fn borrow_egld(&self, amount: BigUint, interest_rate_mode: u64) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        self.pool_borrow(&self.wegld_token_id().get(), &amount, interest_rate_mode, &caller);
        self.unwrap_wegld(&amount);
        self.tx().to(&caller).egld(&amount).transfer();

        self.wrapper_operation_event(
            &caller,
            OperationKind::Borrow,
            &EgldOrEsdtTokenIdentifier::egld(),
            &amount,
            &caller,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Borrow);
    }

    /// Repays debt of `on_behalf_of` with the attached ESDT. Any excess over the
    /// outstanding debt goes back to the caller.
    ///
    /// # Payment
    /// - One fungible ESDT, non zero. EGLD is rejected.
    #[payable("*")]
    #[endpoint(repayToken)]
    fn repay_token(&self, interest_rate_mode: u64, on_behalf_of: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        let (asset, amount) = self.require_esdt_payment();

        let repaid = self.pool_repay(&asset, &amount, interest_rate_mode, &on_behalf_of);
        let excess = &amount - &repaid;
        self.tx()
            .to(&caller)
            .single_esdt(&asset, 0, &excess)
            .transfer_if_not_empty();

        self.wrapper_operation_event(
            &caller,
            OperationKind::Repay,
            &EgldOrEsdtTokenIdentifier::esdt(asset),
            &repaid,
            &on_behalf_of,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Repay);
    }

    /// Repays WEGLD debt of `on_behalf_of` with the attached EGLD. Any excess is refunded
    /// to the caller as EGLD.
    ///
    /// # Payment
    /// - EGLD, non zero.
    #[payable("*")]
    #[endpoint(repayEgld)]
    fn repay_egld(&self, interest_rate_mode: u64, on_behalf_of: ManagedAddress) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();
        let amount = self.require_egld_payment();

        self.wrap_egld(&amount);
        let repaid = self.pool_repay(
            &self.wegld_token_id().get(),
            &amount,
            interest_rate_mode,
            &on_behalf_of,
        );

        let excess = &amount - &repaid;
        if excess > 0u64 {
            self.unwrap_wegld(&excess);
            self.tx().to(&caller).egld(&excess).transfer();
        }

        self.wrapper_operation_event(
            &caller,
            OperationKind::Repay,
            &EgldOrEsdtTokenIdentifier::egld(),
            &repaid,
            &on_behalf_of,
        );
        self.credit_gas(&caller, gas_at_entry, OperationKind::Repay);
    }

    /// Leveraged supply routed through the wrapper. The wrapper is the flash loan
    /// receiver, so the caller's borrow delegation must name the wrapper.
    ///
    /// # Arguments
    /// - `asset`: EGLD for the native path, otherwise the ESDT to lever.
    /// - `principal_amount`: Amount brought by the caller.
    /// - `extra_borrow_amount`: Flash borrowed amount, must be non zero.
    #[payable("*")]
    #[endpoint(leverageDeposit)]
    fn leverage_deposit(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        principal_amount: BigUint,
        extra_borrow_amount: BigUint,
    ) {
        let gas_at_entry = self.blockchain().get_gas_left();
        let caller = self.blockchain().get_caller();

        self.process_leverage_deposit(&caller, &asset, &principal_amount, &extra_borrow_amount);

        self.credit_gas(&caller, gas_at_entry, OperationKind::LeverageDeposit);
    }

    fn require_esdt_payment(&self) -> (TokenIdentifier, BigUint) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(!payment.token_identifier.is_egld(), ERROR_INVALID_MSG_VALUE);
        require!(payment.token_nonce == 0, ERROR_INVALID_ASSET);

        (payment.token_identifier.unwrap_esdt(), payment.amount)
    }

    fn require_egld_payment(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier.is_egld() && payment.amount > 0u64,
            ERROR_INVALID_MSG_VALUE
        );

        payment.amount
    }
}
