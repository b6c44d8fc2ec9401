#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("leverage_deposit")]
    fn leverage_deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] principal_amount: &BigUint,
        #[indexed] extra_borrow_amount: &BigUint,
        #[indexed] premium: &BigUint,
    );

    // Emitted by the wrapper for every forwarded pool operation.
    // `amount` is the amount that reached the pool (after wrapping) or left it (before unwrapping).
    #[event("wrapper_operation")]
    fn wrapper_operation_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] operation: OperationKind,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] counterparty: &ManagedAddress,
    );

    #[event("gas_refund_credited")]
    fn gas_refund_credited_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] operation: OperationKind,
        #[indexed] gas_cost: &BigUint,
        #[indexed] credited: &BigUint,
    );

    #[event("gas_claimed")]
    fn gas_claimed_event(&self, #[indexed] user: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("gas_funded")]
    fn gas_funded_event(&self, #[indexed] funder: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("refund_ratio_updated")]
    fn refund_ratio_updated_event(&self, #[indexed] operation: OperationKind, #[indexed] ratio_bps: u64);

    #[event("balance_checkpoint")]
    fn balance_checkpoint_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] round: u64,
        #[indexed] round_points: &BigUint,
        #[indexed] new_balance: &BigUint,
    );

    #[event("yield_distributed")]
    fn yield_distributed_event(&self, #[indexed] round: &Round<Self::Api>);

    // Round closed with no points: the amount stays in custody as undistributed yield.
    #[event("yield_undistributed")]
    fn yield_undistributed_event(&self, #[indexed] round: u64, #[indexed] amount: &BigUint);

    #[event("yield_claimed")]
    fn yield_claimed_event(&self, #[indexed] user: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("token_rescued")]
    fn token_rescued_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("pool_supply")]
    fn pool_supply_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("pool_withdraw")]
    fn pool_withdraw_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] owner: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("pool_borrow")]
    fn pool_borrow_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] interest_rate_mode: u64,
    );

    #[event("pool_repay")]
    fn pool_repay_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] payer: &ManagedAddress,
        #[indexed] on_behalf_of: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("pool_flash_loan")]
    fn pool_flash_loan_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] premium: &BigUint,
        #[indexed] mode: u64,
    );

    #[event("receipt_transfer")]
    fn receipt_transfer_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );
}
