multiversx_sc::imports!();

/// Per-reserve ledgers of the pool. Receipt balances stand in for interest-bearing
/// receipt tokens and are only moved through `receipt::ReceiptModule`.
#[multiversx_sc::module]
pub trait Storage {
    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[view(getReceiptBalance)]
    #[storage_mapper("receipt_balance")]
    fn receipt_balance(
        &self,
        asset: &TokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(getReceiptSupply)]
    #[storage_mapper("receipt_supply")]
    fn receipt_supply(&self, asset: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getDebtBalance)]
    #[storage_mapper("debt_balance")]
    fn debt_balance(
        &self,
        asset: &TokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("debt_supply")]
    fn debt_supply(&self, asset: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Underlying accounted to the reserve. Tokens held above it are unaccounted inflows,
    /// which is how flash loan repayments are recognised.
    #[storage_mapper("available_liquidity")]
    fn available_liquidity(&self, asset: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Debt `delegatee` may still open on behalf of `delegator`.
    #[view(getBorrowAllowance)]
    #[storage_mapper("borrow_allowance")]
    fn borrow_allowance(
        &self,
        asset: &TokenIdentifier,
        delegator: &ManagedAddress,
        delegatee: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Receipt balance `spender` may still move out of `owner`.
    #[view(getReceiptAllowance)]
    #[storage_mapper("receipt_allowance")]
    fn receipt_allowance(
        &self,
        asset: &TokenIdentifier,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("yield_distributor")]
    fn yield_distributor(&self, asset: &TokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    #[view(getFlashLoanPremium)]
    #[storage_mapper("flash_loan_premium")]
    fn flash_loan_premium(&self) -> SingleValueMapper<u64>;
}
