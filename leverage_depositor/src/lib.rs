#![no_std]

multiversx_sc::imports!();

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

use common_periphery::{config, leverage, native, rescue};

#[multiversx_sc::contract]
pub trait LeverageDepositor:
    config::ConfigModule
    + native::NativeModule
    + leverage::LeverageModule
    + rescue::RescueModule
    + common_events::EventsModule
{
    /// Initializes the leverage depositor.
    ///
    /// # Arguments
    /// - `pool_address`: Lending pool providing flash loans, supply and delegated borrow.
    /// - `wegld_swap_address`: WEGLD swap contract used for the EGLD sentinel.
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

    /// Opens a leveraged supply position for the caller in one transaction.
    ///
    /// The caller ends up with `principal_amount + extra_borrow_amount` supplied and
    /// `extra_borrow_amount + premium` of variable debt. The caller must have approved
    /// delegation of at least that debt to this contract on the pool beforehand.
    ///
    /// # Arguments
    /// - `asset`: EGLD for the native path, otherwise the ESDT to lever.
    /// - `principal_amount`: Amount brought by the caller.
    /// - `extra_borrow_amount`: Flash borrowed amount, must be non zero.
    ///
    /// # Payment
    /// - EGLD path: exactly `principal_amount` EGLD.
    /// - ESDT path: `principal_amount` of `asset` (nothing when the principal is zero), no EGLD.
    #[payable("*")]
    #[endpoint(leverageDeposit)]
    fn leverage_deposit(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        principal_amount: BigUint,
        extra_borrow_amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        self.process_leverage_deposit(&caller, &asset, &principal_amount, &extra_borrow_amount);
    }
}
