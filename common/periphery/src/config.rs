multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_ADDRESS, ERROR_INVALID_ASSET};

/// Addresses shared by every contract that talks to the pool and the WEGLD swap.
#[multiversx_sc::module]
pub trait ConfigModule {
    fn init_config(
        &self,
        pool_address: &ManagedAddress,
        wegld_swap_address: &ManagedAddress,
        wegld_token_id: &TokenIdentifier,
    ) {
        self.require_contract_address(pool_address);
        self.require_contract_address(wegld_swap_address);
        require!(wegld_token_id.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);

        self.pool_address().set(pool_address);
        self.wegld_swap_address().set(wegld_swap_address);
        self.wegld_token_id().set(wegld_token_id);
    }

    fn require_contract_address(&self, address: &ManagedAddress) {
        require!(
            !address.is_zero() && self.blockchain().is_smart_contract(address),
            ERROR_INVALID_ADDRESS
        );
    }

    #[view(getPoolAddress)]
    #[storage_mapper("pool_address")]
    fn pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getWegldSwapAddress)]
    #[storage_mapper("wegld_swap_address")]
    fn wegld_swap_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getWegldTokenId)]
    #[storage_mapper("wegld_token_id")]
    fn wegld_token_id(&self) -> SingleValueMapper<TokenIdentifier>;
}
