multiversx_sc::imports!();

use common_structs::{BalanceCheckpoint, Round, UserAccount};

#[multiversx_sc::module]
pub trait Storage {
    /// Id of the open round. Starts at 1.
    #[view(currentRound)]
    #[storage_mapper("current_round")]
    fn current_round(&self) -> SingleValueMapper<u64>;

    #[view(getCurrentRoundStart)]
    #[storage_mapper("round_start_timestamp")]
    fn round_start_timestamp(&self) -> SingleValueMapper<u64>;

    /// Points accrued by all holders in the open round, up to `last_points_update`.
    #[storage_mapper("round_points")]
    fn round_points(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("last_points_update")]
    fn last_points_update(&self) -> SingleValueMapper<u64>;

    /// Sum of every tracked receipt balance.
    #[view(getTrackedSupply)]
    #[storage_mapper("tracked_supply")]
    fn tracked_supply(&self) -> SingleValueMapper<BigUint>;

    /// Settled rounds, immutable once written.
    #[view(getRound)]
    #[storage_mapper("rounds")]
    fn rounds(&self, round_id: u64) -> SingleValueMapper<Round<Self::Api>>;

    /// `cumulative_yield_index` of the last closed round.
    #[view(getYieldIndex)]
    #[storage_mapper("yield_index")]
    fn yield_index(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("user_account")]
    fn user_account(&self, user: &ManagedAddress) -> SingleValueMapper<UserAccount<Self::Api>>;

    /// Points written at the user's checkpoints. Rounds the user never touched are
    /// derived from `balance_history`.
    #[storage_mapper("user_round_points")]
    fn user_round_points(&self, user: &ManagedAddress, round_id: u64) -> SingleValueMapper<BigUint>;

    /// One entry per round in which the user's balance changed, ordered by round.
    #[storage_mapper("balance_history")]
    fn balance_history(&self, user: &ManagedAddress) -> VecMapper<BalanceCheckpoint<Self::Api>>;

    /// Yield handed in for rounds that closed without any points.
    #[view(getUndistributedYield)]
    #[storage_mapper("undistributed_yield")]
    fn undistributed_yield(&self) -> SingleValueMapper<BigUint>;

    #[view(getYieldToken)]
    #[storage_mapper("yield_token")]
    fn yield_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Contract whose balance changes drive the checkpoints.
    #[view(getReceiptSource)]
    #[storage_mapper("receipt_source")]
    fn receipt_source(&self) -> SingleValueMapper<ManagedAddress>;
}
