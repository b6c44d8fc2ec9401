#![no_std]

multiversx_sc::imports!();

pub mod accrual;
pub mod storage;
pub mod views;

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

use common_constants::FIRST_ROUND;
use common_periphery::rescue;

/// Round-based yield distributor for an interest-bearing receipt balance.
///
/// The receipt source reports every balance change through `onBalanceChange`; holders
/// accrue `balance * seconds` points; the owner settles the open round with
/// `distributeYield`, which splits the injected yield pro rata to the round's points.
#[multiversx_sc::contract]
pub trait YieldDistributor:
    storage::Storage
    + accrual::AccrualModule
    + views::ViewsModule
    + rescue::RescueModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// # Arguments
    /// - `receipt_source`: Contract allowed to report balance changes (the pool).
    /// - `yield_token`: Underlying asset injected as yield and paid out on claim.
    #[init]
    fn init(&self, receipt_source: ManagedAddress, yield_token: TokenIdentifier) {
        require!(!receipt_source.is_zero(), ERROR_INVALID_ADDRESS);
        require!(yield_token.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);

        let now = self.blockchain().get_block_timestamp();
        self.receipt_source().set(&receipt_source);
        self.yield_token().set(&yield_token);
        self.current_round().set(FIRST_ROUND);
        self.round_start_timestamp().set(now);
        self.last_points_update().set(now);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Balance-change hook. Accrues the account with `old_balance` up to now, then
    /// switches it to `new_balance`. Called once per side of every mint, burn or transfer.
    #[endpoint(onBalanceChange)]
    fn on_balance_change(&self, user: ManagedAddress, old_balance: BigUint, new_balance: BigUint) {
        require!(
            self.blockchain().get_caller() == self.receipt_source().get(),
            ERROR_ONLY_RECEIPT_SOURCE
        );

        let now = self.blockchain().get_block_timestamp();
        self.accrue_round_points(now);

        let mut account = self.load_account(&user, now);
        require!(account.balance == old_balance, ERROR_BALANCE_OUT_OF_SYNC);
        self.settle_account(&user, &mut account, now);

        self.tracked_supply().update(|supply| {
            *supply -= &old_balance;
            *supply += &new_balance;
        });
        account.balance = new_balance;
        self.user_account(&user).set(&account);

        let round_id = account.last_checkpoint_round;
        self.record_balance(&user, round_id, &account.balance);
        self.balance_checkpoint_event(
            &user,
            round_id,
            &self.user_round_points(&user, round_id).get(),
            &account.balance,
        );
    }

    /// Closes the open round and assigns `yield_amount` to its points.
    ///
    /// A round without points keeps the yield as undistributed; it can be recovered
    /// with `rescueToken`.
    ///
    /// # Payment
    /// - Exactly `yield_amount` of the yield token.
    #[only_owner]
    #[payable("*")]
    #[endpoint(distributeYield)]
    fn distribute_yield(&self, yield_amount: BigUint) {
        require!(yield_amount > 0u64, ERROR_ZERO_AMOUNT);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == EgldOrEsdtTokenIdentifier::esdt(self.yield_token().get())
                && payment.amount == yield_amount,
            ERROR_INVALID_YIELD_PAYMENT
        );

        let now = self.blockchain().get_block_timestamp();
        self.accrue_round_points(now);

        let round_id = self.current_round().get();
        let total_points = self.round_points().take();
        let mut round = Round {
            id: round_id,
            start_timestamp: self.round_start_timestamp().get(),
            end_timestamp: now,
            yield_per_point: self.ray_ratio(&yield_amount, &total_points),
            total_points,
            yield_amount,
            cumulative_yield_index: BigUint::zero(),
        };

        let yield_index = self.yield_index().get() + self.full_round_yield_index(&round);
        self.yield_index().set(&yield_index);
        round.cumulative_yield_index = yield_index;

        if !round.has_participants() {
            self.undistributed_yield()
                .update(|amount| *amount += &round.yield_amount);
            self.yield_undistributed_event(round_id, &round.yield_amount);
        }

        self.rounds(round_id).set(&round);
        self.current_round().set(round_id + 1);
        self.round_start_timestamp().set(now);

        self.yield_distributed_event(&round);
    }

    /// Pays the caller's pending yield in the yield token. Zero pending is a no-op.
    #[endpoint(claimYield)]
    fn claim_yield(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        if self.user_account(&caller).is_empty() {
            return BigUint::zero();
        }

        let now = self.blockchain().get_block_timestamp();
        self.accrue_round_points(now);

        let mut account = self.user_account(&caller).get();
        self.settle_account(&caller, &mut account, now);

        let amount = core::mem::replace(&mut account.pending_yield, BigUint::zero());
        account.claimed_yield += &amount;
        self.user_account(&caller).set(&account);

        self.tx()
            .to(&caller)
            .single_esdt(&self.yield_token().get(), 0, &amount)
            .transfer_if_not_empty();

        self.yield_claimed_event(&caller, &amount);
        amount
    }
}
