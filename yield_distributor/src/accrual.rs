multiversx_sc::imports!();

use common_constants::RAY;
use common_structs::{BalanceCheckpoint, Round, UserAccount};

use crate::storage;

/// Time-weighted point accounting.
///
/// Points are `balance * seconds`. The open round keeps a running total fed by the
/// tracked supply; each account accrues its own share at its checkpoints. Between two
/// checkpoints the balance is constant, so the rounds closed in between are paid from
/// the cumulative yield index instead of being visited one by one.
#[multiversx_sc::module]
pub trait AccrualModule: storage::Storage + common_math::SharedMathModule {
    /// Brings the open round total up to `now` with the supply held since the last update.
    fn accrue_round_points(&self, now: u64) {
        let last_update = self.last_points_update().get();
        if now <= last_update {
            return;
        }

        let supply = self.tracked_supply().get();
        if supply > 0u64 {
            self.round_points()
                .update(|points| *points += &supply * &BigUint::from(now - last_update));
        }
        self.last_points_update().set(now);
    }

    /// RAY scaled yield one unit of balance earns over the whole of `round`, rounded down.
    fn full_round_yield_index(&self, round: &Round<Self::Api>) -> BigUint {
        if !round.has_participants() {
            return BigUint::zero();
        }

        let yield_time = &round.yield_amount * &BigUint::from(round.duration());
        self.mul_div_floor(&yield_time, &BigUint::from(RAY), &round.total_points)
    }

    fn load_account(&self, user: &ManagedAddress, now: u64) -> UserAccount<Self::Api> {
        let mapper = self.user_account(user);
        if mapper.is_empty() {
            return UserAccount::new(now, self.current_round().get());
        }

        mapper.get()
    }

    /// Folds the closed rounds since the account's last checkpoint into `pending_yield`,
    /// then accrues the open round up to `now`. Constant cost whatever the number of
    /// rounds closed in between.
    fn settle_account(&self, user: &ManagedAddress, account: &mut UserAccount<Self::Api>, now: u64) {
        let current_round = self.current_round().get();

        if account.last_checkpoint_round < current_round {
            let (checkpoint_points, owed) = self.closed_rounds_yield(user, account, current_round);
            self.user_round_points(user, account.last_checkpoint_round)
                .set(&checkpoint_points);
            account.pending_yield += owed;

            let round_start = self.round_start_timestamp().get();
            if account.last_checkpoint_time < round_start {
                account.last_checkpoint_time = round_start;
            }
            account.last_checkpoint_round = current_round;
        }

        let points = account.points_until(now);
        if points > 0u64 {
            self.user_round_points(user, current_round)
                .update(|stored| *stored += &points);
        }
        account.last_checkpoint_time = now;
    }

    /// Yield owed for the rounds closed since the checkpoint, with the final points of
    /// the checkpoint round. Requires `last_checkpoint_round < current_round`.
    ///
    /// The checkpoint round pays from its points; every later closed round was held
    /// whole at `account.balance` and pays `balance * index delta`.
    fn closed_rounds_yield(
        &self,
        user: &ManagedAddress,
        account: &UserAccount<Self::Api>,
        current_round: u64,
    ) -> (BigUint, BigUint) {
        let checkpoint_round = self.rounds(account.last_checkpoint_round).get();
        let points = self.closed_round_points(user, account, &checkpoint_round);
        let mut owed = checkpoint_round.share_of(&points);

        let held_whole_rounds = account.last_checkpoint_round + 1 < current_round;
        if held_whole_rounds && account.balance > 0u64 {
            let index_delta = self.yield_index().get() - &checkpoint_round.cumulative_yield_index;
            owed += self.mul_div_floor(&account.balance, &index_delta, &BigUint::from(RAY));
        }

        (points, owed)
    }

    /// Points of the account in its checkpoint round once that round has closed.
    fn closed_round_points(
        &self,
        user: &ManagedAddress,
        account: &UserAccount<Self::Api>,
        round: &Round<Self::Api>,
    ) -> BigUint {
        let stored = self.user_round_points(user, round.id).get();
        let held_for = BigUint::from(round.end_timestamp.saturating_sub(account.last_checkpoint_time));
        stored + &account.balance * &held_for
    }

    /// Keeps one history entry per round, holding the balance the round ended with.
    fn record_balance(&self, user: &ManagedAddress, round_id: u64, balance: &BigUint) {
        let mut history = self.balance_history(user);
        let entry = BalanceCheckpoint {
            round_id,
            balance: balance.clone(),
        };

        let len = history.len();
        if len > 0 && history.get(len).round_id == round_id {
            history.set(len, &entry);
        } else {
            history.push(&entry);
        }
    }

    /// Latest history entry at or before `round_id`, by binary search.
    fn balance_at_round(
        &self,
        user: &ManagedAddress,
        round_id: u64,
    ) -> Option<BalanceCheckpoint<Self::Api>> {
        let history = self.balance_history(user);
        let mut low = 1usize;
        let mut high = history.len();
        let mut found = None;

        while low <= high {
            let mid = low + (high - low) / 2;
            let entry = history.get(mid);
            if entry.round_id <= round_id {
                found = Some(entry);
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        found
    }
}
