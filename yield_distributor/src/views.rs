multiversx_sc::imports!();

use common_structs::UserAccount;

use crate::{accrual, storage};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage + accrual::AccrualModule + common_math::SharedMathModule
{
    /// Points accrued by all holders in the open round, up to the current block.
    #[view(currentRoundTotalPoint)]
    fn current_round_total_point(&self) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let last_update = self.last_points_update().get();
        let stored = self.round_points().get();
        if now <= last_update {
            return stored;
        }

        stored + &self.tracked_supply().get() * &BigUint::from(now - last_update)
    }

    /// Points of `user` in `round_id`. The open round is reported up to the user's
    /// last checkpoint.
    #[view(getUserRoundPoint)]
    fn get_user_round_point(&self, user: ManagedAddress, round_id: u64) -> BigUint {
        let stored = self.user_round_points(&user, round_id).get();
        let mapper = self.user_account(&user);
        if mapper.is_empty() || round_id >= self.current_round().get() {
            return stored;
        }

        let account = mapper.get();
        if round_id == account.last_checkpoint_round {
            let round = self.rounds(round_id).get();
            return self.closed_round_points(&user, &account, &round);
        }
        if round_id > account.last_checkpoint_round {
            let held_for = BigUint::from(self.rounds(round_id).get().duration());
            return &account.balance * &held_for;
        }

        // Settled round: either the balance changed in it, or it was held whole
        match self.balance_at_round(&user, round_id) {
            Some(entry) if entry.round_id < round_id => {
                let held_for = BigUint::from(self.rounds(round_id).get().duration());
                &entry.balance * &held_for
            },
            _ => stored,
        }
    }

    /// Yield the user could claim right now.
    #[view(getPendingYield)]
    fn get_pending_yield(&self, user: ManagedAddress) -> BigUint {
        let mapper = self.user_account(&user);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let account = mapper.get();
        let current_round = self.current_round().get();
        if account.last_checkpoint_round >= current_round {
            return account.pending_yield;
        }

        let (_, owed) = self.closed_rounds_yield(&user, &account, current_round);
        account.pending_yield + owed
    }

    /// Stored account of `user`; an untracked address reads as an empty account.
    #[view(getUserAccount)]
    fn get_user_account(&self, user: ManagedAddress) -> UserAccount<Self::Api> {
        let now = self.blockchain().get_block_timestamp();
        self.load_account(&user, now)
    }
}
