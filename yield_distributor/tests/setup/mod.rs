use crate::constants::*;

use common_proxies::{pool_proxy, yield_distributor_proxy};
use common_structs::{Round, UserAccount};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(YIELD_DISTRIBUTOR_PATH, yield_distributor::ContractBuilder);
    blockchain.register_contract(LENDING_POOL_MOCK_PATH, lending_pool_mock::ContractBuilder);

    blockchain
}

pub fn wad(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount as u128 * WAD)
}

pub struct DistributorTestState {
    pub world: ScenarioWorld,
    pub distributor_sc: ManagedAddress<StaticApi>,
    pub pool_sc: Option<ManagedAddress<StaticApi>>,
}

impl DistributorTestState {
    /// Distributor whose balance hooks are driven directly by `RECEIPT_SOURCE`.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let distributor_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .init(RECEIPT_SOURCE.to_managed_address(), YIELD_TOKEN.to_token_identifier())
            .code(YIELD_DISTRIBUTOR_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            distributor_sc,
            pool_sc: None,
        }
    }

    /// Distributor hooked to a lending pool reserve of `YIELD_TOKEN`.
    pub fn with_pool() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let pool_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(pool_proxy::LendingPoolProxy)
            .init(FLASH_LOAN_PREMIUM_BPS)
            .code(LENDING_POOL_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .add_reserve(YIELD_TOKEN.to_token_identifier())
            .run();

        let distributor_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .init(&pool_sc, YIELD_TOKEN.to_token_identifier())
            .code(YIELD_DISTRIBUTOR_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .set_yield_distributor(YIELD_TOKEN.to_token_identifier(), &distributor_sc)
            .run();

        Self {
            world,
            distributor_sc,
            pool_sc: Some(pool_sc),
        }
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn balance_change(
        &mut self,
        user: &TestAddress,
        old_balance: BigUint<StaticApi>,
        new_balance: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(RECEIPT_SOURCE)
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .on_balance_change(user.to_managed_address(), old_balance, new_balance)
            .run();
    }

    pub fn balance_change_error(
        &mut self,
        from: &TestAddress,
        user: &TestAddress,
        old_balance: BigUint<StaticApi>,
        new_balance: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .on_balance_change(user.to_managed_address(), old_balance, new_balance)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Moves `amount` of tracked balance from `from` to `to`, reporting both sides.
    pub fn transfer(
        &mut self,
        from: &TestAddress,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        let from_balance = self.user_account(from).balance;
        let to_balance = self.user_account(to).balance;

        self.balance_change(from, from_balance.clone(), from_balance - &amount);
        self.balance_change(to, to_balance.clone(), to_balance + &amount);
    }

    pub fn distribute(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .distribute_yield(&amount)
            .single_esdt(&YIELD_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn distribute_error(
        &mut self,
        from: &TestAddress,
        token: &EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: BigUint<StaticApi>,
        paid: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .distribute_yield(&amount)
            .egld_or_single_esdt(token, 0, &paid)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(user.to_managed_address())
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .claim_yield()
            .returns(ReturnsResult)
            .run()
    }

    pub fn rescue(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .rescue_token(
                EgldOrEsdtTokenIdentifier::esdt(YIELD_TOKEN.to_token_identifier()),
                OWNER_ADDRESS.to_managed_address(),
                amount,
            );

        match error_message {
            Some(message) => call
                .returns(ExpectMessage(core::str::from_utf8(message).unwrap()))
                .run(),
            None => call.run(),
        }
    }

    pub fn pending_yield(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .get_pending_yield(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_round_point(&mut self, user: &TestAddress, round_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .get_user_round_point(user.to_managed_address(), round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_account(&mut self, user: &TestAddress) -> UserAccount<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .user_account(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn round(&mut self, round_id: u64) -> Round<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .rounds(round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn yield_index(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .yield_index()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_round(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .current_round()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_round_total_point(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .current_round_total_point()
            .returns(ReturnsResult)
            .run()
    }

    pub fn tracked_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .tracked_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn undistributed_yield(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.distributor_sc)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .undistributed_yield()
            .returns(ReturnsResult)
            .run()
    }

    fn pool(&self) -> ManagedAddress<StaticApi> {
        self.pool_sc.clone().expect("pool not deployed")
    }

    pub fn pool_supply(&mut self, user: &TestAddress, amount: BigUint<StaticApi>) {
        let pool = self.pool();
        self.world
            .tx()
            .from(user.to_managed_address())
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .supply(user.to_managed_address())
            .single_esdt(&YIELD_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn pool_withdraw(&mut self, user: &TestAddress, amount: BigUint<StaticApi>) {
        let pool = self.pool();
        self.world
            .tx()
            .from(user.to_managed_address())
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .withdraw(YIELD_TOKEN.to_token_identifier(), amount, user.to_managed_address())
            .run();
    }

    pub fn pool_transfer_receipt(
        &mut self,
        from: &TestAddress,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        let pool = self.pool();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .transfer_receipt(YIELD_TOKEN.to_token_identifier(), to.to_managed_address(), amount)
            .run();
    }

    pub fn receipt_balance(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        let pool = self.pool();
        self.world
            .query()
            .to(&pool)
            .typed(pool_proxy::LendingPoolProxy)
            .receipt_balance(YIELD_TOKEN.to_token_identifier(), user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(YIELD_TOKEN, wad(1_000_000))
        .esdt_balance(OTHER_TOKEN, wad(1_000_000));

    world.account(RECEIPT_SOURCE).nonce(1);

    for holder in [HOLDER_1, HOLDER_2, HOLDER_3] {
        world
            .account(holder)
            .nonce(1)
            .esdt_balance(YIELD_TOKEN, wad(10_000));
    }
}
