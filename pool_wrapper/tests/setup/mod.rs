use crate::constants::*;

use common_proxies::{
    gas_refund_proxy, pool_proxy, pool_wrapper_proxy, wegld_proxy, yield_distributor_proxy,
};
use multiversx_sc::types::{
    BigUint, CodeMetadata, EgldOrEsdtTokenIdentifier, EsdtLocalRole, ManagedAddress, ManagedBuffer,
    ManagedVec, ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub static WEGLD_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_WRAPPER_PATH, pool_wrapper::ContractBuilder);
    blockchain.register_contract(LENDING_POOL_MOCK_PATH, lending_pool_mock::ContractBuilder);
    blockchain.register_contract(GAS_REFUND_PATH, gas_refund::ContractBuilder);
    blockchain.register_contract(YIELD_DISTRIBUTOR_PATH, yield_distributor::ContractBuilder);
    blockchain.register_contract(WEGLD_SWAP_PATH, multiversx_wegld_swap_sc::ContractBuilder);

    blockchain
}

pub fn usdc(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

pub fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount as u128 * WAD)
}

fn expect_error(error_message: &[u8]) -> ExpectMessage<'_> {
    ExpectMessage(core::str::from_utf8(error_message).unwrap())
}

pub struct WrapperTestState {
    pub world: ScenarioWorld,
    pub pool_sc: ManagedAddress<StaticApi>,
    pub wegld_sc: ManagedAddress<StaticApi>,
    pub wrapper_sc: ManagedAddress<StaticApi>,
    pub gas_refund_sc: Option<ManagedAddress<StaticApi>>,
    pub yield_distributor_sc: Option<ManagedAddress<StaticApi>>,
}

impl WrapperTestState {
    pub fn new() -> Self {
        let mut state = Self::deploy();

        // The provider's WEGLD is minted through the swap so unwraps stay backed
        state.wrap_egld(&LIQUIDITY_PROVIDER, egld(10_000));
        state.pool_supply(&LIQUIDITY_PROVIDER, USDC_TOKEN, usdc(1_000_000));
        state.pool_supply(&LIQUIDITY_PROVIDER, WEGLD_TOKEN, egld(10_000));

        state
    }

    /// Pool, swap and wrapper with no liquidity supplied yet.
    fn deploy() -> Self {
        let mut world = world();
        setup_accounts(&mut world);

        let pool_sc = setup_pool(&mut world);
        let wegld_sc = setup_wegld_swap(&mut world);

        let wrapper_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .init(&pool_sc, &wegld_sc, WEGLD_TOKEN.to_token_identifier())
            .code(POOL_WRAPPER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            pool_sc,
            wegld_sc,
            wrapper_sc,
            gas_refund_sc: None,
            yield_distributor_sc: None,
        }
    }

    /// Wrapper over an empty USDC reserve whose receipt balances feed a yield
    /// distributor paying out USDC. Owner and second user hold a little USDC.
    pub fn with_yield_distributor() -> Self {
        let mut state = Self::deploy();
        state.world.current_block().block_timestamp(0);

        let pool_sc = state.pool_sc.clone();
        let distributor_sc = state
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .init(&pool_sc, USDC_TOKEN.to_token_identifier())
            .code(YIELD_DISTRIBUTOR_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        state
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .set_yield_distributor(USDC_TOKEN.to_token_identifier(), &distributor_sc)
            .run();

        for account in [OWNER_ADDRESS, OTHER_USER_ADDRESS] {
            state
                .world
                .tx()
                .from(LIQUIDITY_PROVIDER)
                .to(account)
                .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &usdc(10))
                .raw_call("")
                .run();
        }

        state.yield_distributor_sc = Some(distributor_sc);
        state
    }

    /// Wrapper wired to a funded gas rebate ledger.
    pub fn with_gas_refund() -> Self {
        let mut state = Self::new();

        let gas_refund_sc = state
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(gas_refund_proxy::GasRefundProxy)
            .init(&state.wrapper_sc)
            .code(GAS_REFUND_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        state
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&gas_refund_sc)
            .typed(gas_refund_proxy::GasRefundProxy)
            .fund()
            .egld(egld(10))
            .run();

        state.set_gas_refund(&OWNER_ADDRESS, &gas_refund_sc, None);
        state.gas_refund_sc = Some(gas_refund_sc);

        state
    }

    pub fn wrap_egld(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wegld_sc)
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .wrap_egld()
            .egld(amount)
            .run();
    }

    pub fn pool_supply(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .supply(from.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn approve_receipt(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        let wrapper = self.wrapper_sc.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .approve_receipt(token.to_token_identifier(), wrapper, amount)
            .run();
    }

    pub fn approve_delegation(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        let wrapper = self.wrapper_sc.clone();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .approve_delegation(token.to_token_identifier(), wrapper, amount)
            .run();
    }

    pub fn set_gas_refund(
        &mut self,
        from: &TestAddress,
        gas_refund: &ManagedAddress<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .set_gas_refund(gas_refund);

        match error_message {
            Some(message) => tx.returns(expect_error(message)).run(),
            None => tx.run(),
        }
    }

    pub fn supply_token(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        on_behalf_of: &TestAddress,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .supply_token(on_behalf_of.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn supply_token_error(
        &mut self,
        from: &TestAddress,
        payment: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .supply_token(from.to_managed_address())
            .egld_or_single_esdt(&payment, 0, &amount)
            .returns(expect_error(error_message))
            .run();
    }

    pub fn supply_egld(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        on_behalf_of: &TestAddress,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .supply_egld(on_behalf_of.to_managed_address())
            .egld(amount)
            .run();
    }

    pub fn supply_egld_error(
        &mut self,
        from: &TestAddress,
        payment: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .supply_egld(from.to_managed_address())
            .egld_or_single_esdt(&payment, 0, &amount)
            .returns(expect_error(error_message))
            .run();
    }

    pub fn withdraw_token(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        to: &TestAddress,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .withdraw_token(token.to_token_identifier(), amount, to.to_managed_address());

        match error_message {
            Some(message) => tx.returns(expect_error(message)).run(),
            None => tx.run(),
        }
    }

    pub fn withdraw_egld(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, to: &TestAddress) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .withdraw_egld(amount, to.to_managed_address())
            .run();
    }

    pub fn borrow_token(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .borrow_token(token.to_token_identifier(), amount, VARIABLE_RATE);

        match error_message {
            Some(message) => tx.returns(expect_error(message)).run(),
            None => tx.run(),
        }
    }

    pub fn borrow_egld(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .borrow_egld(amount, VARIABLE_RATE)
            .run();
    }

    pub fn repay_token(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        on_behalf_of: &TestAddress,
        error_message: Option<&[u8]>,
    ) {
        let token_id = token.to_token_identifier();
        let tx = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .repay_token(VARIABLE_RATE, on_behalf_of.to_managed_address())
            .single_esdt(&token_id, 0, &amount);

        match error_message {
            Some(message) => tx.returns(expect_error(message)).run(),
            None => tx.run(),
        }
    }

    pub fn repay_egld(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        on_behalf_of: &TestAddress,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .repay_egld(VARIABLE_RATE, on_behalf_of.to_managed_address())
            .egld(amount)
            .run();
    }

    pub fn leverage_esdt(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        principal: BigUint<StaticApi>,
        extra: BigUint<StaticApi>,
    ) {
        let token_id = token.to_token_identifier();
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .leverage_deposit(
                EgldOrEsdtTokenIdentifier::esdt(token_id.clone()),
                &principal,
                extra,
            )
            .single_esdt(&token_id, 0, &principal)
            .run();
    }

    pub fn receipt_balance(
        &mut self,
        token: TestTokenIdentifier,
        user: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .receipt_balance(token.to_token_identifier(), user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt_balance(
        &mut self,
        token: TestTokenIdentifier,
        user: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .debt_balance(token.to_token_identifier(), user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn gas_balance(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        let gas_refund_sc = self.gas_refund_sc.clone().unwrap();
        self.world
            .query()
            .to(&gas_refund_sc)
            .typed(gas_refund_proxy::GasRefundProxy)
            .gas_balance(user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn claim_gas(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        let gas_refund_sc = self.gas_refund_sc.clone().unwrap();
        self.world
            .tx()
            .from(user.to_managed_address())
            .to(&gas_refund_sc)
            .typed(gas_refund_proxy::GasRefundProxy)
            .claim_gas()
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_pending_leverage(&mut self) -> bool {
        self.world
            .query()
            .to(&self.wrapper_sc)
            .typed(pool_wrapper_proxy::PoolWrapperProxy)
            .has_pending_leverage()
            .returns(ReturnsResult)
            .run()
    }

    /// `from` asks the pool for a single asset flash loan paid into the wrapper.
    pub fn flash_loan_into_wrapper(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let mut assets = ManagedVec::new();
        assets.push(token.to_token_identifier());
        let mut amounts = ManagedVec::new();
        amounts.push(amount);
        let mut modes = ManagedVec::new();
        modes.push(0u64);

        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .flash_loan(
                &self.wrapper_sc,
                assets,
                amounts,
                modes,
                from.to_managed_address(),
                ManagedBuffer::new(),
                0u16,
            )
            .returns(expect_error(error_message))
            .run();
    }

    fn distributor(&self) -> ManagedAddress<StaticApi> {
        self.yield_distributor_sc.clone().expect("distributor not deployed")
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn distribute_yield(&mut self, amount: BigUint<StaticApi>) {
        let distributor = self.distributor();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .distribute_yield(&amount)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn claim_yield(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        let distributor = self.distributor();
        self.world
            .tx()
            .from(user.to_managed_address())
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .claim_yield()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pending_yield(&mut self, user: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        let distributor = self.distributor();
        self.world
            .query()
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .get_pending_yield(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_round_point(
        &mut self,
        user: &ManagedAddress<StaticApi>,
        round_id: u64,
    ) -> BigUint<StaticApi> {
        let distributor = self.distributor();
        self.world
            .query()
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .get_user_round_point(user, round_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_round(&mut self) -> u64 {
        let distributor = self.distributor();
        self.world
            .query()
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .current_round()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_round_total_point(&mut self) -> BigUint<StaticApi> {
        let distributor = self.distributor();
        self.world
            .query()
            .to(&distributor)
            .typed(yield_distributor_proxy::YieldDistributorProxy)
            .current_round_total_point()
            .returns(ReturnsResult)
            .run()
    }

    /// Direct receipt transfer on the pool, outside the wrapper.
    pub fn transfer_receipt(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .transfer_receipt(token.to_token_identifier(), to.to_managed_address(), amount)
            .run();
    }

    pub fn premium_of(&self, amount: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        amount * &BigUint::from(FLASH_LOAN_PREMIUM_BPS) / &BigUint::from(10_000u64)
    }

    /// Checks that the wrapper ends an operation without custody of anything.
    pub fn check_wrapper_is_empty(&mut self) {
        let wrapper = self.wrapper_sc.clone();
        self.world
            .check_account(wrapper)
            .balance(BigUint::<StaticApi>::zero())
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::zero())
            .esdt_balance(WEGLD_TOKEN, BigUint::<StaticApi>::zero());
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1).balance(egld(100));

    world
        .account(LIQUIDITY_PROVIDER)
        .nonce(1)
        .balance(egld(100_000))
        .esdt_balance(USDC_TOKEN, usdc(10_000_000));

    world
        .account(USER_ADDRESS)
        .nonce(1)
        .balance(egld(1_000))
        .esdt_balance(USDC_TOKEN, usdc(100_000));

    world.account(OTHER_USER_ADDRESS).nonce(1);
}

pub fn setup_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let pool_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(pool_proxy::LendingPoolProxy)
        .init(FLASH_LOAN_PREMIUM_BPS)
        .code(LENDING_POOL_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for token in [USDC_TOKEN, WEGLD_TOKEN] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&pool_sc)
            .typed(pool_proxy::LendingPoolProxy)
            .add_reserve(token.to_token_identifier())
            .run();
    }

    pool_sc
}

pub fn setup_wegld_swap(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let wegld_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(wegld_proxy::EgldEsdtSwapProxy)
        .init(WEGLD_TOKEN.to_token_identifier())
        .code(WEGLD_SWAP_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(wegld_sc.clone(), WEGLD_TOKEN.as_bytes(), WEGLD_ROLES);

    wegld_sc
}
