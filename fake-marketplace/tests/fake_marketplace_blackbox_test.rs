use multiversx_sc_scenario::imports::*;

use fake_marketplace::fake_marketplace_proxy::FakeMarketplaceProxy;

const CODE_PATH: MxscPath = MxscPath::new("output/fake-marketplace.mxsc.json");
const MARKETPLACE_ADDRESS: TestSCAddress = TestSCAddress::new("fake-marketplace");
const OWNER: TestAddress = TestAddress::new("owner");
const BUYER: TestAddress = TestAddress::new("buyer");
const LATECOMER: TestAddress = TestAddress::new("latecomer");

const ITEM_PRICE: u64 = 100;

fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, fake_marketplace::ContractBuilder);

    world.account(OWNER).nonce(1);
    world.account(BUYER).nonce(1).balance(1_000u64);
    world.account(LATECOMER).nonce(1).balance(1_000u64);

    world
        .tx()
        .from(OWNER)
        .typed(FakeMarketplaceProxy)
        .init(ITEM_PRICE)
        .code(CODE_PATH)
        .new_address(MARKETPLACE_ADDRESS)
        .run();
    world
}

#[test]
fn every_item_has_the_configured_price() {
    let mut world = world();

    for item_id in [0u64, 7, 42] {
        world
            .query()
            .to(MARKETPLACE_ADDRESS)
            .typed(FakeMarketplaceProxy)
            .get_price(item_id)
            .returns(ExpectValue(ITEM_PRICE))
            .run();
    }
}

#[test]
fn item_can_only_be_bought_once() {
    let mut world = world();

    world
        .tx()
        .from(BUYER)
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .purchase(7u64)
        .egld(ITEM_PRICE)
        .returns(ExpectValue(true))
        .run();

    world
        .query()
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .is_available(7u64)
        .returns(ExpectValue(false))
        .run();

    world
        .tx()
        .from(LATECOMER)
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .purchase(7u64)
        .egld(ITEM_PRICE)
        .returns(ExpectValue(false))
        .run();

    let owner = world
        .query()
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .owners(7u64)
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner, BUYER.to_managed_address());
}

#[test]
fn wrong_payment_is_rejected() {
    let mut world = world();

    world
        .tx()
        .from(BUYER)
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .purchase(7u64)
        .egld(ITEM_PRICE - 1)
        .returns(ExpectError(4, "Incorrect payment amount"))
        .run();

    world
        .query()
        .to(MARKETPLACE_ADDRESS)
        .typed(FakeMarketplaceProxy)
        .is_available(7u64)
        .returns(ExpectValue(true))
        .run();
    world.check_account(BUYER).balance(1_000u64);
}
