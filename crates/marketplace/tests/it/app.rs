use crate::utils::*;
use alloy_primitives::{Address, U256, address};
use marketplace::{App, NO_DEPLOYMENT_ALERT, NO_WALLET_ALERT, Phase, ViewState};
use marketplace_gateway::MarketplaceApi;

const MAINNET_MARKETPLACE: Address = address!("0x1111111111111111111111111111111111111111");
const GANACHE_MARKETPLACE: Address = address!("0xe78A0F7E598Cc8b0Bb87894B0F60dD2a88d6a8Ab");
const ANVIL_MARKETPLACE: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

const NETWORKS: [(u64, Address); 3] =
    [(1, MAINNET_MARKETPLACE), (1337, ANVIL_MARKETPLACE), (5777, GANACHE_MARKETPLACE)];

fn app(wallet: Option<MockWallet>, connector: &MockConnector) -> (TestApp, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let app = App::new(wallet, connector.clone(), notifier.clone(), artifact(&NETWORKS), 1);
    (app, notifier)
}

async fn loaded(products: Vec<marketplace_gateway::Product>) -> (TestApp, MockConnector) {
    let connector = MockConnector::with_products(products);
    let (mut app, _) = app(Some(MockWallet::on(1)), &connector);
    app.init().await;
    assert_eq!(app.state().phase, Phase::Loaded);
    (app, connector)
}

#[tokio::test]
async fn starts_loading() {
    let connector = MockConnector::default();
    let (app, _) = app(Some(MockWallet::on(1)), &connector);
    let state = app.state();
    assert_eq!(state, ViewState::default());
    assert!(state.loading);
    assert_eq!(state.phase, Phase::Uninitialized);
    assert!(app.gateway().is_none());
}

#[tokio::test]
async fn binds_deployment_of_connected_network() {
    for (chain_id, address) in NETWORKS {
        let connector = MockConnector::default();
        let (mut app, notifier) = app(Some(MockWallet::on(chain_id)), &connector);
        app.init().await;

        assert_eq!(app.gateway().map(|gateway| gateway.address()), Some(address), "{chain_id}");
        assert_eq!(*connector.bound.lock().unwrap(), vec![(address, ALICE)]);
        assert!(notifier.alerts().is_empty());
        let state = app.state();
        assert_eq!(state.phase, Phase::Loaded);
        assert_eq!(state.account, Some(ALICE));
        assert!(!state.loading);
    }
}

#[tokio::test]
async fn unknown_network_alerts() {
    let connector = MockConnector::with_products(vec![product(1, "iPhone X", 1)]);
    let (mut app, notifier) = app(Some(MockWallet::on(42)), &connector);
    app.init().await;

    assert_eq!(notifier.alerts(), vec![NO_DEPLOYMENT_ALERT.to_string()]);
    assert!(app.gateway().is_none());
    assert!(connector.calls().is_empty());
    let state = app.state();
    assert_eq!(state.phase, Phase::Unavailable);
    assert_eq!(state.account, Some(ALICE));
    assert!(state.loading);
}

#[tokio::test]
async fn missing_wallet_alerts() {
    let connector = MockConnector::default();
    let (mut app, notifier) = app(None, &connector);
    app.init().await;

    assert_eq!(notifier.alerts(), vec![NO_WALLET_ALERT.to_string()]);
    assert!(connector.bound.lock().unwrap().is_empty());
    let state = app.state();
    assert_eq!(state.phase, Phase::Unavailable);
    assert_eq!(state.account, None);
    assert!(state.loading);
}

#[tokio::test]
async fn rejected_authorization_stops_loading() {
    let connector = MockConnector::default();
    let wallet = MockWallet { reject: true, ..MockWallet::on(1) };
    let (mut app, notifier) = app(Some(wallet), &connector);
    app.init().await;

    assert!(notifier.alerts().is_empty());
    assert!(app.gateway().is_none());
    let state = app.state();
    assert_eq!(state.phase, Phase::Connecting);
    assert_eq!(state.account, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn unexpected_network_still_loads() {
    let connector = MockConnector::default();
    let (mut app, _) = app(Some(MockWallet::on(5777)), &connector);
    app.init().await;
    assert_eq!(app.state().phase, Phase::Loaded);
    assert_eq!(app.gateway().map(|gateway| gateway.address()), Some(GANACHE_MARKETPLACE));
}

#[tokio::test]
async fn empty_catalog() {
    let (app, connector) = loaded(vec![]).await;
    let state = app.state();
    assert_eq!(state.product_count, 0);
    assert!(state.products.is_empty());
    assert!(!state.loading);
    assert_eq!(connector.calls(), vec![Call::ProductCount]);
}

#[tokio::test]
async fn reads_products_in_id_order() {
    let products = vec![
        product(1, "iPhone X", 1_000_000_000_000_000_000),
        product(2, "Galaxy", 500_000_000_000_000_000),
        product(3, "Pixel", 250_000_000_000_000_000),
    ];
    let (app, connector) = loaded(products.clone()).await;

    similar_asserts::assert_eq!(
        connector.calls(),
        vec![Call::ProductCount, Call::Product(1), Call::Product(2), Call::Product(3)]
    );
    let state = app.state();
    assert_eq!(state.product_count, 3);
    similar_asserts::assert_eq!(state.products, products);
}

#[tokio::test]
async fn failed_read_aborts_load() {
    let connector = MockConnector::with_products(
        (1..=4).map(|id| product(id, &format!("product {id}"), 1)).collect(),
    );
    connector.ledger.lock().unwrap().fail_read = Some(2);
    let (mut app, notifier) = app(Some(MockWallet::on(1)), &connector);
    app.init().await;

    assert_eq!(connector.calls(), vec![Call::ProductCount, Call::Product(1), Call::Product(2)]);
    assert!(notifier.alerts().is_empty());
    let state = app.state();
    assert_eq!(state.phase, Phase::Connecting);
    assert_eq!(state.product_count, 4);
    assert!(state.products.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn purchase_pays_price_in_wei() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    let tx_hash = app.purchase_product(1, "1.5").await;

    assert!(tx_hash.is_some());
    assert_eq!(
        connector.calls().last(),
        Some(&Call::PurchaseProduct(1, U256::from(1_500_000_000_000_000_000u128)))
    );
}

#[tokio::test]
async fn invalid_price_is_not_submitted() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    assert!(app.purchase_product(1, "one and a half").await.is_none());
    assert!(!app.state().loading);
    assert!(!connector.calls().iter().any(|call| matches!(call, Call::PurchaseProduct(..))));
}

#[tokio::test]
async fn transactions_toggle_loading() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    connector.observe(&app);

    let price = U256::from(2_000_000_000_000_000_000u128);
    assert!(app.create_product("Galaxy", price).await.is_some());
    assert!(!app.state().loading);
    assert!(app.purchase_product(1, "0.000000000000000001").await.is_some());
    assert!(!app.state().loading);

    assert_eq!(connector.ledger.lock().unwrap().loading_seen, vec![true, true]);
    assert_eq!(app.state().phase, Phase::Loaded);
}

#[tokio::test]
async fn failed_transactions_clear_loading() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    connector.ledger.lock().unwrap().fail_writes = true;
    connector.observe(&app);

    assert!(app.create_product("Galaxy", U256::from(1)).await.is_none());
    assert!(!app.state().loading);
    assert!(app.purchase_product(1, "1").await.is_none());
    assert!(!app.state().loading);

    assert_eq!(connector.ledger.lock().unwrap().loading_seen, vec![true, true]);
    assert_eq!(app.state().phase, Phase::Loaded);
}

#[tokio::test]
async fn transactions_before_load_fail() {
    let connector = MockConnector::default();
    let (mut app, _) = app(Some(MockWallet::on(1)), &connector);
    assert!(app.create_product("Galaxy", U256::from(1)).await.is_none());
    assert!(app.purchase_product(1, "1").await.is_none());
    assert!(!app.state().loading);
    assert!(connector.calls().is_empty());
}

#[tokio::test]
async fn writes_do_not_reload_catalog() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    let before = app.state();
    app.create_product("Galaxy", U256::from(1)).await;

    let state = app.state();
    assert_eq!(state.products, before.products);
    assert_eq!(state.product_count, 1);
    let reads = connector.calls().iter().filter(|call| **call == Call::ProductCount).count();
    assert_eq!(reads, 1);
}

#[tokio::test]
async fn refresh_reads_new_products() {
    let (mut app, connector) = loaded(vec![product(1, "iPhone X", 1)]).await;
    app.create_product("Galaxy", U256::from(7)).await;
    app.refresh().await;

    let state = app.state();
    assert_eq!(state.product_count, 2);
    assert_eq!(state.products[1].name, "Galaxy");
    assert_eq!(state.products[1].owner, ALICE);
    assert!(!state.loading);
    assert_eq!(connector.bound.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn publishes_state_changes() {
    let connector = MockConnector::with_products(vec![product(1, "iPhone X", 1)]);
    let (mut app, _) = app(Some(MockWallet::on(1)), &connector);
    let mut rx = app.subscribe();
    assert!(!rx.has_changed().unwrap());

    app.init().await;
    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.phase, Phase::Loaded);
    assert_eq!(state.products.len(), 1);
}

#[tokio::test]
async fn failed_load_keeps_actions_available() {
    let connector = MockConnector::default();
    let wallet = MockWallet { reject: true, ..MockWallet::on(1) };
    let (mut app, _) = app(Some(wallet), &connector);
    app.init().await;
    assert!(marketplace::view::accepts_actions(&app.state()));

    assert!(app.create_product("Galaxy", U256::from(1)).await.is_none());
    assert!(app.purchase_product(1, "1").await.is_none());
    let state = app.state();
    assert!(!state.loading);
    assert_eq!(state.phase, Phase::Connecting);
}
