use {
    crate::{
        domain::Error,
        infra::{
            Config,
            token::MockToken,
            wallet::{UNRECOGNIZED_CHAIN, USER_REJECTED},
        },
        tests::setup::{self, ACCOUNT, Observer},
    },
    mockall::predicate::eq,
};

#[tokio::test]
async fn provider_missing() {
    let session = setup::session(None, MockToken::new());

    let result = session.connect().await;

    assert!(matches!(result, Err(Error::ProviderMissing)));
    let state = session.state();
    assert_eq!(
        state.status,
        "MetaMask not detected. Please install MetaMask to continue."
    );
    assert!(!state.busy);
    assert_eq!(state.account, None);
}

#[tokio::test]
async fn connects_on_donation_chain() {
    let (mut wallet, _accounts) = setup::wallet_on_donation_chain();
    wallet.expect_switch_chain().never();
    let session = setup::session(
        Some(wallet),
        setup::token_with_balance(setup::usdt(5_000000), 1),
    );

    assert_eq!(session.connect().await.unwrap(), ACCOUNT);

    let state = session.state();
    assert_eq!(state.account, Some(ACCOUNT));
    assert_eq!(state.balance, Some(setup::usdt(5_000000)));
    assert!(state.sufficient);
    assert!(!state.busy);
    assert_eq!(state.status, "Wallet connected successfully.");
}

#[tokio::test]
async fn switches_to_donation_chain() {
    let observer = Observer::default();
    let (mut wallet, _accounts) = setup::wallet_on_other_chain();
    wallet
        .expect_switch_chain()
        .with(eq(137))
        .times(1)
        .returning({
            let observer = observer.clone();
            move |_| {
                let state = observer.state();
                assert_eq!(state.status, "Please switch to Polygon Mainnet");
                assert!(state.busy);
                Ok(())
            }
        });
    wallet.expect_add_chain().never();
    let session = setup::session(
        Some(wallet),
        setup::token_with_balance(setup::usdt(1_000000), 1),
    );
    observer.attach(&session);

    assert_eq!(session.connect().await.unwrap(), ACCOUNT);

    let state = session.state();
    assert_eq!(state.account, Some(ACCOUNT));
    assert_eq!(state.status, "Wallet connected successfully.");
    assert!(!state.busy);
}

#[tokio::test]
async fn adds_unknown_chain() {
    let (mut wallet, _accounts) = setup::wallet_on_other_chain();
    wallet
        .expect_switch_chain()
        .times(1)
        .returning(|_| Err(setup::rejected(UNRECOGNIZED_CHAIN)));
    wallet
        .expect_add_chain()
        .withf(|chain| *chain == Config::default().chain)
        .times(1)
        .returning(|_| Ok(()));
    let session = setup::session(
        Some(wallet),
        setup::token_with_balance(setup::usdt(0), 1),
    );

    assert_eq!(session.connect().await.unwrap(), ACCOUNT);
    assert_eq!(session.state().status, "Wallet connected successfully.");
}

#[tokio::test]
async fn adding_chain_fails() {
    let (mut wallet, _accounts) = setup::wallet_on_other_chain();
    wallet
        .expect_switch_chain()
        .times(1)
        .returning(|_| Err(setup::rejected(UNRECOGNIZED_CHAIN)));
    wallet
        .expect_add_chain()
        .times(1)
        .returning(|_| Err(setup::rejected(USER_REJECTED)));
    // The balance is never fetched.
    let session = setup::session(Some(wallet), MockToken::new());

    let result = session.connect().await;

    assert!(matches!(result, Err(Error::NetworkAddFailed { .. })));
    let state = session.state();
    assert_eq!(
        state.status,
        "Failed to add Polygon Mainnet network. Please add it manually."
    );
    assert_eq!(state.account, None);
    assert!(!state.busy);
}

#[tokio::test]
async fn switching_chain_fails() {
    let (mut wallet, _accounts) = setup::wallet_on_other_chain();
    wallet
        .expect_switch_chain()
        .times(1)
        .returning(|_| Err(setup::rejected(USER_REJECTED)));
    wallet.expect_add_chain().never();
    let session = setup::session(Some(wallet), MockToken::new());

    let result = session.connect().await;

    assert!(matches!(result, Err(Error::NetworkSwitchFailed { .. })));
    let state = session.state();
    assert_eq!(state.status, "Failed to switch to Polygon Mainnet network.");
    assert_eq!(state.account, None);
    assert!(!state.busy);
}

#[tokio::test]
async fn user_rejects_connection() {
    let mut wallet = crate::infra::wallet::MockWallet::new();
    wallet
        .expect_request_accounts()
        .times(1)
        .returning(|| Err(setup::rejected(USER_REJECTED)));
    wallet.expect_chain_id().never();
    let session = setup::session(Some(wallet), MockToken::new());

    let result = session.connect().await;

    assert!(matches!(result, Err(Error::UserRejected)));
    let state = session.state();
    assert_eq!(state.status, "Wallet connection request was rejected.");
    assert_eq!(state.account, None);
    assert!(!state.busy);
}

#[tokio::test]
async fn no_authorized_accounts() {
    let mut wallet = crate::infra::wallet::MockWallet::new();
    wallet
        .expect_request_accounts()
        .times(1)
        .returning(|| Ok(vec![]));
    let session = setup::session(Some(wallet), MockToken::new());

    assert!(matches!(session.connect().await, Err(Error::UserRejected)));
    assert_eq!(session.state().account, None);
}

#[tokio::test]
async fn unexpected_wallet_error() {
    let mut wallet = crate::infra::wallet::MockWallet::new();
    wallet
        .expect_request_accounts()
        .times(1)
        .returning(|| Err(crate::infra::wallet::ProviderError::internal("wallet locked")));
    let session = setup::session(Some(wallet), MockToken::new());

    assert!(matches!(session.connect().await, Err(Error::Wallet(_))));
    assert_eq!(
        session.state().status,
        "Error connecting wallet: wallet locked"
    );
}

#[tokio::test]
async fn balance_failure_keeps_the_connection() {
    let (wallet, _accounts) = setup::wallet_on_donation_chain();
    let mut token = MockToken::new();
    token
        .expect_balance_of()
        .times(1)
        .returning(|_| Err(crate::infra::token::testing_error("header not found")));
    let session = setup::session(Some(wallet), token);

    assert_eq!(session.connect().await.unwrap(), ACCOUNT);

    let state = session.state();
    assert_eq!(state.account, Some(ACCOUNT));
    assert_eq!(state.balance, None);
    assert!(state.status.starts_with("Failed to fetch USDT balance: "));
    assert!(state.status.contains("header not found"));
}
