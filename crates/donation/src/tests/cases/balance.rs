use {
    crate::{
        domain::view::{self, Body},
        infra::{Config, token::MockToken},
        tests::setup::{self, ACCOUNT, OTHER},
    },
    std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

#[tokio::test]
async fn zero_balance_disables_donations() {
    let (wallet, _accounts) = setup::wallet_on_donation_chain();
    let session = setup::session(Some(wallet), setup::token_with_balance(setup::usdt(0), 1));

    session.connect().await.unwrap();

    let state = session.state();
    assert_eq!(state.balance, Some(setup::usdt(0)));
    assert!(!state.sufficient);
    let Body::Connected { balance, donate, .. } = view::render(&state, &Config::default()).body
    else {
        panic!("not connected");
    };
    assert_eq!(balance, "0.00 USDT");
    assert!(!donate.enabled);
}

#[tokio::test]
async fn sufficiency_boundaries() {
    for (balance, sufficient) in [(999999, false), (1_000000, true)] {
        let (wallet, _accounts) = setup::wallet_on_donation_chain();
        let session = setup::session(
            Some(wallet),
            setup::token_with_balance(setup::usdt(balance), 1),
        );

        session.connect().await.unwrap();

        let state = session.state();
        assert_eq!(state.sufficient, sufficient, "balance {balance}");
        assert_eq!(state.can_donate(), sufficient, "balance {balance}");
    }
}

#[tokio::test]
async fn failure_keeps_previous_balance() {
    let (wallet, _accounts) = setup::wallet_on_donation_chain();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut token = MockToken::new();
    token.expect_balance_of().times(2).returning({
        let calls = calls.clone();
        move |_| match calls.fetch_add(1, Ordering::SeqCst) {
            0 => Ok(setup::usdt(2_000000)),
            _ => Err(crate::infra::token::testing_error("execution reverted")),
        }
    });
    let session = setup::session(Some(wallet), token);
    session.connect().await.unwrap();

    assert!(session.check_balance(ACCOUNT).await.is_err());

    let state = session.state();
    assert_eq!(state.balance, Some(setup::usdt(2_000000)));
    assert!(state.sufficient);
    assert!(
        state
            .status
            .starts_with("Failed to fetch USDT balance: ")
    );
    assert!(!state.busy);
}

#[tokio::test]
async fn discards_balance_of_other_account() {
    let (wallet, _accounts) = setup::wallet_on_donation_chain();
    let mut token = setup::token_with_balance(setup::usdt(0), 1);
    token
        .expect_balance_of()
        .withf(|owner| *owner == OTHER)
        .times(1)
        .returning(|_| Ok(setup::usdt(50_000000)));
    let session = setup::session(Some(wallet), token);
    session.connect().await.unwrap();

    assert_eq!(
        session.check_balance(OTHER).await.unwrap(),
        setup::usdt(50_000000)
    );

    let state = session.state();
    assert_eq!(state.account, Some(ACCOUNT));
    assert_eq!(state.balance, Some(setup::usdt(0)));
    assert!(!state.sufficient);
}

#[tokio::test]
async fn discards_balance_when_disconnected() {
    let mut token = MockToken::new();
    token
        .expect_balance_of()
        .times(1)
        .returning(|_| Ok(setup::usdt(1_000000)));
    let session = setup::session(None, token);

    session.check_balance(ACCOUNT).await.unwrap();

    assert_eq!(session.state().balance, None);
}
