use {
    crate::{
        infra::Config,
        tests::setup::{self, ACCOUNT, Call, FakeToken, OTHER, TX},
    },
    maplit::hashmap,
    std::sync::Arc,
};

#[tokio::test]
async fn follows_account_changes() {
    let (wallet, accounts) = setup::wallet_on_donation_chain();
    let token = Arc::new(FakeToken::with_balances(hashmap! {
        ACCOUNT => setup::usdt(0),
        OTHER => setup::usdt(7_500000),
    }));
    let session = setup::session(Some(wallet), token.clone());
    session.connect().await.unwrap();
    assert!(!session.state().sufficient);

    accounts.send(vec![OTHER, ACCOUNT]).unwrap();
    let state = setup::wait_for(&session, |state| {
        state.balance == Some(setup::usdt(7_500000))
    })
    .await;

    assert_eq!(state.account, Some(OTHER));
    assert!(state.sufficient);
    assert!(state.can_donate());
}

#[tokio::test]
async fn disconnects() {
    let (wallet, accounts) = setup::wallet_on_donation_chain();
    let token = Arc::new(FakeToken::with_balances(hashmap! {
        ACCOUNT => setup::usdt(1_000000),
    }));
    let session = setup::session(Some(wallet), token.clone());
    session.connect().await.unwrap();

    accounts.send(vec![]).unwrap();
    let state = setup::wait_for(&session, |state| state.account.is_none()).await;

    assert_eq!(state.balance, None);
    assert!(!state.sufficient);
    assert!(state.can_connect());
    assert_eq!(token.calls(), vec![Call::BalanceOf(ACCOUNT)]);
}

#[tokio::test]
async fn ignores_unchanged_account() {
    let (wallet, accounts) = setup::wallet_on_donation_chain();
    let token = Arc::new(FakeToken::with_balances(hashmap! {
        ACCOUNT => setup::usdt(1_000000),
    }));
    let session = setup::session(Some(wallet), token.clone());
    session.connect().await.unwrap();

    // Selecting the same account again doesn't refetch its balance.
    accounts.send(vec![ACCOUNT, OTHER]).unwrap();
    accounts.send(vec![OTHER]).unwrap();
    setup::wait_for(&session, |state| {
        state.account == Some(OTHER) && state.balance.is_some()
    })
    .await;

    assert_eq!(
        token.calls(),
        vec![Call::BalanceOf(ACCOUNT), Call::BalanceOf(OTHER)]
    );
}

#[tokio::test]
async fn account_changes_during_donation() {
    let config = Config::default();
    let (wallet, accounts) = setup::wallet_on_donation_chain();
    let token = Arc::new(FakeToken::with_balances(hashmap! {
        ACCOUNT => setup::usdt(1_000000),
        OTHER => setup::usdt(4_000000),
    }));
    let session = setup::session(Some(wallet), token.clone());
    session.connect().await.unwrap();

    let donation = tokio::spawn({
        let session = session.clone();
        async move { session.donate().await }
    });
    setup::wait_for(&session, |state| {
        state.status == "Transaction submitted. Waiting for confirmation..."
    })
    .await;

    accounts.send(vec![OTHER]).unwrap();
    let state = setup::wait_for(&session, |state| {
        state.account == Some(OTHER) && state.balance.is_some()
    })
    .await;
    assert_eq!(state.balance, Some(setup::usdt(4_000000)));
    assert!(state.busy);

    // The donation was made from the account that was connected when it
    // started. Its balance moved on but that is no longer shown.
    token.set_balance(ACCOUNT, setup::usdt(0));
    token.confirm();
    let receipt = donation.await.unwrap().unwrap();

    assert_eq!(receipt.tx_hash, TX);
    let state = session.state();
    assert_eq!(state.account, Some(OTHER));
    assert_eq!(state.balance, Some(setup::usdt(4_000000)));
    assert!(state.sufficient);
    assert!(!state.busy);
    assert!(state.status.starts_with("Thank you for your donation!"));
    assert_eq!(
        token.calls(),
        vec![
            Call::BalanceOf(ACCOUNT),
            Call::Transfer {
                from: ACCOUNT,
                to: config.recipient,
                amount: config.amount,
            },
            Call::Confirmation(TX),
            Call::BalanceOf(OTHER),
            Call::BalanceOf(ACCOUNT),
        ]
    );
}
