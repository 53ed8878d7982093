//! Property-based tests for token storage round-trips

use ctxkit::store::{MemoryTokenStore, SledTokenStore, TokenStore};
use ctxkit::token::TokenCommandService;
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

/// A token set under any valid name reads back exactly as written
#[test]
fn test_sled_token_round_trip_property() {
    let mut runner = TestRunner::new(Config::with_cases(32));

    runner
        .run(
            &(
                "[a-zA-Z0-9_.-]{1,32}",
                "[a-z0-9.]{1,24}:[0-9]{1,5}",
                "\\PC{0,64}",
            ),
            |(name, endpoint, secret)| {
                let db = sled::Config::new().temporary(true).open().unwrap();
                let store = SledTokenStore::from_db(db);

                TokenCommandService::set(&store, &name, &endpoint, &secret).unwrap();
                let record = store.get(&name, false).unwrap();
                prop_assert_eq!(record.name, name);
                prop_assert_eq!(record.endpoint, endpoint);
                prop_assert_eq!(record.secret, secret);
                Ok(())
            },
        )
        .unwrap();
}

/// Repeated sets under one name keep a single record holding the last secret
#[test]
fn test_last_set_wins_property() {
    let mut runner = TestRunner::default();

    runner
        .run(
            &("[a-z]{1,8}", prop::collection::vec("[a-z]{1,8}", 1..5)),
            |(name, secrets)| {
                let store = MemoryTokenStore::new();
                for secret in &secrets {
                    TokenCommandService::set(&store, &name, "e", secret).unwrap();
                }
                let record = store.get(&name, false).unwrap();
                prop_assert_eq!(&record.secret, secrets.last().unwrap());
                prop_assert_eq!(store.list(true).unwrap().len(), 1);
                Ok(())
            },
        )
        .unwrap();
}
