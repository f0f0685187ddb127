use duel_content::ContentFactory;
use duel_core::{Action, FighterId, Match, MatchStatus, Zone};
use duel_runtime::{
    Event, IdleActionProvider, RoundEvent, Runtime, RuntimeConfig, RuntimeError,
    ScriptedActionProvider, SelectionEvent, Topic,
};

fn scripted(actions: &[Action]) -> ScriptedActionProvider {
    ScriptedActionProvider::new(actions.iter().copied())
}

#[tokio::test]
async fn step_resolves_against_shared_snapshot() {
    let mut runtime = Runtime::builder()
        .provider(FighterId::A, scripted(&[Action::Strike(Zone::Head)]))
        .provider(FighterId::B, scripted(&[Action::Guard(Zone::Head)]))
        .build();

    let report = runtime.step().await.unwrap();

    assert_eq!(report.round, 1);
    assert_eq!(report.resolution.self_next.energy, 4);
    assert_eq!(report.resolution.enemy_next.hp, 92);
    assert_eq!(report.resolution.enemy_next.energy, 7);
    assert_eq!(report.status, MatchStatus::Ongoing);

    let duel = runtime.current_match().await.unwrap();
    assert_eq!(duel.fighter(FighterId::B).hp, 92);
    assert_eq!(duel.log().len(), 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rounds_commit_in_order() {
    let mut runtime = Runtime::builder()
        .provider(
            FighterId::A,
            scripted(&[Action::Strike(Zone::Body), Action::Strike(Zone::Body)]),
        )
        .provider(FighterId::B, IdleActionProvider)
        .build();

    runtime.step().await.unwrap();
    let second = runtime.step().await.unwrap();

    assert_eq!(second.round, 2);
    assert_eq!(second.resolution.enemy_next.hp, 70);
    assert_eq!(second.resolution.self_next.initiative, 1);
}

#[tokio::test]
async fn missing_provider_is_reported() {
    let mut runtime = Runtime::builder()
        .provider(FighterId::A, IdleActionProvider)
        .build();

    let err = runtime.step().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::ProviderNotSet {
            fighter: FighterId::B
        }
    ));
}

#[tokio::test]
async fn knockout_keeps_resolving_by_default() {
    let config = RuntimeConfig::default();
    let a = duel_core::Fighter::new(100, 8, 3);
    let b = duel_core::Fighter::new(10, 5, 3);
    let duel = Match::from_fighters(&config.duel, a, b);

    let mut runtime = Runtime::builder()
        .initial_match(duel)
        .provider(
            FighterId::A,
            scripted(&[Action::Strike(Zone::Legs), Action::Strike(Zone::Legs)]),
        )
        .provider(FighterId::B, IdleActionProvider)
        .build();

    assert_eq!(
        runtime.step().await.unwrap().status,
        MatchStatus::Won(FighterId::A)
    );
    let again = runtime.step().await.unwrap();
    assert_eq!(again.round, 2);
    assert_eq!(again.resolution.enemy_next.hp, 0);
}

#[tokio::test]
async fn halt_on_knockout_refuses_further_rounds() {
    let config = RuntimeConfig::default();
    let a = duel_core::Fighter::new(100, 8, 3);
    let b = duel_core::Fighter::new(10, 5, 3);
    let duel = Match::from_fighters(&config.duel, a, b);

    let mut runtime = Runtime::builder()
        .initial_match(duel)
        .halt_on_knockout(true)
        .provider(FighterId::A, scripted(&[Action::Strike(Zone::Legs)]))
        .provider(FighterId::B, IdleActionProvider)
        .build();

    let status = runtime.run_until_decided(10).await.unwrap();
    assert_eq!(status, MatchStatus::Won(FighterId::A));

    let err = runtime.step().await.unwrap_err();
    assert!(matches!(err, RuntimeError::MatchDecided { .. }));

    let handle = runtime.handle();
    let err = handle.resolve_round().await.unwrap_err();
    assert!(matches!(err, RuntimeError::MatchDecided { .. }));

    handle.reset().await.unwrap();
    let duel = handle.query_match().await.unwrap();
    assert_eq!(duel.round(), 0);
    assert_eq!(duel.status(), MatchStatus::Ongoing);
}

#[tokio::test]
async fn events_follow_round_lifecycle() {
    let config = RuntimeConfig::default();
    let a = duel_core::Fighter::new(100, 5, 3);
    let b = duel_core::Fighter::new(5, 5, 3);
    let duel = Match::from_fighters(&config.duel, a, b);

    let mut runtime = Runtime::builder()
        .initial_match(duel)
        .provider(FighterId::A, scripted(&[Action::Strike(Zone::Head)]))
        .provider(FighterId::B, IdleActionProvider)
        .build();

    let handle = runtime.handle();
    let mut selection_rx = handle.subscribe(Topic::Selection);
    let mut round_rx = handle.subscribe(Topic::Round);

    runtime.step().await.unwrap();

    assert_eq!(
        selection_rx.recv().await.unwrap(),
        Event::Selection(SelectionEvent::ActionLocked {
            fighter: FighterId::A
        })
    );
    assert_eq!(
        selection_rx.recv().await.unwrap(),
        Event::Selection(SelectionEvent::ActionLocked {
            fighter: FighterId::B
        })
    );

    match round_rx.recv().await.unwrap() {
        Event::Round(RoundEvent::Resolved { report }) => assert_eq!(report.round, 1),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(
        round_rx.recv().await.unwrap(),
        Event::Round(RoundEvent::Decided {
            round: 1,
            status: MatchStatus::Won(FighterId::A),
        })
    );

    // Already decided: later rounds do not announce the decision again.
    runtime.step().await.unwrap();
    assert!(matches!(
        round_rx.recv().await.unwrap(),
        Event::Round(RoundEvent::Resolved { .. })
    ));
    assert!(round_rx.try_recv().is_err());
}

#[tokio::test]
async fn bundled_config_seeds_the_match() {
    let duel_config = ContentFactory::bundled().load_config().unwrap();
    let expected = duel_config.initial_fighter();

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            duel: duel_config,
            ..RuntimeConfig::default()
        })
        .build();

    let duel = runtime.current_match().await.unwrap();
    assert_eq!(*duel.fighter(FighterId::A), expected);
    assert_eq!(*duel.fighter(FighterId::B), expected);
}
