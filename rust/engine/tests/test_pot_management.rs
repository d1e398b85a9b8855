use holdem_engine::cards::parse_cards;
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::game::{Game, Phase};
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::ActionKind;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn table(n: usize, chips: u32) -> Game {
    let players = (0..n)
        .map(|i| Player::human(format!("P{i}"), chips))
        .collect();
    Game::new(players, 5, 10, Some(11)).unwrap()
}

#[test]
fn odd_chip_goes_to_first_winner_left_of_dealer() {
    let mut game = table(4, 1000);
    // hole cards for seats 0..3 twice around, then a royal flush board everyone plays
    let deck = Deck::from_order(
        parse_cards("2c 3c 4c 5c 2d 3d 4d 5d Ah Kh Qh Jh 10h").unwrap(),
        0,
    )
    .unwrap();
    game.start_new_hand_with_deck(deck).unwrap();
    assert_eq!(game.dealer(), 1);

    // preflop: seats 0 and 1 call, small blind (seat 2) completes
    game.call();
    game.call();
    game.call();
    assert_eq!(game.phase(), Phase::Flop);
    assert_eq!(game.pot(), 40);

    // flop: seat 2 bets 20, seats 3 and 0 call, seat 1 folds
    game.bet(20);
    game.call();
    game.call();
    game.fold();
    assert_eq!(game.pot(), 100);
    assert_eq!(game.phase(), Phase::Turn);

    while !game.is_hand_over() {
        game.check();
    }

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.winners, vec![2, 3, 0]);
    assert_eq!(outcome.payouts, vec![(2, 34), (3, 33), (0, 33)]);
    assert_eq!(game.winner(), Some("P2, P3, P0"));
    assert_eq!(game.pot(), 0);
    assert_eq!(game.players()[2].chips(), 1004);
    assert_eq!(game.players()[1].chips(), 990);
    assert_eq!(game.total_chips(), 4000);
}

#[test]
fn chips_are_conserved_under_random_play() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut game = table(5, 500);
    let total = game.total_chips();

    for _ in 0..300 {
        match game.start_new_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
        let mut guard = 0;
        while !game.is_hand_over() {
            let seat = game.current_player();
            assert!(game.players()[seat].can_act(), "acting seat {seat} cannot act");
            let legal = game.legal_actions();
            let kind = *legal.kinds.choose(&mut rng).unwrap();
            let size = rng.random_range(0..200);
            let applied = match kind {
                ActionKind::Fold => game.fold(),
                ActionKind::Check => game.check(),
                ActionKind::Call => game.call(),
                ActionKind::Bet => game.bet(size),
                ActionKind::Raise => game.raise_bet(size),
            };
            assert!(applied.is_some(), "listed action {kind:?} was ignored");
            assert_eq!(game.total_chips(), total);
            guard += 1;
            assert!(guard < 500, "hand did not finish");
        }
        assert_eq!(game.pot(), 0);
        assert_eq!(game.total_chips(), total);
    }
}

#[test]
fn table_bet_never_drops_below_a_live_bet() {
    let mut game = table(3, 1000);
    game.start_new_hand().unwrap();
    let raiser = game.current_player();
    game.raise_bet(90);
    assert_eq!(game.current_bet(), 100);
    assert_eq!(game.last_aggressor(), Some(raiser));

    // a raise of nothing over a big price matches it without lowering it
    let rec = game.raise_bet(0).unwrap();
    assert_eq!(rec.action, PlayerAction::Raise(95));
    assert_eq!(game.current_bet(), 100);
    assert_eq!(game.last_aggressor(), Some(raiser));

    // an all-in raise for a little more still lifts the price
    let mut short = Game::new(
        vec![
            Player::human("A", 1000),
            Player::human("B", 14),
            Player::human("C", 1000),
        ],
        5,
        10,
        Some(3),
    )
    .unwrap();
    short.start_new_hand().unwrap();
    // dealer 1, small blind 2, big blind 0: seat 1 (14 chips) acts first
    let rec = short.raise_bet(90).unwrap();
    assert!(rec.all_in);
    assert_eq!(short.current_bet(), 14);
    assert_eq!(short.last_aggressor(), Some(1));
    short.raise_bet(200); // seat 2 to 214
    assert_eq!(short.current_bet(), 214);
    assert_eq!(short.last_aggressor(), Some(2));
}

#[test]
fn raise_needs_a_live_bet_and_chips_beyond_the_call() {
    let mut game = Game::new(
        vec![
            Player::human("A", 1000),
            Player::human("B", 8),
            Player::human("C", 1000),
        ],
        5,
        10,
        Some(3),
    )
    .unwrap();
    game.start_new_hand().unwrap();
    // seat 1 holds 8 chips facing the big blind of 10
    assert!(!game.legal_actions().allows(ActionKind::Raise));
    assert!(game.raise_bet(90).is_none());
    let rec = game.call().unwrap();
    assert!(rec.all_in);
    assert_eq!(game.current_bet(), 10);

    let mut heads_up = table(2, 1000);
    heads_up.start_new_hand().unwrap();
    heads_up.call();
    heads_up.check();
    assert_eq!(heads_up.phase(), Phase::Flop);
    let legal = heads_up.legal_actions();
    assert_eq!(legal.kinds, vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet]);
    assert!(heads_up.raise_bet(50).is_none(), "an opening raise is a bet");
    assert!(heads_up.bet(50).is_some());
}

#[test]
fn listed_kinds_are_exactly_the_ones_that_apply() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = table(4, 300);
    let kinds = [
        ActionKind::Fold,
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Bet,
        ActionKind::Raise,
    ];
    for _ in 0..60 {
        if game.start_new_hand().is_err() {
            break;
        }
        let mut guard = 0;
        while !game.is_hand_over() {
            let legal = game.legal_actions();
            let size = rng.random_range(0..150);
            for kind in kinds {
                let mut trial = game.clone();
                let applied = match kind {
                    ActionKind::Fold => trial.fold(),
                    ActionKind::Check => trial.check(),
                    ActionKind::Call => trial.call(),
                    ActionKind::Bet => trial.bet(size),
                    ActionKind::Raise => trial.raise_bet(size),
                };
                // a call with nothing owed is a check
                let listed = legal.allows(kind)
                    || (kind == ActionKind::Call && legal.allows(ActionKind::Check));
                assert_eq!(
                    applied.is_some(),
                    listed,
                    "{kind:?} listed={:?} to_call={}",
                    legal.kinds,
                    legal.to_call
                );
            }
            let kind = *legal.kinds.choose(&mut rng).unwrap();
            match kind {
                ActionKind::Fold => game.fold(),
                ActionKind::Check => game.check(),
                ActionKind::Call => game.call(),
                ActionKind::Bet => game.bet(size),
                ActionKind::Raise => game.raise_bet(size),
            };
            guard += 1;
            assert!(guard < 500, "hand did not finish");
        }
    }
}
