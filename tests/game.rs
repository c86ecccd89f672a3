//! Game integration tests.

use killer::{
    Action, ActionError, Card, CardSet, Context, DealError, FirstOption, Game, GameError,
    GameOptions, GameState, JoinError, Joker, Play, Policy, Rank, Suit, THREE_OF_CLUBS,
    TWO_OF_HEARTS,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::from(rank.of(suit))
}

fn set(cards: &[Card]) -> CardSet {
    cards.iter().copied().collect()
}

fn table(players: u8, options: GameOptions, seed: u64) -> Game {
    let mut game = Game::new(options, seed);
    for expected in 0..players {
        assert_eq!(game.join().unwrap(), expected);
    }
    game
}

fn fixed_seats() -> GameOptions {
    GameOptions::default().with_shuffle_seats(false)
}

/// Plays its lowest single, passing when it has none.
struct LowestSingle;

impl Policy for LowestSingle {
    fn open(&mut self, _context: &Context<'_>, options: &[Play]) -> Play {
        options
            .iter()
            .copied()
            .find(|play| matches!(play, Play::Single(_) | Play::TwoOfHearts))
            .unwrap_or(options[0])
    }

    fn respond(&mut self, _context: &Context<'_>, _to_beat: Play, options: &[Play]) -> Action {
        options
            .iter()
            .copied()
            .find(|play| matches!(play, Play::Single(_) | Play::TwoOfHearts))
            .map_or(Action::Pass, Action::Play)
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_wilds(3)
        .with_shuffle_seats(false)
        .with_three_of_clubs_leads(false);

    assert_eq!(options.wilds, 3);
    assert!(!options.shuffle_seats);
    assert!(!options.three_of_clubs_leads);

    let defaults = GameOptions::default();
    assert_eq!(defaults.wilds, 0);
    assert!(defaults.shuffle_seats);
    assert!(defaults.three_of_clubs_leads);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NoPlayers);

    let mut game = table(2, fixed_seats(), 1);
    assert_eq!(
        game.deal_hands(vec![CardSet::EMPTY]).unwrap_err(),
        DealError::HandCountMismatch {
            expected: 2,
            actual: 1
        }
    );

    let shared = set(&[THREE_OF_CLUBS.into()]);
    assert_eq!(
        game.deal_hands(vec![shared, shared]).unwrap_err(),
        DealError::OverlappingHands
    );
    assert_eq!(game.state(), GameState::WaitingForPlayers);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.join().unwrap_err(), JoinError::InvalidState);
}

#[test]
fn deal_gives_everyone_cards_and_three_of_clubs_opens() {
    let mut game = table(4, GameOptions::default(), 42);
    game.deal().unwrap();

    let mut seating = game.seating();
    seating.sort_unstable();
    assert_eq!(seating, vec![0, 1, 2, 3]);

    let mut union = CardSet::EMPTY;
    for player in 0..4 {
        let hand = game.hand(player).unwrap();
        assert_eq!(hand.len(), 13);
        assert_eq!(game.is_active(player), Some(true));
        union = union.union(hand);
    }
    assert_eq!(union, game.deck().cards());

    assert_eq!(game.state(), GameState::RoundOpen);
    let opener = game.current_player().unwrap();
    assert!(game.hand(opener).unwrap().contains(THREE_OF_CLUBS));

    let options = game.legal_plays();
    assert!(options.contains(&Play::Single(Rank::Three)));
    assert!(options.iter().all(|play| play.rank() == Rank::Three));
}

#[test]
fn opening_is_unrestricted_without_three_of_clubs_lead() {
    let options = fixed_seats().with_three_of_clubs_leads(false);
    let mut game = table(2, options, 1);
    game.deal_hands(vec![
        set(&[card(Rank::Nine, Suit::Clubs), card(Rank::Ten, Suit::Clubs)]),
        set(&[THREE_OF_CLUBS.into()]),
    ])
    .unwrap();

    assert_eq!(game.current_player(), Some(0));
    assert_eq!(
        game.legal_plays(),
        vec![Play::Single(Rank::Nine), Play::Single(Rank::Ten)]
    );
}

#[test]
fn turn_errors_leave_state_untouched() {
    let mut game = table(2, fixed_seats(), 1);
    let hands = vec![
        set(&[THREE_OF_CLUBS.into(), card(Rank::Four, Suit::Clubs)]),
        set(&[card(Rank::Five, Suit::Clubs), card(Rank::Six, Suit::Clubs)]),
    ];
    game.deal_hands(hands.clone()).unwrap();

    assert_eq!(
        game.open(1, Play::Single(Rank::Five)).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(
        game.open(9, Play::Single(Rank::Five)).unwrap_err(),
        ActionError::PlayerNotFound
    );
    assert_eq!(
        game.respond(0, Action::Pass).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        game.open(0, Play::Pair(Rank::Three)).unwrap_err(),
        ActionError::Unrealizable
    );
    assert_eq!(game.next_round().unwrap_err(), ActionError::InvalidState);

    assert_eq!(game.state(), GameState::RoundOpen);
    assert_eq!(game.hand(0), Some(hands[0]));
    assert!(game.pile().is_empty());
    assert_eq!(game.to_beat(), None);
}

#[test]
fn scripted_game_flow() {
    let mut game = table(3, fixed_seats(), 7);
    game.deal_hands(vec![
        set(&[THREE_OF_CLUBS.into(), card(Rank::Nine, Suit::Spades)]),
        set(&[card(Rank::Five, Suit::Diamonds), card(Rank::King, Suit::Hearts)]),
        set(&[card(Rank::Four, Suit::Clubs), card(Rank::Eight, Suit::Diamonds)]),
    ])
    .unwrap();

    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.legal_plays(), vec![Play::Single(Rank::Three)]);

    let record = game.open(0, Play::Single(Rank::Three)).unwrap();
    assert_eq!(record.cards, set(&[THREE_OF_CLUBS.into()]));
    assert_eq!(record.cards_left, 1);
    assert_eq!(game.state(), GameState::RoundActive);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.round().leader, Some(0));

    let context = game.context().unwrap();
    assert_eq!(context.player, 1);
    assert_eq!(
        context
            .opponents
            .iter()
            .map(|opponent| (opponent.player, opponent.active, opponent.cards))
            .collect::<Vec<_>>(),
        vec![(2, true, 2), (0, true, 1)]
    );
    assert_eq!(
        game.legal_plays(),
        vec![Play::Single(Rank::Five), Play::Single(Rank::King)]
    );

    game.respond(1, Action::Play(Play::Single(Rank::Five))).unwrap();
    assert_eq!(game.current_player(), Some(2));
    assert_eq!(game.legal_plays(), vec![Play::Single(Rank::Eight)]);

    game.respond(2, Action::Pass).unwrap();
    assert_eq!(game.is_active(2), Some(false));
    assert_eq!(game.current_player(), Some(0));

    let record = game
        .respond(0, Action::Play(Play::Single(Rank::Nine)))
        .unwrap();
    assert_eq!(record.cards_left, 0);
    assert_eq!(game.standings(), &[0]);
    assert_eq!(game.current_player(), Some(1));

    game.respond(1, Action::Pass).unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.current_player(), None);

    // The leader is out, so the next player holding cards opens.
    game.next_round().unwrap();
    assert_eq!(game.state(), GameState::RoundOpen);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.to_beat(), None);
    assert_eq!(game.legal_plays(), vec![Play::Single(Rank::King)]);

    game.open(1, Play::Single(Rank::King)).unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.standings(), &[0, 1, 2]);
    assert_eq!(
        game.pile(),
        set(&[
            THREE_OF_CLUBS.into(),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::King, Suit::Hearts),
        ])
    );

    let result = game.result().unwrap();
    assert_eq!(result.loser, Some(2));
    assert_eq!(result.rounds, 2);
    assert_eq!(result.turns, 6);
}

#[test]
fn round_ends_when_play_comes_back_to_the_leader() {
    let mut game = table(3, fixed_seats(), 7);
    game.deal_hands(vec![
        set(&[THREE_OF_CLUBS.into(), card(Rank::Four, Suit::Clubs)]),
        set(&[card(Rank::Five, Suit::Diamonds)]),
        set(&[card(Rank::Six, Suit::Diamonds)]),
    ])
    .unwrap();

    game.open(0, Play::Single(Rank::Three)).unwrap();
    game.respond(1, Action::Pass).unwrap();
    game.respond(2, Action::Pass).unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(game.result().is_none());

    game.next_round().unwrap();
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.is_active(1), Some(true));
    assert_eq!(game.legal_plays(), vec![Play::Single(Rank::Four)]);
}

#[test]
fn three_only_opening_is_lifted_after_the_first_turn() {
    let mut game = table(2, fixed_seats(), 7);
    game.deal_hands(vec![
        set(&[
            THREE_OF_CLUBS.into(),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ]),
        set(&[card(Rank::Five, Suit::Diamonds)]),
    ])
    .unwrap();

    assert!(game.legal_plays().iter().all(|play| play.rank() == Rank::Three));
    game.open(0, Play::Single(Rank::Three)).unwrap();
    game.respond(1, Action::Pass).unwrap();
    game.next_round().unwrap();

    assert_eq!(game.current_player(), Some(0));
    assert_eq!(
        game.legal_plays(),
        vec![Play::Single(Rank::Three), Play::Single(Rank::Nine)]
    );
}

#[test]
fn two_of_hearts_is_only_beaten_by_bombs() {
    let mut game = table(2, fixed_seats(), 7);
    let sevens: CardSet = Suit::ALL
        .into_iter()
        .map(|suit| card(Rank::Seven, suit))
        .collect();
    game.deal_hands(vec![
        set(&[THREE_OF_CLUBS.into(), TWO_OF_HEARTS.into()]),
        sevens.union(card(Rank::Two, Suit::Spades)),
    ])
    .unwrap();

    game.open(0, Play::Single(Rank::Three)).unwrap();
    game.respond(1, Action::Play(Play::Single(Rank::Two))).unwrap();
    assert_eq!(game.legal_plays(), vec![Play::TwoOfHearts]);

    game.respond(0, Action::Play(Play::TwoOfHearts)).unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.result().unwrap().loser, Some(1));
}

#[test]
fn players_dealt_nothing_are_out_at_once() {
    let mut game = table(3, fixed_seats(), 7);
    game.deal_hands(vec![
        set(&[THREE_OF_CLUBS.into()]),
        CardSet::EMPTY,
        set(&[card(Rank::Four, Suit::Clubs)]),
    ])
    .unwrap();

    assert_eq!(game.standings(), &[1]);
    assert_eq!(game.is_active(1), Some(false));

    game.open(0, Play::Single(Rank::Three)).unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.standings(), &[1, 0, 2]);
}

#[test]
fn a_single_holder_ends_the_game_on_the_deal() {
    let mut game = table(2, fixed_seats(), 7);
    game.deal_hands(vec![set(&[THREE_OF_CLUBS.into()]), CardSet::EMPTY])
        .unwrap();

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.result().unwrap().loser, Some(0));
}

#[test]
fn lowest_single_policy_runs_to_completion() {
    let mut game = table(4, GameOptions::default(), 11);
    let result = game.run(&mut [LowestSingle, LowestSingle, LowestSingle, LowestSingle]);
    let result = result.unwrap();

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(result.standings.len(), 4);
    let loser = result.loser.unwrap();
    assert_eq!(result.standings.last(), Some(&loser));
    for player in 0..4 {
        let cards = game.hand(player).unwrap().len();
        if player == loser {
            assert!(cards > 0);
        } else {
            assert_eq!(cards, 0);
        }
    }
    assert_eq!(
        game.pile().len() + game.hand(loser).unwrap().len(),
        game.deck().len()
    );
}

#[test]
fn boxed_policies_with_wilds_run_to_completion() {
    for seed in 0..8 {
        let mut game = table(5, GameOptions::default().with_wilds(12), seed);
        let mut policies: Vec<Box<dyn Policy>> = (0..5)
            .map(|player| -> Box<dyn Policy> {
                if player % 2 == 0 {
                    Box::new(FirstOption)
                } else {
                    Box::new(LowestSingle)
                }
            })
            .collect();

        let result = game.run(&mut policies).unwrap();
        assert_eq!(result.standings.len(), 5);
        assert!(result.turns >= result.rounds);
    }
}

#[test]
fn play_turn_drives_one_decision() {
    let mut game = table(2, fixed_seats(), 3);
    game.deal_hands(vec![
        set(&[THREE_OF_CLUBS.into(), card(Rank::Ace, Suit::Clubs)]),
        set(&[card(Rank::Four, Suit::Clubs), card(Rank::Five, Suit::Clubs)]),
    ])
    .unwrap();

    let record = game.play_turn(&mut FirstOption).unwrap();
    assert_eq!(record.player, 0);
    assert_eq!(record.action, Action::Play(Play::Single(Rank::Three)));

    let record = game.play_turn(&mut FirstOption).unwrap();
    assert_eq!(record.player, 1);
    assert_eq!(record.action, Action::Play(Play::Single(Rank::Four)));
}

#[test]
fn run_needs_a_policy_per_player() {
    let mut game = table(3, GameOptions::default(), 5);
    let error = game.run(&mut [FirstOption, FirstOption]).unwrap_err();
    assert!(matches!(error, GameError::MissingPolicy(_)));
}

#[test]
fn finished_game_can_be_dealt_again() {
    let mut game = table(3, GameOptions::default().with_wilds(1), 8);
    let first = game.run(&mut [FirstOption; 3]).unwrap();

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::RoundOpen);
    assert!(game.standings().is_empty());
    assert!(game.pile().is_empty());

    let second = game.run(&mut [FirstOption; 3]).unwrap();
    assert_eq!(second.standings.len(), 3);
    assert_eq!(first.standings.len(), 3);
}

#[test]
fn jokers_are_dealt_when_configured() {
    let mut game = table(4, GameOptions::default().with_wilds(4), 2);
    game.deal().unwrap();

    let jokers: usize = (0..4)
        .map(|player| game.hand(player).unwrap().wilds().len())
        .sum();
    assert_eq!(jokers, 4);
    assert!(game.deck().cards().contains(Joker::new(3).unwrap()));
}
