//! Game builder and autonomous play tests.
//!
//! These tests verify the presets and configuration of new games:
//! - Standard and Aseb presets
//! - Builders are immutable, and the dice fix the roll type
//! - Settings export and import
//! - Complete games played by agents

use royal_ur::agents::{FirstMoveAgent, LastMoveAgent, RandomAgent};
use royal_ur::board::{BoardShape, BoardType, ShapeKind};
use royal_ur::core::{Player, PlayerIdentity, Tile};
use royal_ur::game::{GameBuilder, GameSettings};
use royal_ur::rules::{BinaryDice, DiceRoll, PathPair, PathType, Roll, RuleFlags, RuleSet, ScriptedDice, ScriptedRoll};
use royal_ur::state::GameStateKind;
use royal_ur::Game;

/// Route engine logs to the test output. Set `RUST_LOG=royal_ur=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test the standard preset.
#[test]
fn test_standard_preset() {
    let game = GameBuilder::standard().build().unwrap();
    let shape = game.rules().shape();

    assert_eq!(shape.kind(), &ShapeKind::Standard);
    assert_eq!((shape.width(), shape.height(), shape.area()), (3, 8, 20));
    assert_eq!(game.rules().paths(), &PathPair::bell());
    assert_eq!(game.light_player().piece_count(), 7);
    assert_eq!(game.dark_player().piece_count(), 7);
    assert!(game.is_waiting_for_roll());
    assert_eq!(game.turn().unwrap(), Player::Light);
}

/// Test the Aseb preset.
#[test]
fn test_aseb_preset() {
    let game = Game::create_aseb().unwrap();
    let shape = game.rules().shape();

    assert_eq!(shape.kind(), &ShapeKind::Aseb);
    assert_eq!((shape.width(), shape.height(), shape.area()), (3, 12, 20));
    assert_eq!(game.rules().paths(), &PathPair::aseb());
    assert_eq!(game.light_player().piece_count(), 5);
}

/// Test that the four binary dice roll between zero and four.
#[test]
fn test_preset_dice() {
    let mut game = Game::create_standard().unwrap();
    let roll: DiceRoll = game.roll_dice().unwrap();
    assert!(roll.value() <= 4);
}

/// Test that every setter leaves the original builder unchanged.
#[test]
fn test_builder_is_immutable() {
    let base = GameBuilder::standard();
    let _ = base.board_type(BoardType::Aseb);
    let _ = base.path_type(PathType::Aseb);
    let _ = base.starting_piece_count(2);
    let _ = base.players(PlayerIdentity::named("Ann"), PlayerIdentity::named("Bo"));
    let _ = base.flags(RuleFlags { safe_rosettes: false, ..RuleFlags::default() });
    let _ = base.dice(ScriptedDice::new(vec![1]).unwrap());

    assert_eq!(base.settings(), Some(GameSettings::standard()));
    assert!(base.light_identity().is_anonymous());
    assert!(base.dark_identity().is_anonymous());
}

/// Test that the dice decide the roll type of the game.
#[test]
fn test_dice_change_roll_type() {
    let mut game = GameBuilder::aseb()
        .dice(ScriptedDice::new(vec![0, 3]).unwrap())
        .build()
        .unwrap();

    let first: ScriptedRoll = game.roll_dice().unwrap();
    assert_eq!(first, ScriptedRoll { value: 0, index: 0 });
    let second = game.roll_dice().unwrap();
    assert_eq!(second, ScriptedRoll { value: 3, index: 1 });
    assert_eq!(game.turn().unwrap(), Player::Dark);
}

/// Test building each game gets fresh dice.
#[test]
fn test_builds_are_independent() {
    let builder = GameBuilder::standard().dice(ScriptedDice::new(vec![1, 2]).unwrap());
    let mut first = builder.build().unwrap();
    let mut second = builder.build().unwrap();

    assert_eq!(first.roll_dice().unwrap().value, 1);
    assert_eq!(second.roll_dice().unwrap().value, 1);
}

/// Test a custom board shape with custom paths.
#[test]
fn test_custom_shape_and_paths() {
    let shape = BoardShape::named("lane", [Tile::new(0, 0), Tile::new(0, 1)], Vec::new()).unwrap();
    let light = vec![Tile::new(1, 0), Tile::new(0, 0), Tile::new(0, 1), Tile::new(1, 1)];
    let paths = PathPair::new("lane", light.clone(), light).unwrap();

    let builder = GameBuilder::standard()
        .board_shape(shape)
        .paths(paths)
        .starting_piece_count(1)
        .dice(ScriptedDice::new(vec![2]).unwrap());
    assert_eq!(builder.settings(), None);

    let mut game = builder.build().unwrap();
    game.roll_dice().unwrap();
    let moves = game.find_available_moves().unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].dest(), Some(Tile::new(0, 1)));
}

/// Test that paths which leave the board shape are rejected.
#[test]
fn test_invalid_configuration() {
    let err = GameBuilder::aseb().path_type(PathType::Bell).build_rules().unwrap_err();
    assert!(err.is_construction());

    let err = GameBuilder::standard().starting_piece_count(0).build().unwrap_err();
    assert!(err.is_construction());
}

/// Test exporting settings and building from them again.
#[test]
fn test_settings_round_trip() {
    let settings = GameBuilder::aseb()
        .starting_piece_count(3)
        .flags(RuleFlags { captures_grant_extra_rolls: true, ..RuleFlags::default() })
        .settings()
        .unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    let parsed: GameSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);

    let rebuilt = GameBuilder::from_settings(&parsed);
    assert_eq!(rebuilt.settings(), Some(settings));
    assert_eq!(rebuilt.build_rules().unwrap().starting_piece_count(), 3);
    assert!(rebuilt.build_rules().unwrap().flags().captures_grant_extra_rolls);
}

/// Test identities are carried into the game.
#[test]
fn test_identities() {
    let game = GameBuilder::standard()
        .players(PlayerIdentity::named("Ann"), PlayerIdentity::anonymous())
        .build()
        .unwrap();
    assert_eq!(game.identity(Player::Light).to_string(), "Ann");
    assert_eq!(game.identity(Player::Dark).to_string(), "Anonymous");
}

/// Test full games between scripted agents on both presets.
#[test]
fn test_autonomous_play_terminates() {
    init_tracing();

    for builder in [GameBuilder::standard(), GameBuilder::aseb()] {
        for seed in 0..5 {
            let mut game = builder.dice(BinaryDice::seeded(seed)).build().unwrap();
            let actions = game.play_autonomously(&mut FirstMoveAgent, &mut LastMoveAgent).unwrap();

            assert!(game.is_finished());
            assert!(actions > 0);
            let recorded = game
                .states()
                .iter()
                .filter(|state| matches!(state.kind(), GameStateKind::Rolled | GameStateKind::Moved))
                .count();
            assert_eq!(actions, recorded);

            let pieces = builder.piece_count();
            assert_eq!(game.winner().unwrap().score(), pieces);
            assert!(game.loser().unwrap().score() < pieces);
        }
    }
}

/// Test that random agents with the same seeds replay the same game.
#[test]
fn test_random_play_is_reproducible() {
    let play = || {
        let mut game = GameBuilder::standard().dice(BinaryDice::seeded(99)).build().unwrap();
        game.play_autonomously(&mut RandomAgent::new(1), &mut RandomAgent::new(2)).unwrap();
        game.states().to_vec()
    };
    assert_eq!(play(), play());
}
