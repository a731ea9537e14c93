use std::collections::HashSet;
use std::io::Cursor;

use broadside::{Board, Cell, Dimensions, ManualPlayer, Player, PlayerNamer, RandomPlayer, Ship};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board() -> Board {
    Board::new(
        Dimensions::new(10, 10),
        vec![Ship::new(Cell::new(2, 2), Cell::new(3, 2)).unwrap()],
    )
    .unwrap()
}

#[test]
fn test_random_player_covers_grid_without_repeats() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut player = RandomPlayer::new("Random", board());
    let dims = Dimensions::new(10, 10);

    let mut seen = HashSet::new();
    for _ in 0..100 {
        let cell = player.select_target(&mut rng).unwrap();
        assert!(dims.contains(cell));
        assert!(seen.insert(cell), "{} chosen twice", cell);
    }
    assert_eq!(player.tracker().len(), 100);
    assert!(player.select_target(&mut rng).is_err());
}

#[test]
fn test_random_player_with_smaller_target() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut player = RandomPlayer::new("Random", board()).with_target(Dimensions::new(2, 2));
    let mut cells: Vec<Cell> = (0..4).map(|_| player.select_target(&mut rng).unwrap()).collect();
    cells.sort();
    assert_eq!(
        cells,
        vec![
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 1),
            Cell::new(2, 2)
        ]
    );
}

#[test]
fn test_manual_player_reprompts_until_valid() {
    let mut rng = SmallRng::seed_from_u64(0);
    let input = Cursor::new("zz\nK1\nB2\nB2\nC3\n".as_bytes());
    let mut player = ManualPlayer::new("Ada", board(), input, Vec::new());

    assert_eq!(player.select_target(&mut rng).unwrap(), Cell::new(2, 2));
    player.receive_result(true, false);
    assert_eq!(player.select_target(&mut rng).unwrap(), Cell::new(3, 3));
    player.receive_result(false, false);
    assert!(player.select_target(&mut rng).is_err(), "input is exhausted");

    let transcript = String::from_utf8_lossy(player.output()).to_string();
    assert!(transcript.contains("It is now Ada's turn."));
    assert!(transcript.contains("Invalid row"));
    assert!(transcript.contains("outside the 10x10 board"));
    assert!(transcript.contains("Hit!"));
    assert!(transcript.contains("You already fired at B2."));
    assert!(transcript.contains("Miss."));
    assert_eq!(player.shots().len(), 2);
    assert!(player.shots()[0].1.hit);
}

#[test]
fn test_has_lost_follows_own_board() {
    let mut player = RandomPlayer::new("Random", board());
    assert!(!player.has_lost());
    player.board_mut().receive_attack(Cell::new(2, 2)).unwrap();
    assert!(!player.has_lost());
    player.board_mut().receive_attack(Cell::new(3, 2)).unwrap();
    assert!(player.has_lost());
}

#[test]
fn test_player_namer() {
    let mut namer = PlayerNamer::new();
    assert_eq!(namer.name(None), "Player 1");
    assert_eq!(namer.name(Some("Ada")), "Ada");
    assert_eq!(namer.name(None), "Player 3");
    assert_eq!(namer.count(), 3);

    namer.reset();
    assert_eq!(namer.count(), 0);
    assert_eq!(namer.name(None), "Player 1");

    // separate namers never share a count
    let mut other = PlayerNamer::new();
    assert_eq!(other.name(None), "Player 1");
}
