use broadside::{
    within_margin, AttackOutcome, AutomaticPlayer, Board, Cell, Dimensions, Direction, FleetSpec,
    Player, Ship, ShotOutcome,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single_ship_board() -> Board {
    Board::new(
        Dimensions::new(10, 10),
        vec![Ship::new(Cell::new(4, 3), Cell::new(6, 3)).unwrap()],
    )
    .unwrap()
}

fn automatic() -> AutomaticPlayer {
    AutomaticPlayer::new("Automatic", single_ship_board())
}

/// Let `player` shoot at `target` until the fleet is gone.
fn duel(player: &mut AutomaticPlayer, target: &mut Board, rng: &mut SmallRng) -> Vec<(Cell, AttackOutcome)> {
    let mut shots = Vec::new();
    let mut available = player.available_cells().len();
    while !target.all_ships_sunk() {
        let cell = player.select_target(rng).unwrap();
        let outcome = target.receive_attack(cell).unwrap();
        player.receive_result(outcome.hit, outcome.sunk);
        shots.push((cell, outcome));

        assert!(player.available_cells().len() <= available, "available cells grew");
        available = player.available_cells().len();
        assert!(shots.len() <= 100, "took more shots than cells on the board");
    }
    shots
}

#[test]
fn test_opens_at_board_center() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = automatic();
    assert_eq!(player.select_target(&mut rng).unwrap(), Cell::new(6, 6));
    assert_eq!(player.previous_move(), Some(Cell::new(6, 6)));

    let odd = Board::new(Dimensions::new(7, 5), vec![]).unwrap();
    let mut player = AutomaticPlayer::new("Odd", odd);
    assert_eq!(player.select_target(&mut rng).unwrap(), Cell::new(4, 3));
}

#[test]
fn test_requires_result_before_next_shot() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = automatic();
    player.select_target(&mut rng).unwrap();
    assert!(player.select_target(&mut rng).is_err());
}

#[test]
fn test_probes_next_to_first_hit() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target = single_ship_board();
        let mut player = automatic();
        let shots = duel(&mut player, &mut target, &mut rng);

        let first_hit = shots.iter().position(|(_, o)| o.hit).unwrap();
        let (hit_cell, outcome) = shots[first_hit];
        if !outcome.sunk {
            let (probe, _) = shots[first_hit + 1];
            assert!(
                Direction::between(hit_cell, probe).is_some(),
                "seed {}: probe {} is not next to hit {}",
                seed,
                probe,
                hit_cell
            );
        }
    }
}

#[test]
fn test_reverses_through_first_hit_after_overshooting() {
    let mut found = 0;
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target = single_ship_board();
        let mut player = automatic();
        let shots = duel(&mut player, &mut target, &mut rng);

        let hits: Vec<usize> = shots
            .iter()
            .enumerate()
            .filter(|(_, (_, o))| o.hit)
            .map(|(i, _)| i)
            .collect();
        let (first, second) = (shots[hits[0]].0, shots[hits[1]].0);
        let step = Direction::between(first, second).expect("second hit next to the first");

        let after_second = hits[1] + 1;
        if shots[hits[1]].1.sunk || shots[after_second].1.hit {
            continue;
        }
        // second hit, then a miss one step further along the same line
        assert_eq!(shots[after_second].0, second.step(step).unwrap());
        assert_eq!(
            shots[after_second + 1].0,
            first.step(step.reversed()).unwrap(),
            "seed {}: expected the reversed probe from {}",
            seed,
            first
        );
        found += 1;
    }
    assert!(found > 0, "no seed exercised the overshoot case");
}

#[test]
fn test_sunk_ship_rules_out_its_neighbourhood() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut target = single_ship_board();
    let mut player = automatic();
    duel(&mut player, &mut target, &mut rng);

    // the exclusion is applied when choosing the shot after the sinking one
    let next = player.select_target(&mut rng).unwrap();
    let (lo, hi) = (Cell::new(4, 3), Cell::new(6, 3));
    assert!(!within_margin(next, lo, hi));
    for &c in player.available_cells() {
        assert!(!within_margin(c, lo, hi), "{} should have been ruled out", c);
    }
    assert!(player.hunted_cells().is_empty());
}

#[test]
fn test_never_repeats_a_shot_on_a_full_fleet() {
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target =
            Board::random(&mut rng, Dimensions::new(10, 10), &FleetSpec::default()).unwrap();
        let mut player = automatic();
        let shots = duel(&mut player, &mut target, &mut rng);

        let mut cells: Vec<Cell> = shots.iter().map(|&(c, _)| c).collect();
        assert_eq!(player.all_moves(), cells);
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), shots.len(), "seed {} repeated a shot", seed);
    }
}

#[test]
fn test_with_target_aims_at_a_smaller_grid() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut player = automatic();
    player.select_target(&mut rng).unwrap();
    player.receive_result(true, false);
    assert_eq!(player.shots().len(), 1);

    // switching targets forgets everything fired at the old grid
    let mut player = player.with_target(Dimensions::new(3, 3));
    assert!(player.shots().is_empty());
    assert_eq!(player.previous_move(), None);
    assert!(player.hunted_cells().is_empty());
    assert_eq!(player.available_cells().len(), 9);

    assert_eq!(player.select_target(&mut rng).unwrap(), Cell::new(2, 2));
    player.receive_result(false, false);
    assert_eq!(
        player.shots(),
        &[(Cell::new(2, 2), ShotOutcome::new(false, false))]
    );

    let dims = Dimensions::new(3, 3);
    for _ in 0..8 {
        let cell = player.select_target(&mut rng).unwrap();
        assert!(dims.contains(cell), "{} is off the 3x3 grid", cell);
        player.receive_result(false, false);
    }
    assert!(player.available_cells().is_empty());
    assert!(player.select_target(&mut rng).is_err());
}
