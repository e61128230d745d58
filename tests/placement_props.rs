use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    ships_of_size, Board, BoardError, PlacementGenerator, Ship, FLEET, PLACEMENT_ATTEMPTS,
    TOTAL_SHIP_CELLS,
};

fn generate(seed: u64) -> Vec<Ship> {
    let mut rng = SmallRng::seed_from_u64(seed);
    PlacementGenerator::standard()
        .generate_with_retries(&mut rng, PLACEMENT_ATTEMPTS)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fleet_covers_twenty_distinct_cells(seed in any::<u64>()) {
        let ships = generate(seed);
        let mut cells: Vec<_> = ships.iter().flat_map(|s| s.footprint().collect::<Vec<_>>()).collect();
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn fleet_has_standard_composition(seed in any::<u64>()) {
        let ships = generate(seed);
        prop_assert_eq!(ships.len(), FLEET.len());
        for size in 1..=4 {
            let n = ships.iter().filter(|s| s.size() == size).count();
            prop_assert_eq!(n, ships_of_size(size));
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let ships = generate(seed);
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.footprint() {
                    for cb in b.footprint() {
                        prop_assert!(ca.chebyshev(cb) >= 2, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn generated_fleet_passes_board_validation(seed in any::<u64>()) {
        let ships = generate(seed);
        prop_assert!(Board::from_ships(ships).is_ok());
    }

    #[test]
    fn random_board_is_reproducible(seed in any::<u64>()) {
        let a = Board::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let b = Board::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn impossible_fleets_fail_instead_of_looping() {
    let mut rng = SmallRng::seed_from_u64(7);
    let too_many_long = [4usize; 20];
    assert_eq!(
        PlacementGenerator::new(&too_many_long).generate(&mut rng),
        Err(BoardError::PlacementFailed)
    );
    let too_many_single = [1usize; 26];
    assert_eq!(
        PlacementGenerator::new(&too_many_single).generate(&mut rng),
        Err(BoardError::PlacementFailed)
    );
    assert_eq!(
        PlacementGenerator::new(&too_many_single).generate_with_retries(&mut rng, 3),
        Err(BoardError::PlacementFailed)
    );
}

#[test]
fn single_ship_fits_anywhere() {
    let mut rng = SmallRng::seed_from_u64(99);
    let ships = PlacementGenerator::new(&[1]).generate(&mut rng).unwrap();
    assert_eq!(ships.len(), 1);
    assert_eq!(ships[0].size(), 1);
}
