use std::collections::HashSet;

use rand::Rng;

use super::{
    error::GameError,
    grid::{Grid, Position},
};

/// Pick a uniformly random free cell for the next target
///
/// Draws are rejected and redrawn while they land on `occupied`. When no
/// free cell exists this fails with [`GameError::GridExhausted`] instead of
/// drawing forever.
pub fn place_target<R: Rng + ?Sized>(
    occupied: &HashSet<Position>,
    grid: &Grid,
    rng: &mut R,
) -> Result<Position, GameError> {
    let cells = grid.cell_count();
    let taken = occupied.iter().filter(|&&pos| grid.in_bounds(pos)).count();
    if taken >= cells {
        return Err(GameError::GridExhausted { cells });
    }

    loop {
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        let pos = Position::new(x, y);

        if !occupied.contains(&pos) {
            return Ok(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_target_avoids_occupied_cells() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<Position> = (0..4)
            .flat_map(|x| (0..3).map(move |y| Position::new(x, y)))
            .collect();

        for _ in 0..100 {
            let pos = place_target(&occupied, &grid, &mut rng).unwrap();
            assert!(grid.in_bounds(pos));
            assert!(!occupied.contains(&pos));
            assert_eq!(pos.y, 3);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut occupied: HashSet<Position> = (0..3)
            .flat_map(|x| (0..3).map(move |y| Position::new(x, y)))
            .collect();
        occupied.remove(&Position::new(1, 2));

        let pos = place_target(&occupied, &grid, &mut rng).unwrap();
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn test_full_grid_is_exhausted() {
        let grid = Grid::new(2, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let occupied: HashSet<Position> = [(0, 0), (0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(Position::from)
            .collect();

        assert_eq!(
            place_target(&occupied, &grid, &mut rng),
            Err(GameError::GridExhausted { cells: 4 })
        );
    }

    #[test]
    fn test_out_of_bounds_cells_do_not_count() {
        let grid = Grid::new(1, 2);
        let mut rng = StdRng::seed_from_u64(3);
        let occupied: HashSet<Position> = [(0, 0), (-1, 0)]
            .into_iter()
            .map(Position::from)
            .collect();

        assert_eq!(
            place_target(&occupied, &grid, &mut rng),
            Ok(Position::new(0, 1))
        );
    }
}
