//! Tests for seeded depth-first maze carving

#[cfg(test)]
mod tests {
    use mazewave::algorithm::generator::{MazeGenerator, generate};
    use mazewave::{Direction, Grid, MazeError, Position};
    use std::collections::HashSet;

    fn reachable_from_origin(grid: &Grid) -> usize {
        let mut seen = HashSet::from([Position::new(0, 0)]);
        let mut stack = vec![Position::new(0, 0)];
        while let Some(current) = stack.pop() {
            for direction in Direction::ALL {
                if let Some(next) = grid.passage(current, direction) {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }
        seen.len()
    }

    // Tests the carve visits every cell exactly once
    // Verified by skipping the visited check before carving
    #[test]
    fn test_carve_builds_spanning_tree() {
        let grid = generate(7, 5, 31).unwrap();
        assert_eq!(grid.passage_count(), 34);
        assert_eq!(reachable_from_origin(&grid), 35);
        for position in grid.positions() {
            assert!(!grid.cell(position).unwrap().is_sealed());
        }
    }

    // Tests open sides add up to both ends of every passage
    // Verified by opening only the carving cell's wall
    #[test]
    fn test_open_sides_match_passages() {
        let grid = generate(9, 6, 12).unwrap();
        let open_sides: u32 = grid
            .positions()
            .map(|position| grid.cell(position).unwrap().open_sides())
            .sum();
        assert_eq!(open_sides as usize, 2 * grid.passage_count());
        assert!(grid.positions().any(|p| grid.cell(p).unwrap().open_sides() == 1));
    }

    // Tests a generator instance matches the one-shot function for its first maze
    // Verified by reseeding the generator inside carve
    #[test]
    fn test_generator_matches_generate() {
        let mut generator = MazeGenerator::new(55);
        let first = generator.carve(6, 6).unwrap();
        assert_eq!(first, generate(6, 6, 55).unwrap());
    }

    // Tests the RNG keeps running across carves of the same generator
    // Verified by reseeding the generator inside carve
    #[test]
    fn test_generator_continues_sequence() {
        let mut generator = MazeGenerator::new(55);
        let first = generator.carve(8, 8).unwrap();
        let second = generator.carve(8, 8).unwrap();
        assert_ne!(first, second);
        assert_eq!(second.passage_count(), 63);
    }

    // Tests single-cell and corridor grids
    // Verified by starting the carve from (1, 0)
    #[test]
    fn test_degenerate_sizes() {
        let single = generate(1, 1, 0).unwrap();
        assert!(single.cell(Position::new(0, 0)).unwrap().is_sealed());

        let corridor = generate(6, 1, 0).unwrap();
        assert_eq!(corridor.passage_count(), 5);
        for col in 0..5 {
            assert!(corridor.is_passable(Position::new(col, 0), Direction::East));
        }
    }

    // Tests invalid dimensions are reported rather than carved
    // Verified by clamping zero dimensions to one
    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            generate(0, 3, 1),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    // Tests large grids carve without recursion limits
    // Verified by replacing the explicit stack with recursion
    #[test]
    fn test_large_grid() {
        let grid = generate(300, 300, 9).unwrap();
        assert_eq!(grid.passage_count(), 300 * 300 - 1);
    }
}
