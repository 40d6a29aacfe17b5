//! Tests for the evolution engine

#[cfg(test)]
mod tests {
    use cellgrid::algorithm::presets;
    use cellgrid::algorithm::states::{ColorTable, StateSet};
    use cellgrid::{AutomatonConfig, AutomatonError, BoundaryMode, Engine, Grid, Neighborhood, RuleConfig};

    fn conway_engine(rows: usize, cols: usize) -> Engine {
        Engine::new(presets::conway(rows, cols).expect("valid preset"))
    }

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, 1).expect("in range");
        }
        grid
    }

    // Verified by writing results into the input grid during the step
    #[test]
    fn test_blinker_oscillates() {
        let engine = conway_engine(5, 5);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let next = engine.step(&vertical).expect("step");
        assert_eq!(next, horizontal);
        assert_eq!(engine.step(&next).expect("step"), vertical);
    }

    // Verified by counting the cell itself as a neighbor
    #[test]
    fn test_block_is_still_life() {
        let engine = conway_engine(4, 4);
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(engine.step(&block).expect("step"), block);
    }

    // A lone cell dies and the empty grid stays empty
    // Verified by making birth count 0 reachable
    #[test]
    fn test_isolated_cell_dies() {
        let engine = conway_engine(3, 3);
        let next = engine.step(&grid_with(3, 3, &[(1, 1)])).expect("step");
        assert_eq!(next, Grid::new(3, 3));
        assert_eq!(engine.step(&next).expect("step"), Grid::new(3, 3));
    }

    // Verified by splitting rows unevenly across threads
    #[test]
    fn test_parallel_matches_serial() {
        let engine = conway_engine(17, 23);
        let mut grid = grid_with(17, 23, &[(0, 0), (0, 1), (0, 2), (5, 5), (5, 6), (6, 5)]);
        for generation in 0..10 {
            let serial = engine.step(&grid).expect("serial step");
            let parallel = engine.step_parallel(&grid).expect("parallel step");
            assert_eq!(serial, parallel, "diverged at generation {generation}");
            grid = serial;
        }
    }

    // Verified by clamping invalid transition output to 0
    #[test]
    fn test_transition_output_is_validated() {
        let config = AutomatonConfig::new(
            (2, 2),
            StateSet::new(["a", "b", "c"]).expect("valid states"),
            ColorTable::new(vec![[0, 0, 0]; 3]),
            Neighborhood::von_neumann(),
            RuleConfig::transition(|_, _, _| 5),
            BoundaryMode::Open,
        )
        .expect("valid config");
        let engine = Engine::new(config);

        for result in [
            engine.step(&Grid::new(2, 2)),
            engine.step_parallel(&Grid::new(2, 2)),
        ] {
            assert!(matches!(
                result,
                Err(AutomatonError::InvalidState {
                    state: 5,
                    state_count: 3,
                    ..
                })
            ));
        }
    }

    // Verified by skipping the dimension check before stepping
    #[test]
    fn test_step_rejects_wrong_dimensions() {
        let engine = conway_engine(3, 3);
        let result = engine.step(&Grid::new(3, 4));
        assert!(matches!(
            result,
            Err(AutomatonError::DimensionMismatch {
                expected: (3, 3),
                found: (3, 4)
            })
        ));
    }

    // Verified by scanning column-major for undeclared states
    #[test]
    fn test_step_rejects_undeclared_input_state() {
        let engine = conway_engine(2, 3);
        let grid = Grid::from_rows(&[&[0, 0, 0], &[0, 4, 7]]).expect("rectangular");
        assert!(matches!(
            engine.step(&grid),
            Err(AutomatonError::InvalidState {
                row: 1,
                col: 1,
                state: 4,
                ..
            })
        ));
    }

    // Verified by resolving reads through the open policy regardless of config
    #[test]
    fn test_get_cell_uses_configured_boundary() {
        let engine = conway_engine(3, 4);
        let grid = grid_with(3, 4, &[(2, 3)]);
        assert_eq!(engine.get_cell(&grid, -1, -1), 1);
        assert_eq!(engine.get_cell(&grid, 5, 7), 1);
        assert_eq!(engine.get_cell(&grid, 0, 0), 0);

        let open = Engine::new(presets::three_state(3, 4).expect("valid preset"));
        let mut grid = Grid::new(3, 4);
        grid.set(0, 0, 2).expect("in range");
        assert_eq!(open.get_cell(&grid, 0, 0), 2);
        assert_eq!(open.get_cell(&grid, -1, 0), 0);
    }

    // Verified by wrapping set_cell coordinates like reads
    #[test]
    fn test_set_cell_validates() {
        let engine = conway_engine(3, 3);
        let mut grid = Grid::new(3, 3);

        engine.set_cell(&mut grid, 2, 2, 1).expect("valid write");
        assert_eq!(grid.get(2, 2), Some(1));

        assert!(matches!(
            engine.set_cell(&mut grid, -1, 0, 1),
            Err(AutomatonError::OutOfRange { row: -1, .. })
        ));
        assert!(matches!(
            engine.set_cell(&mut grid, 0, 3, 1),
            Err(AutomatonError::OutOfRange { col: 3, .. })
        ));
        assert!(matches!(
            engine.set_cell(&mut grid, 0, 0, 2),
            Err(AutomatonError::InvalidState { state: 2, .. })
        ));
        assert_eq!(grid.population(1), 1);
    }
}
