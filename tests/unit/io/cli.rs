//! Tests for command-line parsing and the batch runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mazewave::algorithm::placement::MarkerPlacement;
    use mazewave::generate;
    use mazewave::io::cli::{Cli, MazeRunner, rng_seed};
    use mazewave::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
    use mazewave::{MazeError, Position};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with no arguments produces the demo maze
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["mazewave"]);

        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.count, 1);
        assert!(!cli.should_solve());
        assert!(!cli.should_show_progress());
        assert_eq!(cli.placement(cli.seed), MarkerPlacement::Fixed);
    }

    // Tests CLI parsing with short flags and custom endpoints
    // Verified by swapping the position parser fields
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "mazewave", "-w", "8", "-H", "3", "-s", "99", "-n", "4", "--start", "1,2", "--exit",
            "7,0", "-l", "-o", "out/maze.png",
        ]);

        assert_eq!((cli.width, cli.height), (8, 3));
        assert_eq!(cli.seed, 99);
        assert!(cli.should_solve());
        assert!(cli.should_show_progress());
        assert_eq!(cli.output, Some(PathBuf::from("out/maze.png")));
        assert_eq!(
            cli.placement(99),
            MarkerPlacement::Custom {
                start: Position::new(1, 2),
                exit: Position::new(7, 0),
            }
        );
    }

    // Tests a single custom endpoint keeps the default for the other
    // Verified by defaulting the exit to the top-left cell
    #[test]
    fn test_cli_partial_endpoints() {
        let cli = Cli::parse_from(["mazewave", "-w", "7", "-H", "4", "--start", "0,3"]);
        assert_eq!(
            cli.placement(0),
            MarkerPlacement::Custom {
                start: Position::new(0, 3),
                exit: Position::new(3, 3),
            }
        );
    }

    // Tests random start conflicts with explicit endpoints
    // Verified by removing the conflict declaration
    #[test]
    fn test_cli_random_start_conflicts() {
        assert!(Cli::try_parse_from(["mazewave", "-r", "--start", "0,0"]).is_err());
        assert!(Cli::try_parse_from(["mazewave", "--exit", "nope"]).is_err());

        let cli = Cli::parse_from(["mazewave", "-r"]);
        assert_eq!(cli.placement(5), MarkerPlacement::RandomStart { seed: 5 });
    }

    // Tests the runner builds and solves the demo maze
    // Verified by skipping the solve step when labels are requested
    #[test]
    fn test_runner_build_report() {
        let runner = MazeRunner::new(Cli::parse_from(["mazewave", "--solve", "-q"]));
        let report = runner.build(DEFAULT_SEED).unwrap();

        assert_eq!(report.seed, DEFAULT_SEED);
        assert_eq!(report.endpoints.exit, Position::new(2, 4));
        let solution = report.solution.as_ref().unwrap();
        assert_eq!(solution.path().first(), Some(&report.endpoints.start));

        let text = runner.render_report(&report);
        assert!(text.starts_with("seed 1234\n"));
        assert!(text.contains(" S "));
        assert!(text.contains(" E "));
        assert!(text.ends_with(&format!("(0, 0) -> (2, 4): {} steps\n", solution.steps())));
    }

    // Tests negative seeds parse and map onto the RNG seed bit pattern
    // Verified by declaring the seed unsigned
    #[test]
    fn test_cli_negative_seed() {
        let cli = Cli::parse_from(["mazewave", "--seed", "-5", "-n", "2"]);
        assert_eq!(cli.seed, -5);
        assert_eq!(cli.batch_seed(1), -4);
        assert_eq!(rng_seed(-5), u64::MAX - 4);

        let short = Cli::parse_from(["mazewave", "-s", "-5", "-r"]);
        assert_eq!(
            short.placement(-5),
            MarkerPlacement::RandomStart {
                seed: u64::MAX - 4
            }
        );

        let runner = MazeRunner::new(Cli::parse_from(["mazewave", "-q", "--seed", "-5"]));
        let report = runner.build(-5).unwrap();
        assert_eq!(report.grid, generate(5, 5, u64::MAX - 4).unwrap());
        assert!(runner.render_report(&report).starts_with("seed -5\n"));
        runner.run().unwrap();
    }

    // Tests batch seeds wrap at the end of the signed range
    // Verified by adding the index without wrapping
    #[test]
    fn test_cli_batch_seed_wraps() {
        let max = i64::MAX.to_string();
        let cli = Cli::parse_from(["mazewave", "-s", max.as_str(), "-n", "2"]);
        assert_eq!(cli.batch_seed(0), i64::MAX);
        assert_eq!(cli.batch_seed(1), i64::MIN);
    }

    // Tests labels print the distance matrix followed by the 0/1 path matrix
    // Verified by printing only the distance labels
    #[test]
    fn test_runner_render_labels() {
        let runner = MazeRunner::new(Cli::parse_from([
            "mazewave", "-w", "3", "-H", "1", "-l", "--start", "0,0", "--exit", "2,0",
        ]));
        let report = runner.build(4).unwrap();
        let text = runner.render_report(&report);

        assert!(text.contains("\n1 - 2 - 3\n"));
        assert!(text.contains("\n1 - 1 - 1\n"));
        assert!(text.ends_with("(0, 0) -> (2, 0): 2 steps\n"));
    }

    // Tests the unsolved report is the plain grid
    // Verified by always rendering the overlay
    #[test]
    fn test_runner_render_plain() {
        let runner = MazeRunner::new(Cli::parse_from(["mazewave", "-w", "3", "-H", "2"]));
        let report = runner.build(1).unwrap();
        assert!(report.solution.is_none());

        let text = runner.render_report(&report);
        assert_eq!(text.lines().count(), 1 + 2 * 2 + 1);
        assert!(!text.contains("steps"));
    }

    // Tests batch outputs get one file per seed
    // Verified by reusing the same path for every seed
    #[test]
    fn test_runner_output_path() {
        let single = MazeRunner::new(Cli::parse_from(["mazewave", "-o", "dir/maze.png"]));
        assert_eq!(single.output_path(7), Some(PathBuf::from("dir/maze.png")));

        let batch = MazeRunner::new(Cli::parse_from([
            "mazewave", "-q", "-n", "3", "-o", "dir/maze.png",
        ]));
        assert_eq!(batch.output_path(7), Some(PathBuf::from("dir/maze_7.png")));

        let none = MazeRunner::new(Cli::parse_from(["mazewave"]));
        assert_eq!(none.output_path(7), None);
    }

    // Tests a quiet batch run writes every snapshot
    // Verified by exporting only the first seed
    #[test]
    fn test_runner_run_exports_batch() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("maze.png");
        let runner = MazeRunner::new(Cli::parse_from([
            "mazewave".into(),
            "-q".into(),
            "--solve".into(),
            "-n".into(),
            "2".into(),
            "-s".into(),
            "40".into(),
            "-o".into(),
            output.into_os_string(),
        ]));

        runner.run().unwrap();
        assert!(temp_dir.path().join("maze_40.png").exists());
        assert!(temp_dir.path().join("maze_41.png").exists());
    }

    // Tests a zero-sized batch is rejected
    // Verified by removing the count validation
    #[test]
    fn test_runner_rejects_zero_count() {
        let runner = MazeRunner::new(Cli::parse_from(["mazewave", "-q", "-n", "0"]));
        assert!(matches!(
            runner.run(),
            Err(MazeError::InvalidParameter {
                parameter: "count",
                ..
            })
        ));
    }

    // Tests endpoints outside the grid are reported
    // Verified by clamping endpoints into the grid
    #[test]
    fn test_runner_rejects_outside_endpoint() {
        let runner = MazeRunner::new(Cli::parse_from(["mazewave", "--exit", "9,9"]));
        assert!(matches!(
            runner.build(1),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}
