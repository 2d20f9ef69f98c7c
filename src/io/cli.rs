//! Command-line interface for generating, solving and exporting mazes

use crate::algorithm::generator::generate;
use crate::algorithm::placement::{Endpoints, MarkerPlacement, default_exit, place_markers};
use crate::algorithm::solver::{Solution, solve};
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::{render, render_matrix, render_with_overlay};
use crate::spatial::{Grid, Position};
use clap::Parser;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazewave")]
#[command(
    author,
    version,
    about = "Generate perfect mazes and solve them with a wavefront"
)]
/// Command-line arguments for the maze tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maze width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed of the first maze, any 64-bit integer
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Number of mazes to generate from consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Overlay the shortest path from start to exit
    #[arg(long)]
    pub solve: bool,

    /// Place the start on a seeded-random row of the first column
    #[arg(short, long, conflicts_with_all = ["start", "exit"])]
    pub random_start: bool,

    /// Start cell
    #[arg(long, value_name = "COL,ROW")]
    pub start: Option<Position>,

    /// Exit cell
    #[arg(long, value_name = "COL,ROW")]
    pub exit: Option<Position>,

    /// Print the wavefront distance labels and the 0/1 path matrix (implies --solve)
    #[arg(short, long)]
    pub labels: bool,

    /// Write a PNG snapshot to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress text and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if a solution should be computed
    pub const fn should_solve(&self) -> bool {
        self.solve || self.labels
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }

    /// Seed of the `index`-th maze of the batch, wrapping at the `i64` range
    pub const fn batch_seed(&self, index: usize) -> i64 {
        self.seed.wrapping_add(index as i64)
    }

    /// Marker placement policy for the maze generated from `seed`
    pub fn placement(&self, seed: i64) -> MarkerPlacement {
        if self.random_start {
            return MarkerPlacement::RandomStart {
                seed: rng_seed(seed),
            };
        }
        match (self.start, self.exit) {
            (None, None) => MarkerPlacement::Fixed,
            (start, exit) => MarkerPlacement::Custom {
                start: start.unwrap_or(Position::new(0, 0)),
                exit: exit.unwrap_or_else(|| default_exit(self.width, self.height)),
            },
        }
    }
}

/// One generated maze with its endpoints and optional solution
#[derive(Debug, Clone)]
pub struct MazeReport {
    /// Seed the maze was generated from
    pub seed: i64,
    /// The carved grid with markers placed
    pub grid: Grid,
    /// Start and exit cells
    pub endpoints: Endpoints,
    /// Solution, when solving was requested
    pub solution: Option<Solution>,
}

/// Runs the generate/solve/render pipeline for every requested seed
pub struct MazeRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    ///
    /// Quiet and single-maze runs still count progress, on a hidden bar.
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, solve and emit every maze of the batch
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, or if generation,
    /// solving or writing the output fails for any seed
    pub fn run(&self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one maze must be generated",
            ));
        }

        let pm = &self.progress_manager;
        let mut total_path_cells = 0;
        for index in 0..self.cli.count {
            let seed = self.cli.batch_seed(index);
            pm.start_maze(seed);

            let report = self.build(seed)?;
            if let Some(solution) = &report.solution {
                total_path_cells += solution.path().len();
            }
            self.emit(&report)?;

            pm.complete_maze();
        }

        pm.finish();
        info!(
            "generated {}/{} maze(s) of {}x{} starting at seed {}",
            pm.position(),
            pm.length().unwrap_or_default(),
            self.cli.width,
            self.cli.height,
            self.cli.seed
        );
        if self.cli.should_solve() {
            info!("{total_path_cells} path cells across all solutions");
        }
        Ok(())
    }

    /// Generate one maze, place its markers and solve it if requested
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions, endpoints outside the grid,
    /// or a failed solve
    pub fn build(&self, seed: i64) -> Result<MazeReport> {
        let mut grid = generate(self.cli.width, self.cli.height, rng_seed(seed))?;
        let endpoints = place_markers(&mut grid, self.cli.placement(seed))?;

        let solution = if self.cli.should_solve() {
            let solution = solve(&grid, endpoints.start)?;
            debug!(
                "seed {seed}: path of {} cells in {} steps",
                solution.path().len(),
                solution.steps()
            );
            Some(solution)
        } else {
            None
        };

        Ok(MazeReport {
            seed,
            grid,
            endpoints,
            solution,
        })
    }

    /// Text printed for a maze: the grid, then the labels and path matrix if
    /// requested
    pub fn render_report(&self, report: &MazeReport) -> String {
        let mut text = format!("seed {}\n", report.seed);
        match &report.solution {
            Some(solution) => {
                text.push_str(&render_with_overlay(&report.grid, solution.overlay()));
                if self.cli.labels {
                    text.push('\n');
                    text.push_str(&render_matrix(solution.wavefront().labels()));
                    text.push('\n');
                    text.push_str(&render_matrix(&solution.overlay().to_matrix()));
                }
                text.push_str(&format!(
                    "{} -> {}: {} steps\n",
                    report.endpoints.start,
                    report.endpoints.exit,
                    solution.steps()
                ));
            }
            None => text.push_str(&render(&report.grid)),
        }
        text
    }

    fn emit(&self, report: &MazeReport) -> Result<()> {
        if !self.cli.quiet {
            let text = self.render_report(report);
            self.progress_manager.suspend(|| write_stdout(&text))?;
        }

        if let Some(path) = self.output_path(report.seed) {
            let overlay = report.solution.as_ref().map(Solution::overlay);
            export_maze_as_png(&report.grid, overlay, &path)?;
        }
        Ok(())
    }

    /// PNG path for `seed`; batches append `_<seed>` to the file stem
    pub fn output_path(&self, seed: i64) -> Option<PathBuf> {
        let output = self.cli.output.as_ref()?;
        if self.cli.count <= 1 {
            return Some(output.clone());
        }
        Some(Self::seeded_path(output, seed))
    }

    fn seeded_path(output: &Path, seed: i64) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let name = match output.extension() {
            Some(extension) => format!(
                "{}_{seed}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            ),
            None => format!("{}_{seed}", stem.to_string_lossy()),
        };

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

/// RNG seed for a command-line seed; negative seeds keep their bit pattern
pub const fn rng_seed(seed: i64) -> u64 {
    seed as u64
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| MazeError::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: e,
        })
}
