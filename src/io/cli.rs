//! Command-line interface for batch reconstruction of tile puzzles

use crate::algorithm::engine::{MosaicEngine, MosaicReport};
use crate::algorithm::motif::{Motif, MotifScanner, ScanOutcome};
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{MosaicError, Result};
use crate::io::image::export_raster_as_png;
use crate::io::input::{read_text, read_tiles};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Reassemble scrambled square tiles into a picture and hunt for a motif"
)]
/// Command-line arguments for the reconstruction tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile puzzle text file, or directory of `.txt` puzzles
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Motif file; `#` marks required cells (defaults to the sea monster)
    #[arg(short, long, value_name = "FILE")]
    pub motif: Option<PathBuf>,

    /// Export the marked raster as `<input>_mosaic.png`
    #[arg(short, long)]
    pub image: bool,

    /// Print the marked raster
    #[arg(short, long)]
    pub print: bool,

    /// Print motif occurrence counts for all eight orientations
    #[arg(long)]
    pub survey: bool,

    /// Treat a raster without the motif as an error, ending the batch at that file
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the scanner for the requested motif
    ///
    /// # Errors
    ///
    /// Returns an error if the motif file cannot be read or has no required cell
    pub fn scanner(&self) -> Result<MotifScanner> {
        let motif = match &self.motif {
            Some(path) => Motif::parse(&read_text(path)?)?,
            None => Motif::sea_monster()?,
        };
        Ok(MotifScanner::new(motif))
    }
}

/// Orchestrates batch processing of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Files are handled in order and the batch ends at the first failure,
    /// including a missing motif under `--strict`.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let scanner = self.cli.scanner()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outcome = Ok(());
        for (index, file) in files.iter().enumerate() {
            outcome = self.process_file(file, index, &scanner);
            if outcome.is_err() {
                break;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        outcome
    }

    /// Puzzle files named by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a `.txt` file nor a directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if has_input_extension(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_target(target, "target file must be a .txt puzzle"))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file() && has_input_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                target,
                "target must be a .txt puzzle or a directory",
            ))
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        scanner: &MotifScanner,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let result = self.reconstruct(input_path, index, scanner);

        if let Some(ref mut pm) = self.progress_manager {
            match &result {
                Ok(()) => pm.complete_file(index, start_time.elapsed()),
                Err(_) => pm.fail_file(index),
            }
        }

        result
    }

    fn reconstruct(
        &mut self,
        input_path: &Path,
        index: usize,
        scanner: &MotifScanner,
    ) -> Result<()> {
        let descriptors = read_tiles(input_path)?;
        let engine = MosaicEngine::from_descriptors(&descriptors)?;

        let progress = &mut self.progress_manager;
        let report = engine.run_observed(scanner, |stage| {
            if let Some(pm) = progress.as_mut() {
                pm.enter_stage(index, stage);
            }
        })?;

        for line in self.report_lines(input_path, &report, scanner) {
            self.emit(&line);
        }

        if self.cli.strict {
            report.scan.clone().into_result()?;
        }

        let shown = match &report.scan {
            ScanOutcome::Found(scan) => &scan.raster,
            ScanOutcome::NotFound { .. } => &report.raster,
        };
        if self.cli.print {
            self.emit(&shown.to_string());
        }
        if self.cli.image {
            export_raster_as_png(shown, &Self::get_output_path(input_path))?;
        }

        Ok(())
    }

    /// Lines describing the outcome of one puzzle
    pub fn summary(input_path: &Path, report: &MosaicReport) -> Vec<String> {
        let [a, b, c, d] = report.corners;
        let mut lines = vec![
            format!("{}:", input_path.display()),
            format!("  corners        {a} {b} {c} {d}"),
            format!("  corner product {}", report.corner_product),
        ];
        match &report.scan {
            ScanOutcome::Found(scan) => {
                lines.push(format!(
                    "  motif          {} occurrence(s) at {}",
                    scan.match_count, scan.orientation
                ));
                lines.push(format!("  roughness      {}", scan.roughness));
            }
            ScanOutcome::NotFound { lit_pixels } => {
                lines.push(format!(
                    "  motif          not found ({lit_pixels} lit pixels)"
                ));
            }
        }
        lines
    }

    /// Summary lines for one puzzle, followed by the survey when requested
    pub fn report_lines(
        &self,
        input_path: &Path,
        report: &MosaicReport,
        scanner: &MotifScanner,
    ) -> Vec<String> {
        let mut lines = Self::summary(input_path, report);
        if self.cli.survey {
            lines.extend(scanner.survey(&report.raster).into_iter().map(
                |(orientation, count)| {
                    let orientation = orientation.to_string();
                    format!("  survey {orientation:<14} {count} occurrence(s)")
                },
            ));
        }
        lines
    }

    // Allow print for results when progress bars are disabled
    #[allow(clippy::print_stdout)]
    fn emit(&self, line: &str) {
        match &self.progress_manager {
            Some(pm) => pm.println(line),
            None => println!("{line}"),
        }
    }

    /// Where the PNG for a puzzle file is written
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

fn invalid_target(target: &Path, reason: &str) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter: "target",
        value: target.display().to_string(),
        reason: reason.to_string(),
    }
}
