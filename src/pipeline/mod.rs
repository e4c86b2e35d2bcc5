// Cleaning pipeline: ingestion, processing, and storage

pub mod ingestion;
pub mod processing;
pub mod storage;
pub mod summary;

use metrics::{counter, histogram};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

use crate::config::CleanerConfig;
use crate::error::Result;
use crate::frame::{ColumnKind, Frame};
use processing::{CategoricalFill, CategoryFilter, CleaningStep, DedupStep, MedianImputer, StepReport};
use summary::FrameSummary;

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub initial_rows: usize,
    pub rows_after_filtering: usize,
    pub duplicates_removed: usize,
    pub numeric_medians: Vec<(String, Option<f64>)>,
    pub cells_imputed: usize,
    pub output_rows: usize,
    pub output_file: String,
    pub steps: Vec<StepReport>,
}

/// Load → filter → dedup → impute → save, driven by a `CleanerConfig`
pub struct Pipeline {
    config: CleanerConfig,
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Pipeline {
    pub fn new(config: CleanerConfig) -> Self {
        let steps: Vec<Box<dyn CleaningStep>> = vec![
            Box::new(CategoryFilter::new(
                config.group_column.clone(),
                config.target_groups.clone(),
            )),
            Box::new(DedupStep::new(config.numeric_columns.clone())),
            Box::new(MedianImputer::new(config.numeric_columns.clone())),
            Box::new(CategoricalFill::new(
                config.categorical_columns.clone(),
                config.placeholder.clone(),
            )),
        ];
        Self { config, steps }
    }

    pub fn column_kind(&self, column: &str) -> ColumnKind {
        if self.config.numeric_columns.iter().any(|c| c == column) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }

    /// Apply every cleaning step in order to an already loaded frame
    pub fn clean(&self, frame: &mut Frame) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let report = step.apply(frame)?;
            info!(
                step = report.step,
                rows_before = report.rows_before,
                rows_after = report.rows_after,
                cells_filled = report.cells_filled,
                "Step finished"
            );

            if report.step == "filter" {
                println!("\n--- Filtering Complete ---");
                println!(
                    "Retained {} rows (only {}) from {} rows.",
                    report.rows_after,
                    self.config.target_groups.join(" and "),
                    report.rows_before
                );
                println!("\n--- Starting Data Cleaning on Filtered Data ---");
            }
            reports.push(report);
        }
        Ok(reports)
    }

    /// Run the whole batch: read the input file, clean it, write the output file
    #[instrument(skip(self), fields(input = %self.config.input_path.display()))]
    pub fn run(&self) -> Result<PipelineResult> {
        self.config.validate()?;
        let t_pipeline = Instant::now();

        let mut frame =
            ingestion::load_columns(&self.config.input_path, &self.config.kept_columns())?;
        let initial_rows = frame.height();
        info!(rows = initial_rows, "Loaded source data");
        println!("Successfully loaded data with {} rows.", initial_rows);
        counter!("cleaner_rows_loaded_total").increment(initial_rows as u64);

        let steps = self.clean(&mut frame)?;

        let removed_by = |name: &str| {
            steps
                .iter()
                .find(|r| r.step == name)
                .map_or(0, StepReport::rows_removed)
        };
        let filtered_out = removed_by("filter");
        let duplicates_removed = removed_by("dedup");
        let cells_imputed: usize = steps.iter().map(|r| r.cells_filled).sum();
        let numeric_medians = steps
            .iter()
            .flat_map(|r| r.medians.iter().cloned())
            .collect();

        counter!("cleaner_rows_filtered_total").increment(filtered_out as u64);
        counter!("cleaner_duplicates_removed_total").increment(duplicates_removed as u64);
        counter!("cleaner_cells_imputed_total").increment(cells_imputed as u64);

        println!("\n--- Cleaning Complete. Final DataFrame Summary: ---");
        println!("{}", FrameSummary::from_frame(&frame, |c| self.column_kind(c)));

        storage::persist_to_csv(&frame, &self.config.output_path)?;
        let output_file = self.config.output_path.display().to_string();
        info!(rows = frame.height(), output = %output_file, "Saved cleaned data");
        println!(
            "\nSuccessfully saved the cleaned and filtered data to '{}'",
            output_file
        );

        histogram!("cleaner_pipeline_duration_seconds").record(t_pipeline.elapsed().as_secs_f64());

        Ok(PipelineResult {
            initial_rows,
            rows_after_filtering: initial_rows - filtered_out,
            duplicates_removed,
            numeric_medians,
            cells_imputed,
            output_rows: frame.height(),
            output_file,
            steps,
        })
    }
}
