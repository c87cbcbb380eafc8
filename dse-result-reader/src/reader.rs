//! Main reader API
//!
//! The [`ResultReader`] ties the pipeline together: discover the result files
//! of one decision model, parse them all, then render them.

use crate::config::DecisionModel;
use crate::discovery::discover_result_files;
use crate::report;
use crate::solution::{load_solution, Solution};
use crate::types::Result;
use std::io::Write;
use std::path::Path;

/// Entry point for reporting on a DSE result directory
#[derive(Debug, Clone, Default)]
pub struct ResultReader {
    model: DecisionModel,
}

impl ResultReader {
    /// Create a reader for the given decision model
    pub fn new(model: DecisionModel) -> Self {
        Self { model }
    }

    /// The decision model this reader filters and renders for
    pub fn model(&self) -> &DecisionModel {
        &self.model
    }

    /// List the matching result files in `dir`, sorted by name
    pub fn discover(&self, dir: &Path) -> Result<Vec<String>> {
        discover_result_files(dir, &self.model)
    }

    /// Discover and parse every matching result file in `dir`
    ///
    /// Stops at the first file that fails to parse.
    ///
    /// # Example
    /// ```no_run
    /// use dse_result_reader::{DecisionModel, ResultReader};
    /// use std::path::Path;
    ///
    /// let reader = ResultReader::new(DecisionModel::multicore());
    /// let solutions = reader.load(Path::new("dse_results")).unwrap();
    /// println!("{} solutions", solutions.len());
    /// ```
    pub fn load(&self, dir: &Path) -> Result<Vec<Solution>> {
        let files = self.discover(dir)?;
        let solutions = files
            .iter()
            .map(|file| load_solution(dir, file, &self.model))
            .collect::<Result<Vec<_>>>()?;

        log::info!("Parsed {} solution(s)", solutions.len());
        Ok(solutions)
    }

    /// Render already parsed solutions into `out`
    pub fn render<W: Write>(&self, solutions: &[Solution], out: &mut W) -> Result<()> {
        report::write_report(out, solutions, &self.model)
    }

    /// Discover, parse and render `dir` into `out`
    ///
    /// Nothing is written unless every file parsed.
    pub fn write_report<W: Write>(&self, dir: &Path, out: &mut W) -> Result<usize> {
        let solutions = self.load(dir)?;
        self.render(&solutions, out)?;
        Ok(solutions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a_Tag.json"), "{}").unwrap();
        fs::write(dir.path().join("b_Tag.json"), "not json").unwrap();

        let reader = ResultReader::new(DecisionModel::new("Tag"));
        let mut out = Vec::new();
        let err = reader.write_report(dir.path(), &mut out).unwrap_err();

        assert_eq!(err.file_name(), Some("b_Tag.json"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_not_found_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let reader = ResultReader::default();
        let mut out = Vec::new();

        assert!(matches!(
            reader.write_report(dir.path(), &mut out),
            Err(ReportError::NotFound { .. })
        ));
        assert!(out.is_empty());
    }
}
