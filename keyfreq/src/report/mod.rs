//! Ranked reports over the frequency tables
//!
//! A [`Report`] holds the sections selected by an [`OutputMode`]; it renders
//! as CSV-like text or as JSON.

pub mod ranking;

use crate::config::{OutputMode, ReportFormat, ReportPreferences};
use crate::frequency::FrequencyTables;
use crate::log_debug;
use serde::Serialize;
use std::io::{self, Write};

pub use ranking::{rank, RankedEntry};

const FUNCTIONS_HEADER: &str = "Functions";
const MODES_HEADER: &str = "Modes";
const SEPARATOR: &str = "------";

/// Errors while writing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<RankedEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<RankedEntry>>,
}

impl Report {
    /// Rank the sections `mode` asks for
    pub fn build(tables: &FrequencyTables, mode: OutputMode) -> Self {
        let report = Self {
            functions: mode
                .includes_functions()
                .then(|| rank(tables.functions())),
            modes: mode.includes_modes().then(|| rank(tables.modes())),
        };

        log_debug!("Report built",
            "mode" => mode,
            "functions" => report.functions.as_ref().map_or(0, Vec::len),
            "modes" => report.modes.as_ref().map_or(0, Vec::len)
        );

        report
    }

    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        format: ReportFormat,
        preferences: &ReportPreferences,
    ) -> Result<(), ReportError> {
        match format {
            ReportFormat::Csv => self.write_csv(writer, preferences)?,
            ReportFormat::Json => self.write_json(writer)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Each section: two blank lines, header, separator, blank line, rows
    pub fn write_csv<W: Write>(
        &self,
        writer: &mut W,
        preferences: &ReportPreferences,
    ) -> io::Result<()> {
        if let Some(functions) = &self.functions {
            write_csv_section(writer, FUNCTIONS_HEADER, functions, preferences)?;
        }
        if let Some(modes) = &self.modes {
            write_csv_section(writer, MODES_HEADER, modes, preferences)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

fn write_csv_section<W: Write>(
    writer: &mut W,
    header: &str,
    entries: &[RankedEntry],
    preferences: &ReportPreferences,
) -> io::Result<()> {
    write!(writer, "\n\n{}\n{}\n\n", header, SEPARATOR)?;
    for entry in entries {
        writeln!(
            writer,
            "{},{},{:.*}",
            entry.key, entry.count, preferences.percentage_precision, entry.percentage
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::UsagePair;

    fn tables() -> FrequencyTables {
        let mut tables = FrequencyTables::new();
        tables.record(&UsagePair::new("text-mode", "save-buffer"), 3).unwrap();
        tables.record(&UsagePair::new("prog-mode", "forward-char"), 10).unwrap();
        tables.record(&UsagePair::new("text-mode", "undo"), 1).unwrap();
        tables
    }

    fn render(report: &Report, format: ReportFormat, precision: usize) -> String {
        let preferences = ReportPreferences {
            percentage_precision: precision,
        };
        let mut out = Vec::new();
        report.write_to(&mut out, format, &preferences).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_build_selects_sections() {
        let tables = tables();

        let all = Report::build(&tables, OutputMode::All);
        assert!(all.functions.is_some() && all.modes.is_some());

        let modes = Report::build(&tables, OutputMode::Modes);
        assert!(modes.functions.is_none());
        assert_eq!(modes.modes.as_ref().map(Vec::len), Some(2));

        let functions = Report::build(&tables, OutputMode::Functions);
        assert!(functions.modes.is_none());
        assert_eq!(functions.functions.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_csv_all_sections() {
        let report = Report::build(&tables(), OutputMode::All);
        let text = render(&report, ReportFormat::Csv, 2);

        assert_eq!(
            text,
            "\n\nFunctions\n------\n\n\
             forward-char,10,71.43\n\
             save-buffer,3,21.43\n\
             undo,1,7.14\n\
             \n\nModes\n------\n\n\
             prog-mode,10,71.43\n\
             text-mode,4,28.57\n"
        );
    }

    #[test]
    fn test_csv_default_precision() {
        let report = Report::build(&tables(), OutputMode::Modes);
        let text = render(&report, ReportFormat::Csv, 6);

        assert_eq!(
            text,
            "\n\nModes\n------\n\nprog-mode,10,71.428571\ntext-mode,4,28.571429\n"
        );
    }

    #[test]
    fn test_csv_empty_tables_print_headers_only() {
        let report = Report::build(&FrequencyTables::new(), OutputMode::Functions);
        let text = render(&report, ReportFormat::Csv, 6);
        assert_eq!(text, "\n\nFunctions\n------\n\n");
    }

    #[test]
    fn test_json_only_selected_sections() {
        let report = Report::build(&tables(), OutputMode::Functions);
        let text = render(&report, ReportFormat::Json, 6);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("modes").is_none());

        let functions = value["functions"].as_array().unwrap();
        assert_eq!(functions.len(), 3);
        assert_eq!(functions[0]["key"], "forward-char");
        assert_eq!(functions[0]["count"], 10);
        assert!(text.ends_with('\n'));
    }
}
