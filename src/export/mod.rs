//! Progress summary export.
//!
//! Rows carry raw category ids; callers pass a label function to resolve
//! display names (for example through [`crate::i18n::Strings`]).

use std::{
    fs::{
        self,
        File,
    },
    io::{
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use chrono::{
    DateTime,
    TimeZone,
};

use crate::{
    core::TangoError,
    session::{
        OutcomeCounts,
        StatsReport,
    },
};

pub const CSV_HEADER: &str = "Category,Total,Correct,Incorrect,Skipped,Remaining,Correct %,Incorrect %,Skipped %,Remaining %";

const FILE_PREFIX: &str = "japanese-vocabulary-stats";

/// Renders the report as CSV. Categories without words never produce a row;
/// the TOTAL row is only written when something was counted.
pub fn render_csv<F>(report: &StatsReport, label: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for row in &report.categories {
        if row.counts.total == 0 {
            continue;
        }
        csv.push_str(&csv_row(&label(&row.category), &row.counts));
    }

    if report.total.total > 0 {
        csv.push('\n');
        csv.push_str(&csv_row("TOTAL", &report.total));
    }

    csv
}

fn csv_row(name: &str, counts: &OutcomeCounts) -> String {
    format!(
        "\"{}\",{},{},{},{},{},{},{},{},{}\n",
        name.replace('"', "\"\""),
        counts.total,
        counts.correct,
        counts.incorrect,
        counts.skipped,
        counts.unanswered,
        percent_cell(counts, counts.correct),
        percent_cell(counts, counts.incorrect),
        percent_cell(counts, counts.skipped),
        percent_cell(counts, counts.unanswered),
    )
}

fn percent_cell(counts: &OutcomeCounts, count: usize) -> String {
    counts.percentage(count).map(|value| format!("{:.1}%", value)).unwrap_or_default()
}

pub fn to_json(report: &StatsReport, pretty: bool) -> Result<String, TangoError> {
    let json =
        if pretty { serde_json::to_string_pretty(report) } else { serde_json::to_string(report) }?;
    Ok(json)
}

/// `japanese-vocabulary-stats-YYYY-MM-DD-HH-MM-SS.csv`
pub fn file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}-{}.csv", FILE_PREFIX, now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Writes the CSV into `dir` under a timestamped name and returns the path.
pub fn write_csv<F>(report: &StatsReport, dir: &Path, label: F) -> Result<PathBuf, TangoError>
where
    F: Fn(&str) -> String,
{
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(&chrono::Local::now()));

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(render_csv(report, label).as_bytes())?;
    writer.flush()?;

    log::info!("Exported stats for {} categories to {}", report.categories.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::session::CategoryStats;

    fn report() -> StatsReport {
        let colors =
            OutcomeCounts { total: 3, correct: 1, incorrect: 1, skipped: 0, unanswered: 1 };
        let animals =
            OutcomeCounts { total: 2, correct: 2, incorrect: 0, skipped: 0, unanswered: 0 };
        let mut total = OutcomeCounts::default();
        total.merge(&colors);
        total.merge(&animals);

        StatsReport {
            categories: vec![
                CategoryStats { category: "animals".to_string(), counts: animals },
                CategoryStats { category: "colors".to_string(), counts: colors },
            ],
            total,
        }
    }

    #[test]
    fn test_render_csv() {
        let csv =
            render_csv(&report(), |id| if id == "colors" { "Colores".into() } else { id.into() });
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "\"animals\",2,2,0,0,0,100.0%,0.0%,0.0%,0.0%");
        assert_eq!(lines[2], "\"Colores\",3,1,1,0,1,33.3%,33.3%,0.0%,33.3%");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "\"TOTAL\",5,3,1,0,1,60.0%,20.0%,0.0%,20.0%");
    }

    #[test]
    fn test_render_csv_empty_report() {
        let csv = render_csv(&StatsReport::default(), |id| id.to_string());
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_labels_are_quoted() {
        let csv = render_csv(&report(), |_| "say \"hi\"".to_string());
        assert!(csv.contains("\"say \"\"hi\"\"\",2,"));
    }

    #[test]
    fn test_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(file_name(&now), "japanese-vocabulary-stats-2024-03-09-07-05-02.csv");
    }

    #[test]
    fn test_write_csv_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&report(), dir.path(), |id| id.to_string()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with(FILE_PREFIX));

        let json = to_json(&report(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"]["total"], 5);
        assert_eq!(value["categories"][1]["category"], "colors");
    }
}
