//! Days command for listing which dates have events.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::util::load_schedule;

#[derive(Debug, Args)]
pub struct DaysArgs {
    /// JSON file of events keyed by date (YYYY-MM-DD).
    pub file: PathBuf,
}

pub fn run<W: Write>(writer: &mut W, args: &DaysArgs) -> Result<()> {
    let schedule = load_schedule(&args.file)?;

    let mut any = false;
    for date in schedule.dates() {
        any = true;
        writeln!(
            writer,
            "{date}  events: {}  next id: {}",
            schedule.records_for(date).len(),
            schedule.next_id(date)
        )?;
    }

    if !any {
        writeln!(writer, "No events recorded.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn lists_days_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        std::fs::write(
            &path,
            r#"{
                "2025-06-02": [{"id": 7, "start_time": "08:00"}],
                "2025-06-01": [{"id": 1}, {"id": 2}],
                "2025-06-03": []
            }"#,
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &DaysArgs { file: path }).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        2025-06-01  events: 2  next id: 3
        2025-06-02  events: 1  next id: 8
        ");
    }

    #[test]
    fn empty_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        std::fs::write(&path, "{}").unwrap();

        let mut output = Vec::new();
        run(&mut output, &DaysArgs { file: path }).unwrap();
        assert_snapshot!(String::from_utf8(output).unwrap(), @"No events recorded.");
    }
}
