//! Check command for validating a new event before it is added.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use daylane_core::{Clock, EventDraft, TimeOfDay};

use super::util::{resolve_date, resolve_now};
use crate::Config;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Day of the event: YYYY-MM-DD or "today".
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Start time (HH:MM).
    #[arg(long)]
    pub start: String,

    /// End time (HH:MM). Defaults to start plus the configured duration.
    #[arg(long)]
    pub end: Option<String>,

    /// Current time, as YYYY-MM-DDTHH:MM or HH:MM (defaults to the system clock).
    #[arg(long)]
    pub now: Option<String>,
}

pub fn run<W: Write>(
    writer: &mut W,
    args: &CheckArgs,
    config: &Config,
    clock: &dyn Clock,
) -> Result<()> {
    let now = resolve_now(args.now.as_deref(), clock)?;
    let date = resolve_date(&args.date, now)?;
    let start = TimeOfDay::parse_field(&args.start, "start time")?;

    let draft = match &args.end {
        Some(end) => EventDraft {
            date,
            start,
            end: TimeOfDay::parse_field(end, "end time")?,
        },
        None => EventDraft::with_duration(date, start, config.default_duration_minutes),
    };

    if let Err(err) = draft.validate(now) {
        tracing::debug!(?draft, %now, "draft rejected");
        bail!("rejected: {err}");
    }

    writeln!(writer, "ok: {} {}-{}", draft.date, draft.start, draft.end)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daylane_core::FixedClock;
    use insta::assert_snapshot;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn args(date: &str, start: &str, end: Option<&str>) -> CheckArgs {
        CheckArgs {
            date: date.to_string(),
            start: start.to_string(),
            end: end.map(String::from),
            now: None,
        }
    }

    fn check(args: &CheckArgs) -> Result<String> {
        let mut output = Vec::new();
        run(&mut output, args, &Config::default(), &clock())?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_valid_draft() {
        let output = check(&args("2025-06-02", "09:00", Some("09:45"))).unwrap();
        assert_snapshot!(output, @"ok: 2025-06-02 09:00-09:45");
    }

    #[test]
    fn fills_end_from_default_duration() {
        let output = check(&args("today", "23:30", None)).unwrap();
        assert_snapshot!(output, @"ok: 2025-06-01 23:30-23:59");
    }

    #[test]
    fn rejects_reversed_times() {
        let err = check(&args("2025-06-02", "10:00", Some("09:00"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rejected: end time 09:00 must be after start time 10:00"
        );
    }

    #[test]
    fn rejects_past_day() {
        let err = check(&args("2025-05-01", "10:00", Some("11:00"))).unwrap_err();
        assert!(err.to_string().contains("past date"));
    }

    #[test]
    fn rejects_malformed_start() {
        let err = check(&args("2025-06-02", "ten", None)).unwrap_err();
        assert!(err.to_string().contains("invalid start time"));
    }
}
