//! Layout command for showing where a day's events are drawn.
//!
//! Reads the day-keyed event file, lays out the selected day, and prints one
//! line per event (or the whole view as JSON with `--json`).

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use daylane_core::{Actions, Clock, EventId, EventStatus, Schedule, TimeOfDay, layout_with};
use serde::Serialize;

use super::util::{load_schedule, resolve_date, resolve_now};
use crate::Config;

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// JSON file of events keyed by date (YYYY-MM-DD).
    pub file: PathBuf,

    /// Day to lay out: YYYY-MM-DD or "today".
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Current time, as YYYY-MM-DDTHH:MM or HH:MM (defaults to the system clock).
    #[arg(long)]
    pub now: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One event as it appears on the timeline.
#[derive(Debug, Serialize)]
pub struct PlacedEvent {
    pub id: EventId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub text: String,
    pub location: String,
    pub column: usize,
    pub top: f64,
    pub height: f64,
    pub left_px: u64,
    pub status: EventStatus,
    pub actions: Actions,
}

/// A laid-out day.
#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub column_count: usize,
    /// Only set when the day is today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_offset_px: Option<f64>,
    pub events: Vec<PlacedEvent>,
}

pub fn run<W: Write>(
    writer: &mut W,
    args: &LayoutArgs,
    config: &Config,
    clock: &dyn Clock,
) -> Result<()> {
    let now = resolve_now(args.now.as_deref(), clock)?;
    let date = resolve_date(&args.date, now)?;
    let schedule = load_schedule(&args.file)?;

    let view = build_day_view(&schedule, date, now, config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&view).context("failed to serialize layout")?;
        writeln!(writer, "{json}")?;
    } else {
        write!(writer, "{}", format_day_view(&view))?;
    }
    Ok(())
}

/// Lays out `date` and attaches status and pixel geometry to each event.
pub fn build_day_view(
    schedule: &Schedule,
    date: NaiveDate,
    now: NaiveDateTime,
    config: &Config,
) -> Result<DayView> {
    let events = schedule
        .events_for(date)
        .with_context(|| format!("failed to read events for {date}"))?;
    let layout = layout_with(&events, &config.layout_config());
    let geometry = config.geometry();

    let placed = layout
        .assignments
        .into_iter()
        .map(|assignment| {
            let event = &events[assignment.index];
            let status = EventStatus::classify(event.done, date, event.end, now);
            PlacedEvent {
                id: assignment.id,
                start: event.start,
                end: event.end,
                text: event.text.clone(),
                location: event.location.clone(),
                column: assignment.column,
                top: assignment.top,
                height: assignment.height,
                left_px: geometry.left_px(assignment.column),
                status,
                actions: status.actions(),
            }
        })
        .collect();

    let scroll_offset_px =
        (date == now.date()).then(|| geometry.scroll_offset_px(TimeOfDay::from(now.time())));

    Ok(DayView {
        date,
        column_count: layout.column_count,
        scroll_offset_px,
        events: placed,
    })
}

/// Formats a day view for the terminal.
pub fn format_day_view(view: &DayView) -> String {
    let mut out = String::new();

    if view.events.is_empty() {
        writeln!(out, "{}: no events", view.date).unwrap();
        return out;
    }

    writeln!(
        out,
        "{}: {} {} in {} {}",
        view.date,
        view.events.len(),
        plural(view.events.len(), "event", "events"),
        view.column_count,
        plural(view.column_count, "lane", "lanes"),
    )
    .unwrap();
    if let Some(offset) = view.scroll_offset_px {
        writeln!(out, "now: scroll to {offset:.0}px").unwrap();
    }

    for e in &view.events {
        writeln!(
            out,
            "  [{}] {}-{}  top {:6.2}%  height {:6.2}%  left {:>4}px  {:<8}  #{} {} @ {}",
            e.column,
            e.start,
            e.end,
            e.top,
            e.height,
            e.left_px,
            e.status.as_str(),
            e.id,
            e.text,
            e.location,
        )
        .unwrap();
    }
    out
}

const fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylane_core::FixedClock;
    use insta::assert_snapshot;

    const EVENTS: &str = r#"{
        "2025-06-01": [
            {"id": 1, "start_time": "09:00", "end_time": "10:00", "event": "Standup", "location": "Office", "done": true},
            {"id": 2, "start_time": "09:30", "end_time": "10:30", "event": "Review", "location": "Office", "done": null},
            {"id": 3, "start_time": "10:00", "end_time": "11:00", "event": "Walk", "done": null},
            {"id": 4, "start_time": "12:00", "end_time": "12:05", "event": "Call", "location": "Home", "done": false}
        ]
    }"#;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(10, 45, 0)
            .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn day_view_combines_layout_status_and_geometry() {
        let schedule = Schedule::from_json(EVENTS).unwrap();
        let view = build_day_view(&schedule, day(), now(), &Config::default()).unwrap();

        assert_eq!(view.column_count, 2);
        let lanes: Vec<_> = view.events.iter().map(|e| e.column).collect();
        assert_eq!(lanes, vec![0, 1, 0, 0]);
        let statuses: Vec<_> = view.events.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                EventStatus::Done,
                EventStatus::Past,
                EventStatus::Upcoming,
                EventStatus::Failed
            ]
        );
        assert_eq!(view.events[1].left_px, 268);
        assert!(view.events[1].actions.can_mark_outcome);
        assert_eq!(view.scroll_offset_px, Some(875.0));
    }

    #[test]
    fn text_output() {
        let schedule = Schedule::from_json(EVENTS).unwrap();
        let view = build_day_view(&schedule, day(), now(), &Config::default()).unwrap();

        assert_snapshot!(format_day_view(&view), @r"
        2025-06-01: 4 events in 2 lanes
        now: scroll to 875px
          [0] 09:00-10:00  top  37.50%  height   4.17%  left    8px  done      #1 Standup @ Office
          [1] 09:30-10:30  top  39.58%  height   4.17%  left  268px  past      #2 Review @ Office
          [0] 10:00-11:00  top  41.67%  height   4.17%  left    8px  upcoming  #3 Walk @ その他
          [0] 12:00-12:05  top  50.00%  height   2.00%  left    8px  failed    #4 Call @ Home
        ");
    }

    #[test]
    fn empty_day() {
        let schedule = Schedule::from_json(EVENTS).unwrap();
        let other = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let view = build_day_view(&schedule, other, now(), &Config::default()).unwrap();

        assert_eq!(view.scroll_offset_px, None);
        assert_snapshot!(format_day_view(&view), @"2025-06-03: no events");
    }

    #[test]
    fn run_writes_json() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        std::fs::write(&path, EVENTS).unwrap();

        let args = LayoutArgs {
            file: path,
            date: "today".to_string(),
            now: None,
            json: true,
        };
        let mut output = Vec::new();
        run(&mut output, &args, &Config::default(), &FixedClock(now())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["date"], "2025-06-01");
        assert_eq!(value["column_count"], 2);
        assert_eq!(value["events"][1]["id"], "2");
        assert_eq!(value["events"][1]["column"], 1);
        assert_eq!(value["events"][1]["status"], "past");
        assert_eq!(value["events"][2]["location"], "その他");
        assert_eq!(value["events"][0]["actions"]["can_delete"], false);
    }

    #[test]
    fn rows_keep_their_own_event_data() {
        let json = r#"{"2025-06-01": [
            {"id": 2, "start_time": "15:00", "end_time": "16:00", "event": "Late"},
            {"id": 1, "start_time": "09:00", "end_time": "10:00", "event": "Early"}
        ]}"#;
        let schedule = Schedule::from_json(json).unwrap();
        let view = build_day_view(&schedule, day(), now(), &Config::default()).unwrap();

        let rows: Vec<_> = view
            .events
            .iter()
            .map(|e| (e.id.to_string(), e.text.as_str(), e.start.to_string()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1".to_string(), "Early", "09:00".to_string()),
                ("2".to_string(), "Late", "15:00".to_string())
            ]
        );
        assert!((view.events[1].top - 62.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_ids_repeated_within_the_day() {
        let json = r#"{"2025-06-01": [
            {"id": 1, "start_time": "09:00", "end_time": "10:00", "event": "A"},
            {"id": "1", "start_time": "15:00", "end_time": "16:00", "event": "B"}
        ]}"#;
        let schedule = Schedule::from_json(json).unwrap();

        let err = build_day_view(&schedule, day(), now(), &Config::default()).unwrap_err();
        assert_snapshot!(format!("{err:#}"), @"failed to read events for 2025-06-01: event #1 on 2025-06-01 reuses ID 1 from event #0");
    }

    #[test]
    fn run_reports_bad_records() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("events.json");
        std::fs::write(&path, r#"{"2025-06-01": [{"id": 1, "start_time": "nine"}]}"#).unwrap();

        let args = LayoutArgs {
            file: path,
            date: "2025-06-01".to_string(),
            now: None,
            json: false,
        };
        let mut output = Vec::new();
        let err = run(&mut output, &args, &Config::default(), &FixedClock(now())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid start time"));
    }
}
