use std::fs;

use anyhow::{Context, Result};
use datepick_engine::{
    days_in_month, format_display, parse_iso, render_grid, resolve_locale, resolve_locale_now,
    to_iso, BuiltinTranslations, Clock, CommitLog, DateTimePicker, DateValue, FixedClock,
    PickerConfig, SystemClock,
};
use serde_json::json;
use tracing::info;

use crate::cli::{DaysArgs, GridArgs, LocaleArgs, RunArgs};
use crate::script::{self, Event};

pub fn days(args: DaysArgs) -> Result<()> {
    let days = days_in_month(args.year, args.month - 1)?;
    let out = json!({
        "year": args.year,
        "month": args.month,
        "count": days.len(),
        "days": days,
    });
    println!("{out}");
    Ok(())
}

pub fn locale(args: LocaleArgs) -> Result<()> {
    let service = BuiltinTranslations::new();
    let resolved = match args.year {
        Some(year) => resolve_locale(&service, &args.lang, year)?,
        None => resolve_locale_now(&service, &args.lang)?,
    };
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

pub fn grid(args: GridArgs) -> Result<()> {
    let config = PickerConfig::default()
        .with_lang(args.lang)
        .with_label(args.label);
    let initial = DateValue::new(args.year, args.month - 1, 1, 0, 0)?;
    let mut picker = DateTimePicker::with_environment(
        config,
        Some(initial),
        CommitLog::new(),
        clock(args.now.as_deref())?,
        &BuiltinTranslations::new(),
    )?;
    picker.activate();
    let snapshot = picker.snapshot().context("picker surface did not open")?;
    print!("{}", render_grid(&snapshot));
    Ok(())
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            PickerConfig::from_json(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => PickerConfig::default(),
    };
    if args.time {
        config = config.with_time(true);
    }
    if args.label {
        config = config.with_label(true);
    }
    if let Some(lang) = args.lang {
        config = config.with_lang(lang);
    }
    if let Some(name) = args.name {
        config = config.with_name(name);
    }

    let events = args
        .events
        .iter()
        .map(|raw| raw.parse::<Event>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;
    let initial = args
        .value
        .as_deref()
        .map(parse_iso)
        .transpose()
        .context("invalid --value")?;

    let mut picker = DateTimePicker::with_environment(
        config,
        initial,
        CommitLog::new(),
        clock(args.now.as_deref())?,
        &BuiltinTranslations::new(),
    )?;
    info!(events = events.len(), "running script");

    for (i, event) in events.iter().enumerate() {
        let committed = script::apply(&mut picker, event)
            .with_context(|| format!("event {} ({event}) rejected", i + 1))?;
        if let Some(value) = committed {
            let line = json!({
                "event": event.to_string(),
                "value": to_iso(&value),
                "display": format_display(&value, picker.config().show_time_select),
                "state": picker.state(),
            });
            println!("{line}");
        }
        if args.show {
            if let Some(snapshot) = picker.snapshot() {
                eprint!("{}", render_grid(&snapshot));
            }
        }
    }

    let summary = json!({
        "state": picker.state(),
        "display": picker.display_text(),
        "iso": picker.iso_value(),
        "field": picker.form_field(),
        "commits": picker.sink().len(),
    });
    println!("{summary}");
    Ok(())
}

fn clock(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(raw) => {
            let now = parse_iso(raw).with_context(|| format!("invalid --now '{raw}'"))?;
            Ok(Box::new(FixedClock(now.as_naive())))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
