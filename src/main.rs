//! # chatstat CLI
//!
//! Command-line front end for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatstat::ChatstatError;
use chatstat::analysis::{Analyzer, Report};
use chatstat::cli::Args;
use chatstat::core::apply_filters;
use chatstat::format::write_to_format;
use chatstat::parser::TranscriptParser;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();

    let parser = TranscriptParser::with_config(args.parser_config())?;
    let transcript = parser.parse(&args.input)?.ensure_usable()?;
    let stats = *transcript.stats();
    info!(
        input = %args.input.display(),
        records = stats.records,
        dropped = stats.dropped(),
        "transcript loaded"
    );

    if args.list_senders {
        for sender in transcript.senders() {
            println!("{sender}");
        }
        return Ok(());
    }

    let filter = args.filter_config()?;
    let records = apply_filters(transcript.into_records(), &filter);
    if records.is_empty() {
        return Err(ChatstatError::EmptyTranscript);
    }
    debug!(records = records.len(), "date window applied");

    let analyzer = Analyzer::try_new(&records, args.scope())?;
    let report = analyzer.report(&args.analysis_config());

    if args.json {
        print_json(&report)?;
    } else {
        println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
        println!("{RULE}");
        println!("📂 Input:   {}", args.input.display());
        println!("👤 Scope:   {}", report.scope);
        if let Some(after) = &args.after {
            println!("📅 After:   {after}");
        }
        if let Some(before) = &args.before {
            println!("📅 Before:  {before}");
        }
        println!(
            "🧹 Parsed:  {} records ({} dropped: {} notices, {} empty, {} bad timestamps)",
            stats.records,
            stats.dropped(),
            stats.system_notices,
            stats.empty_bodies,
            stats.unparseable_timestamps
        );
        print_report(&report);
    }

    if let Some(target) = args.export_target() {
        let (path, format) = target?;
        write_to_format(&records, &path, format)?;
        let line = format!("💾 Exported {} records as {format} to {}", records.len(), path.display());
        if args.json {
            eprintln!("{line}");
        } else {
            println!();
            println!("{line}");
        }
    }

    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}

#[cfg(feature = "json-output")]
fn print_json(report: &Report) -> Result<(), ChatstatError> {
    println!("{}", report.to_json()?);
    Ok(())
}

#[cfg(not(feature = "json-output"))]
fn print_json(_report: &Report) -> Result<(), ChatstatError> {
    Err(ChatstatError::invalid_format(
        "report",
        "JSON output requires the 'json-output' feature to be enabled",
    ))
}

fn print_report(report: &Report) {
    let metrics = &report.metrics;
    println!();
    println!("📈 Totals:");
    println!("   Messages:  {}", metrics.messages);
    println!("   Words:     {}", metrics.words);
    println!("   Links:     {}", metrics.links);
    println!("   Avg words: {:.1}", metrics.words_per_message());

    if !report.active_senders.is_empty() {
        println!();
        println!("🗣️  Most active:");
        for share in &report.active_senders {
            println!(
                "   {:<24} {:>6}  ({:.1}%)",
                share.sender, share.messages, share.percent
            );
        }
    }

    println!();
    println!("😀 Top emojis:");
    if report.top_emojis.is_empty() {
        println!("   (none)");
    }
    for row in &report.top_emojis {
        println!("   {}  {}", row.emoji, row.count);
    }

    println!();
    println!("🔤 Top words:");
    if report.top_words.is_empty() {
        println!("   (none)");
    }
    for row in &report.top_words {
        println!("   {:<16} {}", row.word, row.count);
    }

    let timeline = &report.timeline;
    println!();
    println!("🕒 Activity:");
    if let Some(hour) = timeline.busiest_hour() {
        println!("   Busiest hour: {:02}:00 ({} messages)", hour.hour, hour.messages);
    }
    if let Some(day) = timeline.busiest_weekday() {
        println!("   Busiest day:  {} ({} messages)", day.weekday, day.messages);
    }
    for month in &timeline.monthly {
        println!("   {:<10} {}", month.month, month.messages);
    }

    println!();
    println!("📜 Longest messages:");
    for row in &report.longest_messages {
        let who = row.sender.as_deref().map(|s| format!("{s}, ")).unwrap_or_default();
        let preview: String = row.message.chars().take(60).collect();
        let ellipsis = if row.message.chars().count() > 60 { "…" } else { "" };
        println!(
            "   [{}{}] {} words: {}{}",
            who,
            row.timestamp.format("%Y-%m-%d %H:%M"),
            row.words,
            preview.replace('\n', " "),
            ellipsis
        );
    }
}
