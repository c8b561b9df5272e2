mod reports;
mod scenarios;
mod tester;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use scenarios::{expand_scenarios, get_scenario, list_scenarios};
use tester::{LogicTester, ScenarioResult};
use tryloom_core::{Catalog, CatalogSource, JsonCatalog, StaticCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Colored summary for a terminal
    Console,
    /// Machine-readable array of scenario results
    Json,
    /// Summary table for pull requests and wikis
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "tryloom-tester", version)]
#[command(about = "Replays TryLoom session scenarios against the core reducer")]
struct Args {
    /// Comma-separated scenario names, or `all`
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// Print the scenario catalogue and exit
    #[arg(long)]
    list_scenarios: bool,

    /// How many times each scenario is replayed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Print every failing iteration as it happens
    #[arg(short, long)]
    verbose: bool,

    /// Write the report (or scenario list) to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON catalog to replay against instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut out = open_output(args.output.as_deref())?;

    if args.list_scenarios {
        write_scenario_list(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    println!("{}", "🧵 TryLoom Scenario Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());

    let started = Instant::now();
    let catalog = load_catalog(args.catalog.as_deref())?;
    log::info!("replaying against {} catalog items", catalog.len());

    let results = run_scenarios(&args, &catalog);
    write_report(&mut out, args.report, &results, started)?;
    out.flush()?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot write report to {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn write_scenario_list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available scenarios:")?;
    for (name, description) in list_scenarios() {
        writeln!(out, "  {name:20} - {description}")?;
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return StaticCatalog
            .load_catalog()
            .context("bundled catalog failed validation");
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    JsonCatalog(&json)
        .load_catalog()
        .with_context(|| format!("invalid catalog in {}", path.display()))
}

fn run_scenarios(args: &Args, catalog: &Catalog) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Replaying scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(26).yellow());

    let tester = LogicTester::new(catalog, args.verbose);
    expand_scenarios(&args.scenarios)
        .iter()
        .filter_map(|name| {
            let scenario = get_scenario(name);
            if scenario.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            }
            scenario
        })
        .map(|scenario| tester.run_scenario(scenario, args.iterations))
        .collect()
}

fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    results: &[ScenarioResult],
    started: Instant,
) -> Result<()> {
    match format {
        ReportFormat::Json => reports::generate_json_report(out, results),
        ReportFormat::Markdown if results.is_empty() => {
            writeln!(out, "# TryLoom Scenario Results\n\n_No scenarios executed._")?;
            Ok(())
        }
        ReportFormat::Markdown => reports::generate_markdown_report(out, results),
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(out, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(out, results, started.elapsed())?;
            }
            writeln!(out, "\n🏁 Total time: {:?}", started.elapsed())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(scenarios: &str) -> Args {
        Args {
            scenarios: scenarios.to_string(),
            list_scenarios: false,
            iterations: 1,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            catalog: None,
        }
    }

    fn render(format: ReportFormat, results: &[ScenarioResult]) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_report(&mut buf, format, results, Instant::now()).expect("report writes");
        String::from_utf8(buf).expect("utf8")
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tryloom-{}-{name}", std::process::id()))
    }

    #[test]
    fn cli_flags_parse() {
        let parsed = Args::try_parse_from([
            "tryloom-tester",
            "--scenarios",
            "all",
            "--report",
            "markdown",
            "-v",
        ])
        .expect("valid flags");
        assert_eq!(parsed.report, ReportFormat::Markdown);
        assert!(parsed.verbose);
        assert_eq!(parsed.iterations, 10);
        assert!(Args::try_parse_from(["tryloom-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn scenario_list_names_every_scenario() {
        let mut buf = Vec::new();
        write_scenario_list(&mut buf).expect("list writes");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("Available scenarios:"));
        for (name, _) in list_scenarios() {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let results = run_scenarios(&args("smoke,not-a-scenario"), Catalog::reference());
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn empty_runs_still_produce_reports() {
        assert_eq!(render(ReportFormat::Json, &[]).trim(), "[]");
        assert!(render(ReportFormat::Markdown, &[]).contains("_No scenarios executed._"));
        let console = render(ReportFormat::Console, &[]);
        assert!(console.contains("No scenarios executed."));
        assert!(console.contains("Total time"));
    }

    #[test]
    fn console_report_covers_all_scenarios() {
        let results = run_scenarios(&args("all"), Catalog::reference());
        let text = render(ReportFormat::Console, &results);
        assert!(text.contains("Total scenarios: 7"));
        assert!(text.contains("Failed: 0"));
    }

    #[test]
    fn file_output_is_created() {
        let path = scratch("report.txt");
        let mut out = open_output(Some(path.as_path())).expect("file opens");
        writeln!(out, "hello").expect("write");
        out.flush().expect("flush");
        drop(out);
        assert_eq!(std::fs::read_to_string(path).expect("read").trim(), "hello");
        assert!(open_output(Some(Path::new("/nonexistent-dir/report.txt"))).is_err());
    }

    #[test]
    fn catalogs_load_from_disk_or_bundle() {
        assert_eq!(load_catalog(None).expect("bundled").len(), 18);

        let good = scratch("catalog.json");
        std::fs::write(&good, r#"{"products":[]}"#).expect("write");
        assert!(load_catalog(Some(good.as_path())).expect("empty catalog").is_empty());

        let bad = scratch("broken.json");
        std::fs::write(&bad, "{").expect("write");
        let err = load_catalog(Some(bad.as_path())).expect_err("broken json");
        assert!(err.to_string().contains("invalid catalog"));

        assert!(load_catalog(Some(scratch("missing.json").as_path())).is_err());
    }
}
