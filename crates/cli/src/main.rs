use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use authorship_core::config::{Config, ReportFormat};
use authorship_core::{analyze_batch_with, BatchOptions, DetectionResult, RiskLevel};

#[derive(Parser, Debug)]
#[command(
    name = "authorship",
    version,
    about = "Heuristic AI-text detector with model fingerprinting"
)]
struct Cli {
    /// Log engine internals (same as RUST_LOG=debug)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one or more text files; reads stdin when none (or `-`) is given
    #[command(alias = "analyse")]
    Analyze {
        inputs: Vec<PathBuf>,

        #[arg(long)]
        out: Option<PathBuf>,

        /// Exit with code 2 when any text scores at or above this probability
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_above: Option<u8>,

        #[arg(long)]
        sequential: bool,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        output_format: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
    All,
}

impl From<ReportFormat> for OutputFormat {
    fn from(f: ReportFormat) -> Self {
        match f {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Markdown => OutputFormat::Markdown,
            ReportFormat::All => OutputFormat::All,
        }
    }
}

struct Style {
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    orange: &'static str,
    reset: &'static str,
}

const COLOR: Style = Style {
    bold: "\x1b[1m",
    dim: "\x1b[2m",
    red: "\x1b[31m",
    green: "\x1b[32m",
    yellow: "\x1b[33m",
    orange: "\x1b[38;5;208m",
    reset: "\x1b[0m",
};

const PLAIN: Style = Style {
    bold: "",
    dim: "",
    red: "",
    green: "",
    yellow: "",
    orange: "",
    reset: "",
};

fn style() -> &'static Style {
    if std::env::var_os("NO_COLOR").is_some() {
        &PLAIN
    } else {
        &COLOR
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let res = match cli.cmd {
        Commands::Analyze {
            inputs,
            out,
            fail_above,
            sequential,
            config,
            output_format,
        } => {
            let cfg = load_config(config.as_deref());
            let settings = Settings {
                fail_above: fail_above.or(cfg.fail_above),
                sequential: sequential || cfg.sequential.unwrap_or(false),
                format: output_format
                    .or(cfg.format.map(OutputFormat::from))
                    .unwrap_or(OutputFormat::Json),
            };
            run_analyze(&inputs, out.as_deref(), &settings)
        }
    };

    match res {
        Ok(code) => code,
        Err(e) => {
            let s = style();
            eprintln!(
                "{}{red}error:{reset} {:#}",
                s.bold,
                e,
                red = s.red,
                reset = s.reset
            );
            std::process::ExitCode::from(1)
        }
    }
}

struct Settings {
    fail_above: Option<u8>,
    sequential: bool,
    format: OutputFormat,
}

fn print_banner() {
    let s = style();
    eprintln!(
        "\n  {bold}author{reset}{orange}|{reset}{dim}ship{reset}  {dim}ai-text detector{reset}\n",
        bold = s.bold,
        orange = s.orange,
        dim = s.dim,
        reset = s.reset,
    );
}

fn probability_color(p: u32) -> &'static str {
    let s = style();
    if p < 40 {
        s.green
    } else if p < 70 {
        s.yellow
    } else {
        s.red
    }
}

fn risk_color(risk: RiskLevel) -> &'static str {
    let s = style();
    match risk {
        RiskLevel::Critical | RiskLevel::High => s.red,
        RiskLevel::Medium => s.yellow,
        RiskLevel::Low => s.dim,
        RiskLevel::Minimal => s.green,
    }
}

fn print_result(label: &str, r: &DetectionResult) {
    let s = style();
    let pc = probability_color(r.ai_probability);
    let rc = risk_color(r.risk_level);

    eprintln!("  {bold}{label}{reset}", bold = s.bold, reset = s.reset);
    eprintln!(
        "  {dim}verdict        {reset}{rc}{bold}{}{reset}",
        r.verdict,
        dim = s.dim,
        rc = rc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}ai_probability {reset}{pc}{bold}{}%{reset}",
        r.ai_probability,
        dim = s.dim,
        pc = pc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}confidence     {reset}{bold}{}%{reset}",
        r.confidence,
        dim = s.dim,
        bold = s.bold,
        reset = s.reset
    );
    if let Some(model) = r.fingerprint.detected_model {
        eprintln!(
            "  {dim}model          {reset}{bold}{}{reset} {dim}({}%){reset}",
            model,
            r.fingerprint.confidence,
            dim = s.dim,
            bold = s.bold,
            reset = s.reset
        );
    }
    eprintln!();
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(p) => Config::load(p),
        None => match Config::discover() {
            Some(res) => res,
            None => return Config::default(),
        },
    };
    loaded.unwrap_or_else(|e| {
        eprintln!(
            "{}{}warning:{} failed to load config, using defaults: {:#}",
            style().bold,
            style().yellow,
            style().reset,
            e
        );
        Config::default()
    })
}

fn read_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<(String, String)>> {
    if inputs.is_empty() {
        return Ok(vec![("<stdin>".to_string(), read_stdin()?)]);
    }
    inputs
        .iter()
        .map(|p| {
            if p.as_os_str() == "-" {
                Ok(("<stdin>".to_string(), read_stdin()?))
            } else {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("read {}", p.display()))?;
                Ok((p.display().to_string(), text))
            }
        })
        .collect()
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

fn write_reports(
    out: &Path,
    labels: &[String],
    results: &[DetectionResult],
    format: OutputFormat,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("create out dir {}", out.display()))?;

    if matches!(format, OutputFormat::Json | OutputFormat::All) {
        let json_path = out.join("report.json");
        let json = if let [single] = results {
            serde_json::to_vec_pretty(single)
        } else {
            serde_json::to_vec_pretty(results)
        }
        .context("serialize report json")?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("write {}", json_path.display()))?;
    }

    if matches!(format, OutputFormat::Markdown | OutputFormat::All) {
        let md_path = out.join("report.md");
        let md = labels
            .iter()
            .zip(results)
            .map(|(label, r)| format!("<!-- {label} -->\n{}", r.to_markdown()))
            .collect::<Vec<_>>()
            .join("\n---\n\n");
        std::fs::write(&md_path, md).with_context(|| format!("write {}", md_path.display()))?;
    }

    Ok(())
}

fn run_analyze(
    inputs: &[PathBuf],
    out: Option<&Path>,
    settings: &Settings,
) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let (labels, texts): (Vec<String>, Vec<String>) = read_inputs(inputs)?.into_iter().unzip();

    let opts = BatchOptions {
        parallel: !settings.sequential,
    };
    let results = analyze_batch_with(&texts, &opts)?;

    if let Some(out) = out {
        write_reports(out, &labels, &results, settings.format)?;
    }

    for (label, r) in labels.iter().zip(&results) {
        // Machine-parseable line on stdout; `input` is last since paths may contain spaces
        println!(
            "ai_probability={} confidence={} risk={} model={} input={}",
            r.ai_probability,
            r.confidence,
            r.risk_level.as_str(),
            r.fingerprint
                .detected_model
                .map(|m| m.name())
                .unwrap_or("none"),
            label
        );
        print_result(label, r);
    }

    if let Some(out) = out {
        eprintln!(
            "  {dim}\u{2192} {}{reset}\n",
            out.display(),
            dim = s.dim,
            reset = s.reset
        );
    }

    let flagged = settings
        .fail_above
        .map(|limit| {
            results
                .iter()
                .filter(|r| r.ai_probability >= u32::from(limit))
                .count()
        })
        .unwrap_or(0);

    info!(
        texts = results.len(),
        flagged,
        fail_above = ?settings.fail_above,
        "gate evaluated"
    );

    let exit = if flagged > 0 {
        eprintln!(
            "  {red}{bold}GATE FAILED{reset}  {dim}({} of {} texts at or above {}%){reset}",
            flagged,
            results.len(),
            settings.fail_above.unwrap_or(0),
            red = s.red,
            bold = s.bold,
            dim = s.dim,
            reset = s.reset,
        );
        std::process::ExitCode::from(2)
    } else {
        eprintln!(
            "  {green}{bold}PASS{reset}",
            green = s.green,
            bold = s.bold,
            reset = s.reset
        );
        std::process::ExitCode::from(0)
    };

    eprintln!();

    Ok(exit)
}
