mod output;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::core::{FigureSet, ReportConfig, compile, load_scenario};
use crate::error::ReportError;
use crate::render::{OutputFormat, render};

pub use output::{compile_pdf, output_dir, write_atomic};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFormat {
    Typst,
    Markdown,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Typst => OutputFormat::Typst,
            CliFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "retirement-report",
    version,
    about = "Render a retirement analysis report from scenario data and pre-rendered charts"
)]
struct Cli {
    #[arg(long, default_value = "info.json", help = "Scenario data file (JSON)")]
    data: PathBuf,
    #[arg(long, default_value = "figs/required_principal.png")]
    required_principal: PathBuf,
    #[arg(long, default_value = "figs/yearly_contribution.png")]
    yearly_contribution: PathBuf,
    #[arg(long, default_value = "retirement_report.typ")]
    output: PathBuf,
    #[arg(
        long,
        value_enum,
        help = "Output format; inferred from the output extension when omitted"
    )]
    format: Option<CliFormat>,
    #[arg(long, help = "JSON file with show_captions / currency_symbol")]
    config: Option<PathBuf>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Show figure captions; `--show-captions false` overrides the config file"
    )]
    show_captions: Option<bool>,
    #[arg(long, help = "Currency symbol for income figures [default: $]")]
    currency_symbol: Option<String>,
    #[arg(long, help = "Also compile the Typst output to this PDF with the typst CLI")]
    pdf: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub data: PathBuf,
    pub figures: FigureSet,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub config: ReportConfig,
    pub pdf: Option<PathBuf>,
}

fn build_request(cli: Cli) -> Result<ReportRequest, ReportError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ReportConfig::default(),
    };
    if let Some(show) = cli.show_captions {
        config.show_captions = show;
    }
    let symbol_source = match (&cli.currency_symbol, &cli.config) {
        (Some(_), _) => "--currency-symbol".to_string(),
        (None, Some(path)) => format!("currency_symbol in {}", path.display()),
        (None, None) => "currency_symbol".to_string(),
    };
    if let Some(symbol) = cli.currency_symbol {
        config.currency_symbol = symbol;
    }
    if config.currency_symbol.trim().is_empty() {
        return Err(ReportError::Config(format!("{symbol_source} must not be empty")));
    }
    if config.currency_symbol.chars().any(char::is_control) {
        return Err(ReportError::Config(format!(
            "{symbol_source} must not contain control characters"
        )));
    }

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| OutputFormat::from_path(&cli.output));
    if cli.pdf.is_some() && format != OutputFormat::Typst {
        return Err(ReportError::Config(
            "--pdf requires Typst output".to_string(),
        ));
    }

    Ok(ReportRequest {
        data: cli.data,
        figures: FigureSet::new(cli.required_principal, cli.yearly_contribution),
        output: cli.output,
        format,
        config,
        pdf: cli.pdf,
    })
}

fn load_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text)
        .map_err(|e| ReportError::Config(format!("{}: {e}", path.display())))
}

pub fn generate(request: &ReportRequest) -> Result<(), ReportError> {
    let record = load_scenario(&request.data)?;
    request.figures.resolve()?;
    let figures = request.figures.relative_to(output_dir(&request.output))?;
    let doc = compile(&record, &figures, &request.config);
    let contents = render(&doc, request.format);
    log::debug!("rendered {} bytes as {:?}", contents.len(), request.format);

    write_atomic(&request.output, &contents)?;
    log::info!("wrote {}", request.output.display());

    if let Some(pdf) = &request.pdf {
        compile_pdf("typst", &request.output, pdf)?;
    }
    Ok(())
}

pub fn run() -> Result<(), ReportError> {
    let request = build_request(Cli::parse())?;
    generate(&request)
}
