mod cli;
mod config;

use boq_builder::adapters::outbound::console::StderrProgressReporter;
use boq_builder::adapters::outbound::filesystem::{FileSystemBoqStore, FileSystemReader};
use boq_builder::application::dto::{
    BoqEdit, BoqRequest, EditRequest, OutputFormat, ResolveRequest, ValidateResponse,
};
use boq_builder::application::factories::{FormatterFactory, PresenterFactory};
use boq_builder::application::read_models::BoqReadModel;
use boq_builder::application::use_cases::{
    EditBoqUseCase, ResolveItemUseCase, ShowBoqUseCase, ValidateBoqUseCase,
};
use boq_builder::boq_engine::services::DependencyResolver;
use boq_builder::ports::outbound::ProgressReporter;
use boq_builder::shared::{ExitCode, Result};
use cli::{Args, Command};
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG: &str = "catalog.json";
const DEFAULT_BOQ: &str = "boq.json";

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

/// Logs go to stderr; stdout carries rendered output only
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Effective settings after merging CLI flags over the config file over defaults
#[derive(Debug)]
struct Settings {
    catalog: PathBuf,
    boq: PathBuf,
    format: OutputFormat,
    max_depth: Option<usize>,
    strict: bool,
}

impl Settings {
    fn merge(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let format = config.output_format()?.unwrap_or_default();

        Ok(Self {
            catalog: args
                .catalog
                .clone()
                .or(config.catalog)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG)),
            boq: args
                .boq
                .clone()
                .or(config.boq)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOQ)),
            format,
            max_depth: config.max_depth,
            strict: config.strict.unwrap_or(false),
        })
    }

    fn location(&self) -> BoqRequest {
        BoqRequest::new(self.catalog.clone(), self.boq.clone())
    }

    fn resolver(&self) -> DependencyResolver {
        self.max_depth
            .map_or_else(DependencyResolver::new, DependencyResolver::with_max_depth)
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::merge(&args, config)?;
    debug!(?settings, "effective settings");

    let reporter = || {
        if args.quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        }
    };

    let edit = match args.command.clone() {
        Command::Add { item_id, quantity } => BoqEdit::Add { item_id, quantity },
        Command::Set { item_id, quantity } => BoqEdit::SetQuantity { item_id, quantity },
        Command::Remove { item_id } => BoqEdit::Remove { item_id },
        Command::Show { format, output } => {
            let use_case =
                ShowBoqUseCase::new(FileSystemReader::new(), FileSystemBoqStore::new(), reporter());
            let model = use_case.execute(&settings.location())?;
            render(&model, format.unwrap_or(settings.format), output, &reporter())?;
            return Ok(ExitCode::Success);
        }
        Command::Validate { strict } => {
            let use_case = ValidateBoqUseCase::new(
                FileSystemReader::new(),
                FileSystemBoqStore::new(),
                reporter(),
                settings.resolver(),
            );
            let response = use_case.execute(&settings.location(), strict || settings.strict)?;
            print_validation(&response);
            return Ok(if response.passed {
                ExitCode::Success
            } else {
                ExitCode::ValidationFailed
            });
        }
        Command::Resolve {
            item_id,
            quantity,
            format,
        } => {
            let use_case =
                ResolveItemUseCase::new(FileSystemReader::new(), reporter(), settings.resolver());
            let response =
                use_case.execute(ResolveRequest::new(settings.catalog.clone(), item_id, quantity))?;
            render(&response.model, format.unwrap_or(settings.format), None, &reporter())?;
            return Ok(ExitCode::Success);
        }
    };

    let use_case = EditBoqUseCase::new(
        FileSystemReader::new(),
        FileSystemBoqStore::new(),
        reporter(),
        settings.resolver(),
    );
    use_case.execute(EditRequest::new(settings.location(), edit))?;
    Ok(ExitCode::Success)
}

fn render(
    model: &BoqReadModel,
    format: OutputFormat,
    output: Option<PathBuf>,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.report(FormatterFactory::progress_message(format));
    let content = FormatterFactory::create(format).format(model)?;
    PresenterFactory::create(PresenterFactory::from_output(output)).present(&content)
}

/// Findings go to stdout so they can be piped; the verdict goes to stderr
fn print_validation(response: &ValidateResponse) {
    let report = &response.report;
    for finding in &report.errors {
        println!("error: {}", finding);
    }
    for finding in &report.warnings {
        println!("warning: {}", finding);
    }

    let summary = format!(
        "{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    if response.passed {
        eprintln!("{} {}", "✔ valid:".green().bold(), summary);
    } else {
        eprintln!("{} {}", "✘ invalid:".red().bold(), summary);
    }
}
