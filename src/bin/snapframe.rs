use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use snapframe::{DocumentState, EditorDocument, ExportFormat, HistoryManager, presets};

#[derive(Parser, Debug)]
#[command(name = "snapframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default document as JSON.
    Defaults(DefaultsArgs),
    /// List built-in style templates.
    Templates,
    /// Apply a style template to a document JSON file.
    ApplyTemplate(ApplyTemplateArgs),
    /// Print the visual tree derived from a document JSON file.
    Style(StyleArgs),
    /// Print the file name an export would be saved under.
    ExportName(ExportNameArgs),
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Start from the pro (watermark-free) defaults.
    #[arg(long)]
    pro: bool,
}

#[derive(Parser, Debug)]
struct ApplyTemplateArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Template id (see `snapframe templates`).
    #[arg(long)]
    name: String,

    /// Output document JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportNameArgs {
    /// Original file name of the screenshot.
    #[arg(long, default_value = "")]
    file: String,

    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
    Webp,
}

impl From<FormatChoice> for ExportFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Png => ExportFormat::Png,
            FormatChoice::Jpeg => ExportFormat::Jpeg,
            FormatChoice::Webp => ExportFormat::Webp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Defaults(args) => cmd_defaults(args),
        Command::Templates => cmd_templates(),
        Command::ApplyTemplate(args) => cmd_apply_template(args),
        Command::Style(args) => cmd_style(args),
        Command::ExportName(args) => cmd_export_name(args),
    }
}

// Logs go to stderr so stdout stays machine-readable.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SNAPFRAME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn read_document(path: &Path) -> anyhow::Result<DocumentState> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let doc: DocumentState = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse document JSON '{}'", path.display()))?;
    Ok(doc)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    print_json(&DocumentState::with_entitlement(args.pro))
}

fn cmd_templates() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for t in presets::templates() {
        writeln!(out, "{}\t{}", t.id, t.name)?;
    }
    Ok(())
}

fn cmd_apply_template(args: ApplyTemplateArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let mut history = HistoryManager::new(EditorDocument::from_state(doc), 1);
    history.apply_template(&args.name).with_context(|| {
        format!(
            "unknown template '{}' (expected one of: {})",
            args.name,
            presets::template_ids().join(", ")
        )
    })?;

    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, history.state()).context("write document JSON")?;
    w.flush()?;
    Ok(())
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let doc = EditorDocument::from_state(read_document(&args.in_path)?);
    let tree = snapframe::render_tree(doc.state()).context("document has no image to style")?;
    print_json(&tree)
}

fn cmd_export_name(args: ExportNameArgs) -> anyhow::Result<()> {
    println!("{}", snapframe::export_file_name(&args.file, args.format.into()));
    Ok(())
}
