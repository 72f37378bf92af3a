//! Command-line DANFE Simplificado label generator.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use danfe::config::DanfeConfig;
use danfe::core::{NfeDocument, format_access_key, format_date, format_datetime, format_tax_id};
use danfe::facade::DanfeGenerator;
use danfe::nfe;
use danfe::source::read_source;

/// Generate DANFE Simplificado ZPL labels from NFe XML files
#[derive(Parser)]
#[command(name = "danfe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a label and write it to disk
    Generate(GenerateArgs),

    /// Locate the XML file for an invoice code in the configured directory
    Find(FindArgs),

    /// Show the invoice fields printed on the label
    Info(InfoArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// NFe XML file
    #[arg(conflicts_with = "code", required_unless_present = "code")]
    xml: Option<PathBuf>,

    /// Look the XML up by invoice number or access key in the configured directory
    #[arg(long)]
    code: Option<String>,

    /// Output file (defaults to the configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also print the ZPL to stdout
    #[arg(long)]
    print: bool,

    /// Print the invoice fields before generating
    #[arg(long)]
    info: bool,
}

#[derive(Args)]
struct FindArgs {
    /// Invoice number or access key (any part of the file name)
    code: String,
}

#[derive(Args)]
struct InfoArgs {
    /// NFe XML file
    xml: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG overrides -v.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate(args) => generate(args, cli.config.as_deref()),
        Commands::Find(args) => find(args, cli.config.as_deref()),
        Commands::Info(args) => info(args),
    }
}

fn generate(args: GenerateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = DanfeConfig::load_or_default(config_path)?.with_env_overrides();
    let today = chrono::Local::now().date_naive();
    let generator = DanfeGenerator::from_config(&config, today);

    let label = match (&args.xml, &args.code) {
        (Some(path), _) => generator.generate_from_path(path)?,
        (None, Some(code)) => generator.generate_by_code(code)?,
        (None, None) => bail!("either an XML file or --code is required"),
    };

    if args.info {
        print_info(label.invoice())?;
    }

    let output = args.output.unwrap_or(config.output);
    generator
        .save(&label, &output)
        .with_context(|| format!("saving label for {}", label.summary()))?;

    println!("DANFE salva em: {}", output.display());
    if args.print {
        println!();
        println!("{}", label.markup());
    }
    Ok(())
}

fn find(args: FindArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = DanfeConfig::load_or_default(config_path)?.with_env_overrides();
    let today = chrono::Local::now().date_naive();
    let Some(dir) = config.xml_directory(today) else {
        bail!("no XML directory configured (set xml_dir or DANFE_XML_DIR)");
    };
    println!("{}", dir.find(&args.code)?.display());
    Ok(())
}

fn info(args: InfoArgs) -> anyhow::Result<()> {
    let xml = read_source(&args.xml)?;
    let document = nfe::from_nfe_xml(&xml)
        .with_context(|| format!("parsing {}", args.xml.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_info(&document)?;
    }
    Ok(())
}

fn print_info(nfe: &NfeDocument) -> anyhow::Result<()> {
    let issuer = nfe.issuer();
    let recipient = nfe.recipient();

    println!("=== INFORMAÇÕES DA NFe ===");
    println!("Número: {}", nfe.number());
    println!("Série: {}", nfe.series());
    println!("Data Emissão: {}", format_date(nfe.issued_at()));
    println!("Chave de Acesso: {}", format_access_key(nfe.access_key()));
    if let Some(auth) = nfe.authorization() {
        println!("Protocolo: {}", auth.protocol_number());
        println!("Data Autorização: {}", format_datetime(auth.authorized_at()));
    }
    println!("Emitente: {}", issuer.name());
    if let Some(trade_name) = issuer.trade_name() {
        println!("Nome Fantasia: {trade_name}");
    }
    println!(
        "CNPJ: {}",
        format_tax_id(issuer.tax_id().digits(), issuer.tax_id().kind())?
    );
    println!("Destinatário: {}", recipient.name());
    println!(
        "{}: {}",
        recipient.tax_id().kind().label(),
        format_tax_id(recipient.tax_id().digits(), recipient.tax_id().kind())?
    );
    Ok(())
}
