//! CLI adapter.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::app::commands::{self, convert, generate, interactive, list};
use crate::domain::AppError;
use crate::ports::{CatalogSource, ClipboardWriter};
use crate::services::{ArboardClipboard, CatalogFile, CatalogUrl, EmbeddedCatalog};

#[derive(Parser)]
#[command(name = "devsetup")]
#[command(version)]
#[command(
    about = "Compose developer-environment install scripts from a tool catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an install script without prompts
    #[clap(visible_alias = "g")]
    Generate {
        /// Target operating system (windows, macos, linux)
        #[arg(long)]
        os: Option<String>,
        /// Package manager (defaults to the first manager of the OS)
        #[arg(long)]
        pkg: Option<String>,
        /// Tool to include; repeat for multiple tools
        #[arg(short = 't', long = "tool")]
        tools: Vec<String>,
        /// YAML picks file naming os, pkg, and tools
        #[arg(short, long, conflicts_with_all = ["os", "pkg", "tools"])]
        file: Option<PathBuf>,
        /// Write the script to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Copy the script to the system clipboard
        #[arg(long)]
        copy: bool,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// List catalog tools and their availability
    #[clap(visible_alias = "ls")]
    List {
        /// Target operating system (windows, macos, linux)
        #[arg(long)]
        os: Option<String>,
        /// Package manager to evaluate availability against
        #[arg(long)]
        pkg: Option<String>,
        /// Show only tools whose name contains this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Show every install command recorded for one tool
        #[arg(long)]
        detail: Option<String>,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Convert a CSV tool sheet into a catalog document
    Convert {
        /// Sheet to convert
        sheet: PathBuf,
        /// Output path for the catalog document
        #[arg(short, long, default_value = "tools.json")]
        output: PathBuf,
    },
    /// Start the interactive selection session
    #[clap(visible_alias = "i")]
    Interactive {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args, Default)]
struct CatalogArgs {
    /// Load the catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Fetch the catalog from a URL instead of the built-in one
    #[arg(long, value_name = "URL", conflicts_with = "catalog")]
    catalog_url: Option<Url>,
}

impl CatalogArgs {
    fn source(&self) -> Box<dyn CatalogSource> {
        if let Some(path) = &self.catalog {
            Box::new(CatalogFile::new(path))
        } else if let Some(url) = &self.catalog_url {
            Box::new(CatalogUrl::new(url.clone()))
        } else {
            Box::new(EmbeddedCatalog::new())
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Generate { os, pkg, tools, file, output, copy, catalog }) => run_generate(
            os.as_deref(),
            pkg.as_deref(),
            &tools,
            file.as_deref(),
            output.as_deref(),
            copy,
            &catalog,
        ),
        Some(Commands::List { os, pkg, search, detail, catalog }) => {
            run_list(os.as_deref(), pkg.as_deref(), &search, detail.as_deref(), &catalog)
        }
        Some(Commands::Convert { sheet, output }) => run_convert(&sheet, &output),
        Some(Commands::Interactive { catalog }) => run_interactive(&catalog),
        None => run_interactive(&CatalogArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generate(
    os: Option<&str>,
    pkg: Option<&str>,
    tools: &[String],
    file: Option<&Path>,
    output: Option<&Path>,
    copy: bool,
    catalog: &CatalogArgs,
) -> Result<(), AppError> {
    let request = generate::GenerateRequest::resolve(os, pkg, tools, file)?;
    let source = catalog.source();
    let outcome = generate::execute(source.as_ref(), &request)?;

    for name in &outcome.unknown_tools {
        eprintln!("⚠️  '{}' is not in the catalog; skipped", name);
    }
    for name in &outcome.unavailable_tools {
        eprintln!("⚠️  '{}' has no {} install command; skipped", name, request.manager);
    }

    if let Some(path) = output {
        generate::write_script(path, &outcome.script)?;
        println!("✅ Wrote {} command(s) to {}", outcome.command_count, path.display());
    }
    if copy {
        let mut clipboard = ArboardClipboard::new();
        clipboard.write_text(&outcome.script)?;
        println!("✅ Script copied to clipboard");
    }
    if output.is_none() && !copy {
        println!("{}", outcome.script);
    }
    Ok(())
}

fn run_list(
    os: Option<&str>,
    pkg: Option<&str>,
    search: &str,
    detail: Option<&str>,
    catalog: &CatalogArgs,
) -> Result<(), AppError> {
    let source = catalog.source();

    if let Some(name) = detail {
        let info = list::execute_detail(source.as_ref(), name)?;
        println!("{} ({})", info.name, info.category);
        if !info.iconsrc.is_empty() {
            println!("icon: {}", info.iconsrc);
        }
        if info.commands.is_empty() {
            println!("No install commands recorded");
        } else {
            println!("\nInstall commands:");
            for (manager, command) in &info.commands {
                println!("  {:<8} {}", manager.as_str(), command);
            }
        }
        return Ok(());
    }

    let manager = commands::resolve_manager(os, pkg)?;
    let listings = list::execute(source.as_ref(), manager, search)?;
    if listings.is_empty() {
        println!("No tools match '{}'", search);
        return Ok(());
    }

    println!("Available tools ({}):", manager);
    for category in listings {
        println!("\n{}", category.category);
        for tool in category.tools {
            let marker = if tool.available { "" } else { "  (unavailable)" };
            println!("  • {}{}", tool.name, marker);
        }
    }
    Ok(())
}

fn run_convert(sheet: &Path, output: &Path) -> Result<(), AppError> {
    let outcome = convert::execute(sheet, output)?;

    println!(
        "✅ Wrote {} tool(s) in {} categories to {}",
        outcome.tools,
        outcome.categories,
        output.display()
    );
    if outcome.skipped_rows > 0 {
        println!("⚠️  Skipped {} row(s) with no tool name", outcome.skipped_rows);
    }
    Ok(())
}

fn run_interactive(catalog: &CatalogArgs) -> Result<(), AppError> {
    let loaded = catalog.source().load()?;
    let mut clipboard = ArboardClipboard::new();
    interactive::run_session(&loaded, &mut clipboard)
}
