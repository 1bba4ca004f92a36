use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use onboard::cli::{
    handle_import_command, handle_init_slides_command, handle_records_command, handle_run_command,
    handle_slides_command, handle_status_command, WizardContext,
};
use onboard::config::OnboardPaths;

#[derive(Parser)]
#[command(
    name = "onboard",
    version,
    about = "Terminal setup wizard that walks through creating your first records",
    long_about = "onboard is a multi-step setup wizard for the terminal. Each slide \
                  collects a few values and creates records from them; the wizard \
                  tracks which slides are done and how far setup has come."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the setup wizard (the default)
    Run {
        /// Slide definitions to use
        #[arg(long)]
        slides: Option<PathBuf>,
        /// Only allow moving forward through the slides
        #[arg(long)]
        unidirectional: bool,
    },

    /// Show which slides are done
    Status {
        /// Slide definitions to use
        #[arg(long)]
        slides: Option<PathBuf>,
    },

    /// Validate and list slide definitions
    Slides {
        /// Slide definitions to use
        #[arg(long)]
        slides: Option<PathBuf>,
    },

    /// List stored records of a doctype
    Records {
        /// Record type, e.g. Customer
        doctype: String,
    },

    /// Import records from a CSV file with a header row
    Import {
        /// Record type to create
        doctype: String,
        /// Path to CSV file
        file: PathBuf,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default slide definitions for editing
    #[command(name = "init-slides")]
    InitSlides {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OnboardPaths::new()?;
    let mut ctx = WizardContext::load(paths)?;

    match cli.command {
        None => handle_run_command(&mut ctx, None, false)?,
        Some(Commands::Run {
            slides,
            unidirectional,
        }) => handle_run_command(&mut ctx, slides.as_deref(), unidirectional)?,
        Some(Commands::Status { slides }) => handle_status_command(&ctx, slides.as_deref())?,
        Some(Commands::Slides { slides }) => handle_slides_command(&ctx, slides.as_deref())?,
        Some(Commands::Records { doctype }) => handle_records_command(&ctx.storage, &doctype)?,
        Some(Commands::Import { doctype, file }) => {
            handle_import_command(&ctx.storage, &ctx.audit, &doctype, &file)?
        }
        Some(Commands::Log { count }) => {
            let entries = ctx.audit.read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("onboard Configuration");
            println!("=====================");
            println!("Base directory:  {}", ctx.paths.base_dir().display());
            println!("Settings file:   {}", ctx.paths.settings_file().display());
            println!("Records file:    {}", ctx.paths.records_file().display());
            println!("Audit log:       {}", ctx.paths.audit_log().display());
            println!("Slides file:     {}", ctx.paths.slides_file().display());
            println!();
            println!("Settings:");
            println!("  Dialog title:     {}", ctx.settings.dialog_title);
            println!("  Unidirectional:   {}", ctx.settings.unidirectional);
            println!("  Show done state:  {}", ctx.settings.show_done_state);
            println!("  Tick rate (ms):   {}", ctx.settings.tick_rate_ms);
            println!("  Setup completed:  {}", ctx.settings.setup_completed);
            if let Some(slides) = &ctx.settings.slides_file {
                println!("  Slides file:      {}", slides.display());
            }
        }
        Some(Commands::InitSlides { force }) => handle_init_slides_command(&ctx, force)?,
    }

    Ok(())
}
