use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::shell::Shell;

#[derive(Parser)]
#[command(
    name = "contacts",
    author = "Kaylee Beyene",
    version,
    about = "Interactive terminal contact book",
    long_about = "A line-oriented contact book. Store names, up to two phone \
                  numbers and a birthday per contact, then find, edit, delete \
                  and page through them from an interactive prompt."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Records per page for `show` (overrides the settings file)
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive prompt (default)
    Shell,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ContactPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(path = %paths.settings_file().display(), "settings loaded");

    if let Some(page_size) = cli.page_size {
        settings.override_page_size(page_size);
    }
    if cli.no_color {
        settings.color = false;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut shell = Shell::new(stdin.lock(), stdout.lock(), settings);
            shell.run()?;
            info!(contacts = shell.book().len(), "session ended");
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Contact book configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Page size:   {}", settings.page_size);
            println!("  Color:       {}", settings.color);
            println!("  Date format: {}", settings.date_format);
        }
    }

    Ok(())
}
