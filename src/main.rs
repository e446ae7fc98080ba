use anyhow::Result;
use clap::{Parser, Subcommand};

use savr::cli::{handle_respond_command, handle_walkthrough_command, RespondArgs, WalkthroughArgs};
use savr::config::{SavrPaths, Settings};
use savr::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "savr",
    version,
    about = "Interactive demo of the Savr onboarding flow",
    long_about = "Savr helps Gen Z build wealth through gamified learning, smart \
                  investing, and goal-based saving. This program walks through the \
                  product's five-step demo against a mock backend, either in an \
                  interactive terminal UI or as a scripted walkthrough."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive demo (default)
    #[command(alias = "tui")]
    Demo,

    /// Run the whole demo non-interactively and print each step
    Walkthrough(WalkthroughArgs),

    /// Call one mock endpoint and print the payload as JSON
    Respond(RespondArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SavrPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Demo);
    let is_tui = matches!(command, Commands::Demo);
    let _logging = init_logging(&paths, &settings, is_tui, cli.debug)?;

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Demo => {
            savr::tui::run_tui(&settings, runtime.handle().clone())?;
        }
        Commands::Walkthrough(args) => {
            runtime.block_on(handle_walkthrough_command(&settings, args))?;
        }
        Commands::Respond(args) => {
            runtime.block_on(handle_respond_command(&settings, args))?;
        }
        Commands::Init => {
            println!("Initializing Savr demo at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'savr' to launch the interactive demo.");
        }
        Commands::Config => {
            println!("Savr Demo Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log directory:   {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Response delay:  {} ms", settings.response_delay_ms);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Tick rate:       {} ms", settings.tick_rate_ms);
            println!("  Log level:       {}", settings.logging.level);
            println!("  Log to file:     {}", settings.logging.to_file);
            if settings.mock.fail_endpoints.is_empty() {
                println!("  Failing endpoints: none");
            } else {
                println!(
                    "  Failing endpoints: {}",
                    settings.mock.fail_endpoints.join(", ")
                );
            }
        }
    }

    Ok(())
}
