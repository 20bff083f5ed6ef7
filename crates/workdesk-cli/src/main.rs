use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod notifier;

#[derive(Parser)]
#[command(name = "workdesk", version, about = "Workdesk CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Todo list
    Todo {
        #[command(subcommand)]
        action: commands::todo::TodoAction,
    },
    /// Projects
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Project tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// AI chat
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Search notes and the knowledge base
    Search {
        #[command(subcommand)]
        action: commands::search::SearchAction,
    },
    /// Check backend health
    Health,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Todo { action } => commands::todo::run(action),
        Commands::Project { action } => commands::project::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Search { action } => commands::search::run(action),
        Commands::Health => commands::health::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "workdesk", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
