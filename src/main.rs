mod config;
mod history;
mod logging;
mod notify;
mod runner;
mod script;
#[cfg(test)]
mod test_support;

use clap::{Parser, Subcommand};
use std::path::Path;

use crate::config::Config;
use crate::notify::Notification;
use crate::runner::{Osascript, RunResult, ScriptRunner};

#[derive(Parser)]
#[command(name = "nsnotify", about = "Show a macOS banner notification", version)]
struct Cli {
    /// Notification message
    message: Option<String>,

    /// Notification title
    #[arg(short, long)]
    title: Option<String>,

    /// Secondary heading shown under the title
    #[arg(short, long)]
    subtitle: Option<String>,

    /// System sound name or configured alias (e.g. Glass, done)
    #[arg(long)]
    sound: Option<String>,

    /// Content image path (not supported by osascript; ignored)
    #[arg(long)]
    image: Option<String>,

    /// Suppress notification sound
    #[arg(long)]
    silent: bool,

    /// Print the AppleScript instead of running it
    #[arg(long)]
    print: bool,

    /// Do not record this notification in the history log
    #[arg(long)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show sent notification summary
    History,
}

fn build_notification(cli: &Cli, config: &Config, message: String) -> Notification {
    let title = cli
        .title
        .clone()
        .or_else(|| config.default_title.clone())
        .unwrap_or_default();

    let sound = if cli.silent {
        String::new()
    } else {
        cli.sound
            .as_deref()
            .or(config.default_sound.as_deref())
            .map(|s| config.resolve_sound(s).to_string())
            .unwrap_or_default()
    };

    Notification::new(message)
        .title(title)
        .subtitle(cli.subtitle.clone().unwrap_or_default())
        .sound_name(sound)
        .content_image(cli.image.clone().unwrap_or_default())
}

/// Sends the notification, or prints its script with `--print`, then
/// records it in `history` when enabled. Only a failed send is an error.
fn deliver(
    cli: &Cli,
    config: &Config,
    notification: Notification,
    runner: &impl ScriptRunner,
    history: &Path,
) -> RunResult<()> {
    if cli.print {
        println!("{}", script::build_script(&notification));
        return Ok(());
    }

    notification.send_with(runner)?;

    if config.history && !cli.no_history {
        let entry = history::HistoryEntry {
            title: notification.title,
            body: notification.informative_text,
            sound: notification.sound_name,
            sent_at: chrono::Local::now(),
        };
        if let Err(e) = history::append_entry_to(history, &entry) {
            tracing::warn!(%e, "failed to write history");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Some(Commands::History) = cli.command {
        history::print_summary();
        return;
    }

    let message = match cli.message.clone() {
        Some(m) => m,
        None => {
            eprintln!("Usage: nsnotify [OPTIONS] <MESSAGE> or nsnotify history");
            eprintln!("Examples: nsnotify \"Build finished\" --title CI --sound done");
            std::process::exit(1);
        }
    };

    let config = Config::load();
    let notification = build_notification(&cli, &config, message);
    let runner = Osascript::new(config.program.clone());

    if let Err(e) = deliver(&cli, &config, notification, &runner, &history::history_path()) {
        eprintln!("Failed to send notification: {e}");
        std::process::exit(1);
    }
}
