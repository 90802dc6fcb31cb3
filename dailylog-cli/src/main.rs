//! Command-line frontend for DailyLog.

use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use dailylog_core::{
    append_entry, expand, export_shortcuts_to_path, format_entry, import_shortcuts_from_path,
    load_settings, save_settings, shortcuts_db_path, validate_date_format, DailylogError,
    FsLogStore, LogDocument, Result, ShortcutKind, ShortcutStore,
};

#[derive(Parser)]
#[command(name = "dailylog")]
#[command(about = "DailyLog: append timestamped entries to your log file, fast", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or select the log file.
    File {
        #[command(subcommand)]
        command: FileCommand,
    },
    /// Show or set the entry date format.
    Format {
        #[command(subcommand)]
        command: FormatCommand,
    },
    /// Append a timestamped entry to the log.
    Add {
        /// Entry text; the timestamp is prepended.
        text: String,
        /// Write even when the content fingerprint is unchanged.
        #[arg(long)]
        force: bool,
    },
    /// Print the log.
    Cat,
    /// Expand a shortcut into the log at a cursor position.
    Expand {
        /// Label of the shortcut to insert.
        label: String,
        /// Char offset to insert at; defaults to the end of the log.
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// Manage shortcuts.
    Shortcut {
        #[command(subcommand)]
        command: ShortcutCommand,
    },
}

#[derive(Subcommand)]
enum FileCommand {
    /// Select the log file entries are appended to.
    Set {
        path: PathBuf,
        /// Create the file if it does not exist yet.
        #[arg(long)]
        create: bool,
    },
    /// Print the selected log file.
    Show,
}

#[derive(Subcommand)]
enum FormatCommand {
    /// Set the strftime format used to stamp entries.
    Set { format: String },
    /// Print the current format.
    Show,
}

#[derive(Subcommand)]
enum ShortcutCommand {
    /// Add a new shortcut.
    Add {
        label: String,
        text: String,
        /// Char offset within the snippet where the cursor lands; -1 for the end.
        #[arg(long, default_value_t = -1)]
        cursor: i64,
        #[arg(long, value_enum, default_value = "text")]
        kind: KindArg,
    },
    /// Rewrite an existing shortcut.
    Edit {
        label: String,
        text: String,
        #[arg(long, default_value_t = -1)]
        cursor: i64,
        #[arg(long, value_enum, default_value = "text")]
        kind: KindArg,
    },
    /// Delete a shortcut.
    Remove { label: String },
    /// List shortcuts in tray order.
    List,
    /// Move a shortcut to a new place in the tray order.
    Move { label: String, index: usize },
    /// Import shortcuts from a CSV file (label, text, cursor, kind per row).
    Import { path: PathBuf },
    /// Export shortcuts to a CSV file.
    Export { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Text,
    Timestamp,
}

impl From<KindArg> for ShortcutKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => ShortcutKind::Text,
            KindArg::Timestamp => ShortcutKind::Timestamp,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        log::debug!("command failed: {e}");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::File { command } => run_file(command),
        Commands::Format { command } => run_format(command),
        Commands::Add { text, force } => run_add(&text, force),
        Commands::Cat => run_cat(),
        Commands::Expand { label, cursor } => run_expand(&label, cursor),
        Commands::Shortcut { command } => run_shortcut(command),
    }
}

/// Opens the configured log file, failing when none is selected yet.
fn open_document() -> Result<LogDocument<FsLogStore>> {
    let settings = load_settings();
    let path = settings.log_file.ok_or(DailylogError::NoFileSelected)?;
    Ok(LogDocument::new(FsLogStore::new(path)))
}

/// Opens the shortcut store, bootstrapping the database on first use.
/// Existing databases go through open so schema migrations run.
fn open_store() -> Result<ShortcutStore> {
    let path = shortcuts_db_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    ShortcutStore::open_or_create(path)
}

fn run_file(command: FileCommand) -> Result<()> {
    match command {
        FileCommand::Set { path, create } => {
            if !path.exists() {
                if create {
                    fs::write(&path, "")?;
                } else {
                    return Err(DailylogError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("{} does not exist (pass --create to make it)", path.display()),
                    )));
                }
            }
            let mut settings = load_settings();
            settings.log_file = Some(path.display().to_string());
            save_settings(&settings)?;
            println!("Log file set to {}", path.display());
            Ok(())
        }
        FileCommand::Show => {
            match load_settings().log_file {
                Some(path) => println!("{path}"),
                None => println!("No log file selected"),
            }
            Ok(())
        }
    }
}

fn run_format(command: FormatCommand) -> Result<()> {
    match command {
        FormatCommand::Set { format } => {
            validate_date_format(&format)?;
            let mut settings = load_settings();
            settings.date_format = format;
            save_settings(&settings)?;
            println!("Date format saved");
            Ok(())
        }
        FormatCommand::Show => {
            println!("{}", load_settings().date_format);
            Ok(())
        }
    }
}

fn run_add(text: &str, force: bool) -> Result<()> {
    let settings = load_settings();
    let mut document = open_document()?;

    let content = document.load()?;
    let line = format_entry(Local::now(), &settings.date_format, text)?;
    let updated = append_entry(&content, &line);

    let saved = if force {
        document.force_save(&updated)?
    } else {
        document.smart_save(&updated)?
    };
    if saved {
        println!("Saved file");
    } else {
        println!("No changes to save");
    }
    Ok(())
}

fn run_cat() -> Result<()> {
    let mut document = open_document()?;
    print!("{}", document.load()?);
    Ok(())
}

fn run_expand(label: &str, cursor: Option<usize>) -> Result<()> {
    let store = open_store()?;
    let shortcut = store.get(label)?.resolve(Local::now());

    let mut document = open_document()?;
    let content = document.load()?;
    let cursor = cursor.unwrap_or_else(|| document.cursor_index(&content));

    let expansion = expand(&content, cursor, &shortcut);
    if document.smart_save(&expansion.text)? {
        println!("Saved file");
    }
    println!("Cursor at {}", expansion.cursor_index);
    Ok(())
}

fn run_shortcut(command: ShortcutCommand) -> Result<()> {
    let mut store = open_store()?;
    match command {
        ShortcutCommand::Add { label, text, cursor, kind } => {
            let kind = ShortcutKind::from(kind);
            if kind == ShortcutKind::Timestamp {
                validate_date_format(&text)?;
            }
            store.add(&label, &text, cursor, kind)?;
            println!("Added '{label}'");
        }
        ShortcutCommand::Edit { label, text, cursor, kind } => {
            let kind = ShortcutKind::from(kind);
            if kind == ShortcutKind::Timestamp {
                validate_date_format(&text)?;
            }
            store.update(&label, &text, cursor, kind)?;
            println!("Updated '{label}'");
        }
        ShortcutCommand::Remove { label } => {
            store.remove(&label)?;
            println!("Removed '{label}'");
        }
        ShortcutCommand::List => {
            let shortcuts = store.list()?;
            if shortcuts.is_empty() {
                println!("No shortcuts yet — add one with: dailylog shortcut add <LABEL> <TEXT>");
            }
            for shortcut in shortcuts {
                println!(
                    "{:>3}  {:<12} {:<10} {}",
                    shortcut.position,
                    shortcut.label,
                    shortcut.kind.as_str(),
                    shortcut.text
                );
            }
        }
        ShortcutCommand::Move { label, index } => {
            store.move_shortcut(&label, index)?;
            println!("Moved '{label}' to {index}");
        }
        ShortcutCommand::Import { path } => {
            let shortcuts = import_shortcuts_from_path(&path)?;
            let report = store.bulk_add(&shortcuts)?;
            println!("Imported {} added, {} updated", report.added, report.updated);
        }
        ShortcutCommand::Export { path } => {
            let count = store.list()?.len();
            export_shortcuts_to_path(&store, &path)?;
            println!("Exported {count} shortcut(s) to {}", path.display());
        }
    }
    Ok(())
}
