/*!
# Vocalog - A Multilingual Voice Diary

Vocalog keeps a personal diary of dictated or typed entries in a local JSON
store. Entries carry the language they were spoken in and the synthesis voice
chosen for playback, so a front end can speak them back later; this binary is
the command-line surface over the same store.

## Usage

```text
vocalog add [TITLE] --content <TEXT> [--language <CODE>] [--voice <VOICE>]
vocalog list [--sort <KEY>] [--desc]
vocalog show <ID>
vocalog edit <ID> [--title <T>] [--content <C>] [--language <L>] [--voice <V>]
vocalog rm <ID>
vocalog search <QUERY>
vocalog export [--output <FILE>]
vocalog import <FILE> [--yes]
vocalog langs
```

## Configuration

The application can be configured with the following environment variables:
- `VOCALOG_DIR`: The directory holding the diary store (defaults to "~/.vocalog")
*/

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use vocalog::cli::{CliArgs, DiaryCommand};
use vocalog::config::{self, Config};
use vocalog::constants;
use vocalog::entry::{Entry, EntryPatch};
use vocalog::errors::{AppError, AppResult};
use vocalog::lang::default_languages;
use vocalog::query::{sort_entries, SortKey};
use vocalog::store::{DiaryStore, FileBackend};

/// The main entry point for the vocalog application.
///
/// Parses arguments, initializes logging, and delegates to [`run`]. Errors
/// are reported through their user-facing messages rather than debug output.
fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose, &args.log_format);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Coordinates the overall application flow: loads and validates
/// configuration, opens the entry store from the persistence slot, and
/// dispatches the subcommand.
fn run(args: CliArgs) -> AppResult<()> {
    info!("Starting vocalog");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    config::ensure_diary_directory_exists(&config)?;

    let backend = FileBackend::new(config.store_path());
    let mut store = DiaryStore::open(backend)?;

    run_command(&mut store, args.command)
}

fn init_logging(verbose: bool, log_format: &str) {
    let filter = if verbose {
        EnvFilter::new(format!("{}=debug", constants::APP_NAME))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log_format == constants::LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_command(store: &mut DiaryStore<FileBackend>, command: DiaryCommand) -> AppResult<()> {
    match command {
        DiaryCommand::Add {
            title,
            content,
            language,
            voice,
        } => {
            // The UI contract: a blank title defaults to a timestamp string
            // at save time.
            let title = title.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| {
                chrono::Local::now()
                    .format(constants::DEFAULT_TITLE_FORMAT)
                    .to_string()
            });
            let entry = store.create(title, content, language, voice)?;
            println!("Added entry {}", entry.id);
            Ok(())
        }

        DiaryCommand::List { sort, desc } => {
            let entries = match sort {
                Some(key) => {
                    let key: SortKey = key.parse()?;
                    let languages = default_languages();
                    sort_entries(store.entries(), key, !desc, &languages)
                }
                None => store.list(),
            };
            print_entry_table(&entries);
            Ok(())
        }

        DiaryCommand::Show { id } => {
            let id = resolve_entry_id(store, &id)?;
            // resolve_entry_id only returns ids present in the store.
            let entry = store
                .get(&id)
                .ok_or_else(|| AppError::Diary(format!("No entry found for id {}", id)))?;
            print_entry(entry);
            Ok(())
        }

        DiaryCommand::Edit {
            id,
            title,
            content,
            language,
            voice,
        } => {
            let patch = EntryPatch {
                title,
                content,
                language,
                voice,
            };
            if patch.is_empty() {
                return Err(AppError::Diary(
                    "Nothing to update: pass at least one of --title, --content, --language or --voice"
                        .to_string(),
                ));
            }
            let id = resolve_entry_id(store, &id)?;
            store.update(&id, &patch)?;
            println!("Updated entry {}", id);
            Ok(())
        }

        DiaryCommand::Rm { id } => {
            let id = resolve_entry_id(store, &id)?;
            store.delete(&id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }

        DiaryCommand::Search { query } => {
            let matches = store.search(&query);
            print_entry_table(&matches);
            Ok(())
        }

        DiaryCommand::Export { output } => {
            let document = store.export_all()?;
            match output {
                Some(path) => {
                    fs::write(&path, &document)?;
                    println!("Exported {} entries to {}", store.len(), path.display());
                }
                None => println!("{}", document),
            }
            Ok(())
        }

        DiaryCommand::Import { file, yes } => {
            if !store.is_empty() && !yes {
                return Err(AppError::Diary(format!(
                    "Importing replaces all {} existing entries. Re-run with --yes to confirm.",
                    store.len()
                )));
            }
            let document = read_import_file(&file)?;
            store.import_all(&document)?;
            println!("Imported {} entries", store.len());
            Ok(())
        }

        DiaryCommand::Langs => {
            for language in default_languages() {
                println!("{}  {}", language.code, language.label);
            }
            Ok(())
        }
    }
}

fn read_import_file(path: &PathBuf) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read import file {}: {}", path.display(), e),
        ))
    })
}

/// Resolves a user-supplied id string to an entry id in the store.
///
/// Accepts a full UUID or any unambiguous prefix of one.
fn resolve_entry_id(store: &DiaryStore<FileBackend>, raw: &str) -> AppResult<Uuid> {
    let needle = raw.to_lowercase();
    if let Ok(id) = Uuid::parse_str(&needle) {
        if store.get(&id).is_some() {
            return Ok(id);
        }
        return Err(AppError::Diary(format!("No entry found for id {}", raw)));
    }

    let matches: Vec<Uuid> = store
        .entries()
        .iter()
        .filter(|e| e.id.to_string().starts_with(&needle))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(AppError::Diary(format!("No entry found for id {}", raw))),
        _ => Err(AppError::Diary(format!(
            "Entry id '{}' is ambiguous, {} entries match",
            raw,
            matches.len()
        ))),
    }
}

fn print_entry_table(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries");
        return;
    }
    for entry in entries {
        let id = entry.id.to_string();
        println!(
            "{}  {}  {:<5}  {}",
            &id[..8],
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.language,
            entry.title
        );
    }
}

fn print_entry(entry: &Entry) {
    println!("id:       {}", entry.id);
    println!("title:    {}", entry.title);
    println!("created:  {}", entry.created_at.to_rfc3339());
    if let Some(updated_at) = entry.updated_at {
        println!("updated:  {}", updated_at.to_rfc3339());
    }
    println!("language: {}", entry.language);
    if let Some(voice) = &entry.voice {
        println!("voice:    {}", voice);
    }
    println!();
    println!("{}", entry.content);
}
