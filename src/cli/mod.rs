//! Command-line interface for the voice diary.
//!
//! The CLI is the presentation side of the application: it gathers user
//! intent and routes everything through the entry store. Values like sort
//! keys and entry ids are taken as plain strings here and parsed by the
//! relevant module later.

use crate::constants;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A multilingual voice diary kept in a local JSON store
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format: text or json
    #[clap(long, global = true, default_value = constants::LOG_FORMAT_TEXT)]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: DiaryCommand,
}

#[derive(Subcommand, Debug)]
pub enum DiaryCommand {
    /// Add a new diary entry
    Add {
        /// Title for the entry; defaults to a timestamp when omitted
        title: Option<String>,

        /// The entry text (the dictated or typed diary body)
        #[clap(short, long)]
        content: String,

        /// Language-region code for the entry (e.g. es-ES)
        #[clap(short, long, default_value = constants::DEFAULT_LANGUAGE_CODE)]
        language: String,

        /// Synthesis voice to remember for playback
        #[clap(long)]
        voice: Option<String>,
    },

    /// List entries, most recent first by default
    List {
        /// Sort by a key instead: created, updated, language, title or voice
        #[clap(short, long)]
        sort: Option<String>,

        /// Reverse to descending order (only with --sort)
        #[clap(short, long, requires = "sort")]
        desc: bool,
    },

    /// Show one entry in full
    Show {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Edit fields of an existing entry
    Edit {
        /// Entry id (a unique prefix is enough)
        id: String,

        /// New title
        #[clap(long)]
        title: Option<String>,

        /// New entry text
        #[clap(short, long)]
        content: Option<String>,

        /// New language-region code
        #[clap(short, long)]
        language: Option<String>,

        /// New synthesis voice
        #[clap(long)]
        voice: Option<String>,
    },

    /// Delete an entry permanently
    Rm {
        /// Entry id (a unique prefix is enough)
        id: String,
    },

    /// Search entries by title and content
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },

    /// Export the whole diary as indented JSON
    Export {
        /// Write to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a previously exported diary, replacing all current entries
    Import {
        /// The exported JSON document to read
        file: PathBuf,

        /// Confirm replacing a non-empty diary
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// Print the built-in language table
    Langs,
}
