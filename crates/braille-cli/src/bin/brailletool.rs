use clap::{Parser, Subcommand};

use braille_cli::commands::{config_ops, convert_ops, phrase_ops};

#[derive(Parser)]
#[command(name = "brailletool", about = "Text/Braille transliteration tool")]
struct Cli {
    /// Custom character table TOML, used instead of the built-in one
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to Braille
    Encode {
        /// Text to convert
        text: String,
        /// Render unmapped characters as ⠿ instead of copying them
        #[arg(long)]
        placeholder: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert Braille to text
    Decode {
        /// Braille cells to convert
        braille: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List common phrases, or look one up
    Phrase {
        /// Phrase to look up (lists all when omitted)
        phrase: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the Braille input palette
    Palette,
    /// Show the raised dots of each cell
    Dots {
        /// Braille cells
        braille: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default character table as TOML
    TableExport,
    /// Validate a custom character table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Check round-trips and phrase consistency for the active table
    Check,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref file) = cli.table {
        config_ops::table_install(file);
    }

    match cli.command {
        Command::Encode {
            text,
            placeholder,
            json,
        } => convert_ops::encode_cmd(&text, placeholder, json),
        Command::Decode { braille, json } => convert_ops::decode_cmd(&braille, json),
        Command::Phrase { phrase, json } => phrase_ops::phrase_cmd(phrase.as_deref(), json),
        Command::Palette => convert_ops::palette_cmd(),
        Command::Dots { braille, json } => convert_ops::dots_cmd(&braille, json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Check => convert_ops::check_cmd(),
    }
}
