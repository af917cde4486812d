use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tools::{
    decode_token_json, encode_sheet_json, format_inspect_report, inspect_token, preset_by_name,
};

#[derive(Parser)]
#[command(
    name = "stylecap-tools",
    version,
    about = "stylecap token inspection and conversion tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a token's envelope and content summary.
    Inspect {
        /// Path to the token text.
        token_file: PathBuf,
    },
    /// Decode a token into structured JSON.
    Decode {
        /// Path to the token text.
        token_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
    },
    /// Encode a structured JSON sheet into a token.
    Encode {
        /// Path to the sheet JSON.
        json_file: PathBuf,
    },
    /// Emit a canonical preset.
    Preset {
        /// Which preset to emit.
        #[arg(value_enum)]
        which: PresetName,
        /// Emit an encoded token instead of JSON.
        #[arg(long)]
        as_token: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetName {
    Standard,
    Classic,
}

impl PresetName {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Classic => "classic",
        }
    }
}

fn read_token(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read token {}", path.display()))?;
    Ok(raw.trim().to_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { token_file } => {
            let token = read_token(&token_file)?;
            let report = inspect_token(&token)?;
            print!("{}", format_inspect_report(&report));
        }
        Command::Decode { token_file, format } => {
            let token = read_token(&token_file)?;
            let value = decode_token_json(&token)?;
            match format {
                DecodeFormat::Json => println!("{value}"),
                DecodeFormat::Pretty => {
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Command::Encode { json_file } => {
            let json = fs::read_to_string(&json_file)
                .with_context(|| format!("read sheet {}", json_file.display()))?;
            println!("{}", encode_sheet_json(&json)?);
        }
        Command::Preset { which, as_token } => {
            let sheet = preset_by_name(which.as_str())?;
            if as_token {
                println!("{}", codec::encode(&sheet));
            } else {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            }
        }
    }
    Ok(())
}
