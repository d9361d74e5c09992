//! Command-line front end for cryptobuf.
//!
//! ```text
//! cryptobuf random 16 --format base64
//! cryptobuf encode "hi" --to hex --encoding utf16be
//! cryptobuf decode 00680069 --encoding utf16be
//! cryptobuf compare 00ff 00FF
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use cryptobuf::{
    BinaryStringEncoding, Buffer, ConfigError, CryptoBufferConfig, CryptoBufferError,
    CryptographicBuffer, CryptographicBufferStatics,
};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cryptobuf", version, about = "Random bytes, hex/base64 and text transcoding")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print LENGTH random bytes.
    Random {
        length: u32,
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
    },
    /// Print a random 32-bit unsigned number.
    RandomNumber,
    /// Convert TEXT to bytes and print them encoded.
    Encode {
        text: String,
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        to: Format,
        #[arg(long, default_value = "utf8")]
        encoding: BinaryStringEncoding,
    },
    /// Decode VALUE to bytes and print them as text.
    Decode {
        value: String,
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        from: Format,
        #[arg(long, default_value = "utf8")]
        encoding: BinaryStringEncoding,
    },
    /// Print whether two encoded values hold the same bytes.
    Compare {
        a: String,
        b: String,
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        from: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Hex,
    Base64,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Buffer(#[from] CryptoBufferError),
}

fn encode<S: CryptographicBufferStatics>(statics: &S, buffer: &Buffer, format: Format) -> String {
    match format {
        Format::Hex => statics.encode_to_hex_string(buffer),
        Format::Base64 => statics.encode_to_base64_string(buffer),
    }
}

fn decode<S: CryptographicBufferStatics>(
    statics: &S,
    value: &str,
    format: Format,
) -> Result<Buffer, CryptoBufferError> {
    match format {
        Format::Hex => statics.decode_from_hex_string(value),
        Format::Base64 => statics.decode_from_base64_string(value),
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => CryptoBufferConfig::load(path)?,
        None => CryptoBufferConfig::default(),
    };
    tracing::debug!(?config, "configuration loaded");
    let statics = CryptographicBuffer::with_config(config);

    let output = match cli.command {
        Command::Random { length, format } => {
            let buffer = statics.generate_random(length)?;
            encode(&statics, &buffer, format)
        }
        Command::RandomNumber => statics.generate_random_number()?.to_string(),
        Command::Encode { text, to, encoding } => {
            let buffer = statics.convert_string_to_binary(&text, encoding)?;
            encode(&statics, &buffer, to)
        }
        Command::Decode {
            value,
            from,
            encoding,
        } => {
            let buffer = decode(&statics, &value, from)?;
            statics.convert_binary_to_string(encoding, &buffer)?
        }
        Command::Compare { a, b, from } => {
            let a = decode(&statics, &a, from)?;
            let b = decode(&statics, &b, from)?;
            statics.compare(&a, &b).to_string()
        }
    };
    Ok(output)
}

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("cryptobuf: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let mut argv = vec!["cryptobuf"];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_random_hex_length() {
        let out = run_args(&["random", "16"]).unwrap();
        assert_eq!(out.len(), 32);
    }

    #[test]
    fn test_random_base64() {
        let out = run_args(&["random", "3", "--format", "base64"]).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_random_number_parses() {
        let out = run_args(&["random-number"]).unwrap();
        assert!(out.parse::<u32>().is_ok());
    }

    #[test]
    fn test_encode_utf16be_hex() {
        let out = run_args(&["encode", "hi", "--encoding", "utf16be"]).unwrap();
        assert_eq!(out, "00680069");
    }

    #[test]
    fn test_encode_numeric_selector() {
        let out = run_args(&["encode", "hi", "--encoding", "1", "--to", "hex"]).unwrap();
        assert_eq!(out, "68006900");
    }

    #[test]
    fn test_decode_base64() {
        let out = run_args(&["decode", "aGVsbG8=", "--from", "base64"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        let err = run_args(&["decode", "abc"]).unwrap_err();
        assert!(matches!(err, CliError::Buffer(CryptoBufferError::InvalidHex(_))));
    }

    #[test]
    fn test_compare() {
        assert_eq!(run_args(&["compare", "00ff", "00FF"]).unwrap(), "true");
        assert_eq!(run_args(&["compare", "00ff", "00fe"]).unwrap(), "false");
    }

    #[test]
    fn test_unknown_encoding_is_a_parse_error() {
        assert!(Cli::try_parse_from(["cryptobuf", "encode", "x", "--encoding", "latin1"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = run_args(&["--config", "/nonexistent/cryptobuf.toml", "random-number"]).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Io(_))));
    }
}
