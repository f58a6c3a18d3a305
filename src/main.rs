use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use neo58::convert;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Command {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Hex bytes to Base58 (no checksum).
    Encode { hex: String },
    /// Base58 to hex bytes (no checksum).
    Decode { base58: String },
    /// Version byte + hex payload to Base58Check.
    EncodeCheck {
        #[arg(long = "version-byte", short = 'b', default_value_t = neo58::ADDRESS_VERSION)]
        version: u8,
        hex: String,
    },
    /// Base58Check to hex (version byte included, checksum stripped).
    DecodeCheck { base58: String },
    /// Script hash to address. `0x` means big-endian display order.
    Address { hash: String },
    /// Address to big-endian script hash.
    ScriptHash { address: String },
    /// Little-endian hex integer to decimal.
    Amount { hex: String },
    /// Hex to UTF-8 text.
    Event { hex: String },
    /// UTF-8 text to hex.
    EventEncode { text: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn execute(command: Commands) -> anyhow::Result<String> {
    let output = match command {
        Commands::Encode { hex: input } => {
            let bytes = hex::decode(&input).context("parse hex input")?;
            neo58::encode(&bytes)
        }
        Commands::Decode { base58 } => {
            hex::encode(neo58::decode(&base58).context("decode base58")?)
        }
        Commands::EncodeCheck { version, hex: input } => {
            let payload = hex::decode(&input).context("parse hex payload")?;
            neo58::encode_checked(version, &payload)
        }
        Commands::DecodeCheck { base58 } => {
            hex::encode(neo58::decode_checked(&base58).context("decode base58check")?)
        }
        Commands::Address { hash } => {
            convert::hash_to_address(&hash).context("convert script hash")?
        }
        Commands::ScriptHash { address } => convert::address_to_hash(&address)
            .context("convert address")?
            .to_string(),
        Commands::Amount { hex: input } => convert::to_amount(&input).context("parse amount")?,
        Commands::Event { hex: input } => convert::to_event_string(&input).context("parse event")?,
        Commands::EventEncode { text } => convert::encode_event_string(&text),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Command::parse();
    init_tracing(cli.verbose);
    tracing::debug!("Starting cli");

    let output = execute(cli.command)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Command::command().debug_assert();
    }

    #[test]
    fn parses_version_byte() {
        let cli = Command::try_parse_from(["neo58", "encode-check", "-b", "0", "00"]).unwrap();
        assert!(matches!(cli.command, Commands::EncodeCheck { version: 0, .. }));
        assert!(Command::try_parse_from(["neo58", "encode-check", "-b", "256", "00"]).is_err());
    }

    #[test]
    fn executes_commands() {
        let out = execute(Commands::EncodeCheck {
            version: 23,
            hex: "00".repeat(20),
        })
        .unwrap();
        assert_eq!(out, "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM");
        let out = execute(Commands::ScriptHash {
            address: "AWSEU4BXpjGVdw9ajnFBXh8Rg8cgw9f3Zo".into(),
        })
        .unwrap();
        assert_eq!(out, "0xba2708841cd2139100424efebad5b6fd77f2d2a0");
        let out = execute(Commands::Decode { base58: "112".into() }).unwrap();
        assert_eq!(out, "000001");
        assert!(execute(Commands::DecodeCheck { base58: "zzz".into() }).is_err());
    }
}
