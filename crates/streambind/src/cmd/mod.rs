use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use streambind_frame::{MessageStructure, WireProtocol};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod bind;
pub mod decode;
pub mod encode;
pub mod structures;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a byte stream into frames.
    Decode(DecodeArgs),
    /// Decode, parse and bind a byte stream into a value table.
    Bind(BindArgs),
    /// Encode one payload for the wire.
    Encode(EncodeArgs),
    /// List wire protocols and their message structure options.
    Structures(StructuresArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Bind(args) => bind::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Structures(args) => structures::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Wire protocol selector.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ProtocolArg {
    Lines,
    Raw,
    Data255,
    Cobs,
}

impl From<ProtocolArg> for WireProtocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Lines => WireProtocol::Lines,
            ProtocolArg::Raw => WireProtocol::Raw,
            ProtocolArg::Data255 => WireProtocol::Data255,
            ProtocolArg::Cobs => WireProtocol::Cobs,
        }
    }
}

/// Message structure selector.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StructureArg {
    Space,
    Tab,
    Comma,
    Colon,
    Semicolon,
    Equals,
    None,
    Byte,
    Float4,
    Color4,
}

impl From<StructureArg> for MessageStructure {
    fn from(arg: StructureArg) -> Self {
        match arg {
            StructureArg::Space => MessageStructure::SpaceSeparated,
            StructureArg::Tab => MessageStructure::TabSeparated,
            StructureArg::Comma => MessageStructure::CommaSeparated,
            StructureArg::Colon => MessageStructure::ColonSeparated,
            StructureArg::Semicolon => MessageStructure::SemicolonSeparated,
            StructureArg::Equals => MessageStructure::EqualsSeparated,
            StructureArg::None => MessageStructure::NoSeparation,
            StructureArg::Byte => MessageStructure::OneValuePerByte,
            StructureArg::Float4 => MessageStructure::FourByteFloatGroups,
            StructureArg::Color4 => MessageStructure::FourByteColorGroups,
        }
    }
}

/// Input payload, shared by the stream-consuming subcommands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Literal string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex byte payload (e.g. "02 01 00 03").
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file ("-" for stdin).
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the payload bytes; stdin when no source flag is given.
    pub fn resolve(&self) -> CliResult<Vec<u8>> {
        if let Some(data) = &self.data {
            return Ok(data.as_bytes().to_vec());
        }
        if let Some(hex) = &self.hex {
            return parse_hex(hex);
        }
        match &self.file {
            Some(path) if path.as_os_str() != "-" => fs::read(path).map_err(|err| {
                crate::exit::io_error(&format!("failed reading {}", path.display()), err)
            }),
            _ => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|err| crate::exit::io_error("failed reading stdin", err))?;
                Ok(buf)
            }
        }
    }
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        return Err(CliError::new(USAGE, "hex input must have an even digit count"));
    }
    let mut out = Vec::with_capacity(compact.len() / 2);
    for chunk in compact.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(chunk).map_err(|_| hex_digit_error(input))?;
        let byte = u8::from_str_radix(pair, 16).map_err(|_| hex_digit_error(input))?;
        out.push(byte);
    }
    Ok(out)
}

fn hex_digit_error(input: &str) -> CliError {
    CliError::new(USAGE, format!("invalid hex input: {input}"))
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wire protocol to decode with.
    #[arg(long, short = 'p', default_value = "lines")]
    pub protocol: ProtocolArg,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct BindArgs {
    /// Wire protocol to decode with.
    #[arg(long, short = 'p', default_value = "lines")]
    pub protocol: ProtocolArg,
    /// Message structure. Default: the protocol's first option.
    #[arg(long, short = 's')]
    pub structure: Option<StructureArg>,
    /// Address slots by position instead of by leading name token.
    #[arg(long)]
    pub indexed: bool,
    /// Do not create slots for unknown values.
    #[arg(long)]
    pub no_auto_add: bool,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Wire protocol to encode for.
    #[arg(long, short = 'p', default_value = "lines")]
    pub protocol: ProtocolArg,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Default)]
pub struct StructuresArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_spaced_and_compact_forms() {
        assert_eq!(parse_hex("02 01 00").unwrap(), vec![2, 1, 0]);
        assert_eq!(parse_hex("ff00").unwrap(), vec![255, 0]);
    }

    #[test]
    fn parse_hex_rejects_odd_and_bad_digits() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }
}
