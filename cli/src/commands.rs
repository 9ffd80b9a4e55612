pub mod classify;
pub mod decode;
pub mod format;
pub mod summary;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use meshaddr_core::ByteOrder;

#[derive(Parser)]
#[command(name = "meshaddr")]
#[command(about = "Classify, decode and format Bluetooth mesh addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops headers, -qq prints bare values)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Print addresses without the 0x prefix
    #[arg(long, global = true)]
    pub no_prefix: bool,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one or more addresses (hex like C000 or 0xC000, or decimal like 49152)
    #[command(alias = "c")]
    Classify {
        #[arg(required = true, allow_negative_numbers = true)]
        addresses: Vec<String>,
    },
    /// Render an integer as a 4-digit hex address
    #[command(alias = "f")]
    Format {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Decode 2 or 4 hex bytes into an integer
    #[command(alias = "d")]
    Decode {
        bytes: String,
        /// Byte order: be or le
        #[arg(short, long, default_value = "be")]
        order: ByteOrder,
    },
    /// Count the addresses of every kind in the 16-bit space
    #[command(alias = "s")]
    Summary,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses `0x`-prefixed hex, bare hex containing A-F, or signed decimal.
pub fn parse_int(input: &str) -> anyhow::Result<i32> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (digits, radix): (&str, u32) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (hex, 16)
    } else if body.chars().any(|c| c.is_ascii_alphabetic()) {
        (body, 16)
    } else {
        (body, 10)
    };

    // Only the single leading '-' above may carry a sign.
    if digits.starts_with(['+', '-']) {
        anyhow::bail!("misplaced sign in '{input}'");
    }

    let magnitude: i64 = i64::from_str_radix(digits, radix).with_context(|| {
        let kind = if radix == 16 { "hex" } else { "decimal" };
        format!("invalid {kind} value '{input}'")
    })?;

    let value: i64 = if negative {
        magnitude
            .checked_neg()
            .with_context(|| format!("'{input}' does not fit in 32 bits"))?
    } else {
        magnitude
    };
    i32::try_from(value).with_context(|| format!("'{input}' does not fit in 32 bits"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("0xC000").unwrap(), 0xC000);
        assert_eq!(parse_int("C000").unwrap(), 0xC000);
        assert_eq!(parse_int("ffff").unwrap(), 0xFFFF);
        assert_eq!(parse_int("49152").unwrap(), 0xC000);
        assert_eq!(parse_int("-1").unwrap(), -1);
        assert_eq!(parse_int("-0x10").unwrap(), -16);
        assert_eq!(parse_int("0x10000").unwrap(), 0x1_0000);

        assert!(parse_int("").is_err());
        assert!(parse_int("0x").is_err());
        assert!(parse_int("xyz").is_err());
        assert!(parse_int("0x1FFFFFFFF").is_err());

        // Signs are only accepted once, in front
        assert!(parse_int("--5").is_err());
        assert!(parse_int("0x-5").is_err());
        assert!(parse_int("+5").is_err());
        assert!(parse_int("--9223372036854775808").is_err());
        assert!(parse_int("-9223372036854775808").is_err());
    }

    #[test]
    fn test_command_line_parses() {
        let cli = CommandLine::try_parse_from(["meshaddr", "-qq", "decode", "0001", "-o", "le"])
            .unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(matches!(
            cli.command,
            Commands::Decode { order: ByteOrder::LittleEndian, .. }
        ));

        let cli = CommandLine::try_parse_from(["meshaddr", "f", "-1", "--no-prefix"]).unwrap();
        assert!(cli.no_prefix);
        assert!(matches!(cli.command, Commands::Format { value } if value == "-1"));
    }
}
