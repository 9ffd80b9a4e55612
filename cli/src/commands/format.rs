use meshaddr_common::config::Config;
use meshaddr_common::warn;
use meshaddr_core::address;
use meshaddr_core::format::format_address;

use crate::commands::parse_int;
use crate::terminal::print;

pub fn format(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let value: i32 = parse_int(input)?;

    if !address::is_address_in_range(value) && cfg.quiet == 0 {
        warn!("{value} is not a 16-bit address, formatting it anyway");
    }

    print::print(&format_value(value, cfg));
    Ok(())
}

fn format_value(value: i32, cfg: &Config) -> String {
    format_address(value, cfg.prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_honours_prefix() {
        let cfg = Config::default();
        assert_eq!(format_value(parse_int("26").unwrap(), &cfg), "0x001A");

        let bare = Config { prefix: false, ..Config::default() };
        assert_eq!(format_value(parse_int("0x1a").unwrap(), &bare), "001A");
        assert_eq!(format_value(parse_int("0x12345").unwrap(), &bare), "12345");
    }
}
