use colored::*;
use meshaddr_common::config::Config;
use meshaddr_common::{info, warn};
use meshaddr_core::format::format_address;
use meshaddr_core::{address, MeshAddress};

use crate::commands::parse_int;
use crate::mprint;
use crate::terminal::detail::{self, Detail};
use crate::terminal::{colors, print};

pub fn classify(inputs: &[String], cfg: &Config) -> anyhow::Result<()> {
    let values: Vec<i32> = inputs
        .iter()
        .map(|input| parse_int(input))
        .collect::<anyhow::Result<Vec<i32>>>()?;

    if cfg.quiet == 0 {
        info!("Classifying {} value(s)", values.len());
    }

    for (idx, value) in values.iter().enumerate() {
        match cfg.quiet {
            0 | 1 => print_address_tree(*value, idx, cfg),
            _ => print::print(&address_line(*value, cfg)),
        }
        if cfg.quiet < 2 && idx + 1 != values.len() {
            mprint!();
        }
    }
    Ok(())
}

/// One-line form used at `-qq`: the formatted value followed by its kind.
fn address_line(value: i32, cfg: &Config) -> String {
    let kind: String = match MeshAddress::try_from(value) {
        Ok(address) => address.kind().to_string(),
        Err(_) => "out-of-range".to_string(),
    };
    format!("{} {}", format_address(value, cfg.prefix), kind)
}

fn address_details(value: i32) -> Vec<Detail> {
    let Ok(address) = MeshAddress::try_from(value) else {
        return vec![detail::flag_detail("In range", false)];
    };

    let mut details: Vec<Detail> = vec![
        detail::kind_detail(address.kind()),
        ("Decimal".to_string(), value.to_string().color(colors::TEXT_DEFAULT)),
        detail::flag_detail("Unicast", address::is_valid_unicast_address(value)),
        detail::flag_detail("Virtual", address::is_valid_virtual_address(value)),
        detail::flag_detail("Group", address::is_valid_group_address(value)),
    ];
    details.extend(detail::byte_details(address));
    details
}

fn print_address_tree(value: i32, idx: usize, cfg: &Config) {
    print::tree_head(idx, &format_address(value, cfg.prefix));

    if !address::is_address_in_range(value) {
        warn!("{value} is outside the 16-bit address space");
    }
    print::as_tree_one_level(address_details(value));
}
