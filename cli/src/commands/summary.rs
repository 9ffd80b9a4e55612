use colored::*;
use meshaddr_common::config::Config;
use meshaddr_common::success;
use meshaddr_core::{AddressKind, AddressSpaceSummary};

use crate::terminal::detail::Detail;
use crate::terminal::{colors, print};

pub fn summary(cfg: &Config) -> anyhow::Result<()> {
    let summary = AddressSpaceSummary::compute();

    if cfg.quiet > 1 {
        for (kind, count) in summary.iter() {
            print::print(&format!("{kind} {count}"));
        }
        return Ok(());
    }

    print::tree_head(0, "16-bit address space");
    print::as_tree_one_level(summary_details(&summary));

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(
            &format!("{} addresses classified", summary.total()),
            colors::TEXT_DEFAULT,
        );
    } else {
        success!("{} addresses classified", summary.total());
    }
    Ok(())
}

fn summary_details(summary: &AddressSpaceSummary) -> Vec<Detail> {
    summary
        .iter()
        .map(|(kind, count)| (kind.as_str().to_string(), count_str(kind, count)))
        .collect()
}

fn count_str(kind: AddressKind, count: u32) -> ColoredString {
    let text: String = format!("{count:>5}");
    if kind.is_valid_group() || kind == AddressKind::Unicast || kind == AddressKind::Virtual {
        text.color(colors::VALID)
    } else {
        text.color(colors::SEPARATOR)
    }
}
