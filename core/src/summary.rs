use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::kind::AddressKind;

/// Number of addresses of each [`AddressKind`] across the whole 16-bit space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpaceSummary {
    counts: BTreeMap<AddressKind, u32>,
}

impl AddressSpaceSummary {
    pub fn compute() -> Self {
        let counts = (0..=u32::from(u16::MAX))
            .into_par_iter()
            .fold(BTreeMap::new, |mut acc: BTreeMap<AddressKind, u32>, value| {
                // The range above never leaves u16.
                *acc.entry(AddressKind::of(value as u16)).or_default() += 1;
                acc
            })
            .reduce(BTreeMap::new, |mut left, right| {
                for (kind, count) in right {
                    *left.entry(kind).or_default() += count;
                }
                left
            });

        Self { counts }
    }

    pub fn count(&self, kind: AddressKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Kinds in address order, including those with no addresses.
    pub fn iter(&self) -> impl Iterator<Item = (AddressKind, u32)> + '_ {
        AddressKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }
}
