//! Splitting one source list into appearance variants by name suffix.

use serde::{Deserialize, Serialize};

use crate::pipeline::VariantSets;
use crate::types::Asset;

/// Name suffixes that mark non-light variants in a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suffixes {
    pub dark: String,
    pub light_hc: String,
    pub dark_hc: String,
}

#[derive(Clone, Copy)]
enum Variant {
    Dark,
    LightHc,
    DarkHc,
}

/// Split `assets` into variant lists. The matching suffix is stripped so each
/// variant carries its light asset's name. Longer suffixes are tried first.
///
/// Lists with no members are `None`, so a single source without dark assets
/// pairs like a single-palette set.
pub fn split_by_suffix<A: Asset>(assets: Vec<A>, suffixes: &Suffixes) -> VariantSets<A> {
    let mut ordered = vec![
        (suffixes.dark.as_str(), Variant::Dark),
        (suffixes.light_hc.as_str(), Variant::LightHc),
        (suffixes.dark_hc.as_str(), Variant::DarkHc),
    ];
    ordered.retain(|(suffix, _)| !suffix.is_empty());
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut light = Vec::new();
    let mut dark = Vec::new();
    let mut light_hc = Vec::new();
    let mut dark_hc = Vec::new();

    for asset in assets {
        let found = ordered.iter().find_map(|(suffix, variant)| {
            asset
                .name()
                .strip_suffix(suffix)
                .filter(|base| !base.is_empty())
                .map(|base| (base.to_string(), *variant))
        });

        match found {
            Some((base, variant)) => {
                let renamed = asset.renamed(base).rebased();
                match variant {
                    Variant::Dark => dark.push(renamed),
                    Variant::LightHc => light_hc.push(renamed),
                    Variant::DarkHc => dark_hc.push(renamed),
                }
            }
            None => light.push(asset),
        }
    }

    let non_empty = |v: Vec<A>| if v.is_empty() { None } else { Some(v) };
    VariantSets {
        light,
        dark: non_empty(dark),
        light_hc: non_empty(light_hc),
        dark_hc: non_empty(dark_hc),
    }
}
