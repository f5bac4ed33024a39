//! Alias resolution over the variable graph.

use tracing::debug;

use crate::naming::collapse_path;
use crate::source::DescriptionTag;
use crate::types::{Color, Colour};

use super::{ModeNames, ResolveError, VariableColors, VariableValue, VariablesMeta};

/// Resolves variables of one collection into per-mode colors.
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    meta: &'a VariablesMeta,
    primitives_mode_name: Option<&'a str>,
}

impl<'a> VariableResolver<'a> {
    pub fn new(meta: &'a VariablesMeta) -> Self {
        Self {
            meta,
            primitives_mode_name: None,
        }
    }

    /// Mode name used to read aliased variables in other collections.
    pub fn with_primitives_mode(mut self, name: Option<&'a str>) -> Self {
        self.primitives_mode_name = name;
        self
    }

    /// Resolve the literal value of `variable_id` in `mode_id`.
    ///
    /// Missing variables, collections and mode values resolve to `None`.
    /// Following an alias reads the target in its own collection's
    /// primitives mode (or default mode).
    pub fn resolve(&self, variable_id: &'a str, mode_id: &'a str) -> Result<Option<&'a VariableValue>, ResolveError> {
        let mut resolving = Vec::new();
        self.resolve_inner(variable_id, mode_id, &mut resolving)
    }

    fn resolve_inner(
        &self,
        variable_id: &'a str,
        mode_id: &'a str,
        resolving: &mut Vec<(&'a str, &'a str)>,
    ) -> Result<Option<&'a VariableValue>, ResolveError> {
        let Some(variable) = self.meta.variables.get(variable_id) else {
            return Ok(None);
        };
        let Some(value) = variable.values_by_mode.get(mode_id) else {
            return Ok(None);
        };

        let VariableValue::Alias(alias) = value else {
            return Ok(Some(value));
        };

        if resolving.contains(&(variable_id, mode_id)) {
            return Err(ResolveError::AliasCycle {
                chain: self.cycle_names(resolving, variable_id),
            });
        }

        let Some(target) = self.meta.variables.get(&alias.id) else {
            return Ok(None);
        };
        let Some(collection) = self
            .meta
            .variable_collections
            .get(&target.variable_collection_id)
        else {
            return Ok(None);
        };
        let target_mode = collection.resolution_mode_id(self.primitives_mode_name);

        resolving.push((variable_id, mode_id));
        let resolved = self.resolve_inner(&target.id, target_mode, resolving);
        resolving.pop();
        resolved
    }

    fn cycle_names(&self, resolving: &[(&str, &str)], revisited: &str) -> Vec<String> {
        resolving
            .iter()
            .map(|(id, _)| *id)
            .chain(std::iter::once(revisited))
            .map(|id| {
                self.meta
                    .variables
                    .get(id)
                    .map_or_else(|| id.to_string(), |v| v.name.clone())
            })
            .collect()
    }

    /// Resolve a colour, treating non-colour literals as missing.
    pub fn resolve_color(&self, variable_id: &'a str, mode_id: &'a str) -> Result<Option<Colour>, ResolveError> {
        Ok(match self.resolve(variable_id, mode_id)? {
            Some(VariableValue::Color(colour)) => Some(*colour),
            _ => None,
        })
    }

    /// Resolve every variable of the collection named `collection_name` in
    /// each requested mode.
    pub fn resolve_colors(
        &self,
        collection_name: &str,
        modes: &ModeNames,
    ) -> Result<VariableColors, ResolveError> {
        let collection = self
            .meta
            .variable_collections
            .values()
            .find(|c| c.name == collection_name)
            .ok_or_else(|| ResolveError::CollectionNotFound {
                name: collection_name.to_string(),
            })?;

        let mode_id = |name: &str| {
            collection
                .mode_id(name)
                .ok_or_else(|| ResolveError::ModeNotFound {
                    collection: collection.name.clone(),
                    mode: name.to_string(),
                })
        };

        let light_id = mode_id(&modes.light)?;
        let dark_id = modes.dark.as_deref().map(mode_id).transpose()?;
        let light_hc_id = modes.light_hc.as_deref().map(mode_id).transpose()?;
        let dark_hc_id = modes.dark_hc.as_deref().map(mode_id).transpose()?;

        let mut out = VariableColors {
            light: Vec::new(),
            dark: dark_id.map(|_| Vec::new()),
            light_hc: light_hc_id.map(|_| Vec::new()),
            dark_hc: dark_hc_id.map(|_| Vec::new()),
        };

        for variable_id in &collection.variable_ids {
            let Some(variable) = self.meta.variables.get(variable_id) else {
                continue;
            };
            if variable.hidden_from_publishing {
                debug!(name = %variable.name, "skipping variable hidden from publishing");
                continue;
            }
            let Some(platform) = DescriptionTag::parse(&variable.description).platform() else {
                debug!(name = %variable.name, "skipping variable excluded by description");
                continue;
            };

            let name = collapse_path(&variable.name);
            let color = |colour: Colour| Color::new(name.clone(), colour).with_platform(platform);

            if let Some(colour) = self.resolve_color(&variable.id, light_id)? {
                out.light.push(color(colour));
            }
            for (mode, list) in [
                (dark_id, out.dark.as_mut()),
                (light_hc_id, out.light_hc.as_mut()),
                (dark_hc_id, out.dark_hc.as_mut()),
            ] {
                let (Some(mode), Some(list)) = (mode, list) else {
                    continue;
                };
                if let Some(colour) = self.resolve_color(&variable.id, mode)? {
                    list.push(color(colour));
                }
            }
        }

        debug!(
            collection = collection_name,
            light = out.light.len(),
            "resolved variable colors"
        );
        Ok(out)
    }
}
