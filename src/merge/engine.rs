//! Merge algorithm.

use crate::value::{ConfigValue, Mapping};

use super::handle::Merged;

/// Deep merge two values.
///
/// Merge semantics:
/// - Both mappings: deep-merge by key (recursive)
/// - Anything else: `overlay` replaces `base` entirely
pub fn deep_merge(base: ConfigValue, overlay: ConfigValue) -> ConfigValue {
    match (base, overlay) {
        (ConfigValue::Object(base_map), ConfigValue::Object(overlay_map)) => {
            ConfigValue::Object(merge_mappings(base_map, overlay_map))
        }
        (_, overlay) => overlay,
    }
}

/// Merge `overlay` into `base`, key by key.
///
/// Keys already present in `base` keep their position; new keys are
/// appended in `overlay` order.
pub fn merge_mappings(mut base: Mapping, overlay: Mapping) -> Mapping {
    for (key, overlay_value) in overlay {
        match base.get_mut(&key) {
            Some(slot) => {
                let current = std::mem::take(slot);
                *slot = deep_merge(current, overlay_value);
            }
            None => {
                base.insert(key, overlay_value);
            }
        }
    }
    base
}

/// Merge owned sources in precedence order (first is base, last wins).
///
/// Merging zero sources yields an empty mapping.
pub fn merge_owned<I>(configs: I) -> Merged
where
    I: IntoIterator<Item = Mapping>,
{
    configs
        .into_iter()
        .fold(Mapping::new(), merge_mappings)
        .into()
}

/// Merge borrowed sources in precedence order.
///
/// Inputs are left untouched; every adopted value is an independent copy.
///
/// # Examples
///
/// ```
/// use dicfg::merge::merge;
/// use serde_json::json;
///
/// let a = json!({"a": {"x": 1}});
/// let b = json!({"a": {"y": 2}});
/// let merged = merge([a.as_object().unwrap(), b.as_object().unwrap()]);
///
/// assert_eq!(merged.into_value(), json!({"a": {"x": 1, "y": 2}}));
/// ```
pub fn merge<'a, I>(configs: I) -> Merged
where
    I: IntoIterator<Item = &'a Mapping>,
{
    merge_owned(configs.into_iter().cloned())
}
