use super::{LaunchMonitor, Mlm2Pro};
use crate::error::{Result, ShotError};
use std::collections::BTreeMap;

/// Maps launch monitor type names to their profiles.
///
/// Names are matched case-insensitively:
/// ```
/// use launch_rater::monitors::MonitorRegistry;
///
/// let registry = MonitorRegistry::with_defaults();
/// assert_eq!(registry.get("MLM2PRO").unwrap().name(), "MLM2Pro");
/// ```
pub struct MonitorRegistry {
    monitors: BTreeMap<String, Box<dyn LaunchMonitor>>,
}

impl MonitorRegistry {
    /// Empty registry. [`Default`] and [`MonitorRegistry::with_defaults`]
    /// start with the built-in profiles instead.
    pub fn new() -> Self {
        Self {
            monitors: BTreeMap::new(),
        }
    }

    /// Registry with every built-in profile.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("mlm2pro", Mlm2Pro);
        registry
    }

    /// Adds or replaces the profile under `name`.
    pub fn register(&mut self, name: &str, monitor: impl LaunchMonitor + 'static) {
        self.monitors
            .insert(name.trim().to_lowercase(), Box::new(monitor));
    }

    /// Looks up the profile for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError::UnsupportedProfile`] listing the registered names.
    pub fn get(&self, name: &str) -> Result<&dyn LaunchMonitor> {
        self.monitors
            .get(&name.trim().to_lowercase())
            .map(|monitor| monitor.as_ref())
            .ok_or_else(|| ShotError::UnsupportedProfile {
                name: name.to_string(),
                supported: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.monitors.keys().map(String::as_str)
    }
}

impl Default for MonitorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
