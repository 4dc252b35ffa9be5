//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use dioxus::prelude::*;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    /// Create a new preset with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    /// Set a boolean value in this preset
    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    /// Set a string/enum value in this preset
    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    /// Set an integer value in this preset
    pub fn set_int(mut self, key: &'static str, value: i32) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Int(value));
        self
    }

    /// Check if this preset matches the current registry state.
    ///
    /// Controls named by the preset must hold the preset's value; every
    /// other control must be at its default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            registry
                .values
                .get(control.key)
                .is_some_and(|s| &*s.read() == expected)
        })
    }
}
