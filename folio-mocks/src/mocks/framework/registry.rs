//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
    Int(i32),
}

impl ControlValue {
    /// Parse a URL state value using `self` as the type and fallback
    fn parse_like(&self, raw: &str) -> ControlValue {
        match self {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::String(_) => ControlValue::String(raw.to_string()),
            ControlValue::Int(default) => ControlValue::Int(raw.parse().unwrap_or(*default)),
        }
    }
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label) for enums
    pub int_range: Option<(i32, Option<i32>)>,                   // (min, max) for int controls
    /// Conditions that must all be true for this control to be visible.
    /// Each tuple is (control_key, required_value).
    pub visible_when: Vec<(&'static str, &'static str)>,
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
            int_range: None,
            visible_when: Vec::new(),
        }
    }

    /// Check if this control should be visible given the current registry state.
    pub fn is_visible(&self, registry: &ControlRegistry) -> bool {
        self.visible_when
            .iter()
            .all(|(key, value)| registry.get_string(key) == *value)
    }

    /// Clamp an int value into this control's range
    pub fn clamp_int(&self, value: i32) -> i32 {
        match self.int_range {
            Some((min, Some(max))) => value.clamp(min, max),
            Some((min, None)) => value.max(min),
            None => value,
        }
    }
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add an integer control
    pub fn int_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: i32,
        min: i32,
        max: Option<i32>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::Int(default));
        def.int_range = Some((min, max));
        self.controls.push(def);
        self
    }

    /// Add a free-form string control
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.controls.push(ControlDef::new(
            key,
            label,
            ControlValue::String(default.to_string()),
        ));
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add a visibility condition to the last control.
    /// Multiple calls create an AND condition (all must match).
    pub fn visible_when(mut self, key: &'static str, value: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.visible_when.push((key, value));
        }
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        self.validate_visibility();

        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let initial = initial_value(def, &state_pairs);
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }

    /// visible_when must reference a known control, and a known option when
    /// that control is an enum
    fn validate_visibility(&self) {
        for control in &self.controls {
            for (ref_key, ref_value) in &control.visible_when {
                let Some(ref_ctrl) = self.controls.iter().find(|c| c.key == *ref_key) else {
                    panic!(
                        "visible_when on '{}' references unknown control '{}'",
                        control.key, ref_key
                    );
                };
                if let Some(options) = &ref_ctrl.enum_options {
                    if !options.iter().any(|(v, _)| v == ref_value) {
                        panic!(
                            "visible_when on '{}' references invalid value '{}' for control '{}'",
                            control.key, ref_value, ref_key
                        );
                    }
                }
            }
        }
    }
}

/// Value from URL state when present, otherwise the control's default
fn initial_value(def: &ControlDef, state_pairs: &[(String, String)]) -> ControlValue {
    let value = state_pairs
        .iter()
        .find(|(k, _)| k == def.key)
        .map(|(_, v)| def.default.parse_like(v))
        .unwrap_or_else(|| def.default.clone());
    match value {
        ControlValue::Int(i) => ControlValue::Int(def.clamp_int(i)),
        other => other,
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    /// Get an integer value (reads signal, creating subscription)
    pub fn get_int(&self, key: &'static str) -> i32 {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::Int(i) => *i,
                _ => 0,
            })
            .unwrap_or(0)
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Set an integer value, clamped to the control's range
    pub fn set_int(&self, key: &'static str, value: i32) {
        let value = self
            .controls
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.clamp_int(value))
            .unwrap_or(value);
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Int(value));
        }
    }

    /// Apply a preset - resets all controls to defaults, then applies preset values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(control.default.clone());
            }
        }
        for (key, value) in &preset.values {
            if let Some(mut signal) = self.values.get(key.as_str()).copied() {
                signal.set(value.clone());
            }
        }
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                match (&*signal.read(), &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        builder.set_string(def.key, v, default);
                    }
                    (ControlValue::Int(v), ControlValue::Int(default)) => {
                        builder.set_int(def.key, *v, *default);
                    }
                    _ => {}
                }
            }
        }

        builder.build_option()
    }

    /// Keep the URL in sync with control values.
    ///
    /// `to_route` builds the page's route from the encoded state. The first
    /// run is skipped so opening a page doesn't rewrite its URL.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}
