//! In-memory host doubles shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::{HostRegistry, MessageDispatcher};
use crate::core::error::{LocaleError, LocaleResult};
use crate::core::model::Material;

#[derive(Default)]
pub struct FakeRegistry {
    known: HashSet<String>,
    names: HashMap<String, String>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register probe-only identifiers.
    pub fn knowing(mut self, names: &[&str]) -> Self {
        self.known.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Register a material with the localization name its item reports.
    pub fn with_item(mut self, material: &str, key: &str) -> Self {
        self.known.insert(material.to_string());
        self.names.insert(material.to_string(), key.to_string());
        self
    }

    /// A registry as a 1.18+ server would answer the capability probes.
    pub fn modern() -> Self {
        Self::new().knowing(&["LINGERING_POTION", "AMETHYST_CLUSTER", "MUSIC_DISC_OTHERSIDE"])
    }
}

impl HostRegistry for FakeRegistry {
    fn knows_material(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    fn localization_name(&self, material: &Material) -> Option<String> {
        self.names.get(&material.name).cloned()
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageDispatcher for RecordingDispatcher {
    fn dispatch(&self, player: &str, payload: &str) -> LocaleResult<()> {
        if self.fail {
            return Err(LocaleError::Dispatch {
                player: player.to_string(),
                reason: "offline".into(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((player.to_string(), payload.to_string()));
        Ok(())
    }
}
