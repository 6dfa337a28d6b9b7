use serde::Serialize;
use std::fmt;

/// One of the seven weighted evaluation items (kurul) of the school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    K1,
    K2,
    K3,
    K4,
    K5,
    Bil,
    Ihu,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::K1,
        Component::K2,
        Component::K3,
        Component::K4,
        Component::K5,
        Component::Bil,
        Component::Ihu,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Component::K1 => "k1",
            Component::K2 => "k2",
            Component::K3 => "k3",
            Component::K4 => "k4",
            Component::K5 => "k5",
            Component::Bil => "bil",
            Component::Ihu => "ihu",
        }
    }

    fn index(self) -> usize {
        match self {
            Component::K1 => 0,
            Component::K2 => 1,
            Component::K3 => 2,
            Component::K4 => 3,
            Component::K5 => 4,
            Component::Bil => 5,
            Component::Ihu => 6,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "value")]
pub enum ScoreEntry {
    #[default]
    Pending,
    Value(f64),
}

impl ScoreEntry {
    pub fn value(self) -> Option<f64> {
        match self {
            ScoreEntry::Pending => None,
            ScoreEntry::Value(value) => Some(value),
        }
    }
}

/// Scores for the seven components. Values are expected to be clamped to
/// [0, 100] already; see `grading::normalize`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComponentScores {
    entries: [ScoreEntry; 7],
}

impl ComponentScores {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn uniform(value: f64) -> Self {
        Self {
            entries: [ScoreEntry::Value(value); 7],
        }
    }

    #[cfg(test)]
    pub fn with(mut self, component: Component, value: f64) -> Self {
        self.set(component, ScoreEntry::Value(value));
        self
    }

    #[cfg(test)]
    pub fn with_pending(mut self, component: Component) -> Self {
        self.set(component, ScoreEntry::Pending);
        self
    }

    pub fn set(&mut self, component: Component, entry: ScoreEntry) {
        self.entries[component.index()] = entry;
    }

    pub fn get(&self, component: Component) -> ScoreEntry {
        self.entries[component.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, ScoreEntry)> + '_ {
        Component::ALL
            .iter()
            .map(move |component| (*component, self.get(*component)))
    }

    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| matches!(entry, ScoreEntry::Value(_)))
    }

    pub fn pending(&self) -> Vec<Component> {
        self.iter()
            .filter(|(_, entry)| matches!(entry, ScoreEntry::Pending))
            .map(|(component, _)| component)
            .collect()
    }
}
