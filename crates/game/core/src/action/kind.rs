//! Action labels and their classification.

/// Opaque action label as it appears in a roster (`"Repulsor Blast"`, `"Heal"`, ...).
///
/// The engine only interprets the reserved labels `Heal`, `Boost` and
/// `Shield`; every other label is a damaging action whose name is kept for
/// narration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionLabel(String);

impl ActionLabel {
    pub const HEAL: &'static str = "Heal";
    pub const BOOST: &'static str = "Boost";
    pub const SHIELD: &'static str = "Shield";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> ActionKind {
        match self.0.as_str() {
            Self::HEAL => ActionKind::Heal,
            Self::BOOST => ActionKind::Boost,
            Self::SHIELD => ActionKind::Shield,
            _ => ActionKind::Damage,
        }
    }
}

impl From<&str> for ActionLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for ActionLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl core::fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an action does when resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    /// Actor restores its own health.
    Heal,
    /// Actor permanently raises its own base power.
    Boost,
    /// Actor sets mitigation for the next hit it takes.
    Shield,
    /// Actor hits the chosen target.
    Damage,
}

impl ActionKind {
    /// Self-targeted utility actions need no defender.
    pub const fn is_utility(&self) -> bool {
        !matches!(self, Self::Damage)
    }
}
