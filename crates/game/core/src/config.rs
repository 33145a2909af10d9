/// Battle rules and tunable parameters.
///
/// Every numeric constant the engine uses lives here so content files can
/// override it. Defaults reproduce the classic ruleset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Health restored by a `Heal` action.
    pub heal_amount: u32,
    /// Permanent base power gained by a `Boost` action.
    pub boost_increment: u32,
    /// Mitigation set by a `Shield` action.
    pub shield_value: u32,
    /// Inclusive bounds of the random part of a damaging action.
    pub damage_roll: DamageRoll,
    /// Base power is divided by this before being added to the roll.
    pub power_divisor: u32,
    /// Captain boost amounts and which teams receive them.
    pub captain: CaptainRules,
    /// Stop after this many rounds even if both teams still stand.
    ///
    /// `None` runs until a team is defeated.
    pub round_limit: Option<u32>,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Upper bound of every character's health.
    pub const MAX_HEALTH: u32 = 100;
    /// Number of action labels each character carries.
    pub const ACTION_SLOTS: usize = 4;
    /// Largest team the engine will accept (slots are addressed by `u8`).
    pub const MAX_TEAM_SIZE: usize = u8::MAX as usize;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEAL_AMOUNT: u32 = 20;
    pub const DEFAULT_BOOST_INCREMENT: u32 = 5;
    pub const DEFAULT_SHIELD_VALUE: u32 = 5;
    pub const DEFAULT_POWER_DIVISOR: u32 = 10;

    pub fn new() -> Self {
        Self {
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
            boost_increment: Self::DEFAULT_BOOST_INCREMENT,
            shield_value: Self::DEFAULT_SHIELD_VALUE,
            damage_roll: DamageRoll::default(),
            power_divisor: Self::DEFAULT_POWER_DIVISOR,
            captain: CaptainRules::default(),
            round_limit: None,
        }
    }

    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    pub fn with_captain_scope(mut self, scope: CaptainBoostScope) -> Self {
        self.captain.scope = scope;
        self
    }

    /// Checks values the engine cannot run with.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.damage_roll.min > self.damage_roll.max {
            return Err(crate::ConfigError::InvalidDamageRoll {
                min: self.damage_roll.min,
                max: self.damage_roll.max,
            });
        }
        // base power may be zero, so the roll alone must be able to hurt
        if self.damage_roll.max == 0 {
            return Err(crate::ConfigError::ZeroDamageRoll);
        }
        if self.power_divisor == 0 {
            return Err(crate::ConfigError::ZeroPowerDivisor);
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive bounds for the random damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    pub min: u32,
    pub max: u32,
}

impl Default for DamageRoll {
    fn default() -> Self {
        Self { min: 10, max: 30 }
    }
}

/// Captain boost amounts per captain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaptainRules {
    /// Speed added to every teammate by a strategist captain.
    pub speed_bonus: u32,
    /// Health added (capped) to every teammate by a tank captain.
    pub health_bonus: u32,
    /// Base power added to every teammate by an energy captain.
    pub power_bonus: u32,
    pub scope: CaptainBoostScope,
}

impl Default for CaptainRules {
    fn default() -> Self {
        Self {
            speed_bonus: 3,
            health_bonus: 10,
            power_bonus: 5,
            scope: CaptainBoostScope::default(),
        }
    }
}

/// Which teams receive their captain's boost at battle start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaptainBoostScope {
    /// Only the home team is boosted.
    #[default]
    HomeOnly,
    /// Both teams are boosted by their own captain.
    BothTeams,
}

impl CaptainBoostScope {
    pub fn applies_to(&self, side: crate::Side) -> bool {
        match self {
            Self::HomeOnly => side == crate::Side::Home,
            Self::BothTeams => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, Side};

    #[test]
    fn defaults_match_classic_rules() {
        let config = BattleConfig::default();
        assert_eq!(config.heal_amount, 20);
        assert_eq!(config.boost_increment, 5);
        assert_eq!(config.shield_value, 5);
        assert_eq!(config.damage_roll, DamageRoll { min: 10, max: 30 });
        assert_eq!(config.power_divisor, 10);
        assert_eq!(config.captain.scope, CaptainBoostScope::HomeOnly);
        assert_eq!(config.round_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_damage_roll() {
        let mut config = BattleConfig::default();
        config.damage_roll = DamageRoll { min: 30, max: 10 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDamageRoll { min: 30, max: 10 })
        ));
    }

    #[test]
    fn rejects_roll_that_can_never_damage() {
        let mut config = BattleConfig::default();
        config.damage_roll = DamageRoll { min: 0, max: 0 };
        config.power_divisor = 1000;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDamageRoll)));

        // a roll that can still land a point of damage is fine
        config.damage_roll = DamageRoll { min: 0, max: 1 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_power_divisor() {
        let mut config = BattleConfig::default();
        config.power_divisor = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroPowerDivisor)
        ));
    }

    #[test]
    fn scope_selects_sides() {
        assert!(CaptainBoostScope::HomeOnly.applies_to(Side::Home));
        assert!(!CaptainBoostScope::HomeOnly.applies_to(Side::Away));
        assert!(CaptainBoostScope::BothTeams.applies_to(Side::Away));
    }
}
