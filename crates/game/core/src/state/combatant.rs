//! Combatants and the stat blocks they are built from.

use crate::action::ActionSet;

/// Which side of the encounter a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Integer resource meter. `current` never exceeds `maximum`.
///
/// Deserialized meters pass through [`ResourceMeter::new`], so snapshots
/// cannot carry `current > maximum` either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MeterFields"))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

/// Unchecked wire shape of a [`ResourceMeter`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeterFields {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<MeterFields> for ResourceMeter {
    fn from(fields: MeterFields) -> Self {
        Self::new(fields.current, fields.maximum)
    }
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, maximum]`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, returning what was actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    /// Restores up to `amount` without exceeding the maximum, returning what was restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.maximum - self.current);
        self.current += applied;
        applied
    }
}

/// Character stat block supplied by the character/story service.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dark_secret: String,
}

/// Enemy stat block supplied by the character/story service.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySheet {
    pub name: String,
    /// Free-form category ("cultist", "cosmic_horror", "boss").
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: String,
    pub hp: u32,
    pub max_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// A participant in one encounter.
///
/// Created once per encounter from a stat block and mutated in place by
/// action resolution. A combatant at 0 hp is defeated for good.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    side: Side,
    hp: ResourceMeter,
    /// Player: granted action set derived from `abilities`. Enemy: empty.
    granted: ActionSet,
    /// Player: stat-block ability names. Enemy: ability pool.
    abilities: Vec<String>,
    dark_secret: Option<String>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, side: Side, hp: ResourceMeter) -> Self {
        Self {
            name: name.into(),
            side,
            hp,
            granted: ActionSet::empty(),
            abilities: Vec::new(),
            dark_secret: None,
        }
    }

    /// Builds the player combatant from a character stat block.
    pub fn player(sheet: &CharacterSheet) -> Self {
        let dark_secret = (!sheet.dark_secret.is_empty()).then(|| sheet.dark_secret.clone());
        Self {
            dark_secret,
            ..Self::new(
                sheet.name.clone(),
                Side::Player,
                ResourceMeter::new(sheet.hp, sheet.max_hp),
            )
            .with_abilities(sheet.abilities.iter().cloned())
        }
    }

    /// Builds an enemy combatant from an enemy stat block.
    pub fn enemy(sheet: &EnemySheet) -> Self {
        Self::new(
            sheet.name.clone(),
            Side::Enemy,
            ResourceMeter::new(sheet.hp, sheet.max_hp),
        )
        .with_abilities(sheet.abilities.iter().cloned())
    }

    /// Replaces the ability list. For the player this also recomputes the granted set.
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self.granted = match self.side {
            Side::Player => ActionSet::from_ability_names(&self.abilities),
            Side::Enemy => ActionSet::empty(),
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_player(&self) -> bool {
        self.side == Side::Player
    }

    pub fn hp(&self) -> u32 {
        self.hp.current()
    }

    pub fn max_hp(&self) -> u32 {
        self.hp.maximum()
    }

    pub fn meter(&self) -> ResourceMeter {
        self.hp
    }

    pub fn granted(&self) -> ActionSet {
        self.granted
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn dark_secret(&self) -> Option<&str> {
        self.dark_secret.as_deref()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }

    pub(crate) fn meter_mut(&mut self) -> &mut ResourceMeter {
        &mut self.hp
    }
}
