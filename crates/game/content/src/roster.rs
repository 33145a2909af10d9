//! Fighter catalog and team drafting.

use arena_core::{CharacterKind, CharacterSpec, RandomSource};

use CharacterKind::{Energy, Strategist, Tank};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("fighter number {index} does not exist (roster has {len})")]
    UnknownIndex { index: usize, len: usize },

    #[error("fighter number {index} was already picked")]
    DuplicatePick { index: usize },

    #[error("cannot draft {requested} fighters from a roster of {available}")]
    NotEnoughCharacters { requested: usize, available: usize },
}

/// Ordered list of fighters available for drafting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<CharacterSpec>,
}

impl Roster {
    pub fn new(characters: Vec<CharacterSpec>) -> Self {
        Self { characters }
    }

    /// The stock catalog: Marvel, Dragon Ball Z and DC fighters.
    pub fn builtin() -> Self {
        #[rustfmt::skip]
        let fighters = [
            // Marvel
            ("Iron Man", 85, Energy, ["Repulsor Blast", "Unibeam", "Heal", "Boost"], 9),
            ("Captain America", 80, Strategist, ["Shield Throw", "Super Strength", "Heal", "Shield"], 7),
            ("Thor", 90, Energy, ["Mjolnir Strike", "Lightning Storm", "Boost", "Shield"], 8),
            ("Black Widow", 75, Strategist, ["Widow's Bite", "Martial Arts", "Boost", "Shield"], 10),
            ("Hulk", 100, Tank, ["Smash", "Thunder Clap", "Heal", "Shield"], 6),
            ("Black Panther", 85, Tank, ["Vibranium Strike", "Kinetic Blast", "Boost", "Shield"], 9),
            ("Spider-Man", 80, Energy, ["Web Shooters", "Spider Sense", "Boost", "Shield"], 10),
            ("Scarlet Witch", 95, Energy, ["Chaos Magic", "Hex Bolts", "Boost", "Shield"], 8),
            ("Doctor Strange", 92, Strategist, ["Time Stone", "Astral Projection", "Boost", "Shield"], 7),
            ("Vision", 85, Energy, ["Solar Beam", "Mass Manipulation", "Boost", "Shield"], 8),
            ("Deadpool", 80, Tank, ["Regeneration", "Sword Combat", "Boost", "Shield"], 9),
            ("Wolverine", 85, Tank, ["Adamantium Claws", "Regeneration", "Boost", "Shield"], 8),
            ("Gamora", 80, Strategist, ["Dagger Throw", "Deadly Accuracy", "Boost", "Shield"], 9),
            ("Rocket Raccoon", 75, Energy, ["Gun Mastery", "Tech Gadgets", "Boost", "Shield"], 7),
            ("Star-Lord", 75, Strategist, ["Element Guns", "Aerial Combat", "Boost", "Shield"], 8),
            ("Ant-Man", 70, Strategist, ["Pym Particles", "Ant Control", "Boost", "Shield"], 6),
            // Dragon Ball Z
            ("Goku", 95, Energy, ["Kamehameha", "Instant Transmission", "Boost", "Shield"], 10),
            ("Vegeta", 90, Energy, ["Final Flash", "Galick Gun", "Boost", "Shield"], 9),
            ("Frieza", 90, Energy, ["Death Beam", "Frieza's Wrath", "Boost", "Shield"], 8),
            ("Cell", 85, Tank, ["Solar Kamehameha", "Regeneration", "Boost", "Shield"], 7),
            ("Majin Buu", 95, Tank, ["Chocolate Beam", "Absorption", "Boost", "Shield"], 6),
            ("Piccolo", 80, Strategist, ["Special Beam Cannon", "Regeneration", "Boost", "Shield"], 8),
            ("Trunks", 85, Energy, ["Burning Attack", "Sword Combat", "Boost", "Shield"], 9),
            ("Gohan", 85, Energy, ["Masenko", "Super Kamehameha", "Boost", "Shield"], 8),
            ("Krillin", 75, Energy, ["Destructo Disc", "Kienzan", "Boost", "Shield"], 7),
            ("Tien Shinhan", 80, Strategist, ["Tri-Beam", "Solar Flare", "Boost", "Shield"], 8),
            ("Yamcha", 70, Strategist, ["Wolf Fang Fist", "Destructo Disc", "Boost", "Shield"], 8),
            // DC
            ("Superman", 100, Tank, ["Heat Vision", "Super Punch", "Boost", "Shield"], 10),
            ("Batman", 85, Strategist, ["Batarang", "Martial Arts", "Boost", "Shield"], 9),
            ("Wonder Woman", 90, Tank, ["Lasso of Truth", "Bracelets of Submission", "Boost", "Shield"], 8),
            ("The Flash", 80, Strategist, ["Speed Force", "Time Travel", "Boost", "Shield"], 10),
            ("Green Lantern", 85, Energy, ["Power Ring", "Light Constructs", "Boost", "Shield"], 8),
            ("Aquaman", 85, Tank, ["Trident Strike", "Aquatic Speed", "Boost", "Shield"], 8),
            ("Lex Luthor", 80, Strategist, ["Kryptonite Weapon", "Mechanical Armor", "Boost", "Shield"], 7),
            ("Joker", 75, Energy, ["Acid Flower", "Crazed Gadgets", "Boost", "Shield"], 7),
            ("Harley Quinn", 75, Energy, ["Hammer Smash", "Toxic Gas", "Boost", "Shield"], 8),
            ("Shazam", 95, Energy, ["Lightning Strike", "Shazam Punch", "Boost", "Shield"], 9),
            ("Cyborg", 85, Energy, ["Boom Tube", "Energy Cannon", "Boost", "Shield"], 7),
            ("Green Arrow", 80, Strategist, ["Explosive Arrows", "Archery", "Boost", "Shield"], 8),
            ("Catwoman", 75, Tank, ["Cat Claws", "Agility", "Boost", "Shield"], 9),
            ("Ra's al Ghul", 80, Strategist, ["Lazarus Pit", "Sword Combat", "Boost", "Shield"], 7),
            ("Deathstroke", 85, Tank, ["Sword Strike", "Tactical Combat", "Boost", "Shield"], 8),
        ];

        Self::new(
            fighters
                .into_iter()
                .map(|(name, power, kind, actions, speed)| {
                    CharacterSpec::new(name, power, kind, actions, speed)
                })
                .collect(),
        )
    }

    pub fn characters(&self) -> &[CharacterSpec] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CharacterSpec> {
        self.characters.get(index)
    }

    /// Picks fighters by 0-based index, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<CharacterSpec>, RosterError> {
        let mut picked = Vec::with_capacity(indices.len());
        for (position, &index) in indices.iter().enumerate() {
            if indices[..position].contains(&index) {
                return Err(RosterError::DuplicatePick { index });
            }
            let spec = self.get(index).ok_or(RosterError::UnknownIndex {
                index,
                len: self.len(),
            })?;
            picked.push(spec.clone());
        }
        Ok(picked)
    }

    /// Samples `size` distinct fighters uniformly without replacement.
    pub fn draft_random<R: RandomSource>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<Vec<CharacterSpec>, RosterError> {
        if size > self.len() {
            return Err(RosterError::NotEnoughCharacters {
                requested: size,
                available: self.len(),
            });
        }

        let mut pool: Vec<&CharacterSpec> = self.characters.iter().collect();
        let mut drafted = Vec::with_capacity(size);
        for _ in 0..size {
            let spec = pool.remove(rng.pick(pool.len()));
            drafted.push(spec.clone());
        }

        tracing::debug!(
            drafted = ?drafted.iter().map(|spec| spec.name.as_str()).collect::<Vec<_>>(),
            "random team drafted"
        );
        Ok(drafted)
    }
}

/// Uniformly chooses a captain slot for a team of `size` members.
pub fn random_captain<R: RandomSource>(size: usize, rng: &mut R) -> usize {
    rng.pick(size)
}
