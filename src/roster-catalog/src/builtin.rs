//! Built-in option catalogs used by the trainer and monster forms.

use std::fmt;
use std::str::FromStr;

use roster_components::autocomplete::AutocompleteOption;

use crate::error::CatalogError;

/// Monster types.
pub const TYPES: &[&str] = &[
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Factions a trainer can belong to, with a one-line blurb each.
pub const FACTIONS: &[(&str, &str)] = &[
    ("Nyakuza", "Feline crime family running the docks of Pirate's Bay"),
    ("Digital Dawn", "Hackers who believe data monsters are the next step"),
    ("Pokemon Ranchers", "Breeders and farmers raising monsters on the open range"),
    ("Koa's Laboratory", "Researchers studying monster biology and evolution"),
    ("Project Obsidian", "Secretive order chasing ancient power"),
    ("Spirit Keepers", "Guardians of the shrines and the spirits within"),
    ("Tribes", "Clans living by the old ways in the wilds"),
    ("Twilight Order", "Mystics who walk between day and night"),
    ("League", "Gyms and tournaments; the closest thing to a government"),
    ("Rangers", "Protectors of wild monsters and their habitats"),
    ("Tamers", "Partners who fight alongside their digital companions"),
];

/// Natures. Hardy is the neutral default.
pub const NATURES: &[&str] = &[
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty", "Bold", "Docile", "Relaxed", "Impish",
    "Lax", "Timid", "Hasty", "Serious", "Jolly", "Naive", "Modest", "Mild", "Quiet", "Bashful",
    "Rash", "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

/// Characteristics.
pub const CHARACTERISTICS: &[&str] = &[
    "Loves to eat",
    "Takes plenty of siestas",
    "Nods off a lot",
    "Scatters things often",
    "Likes to relax",
    "Proud of its power",
    "Likes to thrash about",
    "A little quick tempered",
    "Likes to fight",
    "Quick tempered",
    "Sturdy body",
    "Capable of taking hits",
    "Highly persistent",
    "Good endurance",
    "Good perseverance",
    "Highly curious",
    "Mischievous",
    "Thoroughly cunning",
    "Often lost in thought",
    "Very finicky",
    "Strong willed",
    "Somewhat vain",
    "Strongly defiant",
    "Hates to lose",
    "Somewhat stubborn",
    "Likes to run",
    "Alert to sounds",
    "Impetuous and silly",
    "Somewhat of a clown",
    "Quick to flee",
    "Often dozes off",
];

/// Berries with their effect on a monster.
pub const BERRIES: &[(&str, &str)] = &[
    ("Oran Berry", "Restores a little health"),
    ("Sitrus Berry", "Restores a good amount of health"),
    ("Lum Berry", "Cures any status condition"),
    ("Bugger Berry", "Removes the first species"),
    ("Mala Berry", "Removes the second species"),
    ("Merco Berry", "Removes the third species"),
    ("Siron Berry", "Removes the first type"),
    ("Lilan Berry", "Removes the second type"),
    ("Kham Berry", "Removes the third type"),
    ("Maizi Berry", "Removes the fourth type"),
    ("Fani Berry", "Removes the fifth type"),
    ("Miraca Berry", "Randomizes the first type"),
    ("Cocon Berry", "Randomizes the second type"),
    ("Durian Berry", "Randomizes the third type"),
    ("Monel Berry", "Randomizes the fourth type"),
    ("Perep Berry", "Randomizes the fifth type"),
    ("Addish Berry", "Adds a second type"),
    ("Sky Carrot Berry", "Adds a third type"),
    ("Kembre Berry", "Adds a fourth type"),
    ("Espara Berry", "Adds a fifth type"),
    ("Patama Berry", "Randomizes the first species"),
    ("Bluk Berry", "Randomizes the second species"),
    ("Nuevo Berry", "Randomizes the third species"),
    ("Azzuk Berry", "Adds a second species"),
    ("Mangus Berry", "Adds a third species"),
    ("Datei Berry", "Randomizes the attribute"),
    ("Divest Berry", "Splits a multi-species monster in two"),
    ("Forget-Me-Not", "Makes a monster forget a move"),
    ("Edenwiess", "Lets a monster learn a new move"),
];

/// The built-in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Types,
    Factions,
    Natures,
    Characteristics,
    Berries,
}

impl CatalogKind {
    /// All catalogs, in listing order.
    pub fn all() -> &'static [CatalogKind] {
        &[
            CatalogKind::Types,
            CatalogKind::Factions,
            CatalogKind::Natures,
            CatalogKind::Characteristics,
            CatalogKind::Berries,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            CatalogKind::Types => "types",
            CatalogKind::Factions => "factions",
            CatalogKind::Natures => "natures",
            CatalogKind::Characteristics => "characteristics",
            CatalogKind::Berries => "berries",
        }
    }

    /// Field label a form would show for this catalog.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Types => "Type",
            CatalogKind::Factions => "Faction",
            CatalogKind::Natures => "Nature",
            CatalogKind::Characteristics => "Characteristic",
            CatalogKind::Berries => "Berry",
        }
    }

    /// Whether entries carry descriptions worth a description panel.
    pub fn has_descriptions(self) -> bool {
        matches!(self, CatalogKind::Factions | CatalogKind::Berries)
    }

    /// Build the option list.
    pub fn options(self) -> Vec<AutocompleteOption> {
        match self {
            CatalogKind::Types => plain(TYPES),
            CatalogKind::Natures => plain(NATURES),
            CatalogKind::Characteristics => plain(CHARACTERISTICS),
            CatalogKind::Factions => described(FACTIONS),
            CatalogKind::Berries => described(BERRIES),
        }
    }
}

fn plain(names: &[&str]) -> Vec<AutocompleteOption> {
    names.iter().map(|&name| AutocompleteOption::new(name)).collect()
}

fn described(entries: &[(&str, &str)]) -> Vec<AutocompleteOption> {
    entries
        .iter()
        .map(|&(name, description)| AutocompleteOption::new(name).with_description(description))
        .collect()
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogKind {
    type Err = CatalogError;

    /// Case-insensitive; singular forms are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "types" | "type" => Ok(CatalogKind::Types),
            "factions" | "faction" => Ok(CatalogKind::Factions),
            "natures" | "nature" => Ok(CatalogKind::Natures),
            "characteristics" | "characteristic" => Ok(CatalogKind::Characteristics),
            "berries" | "berry" => Ok(CatalogKind::Berries),
            _ => Err(CatalogError::UnknownCatalog(s.to_string())),
        }
    }
}
