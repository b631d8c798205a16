//! Enumerated monster codes and their display labels.
//!
//! The feed encodes property, race, size and class as small integers. Each
//! type here maps those integers through an explicit table. Codes missing
//! from the table decode to `Unknown(code)`, re-encode to the same integer,
//! and render as the empty string.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $table:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A code the table does not know, kept verbatim.
            ///
            /// Holding a known code is allowed: it behaves exactly like the
            /// matching named variant.
            Unknown(i32),
        }

        const $table: &[($name, i32, &str)] = &[
            $( ($name::$variant, $code, $label), )+
        ];

        impl $name {
            /// Looks up the variant for a feed code.
            pub fn from_code(code: i32) -> Self {
                match $name::lookup(code) {
                    Some(variant) => variant,
                    None => {
                        tracing::trace!(code, kind = stringify!($name), "unrecognized code");
                        $name::Unknown(code)
                    }
                }
            }

            /// Returns the feed code.
            pub fn code(self) -> i32 {
                match self {
                    $name::Unknown(code) => code,
                    known => $name::entry(known).map(|(_, code, _)| *code).unwrap_or_default(),
                }
            }

            /// Returns the display label, or `""` for unknown codes.
            pub fn label(self) -> &'static str {
                $name::entry(self.canonical()).map(|(_, _, label)| *label).unwrap_or("")
            }

            /// Returns `true` if the code is in the table.
            pub fn is_known(self) -> bool {
                !matches!(self.canonical(), $name::Unknown(_))
            }

            fn lookup(code: i32) -> Option<Self> {
                $table.iter().find(|(_, c, _)| *c == code).map(|(variant, _, _)| *variant)
            }

            fn entry(self) -> Option<&'static ($name, i32, &'static str)> {
                let wanted = std::mem::discriminant(&self);
                $table.iter().find(|(variant, _, _)| std::mem::discriminant(variant) == wanted)
            }

            fn canonical(self) -> Self {
                match self {
                    $name::Unknown(code) => $name::lookup(code).unwrap_or(self),
                    known => known,
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.code() == other.code()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.code(), state);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::from_code(0)
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                $name::from_code(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

coded_enum! {
    /// Elemental property of a monster: an element and a level from 1 to 4.
    ///
    /// Codes are grouped by level (`20..=29` is level 1, `40..=49` level 2 and
    /// so on) but labels always come from the table, so `NeutralSpecial` and
    /// `Neutral1` share the label `"Neutral 1"`.
    pub enum Property in PROPERTIES {
        /// Neutral 1, reserved for guardians and treasure boxes.
        NeutralSpecial = 0 => "Neutral 1",
        Neutral1 = 20 => "Neutral 1",
        Neutral2 = 40 => "Neutral 2",
        Neutral3 = 60 => "Neutral 3",
        Neutral4 = 80 => "Neutral 4",
        Water1 = 21 => "Water 1",
        Water2 = 41 => "Water 2",
        Water3 = 61 => "Water 3",
        Water4 = 81 => "Water 4",
        Earth1 = 22 => "Earth 1",
        Earth2 = 42 => "Earth 2",
        Earth3 = 62 => "Earth 3",
        Earth4 = 82 => "Earth 4",
        Fire1 = 23 => "Fire 1",
        Fire2 = 43 => "Fire 2",
        Fire3 = 63 => "Fire 3",
        Fire4 = 83 => "Fire 4",
        Wind1 = 24 => "Wind 1",
        Wind2 = 44 => "Wind 2",
        Wind3 = 64 => "Wind 3",
        Wind4 = 84 => "Wind 4",
        Poison1 = 25 => "Poison 1",
        Poison2 = 45 => "Poison 2",
        Poison3 = 65 => "Poison 3",
        Poison4 = 85 => "Poison 4",
        Holy1 = 26 => "Holy 1",
        Holy2 = 46 => "Holy 2",
        Holy3 = 66 => "Holy 3",
        Holy4 = 86 => "Holy 4",
        Shadow1 = 27 => "Shadow 1",
        Shadow2 = 47 => "Shadow 2",
        Shadow3 = 67 => "Shadow 3",
        Shadow4 = 87 => "Shadow 4",
        Ghost1 = 28 => "Ghost 1",
        Ghost2 = 48 => "Ghost 2",
        Ghost3 = 68 => "Ghost 3",
        Ghost4 = 88 => "Ghost 4",
        Undead1 = 29 => "Undead 1",
        Undead2 = 49 => "Undead 2",
        Undead3 = 69 => "Undead 3",
        Undead4 = 89 => "Undead 4",
    }
}

coded_enum! {
    /// Monster race.
    pub enum Race in RACES {
        Formless = 0 => "Formless",
        Undead = 1 => "Undead",
        Brute = 2 => "Brute",
        Plant = 3 => "Plant",
        Insect = 4 => "Insect",
        Fish = 5 => "Fish",
        Demon = 6 => "Demon",
        DemiHuman = 7 => "Demi-Human",
        Angel = 8 => "Angel",
        Dragon = 9 => "Dragon",
    }
}

coded_enum! {
    /// Monster size. Sorting by size follows the code order.
    pub enum Size in SIZES {
        Small = 0 => "Small",
        Medium = 1 => "Medium",
        Large = 2 => "Large",
    }
}

coded_enum! {
    /// Monster classification.
    pub enum Classification in CLASSES {
        Mob = 0 => "Mob",
        /// Mini-bosses and MVPs alike; the feed does not tell them apart.
        Boss = 1 => "Boss",
    }
}

/// Movement speed in milliseconds per cell. Lower is faster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSpeed(pub i64);

impl MoveSpeed {
    pub const IMMOVABLE: MoveSpeed = MoveSpeed(1000);
    pub const VERY_SLOW: MoveSpeed = MoveSpeed(350);
    pub const SLOW: MoveSpeed = MoveSpeed(200);
    pub const AVERAGE: MoveSpeed = MoveSpeed(170);
    pub const FAST: MoveSpeed = MoveSpeed(130);
    pub const VERY_FAST: MoveSpeed = MoveSpeed(100);

    /// Returns the milliseconds per cell.
    pub fn millis(self) -> i64 {
        self.0
    }
}
