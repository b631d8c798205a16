//! The monster record and its feed encoding.
//!
//! Documents come from the RagnarokTravels monster drop feed as flat JSON
//! objects. The Rust record groups related fields into sub-structs and
//! flattens them back when (de)serializing, so the wire shape stays flat.
//! Fields missing from a document decode to their zero value.

use serde::{Deserialize, Serialize};

use crate::codes::{Classification, MoveSpeed, Property, Race, Size};
use crate::error::Result;
use crate::traits::Queryable;
use crate::value::{Number, Value};

/// A Ragnarok Online monster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monster {
    /// In-game display name.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(flatten)]
    pub items: Items,
    #[serde(flatten)]
    pub stats: Stats,
    #[serde(flatten)]
    pub info: Info,
    /// Names in the feed's own database, usually the kRO original name.
    pub db_name: Vec<String>,
}

/// The eight drop slots of a monster.
///
/// Each item is `[display name, lookup name, item id]` and each percent is
/// in hundredths of a percent (`5335` is 53.35%). Monsters with fewer drops
/// have the remaining slots filled with a placeholder at zero percent. The
/// eighth slot holds the card, if the monster has one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Items {
    pub item1: Vec<String>,
    pub percent1: i64,
    pub item2: Vec<String>,
    pub percent2: i64,
    pub item3: Vec<String>,
    pub percent3: i64,
    pub item4: Vec<String>,
    pub percent4: i64,
    pub item5: Vec<String>,
    pub percent5: i64,
    pub item6: Vec<String>,
    pub percent6: i64,
    pub item7: Vec<String>,
    pub percent7: i64,
    pub item8: Vec<String>,
    pub percent8: i64,
}

/// One drop slot, borrowed from [`Items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropSlot<'a> {
    pub item: &'a [String],
    /// Drop rate in hundredths of a percent.
    pub percent: i64,
}

impl DropSlot<'_> {
    /// The item's display name, if the slot names one.
    pub fn name(&self) -> Option<&str> {
        self.item.first().map(String::as_str)
    }
}

impl Items {
    /// Returns all eight slots in feed order, placeholders included.
    pub fn slots(&self) -> [DropSlot<'_>; 8] {
        [
            DropSlot {
                item: &self.item1,
                percent: self.percent1,
            },
            DropSlot {
                item: &self.item2,
                percent: self.percent2,
            },
            DropSlot {
                item: &self.item3,
                percent: self.percent3,
            },
            DropSlot {
                item: &self.item4,
                percent: self.percent4,
            },
            DropSlot {
                item: &self.item5,
                percent: self.percent5,
            },
            DropSlot {
                item: &self.item6,
                percent: self.percent6,
            },
            DropSlot {
                item: &self.item7,
                percent: self.percent7,
            },
            DropSlot {
                item: &self.item8,
                percent: self.percent8,
            },
        ]
    }
}

/// Fundamental combat statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Cell distance the monster attacks from. `0` cannot attack, `1` is
    /// melee, `7` is the usual ranged distance.
    #[serde(rename = "aRan")]
    pub attack_range: i64,
    #[serde(rename = "LV")]
    pub level: i64,
    #[serde(rename = "HP")]
    pub hp: i64,
    #[serde(rename = "SP")]
    pub sp: i64,
    pub str: i64,
    pub int: i64,
    pub vit: i64,
    pub dex: i64,
    pub agi: i64,
    pub luk: i64,
    #[serde(rename = "atk1")]
    pub low_atk: i64,
    /// Added to `low_atk` to get the highest attack, not an absolute value.
    #[serde(rename = "atk2")]
    pub high_atk: i64,
    pub def: i64,
    #[serde(flatten)]
    pub exp: Experience,
}

/// Character experience gained by defeating a monster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(rename = "exp")]
    pub base: i64,
    #[serde(rename = "jexp")]
    pub job: i64,
}

/// Game information beyond raw stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    /// Mirrors the level in every known entry.
    pub inc: i64,
    #[serde(rename = "as")]
    pub spell_range: i64,
    #[serde(rename = "es")]
    pub sight_range: i64,
    #[serde(rename = "Mspeed")]
    pub move_speed: MoveSpeed,
    /// Milliseconds between attacks.
    #[serde(rename = "rechargeTime")]
    pub attack_delay: i64,
    /// Milliseconds the monster idles after being hit.
    #[serde(rename = "attackedMT")]
    pub hurt_delay: i64,
    /// Milliseconds the monster idles after hitting.
    #[serde(rename = "attackMT")]
    pub hit_delay: i64,
    pub property: Property,
    #[serde(rename = "scale")]
    pub size: Size,
    pub class: Classification,
    pub race: Race,
    pub mdef: i64,
    #[serde(flatten)]
    pub pet: PetInfo,
}

/// Taming and food items, `"0"` when the monster cannot be tamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetInfo {
    #[serde(rename = "tamingitem")]
    pub taming_item: String,
    #[serde(rename = "fooditem")]
    pub food_item: String,
}

impl Monster {
    /// Decodes a single feed document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Encodes the monster back into the feed's document shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// HIT a challenger needs to land every attack on this monster.
    ///
    /// Hit chance is `80 + HIT - FLEE` percent and a monster's FLEE is
    /// `level + agi`, so 100% needs `20 + level + agi`. Saturates at the
    /// `i64` bounds.
    pub fn max_hit(&self) -> i64 {
        threshold(20, self.stats.level, self.stats.agi)
    }

    /// FLEE needed to dodge 95% of this monster's attacks.
    ///
    /// A monster's HIT is `level + dex`; solving
    /// `95 = 100 - (HIT + 80 - FLEE)` gives `75 + level + dex`. Saturates at
    /// the `i64` bounds.
    pub fn max_dodge(&self) -> i64 {
        threshold(75, self.stats.level, self.stats.dex)
    }

    /// Base experience per health point, `None` when HP is zero.
    pub fn base_exp_per_hp(&self) -> Option<f64> {
        per_hp(self.stats.exp.base, self.stats.hp)
    }

    /// Job experience per health point, `None` when HP is zero.
    pub fn job_exp_per_hp(&self) -> Option<f64> {
        per_hp(self.stats.exp.job, self.stats.hp)
    }

    /// Returns `true` for bosses and MVPs.
    pub fn is_boss(&self) -> bool {
        self.info.class == Classification::Boss
    }
}

fn threshold(base: i64, level: i64, stat: i64) -> i64 {
    base.saturating_add(level).saturating_add(stat)
}

fn per_hp(exp: i64, hp: i64) -> Option<f64> {
    (hp != 0).then(|| exp as f64 / hp as f64)
}

// Field names understood by `Queryable for Monster`.
impl Monster {
    pub const NAME: &'static str = "name";
    /// Property code, compared as [`Value::Code`].
    pub const PROPERTY: &'static str = "property";
    /// Property label such as `"Neutral 3"`, compared as a string.
    pub const ELEMENT: &'static str = "element";
    pub const RACE: &'static str = "race";
    pub const RACE_LABEL: &'static str = "race_label";
    pub const SIZE: &'static str = "size";
    pub const CLASS: &'static str = "class";
    pub const BOSS: &'static str = "boss";
    pub const LEVEL: &'static str = "level";
    pub const HP: &'static str = "hp";
    pub const SP: &'static str = "sp";
    pub const STR: &'static str = "str";
    pub const INT: &'static str = "int";
    pub const VIT: &'static str = "vit";
    pub const DEX: &'static str = "dex";
    pub const AGI: &'static str = "agi";
    pub const LUK: &'static str = "luk";
    pub const ATTACK_RANGE: &'static str = "attack_range";
    pub const DEF: &'static str = "def";
    pub const MDEF: &'static str = "mdef";
    pub const BASE_EXP: &'static str = "base_exp";
    pub const JOB_EXP: &'static str = "job_exp";
    pub const MOVE_SPEED: &'static str = "move_speed";
    pub const MAX_HIT: &'static str = "max_hit";
    pub const MAX_DODGE: &'static str = "max_dodge";
    /// `None` when HP is zero.
    pub const BASE_EXP_PER_HP: &'static str = "base_exp_per_hp";
    /// `None` when HP is zero.
    pub const JOB_EXP_PER_HP: &'static str = "job_exp_per_hp";
}

impl Queryable for Monster {
    fn field_value(&self, field: &str) -> Value<'_> {
        let int = |n: i64| Value::Number(Number::Int(n));
        let ratio = |r: Option<f64>| r.map_or(Value::None, |r| Value::Number(Number::Ratio(r)));

        match field {
            Monster::NAME => Value::String(&self.name),
            Monster::PROPERTY => Value::Code(self.info.property.code()),
            Monster::ELEMENT => Value::String(self.info.property.label()),
            Monster::RACE => Value::Code(self.info.race.code()),
            Monster::RACE_LABEL => Value::String(self.info.race.label()),
            Monster::SIZE => Value::Code(self.info.size.code()),
            Monster::CLASS => Value::Code(self.info.class.code()),
            Monster::BOSS => Value::Bool(self.is_boss()),
            Monster::LEVEL => int(self.stats.level),
            Monster::HP => int(self.stats.hp),
            Monster::SP => int(self.stats.sp),
            Monster::STR => int(self.stats.str),
            Monster::INT => int(self.stats.int),
            Monster::VIT => int(self.stats.vit),
            Monster::DEX => int(self.stats.dex),
            Monster::AGI => int(self.stats.agi),
            Monster::LUK => int(self.stats.luk),
            Monster::ATTACK_RANGE => int(self.stats.attack_range),
            Monster::DEF => int(self.stats.def),
            Monster::MDEF => int(self.info.mdef),
            Monster::BASE_EXP => int(self.stats.exp.base),
            Monster::JOB_EXP => int(self.stats.exp.job),
            Monster::MOVE_SPEED => int(self.info.move_speed.millis()),
            Monster::MAX_HIT => int(self.max_hit()),
            Monster::MAX_DODGE => int(self.max_dodge()),
            Monster::BASE_EXP_PER_HP => ratio(self.base_exp_per_hp()),
            Monster::JOB_EXP_PER_HP => ratio(self.job_exp_per_hp()),
            _ => Value::None,
        }
    }
}

/// Decodes a feed document holding an array of monsters.
pub fn monsters_from_json(document: &str) -> Result<Vec<Monster>> {
    let monsters: Vec<Monster> = serde_json::from_str(document)?;
    tracing::debug!(count = monsters.len(), "decoded monsters");
    Ok(monsters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_stats(level: i64, agi: i64, dex: i64) -> Monster {
        Monster {
            stats: Stats {
                level,
                agi,
                dex,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn max_hit_formula() {
        assert_eq!(with_stats(58, 62, 85).max_hit(), 140);
        assert_eq!(with_stats(1, 0, 0).max_hit(), 21);
    }

    #[test]
    fn max_dodge_formula() {
        assert_eq!(with_stats(58, 62, 85).max_dodge(), 218);
        assert_eq!(with_stats(1, 0, 0).max_dodge(), 76);
    }

    #[test]
    fn thresholds_saturate() {
        let top = with_stats(i64::MAX, 1, 1);
        assert_eq!(top.max_hit(), i64::MAX);
        assert_eq!(top.max_dodge(), i64::MAX);

        let bottom = with_stats(i64::MIN, -1, -1);
        assert_eq!(bottom.max_hit(), i64::MIN + 19);
        assert_eq!(bottom.max_dodge(), i64::MIN + 74);
    }

    #[test]
    fn stats_beyond_i32_decode() {
        let m = Monster::from_json(r#"{"Name":"Big","HP":3000000000,"LV":2147483648}"#).unwrap();
        assert_eq!(m.stats.hp, 3_000_000_000);
        assert_eq!(m.max_hit(), 2_147_483_668);
    }

    #[test]
    fn exp_per_hp() {
        let mut m = Monster::default();
        m.stats.hp = 200;
        m.stats.exp = Experience { base: 50, job: 30 };

        assert_eq!(m.base_exp_per_hp(), Some(0.25));
        assert_eq!(m.job_exp_per_hp(), Some(0.15));

        m.stats.hp = 0;
        assert_eq!(m.base_exp_per_hp(), None);
        assert_eq!(m.job_exp_per_hp(), None);
    }

    #[test]
    fn drop_slots() {
        let mut items = Items::default();
        items.item1 = vec!["Jellopy".into(), "jellopy".into(), "909".into()];
        items.percent1 = 7000;

        let slots = items.slots();
        assert_eq!(slots[0].name(), Some("Jellopy"));
        assert_eq!(slots[0].percent, 7000);
        assert_eq!(slots[7].name(), None);
    }

    #[test]
    fn field_values() {
        let mut m = with_stats(58, 62, 85);
        m.name = "Alarm".into();
        m.info.property = Property::Neutral3;
        m.info.race = Race::Formless;

        assert_eq!(m.field_value(Monster::NAME), Value::String("Alarm"));
        assert_eq!(m.field_value(Monster::PROPERTY), Value::Code(60));
        assert_eq!(m.field_value(Monster::ELEMENT), Value::String("Neutral 3"));
        assert_eq!(m.field_value(Monster::RACE_LABEL), Value::String("Formless"));
        assert_eq!(m.field_value(Monster::MAX_HIT), Value::Number(Number::Int(140)));
        assert_eq!(m.field_value(Monster::BOSS), Value::Bool(false));
        assert_eq!(m.field_value("atk"), Value::None);
    }

    #[test]
    fn per_hp_field_is_none_without_hp() {
        let mut m = Monster::default();
        m.stats.exp.base = 10;
        assert_eq!(m.field_value(Monster::BASE_EXP_PER_HP), Value::None);

        m.stats.hp = 40;
        assert_eq!(
            m.field_value(Monster::BASE_EXP_PER_HP),
            Value::Number(Number::Ratio(0.25))
        );
    }

    #[test]
    fn boss_flag() {
        let mut m = Monster::default();
        assert!(!m.is_boss());
        m.info.class = Classification::Boss;
        assert!(m.is_boss());
    }
}
