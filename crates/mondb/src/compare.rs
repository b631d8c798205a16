//! Comparator catalog for monsters.
//!
//! Every function here is a [`CompareFn<Monster>`]: it returns `true` when
//! the first monster sorts strictly before the second in ascending order.
//! [`SortKey`] names each one so sort criteria can come from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::monster::Monster;
use crate::sort::{CompareFn, Dir, OrderBy};

/// Compares monsters by name.
pub fn by_name(m1: &Monster, m2: &Monster) -> bool {
    m1.name < m2.name
}

/// Compares monsters by property label, not by code.
///
/// Codes sharing a label (`NeutralSpecial` and `Neutral1`) compare equal.
pub fn by_element(m1: &Monster, m2: &Monster) -> bool {
    m1.info.property.label() < m2.info.property.label()
}

/// Compares monsters by race label.
pub fn by_race(m1: &Monster, m2: &Monster) -> bool {
    m1.info.race.label() < m2.info.race.label()
}

/// Compares monsters by size code: Small, Medium, Large.
pub fn by_size(m1: &Monster, m2: &Monster) -> bool {
    m1.info.size.code() < m2.info.size.code()
}

/// Compares monsters by base experience.
pub fn by_base_exp(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.exp.base < m2.stats.exp.base
}

/// Compares monsters by base experience per health point.
///
/// Falls back to raw base experience if either monster has zero HP.
pub fn by_base_exp_per_hp(m1: &Monster, m2: &Monster) -> bool {
    match (m1.base_exp_per_hp(), m2.base_exp_per_hp()) {
        (Some(r1), Some(r2)) => r1 < r2,
        _ => by_base_exp(m1, m2),
    }
}

/// Compares monsters by job experience.
pub fn by_job_exp(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.exp.job < m2.stats.exp.job
}

/// Compares monsters by job experience per health point.
///
/// Falls back to raw job experience if either monster has zero HP.
pub fn by_job_exp_per_hp(m1: &Monster, m2: &Monster) -> bool {
    match (m1.job_exp_per_hp(), m2.job_exp_per_hp()) {
        (Some(r1), Some(r2)) => r1 < r2,
        _ => by_job_exp(m1, m2),
    }
}

/// Compares monsters by HP.
pub fn by_hp(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.hp < m2.stats.hp
}

/// Compares monsters by level.
pub fn by_level(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.level < m2.stats.level
}

/// Compares monsters by attack range.
pub fn by_attack_range(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.attack_range < m2.stats.attack_range
}

/// Compares monsters by the HIT needed to always hit them.
pub fn by_max_hit_rate(m1: &Monster, m2: &Monster) -> bool {
    m1.max_hit() < m2.max_hit()
}

/// Compares monsters by the FLEE needed to dodge 95% of their attacks.
pub fn by_max_dodge_rate(m1: &Monster, m2: &Monster) -> bool {
    m1.max_dodge() < m2.max_dodge()
}

/// Compares monsters by DEF.
pub fn by_defense(m1: &Monster, m2: &Monster) -> bool {
    m1.stats.def < m2.stats.def
}

/// Compares monsters by MDEF.
pub fn by_magic_defense(m1: &Monster, m2: &Monster) -> bool {
    m1.info.mdef < m2.info.mdef
}

/// Named sort criterion from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Element,
    Race,
    Size,
    BaseExp,
    BaseExpPerHp,
    JobExp,
    JobExpPerHp,
    Hp,
    Level,
    AttackRange,
    MaxHitRate,
    MaxDodgeRate,
    Defense,
    MagicDefense,
}

impl SortKey {
    /// Every key, in catalog order.
    pub const ALL: [SortKey; 15] = [
        SortKey::Name,
        SortKey::Element,
        SortKey::Race,
        SortKey::Size,
        SortKey::BaseExp,
        SortKey::BaseExpPerHp,
        SortKey::JobExp,
        SortKey::JobExpPerHp,
        SortKey::Hp,
        SortKey::Level,
        SortKey::AttackRange,
        SortKey::MaxHitRate,
        SortKey::MaxDodgeRate,
        SortKey::Defense,
        SortKey::MagicDefense,
    ];

    /// Returns the comparator for this key.
    pub fn compare_fn(self) -> CompareFn<Monster> {
        match self {
            SortKey::Name => by_name,
            SortKey::Element => by_element,
            SortKey::Race => by_race,
            SortKey::Size => by_size,
            SortKey::BaseExp => by_base_exp,
            SortKey::BaseExpPerHp => by_base_exp_per_hp,
            SortKey::JobExp => by_job_exp,
            SortKey::JobExpPerHp => by_job_exp_per_hp,
            SortKey::Hp => by_hp,
            SortKey::Level => by_level,
            SortKey::AttackRange => by_attack_range,
            SortKey::MaxHitRate => by_max_hit_rate,
            SortKey::MaxDodgeRate => by_max_dodge_rate,
            SortKey::Defense => by_defense,
            SortKey::MagicDefense => by_magic_defense,
        }
    }

    /// Returns the configuration name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Element => "element",
            SortKey::Race => "race",
            SortKey::Size => "size",
            SortKey::BaseExp => "base_exp",
            SortKey::BaseExpPerHp => "base_exp_per_hp",
            SortKey::JobExp => "job_exp",
            SortKey::JobExpPerHp => "job_exp_per_hp",
            SortKey::Hp => "hp",
            SortKey::Level => "level",
            SortKey::AttackRange => "attack_range",
            SortKey::MaxHitRate => "max_hit_rate",
            SortKey::MaxDodgeRate => "max_dodge_rate",
            SortKey::Defense => "defense",
            SortKey::MagicDefense => "magic_defense",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

/// A sort key with a direction, written `key` or `key:dir` in configuration.
///
/// ```
/// use mondb::{Dir, OrderKey, SortKey};
///
/// let key: OrderKey = "base_exp_per_hp:desc".parse().unwrap();
/// assert_eq!(key, OrderKey::new(SortKey::BaseExpPerHp, Dir::Desc));
/// assert_eq!("level".parse::<OrderKey>().unwrap().dir, Dir::Asc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderKey {
    pub key: SortKey,
    pub dir: Dir,
}

impl OrderKey {
    /// Creates a new order key.
    pub fn new(key: SortKey, dir: Dir) -> Self {
        OrderKey { key, dir }
    }

    /// Parses a comma-separated list such as `"size, name:desc"`.
    pub fn parse_list(s: &str) -> Result<Vec<OrderKey>, Error> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<OrderKey>)
            .collect()
    }

    /// Resolves this key to its comparator.
    pub fn order_by(self) -> OrderBy<Monster> {
        OrderBy::new(self.key.compare_fn(), self.dir)
    }
}

impl From<SortKey> for OrderKey {
    fn from(key: SortKey) -> Self {
        OrderKey::new(key, Dir::Asc)
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.dir)
    }
}

impl FromStr for OrderKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((key, dir)) => Ok(OrderKey::new(key.parse()?, dir.parse()?)),
            None => Ok(OrderKey::new(s.parse()?, Dir::Asc)),
        }
    }
}

impl TryFrom<String> for OrderKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> Self {
        key.to_string()
    }
}
