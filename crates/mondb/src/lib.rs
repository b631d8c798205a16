//! mondb - Monster records with stable filtering and sorting.
//!
//! mondb decodes Ragnarok Online monster records from their JSON feed and
//! provides two small engines over in-memory collections of them:
//!
//! - [`filter`]: keep the records matching a predicate, in original order
//! - [`sort`]: stable in-place sort by a "less than" comparator, ascending
//!   or descending, with ties keeping their prior relative order
//!
//! On top of those sits a comparator catalog ([`by_name`], [`by_level`],
//! [`by_base_exp_per_hp`], ...) and a fluent [`Query`] builder that combines
//! field clauses with chained sort keys.
//!
//! # Quick Start
//!
//! ```rust
//! use mondb::{by_level, by_name, filter, sort, Dir, Monster, Race};
//!
//! let doc = r#"[
//!     {"Name": "Picky", "LV": 3, "race": 2},
//!     {"Name": "Alarm", "LV": 58, "race": 0},
//!     {"Name": "Zealotus", "LV": 63, "race": 7},
//!     {"Name": "Rotar Zairo", "LV": 48, "race": 0}
//! ]"#;
//! let monsters = mondb::monsters_from_json(doc)?;
//!
//! let formless = filter(&monsters, Some(&|m: &Monster| m.info.race == Race::Formless));
//! let names: Vec<_> = formless.iter().map(|m| m.name.as_str()).collect();
//! assert_eq!(names, ["Alarm", "Rotar Zairo"]);
//!
//! let mut by_lv = monsters.clone();
//! sort(&mut by_lv, by_level, Dir::Desc);
//! assert_eq!(by_lv[0].name, "Zealotus");
//!
//! let mut alpha = monsters;
//! sort(&mut alpha, by_name, Dir::Asc);
//! assert_eq!(alpha[0].name, "Alarm");
//! # Ok::<(), mondb::Error>(())
//! ```
//!
//! # Query Semantics
//!
//! Queries combine three clause groups with fixed logic:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! Matches are then sorted by the query's keys in priority order. A query
//! with neither clauses nor keys returns its input untouched.
//!
//! # Field Types and Operators
//!
//! | Type | Operators |
//! |------|-----------|
//! | String | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `Regex` |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Code | `Eq`, `Ne`, `In` |
//! | Bool | `Eq`, `Ne`, `Is` |

mod clause;
mod codes;
mod compare;
mod error;
mod filter;
mod monster;
mod op;
mod query;
mod sort;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use codes::{Classification, MoveSpeed, Property, Race, Size};
pub use compare::{
    by_attack_range, by_base_exp, by_base_exp_per_hp, by_defense, by_element, by_hp, by_job_exp,
    by_job_exp_per_hp, by_level, by_magic_defense, by_max_dodge_rate, by_max_hit_rate, by_name,
    by_race, by_size, OrderKey, SortKey,
};
pub use error::{Error, Result};
pub use filter::filter;
pub use monster::{
    monsters_from_json, DropSlot, Experience, Info, Items, Monster, PetInfo, Stats,
};
pub use op::Op;
pub use query::Query;
pub use sort::{compare_by_keys, ordering_of, sort, sort_by_keys, CompareFn, Dir, OrderBy};
pub use traits::Queryable;
pub use value::{Number, Value};
