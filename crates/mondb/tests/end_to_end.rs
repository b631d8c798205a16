//! End-to-end tests over a small decoded monster feed.

use std::borrow::Cow;

use mondb::{
    by_element, by_level, by_max_dodge_rate, by_max_hit_rate, by_name, by_race, filter,
    monsters_from_json, sort, sort_by_keys, Dir, Monster, OrderKey, Property, Query, Race, Size,
    SortKey,
};

const ALARM: &str = r#"{"Name":"Alarm","item1":["Needle of Alarm","needle of alarm","1095"],"percent1":5335,"item2":["Clip","clip","2607"],"percent2":1,"item3":["Skull","skull","7005"],"percent3":1500,"item4":["Magnifier","magnifier","611"],"percent4":1300,"item5":["Oridecon","oridecon","984"],"percent5":105,"item6":["Key of Clock Tower","key of clock tower","7026"],"percent6":20,"item7":["Zargon","zargon","912"],"percent7":1500,"item8":["Alarm Card","alarm card","4244"],"percent8":1,"aRan":1,"LV":58,"HP":10647,"SP":0,"str":1,"int":10,"vit":72,"dex":85,"agi":62,"luk":45,"atk1":480,"atk2":120,"def":15,"exp":3987,"jexp":2300,"inc":58,"as":10,"es":12,"Mspeed":300,"rechargeTime":1020,"attackedMT":768,"attackMT":500,"property":60,"scale":1,"class":0,"race":0,"mdef":15,"tamingitem":"0","fooditem":"0","db_name":["ALARM","ALARM"]}"#;

const FEED: &str = r#"[
    {"Name": "Alarm",         "LV": 58, "HP": 10647, "property": 60, "race": 0, "scale": 1},
    {"Name": "Cornutus",      "LV": 23, "HP": 841,   "property": 21, "race": 5, "scale": 0},
    {"Name": "Deniro",        "LV": 19, "HP": 760,   "property": 22, "race": 4, "scale": 0},
    {"Name": "Picky",         "LV": 3,  "HP": 80,    "property": 23, "race": 2, "scale": 0},
    {"Name": "Rotar Zairo",   "LV": 48, "HP": 4121,  "property": 44, "race": 0, "scale": 2},
    {"Name": "Thief Bug Egg", "LV": 20, "HP": 1523,  "property": 27, "race": 4, "scale": 0},
    {"Name": "Zealotus",      "LV": 63, "HP": 61350, "property": 60, "race": 7, "scale": 1}
]"#;

fn feed() -> Vec<Monster> {
    monsters_from_json(FEED).expect("feed decodes")
}

fn names(monsters: &[Monster]) -> Vec<&str> {
    monsters.iter().map(|m| m.name.as_str()).collect()
}

fn sorted(less: fn(&Monster, &Monster) -> bool, dir: Dir) -> Vec<String> {
    let mut monsters = feed();
    sort(&mut monsters, less, dir);
    monsters.into_iter().map(|m| m.name).collect()
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn alarm_decodes() {
    let alarm = Monster::from_json(ALARM).unwrap();

    assert_eq!(alarm.name, "Alarm");
    assert_eq!(alarm.stats.level, 58);
    assert_eq!(alarm.stats.hp, 10647);
    assert_eq!(alarm.stats.exp.base, 3987);
    assert_eq!(alarm.stats.exp.job, 2300);
    assert_eq!(alarm.info.property, Property::Neutral3);
    assert_eq!(alarm.info.property.label(), "Neutral 3");
    assert_eq!(alarm.info.race, Race::Formless);
    assert_eq!(alarm.info.size, Size::Medium);
    assert!(!alarm.is_boss());
    assert_eq!(alarm.info.move_speed.millis(), 300);
    assert_eq!(alarm.db_name, ["ALARM", "ALARM"]);

    let card = alarm.items.slots()[7];
    assert_eq!(card.name(), Some("Alarm Card"));
    assert_eq!(card.percent, 1);
}

#[test]
fn alarm_round_trips() {
    let alarm = Monster::from_json(ALARM).unwrap();
    let encoded = alarm.to_json().unwrap();

    let original: serde_json::Value = serde_json::from_str(ALARM).unwrap();
    let reencoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(original, reencoded);
}

#[test]
fn malformed_feed_is_a_decode_error() {
    let err = monsters_from_json(r#"[{"Name": 5}]"#).unwrap_err();
    assert!(matches!(err, mondb::Error::Decode(_)));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filter_exact_property() {
    let monsters = feed();
    let out = filter(&monsters, Some(&|m: &Monster| m.info.property == Property::Neutral3));
    assert_eq!(names(&out), ["Alarm", "Zealotus"]);
}

#[test]
fn filter_name_substring() {
    let monsters = feed();
    let out = filter(&monsters, Some(&|m: &Monster| m.name.contains("iro")));
    assert_eq!(names(&out), ["Deniro", "Rotar Zairo"]);
}

#[test]
fn filter_property_set() {
    let wanted = [
        Property::Water1,
        Property::Fire1,
        Property::Earth1,
        Property::Shadow1,
    ];
    let monsters = feed();
    let out = filter(&monsters, Some(&|m: &Monster| wanted.contains(&m.info.property)));
    assert_eq!(names(&out), ["Cornutus", "Deniro", "Picky", "Thief Bug Egg"]);
}

#[test]
fn filter_race_and_size() {
    let monsters = feed();

    let formless = filter(&monsters, Some(&|m: &Monster| m.info.race == Race::Formless));
    assert_eq!(names(&formless), ["Alarm", "Rotar Zairo"]);

    let brute_or_demi = filter(
        &monsters,
        Some(&|m: &Monster| matches!(m.info.race, Race::Brute | Race::DemiHuman)),
    );
    assert_eq!(names(&brute_or_demi), ["Picky", "Zealotus"]);

    let large = filter(&monsters, Some(&|m: &Monster| m.info.size == Size::Large));
    assert_eq!(names(&large), ["Rotar Zairo"]);
}

#[test]
fn filter_without_predicate_is_identity() {
    let monsters = feed();
    let out = filter(&monsters, None);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(*out, monsters[..]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sort_by_element() {
    assert_eq!(
        sorted(by_element, Dir::Asc),
        ["Deniro", "Picky", "Alarm", "Zealotus", "Thief Bug Egg", "Cornutus", "Rotar Zairo"]
    );
    assert_eq!(
        sorted(by_element, Dir::Desc),
        ["Rotar Zairo", "Cornutus", "Thief Bug Egg", "Alarm", "Zealotus", "Picky", "Deniro"]
    );
}

#[test]
fn sort_by_race() {
    assert_eq!(
        sorted(by_race, Dir::Asc),
        ["Picky", "Zealotus", "Cornutus", "Alarm", "Rotar Zairo", "Deniro", "Thief Bug Egg"]
    );
    assert_eq!(
        sorted(by_race, Dir::Desc),
        ["Deniro", "Thief Bug Egg", "Alarm", "Rotar Zairo", "Cornutus", "Zealotus", "Picky"]
    );
}

#[test]
fn sort_by_name_descending() {
    assert_eq!(
        sorted(by_name, Dir::Desc),
        ["Zealotus", "Thief Bug Egg", "Rotar Zairo", "Picky", "Deniro", "Cornutus", "Alarm"]
    );
}

#[test]
fn sort_by_level() {
    assert_eq!(
        sorted(by_level, Dir::Asc),
        ["Picky", "Deniro", "Thief Bug Egg", "Cornutus", "Rotar Zairo", "Alarm", "Zealotus"]
    );
}

#[test]
fn sort_by_thresholds_with_extreme_stats() {
    let doc = r#"[
        {"Name": "Top",    "LV": 9223372036854775807, "agi": 1, "dex": 1},
        {"Name": "Low",    "LV": 1},
        {"Name": "Wide",   "LV": 2147483647, "agi": 2147483647, "dex": 2147483647},
        {"Name": "Bottom", "LV": -9223372036854775808, "agi": -1, "dex": -1}
    ]"#;

    for less in [by_max_hit_rate, by_max_dodge_rate] {
        let mut monsters = monsters_from_json(doc).unwrap();
        sort(&mut monsters, less, Dir::Asc);
        assert_eq!(names(&monsters), ["Bottom", "Low", "Wide", "Top"]);

        sort(&mut monsters, less, Dir::Desc);
        assert_eq!(names(&monsters), ["Top", "Wide", "Low", "Bottom"]);
    }
}

#[test]
fn sort_chained_keys_from_config() {
    let keys: Vec<_> = OrderKey::parse_list("race:asc, level:desc")
        .unwrap()
        .into_iter()
        .map(OrderKey::order_by)
        .collect();

    let mut monsters = feed();
    sort_by_keys(&mut monsters, &keys);
    assert_eq!(
        names(&monsters),
        ["Picky", "Zealotus", "Cornutus", "Alarm", "Rotar Zairo", "Thief Bug Egg", "Deniro"]
    );
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn query_matches_filter_expectations() {
    let monsters = feed();

    let neutral = Query::<Monster>::new().and_eq(Monster::PROPERTY, Property::Neutral3);
    assert_eq!(names(&neutral.run(&monsters)), ["Alarm", "Zealotus"]);

    let iro = Query::<Monster>::new().and_contains(Monster::NAME, "iro");
    assert_eq!(names(&iro.run(&monsters)), ["Deniro", "Rotar Zairo"]);

    let set = Query::<Monster>::new().and_in(
        Monster::PROPERTY,
        [
            Property::Water1,
            Property::Fire1,
            Property::Earth1,
            Property::Shadow1,
        ],
    );
    assert_eq!(
        names(&set.run(&monsters)),
        ["Cornutus", "Deniro", "Picky", "Thief Bug Egg"]
    );

    let either = Query::<Monster>::new()
        .or_eq(Monster::RACE, Race::Brute)
        .or_eq(Monster::RACE, Race::DemiHuman);
    assert_eq!(names(&either.run(&monsters)), ["Picky", "Zealotus"]);
}

#[test]
fn query_filters_then_sorts() {
    let monsters = feed();
    let query = Query::<Monster>::new()
        .and_gte(Monster::LEVEL, 20)
        .not_eq(Monster::SIZE, Size::Large)
        .order_key(SortKey::Element, Dir::Asc)
        .order_key(SortKey::Level, Dir::Desc);

    let out = query.run(&monsters);
    assert_eq!(
        names(&out),
        ["Zealotus", "Alarm", "Thief Bug Egg", "Cornutus"]
    );
}

#[test]
fn query_on_element_label() {
    let monsters = feed();
    let query = Query::<Monster>::new()
        .and_regex(Monster::ELEMENT, r"^(Water|Wind) \d$")
        .unwrap()
        .order_desc(by_name);
    assert_eq!(names(&query.run(&monsters)), ["Rotar Zairo", "Cornutus"]);
}

#[test]
fn query_emits_trace_events() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let monsters = feed();
    let out = Query::<Monster>::new()
        .and_eq(Monster::RACE, Race::Insect)
        .order_key(SortKey::Hp, Dir::Asc)
        .run(&monsters);
    assert_eq!(names(&out), ["Deniro", "Thief Bug Egg"]);
}
