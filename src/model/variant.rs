//! Raw variant tables.
//!
//! Keys are persisted with every stored game: they are case-sensitive,
//! lowercase and must never change once published. New variants are appended;
//! the order of `VARIANTS` is the order menus render in.

/// Suffix marking the randomized-start form of a variant
pub const SUFFIX_960: &str = "960";

/// Supported variants in canonical order.
pub const VARIANTS: &[&str] = &[
    "chess",
    "chess960",
    "crazyhouse",
    "crazyhouse960",
    "placement",
    "atomic",
    "atomic960",
    "makruk",
    "makpong",
    "cambodian",
    "sittuyin",
    "shogi",
    "minishogi",
    "kyotoshogi",
    "dobutsu",
    "gorogoro",
    "xiangqi",
    "manchu",
    "janggi",
    "minixiangqi",
    "capablanca",
    "capablanca960",
    "capahouse",
    "capahouse960",
    "seirawan",
    "seirawan960",
    "shouse",
    "grand",
    "grandhouse",
    "shako",
    "shogun",
    "orda",
    "synochess",
    "hoppelpoppel",
    "shinobi",
];

/// Variants that can be imported, stored and analysed, but are not offered
/// for play or listed on leaderboards.
pub const IMPORT_ONLY_VARIANTS: &[&str] = &["gothic", "gothhouse", "embassy"];

/// Large-board variants sharing the xiangqi/grand lineage
pub const GRANDS: &[&str] = &["xiangqi", "manchu", "grand", "grandhouse", "shako", "janggi"];

pub(crate) const VARIANT_ICONS: &[(&str, &str)] = &[
    ("makruk", "Q"),
    ("makpong", "O"),
    ("sittuyin", ":"),
    ("shogi", "K"),
    ("janggi", "="),
    ("xiangqi", "|"),
    ("chess", "M"),
    ("crazyhouse", "+"),
    ("placement", "S"),
    ("capablanca", "P"),
    ("capahouse", "&"),
    ("seirawan", "L"),
    ("seirawan960", "}"),
    ("shouse", "$"),
    ("grand", "("),
    ("grandhouse", "*"),
    ("gothic", "P"),
    ("gothhouse", "&"),
    ("embassy", "P"),
    ("minishogi", "6"),
    ("dobutsu", "8"),
    ("gorogoro", "\u{1F431}"),
    ("cambodian", "!"),
    ("shako", "9"),
    ("minixiangqi", "7"),
    ("chess960", "V"),
    ("capablanca960", ","),
    ("capahouse960", "'"),
    ("crazyhouse960", "%"),
    ("kyotoshogi", ")"),
    ("shogun", "-"),
    ("orda", "R"),
    ("synochess", "_"),
    ("hoppelpoppel", "`"),
    ("manchu", "{"),
    ("atomic", "~"),
    ("atomic960", "\\"),
    ("shinobi", "\u{1F422}"),
];

/// Names that don't come out right by uppercasing the key
pub(crate) const DISPLAY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("seirawan", "S-CHESS"),
    ("seirawan960", "S-CHESS960"),
    ("shouse", "S-HOUSE"),
    ("cambodian", "OUK CHATRANG"),
];

/// PGN `Variant` tag value for the 960 form of a base variant.
///
/// Values are complete export names. `crazyhouse` and `atomic` stay plain
/// because lichess imports them that way. The `shogi` through `grand` rows
/// cover early games that were stored with a 960 flag by mistake.
pub(crate) const VARIANT_960_TO_PGN: &[(&str, &str)] = &[
    ("chess", "Chess960"),
    ("capablanca", "Caparandom"),
    ("capahouse", "Capahouse960"),
    ("crazyhouse", "Crazyhouse"),
    ("atomic", "Atomic"),
    ("seirawan", "Seirawan960"),
    ("shogi", "Shogi"),
    ("sittuyin", "Sittuyin"),
    ("makruk", "Makruk"),
    ("placement", "Placement"),
    ("grand", "Grand"),
];

/// Whether the key names the randomized-start form of a variant
pub fn is_960(key: &str) -> bool {
    key.len() > SUFFIX_960.len() && key.ends_with(SUFFIX_960)
}

/// Strip the 960 suffix, if any
pub fn base_variant(key: &str) -> &str {
    if is_960(key) {
        &key[..key.len() - SUFFIX_960.len()]
    } else {
        key
    }
}

/// Compose the stored key from a base variant and its 960 flag
pub fn variant_key(base: &str, chess960: bool) -> String {
    if chess960 {
        format!("{}{}", base, SUFFIX_960)
    } else {
        base.to_string()
    }
}
