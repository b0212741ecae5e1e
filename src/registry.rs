//! The variant and status registry.
//!
//! Built once from the compiled-in tables, checked for cross-table
//! consistency, then only read. A `Registry` that exists has passed
//! validation, so lookups on supported keys cannot hit missing data.

use crate::error::{RegistryError, Result};
use crate::model::game::LOSERS;
use crate::model::tournament;
use crate::model::variant::{
    self, DISPLAY_NAME_OVERRIDES, GRANDS, IMPORT_ONLY_VARIANTS, VARIANTS, VARIANT_960_TO_PGN,
    VARIANT_ICONS,
};
use crate::model::GameStatus;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    // Persisted keys: lowercase ASCII letters, then letters or digits
    static ref VARIANT_KEY: Regex = Regex::new(r"^[a-z][a-z0-9]*$").unwrap();
}

/// The raw tables a registry is assembled from
#[derive(Debug, Clone, Copy)]
pub struct RegistryTables {
    pub variants: &'static [&'static str],
    pub import_only: &'static [&'static str],
    pub grands: &'static [&'static str],
    pub icons: &'static [(&'static str, &'static str)],
    pub display_overrides: &'static [(&'static str, &'static str)],
    pub pgn_aliases: &'static [(&'static str, &'static str)],
    pub losers: &'static [(&'static str, GameStatus)],
}

impl Default for RegistryTables {
    fn default() -> Self {
        Self {
            variants: VARIANTS,
            import_only: IMPORT_ONLY_VARIANTS,
            grands: GRANDS,
            icons: VARIANT_ICONS,
            display_overrides: DISPLAY_NAME_OVERRIDES,
            pgn_aliases: VARIANT_960_TO_PGN,
            losers: LOSERS,
        }
    }
}

/// Everything the UI and export layers need to know about one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    pub key: &'static str,
    pub display_name: String,
    pub icon: &'static str,
    pub pgn_alias: String,
    pub grand: bool,
}

#[derive(Debug)]
pub struct Registry {
    variants: Vec<&'static str>,
    supported: HashSet<&'static str>,
    import_only: HashSet<&'static str>,
    grands: Vec<&'static str>,
    icons: HashMap<&'static str, &'static str>,
    display_overrides: HashMap<&'static str, &'static str>,
    pgn_aliases: HashMap<&'static str, &'static str>,
    losers: HashMap<&'static str, GameStatus>,
    raw: RegistryTables,
}

impl Registry {
    /// Build and validate the registry from the built-in tables
    pub fn new() -> Result<Self> {
        Self::from_tables(RegistryTables::default())
    }

    /// Build a registry from the given tables, failing if they are
    /// inconsistent with each other.
    pub fn from_tables(tables: RegistryTables) -> Result<Self> {
        let registry = Self::assemble(tables);
        registry.validate()?;
        log::debug!(
            "Registry ready: {} variants ({} import-only), {} grand-family",
            registry.variants.len(),
            registry.import_only.len(),
            registry.grands.len()
        );
        Ok(registry)
    }

    fn assemble(tables: RegistryTables) -> Self {
        Self {
            variants: tables.variants.to_vec(),
            supported: tables.variants.iter().copied().collect(),
            import_only: tables.import_only.iter().copied().collect(),
            grands: tables.grands.to_vec(),
            icons: tables.icons.iter().copied().collect(),
            display_overrides: tables.display_overrides.iter().copied().collect(),
            pgn_aliases: tables.pgn_aliases.iter().copied().collect(),
            losers: tables.losers.iter().copied().collect(),
            raw: tables,
        }
    }

    /// Check every cross-table invariant, reporting all violations at once.
    ///
    /// Runs on construction; safe to re-run at any time since nothing in the
    /// registry ever changes.
    ///
    /// Loss reasons need no status check here: the table holds `GameStatus`
    /// values, so every entry is a registered code by construction.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.supported.len() != self.variants.len() {
            problems.push("supported variant list contains duplicates".to_string());
        }
        if self.losers.len() != self.raw.losers.len() {
            problems.push("loss reason table contains duplicate tokens".to_string());
        }

        let keys = self.variants.iter().copied();
        for key in keys.chain(self.raw.import_only.iter().copied()) {
            if !VARIANT_KEY.is_match(key) {
                problems.push(format!("variant key '{}' is not lowercase alphanumeric", key));
            }
            if !self.icons.contains_key(key) {
                problems.push(format!("variant '{}' has no icon", key));
            }
        }

        for &key in &self.variants {
            if variant::is_960(key) && !self.supported.contains(variant::base_variant(key)) {
                problems.push(format!(
                    "variant '{}' has no supported base variant '{}'",
                    key,
                    variant::base_variant(key)
                ));
            }
        }

        for &key in &self.grands {
            if !self.supported.contains(key) {
                problems.push(format!("grand-family member '{}' is not supported", key));
            }
        }

        for &key in self.display_overrides.keys() {
            if !self.supported.contains(key) {
                problems.push(format!("display name override for unknown variant '{}'", key));
            }
        }

        if problems.is_empty() {
            return Ok(());
        }

        for problem in &problems {
            log::error!("Registry integrity: {}", problem);
        }
        problems.sort();
        Err(RegistryError::Integrity(problems))
    }

    /// Supported variant keys in canonical (menu) order
    pub fn variants(&self) -> &[&'static str] {
        &self.variants
    }

    /// Grand-family variants
    pub fn grands(&self) -> &[&'static str] {
        &self.grands
    }

    pub fn is_supported(&self, key: &str) -> bool {
        self.supported.contains(key)
    }

    /// Supported for play, or accepted only through game import
    pub fn is_importable(&self, key: &str) -> bool {
        self.supported.contains(key) || self.import_only.contains(key)
    }

    pub fn is_grand(&self, key: &str) -> bool {
        self.grands.iter().any(|&g| g == key)
    }

    fn check_supported(&self, key: &str) -> Result<()> {
        if self.is_supported(key) {
            Ok(())
        } else {
            Err(RegistryError::UnknownVariant(key.to_string()))
        }
    }

    /// Human-readable name: the uppercased key unless an override exists
    pub fn display_name(&self, key: &str) -> Result<String> {
        self.check_supported(key)?;
        Ok(match self.display_overrides.get(key) {
            Some(name) => name.to_string(),
            None => key.to_uppercase(),
        })
    }

    /// Icon-font glyph for compact rendering
    pub fn icon(&self, key: &str) -> Result<&'static str> {
        self.check_supported(key)?;
        self.icons
            .get(key)
            .copied()
            .ok_or_else(|| RegistryError::MissingIcon(key.to_string()))
    }

    /// Name to put in the PGN `Variant` tag.
    ///
    /// Only 960 keys are ever aliased; a 960 key whose base has no alias,
    /// and every non-960 key, exports as itself. Accepts any key so that
    /// legacy stored games can still be exported.
    pub fn pgn_alias(&self, key: &str) -> String {
        if variant::is_960(key) {
            if let Some(alias) = self.pgn_aliases.get(variant::base_variant(key)) {
                return alias.to_string();
            }
        }
        key.to_string()
    }

    pub fn pairing_system_name(&self, code: i32) -> &'static str {
        tournament::pairing_system_name(code)
    }

    /// Status code for a loss reported by cause
    pub fn loss_reason_to_status(&self, token: &str) -> Result<GameStatus> {
        self.losers
            .get(token)
            .copied()
            .ok_or_else(|| RegistryError::UnknownLossReason(token.to_string()))
    }

    /// Loss reason tokens in table order
    pub fn loss_reasons(&self) -> impl Iterator<Item = (&'static str, GameStatus)> + '_ {
        self.raw.losers.iter().copied()
    }

    pub fn variant(&self, key: &str) -> Result<VariantInfo> {
        let key = self
            .variants
            .iter()
            .copied()
            .find(|&k| k == key)
            .ok_or_else(|| RegistryError::UnknownVariant(key.to_string()))?;

        Ok(VariantInfo {
            key,
            display_name: self.display_name(key)?,
            icon: self.icon(key)?,
            pgn_alias: self.pgn_alias(key),
            grand: self.is_grand(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new().unwrap()
    }

    fn integrity_problems(tables: RegistryTables) -> Vec<String> {
        match Registry::from_tables(tables) {
            Err(RegistryError::Integrity(problems)) => problems,
            other => panic!("expected integrity failure, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_tables_validate() {
        assert!(registry().validate().is_ok());
    }

    #[test]
    fn test_every_variant_renders() {
        let registry = registry();
        for &key in registry.variants() {
            assert!(registry.icon(key).is_ok(), "no icon for {}", key);
            assert!(registry.display_name(key).is_ok(), "no name for {}", key);
        }
    }

    #[test]
    fn test_960_variants_have_base() {
        let registry = registry();
        for &key in registry.variants().iter().filter(|k| variant::is_960(k)) {
            assert!(
                registry.is_supported(variant::base_variant(key)),
                "{} has no base",
                key
            );
        }
    }

    #[test]
    fn test_variant_order_is_canonical() {
        let registry = registry();
        assert_eq!(registry.variants()[0], "chess");
        assert_eq!(registry.variants()[1], "chess960");
        assert_eq!(registry.variants().last(), Some(&"shinobi"));
        assert_eq!(registry.variants().len(), 35);
    }

    #[test]
    fn test_display_names() {
        let registry = registry();
        assert_eq!(registry.display_name("seirawan").unwrap(), "S-CHESS");
        assert_eq!(registry.display_name("seirawan960").unwrap(), "S-CHESS960");
        assert_eq!(registry.display_name("shouse").unwrap(), "S-HOUSE");
        assert_eq!(registry.display_name("cambodian").unwrap(), "OUK CHATRANG");
        assert_eq!(registry.display_name("chess").unwrap(), "CHESS");
        assert_eq!(registry.display_name("capahouse960").unwrap(), "CAPAHOUSE960");
    }

    #[test]
    fn test_unknown_variant() {
        let registry = registry();
        assert!(matches!(
            registry.display_name("bughouse"),
            Err(RegistryError::UnknownVariant(ref k)) if k == "bughouse"
        ));
        assert!(matches!(
            registry.icon("Chess"),
            Err(RegistryError::UnknownVariant(_))
        ));
        // Import-only variants are not offered in menus
        assert!(registry.display_name("gothic").is_err());
        assert!(registry.is_importable("gothic"));
        assert!(!registry.is_importable("bughouse"));
    }

    #[test]
    fn test_icons() {
        let registry = registry();
        assert_eq!(registry.icon("chess").unwrap(), "M");
        assert_eq!(registry.icon("atomic960").unwrap(), "\\");
        assert_eq!(registry.icon("gorogoro").unwrap(), "\u{1F431}");
    }

    #[test]
    fn test_missing_icon_on_unvalidated_tables() {
        let tables = RegistryTables {
            variants: &["chess", "duck"],
            icons: &[("chess", "M")],
            ..RegistryTables::default()
        };
        let registry = Registry::assemble(tables);
        assert!(matches!(
            registry.icon("duck"),
            Err(RegistryError::MissingIcon(ref k)) if k == "duck"
        ));
    }

    #[test]
    fn test_pgn_alias() {
        let registry = registry();
        assert_eq!(registry.pgn_alias("seirawan960"), "Seirawan960");
        assert_eq!(registry.pgn_alias("chess960"), "Chess960");
        assert_eq!(registry.pgn_alias("capahouse960"), "Capahouse960");
        assert_eq!(registry.pgn_alias("capablanca960"), "Caparandom");
        assert_eq!(registry.pgn_alias("crazyhouse960"), "Crazyhouse");
        assert_eq!(registry.pgn_alias("chess"), "chess");
        assert_eq!(registry.pgn_alias("capahouse"), "capahouse");
        assert_eq!(registry.pgn_alias("seirawan"), "seirawan");
        assert_eq!(registry.pgn_alias("xiangqi"), "xiangqi");
    }

    #[test]
    fn test_pgn_alias_legacy_960_games() {
        let registry = registry();
        assert_eq!(registry.pgn_alias("shogi960"), "Shogi");
        assert_eq!(registry.pgn_alias("makruk960"), "Makruk");
        assert_eq!(registry.pgn_alias("janggi960"), "janggi960");
    }

    #[test]
    fn test_pairing_system_name() {
        let registry = registry();
        assert_eq!(registry.pairing_system_name(0), "Arena");
        assert_eq!(registry.pairing_system_name(1), "Round-Robin");
        assert_eq!(registry.pairing_system_name(2), "Swiss");
        assert_eq!(registry.pairing_system_name(99), "");
    }

    #[test]
    fn test_loss_reasons() {
        let registry = registry();
        assert_eq!(
            registry.loss_reason_to_status("resign").unwrap(),
            GameStatus::Resign
        );
        assert_eq!(
            registry.loss_reason_to_status("abort").unwrap(),
            GameStatus::Aborted
        );
        assert_eq!(
            registry.loss_reason_to_status("abandone").unwrap(),
            GameStatus::Abandone
        );
        assert_eq!(registry.loss_reason_to_status("flag").unwrap(), GameStatus::Flag);
        assert!(matches!(
            registry.loss_reason_to_status("timeout"),
            Err(RegistryError::UnknownLossReason(ref t)) if t == "timeout"
        ));
        assert_eq!(registry.loss_reasons().count(), 4);
    }

    #[test]
    fn test_grand_family() {
        let registry = registry();
        assert_eq!(
            registry.grands(),
            &["xiangqi", "manchu", "grand", "grandhouse", "shako", "janggi"]
        );
        assert!(registry.is_grand("janggi"));
        assert!(!registry.is_grand("chess"));
    }

    #[test]
    fn test_variant_info() {
        let info = registry().variant("seirawan960").unwrap();
        assert_eq!(
            info,
            VariantInfo {
                key: "seirawan960",
                display_name: "S-CHESS960".to_string(),
                icon: "}",
                pgn_alias: "Seirawan960".to_string(),
                grand: false,
            }
        );
        assert!(registry().variant("xiangqi").unwrap().grand);
        assert!(registry().variant("nope").is_err());
    }

    #[test]
    fn test_lookups_are_pure() {
        let registry = registry();
        for _ in 0..3 {
            for &key in registry.variants() {
                assert_eq!(
                    registry.display_name(key).unwrap(),
                    registry.display_name(key).unwrap()
                );
                assert_eq!(registry.icon(key).unwrap(), registry.icon(key).unwrap());
                assert_eq!(registry.pgn_alias(key), registry.pgn_alias(key));
            }
            let _ = registry.loss_reason_to_status("resign");
            let _ = registry.loss_reason_to_status("bogus");
        }
        assert!(registry.validate().is_ok());
        assert_eq!(registry.variants(), Registry::new().unwrap().variants());
    }

    #[test]
    fn test_missing_icon_fails_validation() {
        let problems = integrity_problems(RegistryTables {
            variants: &["chess", "duck"],
            import_only: &[],
            icons: &[("chess", "M")],
            grands: &[],
            display_overrides: &[],
            ..RegistryTables::default()
        });
        assert_eq!(problems, vec!["variant 'duck' has no icon".to_string()]);
    }

    #[test]
    fn test_orphan_960_fails_validation() {
        let problems = integrity_problems(RegistryTables {
            variants: &["chess", "duck960"],
            import_only: &[],
            icons: &[("chess", "M"), ("duck960", "D")],
            grands: &[],
            display_overrides: &[],
            ..RegistryTables::default()
        });
        assert_eq!(
            problems,
            vec!["variant 'duck960' has no supported base variant 'duck'".to_string()]
        );
    }

    #[test]
    fn test_bad_keys_fail_validation() {
        let problems = integrity_problems(RegistryTables {
            variants: &["Chess", "chess", "chess"],
            import_only: &[],
            icons: &[("Chess", "M"), ("chess", "M")],
            grands: &["xiangqi"],
            display_overrides: &[],
            ..RegistryTables::default()
        });
        assert!(problems
            .iter()
            .any(|p| p.contains("'Chess' is not lowercase")));
        assert!(problems.iter().any(|p| p.contains("duplicates")));
        assert!(problems
            .iter()
            .any(|p| p.contains("grand-family member 'xiangqi'")));
    }

    #[test]
    fn test_loss_reasons_map_to_registered_codes() {
        let registry = registry();
        for (token, status) in registry.loss_reasons() {
            assert!(GameStatus::all().contains(&status), "{} -> {:?}", token, status);
            assert_eq!(GameStatus::try_from(status.code()).unwrap(), status);
        }
        let custom = Registry::from_tables(RegistryTables {
            losers: &[("cheat", GameStatus::Cheat)],
            ..RegistryTables::default()
        })
        .unwrap();
        assert_eq!(
            custom.loss_reason_to_status("cheat").unwrap(),
            GameStatus::Cheat
        );
    }

    #[test]
    fn test_duplicate_loss_reason_fails_validation() {
        let problems = integrity_problems(RegistryTables {
            losers: &[("resign", GameStatus::Resign), ("resign", GameStatus::Flag)],
            ..RegistryTables::default()
        });
        assert_eq!(
            problems,
            vec!["loss reason table contains duplicate tokens".to_string()]
        );
    }
}
