//! Type matchup resolution

use crate::types::{MatchupPolicy, TypeChart, TypeRecord};
use crate::DexError;

fn attacker<'a>(chart: &'a TypeChart, attack_type: &str) -> Result<&'a TypeRecord, DexError> {
    chart
        .get(attack_type)
        .ok_or_else(|| DexError::UnknownType(attack_type.trim().to_string()))
}

/// Multiplier of `attack_type` against one defending type.
///
/// An unknown attacking type is an error; an unknown defending type is neutral.
pub fn multiplier(
    chart: &TypeChart,
    attack_type: &str,
    defend_type: &str,
) -> Result<f64, DexError> {
    Ok(attacker(chart, attack_type)?.multiplier(defend_type))
}

/// Product of multipliers against every defending type, with `policy` applied
pub fn total_multiplier<S: AsRef<str>>(
    chart: &TypeChart,
    attack_type: &str,
    defend_types: &[S],
    policy: MatchupPolicy,
) -> Result<f64, DexError> {
    Ok(attacker(chart, attack_type)?.total_multiplier(defend_types, policy))
}

/// `base_damage * total_multiplier`. Both must be finite and non-negative.
pub fn final_damage(base_damage: f64, total_multiplier: f64) -> Result<f64, DexError> {
    if !base_damage.is_finite() || base_damage < 0.0 {
        return Err(DexError::InvalidInput(format!(
            "base damage must be a finite non-negative number, got {}",
            base_damage
        )));
    }
    if !total_multiplier.is_finite() || total_multiplier < 0.0 {
        return Err(DexError::InvalidInput(format!(
            "multiplier must be a finite non-negative number, got {}",
            total_multiplier
        )));
    }
    Ok(base_damage * total_multiplier)
}

fn defensive_filter<S, F>(chart: &TypeChart, defend_types: &[S], keep: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(f64) -> bool,
{
    chart
        .records()
        .filter(|t| keep(t.total_multiplier(defend_types, MatchupPolicy::default())))
        .map(|t| t.name.clone())
        .collect()
}

/// Attacking types that hit the defender for more than 1x, sorted by name
pub fn weaknesses<S: AsRef<str>>(chart: &TypeChart, defend_types: &[S]) -> Vec<String> {
    defensive_filter(chart, defend_types, |eff| eff > 1.0)
}

/// Attacking types the defender resists (0 < effectiveness < 1), sorted by name
pub fn resistances<S: AsRef<str>>(chart: &TypeChart, defend_types: &[S]) -> Vec<String> {
    defensive_filter(chart, defend_types, |eff| eff > 0.0 && eff < 1.0)
}

/// Attacking types the defender is immune to, sorted by name
pub fn immunities<S: AsRef<str>>(chart: &TypeChart, defend_types: &[S]) -> Vec<String> {
    defensive_filter(chart, defend_types, |eff| eff == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BUILTIN_TYPE_NAMES;

    #[test]
    fn test_multiplier_values_are_in_relation_set() {
        let chart = TypeChart::builtin();
        for a in BUILTIN_TYPE_NAMES {
            for b in BUILTIN_TYPE_NAMES {
                let m = multiplier(&chart, a, b).unwrap();
                assert!([0.0, 0.5, 1.0, 2.0].contains(&m), "{} vs {} = {}", a, b, m);
            }
        }
    }

    #[test]
    fn test_multiplier_unknown_attacker() {
        let chart = TypeChart::builtin();
        assert_eq!(
            multiplier(&chart, "shadow", "fire"),
            Err(DexError::UnknownType("shadow".to_string()))
        );
        assert!(matches!(
            total_multiplier(&chart, "shadow", &["fire"], MatchupPolicy::default()),
            Err(DexError::UnknownType(_))
        ));
    }

    #[test]
    fn test_multiplier_unknown_defender_is_neutral() {
        let chart = TypeChart::builtin();
        assert_eq!(multiplier(&chart, "fire", "shadow").unwrap(), 1.0);
    }

    #[test]
    fn test_total_multiplier_empty_defenders() {
        let chart = TypeChart::builtin();
        let none: [&str; 0] = [];
        for a in BUILTIN_TYPE_NAMES {
            assert_eq!(total_multiplier(&chart, a, &none, MatchupPolicy::default()).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_total_multiplier_single_equals_multiplier() {
        let chart = TypeChart::builtin();
        for a in BUILTIN_TYPE_NAMES {
            for b in BUILTIN_TYPE_NAMES {
                assert_eq!(
                    total_multiplier(&chart, a, &[b], MatchupPolicy::default()).unwrap(),
                    multiplier(&chart, a, b).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_total_multiplier_dual_types() {
        let chart = TypeChart::builtin();
        let uncapped = MatchupPolicy::default();
        // Fire vs Grass/Steel = 4x
        assert_eq!(total_multiplier(&chart, "fire", &["grass", "steel"], uncapped).unwrap(), 4.0);
        // Fire vs Water/Rock = 0.25x
        assert_eq!(total_multiplier(&chart, "fire", &["water", "rock"], uncapped).unwrap(), 0.25);
        // Ground vs Flying/Steel = 0x
        assert_eq!(
            total_multiplier(&chart, "ground", &["flying", "steel"], uncapped).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_total_multiplier_capped_policy() {
        let chart = TypeChart::builtin();
        let capped = MatchupPolicy::capped();
        assert_eq!(
            total_multiplier(&chart, "electric", &["water", "flying"], capped).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_final_damage() {
        assert_eq!(final_damage(100.0, 2.0).unwrap(), 200.0);
        assert_eq!(final_damage(50.0, 0.5).unwrap(), 25.0);
        assert_eq!(final_damage(10.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_final_damage_rejects_invalid_base() {
        assert!(matches!(final_damage(-1.0, 2.0), Err(DexError::InvalidInput(_))));
        assert!(matches!(final_damage(f64::NAN, 1.0), Err(DexError::InvalidInput(_))));
        assert!(matches!(final_damage(f64::INFINITY, 1.0), Err(DexError::InvalidInput(_))));
    }

    #[test]
    fn test_weaknesses() {
        // Steel is weak to Fire, Fighting, Ground
        let chart = TypeChart::builtin();
        assert_eq!(weaknesses(&chart, &["steel"]), vec!["fighting", "fire", "ground"]);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground is only weak to Grass (4x)
        let chart = TypeChart::builtin();
        assert_eq!(weaknesses(&chart, &["water", "ground"]), vec!["grass"]);
    }

    #[test]
    fn test_resistances() {
        let chart = TypeChart::builtin();
        let resists = resistances(&chart, &["steel"]);
        assert!(resists.contains(&"normal".to_string()));
        assert!(resists.contains(&"ice".to_string()));
        assert!(resists.contains(&"fairy".to_string()));
        assert!(!resists.contains(&"fire".to_string()));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&"poison".to_string()));
    }

    #[test]
    fn test_immunities() {
        let chart = TypeChart::builtin();
        assert_eq!(immunities(&chart, &["ghost"]), vec!["fighting", "normal"]);
    }
}
