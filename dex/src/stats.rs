//! Level-scaled HP

use crate::DexError;

/// Levels are bucketed down to multiples of this step
pub const LEVEL_STEP: f64 = 5.0;

/// Fraction of base HP gained per bucketed level
pub const HP_GROWTH_PER_LEVEL: f64 = 0.10;

/// Round `level` down to the nearest multiple of [`LEVEL_STEP`]
pub fn closest_level(level: f64) -> f64 {
    (level / LEVEL_STEP).floor() * LEVEL_STEP
}

/// `base_hp + 0.10 * base_hp * closest_level(level)`
pub fn total_hp(base_hp: f64, level: f64) -> Result<f64, DexError> {
    if !base_hp.is_finite() {
        return Err(DexError::InvalidInput(format!(
            "base HP must be a finite number, got {}",
            base_hp
        )));
    }
    if !level.is_finite() {
        return Err(DexError::InvalidInput(format!("level must be a finite number, got {}", level)));
    }

    let level_health = (HP_GROWTH_PER_LEVEL * base_hp) * closest_level(level);
    Ok(base_hp + level_health)
}
