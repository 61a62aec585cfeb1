//! Qualitative effectiveness bands

use crate::DexError;

/// Label derived from a total multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivenessBand {
    /// Exactly 0x
    Immune,
    /// Below 0.5x
    UltraIneffective,
    /// 0.5x up to (not including) 1x
    NotVeryEffective,
    /// Exactly 1x
    Effective,
    /// Above 1x up to and including 2x
    SuperEffective,
    /// Above 2x
    UltraEffective,
}

impl EffectivenessBand {
    /// All bands, weakest first
    pub const ALL: [EffectivenessBand; 6] = [
        EffectivenessBand::Immune,
        EffectivenessBand::UltraIneffective,
        EffectivenessBand::NotVeryEffective,
        EffectivenessBand::Effective,
        EffectivenessBand::SuperEffective,
        EffectivenessBand::UltraEffective,
    ];

    /// Classify a total multiplier.
    ///
    /// Fails with [`DexError::InvalidInput`] for negative or non-finite values,
    /// which no product of relation multipliers can produce.
    pub fn classify(total: f64) -> Result<Self, DexError> {
        if !total.is_finite() || total < 0.0 {
            return Err(DexError::InvalidInput(format!(
                "multiplier must be a finite non-negative number, got {}",
                total
            )));
        }

        let band = if total == 0.0 {
            EffectivenessBand::Immune
        } else if total < 0.5 {
            EffectivenessBand::UltraIneffective
        } else if total < 1.0 {
            EffectivenessBand::NotVeryEffective
        } else if total == 1.0 {
            EffectivenessBand::Effective
        } else if total <= 2.0 {
            EffectivenessBand::SuperEffective
        } else {
            EffectivenessBand::UltraEffective
        };
        Ok(band)
    }

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectivenessBand::Immune => "Immune",
            EffectivenessBand::UltraIneffective => "Ultra Ineffective",
            EffectivenessBand::NotVeryEffective => "Not Very Effective",
            EffectivenessBand::Effective => "Effective",
            EffectivenessBand::SuperEffective => "Super Effective",
            EffectivenessBand::UltraEffective => "Ultra Effective",
        }
    }
}

impl std::fmt::Display for EffectivenessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
