//! 等级划分。

use domain::{Level, LevelBand};
use serde::{Deserialize, Serialize};

/// 有序等级分档，按顺序扫描，首个命中的分档生效。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelBands(Vec<LevelBand>);

impl LevelBands {
    pub fn new(bands: Vec<LevelBand>) -> Self {
        Self(bands)
    }

    pub fn bands(&self) -> &[LevelBand] {
        &self.0
    }

    /// 总分 -> 等级；不落在任何分档内时（负分、超出最高档上界等）返回 `D`。
    pub fn classify(&self, score: f64) -> Level {
        self.0
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.level)
            .unwrap_or(Level::D)
    }
}

impl Default for LevelBands {
    /// A:[90,∞) B:[60,90) C:[40,60) D:[0,40)
    fn default() -> Self {
        Self(vec![
            LevelBand::new(90.0, None, Level::A),
            LevelBand::new(60.0, Some(90.0), Level::B),
            LevelBand::new(40.0, Some(60.0), Level::C),
            LevelBand::new(0.0, Some(40.0), Level::D),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let bands = LevelBands::default();
        assert_eq!(bands.classify(95.0), Level::A);
        assert_eq!(bands.classify(90.0), Level::A);
        assert_eq!(bands.classify(66.0), Level::B);
        assert_eq!(bands.classify(59.99), Level::C);
        assert_eq!(bands.classify(12.0), Level::D);
    }

    #[test]
    fn unclassified_scores_fall_back_to_d() {
        let bands = LevelBands::new(vec![
            LevelBand::new(80.0, Some(100.0), Level::A),
            LevelBand::new(50.0, Some(80.0), Level::B),
        ]);
        assert_eq!(bands.classify(100.0), Level::D);
        assert_eq!(bands.classify(-5.0), Level::D);
        assert_eq!(bands.classify(f64::NAN), Level::D);
        assert_eq!(bands.classify(85.0), Level::A);
    }

    #[test]
    fn first_band_wins_on_overlap() {
        let bands = LevelBands::new(vec![
            LevelBand::new(50.0, Some(100.0), Level::C),
            LevelBand::new(70.0, None, Level::A),
        ]);
        assert_eq!(bands.classify(75.0), Level::C);
        assert_eq!(bands.classify(120.0), Level::A);
    }
}
