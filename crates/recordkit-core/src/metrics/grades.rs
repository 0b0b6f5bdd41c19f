//! Score percentages and letter grades.

use serde::{Deserialize, Serialize};

/// `100 * score / max`, or `0` when `max <= 0`.
pub fn percentage(score: f64, max: f64) -> f64 {
    if max > 0.0 {
        100.0 * score / max
    } else {
        0.0
    }
}

/// Letter grade on the plus/minus scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds, highest first.
const LETTER_THRESHOLDS: [(f64, LetterGrade); 11] = [
    (97.0, LetterGrade::APlus),
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (65.0, LetterGrade::D),
];

/// Map a percentage to its letter grade. Anything below 65 (or NaN) is `F`.
pub fn letter_grade(percentage: f64) -> LetterGrade {
    LETTER_THRESHOLDS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

/// Coarse performance band used to color scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    /// 90 and above
    Excellent,
    /// 80 up to 90
    Good,
    /// 70 up to 80
    Fair,
    /// Below 70
    Poor,
}

pub fn grade_band(percentage: f64) -> GradeBand {
    if percentage >= 90.0 {
        GradeBand::Excellent
    } else if percentage >= 80.0 {
        GradeBand::Good
    } else if percentage >= 70.0 {
        GradeBand::Fair
    } else {
        GradeBand::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(88.0, 100.0), 88.0);
        assert_eq!(percentage(45.0, 50.0), 90.0);
        assert_eq!(percentage(10.0, 0.0), 0.0);
        assert_eq!(percentage(10.0, -4.0), 0.0);
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(100.0), LetterGrade::APlus);
        assert_eq!(letter_grade(97.0), LetterGrade::APlus);
        assert_eq!(letter_grade(93.0), LetterGrade::A);
        assert_eq!(letter_grade(92.9), LetterGrade::AMinus);
        assert_eq!(letter_grade(90.0), LetterGrade::AMinus);
        assert_eq!(letter_grade(89.999), LetterGrade::BPlus);
        assert_eq!(letter_grade(83.0), LetterGrade::B);
        assert_eq!(letter_grade(80.0), LetterGrade::BMinus);
        assert_eq!(letter_grade(77.0), LetterGrade::CPlus);
        assert_eq!(letter_grade(73.0), LetterGrade::C);
        assert_eq!(letter_grade(70.0), LetterGrade::CMinus);
        assert_eq!(letter_grade(67.0), LetterGrade::DPlus);
        assert_eq!(letter_grade(65.0), LetterGrade::D);
        assert_eq!(letter_grade(64.99), LetterGrade::F);
        assert_eq!(letter_grade(0.0), LetterGrade::F);
        assert_eq!(letter_grade(f64::NAN), LetterGrade::F);
    }

    #[test]
    fn test_letter_display() {
        assert_eq!(LetterGrade::BPlus.to_string(), "B+");
        assert_eq!(serde_json::to_string(&LetterGrade::CMinus).unwrap(), "\"C-\"");
    }

    #[test]
    fn test_grade_band() {
        assert_eq!(grade_band(95.0), GradeBand::Excellent);
        assert_eq!(grade_band(90.0), GradeBand::Excellent);
        assert_eq!(grade_band(85.0), GradeBand::Good);
        assert_eq!(grade_band(70.0), GradeBand::Fair);
        assert_eq!(grade_band(69.9), GradeBand::Poor);
    }

    proptest! {
        #[test]
        fn prop_percentage_matches_ratio(score in -1e6f64..1e6, max in 1e-3f64..1e6) {
            prop_assert_eq!(percentage(score, max), 100.0 * score / max);
        }

        #[test]
        fn prop_percentage_zero_denominator(score in proptest::num::f64::ANY) {
            prop_assert_eq!(percentage(score, 0.0), 0.0);
        }

        #[test]
        fn prop_letter_grade_monotonic(a in 0f64..110.0, b in 0f64..110.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |l: LetterGrade| LETTER_THRESHOLDS
                .iter()
                .position(|(_, letter)| *letter == l)
                .unwrap_or(LETTER_THRESHOLDS.len());
            prop_assert!(rank(letter_grade(hi)) <= rank(letter_grade(lo)));
        }
    }
}
