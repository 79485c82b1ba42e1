//! Reading-age conversion for readability scores.
//!
//! Each convertible metric has an anchor table of `(score, age)` pairs. Ages
//! between anchors are interpolated linearly; scores slightly past the first
//! or last anchor extend the end segment, up to the scale's domain. Scores
//! outside the domain are rejected with [`ReadabilityError::OutOfRange`].
//!
//! SMOG has no conversion: its grade is read as an age band directly, so it
//! has no [`AgeScale`] variant.

use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, ReadabilityResult};
use crate::interpolate::interpolate;

/// A readability metric whose score can be converted to a reading age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AgeScale {
    /// Flesch Reading Ease.
    Fres,
    /// Automated Readability Index.
    Ari,
    /// Gunning Fog Index.
    Gfi,
}

impl AgeScale {
    /// All convertible scales, in report order.
    pub const ALL: [Self; 3] = [Self::Fres, Self::Ari, Self::Gfi];

    /// Short lowercase name of the scale.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fres => "fres",
            Self::Ari => "ari",
            Self::Gfi => "gfi",
        }
    }

    /// Anchor table backing this scale.
    pub fn table(&self) -> &'static AgeTable {
        match self {
            Self::Fres => &FRES_TABLE,
            Self::Ari => &ARI_TABLE,
            Self::Gfi => &GFI_TABLE,
        }
    }
}

impl std::fmt::Display for AgeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor points and accepted score domain for one scale.
#[derive(Debug)]
pub struct AgeTable {
    /// Anchor scores, strictly ascending.
    pub scores: &'static [f64],
    /// Reading age (years) at each anchor score.
    pub ages: &'static [f64],
    /// Lowest score accepted for conversion.
    pub min_score: f64,
    /// Highest score accepted for conversion.
    pub max_score: f64,
}

impl AgeTable {
    /// Whether `score` lies inside this table's domain.
    pub fn accepts(&self, score: f64) -> bool {
        score.is_finite() && (self.min_score..=self.max_score).contains(&score)
    }

    /// Whether `score` lies past the hard-to-read end of the domain.
    ///
    /// Ages rise with score on grade-level scales and fall with it on FRES,
    /// so the hard end is `max_score` for the former and `min_score` for
    /// the latter.
    pub fn beyond_hardest(&self, score: f64) -> bool {
        let rising = match (self.ages.first(), self.ages.last()) {
            (Some(first), Some(last)) => last > first,
            _ => return false,
        };
        if rising {
            score > self.max_score
        } else {
            score < self.min_score
        }
    }
}

/// Flesch Reading Ease: 100 (very easy) reads at 10, 30 (very hard) at 24.
///
/// The upper bound is the largest score the formula can produce (one-word
/// sentences of one-syllable words).
static FRES_TABLE: AgeTable = AgeTable {
    scores: &[30.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
    ages: &[24.0, 18.0, 15.0, 13.0, 12.0, 11.0, 10.0],
    min_score: 0.0,
    max_score: 121.22,
};

/// ARI grade 1 through 14 (college graduate).
static ARI_TABLE: AgeTable = AgeTable {
    scores: &[
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
    ],
    ages: &[
        5.0, 6.0, 7.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 24.0,
    ],
    min_score: 0.0,
    max_score: 15.0,
};

/// Fog grade 6 through 17.
static GFI_TABLE: AgeTable = AgeTable {
    scores: &[
        6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0,
    ],
    ages: &[
        11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 19.0, 20.0, 21.0, 23.0, 24.0,
    ],
    min_score: 0.0,
    max_score: 20.0,
};

/// Convert a metric score to an estimated reading age in years.
///
/// # Errors
///
/// Returns [`ReadabilityError::OutOfRange`] if `score` is not finite or lies
/// outside the scale's domain.
#[tracing::instrument(level = "trace")]
pub fn score_to_age(scale: AgeScale, score: f64) -> ReadabilityResult<f64> {
    let table = scale.table();
    let out_of_range = || ReadabilityError::OutOfRange {
        scale,
        score,
        min: table.min_score,
        max: table.max_score,
    };

    if !table.accepts(score) {
        return Err(out_of_range());
    }
    interpolate(table.scores, table.ages, score).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fres_anchor_values() {
        assert!(close(score_to_age(AgeScale::Fres, 100.0).unwrap(), 10.0));
        assert!(close(score_to_age(AgeScale::Fres, 60.0).unwrap(), 15.0));
        assert!(close(score_to_age(AgeScale::Fres, 30.0).unwrap(), 24.0));
    }

    #[test]
    fn fres_interpolates_between_anchors() {
        assert!(close(score_to_age(AgeScale::Fres, 55.0).unwrap(), 16.5));
        assert!(close(score_to_age(AgeScale::Fres, 40.0).unwrap(), 21.0));
    }

    #[test]
    fn fres_extends_past_anchors_within_domain() {
        // Slope below 30 is -0.3 years per point.
        assert!(close(score_to_age(AgeScale::Fres, 0.0).unwrap(), 33.0));
        // Slope above 100 is -0.1 years per point.
        assert!(close(score_to_age(AgeScale::Fres, 110.0).unwrap(), 9.0));
    }

    #[test]
    fn fres_age_decreases_as_score_increases() {
        let mut previous = f64::INFINITY;
        let mut score = 0.0;
        while score <= 121.0 {
            let age = score_to_age(AgeScale::Fres, score).unwrap();
            assert!(age < previous, "age {age} at score {score} not below {previous}");
            previous = age;
            score += 0.5;
        }
    }

    #[test]
    fn fres_rejects_scores_outside_domain() {
        let err = score_to_age(AgeScale::Fres, -12.5).unwrap_err();
        assert!(matches!(
            err,
            ReadabilityError::OutOfRange {
                scale: AgeScale::Fres,
                ..
            }
        ));
        assert!(score_to_age(AgeScale::Fres, 130.0).is_err());
    }

    #[test]
    fn ari_table_lookup() {
        assert!(close(score_to_age(AgeScale::Ari, 1.0).unwrap(), 5.0));
        assert!(close(score_to_age(AgeScale::Ari, 3.5).unwrap(), 8.0));
        assert!(close(score_to_age(AgeScale::Ari, 12.0).unwrap(), 17.0));
        assert!(close(score_to_age(AgeScale::Ari, 14.0).unwrap(), 24.0));
    }

    #[test]
    fn ari_extends_linearly_to_domain_edges() {
        assert!(close(score_to_age(AgeScale::Ari, 0.5).unwrap(), 4.5));
        assert!(close(score_to_age(AgeScale::Ari, 14.5).unwrap(), 27.0));
    }

    #[test]
    fn ari_rejects_negative_grades() {
        assert!(matches!(
            score_to_age(AgeScale::Ari, -5.0),
            Err(ReadabilityError::OutOfRange { .. })
        ));
        assert!(score_to_age(AgeScale::Ari, 15.5).is_err());
    }

    #[test]
    fn gfi_table_lookup() {
        assert!(close(score_to_age(AgeScale::Gfi, 6.0).unwrap(), 11.0));
        assert!(close(score_to_age(AgeScale::Gfi, 12.5).unwrap(), 18.0));
        assert!(close(score_to_age(AgeScale::Gfi, 17.0).unwrap(), 24.0));
        assert!(close(score_to_age(AgeScale::Gfi, 3.0).unwrap(), 8.0));
    }

    #[test]
    fn gfi_rejects_scores_outside_domain() {
        assert!(score_to_age(AgeScale::Gfi, 25.0).is_err());
        assert!(score_to_age(AgeScale::Gfi, -0.1).is_err());
    }

    #[test]
    fn non_finite_scores_are_out_of_range() {
        for scale in AgeScale::ALL {
            assert!(score_to_age(scale, f64::NAN).is_err());
            assert!(score_to_age(scale, f64::NEG_INFINITY).is_err());
        }
    }

    #[test]
    fn tables_are_well_formed() {
        for scale in AgeScale::ALL {
            let table = scale.table();
            assert_eq!(table.scores.len(), table.ages.len(), "{scale}");
            assert!(table.scores.windows(2).all(|w| w[0] < w[1]), "{scale}");
            assert!(table.min_score < table.max_score, "{scale}");
        }
    }

    #[test]
    fn hard_end_of_each_scale() {
        assert!(AgeScale::Fres.table().beyond_hardest(-40.0));
        assert!(!AgeScale::Fres.table().beyond_hardest(130.0));
        assert!(AgeScale::Ari.table().beyond_hardest(30.0));
        assert!(!AgeScale::Ari.table().beyond_hardest(-3.0));
        assert!(AgeScale::Gfi.table().beyond_hardest(21.0));
        assert!(!AgeScale::Gfi.table().beyond_hardest(10.0));
    }

    #[test]
    fn scale_names() {
        assert_eq!(AgeScale::Fres.to_string(), "fres");
        assert_eq!(AgeScale::Ari.as_str(), "ari");
        assert_eq!(AgeScale::Gfi.as_str(), "gfi");
    }
}
