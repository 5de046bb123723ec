//! Rating classification.
//!
//! Maps a numeric rating onto one of eleven display buckets. The partition
//! is fixed and covers every integer: anything at or below 1199 is a newbie
//! and anything at or above 4000 is an eponym.

use colored::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBucket {
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    InternationalMaster,
    Grandmaster,
    InternationalGrandmaster,
    LegendaryGrandmaster,
    Eponym,
}

impl RatingBucket {
    /// All buckets, lowest rating first.
    pub const ALL: [RatingBucket; 11] = [
        Self::Newbie,
        Self::Pupil,
        Self::Specialist,
        Self::Expert,
        Self::CandidateMaster,
        Self::Master,
        Self::InternationalMaster,
        Self::Grandmaster,
        Self::InternationalGrandmaster,
        Self::LegendaryGrandmaster,
        Self::Eponym,
    ];

    pub fn classify(rating: i64) -> Self {
        match rating {
            ..=1199 => Self::Newbie,
            1200..=1399 => Self::Pupil,
            1400..=1599 => Self::Specialist,
            1600..=1899 => Self::Expert,
            1900..=2099 => Self::CandidateMaster,
            2100..=2299 => Self::Master,
            2300..=2399 => Self::InternationalMaster,
            2400..=2599 => Self::Grandmaster,
            2600..=2999 => Self::InternationalGrandmaster,
            3000..=3999 => Self::LegendaryGrandmaster,
            _ => Self::Eponym,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Newbie => "Newbie",
            Self::Pupil => "Pupil",
            Self::Specialist => "Specialist",
            Self::Expert => "Expert",
            Self::CandidateMaster => "Candidate Master",
            Self::Master => "Master",
            Self::InternationalMaster => "International Master",
            Self::Grandmaster => "Grandmaster",
            Self::InternationalGrandmaster => "International Grandmaster",
            Self::LegendaryGrandmaster => "Legendary Grandmaster",
            Self::Eponym => "eponym",
        }
    }

    /// Background/border style class.
    pub const fn bucket_class(self) -> &'static str {
        match self {
            Self::Newbie => "rating-gray",
            Self::Pupil => "rating-green",
            Self::Specialist => "rating-cyan",
            Self::Expert => "rating-blue",
            Self::CandidateMaster => "rating-purple",
            Self::Master => "rating-orange",
            Self::InternationalMaster => "rating-orange-dark",
            Self::Grandmaster => "rating-red",
            Self::InternationalGrandmaster => "rating-red-dark",
            Self::LegendaryGrandmaster => "rating-red-legend",
            Self::Eponym => "rating-eponym",
        }
    }

    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Newbie => "text-gray-500",
            Self::Pupil => "text-green-500",
            Self::Specialist => "text-cyan-500",
            Self::Expert => "text-blue-500",
            Self::CandidateMaster => "text-purple-500",
            Self::Master => "text-orange-400",
            Self::InternationalMaster => "text-orange-500",
            Self::Grandmaster => "text-red-500",
            Self::InternationalGrandmaster => "text-red-600",
            Self::LegendaryGrandmaster => "text-red-700",
            Self::Eponym => "text-yellow-400",
        }
    }

    /// Inclusive bounds; `None` marks an open end.
    pub const fn bounds(self) -> (Option<i64>, Option<i64>) {
        match self {
            Self::Newbie => (None, Some(1199)),
            Self::Pupil => (Some(1200), Some(1399)),
            Self::Specialist => (Some(1400), Some(1599)),
            Self::Expert => (Some(1600), Some(1899)),
            Self::CandidateMaster => (Some(1900), Some(2099)),
            Self::Master => (Some(2100), Some(2299)),
            Self::InternationalMaster => (Some(2300), Some(2399)),
            Self::Grandmaster => (Some(2400), Some(2599)),
            Self::InternationalGrandmaster => (Some(2600), Some(2999)),
            Self::LegendaryGrandmaster => (Some(3000), Some(3999)),
            Self::Eponym => (Some(4000), None),
        }
    }

    /// Legend label such as `1200-1399`, `<= 1199` or `>= 4000`.
    pub fn range_label(self) -> String {
        match self.bounds() {
            (None, Some(high)) => format!("<= {}", high),
            (Some(low), None) => format!(">= {}", low),
            (Some(low), Some(high)) => format!("{}-{}", low, high),
            (None, None) => "any".to_string(),
        }
    }

    /// Closest terminal colour for the bucket's text class.
    pub fn terminal_color(self) -> Color {
        match self {
            Self::Newbie => Color::BrightBlack,
            Self::Pupil => Color::Green,
            Self::Specialist => Color::Cyan,
            Self::Expert => Color::Blue,
            Self::CandidateMaster => Color::Magenta,
            Self::Master => Color::TrueColor {
                r: 251,
                g: 146,
                b: 60,
            },
            Self::InternationalMaster => Color::TrueColor {
                r: 249,
                g: 115,
                b: 22,
            },
            Self::Grandmaster => Color::Red,
            Self::InternationalGrandmaster => Color::TrueColor {
                r: 220,
                g: 38,
                b: 38,
            },
            Self::LegendaryGrandmaster => Color::TrueColor {
                r: 185,
                g: 28,
                b: 28,
            },
            Self::Eponym => Color::BrightYellow,
        }
    }
}

/// Three-part display descriptor for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingDescriptor {
    pub bucket: RatingBucket,
    pub bucket_class: &'static str,
    pub text_class: &'static str,
    pub title: &'static str,
}

pub fn describe(rating: i64) -> RatingDescriptor {
    let bucket = RatingBucket::classify(rating);
    RatingDescriptor {
        bucket,
        bucket_class: bucket.bucket_class(),
        text_class: bucket.text_class(),
        title: bucket.title(),
    }
}
