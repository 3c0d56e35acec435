use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;

use crate::color;
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Labels the upstream finders write into the `Category` column
// ---------------------------------------------------------------------------

/// Confidence class of a detected peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeakCategory {
    ClearlyVisible,
    Visible,
    Small,
    Noise,
}

impl PeakCategory {
    pub const ALL: [PeakCategory; 4] = [
        PeakCategory::ClearlyVisible,
        PeakCategory::Visible,
        PeakCategory::Small,
        PeakCategory::Noise,
    ];

    /// Value in the `Category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            PeakCategory::ClearlyVisible => "clearly_visible",
            PeakCategory::Visible => "visible",
            PeakCategory::Small => "small",
            PeakCategory::Noise => "noise",
        }
    }

    /// Legend name, e.g. "Clearly Visible".
    pub fn title(self) -> String {
        title_case(self.as_str())
    }

    pub fn color(self) -> Color32 {
        match self {
            PeakCategory::ClearlyVisible => color::red(),
            PeakCategory::Visible => color::blue(),
            PeakCategory::Small => color::green(),
            PeakCategory::Noise => color::grey(),
        }
    }
}

/// Size class of a detected half peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfpeakCategory {
    Big,
    Small,
    Noise,
}

impl HalfpeakCategory {
    pub const ALL: [HalfpeakCategory; 3] = [
        HalfpeakCategory::Big,
        HalfpeakCategory::Small,
        HalfpeakCategory::Noise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HalfpeakCategory::Big => "big",
            HalfpeakCategory::Small => "small",
            HalfpeakCategory::Noise => "noise",
        }
    }

    /// Colour in the per-category chart. The derivative chart draws noise in black.
    pub fn color(self) -> Color32 {
        match self {
            HalfpeakCategory::Big => color::magenta(),
            HalfpeakCategory::Small => color::dark_orange(),
            HalfpeakCategory::Noise => color::grey(),
        }
    }
}

// ---------------------------------------------------------------------------
// CategorySelection – what `plot_peaks_per_category` draws
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Peak(PeakCategory),
    Halfpeaks,
}

impl CategorySelection {
    pub const ALL: [CategorySelection; 6] = [
        CategorySelection::All,
        CategorySelection::Peak(PeakCategory::ClearlyVisible),
        CategorySelection::Peak(PeakCategory::Visible),
        CategorySelection::Peak(PeakCategory::Small),
        CategorySelection::Peak(PeakCategory::Noise),
        CategorySelection::Halfpeaks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategorySelection::All => "all",
            CategorySelection::Peak(p) => p.as_str(),
            CategorySelection::Halfpeaks => "halfpeaks",
        }
    }
}

impl FromStr for CategorySelection {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategorySelection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PlotError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"clearly_visible"` → `"Clearly Visible"`.
pub fn title_case(s: &str) -> String {
    s.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
