use eframe::egui::Color32;

use crate::data::filter::Interval;

// ---------------------------------------------------------------------------
// Figure – the data content of a chart, independent of drawing
// ---------------------------------------------------------------------------

/// Stroke pattern of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Marker glyph of a scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Diamond,
    /// Filled "X".
    Cross,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
    pub style: LineStyle,
    pub label: Option<String>,
}

impl LineSeries {
    pub fn new(points: Vec<[f64; 2]>, color: Color32, label: &str) -> Self {
        LineSeries {
            points,
            color,
            width: 1.0,
            style: LineStyle::Solid,
            label: Some(label.to_string()),
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style = LineStyle::Dashed;
        self
    }

    pub fn unlabelled(mut self) -> Self {
        self.label = None;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub marker: Marker,
    /// Marker area in pt², as scatter sizes are usually quoted.
    pub area: f32,
    /// `None` keeps the series out of the legend.
    pub label: Option<String>,
}

impl ScatterSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Marker radius in points for an `area` given in pt².
    pub fn radius(&self) -> f32 {
        self.area.sqrt() / 2.0
    }
}

/// Vertical segments at `xs`, each spanning `y_span`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSeries {
    pub xs: Vec<f64>,
    pub y_span: Interval,
    pub color: Color32,
    pub width: f32,
    pub label: Option<String>,
}

/// One set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_range: Interval,
    pub y_range: Interval,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub lines: Vec<LineSeries>,
    /// Drawn in order; later series cover earlier ones.
    pub scatters: Vec<ScatterSeries>,
    pub segments: Vec<SegmentSeries>,
    pub grid_x: bool,
}

impl Panel {
    pub fn new(x_range: Interval, y_range: Interval) -> Self {
        Panel {
            x_range,
            y_range,
            x_label: None,
            y_label: None,
            lines: Vec::new(),
            scatters: Vec::new(),
            segments: Vec::new(),
            grid_x: false,
        }
    }

    pub fn labels(mut self, x: &str, y: Option<&str>) -> Self {
        self.x_label = Some(x.to_string());
        self.y_label = y.map(str::to_string);
        self
    }

    /// First scatter series whose legend label starts with `prefix`.
    pub fn scatter(&self, prefix: &str) -> Option<&ScatterSeries> {
        self.scatters
            .iter()
            .find(|s| s.label.as_deref().is_some_and(|l| l.starts_with(prefix)))
    }

    /// Legend entries in drawing order: lines, then scatters, then segments.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| l.label.as_deref())
            .chain(self.scatters.iter().filter_map(|s| s.label.as_deref()))
            .chain(self.segments.iter().filter_map(|s| s.label.as_deref()))
            .collect()
    }

    /// Total number of markers over all scatter series.
    pub fn marker_count(&self) -> usize {
        self.scatters.iter().map(ScatterSeries::len).sum()
    }
}

/// A chart: one or more vertically stacked panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub panels: Vec<Panel>,
    /// Panels share the wavelength axis.
    pub link_x: bool,
}

impl Figure {
    pub fn single(title: &str, panel: Panel) -> Self {
        Figure {
            title: title.to_string(),
            panels: vec![panel],
            link_x: false,
        }
    }

    pub fn panel(&self, i: usize) -> Option<&Panel> {
        self.panels.get(i)
    }
}

/// Legend label for a series with `count` surviving rows: `"<name> (<count>)"`,
/// or `None` when nothing survived.
pub fn counted_label(name: &str, count: usize) -> Option<String> {
    (count > 0).then(|| format!("{name} ({count})"))
}

/// Legend label without a count, kept only when the series has rows.
pub fn plain_label(name: &str, count: usize) -> Option<String> {
    (count > 0).then(|| name.to_string())
}
