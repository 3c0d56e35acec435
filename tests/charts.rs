use spectral_plot::data::model::{
    CATEGORY, CONTINUUM, HALFPEAKS, PEAKS, SPECTRUM2, TROUGH, TROUGH_FILTERED,
};
use spectral_plot::color;
use spectral_plot::data::synthetic::demo_frame;
use spectral_plot::figure::{Figure, LineStyle, Marker, Panel};
use spectral_plot::{
    plot_continuum, plot_derivatives, plot_peaks, plot_peaks_per_category, plot_troughpoints,
    Derivative1st, Interval, PlotError, SpectralFrame, View, DEFAULT_YLIM_DERIV,
};

const NAN: f64 = f64::NAN;

fn scenario_frame() -> SpectralFrame {
    SpectralFrame::new(vec![400.0, 500.0, 600.0], vec![0.1, 0.9, 0.2])
        .unwrap()
        .with_numeric(PEAKS, vec![NAN, 0.9, NAN])
        .unwrap()
        .with_category(CATEGORY, vec![Some("_"), Some("clearly_visible"), Some("_")])
        .unwrap()
}

/// Four big half peaks (one above the default intensity window, one beyond
/// 1000 nm), one small, one noise, and two peaks.
fn marker_frame() -> SpectralFrame {
    let wavelength = vec![250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 550.0, 1050.0];
    let spectrum = vec![0.2, 0.3, 0.5, 0.8, 0.6, 0.4, 0.3, 0.2];
    SpectralFrame::new(wavelength, spectrum)
        .unwrap()
        .with_numeric(HALFPEAKS, vec![0.2, 0.3, 0.5, NAN, 1.4, NAN, 0.3, 0.2])
        .unwrap()
        .with_numeric(PEAKS, vec![NAN, NAN, NAN, 0.8, NAN, 0.4, NAN, NAN])
        .unwrap()
        .with_category(
            CATEGORY,
            vec![
                Some("big"),
                Some("big"),
                Some("small"),
                Some("visible"),
                Some("big"),
                Some("noise"),
                Some("noise"),
                Some("big"),
            ],
        )
        .unwrap()
}

fn empty_frame() -> SpectralFrame {
    let none: Vec<Option<&str>> = Vec::new();
    SpectralFrame::new(vec![], vec![])
        .unwrap()
        .with_numeric(SPECTRUM2, vec![])
        .unwrap()
        .with_numeric(PEAKS, vec![])
        .unwrap()
        .with_numeric(HALFPEAKS, vec![])
        .unwrap()
        .with_category(CATEGORY, none)
        .unwrap()
        .with_numeric(CONTINUUM, vec![])
        .unwrap()
        .with_numeric(TROUGH, vec![])
        .unwrap()
        .with_numeric(TROUGH_FILTERED, vec![])
        .unwrap()
}

fn top(figure: &Figure) -> &Panel {
    figure.panel(0).expect("figure has a panel")
}

fn count(panel: &Panel, prefix: &str) -> usize {
    panel.scatter(prefix).map_or(0, |s| s.len())
}

#[test]
fn scenario_single_clearly_visible_peak() {
    let fig = plot_peaks_per_category(&scenario_frame(), "clearly_visible", &View::default()).unwrap();
    let panel = top(&fig);
    assert_eq!(panel.scatters.len(), 1);
    let series = &panel.scatters[0];
    assert_eq!(series.points, vec![[500.0, 0.9]]);
    assert_eq!(series.label.as_deref(), Some("Clearly Visible (1)"));
    assert_eq!(series.marker, Marker::Diamond);
}

#[test]
fn empty_frame_renders_without_markers() {
    let view = View::default();
    let data = empty_frame();
    let figures = vec![
        plot_peaks(&data, &view).unwrap(),
        plot_derivatives(&data, &Derivative1st::default(), &view, DEFAULT_YLIM_DERIV).unwrap(),
        plot_peaks_per_category(&data, "all", &view).unwrap(),
        plot_peaks_per_category(&data, "halfpeaks", &view).unwrap(),
        plot_troughpoints(&data, &view).unwrap(),
        plot_continuum(&data, &view).unwrap(),
    ];
    for fig in &figures {
        for panel in &fig.panels {
            assert_eq!(panel.marker_count(), 0, "{}", fig.title);
            assert!(panel.scatters.iter().all(|s| s.label.is_none()), "{}", fig.title);
            assert!(panel.segments.iter().all(|s| s.xs.is_empty()));
        }
    }
}

#[test]
fn invalid_category_is_rejected() {
    let data = scenario_frame();
    for bad in ["ALL", "big", "peaks", "", "clearly-visible"] {
        let err = plot_peaks_per_category(&data, bad, &View::default()).unwrap_err();
        assert_eq!(err, PlotError::InvalidCategory(bad.to_string()));
        assert!(err.to_string().contains("'clearly_visible'"));
    }
}

#[test]
fn every_valid_category_is_accepted() {
    let data = marker_frame();
    for good in ["all", "clearly_visible", "visible", "small", "noise", "halfpeaks"] {
        assert!(plot_peaks_per_category(&data, good, &View::default()).is_ok(), "{good}");
    }
}

#[test]
fn halfpeaks_selection_does_not_need_peaks() {
    let data = SpectralFrame::new(vec![300.0, 400.0], vec![0.2, 0.4])
        .unwrap()
        .with_numeric(HALFPEAKS, vec![0.2, NAN])
        .unwrap()
        .with_category(CATEGORY, vec![Some("big"), None])
        .unwrap();
    let fig = plot_peaks_per_category(&data, "halfpeaks", &View::default()).unwrap();
    assert_eq!(count(top(&fig), "Big Half Peaks"), 1);

    let err = plot_peaks_per_category(&data, "visible", &View::default()).unwrap_err();
    assert_eq!(err, PlotError::MissingColumn(PEAKS.to_string()));
}

#[test]
fn legend_count_matches_surviving_rows() {
    let fig = plot_derivatives(&marker_frame(), &Derivative1st::default(), &View::default(), 0.3).unwrap();
    let panel = top(&fig);
    // Row 4 is big but its half peak (1.4) is above the intensity window.
    assert_eq!(
        panel.scatter("Big Half Peaks").unwrap().label.as_deref(),
        Some("Big Half Peaks (3)")
    );
    assert_eq!(count(panel, "Big Half Peaks"), 3);
    assert_eq!(
        panel.scatter("Small Half Peaks").unwrap().label.as_deref(),
        Some("Small Half Peaks (1)")
    );
    assert_eq!(
        panel.scatter("Noise Half Peaks").unwrap().label.as_deref(),
        Some("Noise Half Peaks (1)")
    );
    assert_eq!(panel.scatter("Peaks").unwrap().label.as_deref(), Some("Peaks (2)"));
}

#[test]
fn derivative_noise_half_peaks_use_the_cross_marker() {
    let fig = plot_derivatives(&marker_frame(), &Derivative1st::default(), &View::default(), 0.3).unwrap();
    let noise = top(&fig).scatter("Noise Half Peaks").unwrap();
    assert_eq!(noise.marker, Marker::Cross);
    assert_eq!(noise.area, 60.0);
}

#[test]
fn peaks_legend_follows_its_own_rows() {
    // No noise half peaks at all, but peaks in view: the peaks still get a label.
    let data = SpectralFrame::new(vec![400.0, 500.0], vec![0.3, 0.6])
        .unwrap()
        .with_numeric(HALFPEAKS, vec![0.3, NAN])
        .unwrap()
        .with_numeric(PEAKS, vec![NAN, 0.6])
        .unwrap()
        .with_category(CATEGORY, vec![Some("big"), Some("visible")])
        .unwrap();
    let fig = plot_derivatives(&data, &Derivative1st::default(), &View::default(), 0.3).unwrap();
    let panel = top(&fig);
    assert!(panel.legend_labels().contains(&"Peaks (1)"));
    assert!(!panel.legend_labels().iter().any(|l| l.starts_with("Noise")));
}

#[test]
fn derivative_segments_ignore_intensity_window() {
    let ylim = 0.5;
    let fig = plot_derivatives(&marker_frame(), &Derivative1st::default(), &View::default(), ylim).unwrap();
    let bottom = fig.panel(1).unwrap();
    assert!(fig.link_x);
    assert_eq!(bottom.y_range, Interval::new(-ylim, ylim));

    let big = &bottom.segments[0];
    assert_eq!(big.label.as_deref(), Some("Half Peaks (big)"));
    // 450 nm is out of the intensity window but still gets a segment.
    assert_eq!(big.xs, vec![250.0, 300.0, 450.0, 1050.0]);
    assert_eq!(big.y_span, Interval::new(-ylim, ylim));

    let narrow = View::new((280.0, 460.0), (0.0, 1.0));
    let fig = plot_derivatives(&marker_frame(), &Derivative1st::default(), &narrow, ylim).unwrap();
    assert_eq!(fig.panel(1).unwrap().segments[0].xs, vec![300.0, 450.0]);
}

#[test]
fn derivative_curve_is_drawn_as_given() {
    let (data, derivative) = demo_frame(11).unwrap();
    let fig = plot_derivatives(&data, &derivative, &View::default(), DEFAULT_YLIM_DERIV).unwrap();
    let bottom = fig.panel(1).unwrap();
    let curve = bottom
        .lines
        .iter()
        .find(|l| l.label.as_deref() == Some("1st Derivative"))
        .unwrap();
    assert_eq!(curve.points, derivative.points());
    let zero = bottom.lines.iter().find(|l| l.label.is_none()).unwrap();
    assert_eq!(zero.points, vec![[200.0, 0.0], [1100.0, 0.0]]);
}

#[test]
fn filtering_requires_both_windows() {
    let data = marker_frame();
    let fig = plot_peaks(&data, &View::default()).unwrap();
    // Half peaks: 6 present, 1 above the intensity window.
    assert_eq!(count(top(&fig), "Half peaks"), 5);

    let fig = plot_peaks(&data, &View::new((200.0, 1100.0), (0.0, 2.0))).unwrap();
    assert_eq!(count(top(&fig), "Half peaks"), 6);

    let fig = plot_peaks(&data, &View::new((200.0, 1000.0), (0.0, 2.0))).unwrap();
    assert_eq!(count(top(&fig), "Half peaks"), 5);

    let fig = plot_peaks(&data, &View::new((200.0, 1000.0), (0.25, 2.0))).unwrap();
    assert_eq!(count(top(&fig), "Half peaks"), 4);
}

#[test]
fn widening_the_window_never_drops_rows() {
    let (data, _) = demo_frame(5).unwrap();
    let mut previous = 0;
    for hi in [300.0, 450.0, 600.0, 800.0, 1100.0] {
        let fig = plot_peaks_per_category(&data, "all", &View::new((200.0, hi), (0.0, 1.0))).unwrap();
        let markers = top(&fig).marker_count();
        assert!(markers >= previous, "{hi}: {markers} < {previous}");
        previous = markers;
    }
    assert!(previous > 0);
}

#[test]
fn all_categories_draw_back_to_front() {
    let data = marker_frame();
    let fig = plot_peaks_per_category(&data, "all", &View::new((200.0, 1100.0), (0.0, 2.0))).unwrap();
    let areas: Vec<f32> = top(&fig).scatters.iter().map(|s| s.area).collect();
    // Noise peaks first and small, half peaks after the peaks.
    assert_eq!(areas, vec![20.0, 60.0, 60.0, 60.0, 20.0, 60.0, 60.0]);
    assert_eq!(
        top(&fig).legend_labels(),
        vec![
            "Spectrum",
            "Noise (1)",
            "Visible (1)",
            "Noise HP (1)",
            "Big Half Peaks (4)",
            "Small Half Peaks (1)",
        ]
    );
}

#[test]
fn all_without_halfpeaks_column_draws_only_peaks() {
    let fig = plot_peaks_per_category(&scenario_frame(), "all", &View::default()).unwrap();
    assert_eq!(top(&fig).scatters.len(), 4);
    assert_eq!(top(&fig).legend_labels(), vec!["Spectrum", "Clearly Visible (1)"]);
}

#[test]
fn all_without_peaks_column_draws_only_half_peaks() {
    let data = SpectralFrame::new(vec![300.0, 400.0], vec![0.2, 0.4])
        .unwrap()
        .with_numeric(HALFPEAKS, vec![0.2, NAN])
        .unwrap()
        .with_category(CATEGORY, vec![Some("big"), None])
        .unwrap();
    let fig = plot_peaks_per_category(&data, "all", &View::default()).unwrap();
    assert_eq!(top(&fig).scatters.len(), 3);
    assert_eq!(top(&fig).legend_labels(), vec!["Spectrum", "Big Half Peaks (1)"]);
}

#[test]
fn peak_categories_keep_their_colours() {
    let data = SpectralFrame::new(vec![300.0, 400.0, 500.0, 600.0], vec![0.2, 0.4, 0.6, 0.3])
        .unwrap()
        .with_numeric(PEAKS, vec![0.2, 0.4, 0.6, 0.3])
        .unwrap()
        .with_category(
            CATEGORY,
            vec![Some("clearly_visible"), Some("visible"), Some("small"), Some("noise")],
        )
        .unwrap();
    for (category, expected) in [
        ("clearly_visible", color::red()),
        ("visible", color::blue()),
        ("small", color::green()),
        ("noise", color::grey()),
    ] {
        let fig = plot_peaks_per_category(&data, category, &View::default()).unwrap();
        let series = &top(&fig).scatters[0];
        assert_eq!(series.color, expected, "{category}");
        assert_eq!(series.area, 60.0, "{category}");
        assert_eq!(series.marker, Marker::Diamond, "{category}");
        assert_eq!(series.len(), 1, "{category}");
    }
}

#[test]
fn halfpeak_selection_colours_and_sizes() {
    let view = View::new((200.0, 1100.0), (0.0, 2.0));
    let fig = plot_peaks_per_category(&marker_frame(), "halfpeaks", &view).unwrap();
    let styles: Vec<_> = top(&fig).scatters.iter().map(|s| (s.color, s.area)).collect();
    assert_eq!(
        styles,
        vec![
            (color::magenta(), 60.0),
            (color::dark_orange(), 60.0),
            (color::grey(), 20.0),
        ]
    );
    assert_eq!(top(&fig).lines[0].color, color::black());
}

#[test]
fn derivative_markers_and_segments_use_fixed_styles() {
    let fig = plot_derivatives(&marker_frame(), &Derivative1st::default(), &View::default(), 0.3).unwrap();
    let panel = top(&fig);

    let dense = &panel.scatters[0];
    assert_eq!((dense.color, dense.area, dense.label.as_deref()), (color::blue(), 5.0, None));
    let big = panel.scatter("Big Half Peaks").unwrap();
    assert_eq!((big.color, big.area, big.marker), (color::magenta(), 80.0, Marker::Diamond));
    let small = panel.scatter("Small Half Peaks").unwrap();
    assert_eq!((small.color, small.area, small.marker), (color::dark_orange(), 80.0, Marker::Diamond));
    let noise = panel.scatter("Noise Half Peaks").unwrap();
    assert_eq!(noise.color, color::black());
    let peaks = panel.scatter("Peaks").unwrap();
    assert_eq!((peaks.color, peaks.area), (color::black(), 80.0));

    let bottom = fig.panel(1).unwrap();
    let colours: Vec<_> = bottom.segments.iter().map(|s| s.color).collect();
    assert_eq!(colours, vec![color::magenta(), color::dark_orange(), color::black()]);
    let curve = bottom.lines.iter().find(|l| l.label.as_deref() == Some("1st Derivative")).unwrap();
    assert_eq!(curve.color, color::green());
}

#[test]
fn plot_peaks_marks_half_peaks_red_and_peaks_black() {
    let fig = plot_peaks(&marker_frame(), &View::default()).unwrap();
    let panel = top(&fig);
    assert_eq!(panel.lines[0].color, color::blue());
    let half = panel.scatter("Half peaks").unwrap();
    assert_eq!((half.color, half.area), (color::red(), 60.0));
    let peaks = panel.scatter("Peaks").unwrap();
    assert_eq!((peaks.color, peaks.area), (color::black(), 60.0));
}

#[test]
fn trough_chart_styles() {
    let (data, _) = demo_frame(3).unwrap();
    let fig = plot_troughpoints(&data, &View::default()).unwrap();
    let panel = top(&fig);

    assert_eq!((panel.lines[0].color, panel.lines[0].style), (color::blue(), LineStyle::Solid));
    let continuum = &panel.lines[1];
    assert_eq!(continuum.label.as_deref(), Some("Continuum"));
    assert_eq!(
        (continuum.color, continuum.style, continuum.width),
        (color::green(), LineStyle::Dashed, 2.0)
    );

    let trough = panel.scatter("Trough Points").unwrap();
    assert_eq!((trough.color, trough.area), (color::black(), 30.0));
    let kept = panel.scatter("Non-Filtered Troughs").unwrap();
    assert_eq!((kept.color, kept.area), (color::red(), 60.0));
}

#[test]
fn empty_trough_series_has_no_legend_entry() {
    let data = SpectralFrame::new(vec![400.0, 500.0], vec![0.3, 0.1])
        .unwrap()
        .with_numeric(CONTINUUM, vec![0.3, 0.3])
        .unwrap()
        .with_numeric(TROUGH, vec![NAN, 0.1])
        .unwrap()
        .with_numeric(TROUGH_FILTERED, vec![NAN, NAN])
        .unwrap();
    let fig = plot_troughpoints(&data, &View::default()).unwrap();
    let panel = top(&fig);
    assert_eq!(panel.scatters.len(), 2);
    assert_eq!(panel.scatters[0].label.as_deref(), Some("Trough Points"));
    assert!(panel.scatters[1].is_empty());
    assert_eq!(panel.scatters[1].label, None);
}

#[test]
fn troughs_ignore_the_view_window() {
    let data = SpectralFrame::new(vec![250.0, 500.0, 900.0], vec![0.3, 0.1, 0.2])
        .unwrap()
        .with_numeric(CONTINUUM, vec![0.3, 0.3, 0.3])
        .unwrap()
        .with_numeric(TROUGH, vec![0.3, 0.1, 5.0])
        .unwrap()
        .with_numeric(TROUGH_FILTERED, vec![NAN, 0.1, NAN])
        .unwrap();

    let wide = plot_troughpoints(&data, &View::default()).unwrap();
    let narrow_view = View::new((450.0, 550.0), (0.05, 0.15));
    let narrow = plot_troughpoints(&data, &narrow_view).unwrap();

    assert_eq!(top(&wide).scatters, top(&narrow).scatters);
    assert_eq!(count(top(&narrow), "Trough Points"), 3);
    assert_eq!(count(top(&narrow), "Non-Filtered Troughs"), 1);
    assert_eq!(top(&narrow).x_range, narrow_view.x);
    assert_eq!(top(&narrow).y_range, narrow_view.y);
    assert_ne!(top(&wide).x_range, top(&narrow).x_range);
}

#[test]
fn continuum_has_lines_only() {
    let (data, _) = demo_frame(9).unwrap();
    let view = View::new((300.0, 700.0), (0.0, 0.5));
    let fig = plot_continuum(&data, &view).unwrap();
    let panel = top(&fig);
    assert!(panel.scatters.is_empty());
    assert_eq!(panel.legend_labels(), vec!["New Spectrum", "Continuum"]);
    assert_eq!(fig.title, "Continuum");
    assert_eq!((panel.lines[0].color, panel.lines[0].style), (color::blue(), LineStyle::Solid));
    assert_eq!(
        (panel.lines[1].color, panel.lines[1].style, panel.lines[1].width),
        (color::red(), LineStyle::Dashed, 2.0)
    );
    assert_eq!(panel.lines[0].points.len(), data.len());
    assert_eq!(panel.x_range, view.x);
}

#[test]
fn missing_required_columns_are_reported() {
    let bare = SpectralFrame::new(vec![400.0], vec![0.5]).unwrap();
    let view = View::default();
    assert_eq!(
        plot_continuum(&bare, &view).unwrap_err(),
        PlotError::MissingColumn(SPECTRUM2.to_string())
    );
    assert_eq!(
        plot_troughpoints(&bare, &view).unwrap_err(),
        PlotError::MissingColumn(CONTINUUM.to_string())
    );
    // Optional marker columns are simply skipped.
    let fig = plot_peaks(&bare, &view).unwrap();
    assert!(top(&fig).scatters.is_empty());
    let fig = plot_derivatives(&bare, &Derivative1st::default(), &view, 0.3).unwrap();
    assert!(fig.panel(1).unwrap().segments.is_empty());

    // Half peaks without a category column cannot be split.
    let no_category = bare.with_numeric(HALFPEAKS, vec![0.5]).unwrap();
    assert_eq!(
        plot_derivatives(&no_category, &Derivative1st::default(), &view, 0.3).unwrap_err(),
        PlotError::MissingColumn(CATEGORY.to_string())
    );
}

#[test]
fn charts_are_idempotent() {
    let (data, derivative) = demo_frame(21).unwrap();
    let view = View::default();
    assert_eq!(plot_peaks(&data, &view).unwrap(), plot_peaks(&data, &view).unwrap());
    assert_eq!(
        plot_derivatives(&data, &derivative, &view, 0.3).unwrap(),
        plot_derivatives(&data, &derivative, &view, 0.3).unwrap()
    );
    assert_eq!(
        plot_peaks_per_category(&data, "all", &view).unwrap(),
        plot_peaks_per_category(&data, "all", &view).unwrap()
    );
    assert_eq!(
        plot_troughpoints(&data, &view).unwrap(),
        plot_troughpoints(&data, &view).unwrap()
    );
    assert_eq!(plot_continuum(&data, &view).unwrap(), plot_continuum(&data, &view).unwrap());
}
