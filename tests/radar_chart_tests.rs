use radar_chart_rs::api::{RadarChart, RenderMode, render, render_overlay, render_single};
use radar_chart_rs::core::{Axis, ChartConfig, Dataset, Point, Rect};
use radar_chart_rs::render::{Color, ColorPair, DrawCommand, RecordingSurface};
use radar_chart_rs::ChartError;

fn overlay_config() -> ChartConfig {
    ChartConfig::centered_in(400.0, 400.0, 120.0)
}

fn datasets() -> Vec<Dataset> {
    vec![
        Dataset::new("1", "Bulbasaur", [45.0, 49.0, 49.0, 65.0, 65.0, 45.0]),
        Dataset::new("4", "Charmander", [39.0, 52.0, 43.0, 60.0, 50.0, 65.0]),
        Dataset::new("7", "Squirtle", [44.0, 48.0, 65.0, 50.0, 64.0, 43.0]),
    ]
}

#[test]
fn render_clears_owned_region_first() {
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let mut surface = RecordingSurface::new();

    chart
        .render(&mut surface, &datasets(), &Axis::base_stat_axes())
        .expect("render");

    assert_eq!(
        surface.commands().first(),
        Some(&DrawCommand::ClearRegion(Rect::new(0.0, 0.0, 400.0, 400.0)))
    );
    let clears = surface
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::ClearRegion(_)))
        .count();
    assert_eq!(clears, 1);
}

#[test]
fn default_region_covers_grid_and_labels() {
    let config = ChartConfig::new(Point::new(120.0, 120.0), 70.0);
    let chart = RadarChart::single_entity(config).expect("chart");
    // radius 70 + label offset 20 + font 11
    assert_eq!(chart.region(), Rect::new(19.0, 19.0, 202.0, 202.0));
}

#[test]
fn overlay_draws_one_polygon_per_dataset_in_caller_order() {
    let axes = Axis::base_stat_axes();
    let mut surface = RecordingSurface::new();

    let frame = render_overlay(&mut surface, &datasets(), &axes, overlay_config()).expect("render");

    let polygons = surface.filled_polygons();
    assert_eq!(polygons.len(), 3);
    for polygon in &polygons {
        assert_eq!(polygon.vertices().len(), axes.len());
    }

    let chart = RadarChart::new(overlay_config()).expect("chart");
    for (index, polygon) in polygons.iter().enumerate() {
        assert_eq!(polygon.fill, chart.palette().color_for(index, None).fill);
        assert_eq!(frame.series[index].dataset_id, datasets()[index].id);
    }
    assert_eq!(frame.mode, RenderMode::Overlay);
}

#[test]
fn grid_is_drawn_once_before_any_series() {
    let axes = Axis::base_stat_axes();
    let mut surface = RecordingSurface::new();
    render(&mut surface, &datasets(), &axes, overlay_config()).expect("render");

    let commands = surface.commands();
    let first_fill = commands
        .iter()
        .position(|command| matches!(command, DrawCommand::FillPath { .. }))
        .expect("fill");
    let label_positions: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter_map(|(i, command)| matches!(command, DrawCommand::DrawText(_)).then_some(i))
        .collect();
    assert_eq!(label_positions.len(), 6);
    assert!(label_positions.iter().all(|&i| i < first_fill));
}

#[test]
fn explicit_dataset_color_overrides_palette() {
    let custom = ColorPair::from_stroke(Color::rgb8(10, 20, 30), 0.4);
    let mut sets = datasets();
    sets[1] = sets[1].clone().with_color(custom);
    let mut surface = RecordingSurface::new();

    let frame = render_overlay(&mut surface, &sets, &Axis::base_stat_axes(), overlay_config())
        .expect("render");

    assert_eq!(frame.series[1].colors, custom);
    assert_eq!(surface.filled_polygons()[1].fill, custom.fill);
    // Palette index still follows dataset position for the others.
    assert_eq!(
        frame.series[2].colors,
        RadarChart::new(overlay_config()).expect("chart").palette().color_for(2, None)
    );
}

#[test]
fn palette_cycles_when_datasets_outnumber_colors() {
    let mut sets = datasets();
    sets.push(Dataset::new("25", "Pikachu", [35.0, 55.0, 40.0, 50.0, 50.0, 90.0]));
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let mut surface = RecordingSurface::new();

    let frame = chart
        .render_overlay(&mut surface, &sets, &Axis::base_stat_axes())
        .expect("render");

    assert_eq!(frame.series.len(), 4);
    assert_eq!(frame.series[3].colors, frame.series[0].colors);
}

#[test]
fn identical_datasets_produce_congruent_polygons() {
    let values = [80.0, 82.0, 83.0, 100.0, 100.0, 80.0];
    let sets = vec![
        Dataset::new("a", "A", values),
        Dataset::new("b", "B", values),
    ];
    let mut surface = RecordingSurface::new();

    render_overlay(&mut surface, &sets, &Axis::base_stat_axes(), overlay_config()).expect("render");

    let polygons = surface.filled_polygons();
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].vertices(), polygons[1].vertices());
    assert_ne!(polygons[0].fill, polygons[1].fill);
}

#[test]
fn empty_dataset_list_is_rejected_without_drawing() {
    let mut surface = RecordingSurface::new();
    let err = render_overlay(&mut surface, &[], &Axis::base_stat_axes(), overlay_config())
        .expect_err("empty");
    assert_eq!(err, ChartError::EmptyDatasetList);
    assert!(surface.is_empty());
}

#[test]
fn unnamed_axis_prevents_any_drawing() {
    let axes = vec![Axis::new("HP", 255.0), Axis::new("", 255.0), Axis::new("Def", 255.0)];
    let sets = vec![Dataset::new("1", "Bulbasaur", [45.0, 49.0, 49.0])];
    let mut surface = RecordingSurface::new();

    let err = render_overlay(&mut surface, &sets, &axes, overlay_config()).expect_err("empty name");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_empty());
}

#[test]
fn invalid_later_dataset_prevents_any_drawing() {
    let mut sets = datasets();
    sets.push(Dataset::new("bad", "Bad", [1.0, 2.0, 3.0]));
    let mut surface = RecordingSurface::new();

    let err = render_overlay(&mut surface, &sets, &Axis::base_stat_axes(), overlay_config())
        .expect_err("mismatch");
    assert!(matches!(err, ChartError::AxisCountMismatch { actual: 3, .. }));
    assert!(surface.is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let err = RadarChart::new(ChartConfig::new(Point::new(0.0, 0.0), 0.0)).expect_err("radius");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = RadarChart::new(ChartConfig::new(Point::new(0.0, 0.0), 10.0).with_grid_levels(0))
        .expect_err("levels");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn render_is_idempotent() {
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let axes = Axis::base_stat_axes();
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();

    let frame_a = chart.render(&mut first, &datasets(), &axes).expect("first");
    let frame_b = chart.render(&mut second, &datasets(), &axes).expect("second");

    assert_eq!(first.commands(), second.commands());
    assert_eq!(frame_a, frame_b);
}

#[test]
fn rerender_on_same_surface_starts_from_a_clear() {
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let axes = Axis::base_stat_axes();
    let mut surface = RecordingSurface::new();

    chart.render(&mut surface, &datasets(), &axes).expect("first");
    let first_len = surface.take_commands().len();
    chart.render(&mut surface, &datasets()[..1], &axes).expect("second");

    assert!(matches!(surface.commands()[0], DrawCommand::ClearRegion(_)));
    assert_eq!(surface.filled_polygons().len(), 1);
    assert!(surface.commands().len() < first_len);
}

#[test]
fn single_mode_uses_axis_colored_markers_and_accent_palette() {
    let config = ChartConfig::centered_in(240.0, 240.0, 70.0);
    let dataset = Dataset::new("6", "Charizard", [78.0, 84.0, 78.0, 109.0, 85.0, 100.0]);
    let axes = Axis::base_stat_axes();
    let mut surface = RecordingSurface::new();

    let frame = render_single(&mut surface, &dataset, &axes, config).expect("render");

    assert_eq!(frame.mode, RenderMode::Single);
    assert_eq!(frame.series.len(), 1);
    assert_eq!(frame.series[0].colors.stroke, Color::rgb8(100, 108, 255));
    let expected: Vec<Color> = axes.iter().filter_map(|axis| axis.label_color).collect();
    assert_eq!(frame.series[0].marker_colors.to_vec(), expected);

    let borders = surface
        .commands()
        .iter()
        .filter(|command| {
            matches!(command, DrawCommand::StrokeCircle { color, .. } if *color == Color::WHITE)
        })
        .count();
    assert_eq!(borders, 6);
}

#[test]
fn overflow_is_reported_without_changing_raw_values() {
    let dataset = Dataset::new("x", "X", [300.0, 10.0, 10.0, 10.0, 10.0, 10.0]);
    let chart = RadarChart::single_entity(ChartConfig::centered_in(240.0, 240.0, 70.0))
        .expect("chart");
    let mut surface = RecordingSurface::new();

    let frame = chart
        .render_single(&mut surface, &dataset, &Axis::base_stat_axes())
        .expect("render");

    assert!(frame.has_overflow());
    let clamped: Vec<_> = frame.clamped_values().collect();
    assert_eq!(clamped.len(), 1);
    assert_eq!(clamped[0].value, 300.0);
    let vertex = frame.series[0].vertices[0];
    assert!((vertex.distance_to(Point::new(120.0, 120.0)) - 70.0).abs() <= 1e-9);
}

#[test]
fn legend_matches_rendered_strokes() {
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let sets = datasets();
    let mut surface = RecordingSurface::new();
    let frame = chart
        .render(&mut surface, &sets, &Axis::base_stat_axes())
        .expect("render");

    let legend = chart.legend(&sets);
    assert_eq!(legend.len(), 3);
    for (entry, series) in legend.iter().zip(&frame.series) {
        assert_eq!(entry.id, series.dataset_id);
        assert_eq!(entry.label, series.label);
        assert_eq!(entry.color, series.colors.stroke);
    }
}

#[test]
fn plan_does_not_touch_any_surface() {
    let chart = RadarChart::new(overlay_config()).expect("chart");
    let frame = chart
        .plan(RenderMode::Overlay, &datasets(), &Axis::base_stat_axes())
        .expect("plan");

    let mut surface = RecordingSurface::new();
    chart.paint(&mut surface, &frame).expect("paint");
    let mut direct = RecordingSurface::new();
    chart
        .render(&mut direct, &datasets(), &Axis::base_stat_axes())
        .expect("render");
    assert_eq!(surface.commands(), direct.commands());
}
