use radar_chart_rs::ChartError;
use radar_chart_rs::core::{Axis, BaseStats, Dataset, StatSummary};

fn charizard() -> BaseStats {
    BaseStats {
        hp: 78.0,
        attack: 84.0,
        defense: 78.0,
        special_attack: 109.0,
        special_defense: 85.0,
        speed: 100.0,
    }
}

#[test]
fn summary_rows_follow_axis_order_with_total() {
    let axes = Axis::base_stat_axes();
    let dataset = Dataset::from_base_stats("6", "Charizard", &charizard());

    let summary = StatSummary::from_dataset(&dataset, &axes).expect("summary");

    assert_eq!(summary.total, 534.0);
    assert_eq!(summary.total, charizard().total());
    assert_eq!(summary.rows.len(), 6);
    assert_eq!(summary.rows[3].label, "SpA");
    assert_eq!(summary.rows[3].value, 109.0);
    assert!((summary.rows[3].fill_ratio - 109.0 / 255.0).abs() <= 1e-12);
    assert_eq!(summary.rows[0].color, axes[0].label_color);
}

#[test]
fn overflowing_value_keeps_raw_number_but_caps_bar() {
    let axes = Axis::base_stat_axes();
    let dataset = Dataset::new("x", "X", [300.0, 1.0, 1.0, 1.0, 1.0, 1.0]);

    let summary = StatSummary::from_dataset(&dataset, &axes).expect("summary");

    assert_eq!(summary.rows[0].value, 300.0);
    assert_eq!(summary.rows[0].fill_ratio, 1.0);
    assert!(summary.rows[0].overflows());
    assert!(!summary.rows[1].overflows());
    assert_eq!(summary.total, 305.0);
}

#[test]
fn summary_validates_like_the_renderer() {
    let axes = Axis::base_stat_axes();
    let short = Dataset::new("x", "X", [1.0, 2.0]);
    assert!(matches!(
        StatSummary::from_dataset(&short, &axes),
        Err(ChartError::AxisCountMismatch { .. })
    ));

    let infinite = Dataset::new("x", "X", [1.0, 2.0, 3.0, f64::INFINITY, 5.0, 6.0]);
    assert!(matches!(
        StatSummary::from_dataset(&infinite, &axes),
        Err(ChartError::NonFiniteValue { axis: 3, .. })
    ));
}
