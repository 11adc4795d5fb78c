use radar_chart_rs::radar::ColorPalette;
use radar_chart_rs::render::{Color, ColorPair};
use proptest::prelude::*;

proptest! {
    #[test]
    fn color_for_is_total_and_deterministic(
        channels in prop::collection::vec((0u8..=255, 0u8..=255, 0u8..=255), 1..12),
        index in any::<usize>(),
    ) {
        let entries: Vec<ColorPair> = channels
            .iter()
            .map(|&(r, g, b)| ColorPair::from_stroke(Color::rgb8(r, g, b), 0.3))
            .collect();
        let palette = ColorPalette::new(entries.clone()).expect("non-empty palette");

        let first = palette.color_for(index, None);
        let second = palette.color_for(index, None);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, entries[index % entries.len()]);
    }
}
