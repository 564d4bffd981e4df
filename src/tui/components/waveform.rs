//! # Waveform Rendering
//!
//! Shared bar math for the voice-message bubbles and the live recording
//! panel. Heights are normalized to `[0, 1]` and mapped onto the
//! eighth-block glyph ramp, one column per bar.

use rand::Rng;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Eighth-block ramp, lowest to tallest.
const RAMP: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bars in a static bubble waveform.
pub const BUBBLE_BARS: usize = 20;

/// Render normalized heights as a single styled line of block glyphs.
pub fn bars_line(heights: &[f32], style: Style) -> Line<'static> {
    let glyphs: String = heights.iter().map(|&h| glyph_for(h)).collect();
    Line::from(Span::styled(glyphs, style))
}

/// Heights for the live waveform: a standing wave shifted by the
/// current audio level, `|sin(i * 0.2 + level * 0.1)|`.
pub fn recording_heights(level: f32, bars: usize) -> Vec<f32> {
    (0..bars)
        .map(|i| (i as f32 * 0.2 + level * 0.1).sin().abs())
        .collect()
}

/// Random heights in `[0, 1)` for a static bubble placeholder.
pub fn random_heights(bars: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..bars).map(|_| rng.random_range(0.0..1.0)).collect()
}

fn glyph_for(height: f32) -> char {
    let idx = (height * RAMP.len() as f32) as usize;
    RAMP[idx.min(RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_heights_in_range() {
        for level in [0.0, 12.5, 50.0, 99.9] {
            let heights = recording_heights(level, 40);
            assert_eq!(heights.len(), 40);
            assert!(heights.iter().all(|h| (0.0..=1.0).contains(h)));
        }
    }

    #[test]
    fn test_random_heights_in_range() {
        let heights = random_heights(BUBBLE_BARS);
        assert_eq!(heights.len(), BUBBLE_BARS);
        assert!(heights.iter().all(|h| (0.0..1.0).contains(h)));
    }

    #[test]
    fn test_glyph_clamps_at_extremes() {
        assert_eq!(glyph_for(0.0), '▁');
        assert_eq!(glyph_for(1.0), '█');
        assert_eq!(glyph_for(2.0), '█');
    }

    #[test]
    fn test_bars_line_one_glyph_per_bar() {
        let line = bars_line(&[0.0, 0.5, 0.99], Style::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.chars().count(), 3);
    }
}
