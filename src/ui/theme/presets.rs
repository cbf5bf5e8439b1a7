//! Fixed visual presets for message bubbles, one per direction.
//!
//! The table is built once and handed out by reference; rendering never
//! constructs a preset.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::record::Direction;

/// Horizontal placement of a bubble within the message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlign {
    Start,
    End,
    /// No alignment treatment (status lines).
    Fill,
}

/// Immutable style descriptor for one kind of bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct BubblePreset {
    pub background: Color32,
    pub align: BubbleAlign,
    /// Fraction of the available list width.
    pub width_fraction: f32,
    /// Direction glyph; `None` hides the indicator column entirely.
    pub glyph: Option<&'static str>,
    /// Whether the elapsed-time label may be shown.
    pub shows_timing: bool,
}

pub const BUBBLE_CORNER_RADIUS: u8 = 4;
pub const BUBBLE_PADDING: i8 = 15;
pub const BUBBLE_MARGIN_TOP: f32 = 5.0;

/// Width of the fixed indicator column, padding included.
pub const INDICATOR_COLUMN_WIDTH: f32 = 85.0;
pub const INDICATOR_PADDING_RIGHT: f32 = 15.0;

pub const GLYPH_SIZE: f32 = 24.0;
pub const TIMER_SIZE: f32 = 10.0;

pub const GLYPH_RECEIVED: &str = "↓";
pub const GLYPH_SENT: &str = "↑";

struct PresetTable {
    received: BubblePreset,
    sent: BubblePreset,
    status: BubblePreset,
}

static PRESETS: Lazy<PresetTable> = Lazy::new(|| PresetTable {
    received: BubblePreset {
        background: Color32::from_rgb(0xdd, 0xff, 0xdd),
        align: BubbleAlign::Start,
        width_fraction: 0.90,
        glyph: Some(GLYPH_RECEIVED),
        shows_timing: true,
    },
    sent: BubblePreset {
        background: Color32::from_rgb(0xdd, 0xdd, 0xff),
        align: BubbleAlign::End,
        width_fraction: 0.90,
        glyph: Some(GLYPH_SENT),
        shows_timing: true,
    },
    status: BubblePreset {
        background: Color32::from_rgb(0xdd, 0xdd, 0xdd),
        align: BubbleAlign::Fill,
        width_fraction: 0.95,
        glyph: None,
        shows_timing: false,
    },
});

/// Look up the preset for a direction.
pub fn preset_for(direction: Direction) -> &'static BubblePreset {
    let table = &*PRESETS;
    match direction {
        Direction::Received => &table.received,
        Direction::Sent => &table.sent,
        Direction::Status => &table.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_per_direction() {
        let recv = preset_for(Direction::Received);
        assert_eq!(recv.glyph, Some("↓"));
        assert_eq!(recv.align, BubbleAlign::Start);
        assert_eq!(recv.background, Color32::from_rgb(0xdd, 0xff, 0xdd));

        let sent = preset_for(Direction::Sent);
        assert_eq!(sent.glyph, Some("↑"));
        assert_eq!(sent.align, BubbleAlign::End);
        assert_eq!(sent.background, Color32::from_rgb(0xdd, 0xdd, 0xff));

        let status = preset_for(Direction::Status);
        assert_eq!(status.glyph, None);
        assert!(!status.shows_timing);
        assert_eq!(status.align, BubbleAlign::Fill);
        assert!(status.width_fraction > sent.width_fraction);
    }

    #[test]
    fn test_preset_lookup_returns_same_instance() {
        let a = preset_for(Direction::Sent) as *const BubblePreset;
        let b = preset_for(Direction::Sent) as *const BubblePreset;
        assert_eq!(a, b);
    }
}
