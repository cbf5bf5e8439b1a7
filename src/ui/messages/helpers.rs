//! Layout decisions for a single bubble, kept free of egui calls.

use crate::record::MessageRecord;
use crate::ui::theme::{preset_for, BubblePreset};

/// What a bubble shows besides its body.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    pub preset: &'static BubblePreset,
    /// Direction glyph, absent for status lines.
    pub glyph: Option<&'static str>,
    /// Elapsed-time label such as `42ms`.
    pub timing: Option<String>,
}

impl BubbleLayout {
    pub fn for_record(record: &MessageRecord) -> Self {
        let preset = preset_for(record.direction);
        let timing = if preset.shows_timing {
            record.valid_elapsed_ms().map(format_elapsed)
        } else {
            None
        };
        Self {
            preset,
            glyph: preset.glyph,
            timing,
        }
    }

    /// The indicator column only exists when there is a glyph to show.
    pub fn has_indicator(&self) -> bool {
        self.glyph.is_some()
    }
}

/// `12` -> `12ms`, `12.5` -> `12.5ms`.
pub(crate) fn format_elapsed(ms: f64) -> String {
    format!("{ms}ms")
}
