//! Weekly calendar layout
//!
//! Projects time slots onto a pixel grid: one column per weekday, one row
//! per visible hour. Slots outside the visible window are dropped; slots
//! crossing its edges are clipped to the visible part.

use crate::core::models::Selection;
use crate::core::schedule::{format_minutes, TimeSlot, Weekday};
use serde::{Deserialize, Serialize};

/// First visible hour by default (8 AM)
pub const DEFAULT_START_HOUR: u8 = 8;

/// End of the visible window by default (6 PM, exclusive)
pub const DEFAULT_END_HOUR: u8 = 18;

/// Pixel height of one hour row by default
pub const DEFAULT_HOUR_HEIGHT_PX: f32 = 60.0;

/// A palette entry: a name plus background, text and border colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    /// Palette name (e.g., "sky")
    pub name: &'static str,
    /// Background colour (hex)
    pub background: &'static str,
    /// Text colour (hex)
    pub text: &'static str,
    /// Border colour (hex)
    pub border: &'static str,
}

/// Course colours, assigned by selection position modulo the palette size
pub const PALETTE: [PaletteColor; 7] = [
    PaletteColor { name: "sky", background: "#e0f2fe", text: "#0369a1", border: "#7dd3fc" },
    PaletteColor { name: "amber", background: "#fef3c7", text: "#b45309", border: "#fcd34d" },
    PaletteColor { name: "emerald", background: "#d1fae5", text: "#047857", border: "#6ee7b7" },
    PaletteColor { name: "rose", background: "#ffe4e6", text: "#be123c", border: "#fda4af" },
    PaletteColor { name: "violet", background: "#ede9fe", text: "#6d28d9", border: "#c4b5fd" },
    PaletteColor { name: "lime", background: "#ecfccb", text: "#4d7c0f", border: "#bef264" },
    PaletteColor { name: "pink", background: "#fce7f3", text: "#be185d", border: "#f9a8d4" },
];

/// Palette entry for a selection position
#[must_use]
pub const fn color_for(index: usize) -> &'static PaletteColor {
    &PALETTE[index % PALETTE.len()]
}

/// Visible clock range of the weekly grid, `[start_hour, end_hour)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarWindow {
    /// First visible hour (0–23)
    pub start_hour: u8,
    /// Hour the window ends at, exclusive (1–24)
    pub end_hour: u8,
    /// Pixel height of one hour row
    pub hour_height_px: f32,
}

impl Default for CalendarWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            hour_height_px: DEFAULT_HOUR_HEIGHT_PX,
        }
    }
}

impl CalendarWindow {
    /// Create a validated window
    ///
    /// # Errors
    /// Returns an error unless `start_hour < end_hour <= 24` and the hour
    /// height is a positive finite number
    pub fn new(start_hour: u8, end_hour: u8, hour_height_px: f32) -> Result<Self, String> {
        let window = Self {
            start_hour,
            end_hour,
            hour_height_px,
        };
        window.validate()?;
        Ok(window)
    }

    /// Check the window invariants
    ///
    /// # Errors
    /// Returns a description of the first violated invariant
    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour > 24 {
            return Err(format!(
                "Calendar end hour must be at most 24, got {}",
                self.end_hour
            ));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "Calendar start hour ({}) must be before end hour ({})",
                self.start_hour, self.end_hour
            ));
        }
        if !self.hour_height_px.is_finite() || self.hour_height_px <= 0.0 {
            return Err(format!(
                "Calendar hour height must be positive, got {}",
                self.hour_height_px
            ));
        }
        Ok(())
    }

    /// Window start, minutes since midnight
    #[must_use]
    pub const fn start_minute(&self) -> u16 {
        self.start_hour as u16 * 60
    }

    /// Window end, minutes since midnight
    #[must_use]
    pub const fn end_minute(&self) -> u16 {
        self.end_hour as u16 * 60
    }

    /// Pixels per minute of clock time
    #[must_use]
    pub fn pixels_per_minute(&self) -> f32 {
        self.hour_height_px / 60.0
    }

    /// Number of hour rows
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Total grid height in pixels
    #[must_use]
    pub fn height_px(&self) -> f32 {
        f32::from(self.hours()) * self.hour_height_px
    }

    /// Row labels, one per visible hour (`8:00 AM`, `9:00 AM`, ...)
    #[must_use]
    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..self.end_hour)
            .map(|h| format_minutes(u16::from(h) * 60))
            .collect()
    }
}

/// A slot positioned on the weekly grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    /// The slot being displayed (unclipped times)
    pub slot: TimeSlot,
    /// Column index (Mon = 0)
    pub column: usize,
    /// Column width as a fraction of the grid width
    pub width_fraction: f32,
    /// Offset from the top of the grid, in pixels
    pub top: f32,
    /// Visible height, in pixels
    pub height: f32,
    /// Position of the owning course in the selection
    pub color_index: usize,
    /// Colour assigned to the owning course
    pub color: &'static PaletteColor,
}

impl CalendarEvent {
    /// Stable identifier of the underlying slot
    #[must_use]
    pub fn id(&self) -> String {
        self.slot.key()
    }

    /// Tooltip text: code, name and time range
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}: {}\n{}",
            self.slot.course_code,
            self.slot.course_name,
            self.slot.time_range()
        )
    }
}

/// Lay out slots on the weekly grid
///
/// Colours follow each course's position in `selection`, so every slot of a
/// course shares one colour. A slot whose course is not in the selection
/// gets the first palette entry.
#[must_use]
pub fn layout(slots: &[TimeSlot], window: &CalendarWindow, selection: &Selection) -> Vec<CalendarEvent> {
    slots
        .iter()
        .filter_map(|slot| {
            let color_index = selection.position(&slot.course_id).unwrap_or_default();
            position(slot, window, color_index)
        })
        .collect()
}

/// Position one slot, or `None` when no part of it is visible
#[must_use]
pub fn position(slot: &TimeSlot, window: &CalendarWindow, color_index: usize) -> Option<CalendarEvent> {
    let window_start = window.start_minute();
    let window_end = window.end_minute();

    let visible_start = window_start.max(slot.start_minute);
    let visible_end = window_end.min(slot.end_minute);
    if visible_end <= visible_start {
        return None;
    }

    let ppm = window.pixels_per_minute();
    let top = f32::from(slot.start_minute.saturating_sub(window_start)) * ppm;
    let height = f32::from(visible_end - visible_start) * ppm;

    #[allow(clippy::cast_precision_loss)]
    let width_fraction = 1.0 / Weekday::ALL.len() as f32;

    Some(CalendarEvent {
        slot: slot.clone(),
        column: slot.weekday.index(),
        width_fraction,
        top,
        height,
        color_index,
        color: color_for(color_index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(course_id: &str, weekday: Weekday, start: u16, end: u16) -> TimeSlot {
        TimeSlot {
            course_id: course_id.to_string(),
            course_code: course_id.to_uppercase(),
            course_name: format!("Course {course_id}"),
            weekday,
            start_minute: start,
            end_minute: end,
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_slot_inside_window() {
        let window = CalendarWindow::default();
        let event = position(&slot("a", Weekday::Wed, 660, 710), &window, 0)
            .expect("slot is visible");
        assert_eq!(event.column, 2);
        assert!(approx(event.top, 180.0));
        assert!(approx(event.height, 50.0));
        assert!(approx(event.width_fraction, 0.2));
        assert_eq!(event.id(), "a-Wed-660");
        assert_eq!(event.title(), "A: Course a\n11:00 AM - 11:50 AM");
    }

    #[test]
    fn test_slots_outside_window_are_dropped() {
        let window = CalendarWindow::default();
        assert!(position(&slot("a", Weekday::Mon, 420, 480), &window, 0).is_none());
        assert!(position(&slot("a", Weekday::Mon, 1080, 1140), &window, 0).is_none());
        assert!(position(&slot("a", Weekday::Mon, 1140, 1200), &window, 0).is_none());
    }

    #[test]
    fn test_slot_crossing_start_is_clipped() {
        let window = CalendarWindow::default();
        let event = position(&slot("a", Weekday::Tue, 450, 540), &window, 0)
            .expect("slot is partly visible");
        assert!(approx(event.top, 0.0));
        assert!(approx(event.height, 60.0));
    }

    #[test]
    fn test_slot_crossing_end_is_clipped() {
        let window = CalendarWindow::default();
        let event = position(&slot("a", Weekday::Fri, 1050, 1140), &window, 0)
            .expect("slot is partly visible");
        assert!(approx(event.top, 570.0));
        assert!(approx(event.height, 30.0));
        assert!(approx(event.top + event.height, window.height_px()));
    }

    #[test]
    fn test_custom_hour_height() {
        let window = CalendarWindow::new(9, 12, 90.0).expect("valid window");
        let event = position(&slot("a", Weekday::Thu, 600, 630), &window, 0)
            .expect("slot is visible");
        assert!(approx(event.top, 90.0));
        assert!(approx(event.height, 45.0));
    }

    #[test]
    fn test_colors_follow_selection_order() {
        let selection: Selection = ["b", "a"].into_iter().collect();
        let slots = vec![
            slot("a", Weekday::Mon, 600, 660),
            slot("b", Weekday::Mon, 540, 600),
            slot("a", Weekday::Wed, 600, 660),
        ];
        let events = layout(&slots, &CalendarWindow::default(), &selection);
        let indices: Vec<usize> = events.iter().map(|e| e.color_index).collect();
        assert_eq!(indices, vec![1, 0, 1]);
        assert_eq!(events[0].color.name, "amber");
        assert_eq!(events[1].color.name, "sky");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(color_for(7).name, color_for(0).name);
        assert_eq!(color_for(9).name, "emerald");
    }

    #[test]
    fn test_window_validation() {
        assert!(CalendarWindow::new(8, 18, 60.0).is_ok());
        assert!(CalendarWindow::new(18, 8, 60.0).is_err());
        assert!(CalendarWindow::new(8, 8, 60.0).is_err());
        assert!(CalendarWindow::new(8, 25, 60.0).is_err());
        assert!(CalendarWindow::new(8, 18, 0.0).is_err());
    }

    #[test]
    fn test_hour_labels() {
        let labels = CalendarWindow::default().hour_labels();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "8:00 AM");
        assert_eq!(labels[4], "12:00 PM");
        assert_eq!(labels[9], "5:00 PM");
    }
}
