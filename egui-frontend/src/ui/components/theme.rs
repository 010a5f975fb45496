//! # Theme Configuration
//!
//! Centralized colors for the expense timeline. All visual styling should use
//! these constants so the chart and header stay consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let bar_color = CURRENT_THEME.chart.bar;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Expense chart colors
    pub chart: ChartColors,
    /// Month header colors
    pub header: HeaderColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Background and layout colors
    pub layout: LayoutColors,
}

/// Colors for the bar chart
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Regular (and active) bar fill
    pub bar: Color32,
    /// Fill for bars dimmed by a selection
    pub bar_inactive: Color32,
    /// Day and amount labels
    pub tick_text: Color32,
}

/// Colors for the month header strip
#[derive(Debug, Clone)]
pub struct HeaderColors {
    pub background: Color32,
    pub month_text: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (placeholders, hints)
    pub secondary: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    chart: ChartColors {
        // Pink accent, same as the calendar's selection border
        bar: Color32::from_rgb(232, 150, 199),
        bar_inactive: Color32::from_rgb(238, 238, 238),
        tick_text: Color32::from_rgb(117, 117, 117),
    },
    header: HeaderColors {
        background: Color32::from_rgb(238, 238, 238),
        month_text: Color32::from_rgb(79, 109, 245),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(120, 120, 120),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(250, 250, 250),
    },
};

impl Theme {
    /// Header label color at a given opacity (0.0 to 1.0)
    pub fn month_text_with_opacity(&self, opacity: f32) -> Color32 {
        let c = self.header.month_text;
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
    }
}
