// File: crates/skycast-chart/src/theme.rs
// Summary: Light/Dark theming for the hourly chart and the panels around it.

/// Backend-neutral color; RGB channels plus a straight (non-premultiplied) alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha as an 8-bit channel, clamped.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// `#rrggbb` form, alpha ignored.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub dark: bool,
    /// Line, marker and area color.
    pub accent: Rgba,
    /// Backdrop used when a chart is exported on its own.
    pub background: Rgba,
    /// Text color for the hour/temperature strip.
    pub label: Rgba,
    /// Secondary text (temperature line of the strip).
    pub label_muted: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            dark: true,
            accent: Rgba::rgb(0x60, 0xa5, 0xfa),      // blue-400
            background: Rgba::rgb(0x0f, 0x17, 0x2a),  // slate-900
            label: Rgba::rgb(0xe2, 0xe8, 0xf0),
            label_muted: Rgba::rgb(0x94, 0xa3, 0xb8),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            dark: false,
            accent: Rgba::rgb(0xf5, 0x9e, 0x0b),      // amber-500
            background: Rgba::rgb(0xff, 0xfb, 0xeb),  // amber-50
            label: Rgba::rgb(0x1f, 0x29, 0x37),
            label_muted: Rgba::rgb(0x6b, 0x72, 0x80),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// The other mode's theme.
    pub fn toggled(&self) -> Self {
        Self::for_mode(!self.dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
