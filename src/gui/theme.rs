use eframe::egui::{
    self,
    Color32,
    RichText,
    Visuals,
};

#[derive(Clone)]
pub struct Palette {
    background: Color32,
    surface: Color32,
    muted: Color32,
    red: Color32,
    green: Color32,
    yellow: Color32,
    purple: Color32,
    cyan: Color32,
}

impl Palette {
    fn dusk() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2b, 0x3c),
            muted: Color32::from_rgb(0x8b, 0x92, 0xb8),
            red: Color32::from_rgb(0xda, 0x41, 0x41),
            green: Color32::from_rgb(0x39, 0xb1, 0x4c),
            yellow: Color32::from_rgb(0xe5, 0xc0, 0x7b),
            purple: Color32::from_rgb(0xa8, 0x7f, 0xf0),
            cyan: Color32::from_rgb(0x7f, 0xc8, 0xe8),
        }
    }

    fn daylight() -> Self {
        Self {
            background: Color32::from_rgb(0xfa, 0xfa, 0xf7),
            surface: Color32::from_rgb(0xef, 0xef, 0xea),
            muted: Color32::from_rgb(0x6e, 0x74, 0x8c),
            red: Color32::from_rgb(0xc2, 0x3a, 0x3a),
            green: Color32::from_rgb(0x2f, 0x96, 0x41),
            yellow: Color32::from_rgb(0xb8, 0x8a, 0x2e),
            purple: Color32::from_rgb(0x7c, 0x55, 0xc8),
            cyan: Color32::from_rgb(0x2e, 0x8a, 0xb0),
        }
    }
}

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dusk()
    }
}

impl Theme {
    pub fn dusk() -> Self {
        Theme { dark: Palette::dusk(), light: Palette::daylight() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).yellow
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).surface
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.purple(ctx)).strong()
    }

    fn visuals(&self, mut base: Visuals, palette: &Palette) -> Visuals {
        base.window_fill = palette.surface;
        base.panel_fill = palette.background;
        base.extreme_bg_color = palette.surface;
        base.selection.bg_fill = palette.purple.linear_multiply(0.4);
        base.hyperlink_color = palette.cyan;
        base.warn_fg_color = palette.yellow;
        base.error_fg_color = palette.red;
        base
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, theme.visuals(Visuals::dark(), &theme.dark));
    ctx.set_visuals_of(egui::Theme::Light, theme.visuals(Visuals::light(), &theme.light));
}
