use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use progress_ring::Palette;

pub struct ThemeColors {
    pub ring: Srgba<f64>,
    pub accent: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            ring: Self::lookup_color(context, "borders", Srgba::new(0.8, 0.8, 0.8, 1.0)),
            accent: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.21, 0.52, 0.89, 1.0),
            ),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            background: self.ring,
            progress: self.accent,
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}
