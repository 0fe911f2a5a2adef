use crate::config::Palette;
use crate::scene::{Paint, Primitive, Scene};
use cairo::{Antialias, Context, LineCap};
use palette::Srgba;
use std::f64::consts::PI;

pub fn draw(cr: &Context, scene: &Scene, palette: &Palette) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.set_antialias(Antialias::Best);
    cr.set_line_width(scene.stroke_width);
    cr.set_line_cap(LineCap::Butt);

    // spin the whole frame around its center
    let pivot = scene.pivot;
    cr.translate(pivot.x, pivot.y);
    cr.rotate(scene.rotation.to_radians());
    cr.translate(-pivot.x, -pivot.y);

    for primitive in &scene.primitives {
        stroke_primitive(cr, primitive, palette)?;
    }
    cr.restore()
}

fn stroke_primitive(
    cr: &Context,
    primitive: &Primitive,
    palette: &Palette,
) -> Result<(), cairo::Error> {
    cr.new_path();
    match *primitive {
        Primitive::Circle {
            center,
            radius,
            paint,
        } => {
            set_source(cr, paint_color(paint, palette));
            cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        }
        Primitive::Arc {
            bounds,
            start_angle,
            sweep_angle,
            paint,
        } => {
            set_source(cr, paint_color(paint, palette));
            cr.arc(
                (bounds.left + bounds.right) / 2.0,
                (bounds.top + bounds.bottom) / 2.0,
                bounds.width() / 2.0,
                start_angle.to_radians(),
                (start_angle + sweep_angle).to_radians(),
            );
        }
        Primitive::Line { from, to, paint } => {
            set_source(cr, paint_color(paint, palette));
            cr.move_to(from.x, from.y);
            cr.line_to(to.x, to.y);
        }
    }
    cr.stroke()
}

fn paint_color(paint: Paint, palette: &Palette) -> Srgba<f64> {
    match paint {
        Paint::Background => palette.background,
        Paint::Progress => palette.progress,
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}
