//! The painter: walks the scene's back-to-front draw list and the sprite
//! overlays, issuing Canvas-2D calls. Per-billboard draw failures are
//! swallowed so one bad image never aborts a frame.

use galaxy_core::{
    particle_alpha, Color, DrawItem, PointKind, Scene, Theme, BILLBOARD_SPIN_RATE, PLANET_RADIUS,
};
use web_sys as web;

use crate::images::ImageCache;

/// Full-screen radial background gradient from the active theme.
pub fn draw_background(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    let (w, h) = (scene.width as f64, scene.height as f64);
    if let Ok(grad) =
        ctx.create_radial_gradient(w / 2.0, h / 2.0, 0.0, w / 2.0, h / 2.0, w * 1.5)
    {
        let _ = grad.add_color_stop(0.0, &scene.theme.bg_gradient_start.css(1.0));
        let _ = grad.add_color_stop(1.0, &scene.theme.bg_gradient_end.css(1.0));
        ctx.set_fill_style_canvas_gradient(&grad);
    } else {
        ctx.set_fill_style_str(&scene.theme.bg_gradient_end.css(1.0));
    }
    ctx.fill_rect(0.0, 0.0, w, h);
}

/// Draw the projected field back-to-front, splicing the planet in at its
/// depth slot, and record a hit region for every billboard actually drawn.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, scene: &mut Scene, images: &ImageCache) {
    let theme = scene.theme.clone();
    let time = scene.time;

    for i in 0..scene.draw_items.len() {
        match scene.draw_items[i] {
            DrawItem::Planet { x, y, scale } => {
                if scale > 0.0 {
                    draw_planet(ctx, x, y, scale, time, &theme);
                }
            }
            DrawItem::Particle(p) => {
                if p.scale <= 0.0 {
                    continue; // behind the camera
                }
                let point = scene.field.points[p.index];
                let alpha = particle_alpha(&p, &point.kind, time);
                if alpha <= 0.0 {
                    continue;
                }
                match point.kind {
                    PointKind::Photo {
                        photo_index,
                        spin_offset,
                    } => {
                        if !images.ready(photo_index) {
                            continue; // not an error; retried next frame
                        }
                        let Some(img) = images.get(photo_index) else {
                            continue;
                        };
                        let drawn_size = point.size * p.scale;
                        draw_billboard(
                            ctx,
                            img,
                            p.x,
                            p.y,
                            drawn_size,
                            p.scale,
                            point.angle + spin_offset + time * BILLBOARD_SPIN_RATE,
                            alpha,
                            &theme,
                        );
                        scene
                            .hits
                            .register_photo(p.x, p.y, drawn_size / 2.0, photo_index);
                    }
                    PointKind::Dust { shade } => {
                        draw_dot(
                            ctx,
                            p.x,
                            p.y,
                            point.size * p.scale,
                            &theme.dust_color(shade),
                            alpha,
                        );
                    }
                    PointKind::Star { .. } => {
                        draw_dot(ctx, p.x, p.y, point.size * p.scale, &theme.star, alpha);
                    }
                }
            }
        }
    }
    ctx.set_global_alpha(1.0);
}

fn draw_dot(ctx: &web::CanvasRenderingContext2d, x: f32, y: f32, r: f32, color: &Color, alpha: f32) {
    ctx.set_global_alpha(alpha as f64);
    ctx.begin_path();
    if ctx
        .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        .is_ok()
    {
        ctx.set_fill_style_str(&color.css(1.0));
        ctx.fill();
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_billboard(
    ctx: &web::CanvasRenderingContext2d,
    img: &web::HtmlImageElement,
    x: f32,
    y: f32,
    size: f32,
    scale: f32,
    rotation: f32,
    alpha: f32,
    theme: &Theme,
) {
    let s = size as f64;
    ctx.save();
    ctx.set_global_alpha(alpha as f64);
    let _ = ctx.translate(x as f64, y as f64);
    let _ = ctx.rotate(rotation as f64);

    ctx.set_shadow_color(&theme.secondary.css(0.5));
    ctx.set_shadow_blur(5.0 * scale as f64);

    // Frame: accent highlight when the billboard is close, plain white
    // otherwise, inset a few pixels around the image.
    if scale > 1.0 {
        ctx.set_fill_style_str(&theme.accent.css(1.0));
        ctx.fill_rect(-s / 2.0 - 4.0, -s / 2.0 - 4.0, s + 8.0, s + 8.0);
    } else {
        ctx.set_fill_style_str(&Color::WHITE.css(1.0));
        ctx.fill_rect(-s / 2.0 - 2.0, -s / 2.0 - 2.0, s + 4.0, s + 4.0);
    }

    if let Err(e) =
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, -s / 2.0, -s / 2.0, s, s)
    {
        // A malformed image must never abort the frame.
        log::debug!("billboard draw skipped: {:?}", e);
    }
    ctx.restore();
}

/// Central planet: glow halo, shaded sphere, and a bobbing heart billboard.
fn draw_planet(
    ctx: &web::CanvasRenderingContext2d,
    x: f32,
    y: f32,
    scale: f32,
    time: f32,
    theme: &Theme,
) {
    let (x, y) = (x as f64, y as f64);
    let size = (PLANET_RADIUS * scale) as f64;

    if let Ok(glow) = ctx.create_radial_gradient(x, y, size * 0.5, x, y, size * 2.0) {
        let _ = glow.add_color_stop(0.0, &theme.primary.css(0.8));
        let _ = glow.add_color_stop(1.0, &theme.primary.css(0.0));
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        if ctx.arc(x, y, size * 2.0, 0.0, std::f64::consts::TAU).is_ok() {
            ctx.fill();
        }
    }

    if let Ok(sphere) =
        ctx.create_radial_gradient(x - size * 0.3, y - size * 0.3, 0.0, x, y, size)
    {
        let _ = sphere.add_color_stop(0.0, &theme.primary.css(1.0));
        let _ = sphere.add_color_stop(1.0, &theme.dark.css(1.0));
        ctx.set_fill_style_canvas_gradient(&sphere);
        ctx.begin_path();
        if ctx.arc(x, y, size, 0.0, std::f64::consts::TAU).is_ok() {
            ctx.fill();
        }
    }

    // Heart billboard, bobbing gently above the sphere center.
    let h_size = size * 0.8;
    let bob = ((time * 2.0).sin() * 5.0 * scale) as f64;
    let hy = y - h_size * 0.3 + bob;

    ctx.save();
    ctx.set_fill_style_str(&theme.accent.css(1.0));
    trace_heart_path(ctx, x, hy, h_size, h_size, 0.0);
    ctx.fill();
    ctx.restore();

    if let Ok(grad) =
        ctx.create_radial_gradient(x - h_size * 0.3, hy - h_size * 0.5, 0.0, x, hy - h_size * 0.2, h_size)
    {
        let _ = grad.add_color_stop(0.0, &theme.secondary.css(1.0));
        let _ = grad.add_color_stop(0.4, &theme.accent.css(1.0));
        let _ = grad.add_color_stop(1.0, &theme.dark.css(1.0));
        ctx.save();
        ctx.set_fill_style_canvas_gradient(&grad);
        trace_heart_path(ctx, x, hy, h_size, h_size, 0.0);
        ctx.fill();
        ctx.restore();
    }
}

/// Classic two-bezier heart silhouette centered on `(x, y + y_off)`.
fn trace_heart_path(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    y_off: f64,
) {
    let top = h * 0.3 + y_off;
    ctx.begin_path();
    ctx.move_to(x, y + top);
    ctx.bezier_curve_to(
        x - w / 2.0,
        y - h * 0.2 + y_off,
        x - w,
        y + top,
        x,
        y + h + y_off,
    );
    ctx.bezier_curve_to(
        x + w,
        y + top,
        x + w / 2.0,
        y - h * 0.2 + y_off,
        x,
        y + top,
    );
    ctx.close_path();
}

/// Screen-space overlays, drawn after the projected field: shooting stars,
/// falling hearts, then firework sparks.
pub fn draw_overlays(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    let theme = &scene.theme;

    for s in &scene.shooting.stars {
        let tail_x = (s.x - s.angle.cos() * s.length) as f64;
        let tail_y = (s.y - s.angle.sin() * s.length) as f64;
        let (hx, hy) = (s.x as f64, s.y as f64);

        let grad = ctx.create_linear_gradient(hx, hy, tail_x, tail_y);
        let _ = grad.add_color_stop(0.0, &Color::WHITE.css(s.opacity));
        let _ = grad.add_color_stop(0.3, &theme.secondary.css(s.opacity * 0.78));
        let _ = grad.add_color_stop(1.0, &theme.secondary.css(0.0));
        ctx.set_stroke_style_canvas_gradient(&grad);
        ctx.set_line_width(2.0);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(hx, hy);
        ctx.line_to(tail_x, tail_y);
        ctx.stroke();

        // Bright glowing head.
        ctx.set_shadow_blur(10.0);
        ctx.set_shadow_color(&theme.accent.css(1.0));
        ctx.set_fill_style_str(&Color::WHITE.css(1.0));
        ctx.set_global_alpha(s.opacity as f64);
        ctx.begin_path();
        if ctx.arc(hx, hy, 1.5, 0.0, std::f64::consts::TAU).is_ok() {
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(1.0);
    }

    for h in &scene.hearts.hearts {
        let color = theme.sprite_color(h.shade);
        ctx.save();
        let _ = ctx.translate(h.x as f64, h.y as f64);
        let _ = ctx.rotate((h.rotation_deg as f64).to_radians());
        ctx.set_shadow_color(&color.css(1.0));
        ctx.set_shadow_blur(8.0);
        ctx.set_global_alpha(h.opacity as f64);
        let hs = h.size as f64;
        ctx.set_fill_style_str(&color.css(1.0));
        trace_heart_path(ctx, 0.0, 0.0, hs, hs, -hs * 0.4);
        ctx.fill();
        ctx.restore();
    }

    for sp in &scene.fireworks.sparks {
        let color = theme.sprite_color(sp.shade);
        ctx.set_global_alpha(sp.opacity as f64);
        ctx.begin_path();
        if ctx
            .arc(sp.x as f64, sp.y as f64, sp.size as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            ctx.set_fill_style_str(&color.css(1.0));
            ctx.fill();
        }
    }

    ctx.set_global_alpha(1.0);
    ctx.set_shadow_blur(0.0);
}
