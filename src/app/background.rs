use std::f64::consts::TAU;

use leptos::{ev, html, prelude::*};
use leptos_use::use_raf_fn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::orbs::{OrbField, OrbSprite, ORBS};

fn window_size() -> Option<(f64, f64)> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    frame: &[OrbSprite],
    (width, height): (f64, f64),
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    for orb in frame {
        let gradient = ctx.create_radial_gradient(orb.x, orb.y, 0.0, orb.x, orb.y, orb.radius)?;
        for (offset, color) in &orb.stops {
            gradient.add_color_stop(*offset, color)?;
        }
        ctx.begin_path();
        ctx.arc(orb.x, orb.y, orb.radius, 0.0, TAU)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
    Ok(())
}

/// Full-viewport canvas of slowly drifting gradient orbs, drawn behind the page.
#[component]
pub fn OrbBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<OrbField>);

    let fit_canvas = move || {
        let (Some(canvas), Some((width, height))) = (canvas_ref.get_untracked(), window_size())
        else {
            return;
        };
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.update_value(|f| {
            f.get_or_insert_with(|| OrbField::new(&ORBS, width, height))
                .resize(width, height)
        });
    };

    Effect::new(move |_| {
        fit_canvas();
        let handle = window_event_listener(ev::resize, move |_| fit_canvas());
        on_cleanup(move || handle.remove());
    });

    use_raf_fn(move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let mut next = None;
        field.update_value(|f| next = f.as_mut().map(|f| (f.size(), f.step())));
        let Some((size, frame)) = next else {
            return;
        };
        if let Err(err) = context_2d(&canvas).and_then(|ctx| draw_frame(&ctx, &frame, size)) {
            log::debug!("skipping background frame: {err:?}");
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class="fixed inset-0 w-full h-full pointer-events-none z-0"
        ></canvas>
    }
}
