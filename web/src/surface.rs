use crate::theme::Theme;
use tresraya_core as game;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Private drawable surface for one cell.
///
/// The offscreen canvas acts as the cached image: it is repainted only when
/// the cell changes state and composited onto the shared board canvas every
/// frame.
pub(crate) struct CellSurface {
    origin: (game::Px, game::Px),
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: f64,
}

impl CellSurface {
    pub(crate) fn new(origin: (game::Px, game::Px), cell_size: game::Px) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = gloo::utils::document()
            .create_element("canvas")?
            .dyn_into()?;
        canvas.set_width(cell_size);
        canvas.set_height(cell_size);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        ctx.set_fill_style_str(Theme::BACKGROUND);
        ctx.set_stroke_style_str(Theme::STROKE);
        ctx.set_line_width(Theme::LINE_WIDTH);
        ctx.set_line_cap(Theme::LINE_CAP);

        let surface = Self {
            origin,
            canvas,
            ctx,
            size: f64::from(cell_size),
        };
        surface.paint(game::CellState::Empty);
        Ok(surface)
    }

    /// Repaints the private surface for `state`. `Empty` blanks the cell,
    /// which is how construction and reset paint the background.
    pub(crate) fn paint(&self, state: game::CellState) {
        self.ctx.fill_rect(0.0, 0.0, self.size, self.size);

        let Some(mark) = state.mark() else {
            return;
        };

        self.ctx.begin_path();
        match mark {
            game::Mark::Nought => {
                let center = self.size / 2.0;
                if let Err(err) = self.ctx.arc(
                    center,
                    center,
                    Theme::NOUGHT_RADIUS,
                    0.0,
                    std::f64::consts::TAU,
                ) {
                    log::error!("failed to trace nought: {:?}", err);
                    return;
                }
            }
            game::Mark::Cross => {
                let near = Theme::CROSS_INSET;
                let far = self.size - Theme::CROSS_INSET;
                self.ctx.move_to(near, near);
                self.ctx.line_to(far, far);
                self.ctx.move_to(far, near);
                self.ctx.line_to(near, far);
            }
        }
        self.ctx.stroke();
    }

    /// Composites the cached surface at its recorded origin. Runs every frame
    /// whether or not the cell changed since the previous one.
    pub(crate) fn draw(&self, board_ctx: &CanvasRenderingContext2d) {
        if let Err(err) = board_ctx.draw_image_with_html_canvas_element(
            &self.canvas,
            f64::from(self.origin.0),
            f64::from(self.origin.1),
        ) {
            log::error!("failed to composite cell surface: {:?}", err);
        }
    }
}
