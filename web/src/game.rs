use crate::surface::CellSurface;
use gloo::render::{request_animation_frame, AnimationFrame};
use tresraya_core as game;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    /// Pointer-down at offset coordinates relative to the board canvas.
    PointerDown(i32, i32),
    Reset,
    Restart,
    Frame,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Mark that opens the round.
    #[prop_or_default]
    pub start_mark: game::Mark,
}

/// Resolves a raw start-mark name, falling back to the default mark when the
/// name is unrecognized. Never fails.
pub(crate) fn resolve_start_mark(raw: Option<&str>) -> game::Mark {
    let Some(name) = raw else {
        return game::Mark::default();
    };
    name.parse().unwrap_or_else(|_| {
        log::warn!(
            "unrecognized start mark {:?}, defaulting to {:?}",
            name,
            game::Mark::default()
        );
        game::Mark::default()
    })
}

pub(crate) struct GameView {
    config: game::GridConfig,
    metrics: game::BoardMetrics,
    engine: game::BoardEngine,
    surfaces: Vec<CellSurface>,
    canvas_ref: NodeRef,
    board_ctx: Option<CanvasRenderingContext2d>,
    // render-loop handle; dropping it cancels the pending frame callback
    frame: Option<AnimationFrame>,
}

/// Builds one surface per cell in index order (y-major, matching
/// `GameView::surface_at`). A single failure discards the whole collection:
/// a partial vec would shift every later cell onto the wrong origin.
fn collect_surfaces<S, E: std::fmt::Debug>(
    config: &game::GridConfig,
    mut make: impl FnMut(game::Coord2) -> Result<S, E>,
) -> Vec<S> {
    let (cols, rows) = config.size;
    let mut surfaces = Vec::with_capacity(usize::from(config.total_cells()));
    for y in 0..rows {
        for x in 0..cols {
            match make((x, y)) {
                Ok(surface) => surfaces.push(surface),
                Err(err) => {
                    log::error!(
                        "could not create surface for cell ({}, {}), board will not render: {:?}",
                        x,
                        y,
                        err
                    );
                    return Vec::new();
                }
            }
        }
    }
    surfaces
}

impl GameView {
    fn build_surfaces(config: &game::GridConfig, metrics: &game::BoardMetrics) -> Vec<CellSurface> {
        collect_surfaces(config, |coords| {
            CellSurface::new(metrics.cell_origin(coords), metrics.cell_size)
        })
    }

    fn surface_at(&self, (x, y): game::Coord2) -> Option<&CellSurface> {
        let (cols, _) = self.config.size;
        self.surfaces
            .get(usize::from(y) * usize::from(cols) + usize::from(x))
    }

    /// Rebuilds the engine and every cell surface, and clears the shared
    /// canvas. Reset and restart are the same operation.
    fn init_board(&mut self, ctx: &Context<Self>, trigger: &str) {
        self.engine = game::BoardEngine::new(self.config, ctx.props().start_mark);
        self.surfaces = Self::build_surfaces(&self.config, &self.metrics);
        if let Some(board_ctx) = &self.board_ctx {
            let (width, height) = self.metrics.surface_size(&self.config);
            board_ctx.clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
        }
        log::info!("{} requested, board initialized", trigger);
    }

    fn place_mark(&mut self, coords: game::Coord2) -> bool {
        let outcome = match self.engine.place(coords) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("rejected pointer input at {:?}: {}", coords, err);
                return false;
            }
        };

        // repaint and re-render only when the board actually changed
        if !outcome.has_update() {
            log::warn!("cell {:?} has already been played", coords);
            return false;
        }

        if let Some(surface) = self.surface_at(coords) {
            surface.paint(self.engine.cell_at(coords));
        }
        log::debug!(
            "cell {:?} played, next up {:?}",
            coords,
            self.engine.active_mark()
        );
        if matches!(outcome, game::PlaceOutcome::Completed) {
            log::info!("round complete, all cells filled");
        }
        true
    }

    /// Composites every cell onto the shared canvas in index order,
    /// unconditionally.
    fn render_frame(&self) {
        let Some(board_ctx) = &self.board_ctx else {
            return;
        };
        for surface in &self.surfaces {
            surface.draw(board_ctx);
        }
    }

    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.frame = Some(request_animation_frame(move |_| {
            link.send_message(Msg::Frame)
        }));
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = game::GridConfig::default();
        let metrics = game::BoardMetrics::default();
        Self {
            engine: game::BoardEngine::new(config, ctx.props().start_mark),
            surfaces: Self::build_surfaces(&config, &metrics),
            config,
            metrics,
            canvas_ref: NodeRef::default(),
            board_ctx: None,
            frame: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerDown(x, y) => match self.metrics.hit_test(&self.config, x, y) {
                Some(coords) => self.place_mark(coords),
                None => {
                    log::info!("pointer down at ({}, {}) outside the playable area", x, y);
                    false
                }
            },
            Msg::Reset => {
                self.init_board(ctx, "reset");
                true
            }
            Msg::Restart => {
                self.init_board(ctx, "restart");
                true
            }
            Msg::Frame => {
                self.render_frame();
                self.schedule_frame(ctx);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let round_complete = self.engine.is_complete();
        let turn_label = if round_complete {
            "round complete".to_string()
        } else {
            format!("{} to play", self.engine.active_mark().glyph())
        };

        let onmousedown = ctx
            .link()
            .callback(|e: MouseEvent| Msg::PointerDown(e.offset_x(), e.offset_y()));
        let cb_reset = ctx.link().callback(|_| Msg::Reset);
        let cb_restart = ctx.link().callback(|_| Msg::Restart);

        html! {
            <div class="tresraya">
                <nav>
                    <aside>{ format!("{}/{}", self.engine.filled_count(), self.engine.total_cells()) }</aside>
                    <span>{ turn_label }</span>
                </nav>
                <canvas ref={self.canvas_ref.clone()} {onmousedown}/>
                <footer>
                    <button onclick={cb_reset}>{"Clear"}</button>
                    <button hidden={!round_complete} onclick={cb_restart}>{"Play again"}</button>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            log::error!("board canvas element missing");
            return;
        };
        let (width, height) = self.metrics.surface_size(&self.config);
        canvas.set_width(width);
        canvas.set_height(height);

        match canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(board_ctx) => self.board_ctx = Some(board_ctx),
                Err(err) => log::error!("unexpected 2d context type: {:?}", err),
            },
            Ok(None) => log::error!("board canvas has no 2d context"),
            Err(err) => log::error!("could not acquire 2d context: {:?}", err),
        }

        self.schedule_frame(ctx);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // stop the render loop instead of leaking a perpetual callback
        self.frame = None;
        log::debug!("render loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_mark_names_resolve_to_marks() {
        assert_eq!(resolve_start_mark(Some("x")), game::Mark::Cross);
        assert_eq!(resolve_start_mark(Some("O")), game::Mark::Nought);
    }

    #[test]
    fn missing_or_unknown_start_mark_degrades_to_the_default() {
        assert_eq!(resolve_start_mark(None), game::Mark::default());
        assert_eq!(resolve_start_mark(Some("triangle")), game::Mark::default());
    }

    #[test]
    fn surfaces_collect_in_index_order() {
        let config = game::GridConfig::default();

        let surfaces = collect_surfaces(&config, |coords| Ok::<_, ()>(coords));

        assert_eq!(surfaces.len(), 9);
        assert_eq!(surfaces[0], (0, 0));
        assert_eq!(surfaces[5], (2, 1));
        assert_eq!(surfaces[8], (2, 2));
    }

    #[test]
    fn one_failed_surface_discards_the_whole_collection() {
        let config = game::GridConfig::default();

        let surfaces = collect_surfaces(&config, |coords| {
            if coords == (1, 0) {
                Err("no 2d context")
            } else {
                Ok(coords)
            }
        });

        // never a partial board: later cells must not shift onto wrong origins
        assert!(surfaces.is_empty());
    }
}
