use paintrig_engine::controls::{SceneContext, SceneMode};
use paintrig_engine::coords::Viewport;
use paintrig_engine::core::{App, AppControl, FrameCtx};
use paintrig_engine::input::{Bindings, InputEvent, InputFrame, InputState, Intent, WheelSteps};
use paintrig_engine::render::GpuBackend;
use paintrig_engine::scene::Scene;
use paintrig_engine::status::{self, SHAPE_COUNT_TARGET, SIDE_COUNT_TARGET, StatusBoard};
use paintrig_engine::time::FrameStats;

/// Interactive studio: input → commands → state; every redraw renders the
/// whole scene from state.
pub struct Studio {
    scene: Scene,
    ctx: SceneContext,
    bindings: Bindings,
    wheel: WheelSteps,
    backend: GpuBackend,
    board: StatusBoard,
    stats: FrameStats,
    dirty: bool,
}

impl Studio {
    pub fn new(scene: Scene, ctx: SceneContext) -> Self {
        Self {
            scene,
            ctx,
            bindings: Bindings::default(),
            wheel: WheelSteps::default(),
            backend: GpuBackend::new(),
            board: StatusBoard::with_targets([SHAPE_COUNT_TARGET, SIDE_COUNT_TARGET]),
            stats: FrameStats::default(),
            dirty: true,
        }
    }

    fn animating(&self) -> bool {
        self.ctx.state.mode == SceneMode::Figure && self.ctx.state.pose.any_animated()
    }

    fn dispatch(&mut self, intents: Vec<Intent>) -> AppControl {
        for intent in intents {
            match intent {
                Intent::Quit => return AppControl::Exit,
                Intent::Apply(command) => match self.ctx.apply(command) {
                    Ok(redraw) => self.dirty |= redraw,
                    Err(err) => log::warn!("ignored input: {err}"),
                },
            }
        }
        AppControl::Continue
    }
}

impl App for Studio {
    fn on_input(&mut self, event: &InputEvent, input: &InputState, viewport: Viewport) -> AppControl {
        let intents = self.bindings.intents(event, input, viewport, &self.ctx.state);
        self.dispatch(intents)
    }

    fn on_input_frame(&mut self, frame: &InputFrame) -> AppControl {
        let intents = self.bindings.frame_intents(frame, &mut self.wheel, &self.ctx.state);
        self.dispatch(intents)
    }

    fn wants_redraw(&self) -> bool {
        self.dirty || self.animating()
    }

    fn on_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        self.ctx.advance(frame.time.elapsed);
        self.stats.push(frame.time.dt);

        let report = self.scene.render(&self.ctx, &mut self.backend);

        let backend = &mut self.backend;
        let control = frame.render(|rctx, target| backend.flush(rctx, target));

        status::report(&report, &self.ctx.state, &mut self.board);
        frame.window.set_title(&format!(
            "paintrig [{}] {}",
            self.ctx.state.mode.label(),
            self.board.line()
        ));

        if frame.time.frame_index % 120 == 0 {
            log::debug!("average frame rate {:.1} fps", self.stats.fps());
        }

        self.dirty = false;
        control
    }
}
