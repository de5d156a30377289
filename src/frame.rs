use crate::core::scene::{self, SceneOptions};
use crate::core::scheduler::RedrawScheduler;
use crate::core::{Camera, Viewport};
use crate::dom;
use crate::overlay;
use crate::render::GlState;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{self as web, WebGl2RenderingContext as Gl};

/// All mutable application state. Shared as `Rc<RefCell<App>>` between the
/// event handlers and the animation-frame callback; only ever borrowed for
/// the length of one callback.
pub struct App {
    pub camera: Camera,
    pub viewport: Viewport,
    pub options: SceneOptions,
    pub scheduler: RedrawScheduler,
    /// Context handle; survives loss and is reused to rebuild `gpu`.
    pub context: Gl,
    /// `None` while the context is lost.
    pub gpu: Option<GlState>,
    rng: StdRng,
}

impl App {
    pub fn new(context: Gl, gpu: GlState, viewport: Viewport) -> Self {
        Self {
            camera: Camera::default(),
            viewport,
            options: SceneOptions::default(),
            scheduler: RedrawScheduler::new(),
            context,
            gpu: Some(gpu),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn frame(&mut self) {
        if !self.scheduler.begin_frame() {
            return;
        }
        let Some(gpu) = &self.gpu else {
            log::debug!("[frame] skipped, no GL context");
            return;
        };
        let started = Instant::now();
        let view_projection = self.camera.view_projection(self.viewport.aspect());
        let requests = scene::build_draw_list(&mut self.rng, self.options);
        gpu.render(view_projection, self.viewport, &requests);
        log::debug!(
            "[frame] pass #{} {} draws {}x{} in {:?}",
            self.scheduler.frames_rendered(),
            requests.len(),
            self.viewport.width,
            self.viewport.height,
            started.elapsed()
        );
        if let Some(document) = dom::window_document() {
            overlay::update_hud(&document, &self.camera);
        }
    }
}

/// Handle for scheduling render-on-change passes.
///
/// Owns the one animation-frame closure. Cloned into every event handler.
#[derive(Clone)]
pub struct Redraw {
    app: Rc<RefCell<App>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Redraw {
    pub fn new(app: Rc<RefCell<App>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let app_tick = app.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            app_tick.borrow_mut().frame();
        }) as Box<dyn FnMut()>));
        Self { app, tick }
    }

    pub fn app(&self) -> &Rc<RefCell<App>> {
        &self.app
    }

    /// Mutate the app, then schedule a redraw.
    pub fn update(&self, f: impl FnOnce(&mut App)) {
        f(&mut self.app.borrow_mut());
        self.request();
    }

    /// Ask for a pass on the next display refresh. Requests made while one
    /// is already outstanding are coalesced.
    pub fn request(&self) {
        let mut app = self.app.borrow_mut();
        if !app.scheduler.request() {
            return;
        }
        let tick = self.tick.borrow();
        let (Some(window), Some(cb)) = (web::window(), tick.as_ref()) else {
            app.scheduler.cancel();
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => app.scheduler.frame_requested(handle),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                app.scheduler.cancel();
            }
        }
    }

    /// Withdraw the pending pass, if any.
    pub fn cancel(&self) {
        let handle = self.app.borrow_mut().scheduler.cancel();
        if let (Some(handle), Some(window)) = (handle, web::window()) {
            _ = window.cancel_animation_frame(handle);
            log::debug!("[frame] cancelled frame {}", handle);
        }
    }
}
