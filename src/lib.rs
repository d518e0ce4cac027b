// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod raster;
pub mod render;
pub mod scene;
pub mod schedule;
pub mod time;

// External crate imports
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;

// Standard library imports
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub use config::{ClockConfig, Color, REDRAW_INTERVAL};
pub use error::ClockError;
pub use geometry::DialShape;
pub use layout::{measure, MeasureMode, MeasureSpec};
pub use raster::{load_font, Canvas};
pub use render::{build_frame, render};
pub use scene::{DrawCommand, DrawSurface, Scene, TextMetrics};
pub use schedule::RedrawSchedule;
pub use time::{FixedTime, LocalTime, SampledTime, TimeSource};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Updates a host can send to a running clock window.
///
/// Commands are applied on the window thread right before the next frame.
#[derive(Debug, Clone)]
pub enum ClockCommand {
    SetCircular(bool),
    ToggleCircular,
    SetConfig(Box<ClockConfig>),
}

/// Analog clock widget: configuration and shape that persist across frames.
#[derive(Debug, Clone, Default)]
pub struct AnalogClock {
    config: ClockConfig,
    circular: bool,
}

/// How the clock window is opened.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub title: String,
    pub width: MeasureSpec,
    pub height: MeasureSpec,
    /// Font for the numerals. Without one, numerals are not drawn.
    pub font_path: Option<PathBuf>,
    /// Fill for the area outside the dial.
    pub window_background: Color,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Clock".to_string(),
            width: MeasureSpec::exact(300),
            height: MeasureSpec::exact(300),
            font_path: None,
            window_background: Color::WHITE,
        }
    }
}

impl AnalogClock {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            circular: false,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Mutable access; changes show up on the next frame.
    pub fn config_mut(&mut self) -> &mut ClockConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: ClockConfig) {
        self.config = config;
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    pub fn shape(&self) -> DialShape {
        DialShape::from_circular(self.circular)
    }

    pub fn apply(&mut self, command: ClockCommand) {
        match command {
            ClockCommand::SetCircular(circular) => self.set_circular(circular),
            ClockCommand::ToggleCircular => self.circular = !self.circular,
            ClockCommand::SetConfig(config) => self.config = *config,
        }
    }

    /// Resolves the widget size from the host's constraints.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
        layout::measure(width, height)
    }

    /// Draws one frame at `time` onto `surface`.
    pub fn render_frame<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        width: u32,
        height: u32,
        time: SampledTime,
    ) {
        render::render(surface, width, height, &self.config, self.circular, time);
    }

    /// Rasterizes one frame into an RGBA image.
    pub fn rasterize(
        &self,
        width: u32,
        height: u32,
        time: SampledTime,
        font: Option<&Font<'static>>,
        background: Color,
    ) -> Result<image::RgbaImage, ClockError> {
        if width == 0 || height == 0 {
            return Err(ClockError::EmptyCanvas { width, height });
        }
        let mut frame = vec![0u8; width as usize * height as usize * 4];
        let mut canvas = Canvas::new(&mut frame, width as usize, height as usize).with_font(font);
        canvas.clear(background);
        self.render_frame(&mut canvas, width, height, time);
        image::RgbaImage::from_raw(width, height, frame)
            .ok_or(ClockError::EmptyCanvas { width, height })
    }

    /// Renders one frame and writes it to `path` as a PNG.
    pub fn snapshot(
        &self,
        width: u32,
        height: u32,
        time: SampledTime,
        font: Option<&Font<'static>>,
        background: Color,
        path: &Path,
    ) -> Result<(), ClockError> {
        let image = self.rasterize(width, height, time, font, background)?;
        image.save(path)?;
        log::info!(
            "wrote {width}x{height} snapshot for {:02}:{:02}:{:02} to {}",
            time.hour,
            time.minute,
            time.second,
            path.display()
        );
        Ok(())
    }

    /// Opens a window showing the local time until it is closed.
    pub fn show(&mut self, options: &WindowOptions) -> Result<(), ClockError> {
        self.run_window(options, &LocalTime, None)
    }

    /// Like [`AnalogClock::show`], applying commands from `receiver` between frames.
    pub fn show_with_commands(
        &mut self,
        options: &WindowOptions,
        receiver: Receiver<ClockCommand>,
    ) -> Result<(), ClockError> {
        self.run_window(options, &LocalTime, Some(receiver))
    }

    fn drain_commands(&mut self, receiver: &Receiver<ClockCommand>) {
        // Try to get every pending command without blocking
        while let Ok(command) = receiver.try_recv() {
            log::debug!("applying {command:?}");
            self.apply(command);
        }
    }

    fn run_window(
        &mut self,
        options: &WindowOptions,
        time_source: &dyn TimeSource,
        receiver: Option<Receiver<ClockCommand>>,
    ) -> Result<(), ClockError> {
        let font = options.font_path.as_deref().map(load_font).transpose()?;
        if font.is_none() {
            log::warn!("no font configured, numerals will not be drawn");
        }

        let (logical_width, logical_height) = self.measure(options.width, options.height);
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(
                logical_width.max(1) as f64,
                logical_height.max(1) as f64,
            ))
            .build(&event_loop)?;
        let window = Arc::new(window);

        let size = window.inner_size();
        let mut fb_width = size.width.max(1);
        let mut fb_height = size.height.max(1);
        log::info!(
            "clock window {logical_width}x{logical_height} (buffer {fb_width}x{fb_height}), circular: {}",
            self.circular
        );
        let surface_texture = SurfaceTexture::new(fb_width, fb_height, window.clone());
        let mut pixels = Pixels::new(fb_width, fb_height, surface_texture)?;

        let mut schedule = RedrawSchedule::new(REDRAW_INTERVAL);
        schedule.start(Instant::now());
        let mut failure: Option<ClockError> = None;

        event_loop.run(|event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    schedule.stop();
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    // Minimized windows report a zero size; keep the old buffer.
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    let resized = pixels
                        .resize_surface(new_size.width, new_size.height)
                        .and_then(|()| pixels.resize_buffer(new_size.width, new_size.height));
                    if let Err(err) = resized {
                        log::error!("resize to {}x{} failed: {err}", new_size.width, new_size.height);
                        failure = Some(err.into());
                        window_target.exit();
                        return;
                    }
                    fb_width = new_size.width;
                    fb_height = new_size.height;
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if let Some(ref receiver) = receiver {
                        self.drain_commands(receiver);
                    }

                    let now = time_source.now();
                    let mut canvas =
                        Canvas::new(pixels.frame_mut(), fb_width as usize, fb_height as usize)
                            .with_font(font.as_ref());
                    canvas.clear(options.window_background);
                    self.render_frame(&mut canvas, fb_width, fb_height, now);

                    if let Err(err) = pixels.render() {
                        log::error!("presenting frame failed: {err}");
                        failure = Some(err.into());
                        window_target.exit();
                        return;
                    }
                    schedule.frame_rendered(Instant::now());
                }
                _ => {}
            },
            Event::AboutToWait => {
                if schedule.take_due(Instant::now()) {
                    window.request_redraw();
                }
                match schedule.deadline() {
                    Some(deadline) => window_target.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => window_target.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
