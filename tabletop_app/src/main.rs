//! Tabletop scene viewer
//!
//! Opens a window and draws the static tabletop scene every frame until the
//! window is closed or Escape is pressed. An optional TOML config file can be
//! passed as the first argument.

use std::path::Path;

use glfw::{Action, Key, WindowEvent};
use tabletop_engine::core::ConfigError;
use tabletop_engine::foundation::logging;
use tabletop_engine::prelude::*;
use tabletop_engine::render::opengl::{ShaderError, WindowError};
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(#[from] WindowError),

    #[error("shader error: {0}")]
    Shader(#[from] ShaderError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

type Scene = SceneManager<GlShaderProgram, GlTextureBackend, GlShapeMeshes>;

/// Fields drop in declaration order: the scene releases its GL objects while
/// the window still owns a live context.
struct TabletopApp {
    scene: Scene,
    camera: Camera,
    clear_color: Vec4,
    window: GlWindow,
}

impl TabletopApp {
    fn new(config: &TabletopConfig) -> Result<Self, AppError> {
        let window = GlWindow::new(&config.window)?;
        let gl = window.gl();

        let shader = GlShaderProgram::scene(gl.clone())?;
        shader.use_program();

        let mut scene = SceneManager::new(shader, GlTextureBackend::new(gl.clone()), GlShapeMeshes::new(gl));
        scene.prepare_scene(&config.assets.textures_dir)?;
        log::info!(
            "Scene ready: {} objects, {} textures, {} materials",
            scene.objects().len(),
            scene.textures().len(),
            scene.materials().len()
        );

        let (width, height) = window.get_framebuffer_size();
        let mut camera = Camera::from_config(&config.camera, 1.0);
        camera.set_aspect_ratio(width, height);

        Ok(Self {
            scene,
            camera,
            clear_color: Vec4::from(config.engine.clear_color),
            window,
        })
    }

    fn run(&mut self) -> Result<(), AppError> {
        while !self.window.should_close() {
            self.window.poll_events();

            let events: Vec<_> = self.window.flush_events().map(|(_, event)| event).collect();
            for event in events {
                self.handle_event(event);
            }

            self.window.begin_frame(self.clear_color);
            self.camera.apply(self.scene.uniforms_mut());
            self.scene.render_scene()?;
            self.window.swap_buffers();
        }

        self.scene.release_textures();
        log::info!("Window closed");
        Ok(())
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                self.window.set_should_close(true);
            }
            WindowEvent::FramebufferSize(width, height) => {
                self.camera.set_aspect_ratio(width.max(0) as u32, height.max(0) as u32);
            }
            _ => {}
        }
    }
}

fn load_config() -> Result<TabletopConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => TabletopConfig::load_from_file(Path::new(&path))?,
        None => TabletopConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting tabletop scene");
    let mut app = TabletopApp::new(&config)?;
    app.run()?;
    Ok(())
}
