use anyhow::{Context, Result};
use clap::Parser;
use sbl_math::math::common::degrees_to_radians;
use sbl_math::math::{Quaternion, Rectangle, UniformTransform, Vector3};
use sbl_math::render::{Camera, ObjectConstants, ViewConstants};
use serde::Serialize;
use std::io::Write;

#[derive(Parser)]
#[command(name = "sbl-demo")]
#[command(about = "Headless frame loop over the sbl-math transform pipeline", long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(short, long, default_value = "120")]
    frames: u32,

    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: i32,

    /// Viewport height in pixels
    #[arg(long, default_value = "720")]
    height: i32,

    /// Camera yaw per frame, in degrees
    #[arg(long, default_value = "0.5")]
    yaw_step: f32,

    /// Print each frame's constant blocks as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    view: &'a ViewConstants,
    object: &'a ObjectConstants,
}

struct App {
    camera: Camera,
    earth: UniformTransform,
    viewport: Rectangle,
    spin: Quaternion,
    yaw_step: f32,
    frame_num: u32,
}

impl App {
    fn new(cli: &Cli) -> Self {
        let viewport = Rectangle::new(0, 0, cli.width, cli.height);
        let mut camera = Camera::default();
        camera.set_aspect(viewport.width() as f32 / viewport.height() as f32);

        Self {
            camera,
            earth: UniformTransform::from_translation(Vector3::new(0.0, 0.0, 1.0)),
            viewport,
            spin: Quaternion::axis_angle(Vector3::UP, degrees_to_radians(1.0)),
            yaw_step: degrees_to_radians(cli.yaw_step),
            frame_num: 0,
        }
    }

    fn update(&mut self) -> (ViewConstants, ObjectConstants) {
        self.earth.rotation = (self.spin * self.earth.rotation).normalized();
        self.camera.rotate(self.yaw_step, 0.0);

        let view = ViewConstants::new(&self.camera, self.frame_num);
        let object = ObjectConstants::new(&self.camera, &self.earth);

        self.frame_num += 1;
        (view, object)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.width <= 0 || cli.height <= 0 {
        anyhow::bail!("viewport must be non-empty, got {}x{}", cli.width, cli.height);
    }

    let mut app = App::new(&cli);
    log::info!(
        "simulating {} frames at {}x{}",
        cli.frames,
        app.viewport.width(),
        app.viewport.height()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..cli.frames {
        let (view, object) = app.update();
        if cli.json {
            serde_json::to_writer(&mut out, &FrameRecord { view: &view, object: &object })
                .context("failed to serialize frame constants")?;
            writeln!(out).context("failed to write frame record")?;
        }
    }

    let center = app.earth.build_world_transform_matrix() * Vector3::ZERO;
    log::info!(
        "done after {} frames; camera forward {:?}, object center {:?}",
        app.frame_num,
        app.camera.forward,
        center
    );
    Ok(())
}
