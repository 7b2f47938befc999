use std::sync::Arc;
use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use sparkfield_core::{FieldConfig, SparkField};

mod gpu;

const SEED_ENV: &str = "SPARKFIELD_SEED";

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("[native] ignoring {SEED_ENV}={raw:?}; not a u64");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Fire sparks (native)")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
            .build(&event_loop)?,
    );

    let size = window.inner_size();
    let config = FieldConfig {
        seed: seed_from_env(),
        ..FieldConfig::default()
    };
    // A GPU failure leaves the field inert; the window stays up regardless.
    let surface = pollster::block_on(gpu::GpuSurface::new(window.clone()));
    let mut field = SparkField::with_config(size.width as f32, size.height as f32, config, surface);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => field.resize(size.width as f32, size.height as f32),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            field.stop();
            elwt.exit();
        }
        Event::WindowEvent {
            event: WindowEvent::Occluded(hidden),
            ..
        } => {
            if hidden {
                field.pause();
            } else {
                field.resume();
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32();
            last_frame = now;
            field.tick(dt_sec);
            if field.is_active() {
                window.request_redraw();
            }
        }
        Event::LoopExiting => {
            let stats = field.stats();
            log::info!(
                "[native] frames={} spawned={} cycles={} dropped={}",
                stats.frames,
                stats.spawned,
                stats.completed_cycles,
                stats.dropped_at_capacity
            );
        }
        _ => {}
    })?;
    Ok(())
}
