//! Fade Demo
//!
//! Fades a panel out, chains a slide from its completion callback, and
//! prints the widget state every simulated frame.
//!
//! Run with: RUST_LOG=swish_animation=debug cargo run -p swish_animation --example fade

use std::cell::RefCell;
use std::rc::Rc;

use swish_animation::{Easing, SchedulerConfig, TweenPreset, TweenScheduler};
use swish_core::{Vec2, Widget};

const FRAME: f32 = 1.0 / 30.0;

fn main() -> swish_animation::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut scheduler = TweenScheduler::new(SchedulerConfig::frame_paced());
    scheduler.startup();

    let panel = Rc::new(RefCell::new(Widget::new("panel")));

    scheduler
        .create(&panel, 0.5, 0.1, false)?
        .opacity(0.2)
        .easing(Easing::OutQuad)
        .on_start(|_, _| tracing::info!("fade started"))
        .on_complete(|scheduler, target| {
            tracing::info!("fade finished, sliding");
            let slide = TweenPreset::slide_to(Vec2::new(120.0, 0.0), 0.4);
            if let Err(err) = scheduler.create_from_preset(target, &slide) {
                tracing::warn!("could not chain slide: {}", err);
            }
        });

    let mut frame = 0;
    loop {
        scheduler.tick(FRAME);
        frame += 1;

        let widget = panel.borrow();
        println!(
            "frame {:>3}  opacity {:.3}  translation ({:.1}, {:.1})",
            frame,
            widget.render_opacity,
            widget.render_transform.translation.x,
            widget.render_transform.translation.y,
        );

        if scheduler.active_count() == 0 && scheduler.pending_count() == 0 {
            break;
        }
    }

    scheduler.shutdown();
    Ok(())
}
