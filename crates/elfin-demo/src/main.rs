//! Headless demo: scripted pointer session over a few widgets.
//!
//! Run with `RUST_LOG=debug` to see the tracking protocol at work. An
//! optional argument names a JSON theme file.

use std::cell::RefCell;
use std::path::PathBuf;

use elfin_core::{ButtonKind, PointerEvent, RecordingCanvas, Surface, Theme, ThemeResult};
use elfin_widgets::{ExclusiveGroup, LatchingButton, Pickup, PickupValue, RoundBox, ToggleButton};
use kurbo::{Point, Rect};
use peniko::Color;

fn press(p: Point) -> PointerEvent {
    PointerEvent::Down {
        position: p,
        button: ButtonKind::Left,
        num_clicks: 1,
    }
}

fn release(p: Point) -> PointerEvent {
    PointerEvent::Up {
        position: p,
        button: ButtonKind::Left,
    }
}

fn moved(p: Point) -> PointerEvent {
    PointerEvent::Move { position: p }
}

fn load_theme() -> ThemeResult<Theme> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Theme::load(&path),
        None => Ok(Theme::default()),
    }
}

fn main() -> ThemeResult<()> {
    env_logger::init();
    log::info!("Starting Elfin demo");

    let theme = load_theme()?;
    let off = RoundBox::new(Color::from_rgba8(229, 231, 235, 255));
    let on = RoundBox::new(theme.indicator_color);

    let mut surface = Surface::new(theme);
    let pickup = surface.add(
        Rect::new(0.0, 0.0, 500.0, 200.0),
        Pickup::single().with_value(PickupValue::new(0.5, 0.0)),
    );
    let toggle = surface.add(
        Rect::new(0.0, 220.0, 120.0, 260.0),
        ToggleButton::layered(off, on).on_click(|value| log::info!("toggle clicked: {}", value)),
    );
    let first = surface.add(
        Rect::new(140.0, 220.0, 260.0, 260.0),
        LatchingButton::layered(off, on).on_click(|_| log::info!("first latched")),
    );
    let second = surface.add(
        Rect::new(280.0, 220.0, 400.0, 260.0),
        LatchingButton::layered(off, on).on_click(|_| log::info!("second latched")),
    );
    let mut group = ExclusiveGroup::new([first, second]);

    let canvas = RefCell::new(RecordingCanvas::new());
    let script = [
        // Slide the pickup to the right.
        moved(Point::new(250.0, 100.0)),
        press(Point::new(250.0, 100.0)),
        moved(Point::new(330.0, 100.0)),
        release(Point::new(330.0, 100.0)),
        // Toggle on, then a cancelled toggle.
        press(Point::new(60.0, 240.0)),
        release(Point::new(60.0, 240.0)),
        press(Point::new(60.0, 240.0)),
        moved(Point::new(60.0, 300.0)),
        release(Point::new(60.0, 300.0)),
        // Latch one button, then the other.
        press(Point::new(200.0, 240.0)),
        release(Point::new(200.0, 240.0)),
        press(Point::new(340.0, 240.0)),
        release(Point::new(340.0, 240.0)),
    ];

    for event in script {
        log::debug!("dispatching {:?}", event);
        if !surface.handle_pointer_event(&canvas, event) {
            log::debug!("event not handled");
        }
        if let Some(index) = group.update(&mut surface) {
            log::info!("group selection: element {}", index);
        }
    }

    surface.draw(&canvas);
    log::info!(
        "drew {} commands, {} refresh requests",
        canvas.borrow().commands().len(),
        surface.view().refresh_count()
    );

    log::info!(
        "pickup={:?} toggle={:?} first={:?} second={:?}",
        surface.value::<PickupValue>(pickup),
        surface.bool_value(toggle),
        surface.bool_value(first),
        surface.bool_value(second)
    );
    Ok(())
}
