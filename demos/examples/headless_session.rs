// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a viewport through a scripted editing session without a window.
//!
//! Run with: `cargo run -p circuitry_demos --example headless_session`

use circuitry_demos::HostShell;
use circuitry_events::{Key, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent};
use circuitry_scene::SimpleScene;
use circuitry_viewport::{InputSink as _, Viewport};
use kurbo::{Point, Rect};

fn main() {
    let mut shell = HostShell::default();
    let mut viewport: Viewport<SimpleScene> = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));

    // A small schematic: three parts, two of them selected.
    let mut scene = SimpleScene::new();
    let resistor = scene.add_item(Rect::new(0.0, 0.0, 60.0, 20.0), Point::new(120.0, 80.0));
    let capacitor = scene.add_item(Rect::new(0.0, 0.0, 20.0, 40.0), Point::new(300.0, 60.0));
    let _ic = scene.add_item(Rect::new(0.0, 0.0, 80.0, 80.0), Point::new(500.0, 200.0));
    scene.select(resistor);
    scene.select(capacitor);
    viewport.set_scene(Some(scene));
    shell.apply(viewport.take_notices());

    // Zoom in twice around the pointer, then pan with the middle button.
    let pointer = Point::new(400.0, 300.0);
    let _ = viewport.pointer_move(&PointerEvent::moved(pointer));
    let _ = viewport.wheel(&WheelEvent::new(pointer, 1.0, Modifiers::CTRL));
    let _ = viewport.wheel(&WheelEvent::new(pointer, 1.0, Modifiers::CTRL));

    let _ = viewport.pointer_down(&PointerEvent::button(pointer, PointerButton::Middle));
    let _ = viewport.pointer_move(&PointerEvent::moved(Point::new(340.0, 280.0)));
    let _ = viewport.pointer_up(&PointerEvent::button(
        Point::new(340.0, 280.0),
        PointerButton::Middle,
    ));
    shell.apply(viewport.take_notices());
    println!(
        "after zoom+pan: zoom={:.3} visible={:?}",
        viewport.zoom(),
        viewport.visible_scene_rect()
    );

    // Delete the selection, then fit what's left into view.
    let _ = viewport.key_down(&KeyEvent::plain(Key::Delete));
    viewport.fit_all();
    shell.apply(viewport.take_notices());

    let scene = viewport.take_scene().expect("scene is attached");
    println!("commands pushed: {:?}", scene.commands());
    println!(
        "host shell: cursor={:?} zoom={:?} scene_rect={:?}",
        shell.cursor, shell.zoom, shell.scene_rect
    );
}
