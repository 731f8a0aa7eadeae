#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use window_icon::{set_icon, WindowTarget};

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().unwrap();
    let window = WindowBuilder::new().build(&event_loop).unwrap();
    window.set_title("Icon Preview");

    let argv0 = std::env::args().next().unwrap_or_default();
    set_icon(&argv0, &WindowTarget::new(&window));

    event_loop
        .run(move |event, elwt| {
            if let Event::WindowEvent {
                ref event,
                window_id,
            } = event
            {
                if window_id == window.id() {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    state: ElementState::Pressed,
                                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                                    ..
                                },
                            ..
                        } => elwt.exit(),
                        _ => {}
                    }
                }
            }
        })
        .unwrap();
}
