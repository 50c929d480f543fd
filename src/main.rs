use dieview::{Canvas, CanvasRenderer, Color, DieView, DieViewError, Point};
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use structopt::StructOpt;
use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

/// Space between the die face and the window edge.
const MARGIN: u32 = 20;

#[derive(Debug, StructOpt)]
#[structopt(name = "dieview", about = "Shows a single die face.")]
struct Opt {
    /// Face value to show, 1 to 6.
    #[structopt(short, long, default_value = "1")]
    value: u8,

    /// Pip color: a name like "red" or a #rrggbb hex code.
    #[structopt(short, long, default_value = "black")]
    color: Color,

    /// Edge length of the die face in pixels.
    #[structopt(short, long, default_value = "120")]
    size: u32,
}

#[derive(Error, Debug)]
enum Error {
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel buffer failed: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("die size {0} is zero or too large for the window")]
    Size(u32),

    #[error(transparent)]
    DieView(#[from] DieViewError),
}

/// Edge length of the square window holding a die face of `size` pixels.
fn window_extent(size: u32) -> Result<u32, Error> {
    if size == 0 {
        return Err(Error::Size(size));
    }
    size.checked_add(2 * MARGIN).ok_or(Error::Size(size))
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let opt = Opt::from_args();
    let extent = window_extent(opt.size)?;
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(extent, extent);
        WindowBuilder::new()
            .with_title("Die")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(extent, extent, surface_texture)?
    };

    let mut canvas = Canvas::new(extent, extent);
    let center = Point::new(extent as f32 / 2.0, extent as f32 / 2.0);
    let mut die = DieView::new(&mut canvas, center, opt.size as f32)?;
    die.set_color(&mut canvas, opt.color);
    die.set_value(&mut canvas, opt.value)?;
    info!("showing {} in {:?}", die.value(), die.foreground());
    let renderer = CanvasRenderer;

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            renderer.draw(&canvas, pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            window.request_redraw();
        }
    })
}
