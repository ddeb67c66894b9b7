//! Terminal driver: parse dimensions, randomize, then draw/sleep/step
//! until the simulation stalls or dies out.

use std::io::{self, Write};
use std::time::Duration;
use std::{env, process, thread};

use rust_life::{render_frame, SimRng, Simulation};

/// Delay between frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Clear the whole terminal.
const CLEAR_TERM: &str = "\x1b[2J";

/// Move the cursor to (0, 0) to redraw over the previous frame.
const RESET_CURSOR: &str = "\x1b[H";

/// Parse `<width> <height>` from the process arguments.
fn parse_args() -> Option<(usize, usize)> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 2 {
        return None;
    }

    let width = args[0].parse().ok()?;
    let height = args[1].parse().ok()?;
    Some((width, height))
}

fn main() {
    let Some((width, height)) = parse_args() else {
        eprintln!("Usage: life <width> <height>");
        process::exit(1);
    };

    let mut sim = Simulation::new(width, height);
    sim.randomize(&mut SimRng::from_entropy());

    let mut stdout = io::stdout();
    let _ = write!(stdout, "{CLEAR_TERM}");

    loop {
        let _ = write!(stdout, "{RESET_CURSOR}{}", render_frame(&sim));
        let _ = stdout.flush();

        thread::sleep(FRAME_INTERVAL);

        if sim.step().is_terminal() {
            break;
        }
    }
}
