//! Text rendering of simulation frames.
//!
//! Rendering is a pure string-producing function so it can be tested
//! without a terminal. Cursor control (clear screen, home) belongs to
//! the driver, not here.

use crate::sim::Simulation;

/// Glyph for a living cell.
const ALIVE: char = 'o';

/// Glyph for a dead cell.
const DEAD: char = ' ';

/// Render one frame of the simulation as text.
///
/// One line per grid row, top to bottom, `'o'` for alive and a space
/// for dead, followed by a vertical-tab separator and a status line:
///
/// ```text
/// width: W, height: H, iteration: I
/// ```
#[must_use]
pub fn render_frame(sim: &Simulation) -> String {
    let width = sim.width();
    let height = sim.height();

    let mut out = String::with_capacity((width + 1) * height + 48);

    for y in 0..height {
        for x in 0..width {
            out.push(if sim.grid().get(x, y) { ALIVE } else { DEAD });
        }
        out.push('\n');
    }

    out.push('\x0B');
    out.push_str(&format!(
        "width: {}, height: {}, iteration: {}\n",
        width,
        height,
        sim.iteration()
    ));

    out
}
