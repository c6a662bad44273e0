//! Run the raycaster without a window: apply a string of key presses, then print what the actor sees.
use std::path::PathBuf;

use anyhow::{bail, Result};
use structopt::StructOpt;

use caster_tilemap::OccupancyGrid;
use caster_view::*;

/// Darkest to brightest.
const SHADES: &[u8] = b" .:-=+*#%@";

#[derive(StructOpt)]
struct Params {
    /// JSON array of rows of cells.  Without one, the actor stands in an empty 16x16 room.
    #[structopt(long = "--grid")]
    grid: Option<PathBuf>,

    /// JSON view config.  Missing fields take their defaults.
    #[structopt(long = "--config")]
    config: Option<PathBuf>,

    /// One tick per character: w/a/s/d to move, j/l to look, i/o to zoom, q/e to narrow or widen the view, `.` to
    /// stand still.
    #[structopt(long = "--keys", default_value = "")]
    keys: String,

    /// Seconds per tick.
    #[structopt(long = "--dt", default_value = "1.0")]
    dt: f64,

    #[structopt(long = "--columns", default_value = "80")]
    columns: usize,

    #[structopt(long = "--rows", default_value = "24")]
    rows: u32,
}

fn parse_keys(keys: &str) -> Result<Vec<TickInput>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let mut input = TickInput::default();
            match c {
                'w' => input.movement.forward = true,
                's' => input.movement.backward = true,
                'a' => input.movement.left = true,
                'd' => input.movement.right = true,
                'j' => input.look_left = true,
                'l' => input.look_right = true,
                'i' => input.zoom_in = true,
                'o' => input.zoom_out = true,
                'q' => input.shrink_fov = true,
                'e' => input.grow_fov = true,
                '.' => {}
                _ => bail!("Unknown key {:?}", c),
            }
            Ok(input)
        })
        .collect()
}

fn shade(brightness: u8) -> char {
    let index = brightness as usize * (SHADES.len() - 1) / 255;
    SHADES[index] as char
}

/// Draw a frame as text, one line per row of the surface.
fn render(frame: &Frame) -> Vec<String> {
    (0..frame.surface_height)
        .map(|row| {
            frame
                .columns
                .iter()
                .map(|c| {
                    let top = c.top_row(frame.surface_height);
                    if c.height > 0 && row >= top && row < top + c.height {
                        shade(c.brightness)
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

fn main() -> Result<()> {
    caster_logging::log_to_stderr();

    let params = Params::from_args();
    let grid = match params.grid.as_ref() {
        Some(path) => OccupancyGrid::load(path)?,
        None => OccupancyGrid::default_arena(),
    };
    let config = match params.config.as_ref() {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    let inputs = parse_keys(&params.keys)?;

    let mut sim = Simulation::new(&grid, config);
    log::info!(
        "Starting at {} in a {}x{} grid with {} colliders",
        sim.actor().position(),
        grid.width(),
        grid.height(),
        sim.colliders().len()
    );

    for input in inputs.iter() {
        sim.tick(input, params.dt);
    }

    let frame = sim.frame(params.columns, params.rows);
    for line in render(&frame) {
        println!("{}", line);
    }
    println!(
        "position={} heading={:.3} fov={:.3} view_distance={:.3}",
        sim.actor().position(),
        sim.actor().rotation(),
        sim.actor().fov(),
        sim.actor().view_distance()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn keys() {
        let inputs = parse_keys("w d.\nj").unwrap();
        assert_eq!(inputs.len(), 4);
        assert!(inputs[0].movement.forward);
        assert!(inputs[1].movement.right);
        assert!(inputs[2].is_idle());
        assert!(inputs[3].look_left);

        assert!(parse_keys("wx").is_err());
    }

    #[test]
    fn shades() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(255), '@');
    }

    #[test]
    fn render_centers_columns() {
        let frame = Frame {
            samples: vec![],
            columns: vec![
                Column::EMPTY,
                Column {
                    height: 2,
                    brightness: 255,
                },
            ],
            surface_height: 4,
        };
        assert_eq!(render(&frame), vec!["  ", " @", " @", "  "]);
    }
}
