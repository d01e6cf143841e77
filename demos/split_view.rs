// Print the classified lattice, Pick's counts and the split segments of a
// polygon.
//
//   cargo run --example split_view -- [points.txt] [grid-size]
//
// The point file holds one `x,y` pair per line. Set RUST_LOG=debug (or trace)
// to see the engine's log output.
use lattice_picks::algorithms::{classify_grid, counts, split};
use lattice_picks::data::{Grid, Polygon};
use lattice_picks::DEFAULT_GRID_SIZE;

const DEFAULT_POLYGON: &str = "1,1\n6,2\n8,7\n3,8\n2,5";

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let mut args = std::env::args().skip(1);
  let text = match args.next() {
    Some(path) => std::fs::read_to_string(path)?,
    None => DEFAULT_POLYGON.to_string(),
  };
  let size = match args.next() {
    Some(size) => size.parse()?,
    None => DEFAULT_GRID_SIZE,
  };

  let grid = Grid::new(size)?;
  let polygon: Polygon = text.parse()?;
  polygon.validate()?;
  if let Err(err) = grid.check(&polygon) {
    log::warn!("{}, vertices off the grid are left out of the split", err);
  }

  print!("{}", classify_grid(&polygon, &grid));
  let picks = counts(&polygon, &grid);
  println!();
  println!("interior points: {}", picks.interior_count);
  println!("boundary points: {}", picks.boundary_count);
  println!("area:            {}", picks.area);
  println!("triangles:       {}", picks.triangle_count);

  let segments = split(&polygon, &grid);
  println!();
  println!("{} segments:", segments.len());
  for seg in &segments {
    println!("  {}", seg);
  }
  Ok(())
}
