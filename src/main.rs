use std::path::Path;
use std::process::ExitCode;

use diagram::Board;
use diagram::core::errors::report;
use diagram::render::{self, RenderError, Theme, TileSet};

const USAGE: &str = "usage: diagram <position> [tiles-dir] [output.png]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(position) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let tiles_dir = args.get(1).map_or("pics", String::as_str);
    let output = args.get(2).map_or("board.png", String::as_str);

    let board = match Board::from_fen(position) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err.report());
            return ExitCode::FAILURE;
        }
    };

    match draw(&board, Path::new(tiles_dir), Path::new(output)) {
        Ok(()) => {
            println!("{board}");
            println!("Wrote {output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

fn draw(board: &Board, tiles_dir: &Path, output: &Path) -> Result<(), RenderError> {
    let theme = Theme::CLASSIC;
    let tiles = TileSet::load(tiles_dir, theme.tile_size)?;
    let img = render::render(board, &tiles, &theme);
    render::save(&img, output)
}
