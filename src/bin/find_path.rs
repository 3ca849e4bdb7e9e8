use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use maze_path::{search, CLIArgs, Maze};

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let maze = if let Some(input_path) = args.input_path.as_ref() {
        maze_path::read_maze(input_path).with_context(|| {
            format!(
                "Failed to read maze from given file({}).",
                input_path.display()
            )
        })?
    } else {
        Maze::try_from(maze_path::SAMPLE_MAZE)
            .with_context(|| "Failed to parse built-in sample maze.")?
    };

    let (start_pos, goal_pos) = maze
        .locate_markers()
        .with_context(|| "Failed to locate start and goal in given maze.")?;
    debug!(
        "Search in {}x{} maze from {} to {}.",
        maze.row_n(),
        maze.col_n(),
        start_pos,
        goal_pos
    );

    println!("{}", maze);
    let outcome = search::search_maze(&maze, &start_pos, &goal_pos);
    debug!("Search reached {} cell(s).", outcome.visited.len());
    if let Some(path) = outcome.path.as_ref() {
        debug!("Found path through {} cell(s).", path.len());
        let path_text = path
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("Shortest path: {}", path_text);
        if args.show_path {
            println!();
            println!("{}", maze.render_path(path));
        }
    } else {
        println!("No path found.");
    }

    if args.show_visited {
        let path = outcome.path.as_deref().unwrap_or(&[]);
        println!();
        println!("{}", maze.render_visited(&outcome.visited, path));
    }

    Ok(())
}
