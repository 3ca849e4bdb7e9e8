use std::{collections::HashSet, fmt::Display};

use crate::{Error, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Start,
    Goal,
}

impl Tile {
    pub fn can_pass(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn symbol(&self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Tile::Open),
            '#' => Ok(Tile::Wall),
            'S' => Ok(Tile::Start),
            'G' => Ok(Tile::Goal),
            other => Err(Error::InvalidCharForMap(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Maze {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with(|_, tile| tile.symbol()))
    }
}

impl TryFrom<&str> for Maze {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut builder = MazeBuilder::new();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl Maze {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        if self.is_inside(pos) {
            self.tiles.get(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r() < self.row_n && pos.c() < self.col_n
    }

    pub fn locate_markers(&self) -> Result<(Position, Position), Error> {
        let mut start_pos: Option<Position> = None;
        let mut goal_pos: Option<Position> = None;
        for (ind, tile) in self.tiles.iter().enumerate() {
            let pos = Position::new(ind / self.col_n, ind % self.col_n);
            match tile {
                Tile::Start => {
                    if let Some(last_pos) = start_pos.as_ref() {
                        return Err(Error::MultipleStartPosition(last_pos.clone(), pos));
                    }

                    start_pos = Some(pos);
                }
                Tile::Goal => {
                    if let Some(last_pos) = goal_pos.as_ref() {
                        return Err(Error::MultipleGoalPosition(last_pos.clone(), pos));
                    }

                    goal_pos = Some(pos);
                }
                Tile::Open | Tile::Wall => (),
            }
        }

        let Some(start_pos) = start_pos else {
            return Err(Error::NoStartPosition);
        };
        let Some(goal_pos) = goal_pos else {
            return Err(Error::NoGoalPosition);
        };

        Ok((start_pos, goal_pos))
    }

    pub fn render_path(&self, path: &[Position]) -> String {
        let path_positions = path.iter().collect::<HashSet<_>>();
        self.render_with(|pos, tile| match tile {
            Tile::Open if path_positions.contains(pos) => '*',
            other => other.symbol(),
        })
    }

    // Open tiles on the path are drawn as `*`, other visited open tiles as `o`.
    pub fn render_visited(&self, visited: &HashSet<Position>, path: &[Position]) -> String {
        let path_positions = path.iter().collect::<HashSet<_>>();
        self.render_with(|pos, tile| match tile {
            Tile::Open if path_positions.contains(pos) => '*',
            Tile::Open if visited.contains(pos) => 'o',
            other => other.symbol(),
        })
    }

    fn render_with<F>(&self, symbol_of: F) -> String
    where
        F: Fn(&Position, &Tile) -> char,
    {
        (0..self.row_n)
            .map(|r| {
                (0..self.col_n)
                    .map(|c| {
                        let pos = Position::new(r, c);
                        let tile = &self.tiles[r * self.col_n + c];
                        symbol_of(&pos, tile).to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug)]
pub struct MazeBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    // Whitespace between symbols is ignored, so printed mazes can be read back.
    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let row_tiles = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Tile::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let this_col_n = row_tiles.len();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        self.tiles.extend(row_tiles);
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 && self.row_n > 0 => Ok(Maze {
                tiles: self.tiles,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptyMaze),
        }
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
