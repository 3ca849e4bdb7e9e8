use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use log::{debug, trace};

use crate::{Direction, Maze, Position};

pub fn manhattan_distance(a: &Position, b: &Position) -> usize {
    a.r().abs_diff(b.r()) + a.c().abs_diff(b.c())
}

// Derived ordering compares f_score first, then position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SearchNode {
    f_score: usize,
    pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Vec<Position>>,
    pub visited: HashSet<Position>, // Every position that got a g-score, start included.
}

pub fn find_shortest_path(
    maze: &Maze,
    start: &Position,
    goal: &Position,
) -> Option<Vec<Position>> {
    search_maze(maze, start, goal).path
}

// Queue entries are only hints, a position may be queued several times and the g-score map
// holds the best known cost. Entries worse than the recorded f-score are skipped when popped.
pub fn search_maze(maze: &Maze, start: &Position, goal: &Position) -> SearchOutcome {
    if !maze.tile(start).is_some_and(|tile| tile.can_pass())
        || !maze.tile(goal).is_some_and(|tile| tile.can_pass())
    {
        return SearchOutcome {
            path: None,
            visited: HashSet::new(),
        };
    }

    let start_f_score = manhattan_distance(start, goal);
    let mut open_nodes = BinaryHeap::from([Reverse(SearchNode {
        f_score: start_f_score,
        pos: start.clone(),
    })]);
    let mut came_from = HashMap::new();
    let mut g_scores = HashMap::from([(start.clone(), 0usize)]);
    let mut f_scores = HashMap::from([(start.clone(), start_f_score)]);
    let mut expanded_n = 0usize;
    let mut path = None;
    while let Some(Reverse(cur_node)) = open_nodes.pop() {
        if cur_node.pos == *goal {
            debug!(
                "Reached goal {} after expanding {} node(s), cost {}.",
                goal,
                expanded_n,
                g_scores.get(goal).copied().unwrap_or(0)
            );
            path = reconstruct_path(&came_from, start, goal);
            break;
        }

        if f_scores
            .get(&cur_node.pos)
            .is_some_and(|best_f_score| cur_node.f_score > *best_f_score)
        {
            continue;
        }

        let Some(cur_g_score) = g_scores.get(&cur_node.pos).copied() else {
            continue;
        };
        expanded_n += 1;
        trace!(
            "Expand {} (g = {}, f = {}).",
            cur_node.pos,
            cur_g_score,
            cur_node.f_score
        );
        for next_pos in Direction::all_dirs()
            .iter()
            .flat_map(|dir| cur_node.pos.neighbor(*dir))
            .filter(|pos| maze.tile(pos).is_some_and(|tile| tile.can_pass()))
        {
            let tentative_g_score = cur_g_score + 1;
            if g_scores
                .get(&next_pos)
                .map(|g_score| tentative_g_score < *g_score)
                .unwrap_or(true)
            {
                let next_f_score = tentative_g_score + manhattan_distance(&next_pos, goal);
                came_from.insert(next_pos.clone(), cur_node.pos.clone());
                g_scores.insert(next_pos.clone(), tentative_g_score);
                f_scores.insert(next_pos.clone(), next_f_score);
                open_nodes.push(Reverse(SearchNode {
                    f_score: next_f_score,
                    pos: next_pos,
                }));
            }
        }
    }

    if path.is_none() {
        debug!(
            "No path from {} to {} after expanding {} node(s).",
            start, goal, expanded_n
        );
    }

    SearchOutcome {
        path,
        visited: g_scores.into_keys().collect(),
    }
}

pub fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: &Position,
    goal: &Position,
) -> Option<Vec<Position>> {
    let mut path = vec![goal.clone()];
    let mut cur_pos = goal;
    while cur_pos != start {
        cur_pos = came_from.get(cur_pos)?;
        path.push(cur_pos.clone());
    }
    path.reverse();

    Some(path)
}
