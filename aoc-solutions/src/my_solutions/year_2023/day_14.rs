use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["2023", "grid", "cycle"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

#[derive(Debug, Clone, Copy)]
enum Direction {
    North,
    West,
    South,
    East,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = Platform;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_platform(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_platform(input: &str) -> Result<Platform, anyhow::Error> {
    let rows: Vec<&[u8]> = input
        .lines()
        .map(|line| line.trim().as_bytes())
        .filter(|row| !row.is_empty())
        .collect();

    let width = rows.first().map(|row| row.len()).ok_or_else(|| anyhow!("empty platform"))?;
    let mut cells = Vec::with_capacity(width * rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!("(line {}) expected {} columns, got {}", row_idx + 1, width, row.len());
        }
        if let Some(bad) = row.iter().find(|c| ![ROUND, CUBE, EMPTY].contains(c)) {
            bail!("(line {}) unexpected character {:?}", row_idx + 1, char::from(*bad));
        }
        cells.extend_from_slice(row);
    }

    Ok(Platform {
        width,
        height: rows.len(),
        cells,
    })
}

impl Platform {
    /// Cell index of `step` along `lane`, counting from the edge rocks roll towards
    fn index(&self, dir: Direction, lane: usize, step: usize) -> usize {
        let (x, y) = match dir {
            Direction::North => (lane, step),
            Direction::South => (lane, self.height - 1 - step),
            Direction::West => (step, lane),
            Direction::East => (self.width - 1 - step, lane),
        };
        y * self.width + x
    }

    fn tilt(&mut self, dir: Direction) {
        let (lanes, len) = match dir {
            Direction::North | Direction::South => (self.width, self.height),
            Direction::West | Direction::East => (self.height, self.width),
        };

        for lane in 0..lanes {
            let mut free = 0;
            for step in 0..len {
                let idx = self.index(dir, lane, step);
                match self.cells[idx] {
                    CUBE => free = step + 1,
                    ROUND => {
                        self.cells[idx] = EMPTY;
                        let target = self.index(dir, lane, free);
                        self.cells[target] = ROUND;
                        free += 1;
                    }
                    _ => {}
                }
            }
        }
    }

    fn spin(&mut self) {
        for dir in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            self.tilt(dir);
        }
    }

    fn north_load(&self) -> usize {
        self.cells
            .chunks(self.width)
            .enumerate()
            .map(|(y, row)| row.iter().filter(|&&c| c == ROUND).count() * (self.height - y))
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        platform.tilt(Direction::North);
        Ok(platform.north_load().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut platform = shared.clone();
        let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();

        for cycle in 0..SPIN_CYCLES {
            if let Some(start) = seen.insert(platform.cells.clone(), cycle) {
                let remaining = (SPIN_CYCLES - cycle) % (cycle - start);
                for _ in 0..remaining {
                    platform.spin();
                }
                return Ok(platform.north_load().to_string());
            }
            platform.spin();
        }

        Ok(platform.north_load().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "136");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn test_parts_do_not_mutate_input() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        let original = shared.clone();
        Solver::solve_part(&mut shared, 1).unwrap();
        assert_eq!(shared, original);
    }

    #[test]
    fn test_single_spin() {
        let mut platform = parse_platform(EXAMPLE).unwrap();
        platform.spin();
        let expected = parse_platform(
            ".....#....\n....#...O#\n...OO##...\n.OO#......\n.....OOO#.\n\
             .O#...O#.#\n....O#....\n......OOOO\n#...O###..\n#..OO#....\n",
        )
        .unwrap();
        assert_eq!(platform, expected);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Solver::parse("O..\n.#\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_unknown_cell_rejected() {
        assert!(Solver::parse("O.x\n").is_err());
    }
}
