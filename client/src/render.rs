use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use common::maze::Maze;

pub trait Renderer {
    fn render<W: Write>(&self, maze: &Maze, out: &mut W) -> io::Result<()>;
}

/// Draws the maze as rows of `██` blocks, two characters per block so cells come out square.
pub struct TextRenderer {
    pub wall_color: Option<Color>,
}

impl Renderer for TextRenderer {
    fn render<W: Write>(&self, maze: &Maze, out: &mut W) -> io::Result<()> {
        if let Some(color) = self.wall_color {
            queue!(out, SetForegroundColor(color))?;
        }

        for line in maze.log().lines() {
            queue!(out, Print(line), Print("\n"))?;
        }

        if self.wall_color.is_some() {
            queue!(out, ResetColor)?;
        }

        out.flush()
    }
}

/// Dumps the grid and the generation reports as pretty-printed JSON.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render<W: Write>(&self, maze: &Maze, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, maze)?;
        writeln!(out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use common::config::MazeConfig;

    use super::*;

    fn small_maze() -> Maze {
        let config = MazeConfig {
            cols: 4,
            rows: 3,
            ..MazeConfig::default()
        };
        Maze::new(&config, &mut StdRng::seed_from_u64(12)).expect("valid config")
    }

    #[test]
    fn test_plain_text_matches_the_maze_log() {
        let maze = small_maze();
        let mut out = Vec::new();

        TextRenderer { wall_color: None }
            .render(&maze, &mut out)
            .expect("rendering into memory should succeed");

        let text = String::from_utf8(out).expect("output should be utf-8");
        assert_eq!(text, format!("{}\n", maze.log()));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_colored_text_wraps_the_maze_in_escape_codes() {
        let maze = small_maze();
        let mut out = Vec::new();

        TextRenderer {
            wall_color: Some(Color::DarkYellow),
        }
        .render(&maze, &mut out)
        .expect("rendering into memory should succeed");

        let text = String::from_utf8(out).expect("output should be utf-8");
        assert!(text.starts_with("\u{1b}["));
        assert!(text.contains(&maze.log()));
        assert!(text.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_json_carries_grid_dimensions_and_reports() {
        let maze = small_maze();
        let mut out = Vec::new();

        JsonRenderer
            .render(&maze, &mut out)
            .expect("rendering into memory should succeed");

        let json: serde_json::Value =
            serde_json::from_slice(&out).expect("output should be valid json");
        assert_eq!(json["grid"]["cols"], 4);
        assert_eq!(json["grid"]["rows"], 3);
        assert_eq!(
            json["grid"]["cells"]
                .as_array()
                .expect("cells should be an array")
                .len(),
            12
        );
        assert_eq!(json["generation"]["passages"], 11);
        assert_eq!(json["loops"]["trials"], 12);
    }
}
