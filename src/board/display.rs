// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::io;
use ansi_term::{ANSIString, Colour, Style};

use super::{Board, RunLengths};
use super::super::line::DirectionalSequence;
use super::super::util::{is_a_tty, lalign_colored, ralign, ralign_joined_coloreds};
use super::super::util::{Direction, Direction::*};

impl Board {
    // helper functions for Board::fmt
    fn run_length_strings(&self, clues: &Option<Vec<RunLengths>>,
                                 direction: Direction,
                                 index: usize)
        -> Vec<ANSIString<'static>>
    {
        let run_lengths = match clues {
            Some(clues) => &clues[index],
            None        => return Vec::new(),
        };
        let style = match self.line(direction, index).satisfies(run_lengths) {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        };
        run_lengths.iter()
                   .map(|len| style.paint(len.to_string()))
                   .collect()
    }

    fn fmt_line(f: &mut fmt::Formatter,
                prefix: &str,
                left_delim: &str,
                right_delim: &str,
                columnwise_separator: &str,
                content_parts: &[String])
        -> fmt::Result
    {
        write!(f, "{} {}", prefix, left_delim)?;
        for (idx, part) in content_parts.iter().enumerate() {
            write!(f, "{}", part)?;
            if ((idx+1) % 5 == 0) && (idx < content_parts.len()-1) {
                write!(f, "{}", columnwise_separator)?;
            }
        }
        writeln!(f, "{}", right_delim)
    }

    fn fmt_header(&self, f: &mut fmt::Formatter,
                         line_idx: usize,
                         prefix_len: usize,
                         emit_color: bool)
        -> fmt::Result
    {
        let mut content_parts = Vec::<String>::new();
        for x in 0..self.size {
            // column run lengths are stacked bottom-aligned above the grid
            let parts = self.run_length_strings(&self.col_clues, Vertical, x);
            let part = match line_idx < parts.len() {
                true  => lalign_colored(&parts[parts.len()-1-line_idx], 2, emit_color),
                false => ralign("", 2),
            };
            content_parts.push(format!(" {}", part));
        }
        Self::fmt_line(f, &ralign("", prefix_len), " ", " ", " ", &content_parts)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let emit_color = is_a_tty(io::stdout());
        let row_prefixes: Vec<Vec<ANSIString>> =
            (0..self.size).map(|y| self.run_length_strings(&self.row_clues, Horizontal, y))
                          .collect();
        let prefix_len = row_prefixes.iter()
                                     .map(|parts| parts.iter()
                                                       .map(|ansi_str| ansi_str.len() + 1)
                                                       .sum::<usize>()
                                                       .saturating_sub(1)) // match the length of a join(" ")
                                     .max()
                                     .unwrap_or(0);
        let max_col_runs = match &self.col_clues {
            Some(clues) => clues.iter().map(|run_lengths| run_lengths.len()).max().unwrap_or(0),
            None        => 0,
        };

        for i in (0..max_col_runs).rev() {
            self.fmt_header(f, i, prefix_len, emit_color)?;
        }

        // top board line
        Self::fmt_line(f,
                       &ralign("", prefix_len),
                       "\u{2554}",
                       "\u{2557}",
                       "\u{2564}",
                       &(0..self.size).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                                      .collect::<Vec<_>>())?;

        for y in 0..self.size {
            // board content line
            Self::fmt_line(f,
                           &ralign_joined_coloreds(&row_prefixes[y], prefix_len, emit_color),
                           "\u{2551}",
                           "\u{2551}",
                           "\u{2502}",
                           &self.grid[y].iter()
                                        .map(|s| format!(" {} ", s.fmt_visual()))
                                        .collect::<Vec<_>>())?;

            // horizontal board separator line
            if ((y+1) % 5 == 0) && (y != self.size-1) {
                Self::fmt_line(f,
                               &ralign("", prefix_len),
                               "\u{255F}",
                               "\u{2562}",
                               "\u{253C}",
                               &(0..self.size).map(|_| String::from("\u{2500}\u{2500}\u{2500}"))
                                              .collect::<Vec<_>>())?;
            }
        }
        // bottom board line
        Self::fmt_line(f,
                       &ralign("", prefix_len),
                       "\u{255A}",
                       "\u{255D}",
                       "\u{2567}",
                       &(0..self.size).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                                      .collect::<Vec<_>>())
    }
}
