//! UCI command handling, independent of where lines come from.

use std::io::{self, Write};

use bchess_core::{
    EngineConfig, Move, Position, SearchResult, Searcher, perft_divide, set_position_from_uci,
};

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    config: EngineConfig,
    position: Position,
    searcher: Searcher,
    depth: u8,
}

impl UciSession {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            position: Position::startpos(),
            searcher: Searcher::new(config.search.clone()),
            depth: config.default_depth,
            config,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Handle one input line, writing any reply to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match command {
            "uci" => {
                writeln!(out, "id name bchess {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "id author bchess")?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    self.config.default_depth, self.config.max_depth
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => {
                self.position = Position::startpos();
                self.searcher = Searcher::new(self.config.search.clone());
            }
            "position" => match set_position_from_uci(args) {
                Ok(pos) => self.position = pos,
                Err(e) => tracing::warn!(error = %e, "rejected position command"),
            },
            "setoption" => self.set_option(args),
            "go" => self.go(args, out)?,
            "quit" => return Ok(Flow::Quit),
            other => tracing::warn!(command = other, "unknown command"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// `setoption name Depth value N`
    fn set_option(&mut self, args: &[&str]) {
        let name = args
            .iter()
            .position(|&a| a == "name")
            .and_then(|i| args.get(i + 1));
        let value = args
            .iter()
            .position(|&a| a == "value")
            .and_then(|i| args.get(i + 1));

        match (name, value) {
            (Some(name), Some(value)) if name.eq_ignore_ascii_case("depth") => {
                match value.parse::<u32>() {
                    Ok(d) => self.depth = self.config.clamp_depth(d),
                    Err(_) => tracing::warn!(value = *value, "Depth is not a number"),
                }
            }
            _ => tracing::warn!(args = ?args, "unsupported option"),
        }
    }

    /// `go [depth N]` or `go perft N`. Time controls are ignored.
    fn go<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let arg_after = |key: &str| {
            args.iter()
                .position(|&a| a == key)
                .and_then(|i| args.get(i + 1))
                .and_then(|v| v.parse::<u32>().ok())
        };

        if let Some(depth) = arg_after("perft") {
            let depth = self.config.clamp_depth(depth);
            let divide = perft_divide(&self.position, depth);
            let mut nodes = 0u64;
            for (mv, count) in &divide {
                writeln!(out, "{mv}: {count}")?;
                nodes += count;
            }
            writeln!(out)?;
            writeln!(out, "Nodes searched: {nodes}")?;
            return Ok(());
        }

        let depth = arg_after("depth")
            .map(|d| self.config.clamp_depth(d))
            .unwrap_or(self.depth);
        let result = self.searcher.search(&self.position, depth);
        writeln!(out, "{}", info_line(&result))?;
        writeln!(
            out,
            "bestmove {}",
            result.best_move.unwrap_or(Move::NONE)
        )?;
        Ok(())
    }
}

fn info_line(result: &SearchResult) -> String {
    let score = match result.mate_in() {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {}", result.score),
    };
    format!(
        "info score {score} depth {} nodes {}",
        result.depth, result.nodes
    )
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
