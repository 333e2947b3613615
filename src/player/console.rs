//! 行単位のコンソール入力
//!
//! 外部入力のプレイヤーはここで "row col" を読む。入力元・出力先は差し替え可能で、
//! テストでは `Cursor` を使う。

use crate::core::Position;
use crate::logic::GameState;
use std::io::{BufRead, Write};

/// "3 4" / "3,4" / "(3, 4)" を (row, col) として読む
pub fn parse_move(line: &str) -> Option<Position> {
    let cleaned: String = line
        .chars()
        .map(|c| if c == ',' || c == '(' || c == ')' { ' ' } else { c })
        .collect();
    let mut parts = cleaned.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// プロンプトを出して1行読む。入力が尽きたら None
    pub fn prompt_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// 合法手が入力されるまで聞き直す。入力が尽きたら None
    pub fn read_move(&mut self, state: &GameState) -> anyhow::Result<Option<Position>> {
        loop {
            let Some(line) = self.prompt_line("Enter row and column: ")? else {
                return Ok(None);
            };
            match parse_move(&line) {
                Some(pos) if state.is_valid_move(pos.row, pos.col) => return Ok(Some(pos)),
                Some(pos) => writeln!(self.writer, "Invalid move {}. Try again.", pos)?,
                None => writeln!(self.writer, "Please enter a row and a column, e.g. \"2 3\".")?,
            }
        }
    }

    /// 選択肢から1つ選ばせる。番号か名前で答えられる
    pub fn choose<T, F>(&mut self, title: &str, options: &[T], parse: F) -> anyhow::Result<Option<T>>
    where
        T: Copy + std::fmt::Display,
        F: Fn(&str) -> Option<T>,
    {
        writeln!(self.writer, "{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, option)?;
        }
        loop {
            let Some(line) = self.prompt_line("> ")? else {
                return Ok(None);
            };
            let by_index = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i).copied());
            match by_index.or_else(|| parse(&line)) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.writer, "Unknown choice {:?}.", line)?,
            }
        }
    }
}
