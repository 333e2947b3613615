use anyhow::Context;
use othello_ai::core::{Position, STANDARD_BOARD_SIZE};
use othello_ai::display::{render_board, DisplayState};
use othello_ai::game::result_banner;
use othello_ai::logging;
use othello_ai::player::ai::AIConfig;
use othello_ai::player::{ConsoleInput, Player, PlayerController, PlayerKind};
use othello_ai::{Color, GameState};
use std::io::{self, StdinLock, Stdout, Write};

type Console = ConsoleInput<StdinLock<'static>, Stdout>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let plain = std::env::args().any(|a| a == "--plain");
    let config = AIConfig::get();

    let mut console = ConsoleInput::new(io::stdin().lock(), io::stdout());
    writeln!(console.writer(), "=== Othello ===")?;

    loop {
        let Some(state) = ask_board_size(&mut console)? else {
            return Ok(());
        };
        let Some(black) = ask_player(&mut console, Color::Black, config)? else {
            return Ok(());
        };
        let Some(white) = ask_player(&mut console, Color::White, config)? else {
            return Ok(());
        };

        let Some(state) = run_game(&mut console, state, [black, white], plain).await? else {
            return Ok(());
        };

        writeln!(console.writer(), "{}", result_banner(state.winner()))?;
        writeln!(
            console.writer(),
            "BLACK {} - {} WHITE",
            state.black_score(),
            state.white_score()
        )?;

        match console.prompt_line("Play again? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

fn ask_board_size(console: &mut Console) -> anyhow::Result<Option<GameState>> {
    loop {
        let prompt = format!("Board size (6-12) [{}]: ", STANDARD_BOARD_SIZE);
        let Some(line) = console.prompt_line(&prompt)? else {
            return Ok(None);
        };
        let size = if line.is_empty() {
            STANDARD_BOARD_SIZE
        } else {
            match line.parse::<usize>() {
                Ok(size) => size,
                Err(_) => {
                    writeln!(console.writer(), "Please enter a number.")?;
                    continue;
                }
            }
        };
        match GameState::with_size(size) {
            Ok(state) => return Ok(Some(state)),
            Err(e) => writeln!(console.writer(), "{}", e)?,
        }
    }
}

fn ask_player(
    console: &mut Console,
    color: Color,
    config: &AIConfig,
) -> anyhow::Result<Option<Player>> {
    let title = format!("{} player:", color);
    let kind = console.choose(&title, &PlayerKind::ALL, |s| s.parse().ok())?;
    Ok(kind.map(|kind| Player::create(kind, &format!("{} ({})", color, kind), config)))
}

/// 終局まで進めて最終局面を返す。入力が尽きたら None
async fn run_game(
    console: &mut Console,
    mut state: GameState,
    players: [Player; 2],
    plain: bool,
) -> anyhow::Result<Option<GameState>> {
    let mut players = players.map(Some);
    let mut last_move: Option<Position> = None;

    while !state.is_game_over() {
        show(console, &state, last_move, plain)?;
        let idx = state.turn().index();
        let player = players[idx].take().context("player slot is empty")?;

        let (player, mv) = if player.requires_external_input() {
            let mv = console.read_move(&state)?;
            (player, mv)
        } else {
            writeln!(console.writer(), "{} is thinking...", player.name())?;
            console.writer().flush()?;
            // 探索は CPU を使い切るので別スレッドで回す
            let snapshot = state.clone();
            tokio::task::spawn_blocking(move || {
                let mv = player.choose_move(&snapshot);
                (player, mv)
            })
            .await?
        };
        players[idx] = Some(player);

        let Some(mv) = mv else {
            return Ok(None);
        };
        match state.apply(mv) {
            Ok(_) => last_move = Some(mv),
            Err(e) => writeln!(console.writer(), "{}", e)?,
        }
    }

    show(console, &state, last_move, plain)?;
    Ok(Some(state))
}

fn show(
    console: &mut Console,
    state: &GameState,
    last_move: Option<Position>,
    plain: bool,
) -> anyhow::Result<()> {
    if plain {
        write!(console.writer(), "{}", state.board().render())?;
        writeln!(
            console.writer(),
            "{}'s turn   BLACK {} - {} WHITE",
            state.turn(),
            state.black_score(),
            state.white_score()
        )?;
    } else {
        render_board(
            console.writer(),
            state.board(),
            &DisplayState::for_turn(state, last_move),
        )?;
    }
    Ok(())
}
