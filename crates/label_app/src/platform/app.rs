use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use label_core::{update, AppState, Msg};
use label_logging::{label_info, label_warn};

use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::{HELP_TEXT, TICK_INTERVAL};
use super::ui::input::{InputEvent, TextBuffer};
use super::ui::render::render;
use crate::config::AppConfig;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log_destination, &config.log_file);
    label_info!("Starting label_app against {}", config.server_url);

    let runner = EffectRunner::new(config.engine_config()?)?;
    let (input_tx, input_rx) = mpsc::channel::<InputEvent>();
    spawn_stdin_reader(input_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP_TEXT}")?;

    let mut state = AppState::new();
    write_view(&mut out, &state)?;

    loop {
        match input_rx.recv_timeout(TICK_INTERVAL) {
            Ok(InputEvent::Msg(msg)) => state = dispatch(state, msg, &runner),
            Ok(InputEvent::Help) => writeln!(out, "{HELP_TEXT}")?,
            Ok(InputEvent::Unknown(line)) => {
                writeln!(out, "unknown command {line:?}; type :help")?;
            }
            Ok(InputEvent::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                state = dispatch(state, Msg::Tick, &runner);
            }
        }

        while let Some(msg) = runner.poll() {
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            write_view(&mut out, &state)?;
        }
    }

    label_info!("label_app exiting");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn write_view(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    writeln!(out)?;
    for line in render(&state.view()) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<InputEvent>) {
    thread::spawn(move || {
        let mut buffer = TextBuffer::new();
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    label_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            let event = buffer.handle_line(&line);
            let quit = event == InputEvent::Quit;
            if input_tx.send(event).is_err() || quit {
                break;
            }
        }
    });
}
