//! # Menu Module
//!
//! The interactive loop: show the queue, show the options, read a choice,
//! act on it, repeat.
//!
//! ## Plain English
//!
//! ```text
//! Fila de peças
//! [T 0] [O 1] [L 2] [I 3] [T 4]
//!
//! Opções:
//! 1 - Jogar peça (dequeue)
//! 2 - Inserir nova peça (enqueue)
//! 0 - Sair
//! Escolha:
//! ```
//!
//! Every failure is just a message; the menu always comes back until the
//! player picks `0` (or the input runs out).

use std::io::BufRead;

use log::{debug, info, warn};

use crate::console::Console;
use crate::error::{InputError, TetrisResult};
use crate::input::{self, MenuCommand, INVALID_CHOICE};
use crate::{SessionStats, TetrisQueue};

// ============================================
// MESSAGES
// ============================================

/// Header printed above the queue listing.
pub const QUEUE_HEADER: &str = "\nFila de peças\n";
/// Shown instead of the listing when no piece is queued.
pub const EMPTY_MARKER: &str = "(vazia)";
/// Option list and prompt.
pub const MENU_TEXT: &str = "\nOpções:\n\
                             1 - Jogar peça (dequeue)\n\
                             2 - Inserir nova peça (enqueue)\n\
                             0 - Sair\n\
                             Escolha: ";
pub const MSG_PLAYED: &str = "Jogou peça:";
pub const MSG_EMPTY: &str = "Fila vazia. Nada a jogar.";
pub const MSG_INSERTED: &str = "Peça inserida no fim da fila.";
pub const MSG_FULL: &str = "Fila cheia. Não foi possível inserir.";
pub const MSG_INVALID: &str = "Opção inválida.";
pub const MSG_BYE: &str = "Encerrando.";

// ============================================
// LOOP
// ============================================

/// What one menu step asked the loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Runs the menu until the player quits or the input is closed.
///
/// Consumes the application and returns its final statistics. Console
/// write failures are logged and otherwise ignored, so this only fails if
/// reading the input fails.
pub fn run<R, C>(mut app: TetrisQueue, mut input: R, console: &mut C) -> TetrisResult<SessionStats>
where
    R: BufRead,
    C: Console + ?Sized,
{
    info!("Menu started");

    loop {
        render(&app, console);

        let (command, closed) = match input::read_command(&mut input)? {
            Some(command) => (command, false),
            None => (MenuCommand::Invalid(INVALID_CHOICE), true),
        };

        let flow = step(&mut app, command, console);

        if closed {
            // Nothing more can be read; report once and leave
            warn!("{}", InputError::EndOfInput);
            emit(console, "\n");
            break;
        }
        if flow == Flow::Stop {
            break;
        }
    }

    Ok(app.shutdown())
}

/// Prints the queue listing, the options and the prompt.
pub fn render<C: Console + ?Sized>(app: &TetrisQueue, console: &mut C) {
    emit(console, &render_queue(app));
    emit(console, MENU_TEXT);
    if let Err(error) = console.flush() {
        warn!("Console flush failed: {}", error);
    }
}

/// Builds the queue section of the screen.
pub fn render_queue(app: &TetrisQueue) -> String {
    let mut text = String::from(QUEUE_HEADER);

    if app.is_empty() {
        text.push_str(EMPTY_MARKER);
        text.push('\n');
        return text;
    }

    for piece in app.pieces() {
        text.push_str(&format!("{} ", piece));
    }
    text.push('\n');
    text
}

/// Carries out one command and prints its outcome.
pub fn step<C: Console + ?Sized>(app: &mut TetrisQueue, command: MenuCommand, console: &mut C) -> Flow {
    let message = match command {
        MenuCommand::Quit => {
            emit_line(console, MSG_BYE);
            return Flow::Stop;
        }
        MenuCommand::Play => match app.play() {
            Ok(piece) => format!("{} {}", MSG_PLAYED, piece),
            Err(_) => MSG_EMPTY.to_string(),
        },
        MenuCommand::Insert => match app.insert() {
            Ok(_) => MSG_INSERTED.to_string(),
            Err(_) => MSG_FULL.to_string(),
        },
        MenuCommand::Invalid(code) => {
            debug!("{}", InputError::UnknownOption(code));
            app.record_invalid_input();
            MSG_INVALID.to_string()
        }
    };

    emit_line(console, &message);
    Flow::Continue
}

fn emit<C: Console + ?Sized>(console: &mut C, text: &str) {
    if let Err(error) = console.write_str(text) {
        warn!("Console write failed: {}", error);
    }
}

fn emit_line<C: Console + ?Sized>(console: &mut C, text: &str) {
    if let Err(error) = console.write_line(text) {
        warn!("Console write failed: {}", error);
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::console::BufferConsole;
    use std::io::Cursor;

    #[test]
    fn test_render_queue() {
        let app = TetrisQueue::new().unwrap();
        assert_eq!(
            render_queue(&app),
            "\nFila de peças\n[T 0] [O 1] [L 2] [I 3] [T 4] \n"
        );
    }

    #[test]
    fn test_render_empty_queue() {
        let app = TetrisQueue::with_config(Config {
            capacity: 1,
            initial_pieces: 0,
        })
        .unwrap();
        assert_eq!(render_queue(&app), "\nFila de peças\n(vazia)\n");
    }

    #[test]
    fn test_step_messages() {
        let mut app = TetrisQueue::with_config(Config::tiny()).unwrap();
        let mut console = BufferConsole::new();

        assert_eq!(step(&mut app, MenuCommand::Play, &mut console), Flow::Continue);
        assert_eq!(console.take(), "Jogou peça: [T 0]\n");

        step(&mut app, MenuCommand::Play, &mut console);
        assert_eq!(console.take(), "Fila vazia. Nada a jogar.\n");

        step(&mut app, MenuCommand::Insert, &mut console);
        step(&mut app, MenuCommand::Insert, &mut console);
        assert_eq!(
            console.take(),
            "Peça inserida no fim da fila.\nPeça inserida no fim da fila.\n"
        );

        step(&mut app, MenuCommand::Insert, &mut console);
        assert_eq!(console.take(), "Fila cheia. Não foi possível inserir.\n");

        step(&mut app, MenuCommand::Invalid(7), &mut console);
        assert_eq!(console.take(), "Opção inválida.\n");

        assert_eq!(step(&mut app, MenuCommand::Quit, &mut console), Flow::Stop);
        assert_eq!(console.take(), "Encerrando.\n");
    }

    #[test]
    fn test_run_until_quit() {
        let app = TetrisQueue::new().unwrap();
        let mut console = BufferConsole::new();

        let stats = run(app, Cursor::new("1\n0\n1\n"), &mut console).unwrap();

        // The trailing "1" is never read
        assert_eq!(stats.pieces_played, 1);
        assert!(console.contents().contains("Jogou peça: [T 0]"));
        assert!(console.contents().ends_with("Encerrando.\n"));
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let app = TetrisQueue::new().unwrap();
        let mut console = BufferConsole::new();

        let stats = run(app, Cursor::new("2\n"), &mut console).unwrap();

        assert_eq!(stats.pieces_inserted, 1);
        assert_eq!(stats.invalid_inputs, 1);
        assert_eq!(console.contents().matches("Escolha: ").count(), 2);
        assert!(console.contents().contains("Opção inválida."));
    }
}
