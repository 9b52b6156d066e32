use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use atlas_fiction::{Beat, EngineConfig, Game};

/// Play until `quit`, the end of the story, or end of input.
pub fn run(name: Option<&str>, config: EngineConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && io::stdout().is_terminal();
    let mut reader = stdin.lock();

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            print!("What is your name? ");
            io::stdout().flush().map_err(|e| e.to_string())?;
            read_line(&mut reader)?.unwrap_or_default()
        }
    };

    tracing::debug!(interactive, "console started");
    let mut game = Game::new(&name, config).map_err(|e| e.to_string())?;
    game.trigger();
    render(game.drain_output(), interactive, &mut reader)?;

    while !game.is_finished() {
        print!("{} ", if game.is_choice() { "?" } else { ">" });
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = read_line(&mut reader)? else {
            tracing::debug!("end of input");
            break;
        };

        game.process_command(&line);
        game.trigger();
        render(game.drain_output(), interactive, &mut reader)?;
    }

    Ok(())
}

fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn render(beats: Vec<Beat>, interactive: bool, reader: &mut impl BufRead) -> Result<(), String> {
    let mut stdout = io::stdout();
    for beat in beats {
        match beat {
            Beat::Say(text) => println!("{text}\n"),
            Beat::Alert(text) => println!("{}\n", text.yellow()),
            Beat::Notice(text) => println!("{}\n", text.cyan()),
            Beat::Pause if interactive => {
                print!("{}", "(press Enter)".dimmed());
                stdout.flush().map_err(|e| e.to_string())?;
                read_line(reader)?;
            }
            Beat::Clear if interactive => {
                execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)).map_err(|e| e.to_string())?;
            }
            Beat::Pause | Beat::Clear => {}
        }
    }
    Ok(())
}
