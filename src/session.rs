//! The interactive read-eval loop.
//!
//! A session owns the address book for its whole lifetime: it is loaded
//! once before the first prompt and saved once after `exit`, `close`, or
//! end of input.

use crate::book::AddressBook;
use crate::commands::CommandDispatcher;
use crate::error::SessionResult;
use crate::repositories::BookRepository;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Run a full session over `input`/`output`, returning the saved book.
///
/// `today` is asked for the current date before every command so a long
/// running session crosses midnight correctly.
///
/// # Errors
///
/// Fails if the book cannot be loaded or saved, or if the terminal streams
/// fail; the book is still saved in the latter case. Input that is not valid
/// UTF-8 is decoded lossily. Command failures are reported to `output` and
/// never end the session.
pub fn run_session<R, W, F>(
    repository: &dyn BookRepository,
    dispatcher: &CommandDispatcher,
    mut input: R,
    mut output: W,
    today: F,
) -> SessionResult<AddressBook>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let mut book = repository.load()?;
    info!("Loaded {} contact(s)", book.len());

    // The book is saved even when the terminal fails mid-session.
    let conversation = converse(dispatcher, &mut input, &mut output, &mut book, &today);
    if let Err(e) = &conversation {
        error!("Terminal I/O failed, saving before exit: {}", e);
    }

    if let Err(e) = repository.save(&book) {
        error!("Failed to save address book: {}", e);
        return Err(e.into());
    }

    conversation?;
    Ok(book)
}

fn converse<R, W, F>(
    dispatcher: &CommandDispatcher,
    input: &mut R,
    output: &mut W,
    book: &mut AddressBook,
    today: &F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", GREETING)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input, closing session");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let outcome = dispatcher.handle_line(&line, book, today());
        writeln!(output, "{}", outcome.message())?;

        if outcome.is_exit() {
            return Ok(());
        }
    }
}
