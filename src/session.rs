//! Interactive menu and add-book flow.
//!
//! Input handling is split in two. The `*_step` functions are pure: they turn
//! one raw answer into a [`Step`]. [`Prompter`] drives them, asking again on
//! [`Step::Retry`] until it gets [`Step::Valid`] or [`Step::Cancelled`].
//! [`Session`] strings the prompts together into the menu loop.
//!
//! Typing `EXIT` at the title, author, ISBN or year prompt abandons the book
//! being added without touching the catalog.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::escape;
use crate::isbn::IsbnValidator;
use crate::record::BookRecord;
use crate::store::Catalog;
use crate::validation::{self, ValidationLevel};

/// Answer that abandons the current entry, matched ignoring case.
pub const CANCEL_SENTINEL: &str = "EXIT";

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

const UNREADABLE_INPUT: &str = "Invalid input! Text must be valid UTF-8.";

/// Result of interpreting one answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The answer was accepted
    Valid(T),
    /// The user asked to abandon the current entry
    Cancelled,
    /// The answer was rejected; ask again after showing the message
    Retry(String),
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new book
    Add,
    /// Print the catalog
    List,
    /// Leave the program
    Quit,
}

/// How an add-book attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The book was saved and is now in the catalog
    Added,
    /// The user cancelled or declined; nothing changed
    Cancelled,
    /// Writing the file failed; nothing changed
    NotSaved,
}

fn is_cancel(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(CANCEL_SENTINEL)
}

/// Interpret an answer to a title or author prompt.
#[must_use]
pub fn text_step(raw: &str, empty_message: &str) -> Step<String> {
    let answer = raw.trim();
    if is_cancel(answer) {
        return Step::Cancelled;
    }
    if answer.is_empty() {
        return Step::Retry(empty_message.to_string());
    }
    if let Err(e) = escape::check_free_text(answer) {
        return Step::Retry(e.to_string());
    }
    Step::Valid(answer.to_string())
}

/// Interpret an answer to the ISBN prompt, checksum included.
#[must_use]
pub fn isbn_step(raw: &str) -> Step<String> {
    let answer = raw.trim();
    if is_cancel(answer) {
        return Step::Cancelled;
    }
    // Both pass their checksum but are placeholders, not real ISBNs.
    if answer.bytes().all(|b| b == b'0') && matches!(answer.len(), 10 | 13) {
        return Step::Retry("Incorrect ISBN. Please enter a valid ISBN.".to_string());
    }
    match IsbnValidator::check(answer, ValidationLevel::Checksum) {
        Ok(()) => Step::Valid(answer.to_string()),
        Err(e) => Step::Retry(format!("Invalid ISBN! {e}.")),
    }
}

/// Interpret an answer to the publication year prompt.
#[must_use]
pub fn year_step(raw: &str, current_year: u32) -> Step<u32> {
    let answer = raw.trim();
    if is_cancel(answer) {
        return Step::Cancelled;
    }
    match validation::parse_year(answer, current_year) {
        Ok(year) => Step::Valid(year),
        Err(_) => Step::Retry(format!(
            "Invalid year! Enter a valid year between {} and {current_year}.",
            validation::MIN_YEAR
        )),
    }
}

/// Interpret a yes/no answer.
#[must_use]
pub fn confirm_step(raw: &str) -> Step<bool> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "Y" => Step::Valid(true),
        "N" => Step::Valid(false),
        _ => Step::Retry("Invalid input! Please enter 'Y' for Yes or 'N' for No.".to_string()),
    }
}

/// Interpret a main menu selection.
#[must_use]
pub fn menu_step(raw: &str) -> Step<MenuChoice> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "1" => Step::Valid(MenuChoice::Add),
        "2" => Step::Valid(MenuChoice::List),
        "Q" => Step::Valid(MenuChoice::Quit),
        _ => Step::Retry("Invalid choice! Please select a valid option.".to_string()),
    }
}

/// Drives prompts over a line-oriented input and an output.
#[derive(Debug)]
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask until `step` accepts or cancels.
    ///
    /// Returns `Ok(None)` on cancellation, including end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn ask<T>(&mut self, prompt: &str, step: impl Fn(&str) -> Step<T>) -> Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                tracing::debug!(prompt, "input closed while prompting");
                return Ok(None);
            }

            let answer = match std::str::from_utf8(&raw) {
                Ok(line) => step(line),
                Err(_) => Step::Retry(UNREADABLE_INPUT.to_string()),
            };
            match answer {
                Step::Valid(value) => return Ok(Some(value)),
                Step::Cancelled => {
                    writeln!(self.output, "\n[INFO] Operation canceled.\n")?;
                    return Ok(None);
                },
                Step::Retry(message) => writeln!(self.output, "[ERROR] {message}")?,
            }
        }
    }

    /// Ask a yes/no question; end of input counts as "no".
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt, confirm_step)?.unwrap_or(false))
    }

    /// Access the output, e.g. to print listings between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// A catalog plus the prompts used to manage it.
#[derive(Debug)]
pub struct Session<R: BufRead, W: Write> {
    catalog: Catalog,
    prompter: Prompter<R, W>,
    current_year: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an open catalog.
    pub fn new(catalog: Catalog, input: R, output: W, current_year: u32) -> Self {
        Session {
            catalog,
            prompter: Prompter::new(input, output),
            current_year,
        }
    }

    /// The catalog being managed.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// End the session, returning the catalog and the output.
    pub fn into_parts(self) -> (Catalog, W) {
        let (_, output) = self.prompter.into_inner();
        (self.catalog, output)
    }

    /// Run the menu loop until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.print_header()?;
        loop {
            self.print_menu()?;
            let choice = self.prompter.ask("SELECT AN OPTION: ", menu_step)?;

            match choice {
                Some(MenuChoice::Add) => {
                    self.add_book()?;
                },
                Some(MenuChoice::List) => self.list_books()?,
                Some(MenuChoice::Quit) | None => {
                    writeln!(
                        self.prompter.output(),
                        "\nShutting down library database... Goodbye!"
                    )?;
                    return Ok(());
                },
            }
        }
    }

    /// Walk the user through adding one book.
    ///
    /// The catalog and its file change only when every prompt succeeds and
    /// the final confirmation is "Y".
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. A failure to
    /// write the catalog file is reported to the user and returned as
    /// [`AddOutcome::NotSaved`] instead.
    pub fn add_book(&mut self) -> Result<AddOutcome> {
        let out = self.prompter.output();
        writeln!(out, "\n{RULE}\nADDING A NEW BOOK TO THE DATABASE\n{RULE}")?;
        writeln!(out, "Type '{CANCEL_SENTINEL}' at any prompt to cancel adding a book.\n")?;

        let Some(title) = self
            .prompter
            .ask("Enter book title: ", |raw| text_step(raw, "Title cannot be empty."))?
        else {
            return Ok(AddOutcome::Cancelled);
        };

        let same_title = self.catalog.find_by_title_ci(&title);
        if !same_title.is_empty() {
            let out = self.prompter.output();
            writeln!(out, "\n[WARNING] A book with this title already exists:")?;
            for book in same_title {
                writeln!(out, "{book}")?;
            }
            if !self.prompter.confirm("\nProceed with adding this book? (Y/N): ")? {
                writeln!(self.prompter.output(), "\n[INFO] Book addition canceled.\n")?;
                return Ok(AddOutcome::Cancelled);
            }
        }

        let Some(author) = self.prompter.ask("Enter author name: ", |raw| {
            text_step(raw, "Author name cannot be empty.")
        })?
        else {
            return Ok(AddOutcome::Cancelled);
        };

        let Some(isbn) = self
            .prompter
            .ask("Enter book ISBN (10 or 13 digits, numbers only): ", isbn_step)?
        else {
            return Ok(AddOutcome::Cancelled);
        };

        let same_isbn = self.catalog.find_by_isbn(&isbn);
        if !same_isbn.is_empty() {
            let out = self.prompter.output();
            writeln!(out, "\n[WARNING] A book with this ISBN already exists:")?;
            for book in same_isbn {
                writeln!(out, "{book}")?;
            }
            if !self
                .prompter
                .confirm("\nProceed with adding this book anyway? (Y/N): ")?
            {
                writeln!(self.prompter.output(), "\n[INFO] Operation canceled.\n")?;
                return Ok(AddOutcome::Cancelled);
            }
        }

        let current_year = self.current_year;
        let year_prompt = format!(
            "Enter publishing year (between {} and {current_year}): ",
            validation::MIN_YEAR
        );
        let Some(year) = self
            .prompter
            .ask(&year_prompt, |raw| year_step(raw, current_year))?
        else {
            return Ok(AddOutcome::Cancelled);
        };

        let record = BookRecord::builder()
            .title(title)
            .author(author)
            .isbn(isbn)
            .year(year)
            .build(current_year)?;

        let out = self.prompter.output();
        writeln!(out, "\nYou entered the following book:\n{RULE}")?;
        write_book_details(out, &record)?;
        writeln!(out, "{RULE}")?;

        if !self
            .prompter
            .confirm("\nDo you want to update the database with this book? (Y/N): ")?
        {
            writeln!(self.prompter.output(), "\n[INFO] Book addition canceled.\n")?;
            return Ok(AddOutcome::Cancelled);
        }

        if let Err(e) = self.catalog.add(record) {
            tracing::error!(
                path = %self.catalog.path().display(),
                error = %e,
                "catalog save failed"
            );
            writeln!(
                self.prompter.output(),
                "\n[ERROR] Could not update the database: {e}. The book was not added.\n"
            )?;
            return Ok(AddOutcome::NotSaved);
        }

        writeln!(self.prompter.output(), "\nBook added successfully!")?;
        Ok(AddOutcome::Added)
    }

    /// Print every record in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn list_books(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out, "\n{RULE}\nLIBRARY DATABASE - BOOK LIST\n{RULE}")?;

        if self.catalog.is_empty() {
            writeln!(out, "  [NO BOOKS FOUND IN DATABASE]")?;
        }
        for (idx, book) in self.catalog.records().iter().enumerate() {
            writeln!(out, "{}.  Title  : {}", idx + 1, book.title)?;
            writeln!(out, "    Author : {}", book.author)?;
            writeln!(out, "    ISBN   : {}", book.isbn)?;
            writeln!(out, "    Year   : {}", book.year)?;
            writeln!(out, "{THIN_RULE}")?;
        }

        writeln!(out, "BOOK LIST COMPLETE")?;
        Ok(())
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(
            self.prompter.output(),
            "{RULE}\nWELCOME TO THE LIBRARY DATABASE\n{RULE}"
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out, "\n{RULE}\nMAIN MENU\n{RULE}")?;
        writeln!(out, "[1]  ADD A NEW BOOK")?;
        writeln!(out, "[2]  PRINT DATABASE")?;
        writeln!(out, "[Q]  QUIT PROGRAM")?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }
}

fn write_book_details<W: Write>(out: &mut W, record: &BookRecord) -> Result<()> {
    writeln!(out, "Title  : {}", record.title)?;
    writeln!(out, "Author : {}", record.author)?;
    writeln!(out, "ISBN   : {}", record.isbn)?;
    writeln!(out, "Year   : {}", record.year)?;
    Ok(())
}
