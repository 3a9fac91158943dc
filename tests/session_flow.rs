//! Integration tests for the interactive add/list flow

mod common;

use std::io::Cursor;

use bookshelf::{AddOutcome, Catalog, Session};
use common::{Workspace, NOW};

fn session_over(
    ws: &Workspace,
    contents: &str,
    input: &str,
) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    let path = ws.write_catalog(contents);
    let (catalog, _) = Catalog::open(&path, &ws.config(), NOW).expect("Failed to open catalog");
    Session::new(catalog, Cursor::new(input.as_bytes().to_vec()), Vec::new(), NOW)
}

fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> (Catalog, String) {
    let (catalog, output) = session.into_parts();
    (catalog, String::from_utf8(output).expect("Output is not UTF-8"))
}

#[test]
fn test_add_book_happy_path() {
    let ws = Workspace::new();
    let mut session = session_over(
        &ws,
        "",
        "Either/Or\nSøren Kierkegaard\n9780140445770\n1992\ny\n",
    );

    assert_eq!(session.add_book().unwrap(), AddOutcome::Added);
    let (catalog, output) = output_of(session);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].title, "Either/Or");
    assert!(output.contains("Book added successfully!"));
    assert_eq!(
        ws.read(&ws.catalog_path()),
        "Either|Or/Søren Kierkegaard/9780140445770/1992\n"
    );
}

#[test]
fn test_add_book_reprompts_invalid_answers() {
    let ws = Workspace::new();
    let input = "\n\
                 Dune\n\
                 \n\
                 Frank Herbert\n\
                 12345\n\
                 9780441013594\n\
                 0000000000\n\
                 9780441013593\n\
                 999\n\
                 2025\n\
                 nineteen\n\
                 1965\n\
                 maybe\n\
                 Y\n";
    let mut session = session_over(&ws, "", input);

    assert_eq!(session.add_book().unwrap(), AddOutcome::Added);
    let (catalog, output) = output_of(session);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].year, 1965);
    assert!(output.contains("[ERROR] Title cannot be empty."));
    assert!(output.contains("[ERROR] Author name cannot be empty."));
    assert!(output.contains("ISBN must be exactly 10 or 13 digits"));
    assert!(output.contains("ISBN-13 checksum failed"));
    assert!(output.contains("Incorrect ISBN"));
    assert_eq!(
        output
            .matches("Invalid year! Enter a valid year between 1000 and 2024.")
            .count(),
        3
    );
    assert!(output.contains("Please enter 'Y' for Yes or 'N' for No."));
}

#[test]
fn test_cancel_at_each_prompt_leaves_file_untouched() {
    let answers = [
        "EXIT\n",
        "Dune\nexit\n",
        "Dune\nFrank Herbert\nExit\n",
        "Dune\nFrank Herbert\n9780441013593\nEXIT\n",
        "Dune\nFrank Herbert\n9780441013593\n1965\nN\n",
    ];

    for input in answers {
        let ws = Workspace::new();
        let original = "Other/Someone/0306406152/1999\n";
        let mut session = session_over(&ws, original, input);

        assert_eq!(session.add_book().unwrap(), AddOutcome::Cancelled, "{input:?}");
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(ws.read(&ws.catalog_path()), original);
    }
}

#[test]
fn test_pipe_character_rejected_in_title() {
    let ws = Workspace::new();
    let mut session = session_over(
        &ws,
        "",
        "Pipes | Filters\nPipes and Filters\nA\n0306406152\n2000\ny\n",
    );
    assert_eq!(session.add_book().unwrap(), AddOutcome::Added);
    let (catalog, output) = output_of(session);
    assert!(output.contains("is reserved and cannot be used"));
    assert_eq!(catalog.records()[0].title, "Pipes and Filters");
}

#[test]
fn test_duplicate_isbn_declined_performs_no_write() {
    let ws = Workspace::new();
    let original = "Dune/Frank Herbert/9780441013593/1965\n";
    let mut session = session_over(&ws, original, "Dune Again\nSomeone\n9780441013593\nN\n");
    let modified_before = std::fs::metadata(ws.catalog_path()).unwrap().modified().unwrap();

    assert_eq!(session.add_book().unwrap(), AddOutcome::Cancelled);
    let (catalog, output) = output_of(session);
    assert_eq!(catalog.len(), 1);
    assert!(output.contains("A book with this ISBN already exists"));
    assert!(output.contains("Dune | Frank Herbert | 9780441013593 | 1965"));
    assert_eq!(ws.read(&ws.catalog_path()), original);
    let modified_after = std::fs::metadata(ws.catalog_path()).unwrap().modified().unwrap();
    assert_eq!(modified_before, modified_after);
}

#[test]
fn test_duplicate_isbn_confirmed_is_added() {
    let ws = Workspace::new();
    let mut session = session_over(
        &ws,
        "Dune/Frank Herbert/9780441013593/1965\n",
        "Dune (2nd copy)\nFrank Herbert\n9780441013593\ny\n1965\ny\n",
    );
    assert_eq!(session.add_book().unwrap(), AddOutcome::Added);
    assert_eq!(session.catalog().find_by_isbn("9780441013593").len(), 2);
}

#[test]
fn test_duplicate_title_is_case_insensitive_and_can_be_declined() {
    let ws = Workspace::new();
    let original = "Dune/Frank Herbert/9780441013593/1965\n";
    let mut session = session_over(&ws, original, "DUNE\nn\n");

    assert_eq!(session.add_book().unwrap(), AddOutcome::Cancelled);
    let (catalog, output) = output_of(session);
    assert!(output.contains("A book with this title already exists"));
    assert_eq!(catalog.len(), 1);
    assert_eq!(ws.read(&ws.catalog_path()), original);
}

#[test]
fn test_end_of_input_cancels_add() {
    let ws = Workspace::new();
    let mut session = session_over(&ws, "", "Dune\nFrank");
    // "Frank" is read, then the ISBN prompt hits end of input.
    assert_eq!(session.add_book().unwrap(), AddOutcome::Cancelled);
    assert!(session.catalog().is_empty());
}

#[test]
fn test_list_books() {
    let ws = Workspace::new();
    let mut session = session_over(
        &ws,
        "Zed/Z/0306406152/2001\nalpha/A|B/9780306406157/1999\n",
        "",
    );
    session.list_books().unwrap();
    let (_, output) = output_of(session);

    let alpha = output.find("1.  Title  : alpha").expect("alpha listed first");
    let zed = output.find("2.  Title  : Zed").expect("Zed listed second");
    assert!(alpha < zed);
    assert!(output.contains("    Author : A/B"));
    assert!(output.contains("BOOK LIST COMPLETE"));
}

#[test]
fn test_list_empty_catalog() {
    let ws = Workspace::new();
    let mut session = session_over(&ws, "", "");
    session.list_books().unwrap();
    let (_, output) = output_of(session);
    assert!(output.contains("[NO BOOKS FOUND IN DATABASE]"));
}

#[test]
fn test_menu_loop() {
    let ws = Workspace::new();
    let input = "7\n\
                 2\n\
                 1\n\
                 Dune\n\
                 Frank Herbert\n\
                 9780441013593\n\
                 1965\n\
                 Y\n\
                 2\n\
                 q\n";
    let mut session = session_over(&ws, "", input);
    session.run().unwrap();

    let (catalog, output) = output_of(session);
    assert_eq!(catalog.len(), 1);
    assert!(output.starts_with("=================================================="));
    assert!(output.contains("WELCOME TO THE LIBRARY DATABASE"));
    assert!(output.contains("[ERROR] Invalid choice! Please select a valid option."));
    assert!(output.contains("[NO BOOKS FOUND IN DATABASE]"));
    assert!(output.contains("1.  Title  : Dune"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_menu_loop_ends_on_end_of_input() {
    let ws = Workspace::new();
    let mut session = session_over(&ws, "", "2\n");
    session.run().unwrap();
    let (_, output) = output_of(session);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_invalid_utf8_answer_is_reprompted() {
    let ws = Workspace::new();
    let path = ws.write_catalog("");
    let (catalog, _) = Catalog::open(&path, &ws.config(), NOW).expect("Failed to open catalog");
    let input = b"1\nCaf\xe9\nDune\nFrank Herbert\n9780441013593\n1965\ny\nq\n".to_vec();
    let mut session = Session::new(catalog, Cursor::new(input), Vec::new(), NOW);

    session.run().expect("Invalid bytes must not end the session");
    let (catalog, output) = output_of(session);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].title, "Dune");
    assert!(output.contains("[ERROR] Invalid input! Text must be valid UTF-8."));
    assert!(output.ends_with("Goodbye!\n"));
}
