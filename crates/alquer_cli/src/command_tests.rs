use super::*;

#[test]
fn test_blank_line() {
    assert_eq!(parse_line(""), Ok(None));
    assert_eq!(parse_line("   \t "), Ok(None));
}

#[test]
fn test_simple_commands() {
    assert_eq!(parse_line("show"), Ok(Some(Command::Show)));
    assert_eq!(parse_line("  undo "), Ok(Some(Command::Undo)));
    assert_eq!(parse_line("REDO"), Ok(Some(Command::Redo)));
    assert_eq!(parse_line("new"), Ok(Some(Command::Reset)));
    assert_eq!(parse_line("solve"), Ok(Some(Command::Winner)));
    assert_eq!(parse_line("stats"), Ok(Some(Command::Stats)));
    assert_eq!(parse_line("dump"), Ok(Some(Command::Dump)));
    assert_eq!(parse_line("?"), Ok(Some(Command::Help)));
    assert_eq!(parse_line("exit"), Ok(Some(Command::Quit)));
}

#[test]
fn test_moves_with_and_without_square() {
    assert_eq!(parse_line("moves"), Ok(Some(Command::Moves(None))));
    assert_eq!(
        parse_line("moves b4"),
        Ok(Some(Command::Moves(Some(Square::new(3, 1)))))
    );
    assert_eq!(
        parse_line("moves zz"),
        Err(CommandError::BadSquare("zz".to_string()))
    );
}

#[test]
fn test_play_keeps_text() {
    assert_eq!(
        parse_line("play a4xa2"),
        Ok(Some(Command::Play("a4xa2".to_string())))
    );
    assert_eq!(
        parse_line("play"),
        Err(CommandError::MissingArgument("play"))
    );
}

#[test]
fn test_click() {
    assert_eq!(
        parse_line("click c1"),
        Ok(Some(Command::Click(Square::new(0, 2))))
    );
    assert_eq!(
        parse_line("click"),
        Err(CommandError::MissingArgument("click"))
    );
    assert_eq!(
        parse_line("click c0"),
        Err(CommandError::BadSquare("c0".to_string()))
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_line("castle"),
        Err(CommandError::Unknown("castle".to_string()))
    );
    assert_eq!(
        parse_line("undo 2"),
        Err(CommandError::UnexpectedArgument("undo"))
    );
}

#[test]
fn test_single_argument_commands_reject_extras() {
    assert_eq!(
        parse_line("moves a1 b2"),
        Err(CommandError::TooManyArguments("moves"))
    );
    assert_eq!(
        parse_line("play a4b3 c4d3"),
        Err(CommandError::TooManyArguments("play"))
    );
    assert_eq!(
        parse_line("click a4 b3"),
        Err(CommandError::TooManyArguments("click"))
    );
}
