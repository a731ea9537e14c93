use broadside::convert::column_label;
use broadside::{Cell, CellConverter, Dimensions, ParseError};

fn converter() -> CellConverter {
    CellConverter::new(Dimensions::new(10, 10))
}

#[test]
fn test_parse_valid() {
    let conv = converter();
    assert_eq!(conv.parse("A1").unwrap(), Cell::new(1, 1));
    assert_eq!(conv.parse("j10").unwrap(), Cell::new(10, 10));
    assert_eq!(conv.parse("  c7 \n").unwrap(), Cell::new(3, 7));
}

#[test]
fn test_parse_errors() {
    let conv = converter();
    assert_eq!(conv.parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(conv.parse("   ").unwrap_err(), ParseError::Empty);
    assert_eq!(
        conv.parse("7").unwrap_err(),
        ParseError::MissingColumn("7".to_string())
    );
    assert_eq!(
        conv.parse("A").unwrap_err(),
        ParseError::InvalidRow(String::new())
    );
    // trailing letters extend the column, leaving no row
    assert_eq!(
        conv.parse("Ax").unwrap_err(),
        ParseError::InvalidRow(String::new())
    );
    for (input, rest) in [
        ("A+3", "+3"),
        ("A x", " x"),
        ("a 3", " 3"),
        ("B2x", "2x"),
        ("C-1", "-1"),
    ] {
        assert_eq!(
            conv.parse(input).unwrap_err(),
            ParseError::InvalidRow(rest.to_string()),
            "{} should not parse",
            input
        );
    }
    assert!(matches!(
        conv.parse("A99999999999999999999999"),
        Err(ParseError::InvalidRow(_))
    ));
    for input in ["K1", "A0", "A11"] {
        assert!(
            matches!(conv.parse(input), Err(ParseError::OutOfBounds { .. })),
            "{} should be off the board",
            input
        );
    }
}

#[test]
fn test_format() {
    let conv = converter();
    assert_eq!(conv.format(Cell::new(3, 7)).unwrap(), "C7");
    assert_eq!(conv.format(Cell::new(10, 10)).unwrap(), "J10");
    assert!(conv.format(Cell::new(11, 1)).is_err());
}

#[test]
fn test_column_labels() {
    assert_eq!(column_label(1), "A");
    assert_eq!(column_label(26), "Z");
    assert_eq!(column_label(27), "AA");
    assert_eq!(column_label(52), "AZ");
    assert_eq!(column_label(53), "BA");
}

#[test]
fn test_wide_board_columns_read_back() {
    let conv = CellConverter::new(Dimensions::new(30, 12));
    assert_eq!(conv.parse("ad12").unwrap(), Cell::new(30, 12));
    for cell in conv.dimensions().cells() {
        let text = conv.format(cell).unwrap();
        assert_eq!(conv.parse(&text).unwrap(), cell);
    }
}
