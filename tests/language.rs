use std::fs;

use intcalc::{
    ast::{BinaryOperator, Expr},
    config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN},
    error::{ArithmeticError, Error, ParseError},
    evaluate, get_result, get_result_with,
    interpreter::{
        lexer::{Scanner, Token, TokenKind},
        parser::core::Parser,
    },
    parse, parse_with, render,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, (input, expected)) in extract_cases(&content) {
            count += 1;
            let actual = get_result(input);
            let matches = match expected {
                "!syntax" => matches!(actual, Err(Error::Parse(ParseError::Syntax { .. }))),
                "!division-by-zero" => {
                    actual == Err(Error::Arithmetic(ArithmeticError::DivisionByZero))
                },
                "!overflow" => actual == Err(Error::Arithmetic(ArithmeticError::Overflow)),
                "!literal-too-large" => {
                    matches!(actual, Err(Error::Parse(ParseError::LiteralTooLarge { .. })))
                },
                value => {
                    let value: i64 = value.parse()
                                          .unwrap_or_else(|e| panic!("{path:?}:{line_no}: {e}"));
                    actual == Ok(value)
                },
            };
            assert!(matches,
                    "{path:?}:{line_no}: `{input}` expected {expected}, got {actual:?}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(usize, (&str, &str))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
           .map(|(i, line)| {
               let case = line.split_once(" => ")
                              .unwrap_or_else(|| panic!("line {} has no ` => `", i + 1));
               (i + 1, (case.0, case.1.trim()))
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) {
    match get_result(src) {
        Err(Error::Parse(ParseError::Syntax { .. })) => {},
        other => panic!("`{src}` should be a syntax error, got {other:?}"),
    }
}

#[test]
fn literals_evaluate_to_their_value() {
    for value in (0..1000).chain([12_345, 4_294_967_296, i64::MAX]) {
        assert_value(&value.to_string(), value);
    }
    assert_value("0000", 0);
    assert_value("00042", 42);
}

#[test]
fn single_operations_match_integer_arithmetic() {
    for a in 0..30_i64 {
        for b in 0..30_i64 {
            assert_value(&format!("{a}+{b}"), a + b);
            assert_value(&format!("{a}-{b}"), a - b);
            assert_value(&format!("{a}*{b}"), a * b);
            if b != 0 {
                assert_value(&format!("{a}/{b}"), a / b);
            }
        }
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14);
    assert_value("10-2-3", 5);
    assert_value("8/4/2", 1);
    assert_value("(2+3)*4", 20);
    assert_value("(1+2)*(3+4)/(5-2)", 7);
}

#[test]
fn multiplicative_operators_sit_deeper_in_the_tree() {
    let tree = parse("1+2*3").unwrap();
    assert_eq!(tree,
               Expr::binary(Expr::literal(1),
                            BinaryOperator::Add,
                            Expr::binary(Expr::literal(2), BinaryOperator::Mul, Expr::literal(3))));
}

#[test]
fn equal_precedence_folds_to_the_left() {
    let tree = parse("10-2-3").unwrap();
    assert_eq!(tree,
               Expr::binary(Expr::binary(Expr::literal(10), BinaryOperator::Sub, Expr::literal(2)),
                            BinaryOperator::Sub,
                            Expr::literal(3)));
    assert_eq!(tree.depth(), 3);
}

#[test]
fn parentheses_do_not_create_nodes() {
    assert_eq!(parse("((42))").unwrap(), Expr::literal(42));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(get_result("5/0"),
               Err(Error::Arithmetic(ArithmeticError::DivisionByZero)));
    assert_eq!(get_result("1/(2-2)+3"),
               Err(Error::Arithmetic(ArithmeticError::DivisionByZero)));
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("(0-7)/2", -3);
    assert_value("7/(0-2)", -3);
    assert_value("(0-7)/(0-2)", 3);
}

#[test]
fn overflow_is_error() {
    assert_eq!(get_result("9223372036854775807*2"),
               Err(Error::Arithmetic(ArithmeticError::Overflow)));
    assert_eq!(get_result("9223372036854775807+1"),
               Err(Error::Arithmetic(ArithmeticError::Overflow)));
}

#[test]
fn oversized_literal_is_error() {
    assert_eq!(get_result("1+99999999999999999999"),
               Err(Error::Parse(ParseError::LiteralTooLarge { offset: 2 })));
}

#[test]
fn malformed_input_is_error() {
    assert_syntax_error("2+");
    assert_syntax_error("(2+3");
    assert_syntax_error(")2+3(");
    assert_syntax_error("");
    assert_syntax_error("1 2");
}

#[test]
fn syntax_errors_name_expected_and_found_kinds() {
    assert_eq!(parse("(2+3"),
               Err(ParseError::Syntax { expected: Some(TokenKind::RParen),
                                        found:    TokenKind::EndOfInput, }));
    assert_eq!(parse("2+"),
               Err(ParseError::Syntax { expected: None,
                                        found:    TokenKind::EndOfInput, }));
    assert_eq!(parse(")2+3("),
               Err(ParseError::Syntax { expected: None,
                                        found:    TokenKind::RParen, }));
    assert_eq!(parse("(1))"),
               Err(ParseError::Syntax { expected: Some(TokenKind::EndOfInput),
                                        found:    TokenKind::RParen, }));
}

#[test]
fn whitespace_and_unknown_characters_are_skipped() {
    assert_eq!(get_result("2 + 3"), get_result("2+3"));
    assert_eq!(get_result(" 2\t+ 3 "), Ok(5));
    assert_eq!(get_result("2 apples + 3 pears"), Ok(5));
    assert_eq!(get_result("€2+3€"), Ok(5));
    assert_eq!(get_result("2 \u{1F600} + 3"), Ok(5));
}

#[test]
fn scanner_never_reports_unknown_characters() {
    let mut scanner = Scanner::new("\u{1F600}#7@");
    assert_eq!(scanner.next_token(), Ok(Token::Integer(7)));
    assert_eq!(scanner.next_token(), Ok(Token::EndOfInput));
    assert_eq!(Scanner::tokenize("§$%&"), Ok(vec![Token::EndOfInput]));
}

#[test]
fn input_ends_at_line_break_or_nul() {
    assert_eq!(get_result("2+3\n"), Ok(5));
    assert_eq!(get_result("2+3\n*100"), Ok(5));
    assert_eq!(get_result("2+3\0*100"), Ok(5));
    assert_syntax_error("\n2+3");
}

#[test]
fn rendering_reevaluates_to_the_same_value() {
    for src in ["2+3*4", "10-2-3", "8/4/2", "1*2+3*4-5/6", "100/7*7+100-7"] {
        let tree = parse(src).unwrap();
        let rendered = render(&tree);
        assert_eq!(rendered, src);
        assert_eq!(evaluate(&parse(&rendered).unwrap()), evaluate(&tree));
    }
}

#[test]
fn rendering_drops_parentheses() {
    let tree = parse("(2 + 3) * 4").unwrap();
    assert_eq!(render(&tree), "2+3*4");
    assert_eq!(evaluate(&tree), Ok(20));
    assert_eq!(get_result(&render(&tree)), Ok(14));
}

#[test]
fn input_length_is_guarded() {
    let long = "1+".repeat(50) + "1";
    assert_eq!(long.len(), 101);
    assert_eq!(get_result(&long),
               Err(Error::Parse(ParseError::InputTooLong { len: 101,
                                                           max: DEFAULT_MAX_INPUT_LEN, })));
    assert_eq!(get_result_with(&long, &Config::unlimited()), Ok(51));

    let config = Config { max_input_len: Some(3),
                          ..Config::default() };
    assert_eq!(parse_with("1+2", &config), Ok(parse("1+2").unwrap()));
    assert_eq!(parse_with("1+22", &config),
               Err(ParseError::InputTooLong { len: 4, max: 3 }));
    assert_eq!(parse_with("1+2\nignored tail", &config),
               Ok(parse("1+2").unwrap()));
}

#[test]
fn input_length_is_checked_before_scanning() {
    let long = "9".repeat(200);
    assert_eq!(Config::default().check_input_len(&long),
               Err(ParseError::InputTooLong { len: 200,
                                              max: DEFAULT_MAX_INPUT_LEN, }));
    assert_eq!(Config::unlimited().check_input_len(&long), Ok(()));
    assert!(matches!(Scanner::tokenize(&long), Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn scanner_peek_has_no_side_effects() {
    let mut scanner = Scanner::new(" 12 +(");
    assert_eq!(scanner.peek_token(), Ok(Token::Integer(12)));
    assert_eq!(scanner.peek_token(), Ok(Token::Integer(12)));
    assert_eq!(scanner.offset(), 0);
    assert_eq!(scanner.next_token(), Ok(Token::Integer(12)));
    assert_eq!(scanner.offset(), 3);
    assert_eq!(scanner.peek_token(), Ok(Token::Plus));
    assert_eq!(scanner.next_token(), Ok(Token::Plus));
    assert_eq!(scanner.next_token(), Ok(Token::LParen));
    assert_eq!(scanner.peek_token(), Ok(Token::EndOfInput));
    assert_eq!(scanner.next_token(), Ok(Token::EndOfInput));
}

#[test]
fn scanner_eat_token_checks_kind() {
    let mut scanner = Scanner::new("3*");
    assert_eq!(scanner.eat_token(TokenKind::Integer), Ok(Token::Integer(3)));
    assert_eq!(scanner.eat_token(TokenKind::Plus),
               Err(ParseError::Syntax { expected: Some(TokenKind::Plus),
                                        found:    TokenKind::Star, }));
}

#[test]
fn scanner_tokenizes_borrowed_input() {
    let source = String::from("7 / (1)");
    let tokens = Scanner::tokenize(&source);
    drop(source);
    assert_eq!(tokens,
               Ok(vec![Token::Integer(7),
                       Token::Slash,
                       Token::LParen,
                       Token::Integer(1),
                       Token::RParen,
                       Token::EndOfInput]));
}

#[test]
fn scanner_tokenizes_every_kind() {
    assert_eq!(Scanner::tokenize("(1+2)-3*4/5"),
               Ok(vec![Token::LParen,
                       Token::Integer(1),
                       Token::Plus,
                       Token::Integer(2),
                       Token::RParen,
                       Token::Minus,
                       Token::Integer(3),
                       Token::Star,
                       Token::Integer(4),
                       Token::Slash,
                       Token::Integer(5),
                       Token::EndOfInput]));
}

#[test]
fn parser_eat_advances_only_on_match() {
    let mut parser = Parser::new(Scanner::new("(7")).unwrap();
    assert_eq!(parser.eat(TokenKind::Integer),
               Err(ParseError::Syntax { expected: Some(TokenKind::Integer),
                                        found:    TokenKind::LParen, }));
    assert_eq!(parser.current(), &Token::LParen);
    assert_eq!(parser.eat(TokenKind::LParen), Ok(Token::LParen));
    assert_eq!(parser.current(), &Token::Integer(7));
}

#[test]
fn parse_expression_leaves_trailing_tokens() {
    let mut parser = Parser::new(Scanner::new("1+2)")).unwrap();
    let tree = parser.parse_expression().unwrap();
    assert_eq!(render(&tree), "1+2");
    assert_eq!(parser.current(), &Token::RParen);
}

#[test]
fn deeply_nested_parentheses() {
    let src = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert_value(&src, 1);

    let at_limit = format!("{}1{}", "(".repeat(DEFAULT_MAX_DEPTH), ")".repeat(DEFAULT_MAX_DEPTH));
    assert_eq!(get_result_with(&at_limit, &Config::unlimited()), Ok(1));
}

#[test]
fn nesting_is_bounded_without_input_limit() {
    let src = "(".repeat(200_000) + "1" + &")".repeat(200_000);
    assert_eq!(get_result_with(&src, &Config::unlimited()),
               Err(Error::Parse(ParseError::TooDeep { max: DEFAULT_MAX_DEPTH })));

    let unclosed = "(".repeat(DEFAULT_MAX_DEPTH + 1) + "1";
    assert_eq!(get_result_with(&unclosed, &Config::unlimited()),
               Err(Error::Parse(ParseError::TooDeep { max: DEFAULT_MAX_DEPTH })));
}

#[test]
fn operator_chains_are_bounded_without_input_limit() {
    let src = "1+".repeat(2_000_000) + "1";
    assert_eq!(get_result_with(&src, &Config::unlimited()),
               Err(Error::Parse(ParseError::TooDeep { max: DEFAULT_MAX_DEPTH })));

    let src = "2*".repeat(2_000_000) + "2";
    assert_eq!(get_result_with(&src, &Config::unlimited()),
               Err(Error::Parse(ParseError::TooDeep { max: DEFAULT_MAX_DEPTH })));
}

#[test]
fn depth_limit_applies_at_its_boundary() {
    let config = Config { max_depth: 3,
                          ..Config::unlimited() };
    let too_deep = Err(ParseError::TooDeep { max: 3 });

    assert_eq!(parse_with("(((1)))", &config).map(|tree| tree.depth()), Ok(1));
    assert_eq!(parse_with("((((1))))", &config), too_deep);

    assert_eq!(parse_with("1+2+3", &config).map(|tree| tree.depth()), Ok(3));
    assert_eq!(parse_with("1+2+3+4", &config), too_deep);
    assert_eq!(parse_with("1*2*3", &config).map(|tree| tree.depth()), Ok(3));
    assert_eq!(parse_with("1*2*3*4", &config), too_deep);
    assert_eq!(parse_with("1+2*3*4", &config), too_deep);
    assert_eq!(parse_with("1+(2+(3+4))", &config), too_deep);
    assert_eq!(parse_with("(1+2)*(3+4)", &config).map(|tree| tree.depth()), Ok(3));
}

#[test]
fn parser_depth_bound_is_configurable() {
    assert_eq!(Parser::with_max_depth(Scanner::new("(1)"), 0).unwrap().parse(),
               Err(ParseError::TooDeep { max: 0 }));
    assert_eq!(Parser::with_max_depth(Scanner::new("1"), 1).unwrap().parse(),
               Ok(Expr::literal(1)));
    assert_eq!(Parser::with_max_depth(Scanner::new("1+1"), 1).unwrap().parse(),
               Err(ParseError::TooDeep { max: 1 }));
}

#[test]
fn independent_inputs_evaluate_on_separate_threads() {
    let handles: Vec<_> = (0..8_i64).map(|i| std::thread::spawn(move || get_result(&format!("{i}*({i}+1)"))))
                                    .collect();
    for (i, handle) in (0..8_i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(i * (i + 1)));
    }
}

#[test]
fn errors_render_as_messages() {
    assert_eq!(get_result("5/0").unwrap_err().to_string(), "Division by zero.");
    assert_eq!(get_result("(2+3").unwrap_err().to_string(),
               "Invalid syntax: expected ')', found end of input.");
    assert_eq!(get_result("2+").unwrap_err().to_string(),
               "Invalid syntax: unexpected end of input.");
    let config = Config { max_depth: 2,
                          ..Config::default() };
    assert_eq!(get_result_with("1+2+3", &config).unwrap_err().to_string(),
               "Expression nests deeper than the limit of 2.");
}

#[test]
fn pipeline_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Expr>();
    assert_send_sync::<Error>();
    assert_send_sync::<Config>();
    assert_send_sync::<Token>();
}
