use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use steno_common::elements::{Identifier, Literal, Parameter, Shorthand, Signature, Steno};
use steno_common::source::Span;

use crate::error::GrammarError;
use crate::parse;

fn check(source: &str, expected: Steno) {
    match parse(source) {
        Ok(actual) => assert_eq!(expected, actual, "parsing {source:?}"),
        Err(error) => panic!("failed to parse {source:?}: {error}"),
    }
}

fn check_error(source: &str) -> GrammarError {
    match parse(source) {
        Ok(tree) => panic!("expected {source:?} to be rejected, got {tree:?}"),
        Err(error) => error,
    }
}

fn name(name: &str) -> Steno {
    Steno::name(name)
}

#[test]
fn parse_names() {
    check("int", name("int"));
    check("foo.bar.Baz", Identifier::dotted("foo.bar.Baz").into());
    check("order", name("order"));
    check("iterable", name("iterable"));
    check("Nonesuch", name("Nonesuch"));
}

#[test]
fn parse_keywords_are_not_names() {
    check_error("class");
    check_error("foo.class");
    check_error("def[int]");
    check_error("lambda or int");
}

#[test]
fn parse_generic() {
    check(
        "Mapping[str, int]",
        Steno::generic(Identifier::dotted("Mapping"), vec![name("str"), name("int")]),
    );

    check(
        "typing.Tuple[int, ...]",
        Steno::generic(
            Identifier::dotted("typing.Tuple"),
            vec![name("int"), Steno::Dots],
        ),
    );

    check_error("Mapping[]");
}

#[test]
fn parse_any_and_optional() {
    check("_", Steno::Any);
    check("?int", Steno::optional(name("int")));
    check("?_", Steno::optional(Steno::Any));
}

#[test]
fn parse_optional_takes_the_whole_union() {
    check(
        "?a or b",
        Steno::optional(Steno::Union(vec![name("a"), name("b")])),
    );
}

#[test]
fn parse_double_optional_is_rejected() {
    let error = check_error("??int");

    assert_eq!(
        GrammarError::Unexpected {
            span: Span::new(1, 2),
            expected: vec!["TYPE other than an optional".into()],
            found: "'?'".into(),
        },
        error
    );
}

#[test]
fn parse_unions_are_flat() {
    check("int or bool", Steno::Union(vec![name("int"), name("bool")]));

    check(
        "a or [b] or ?c",
        Steno::Union(vec![
            name("a"),
            Steno::list(name("b")),
            Steno::optional(name("c")),
        ]),
    );
}

#[test]
fn parse_containers() {
    check("[int]", Steno::list(name("int")));
    check("{int}", Steno::set(name("int")));
    check("{str: int}", Steno::dict(name("str"), name("int")));
    check(
        "{str: int or None}",
        Steno::dict(
            name("str"),
            Steno::Union(vec![name("int"), Literal::None.into()]),
        ),
    );
}

#[test]
fn parse_tuples() {
    check("(int)", Steno::Tuple(vec![name("int")]));
    check(
        "(foo, bar, ...)",
        Steno::Tuple(vec![name("foo"), name("bar"), Steno::Dots]),
    );

    check_error("()");
    check_error("(...)");
    check_error("(a, ..., b)");
}

#[test]
fn parse_parentheses_do_not_group() {
    check(
        "(a or b)",
        Steno::Tuple(vec![Steno::Union(vec![name("a"), name("b")])]),
    );
}

#[test]
fn parse_literals() {
    check("True", Literal::Bool(true).into());
    check("False", Literal::Bool(false).into());
    check("None", Literal::None.into());
    check("Ellipsis", Literal::Ellipsis.into());
    check("-12", Literal::Int(BigInt::from(-12)).into());
    check(
        "123456789012345678901234567890",
        Literal::Int("123456789012345678901234567890".parse().unwrap()).into(),
    );
    check(r#""foo""#, Literal::Str(r#""foo""#.into()).into());
    check("b'bar'", Literal::Bytes("b'bar'".into()).into());
}

#[test]
fn parse_shorthands() {
    for (source, kind) in [
        ("iter foo", Shorthand::Iterable),
        ("with foo", Shorthand::Context),
        ("await foo", Shorthand::Awaitable),
        ("async iter foo", Shorthand::AsyncIterable),
        ("async with foo", Shorthand::AsyncContext),
    ] {
        check(source, Steno::shorthand(kind, name("foo")));
    }

    check(
        "iter a or b",
        Steno::shorthand(
            Shorthand::Iterable,
            Steno::Union(vec![name("a"), name("b")]),
        ),
    );
}

#[test]
fn parse_full_signature() {
    let expected = Signature {
        positional: vec![Parameter::named("a", name("A")), Parameter::unnamed(name("B"))],
        mixed: vec![Parameter::unnamed(name("C")), Parameter::named("d", name("D"))],
        args: Some(Parameter::named("e", name("E"))),
        keywords: vec![Parameter::named("f", name("F"))],
        kwargs: Some(Parameter::named("g", name("G"))),
        returns: name("R"),
    };

    check(
        "(a: A, B, /, C, d: D, *e: E, f: F, **g: G) -> R",
        expected.into(),
    );
}

#[test]
fn parse_signature_sections() {
    check("() -> R", Signature::new(name("R")).into());

    check(
        "(A, B) -> R",
        Signature {
            mixed: vec![Parameter::unnamed(name("A")), Parameter::unnamed(name("B"))],
            ..Signature::new(name("R"))
        }
        .into(),
    );

    check(
        "(A, /) -> R",
        Signature {
            positional: vec![Parameter::unnamed(name("A"))],
            ..Signature::new(name("R"))
        }
        .into(),
    );

    check(
        "(*, f: F) -> R",
        Signature {
            keywords: vec![Parameter::named("f", name("F"))],
            ..Signature::new(name("R"))
        }
        .into(),
    );

    check(
        "(**g: G) -> R",
        Signature {
            kwargs: Some(Parameter::named("g", name("G"))),
            ..Signature::new(name("R"))
        }
        .into(),
    );

    check(
        "(A, *B, **C) -> R",
        Signature {
            mixed: vec![Parameter::unnamed(name("A"))],
            args: Some(Parameter::unnamed(name("B"))),
            kwargs: Some(Parameter::unnamed(name("C"))),
            ..Signature::new(name("R"))
        }
        .into(),
    );
}

#[test]
fn parse_unconstrained_signatures_agree() {
    let dots = parse("(...) -> R").unwrap();
    let star = parse("(*_) -> R").unwrap();

    assert_eq!(dots, star);
    assert_eq!(Steno::from(Signature::unconstrained(name("R"))), dots);
}

#[test]
fn parse_signature_returns_union() {
    check(
        "(a) -> b or c",
        Signature {
            mixed: vec![Parameter::unnamed(name("a"))],
            ..Signature::new(Steno::Union(vec![name("b"), name("c")]))
        }
        .into(),
    );
}

#[test]
fn parse_signature_is_never_a_union_member() {
    check_error("x or (a) -> b");
}

#[test]
fn parse_nested_signatures() {
    check(
        "(f: (int) -> str) -> [str]",
        Signature {
            mixed: vec![Parameter::named(
                "f",
                Signature {
                    mixed: vec![Parameter::unnamed(name("int"))],
                    ..Signature::new(name("str"))
                }
                .into(),
            )],
            ..Signature::new(Steno::list(name("str")))
        }
        .into(),
    );
}

#[test]
fn parse_signature_section_order_is_fixed() {
    check_error("(*a, /) -> R");
    check_error("(**a, b) -> R");
    check_error("(*a, *b) -> R");
    check_error("(a, ...) -> R");
    check_error("(f: F) R");
}

#[test]
fn parse_rejects_trailing_input() {
    let error = check_error("int int");

    assert_eq!(
        GrammarError::Unexpected {
            span: Span::new(4, 7),
            expected: vec![
                "'.'".into(),
                "'['".into(),
                "'or'".into(),
                "end of input".into(),
            ],
            found: "name `int`".into(),
        },
        error
    );
}

#[test]
fn parse_reports_end_of_input() {
    let error = check_error("[int");

    assert_eq!(Span::new(4, 4), error.span());
    assert!(matches!(
        error,
        GrammarError::Unexpected { ref expected, ref found, .. }
            if expected.contains(&"']'".to_string()) && found == "end of input"
    ));
}
