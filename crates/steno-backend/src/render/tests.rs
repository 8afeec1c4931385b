use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use steno_common::elements::{
    CallableParameters, Identifier, Literal, Parameter, Shorthand, Signature, Steno,
};

use super::{render, Renderer};
use crate::error::RenderError;

fn name(name: &str) -> Steno {
    Steno::name(name)
}

fn check(tree: Steno, expected: &str) {
    match render(&tree) {
        Ok(actual) => assert_eq!(expected, actual),
        Err(error) => panic!("failed to render {tree:?}: {error}"),
    }
}

fn check_error(tree: Steno, expected: RenderError) {
    assert_eq!(Err(expected), render(&tree));
}

/// Render `tree` and check that parsing the text gives back the same tree.
fn round_trip(tree: Steno) {
    let text = render(&tree).unwrap_or_else(|error| panic!("failed to render {tree:?}: {error}"));
    let parsed = steno_frontend::parse(&text)
        .unwrap_or_else(|error| panic!("failed to parse {text:?}: {error}"));

    assert_eq!(tree, parsed, "round trip through {text:?}");
}

#[test]
fn render_names() {
    check(Steno::Dots, "...");
    check(name("int"), "int");
    check(Identifier::dotted("typing.Any").into(), "typing.Any");
    check(
        Steno::generic(Identifier::dotted("Mapping"), vec![name("str"), Steno::Dots]),
        "Mapping[str, ...]",
    );
}

#[test]
fn render_special_forms() {
    check(Steno::Any, "_");
    check(Steno::optional(name("int")), "?int");
    check(
        Steno::Union(vec![name("int"), Steno::Any, name("str")]),
        "int or _ or str",
    );
}

#[test]
fn render_containers() {
    check(Steno::Tuple(vec![name("a"), Steno::Dots]), "(a, ...)");
    check(Steno::Tuple(vec![name("a")]), "(a)");
    check(Steno::list(name("a")), "[a]");
    check(Steno::set(name("a")), "{a}");
    check(Steno::dict(name("k"), name("v")), "{k: v}");
}

#[test]
fn render_literals() {
    check(Literal::Bool(true).into(), "True");
    check(Literal::Bool(false).into(), "False");
    check(Literal::None.into(), "None");
    check(Literal::Ellipsis.into(), "Ellipsis");
    check(Literal::Int(BigInt::from(-7)).into(), "-7");
    check(Literal::Str(r#""a \" b""#.into()).into(), r#""a \" b""#);
    check(Literal::Bytes("b'x'".into()).into(), "b'x'");
}

#[test]
fn render_shorthands() {
    check(Steno::shorthand(Shorthand::Iterable, name("a")), "iter a");
    check(
        Steno::shorthand(Shorthand::AsyncContext, name("a")),
        "async with a",
    );
}

#[test]
fn render_signatures() {
    let full = Signature {
        positional: vec![Parameter::named("a", name("A")), Parameter::unnamed(name("B"))],
        mixed: vec![Parameter::unnamed(name("C")), Parameter::named("d", name("D"))],
        args: Some(Parameter::named("e", name("E"))),
        keywords: vec![Parameter::named("f", name("F"))],
        kwargs: Some(Parameter::named("g", name("G"))),
        returns: name("R"),
    };

    check(
        full.into(),
        "(a: A, B, /, C, d: D, *e: E, f: F, **g: G) -> R",
    );
    check(Signature::new(name("R")).into(), "() -> R");
    check(Signature::unconstrained(name("R")).into(), "(...) -> R");
    check(
        Signature {
            keywords: vec![Parameter::named("f", name("F"))],
            ..Signature::new(name("R"))
        }
        .into(),
        "(*, f: F) -> R",
    );
}

#[test]
fn render_callables() {
    check(
        Steno::callable(
            CallableParameters::Fixed(vec![name("A"), name("B")]),
            name("R"),
        ),
        "typing.Callable[[A, B], R]",
    );
    check(
        Steno::callable(CallableParameters::Fixed(Vec::new()), name("R")),
        "typing.Callable[[], R]",
    );
    check(
        Steno::callable(CallableParameters::Any, name("R")),
        "typing.Callable[..., R]",
    );
}

#[test]
fn render_callables_in_namespace() {
    let tree = Steno::callable(CallableParameters::Any, name("R"));

    assert_eq!(
        Ok("te.Callable[..., R]".to_string()),
        Renderer::new("te").render(&tree)
    );
    assert_eq!(
        Ok("Callable[..., R]".to_string()),
        Renderer::new("").render(&tree)
    );
}

#[test]
fn refuse_unspellable_trees() {
    check_error(
        Steno::Union(vec![
            name("a"),
            Steno::Union(vec![name("b"), name("c")]),
        ]),
        RenderError::NestedUnion,
    );

    check_error(
        Steno::optional(Steno::optional(name("a"))),
        RenderError::NestedOptional,
    );

    check_error(
        Steno::Union(vec![name("a"), Signature::new(name("R")).into()]),
        RenderError::UnionMember { shape: "signature" },
    );

    check_error(
        Steno::Union(vec![Steno::optional(name("a")), name("b")]),
        RenderError::UnionMember { shape: "optional" },
    );
}

#[test]
fn refuse_malformed_trees() {
    check_error(
        Steno::Tuple(vec![Steno::Dots, name("a")]),
        RenderError::Malformed {
            shape: "tuple",
            reason: "`...` may only be the last element of a tuple",
        },
    );

    check_error(
        Steno::generic(Identifier(Vec::new()), vec![name("a")]),
        RenderError::Malformed {
            shape: "generic",
            reason: "an identifier needs at least one segment",
        },
    );
}

#[test]
fn prefix_forms_may_end_a_union() {
    check(
        Steno::Union(vec![name("a"), Steno::optional(name("b"))]),
        "a or ?b",
    );
    round_trip(Steno::Union(vec![name("a"), Steno::optional(name("b"))]));
}

#[test]
fn round_trip_parseable_trees() {
    round_trip(Steno::optional(name("int")));
    round_trip(Steno::Union(vec![name("int"), name("bool")]));
    round_trip(Steno::Tuple(vec![name("foo"), name("bar"), Steno::Dots]));
    round_trip(Steno::dict(
        Steno::Union(vec![name("a"), Literal::None.into()]),
        Steno::set(Steno::Any),
    ));
    round_trip(Steno::generic(
        Identifier::dotted("collections.abc.Mapping"),
        vec![name("str"), Steno::list(Literal::Int(BigInt::from(3)).into())],
    ));
    round_trip(Steno::shorthand(
        Shorthand::AsyncIterable,
        Steno::optional(Steno::Union(vec![name("a"), name("b")])),
    ));
    round_trip(Steno::Tuple(vec![Steno::Union(vec![name("a"), name("b")])]));

    for kind in Shorthand::ALL {
        round_trip(Steno::shorthand(kind, name("x")));
    }
}

#[test]
fn round_trip_signatures() {
    round_trip(
        Signature {
            positional: vec![Parameter::named("a", name("A")), Parameter::unnamed(name("B"))],
            mixed: vec![Parameter::unnamed(name("C")), Parameter::named("d", name("D"))],
            args: Some(Parameter::named("e", name("E"))),
            keywords: vec![Parameter::named("f", name("F"))],
            kwargs: Some(Parameter::named("g", name("G"))),
            returns: Steno::Union(vec![name("R"), Literal::None.into()]),
        }
        .into(),
    );
    round_trip(Signature::unconstrained(name("R")).into());
    round_trip(Signature::new(Signature::new(name("R")).into()).into());
}
