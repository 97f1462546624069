use gaps::ArgEnum;
use gaps::ArrayOption;
use gaps::Claim;
use gaps::DoubleOption;
use gaps::EnumOption;
use gaps::FileForReadingOption;
use gaps::FileForWritingOption;
use gaps::FlagOption;
use gaps::IntegerOption;
use gaps::OptionParser;
use gaps::Setting;
use gaps::StringOption;

use crate::util::tokens;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Format {
    Pretty,
    Json,
}

impl ArgEnum for Format {
    const VARIANTS: &'static [Self] = &[Self::Pretty, Self::Json];

    fn as_arg(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

fn lenient() -> OptionParser {
    OptionParser::new()
        .setting(Setting::ThrowsErrors)
        .setting(Setting::AllowUnparsedOptions)
}

fn value(parser: &OptionParser, slot: gaps::Slot<StringOption>) -> Option<&str> {
    parser[slot].value().map(String::as_str)
}

#[test]
fn only_positionals() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let flag = parser.option(FlagOption::new(["bool"]));

    parser
        .try_parse_from(tokens(&["one", "two", "three"]), 1)
        .unwrap();

    assert_eq!(value(&parser, a), None);
    assert!(!parser[flag].value());
    assert_eq!(parser.unparsed_arguments(), ["one", "two", "three"]);
}

#[test]
fn positionals_between_options() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let b = parser.option(StringOption::new(["b"]));
    let c = parser.option(StringOption::new(["c"]));

    parser
        .try_parse_from(
            tokens(&[
                "-a", "string1", "one", "-b", "string2", "two", "-c", "string3", "three",
            ]),
            1,
        )
        .unwrap();

    assert_eq!(value(&parser, a), Some("string1"));
    assert_eq!(value(&parser, b), Some("string2"));
    assert_eq!(value(&parser, c), Some("string3"));
    assert_eq!(parser.unparsed_arguments(), ["one", "two", "three"]);
}

#[test]
fn stopped_arguments_follow_leftovers() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let c = parser.option(StringOption::new(["c"]));

    parser
        .try_parse_from(
            tokens(&[
                "one", "-c", "string", "two", "three", "--", "-four", "--five", "---six",
            ]),
            1,
        )
        .unwrap();

    assert_eq!(value(&parser, a), None);
    assert_eq!(value(&parser, c), Some("string"));
    assert_eq!(
        parser.unparsed_arguments(),
        ["one", "two", "three", "-four", "--five", "---six"]
    );
    assert_eq!(parser.stopped_arguments(), ["-four", "--five", "---six"]);
}

#[test]
fn declaration_order_does_not_reorder_leftovers() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let b = parser.option(StringOption::new(["b"]));
    let c = parser.option(StringOption::new(["c"]));
    let flag = parser.option(FlagOption::new(["bool"]));

    parser
        .try_parse_from(
            tokens(&[
                "-c", "string3", "one", "--bool", "-b", "string2", "two", "-a", "string1",
                "three",
            ]),
            1,
        )
        .unwrap();

    assert_eq!(value(&parser, a), Some("string1"));
    assert_eq!(value(&parser, b), Some("string2"));
    assert_eq!(value(&parser, c), Some("string3"));
    assert!(parser[flag].value());
    assert_eq!(parser.unparsed_arguments(), ["one", "two", "three"]);
}

#[test]
fn expansion() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let flags = ["a", "b", "c", "d"].map(|name| parser.option(FlagOption::new([name])));
    let strings = parser.option(ArrayOption::<String>::new(["strings"]));
    let optional = parser.option(StringOption::new(["optional"]).value_is_optional(true));

    parser
        .try_parse_from(
            tokens(&[
                "-abcd",
                "--strings=first",
                "second",
                "third",
                "--optional",
                "-a",
                "-b",
            ]),
            1,
        )
        .unwrap();

    for flag in flags {
        assert!(parser[flag].value());
    }
    assert_eq!(parser[flags[0]].count(), 2);
    assert_eq!(parser[flags[2]].count(), 1);
    assert_eq!(
        parser[strings].value().unwrap(),
        ["first", "second", "third"]
    );
    assert_eq!(value(&parser, optional), None);
    assert!(parser[optional].was_set());
    assert!(parser.unparsed_arguments().is_empty());
}

#[test]
fn repeated_flags_accumulate() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let f = parser.option(FlagOption::new(["f"]));

    parser.try_parse_from(tokens(&["-fff", "-ff"]), 1).unwrap();

    assert!(parser[f].value());
    assert_eq!(parser[f].count(), 5);
    assert!(parser.unparsed_arguments().is_empty());
}

#[test]
fn flag_leaves_following_value() {
    let mut parser = lenient();
    let v = parser.option(FlagOption::new(["v"]));

    parser.try_parse_from(tokens(&["-v", "file", "other"]), 1).unwrap();

    assert_eq!(parser[v].count(), 1);
    assert_eq!(parser.unparsed_arguments(), ["file", "other"]);
}

#[test]
fn negative_numbers_are_values() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let n = parser.option(IntegerOption::new(["n"]));
    let x = parser.option(DoubleOption::new(["x", "ratio"]));
    let list = parser.option(ArrayOption::<i32>::new(["list"]));

    parser
        .try_parse_from(tokens(&["-n", "-3", "--ratio=-0.25", "--list", "1", "-2", "3"]), 1)
        .unwrap();

    assert_eq!(parser[n].value(), Some(&-3));
    assert_eq!(parser[x].value(), Some(&-0.25));
    assert_eq!(parser[list].value().unwrap(), [1, -2, 3]);
}

#[test]
fn file_operand_is_a_value() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let input = parser.option(StringOption::new(["i", "input"]));

    parser.try_parse_from(tokens(&["-i", "-"]), 1).unwrap();

    assert_eq!(value(&parser, input), Some("-"));
}

#[test]
fn second_value_is_left_over() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));

    parser.try_parse_from(tokens(&["-a", "x", "y", "z"]), 1).unwrap();

    assert_eq!(value(&parser, a), Some("x"));
    assert_eq!(parser.unparsed_arguments(), ["y", "z"]);
}

#[test]
fn repeats_allowed_when_ignoring_single_value() {
    let mut parser = lenient().setting(Setting::IgnoreSingleValue);
    let a = parser.option(StringOption::new(["a"]));

    parser
        .try_parse_from(tokens(&["-a", "first", "-a", "second"]), 1)
        .unwrap();

    assert_eq!(value(&parser, a), Some("first"));
    assert_eq!(parser.unparsed_arguments(), ["second"]);
}

#[test]
fn start_index_skips_tokens() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));

    parser
        .try_parse_from(["tool", "sub", "-a", "x", "rest"], 2)
        .unwrap();

    assert_eq!(value(&parser, a), Some("x"));
    assert_eq!(parser.unparsed_arguments(), ["rest"]);
}

#[test]
fn empty_tokens_before_stop_are_dropped() {
    let mut parser = lenient();
    parser
        .try_parse_from(tokens(&["", "one", "", "--", "", "two"]), 1)
        .unwrap();

    assert_eq!(parser.unparsed_arguments(), ["one", "", "two"]);
}

#[test]
fn ignore_no_input() {
    let mut parser = OptionParser::new()
        .setting(Setting::ThrowsErrors)
        .setting(Setting::IgnoreNoInput);
    let a = parser.option(StringOption::new(["a"]));

    parser.try_parse_from(tokens(&[]), 1).unwrap();

    assert_eq!(value(&parser, a), None);
    assert!(parser.unparsed_arguments().is_empty());
}

#[test]
fn sequential_parses_do_not_leak() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let n = parser.option(IntegerOption::new(["n"]).default_value(7));
    let v = parser.option(FlagOption::new(["v"]));
    let list = parser.option(ArrayOption::<String>::new(["list"]));

    parser
        .try_parse_from(tokens(&["-a", "x", "-n", "1", "-vv", "--list", "p", "q", "left"]), 1)
        .unwrap();
    assert_eq!(value(&parser, a), Some("x"));
    assert_eq!(parser[n].value(), Some(&1));
    assert_eq!(parser[v].count(), 2);
    assert_eq!(parser[list].value().unwrap(), ["p", "q", "left"]);

    parser.try_parse_from(tokens(&["other"]), 1).unwrap();
    assert_eq!(value(&parser, a), None);
    assert!(!parser[a].was_set());
    assert_eq!(parser[n].value(), Some(&7));
    assert!(!parser[n].was_set());
    assert_eq!(parser[v].count(), 0);
    assert_eq!(parser[list].value(), None);
    assert_eq!(parser.unparsed_arguments(), ["other"]);
    assert!(parser.stopped_arguments().is_empty());
}

#[test]
fn every_token_accounted_for() {
    let mut parser = lenient();
    let a = parser.option(StringOption::new(["a"]));
    let v = parser.option(FlagOption::new(["v"]));

    parser
        .try_parse_from(tokens(&["x", "-v", "-a", "y", "z", "-q", "--", "w"]), 1)
        .unwrap();

    assert_eq!(parser[v].count(), 1);
    assert_eq!(value(&parser, a), Some("y"));
    assert_eq!(parser.unparsed_arguments(), ["x", "z", "-q", "w"]);
}

#[test]
fn nameless_assignment_is_left_over() {
    let mut parser = lenient();
    let a = parser.option(FlagOption::new(["a"]));
    let b = parser.option(FlagOption::new(["b"]));

    parser.try_parse_from(["--=x", "-ab"], 0).unwrap();

    assert_eq!(parser[a].count(), 1);
    assert_eq!(parser[b].count(), 1);
    assert_eq!(parser.unparsed_arguments(), ["--=x"]);
    assert!(parser.stopped_arguments().is_empty());
}

#[test]
fn numeric_flag_is_not_its_own_value() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let five = parser.option(ArrayOption::<String>::new(["5"]));

    parser
        .try_parse_from(tokens(&["-5", "x", "-5", "y"]), 1)
        .unwrap();

    assert_eq!(parser[five].value().unwrap(), ["x", "y"]);
    assert!(parser.unparsed_arguments().is_empty());
}

#[test]
fn enum_selects_variant() {
    let mut parser = lenient();
    let format = parser.option(EnumOption::new(["format"]).default_value(Format::Pretty));

    parser
        .try_parse_from(tokens(&["--format", "json", "pretty"]), 1)
        .unwrap();

    assert_eq!(parser[format].value(), Some(Format::Json));
    assert!(parser[format].was_set());
    assert_eq!(parser.unparsed_arguments(), ["pretty"]);
}

#[test]
fn enum_default_survives_absent_flag() {
    let mut parser = lenient();
    let format = parser.option(EnumOption::new(["format"]).default_value(Format::Pretty));

    parser
        .try_parse_from(tokens(&["--format=json"]), 1)
        .unwrap();
    assert_eq!(parser[format].value(), Some(Format::Json));

    parser.try_parse_from(tokens(&["other"]), 1).unwrap();
    assert_eq!(parser[format].value(), Some(Format::Pretty));
    assert!(!parser[format].was_set());
}

#[test]
fn file_options_claim_operand() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let input = parser.option(FileForReadingOption::new(["i", "input"]));
    let output = parser.option(FileForWritingOption::new(["o", "output"]));

    parser
        .try_parse_from(tokens(&["-i", "-", "--output", "-"]), 1)
        .unwrap();

    assert_eq!(parser[input].value(), Some("-"));
    assert_eq!(parser[output].value(), Some("-"));
    parser[input].validate().unwrap();
    parser[output].validate().unwrap();
}

#[test]
fn file_path_is_not_checked_while_parsing() {
    let mut parser = OptionParser::new().setting(Setting::ThrowsErrors);
    let input = parser.option(FileForReadingOption::new(["i"]));

    parser
        .try_parse_from(tokens(&["-i", "/does/not/exist"]), 1)
        .unwrap();

    assert!(parser[input].was_set());
    assert!(parser[input].validate().is_err());
}
