use gaps::FlagOption;
use gaps::IntegerOption;
use gaps::OptionParser;
use gaps::ParserError;
use gaps::Setting;
use gaps::StringOption;

fn documented() -> OptionParser {
    let mut parser = OptionParser::new()
        .bin_name("app")
        .setting(Setting::ThrowsErrors);
    parser.option(FlagOption::new(["v", "verbose"]).help("say more"));
    parser.option(
        StringOption::new(["o", "output"])
            .required(true)
            .help("where to write"),
    );
    parser.option(IntegerOption::new(["jobs"]).help("parallelism"));
    parser.option(FlagOption::new(["q"]));
    parser
}

#[test]
fn columns_align() {
    let parser = documented();

    snapbox::assert_eq(
        "\
usage: app [-v] -o [--jobs] [-q]
  -v --verbose   say more
  -o --output    where to write
     --jobs      parallelism",
        parser.usage(),
    );
}

#[test]
fn long_only_options() {
    let mut parser = OptionParser::new().bin_name("app");
    parser.option(FlagOption::new(["all"]).help("everything"));
    parser.option(FlagOption::new(["none"]).help("nothing"));

    snapbox::assert_eq(
        "\
usage: app [--all] [--none]
   --all    everything
   --none   nothing",
        parser.usage(),
    );
}

#[test]
fn custom_invocation_under_help_name() {
    let mut parser = OptionParser::new()
        .bin_name("tool")
        .help_name("build")
        .invocation("-t TARGET\n[-r]");
    parser.option(StringOption::new(["t"]).required(true));
    parser.option(FlagOption::new(["r", "release"]).help("optimize"));

    snapbox::assert_eq(
        "\
usage: tool build -t TARGET
                  [-r]
  -r --release   optimize",
        parser.usage(),
    );
}

#[test]
fn empty_parser() {
    let parser = OptionParser::new().bin_name("app");

    assert_eq!(parser.invocation_message(), "");
    assert_eq!(parser.usage(), "usage: app ");
}

#[test]
fn failure_with_message() {
    let mut parser = documented();
    let err = parser
        .try_parse_from(["app", "-v", "-o", "out", "--jobs", "many"], 1)
        .unwrap_err();

    snapbox::assert_eq(
        "\
app: invalid value 'many' for option '--jobs'
usage: app [-v] -o [--jobs] [-q]
  -v --verbose   say more
  -o --output    where to write
     --jobs      parallelism
",
        parser.render_failure(&err),
    );
}

#[test]
fn failure_without_message() {
    let parser = documented();

    snapbox::assert_eq(
        "\
usage: app [-v] -o [--jobs] [-q]
  -v --verbose   say more
  -o --output    where to write
     --jobs      parallelism
",
        parser.render_failure(&ParserError::NoInput),
    );
}

#[test]
fn failure_names_sub_command() {
    let mut parser = OptionParser::new()
        .bin_name("tool")
        .help_name("build")
        .setting(Setting::ThrowsErrors);
    parser.option(StringOption::new(["t", "target"]).required(true));

    let err = parser.try_parse_from(["tool", "build", "-x"], 2).unwrap_err();

    snapbox::assert_eq(
        "\
build: missing required option '-t, --target'
usage: tool build -t
",
        parser.render_failure(&err),
    );
}
