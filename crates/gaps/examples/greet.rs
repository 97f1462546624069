use gaps::ArgEnum;
use gaps::EnumOption;
use gaps::FlagOption;
use gaps::IntegerOption;
use gaps::OptionParser;
use gaps::StringOption;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Case {
    Lower,
    Upper,
}

impl ArgEnum for Case {
    const VARIANTS: &'static [Self] = &[Self::Lower, Self::Upper];

    fn as_arg(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

fn main() -> gaps::Result<()> {
    let mut parser = OptionParser::new().bin_name("greet");
    let name = parser.option(
        StringOption::new(["n", "name"])
            .required(true)
            .help("who to greet"),
    );
    let times = parser.option(
        IntegerOption::new(["t", "times"])
            .default_value(1)
            .help("how many greetings"),
    );
    let case = parser.option(
        EnumOption::new(["case"])
            .default_value(Case::Lower)
            .help("lower or upper"),
    );
    let shout = parser.option(FlagOption::new(["s", "shout"]).help("add exclamation marks"));

    parser.parse()?;

    let name = parser[name].value().map(String::as_str).unwrap_or("world");
    let mut message = format!("Hello {name}");
    if parser[case].value() == Some(Case::Upper) {
        message = message.to_uppercase();
    }
    message.push_str(&"!".repeat(parser[shout].count()));
    for _ in 0..parser[times].value().copied().unwrap_or(1) {
        println!("{message}");
    }
    Ok(())
}
