use crate::OptionParser;
use crate::ParserError;

impl OptionParser {
    /// The usage text: invocation line(s) followed by every option with help
    ///
    /// ```text
    /// usage: greet [-v] -n
    ///   -v --verbose   say more
    ///   -n --name      who to greet
    /// ```
    pub fn usage(&self) -> String {
        let title = match &self.help_name {
            Some(help_name) => format!("usage: {} {help_name} ", self.program_name()),
            None => format!("usage: {} ", self.program_name()),
        };
        let mut lines = indent_invocation(&title, &self.invocation_message());

        let documented = self
            .options()
            .filter(|option| option.help().is_some())
            .collect::<Vec<_>>();
        let short_width = documented
            .iter()
            .map(|option| option.flag().short().map_or(0, |s| s.chars().count()))
            .max()
            .unwrap_or(0);
        let long_width = documented
            .iter()
            .map(|option| option.flag().long().map_or(0, |l| l.chars().count()))
            .max()
            .unwrap_or(0);
        for option in documented {
            let short = option.flag().short().unwrap_or("");
            let long = option.flag().long().unwrap_or("");
            let help = option.help().unwrap_or("");
            lines.push(format!(
                "  {short:<short_width$} {long:<long_width$}   {help}"
            ));
        }

        lines.join("\n")
    }

    /// What the default failure policy writes to stderr, without styling
    pub fn render_failure(&self, err: &ParserError) -> String {
        let mut rendered = String::new();
        if let Some(message) = err.message() {
            rendered.push_str(&format!("{}: {message}\n", self.display_name()));
        }
        rendered.push_str(&self.usage());
        rendered.push('\n');
        rendered
    }

    /// The configured invocation, else one generated from the options:
    /// `[-o]` for optional flags, `-o` for required ones
    pub fn invocation_message(&self) -> String {
        if let Some(invocation) = &self.invocation {
            return invocation.clone();
        }
        self.options()
            .filter_map(|option| {
                let flag = option.flag().short().or(option.flag().long())?;
                if option.is_required() {
                    Some(flag.to_owned())
                } else {
                    Some(format!("[{flag}]"))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn program_name(&self) -> String {
        self.bin_name.clone().unwrap_or_else(default_bin_name)
    }

    pub(crate) fn display_name(&self) -> String {
        self.help_name.clone().unwrap_or_else(|| self.program_name())
    }
}

/// Continuation lines are aligned under the first one
pub(crate) fn indent_invocation(title: &str, invocation: &str) -> Vec<String> {
    let indent = " ".repeat(title.chars().count());
    let mut lines = invocation
        .split('\n')
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| match i {
            0 => format!("{title}{line}"),
            _ => format!("{indent}{line}"),
        })
        .collect::<Vec<_>>();
    if lines.is_empty() {
        lines.push(title.to_owned());
    }
    lines
}

/// File name of `argv[0]`
pub(crate) fn default_bin_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "program".to_owned())
}
