/// When to emit ANSI colors for tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Defer to `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and terminal detection.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Installs this mode process-wide.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(anyhow::anyhow!("Unknown color mode '{}'", other)),
        }
    }
}
