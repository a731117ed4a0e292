use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the parts of a snippet listing and the status lines around it
#[derive(Debug, Clone)]
pub struct Theme {
    pub keyword: Style,
    pub hidden: Style,
    pub stored: Style,
    pub missing: Style,
    pub failure: Style,
    pub banner: Style,
    pub label: Style,
}

impl Theme {
    /// Colors follow `console`'s terminal detection; `NO_COLOR` turns them off.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_none() && console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            keyword: Style::new().cyan().bold(),
            hidden: Style::new().bright_black().italic(),
            stored: Style::new().green(),
            missing: Style::new().yellow(),
            failure: Style::new().red().bold(),
            banner: Style::new().blue().bold(),
            label: Style::new().dimmed(),
        }
    }

    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            keyword: none,
            hidden: none,
            stored: none,
            missing: none,
            failure: none,
            banner: none,
            label: none,
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
