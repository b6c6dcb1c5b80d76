use colored::Colorize;

pub struct Theme {
    pub answer: fn(&str) -> String,
    pub sql: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub prompt: fn(&str) -> String,
    pub hint: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            answer: |s| s.white().to_string(),
            sql: |s| s.yellow().to_string(),
            label: |s| s.cyan().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            prompt: |s| s.bright_magenta().bold().to_string(),
            hint: |s| s.bright_white().dimmed().italic().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            answer: |s| s.bright_white().to_string(),
            sql: |s| s.cyan().to_string(),
            label: |s| s.green().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            prompt: |s| s.red().bold().to_string(),
            hint: |s| s.bright_yellow().dimmed().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            answer: |s| s.black().to_string(),
            sql: |s| s.magenta().to_string(),
            label: |s| s.bright_cyan().bold().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            prompt: |s| s.blue().bold().to_string(),
            hint: |s| s.bright_black().italic().to_string(),
        }
    }
}
