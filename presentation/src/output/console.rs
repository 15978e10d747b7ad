//! Console output formatter for joke sessions

use colored::Colorize;
use jokebot_application::{GenerationError, SelectionTarget, SessionSummary};
use jokebot_domain::{
    Category, Joke, Language, MenuChoice, PromptMessages, SelectionError, SessionState,
};

const WIDTH: usize = 60;

/// Formats session screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed once before the first menu
    pub fn welcome() -> String {
        let mut output = Self::header("🎉", "WELCOME TO JOKEBOT!");
        output.push_str(&format!(
            "    {}\n",
            "Short jokes on demand, one menu choice at a time.".dimmed()
        ));
        output.push_str(&Self::rule());
        output
    }

    /// Main menu with the current filters and history size
    pub fn menu(state: &SessionState) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n🎭 {} | {} {} | {} {} | {} {}\n",
            "Menu".bold(),
            "Category:".cyan(),
            state.category().as_str().to_uppercase().bold(),
            "Language:".cyan(),
            state.language().code().to_uppercase().bold(),
            "Jokes:".cyan(),
            state.history().len().to_string().bold(),
        ));
        output.push_str(&format!("{}\n", "-".repeat(70)));
        output.push_str("Pick an option:\n");

        let entries: Vec<String> = MenuChoice::ALL
            .iter()
            .map(|choice| {
                format!(
                    "[{}] {} {}",
                    choice.token().to_string().yellow().bold(),
                    Self::menu_icon(*choice),
                    choice.label()
                )
            })
            .collect();
        output.push_str(&entries[..3].join("  "));
        output.push('\n');
        output.push_str(&entries[3..].join("  "));
        output.push('\n');

        output
    }

    pub fn joke(joke: &Joke) -> String {
        format!("\n😂 {}\n\n{}", joke.text(), Self::rule())
    }

    pub fn generation_failed(error: &GenerationError) -> String {
        format!(
            "\n{} {}\n{}\n\n{}",
            "⚠️".yellow(),
            error.to_string().yellow(),
            "Try another category or language.".dimmed(),
            Self::rule()
        )
    }

    pub fn category_list(categories: &[Category], current: Category) -> String {
        let mut output = format!("\n📂 {}\n", "Available Categories:".cyan().bold());
        let entries: Vec<String> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let entry = format!("[{}] {}", i, category.display_name());
                if *category == current {
                    entry.bold().to_string()
                } else {
                    entry
                }
            })
            .collect();
        output.push_str(&entries.join("  "));
        output.push('\n');
        output
    }

    pub fn language_list(languages: &[Language], current: Language) -> String {
        let mut output = format!("\n🌐 {}\n", "Available Languages:".cyan().bold());
        for (i, language) in languages.iter().enumerate() {
            let entry = format!("[{}] {} ({})", i, language.name(), language.code());
            if *language == current {
                output.push_str(&format!("{}\n", entry.bold()));
            } else {
                output.push_str(&format!("{}\n", entry));
            }
        }
        output
    }

    pub fn category_changed(category: Category) -> String {
        format!(
            "{} Category changed to: {}\n\n{}",
            "✅".green(),
            category.as_str().to_uppercase().bold(),
            Self::rule()
        )
    }

    pub fn language_changed(language: Language) -> String {
        format!(
            "{} Language changed to: {}\n\n{}",
            "✅".green(),
            language.name().bold(),
            Self::rule()
        )
    }

    /// Warning for a rejected sub-menu selection
    pub fn selection_rejected(target: SelectionTarget, error: &SelectionError) -> String {
        let what = match error {
            SelectionError::OutOfRange { .. } => "Invalid selection",
            SelectionError::NotANumber(_) => "Invalid input",
        };
        format!(
            "{} {} ({}). Keeping current {}.\n\n{}",
            "⚠️".yellow(),
            what.yellow(),
            error,
            target.as_str(),
            Self::rule()
        )
    }

    pub fn history_reset(cleared: usize) -> String {
        format!(
            "\n🔁 Resetting joke history...\n{} Cleared {} jokes from history!\n\n{}",
            "✅".green(),
            cleared.to_string().bold(),
            Self::rule()
        )
    }

    pub fn unknown_choice(token: &str) -> String {
        let shown = if token.is_empty() { "<empty>" } else { token };
        let valid: Vec<String> = MenuChoice::ALL.iter().map(|c| c.token().to_string()).collect();
        format!(
            "{} Unknown option '{}'. Choose one of: {}\n",
            "⚠️".yellow(),
            shown,
            valid.join(", ")
        )
    }

    pub fn goodbye() -> String {
        Self::header("🚪", "GOODBYE!")
    }

    /// Closing summary of a finished session
    pub fn summary(summary: &SessionSummary) -> String {
        let mut output = Self::header("🎊", "SESSION COMPLETE!");
        output.push_str(&format!(
            "    📈 You enjoyed {} jokes during this session!\n",
            summary.jokes_enjoyed.to_string().bold()
        ));
        output.push_str(&format!(
            "    📂 Final category: {}\n",
            summary.category.as_str().to_uppercase()
        ));
        output.push_str(&format!(
            "    🌐 Final language: {}\n",
            summary.language.code().to_uppercase()
        ));
        output.push_str("    🙏 Thanks for using Jokebot!\n");
        output.push_str(&Self::rule());
        output
    }

    /// A formatted prompt for `--show-prompt`
    pub fn prompt(name: &str, messages: &PromptMessages) -> String {
        format!(
            "{}\n\n{}\n{}\n\n{}\n{}\n",
            format!("=== Prompt: {} ===", name).cyan().bold(),
            "System:".bold(),
            messages.system,
            "User:".bold(),
            messages.user
        )
    }

    fn header(icon: &str, title: &str) -> String {
        format!(
            "\n{}{}{}\n    {}\n{}",
            icon,
            "=".repeat(WIDTH - 2).cyan(),
            icon,
            title.bold(),
            Self::rule()
        )
    }

    fn rule() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }

    fn menu_icon(choice: MenuChoice) -> &'static str {
        match choice {
            MenuChoice::NextJoke => "🎭",
            MenuChoice::ChangeCategory => "📂",
            MenuChoice::ChangeLanguage => "🌐",
            MenuChoice::ResetHistory => "🔁",
            MenuChoice::Quit => "🚪",
        }
    }
}
