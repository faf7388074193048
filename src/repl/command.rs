//! REPL command table

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the next page of location areas",
            Command::MapBack => "Display the previous page of location areas",
            Command::Explore => "List the Pokemon found in a location area: explore <area>",
            Command::Catch => "Try to catch a Pokemon: catch <pokemon>",
            Command::Inspect => "Show details of a caught Pokemon: inspect <pokemon>",
            Command::Pokedex => "List every Pokemon you have caught",
        }
    }

    /// Looks a command up by its (already lower-cased) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

/// Splits a raw input line into lower-cased words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_command_by_name() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(
            clean_input("  Catch   PIKACHU \t"),
            vec!["catch".to_string(), "pikachu".to_string()]
        );
        assert!(clean_input("   ").is_empty());
    }
}
