//! Static help and usage tables.

use metar_core::{
    Embed,
    embed::{BLURPLE, EmbedKind},
};

pub const COMMANDS: &[&str] = &["weather", "help", "man"];

pub const HELP_TEXT: &str = "`/weather` - show weather at selected airport\n\
                             `/help` - show this help message\n\
                             `/man [command]` - show command info";

pub fn usage(command: &str) -> Option<&'static str> {
    match command {
        "weather" => Some("/weather (ICAO)"),
        "help" => Some("/help"),
        "man" => Some("/man (command)"),
        _ => None,
    }
}

pub fn arguments(command: &str) -> Option<&'static str> {
    match command {
        "weather" => Some(
            "(ICAO) - airport ICAO code, consists of 4 symbols\n\
             \x20        Allowed input: text\n",
        ),
        "help" => Some("None"),
        "man" => Some(
            "(command) - any command from /help output\n\
             \x20           Allowed input: text, refer to /help command output",
        ),
        _ => None,
    }
}

pub fn help_embed() -> Embed {
    Embed::custom("Available commands", HELP_TEXT, EmbedKind::Info)
}

pub fn man_embed(command: &str) -> Embed {
    let mut embed = Embed::new("Commands", BLURPLE);

    match (COMMANDS.contains(&command), usage(command), arguments(command)) {
        (true, Some(usage), Some(args)) => {
            embed.add_field("Command name", command, false);
            embed.add_field("Usage", usage, false);
            embed.add_field("Arguments", args, false);
        }
        _ => {
            embed.add_field("Command not found", "For available commands list use /help", false);
        }
    }

    embed
}
