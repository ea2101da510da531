use anyhow::Result;

use super::Context;
use crate::cli::output;
use crate::core::settings::SettingRegistry;

const USAGE: &str = include_str!("help.txt");

pub fn render(registry: &SettingRegistry) -> String {
    let mut text = USAGE.trim_end().to_string();
    text.push_str("\n\nSettings for 'alter':\n");
    for setting in registry.all() {
        text.push_str(&format!(
            "  {:<18} {} ({})\n",
            setting.subcommand, setting.description, setting.field
        ));
    }
    text
}

pub fn execute(ctx: &Context) -> Result<()> {
    let lines: Vec<String> = render(&ctx.settings).lines().map(str::to_string).collect();
    output::print_lines(&lines);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::dispatch::Command;
    use crate::core::default_registry;

    #[test]
    fn test_help_lists_every_command() {
        let text = render(&default_registry());
        for command in Command::ALL {
            assert!(text.contains(command.word()), "missing {command}");
        }
    }

    #[test]
    fn test_help_lists_every_setting() {
        let registry = default_registry();
        let text = render(&registry);
        for setting in registry.all() {
            assert!(text.contains(setting.subcommand));
            assert!(text.contains(setting.field));
        }
    }
}
