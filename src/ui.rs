use std::path::Path;

use is_terminal::IsTerminal;
use wardrobe_advisor::presentation::Icons;
use wardrobe_advisor::{Config, ConfigWarning};

/// Unicode icons only on a terminal, and only if the config allows them.
pub fn icons(config: &Config) -> Icons {
    Icons::select(config.output.unicode && std::io::stdout().is_terminal())
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let path: &Path = &w.file;
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
