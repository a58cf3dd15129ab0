//! Shell auto-completion setup.
//!
//! Writes the generated completion script to the user's home directory
//! and wires it into the shell's rc file. Fish is the exception: its
//! completions directory is autoloaded, so no rc edit happens there.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::OpsError;

/// Shells with completion support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Fish => "fish",
        }
    }

    fn completion_path(&self, home: &Path) -> PathBuf {
        match self {
            ShellKind::Fish => home.join(".config/fish/completions/opskit.fish"),
            _ => home.join(format!(".opskit-complete-{}.sh", self.as_str())),
        }
    }

    fn rc_file(&self, home: &Path) -> Option<PathBuf> {
        match self {
            ShellKind::Bash => Some(home.join(".bashrc")),
            ShellKind::Zsh => Some(home.join(".zshrc")),
            ShellKind::Fish => None,
        }
    }
}

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Shell to set up completion for
    pub shell: ShellKind,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command. `script` is the completion script rendered
/// for the selected shell.
pub fn execute_init(options: InitOptions, script: &str) -> Result<()> {
    let home = dirs::home_dir()
        .ok_or_else(|| OpsError::InvalidInput("cannot determine the home directory".into()))?;

    let completion_path = options.shell.completion_path(&home);
    if let Some(parent) = completion_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&completion_path, script)?;
    println!(
        "{} Auto-completion script generated at: {}",
        style("✓").green(),
        completion_path.display()
    );

    let Some(rc_file) = options.shell.rc_file(&home) else {
        println!("Auto-completion setup complete.");
        return Ok(());
    };

    let source_line = format!("source {}", completion_path.display());
    let rc_content = if rc_file.exists() {
        fs::read_to_string(&rc_file)?
    } else {
        String::new()
    };

    // Append the loader once; re-running init must not stack duplicates.
    if !rc_content.contains(&source_line) {
        let confirmed = options.yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!(
                    "Append the completion loader to {}?",
                    rc_file.display()
                ))
                .default(true)
                .interact()?;
        if !confirmed {
            println!("Skipped updating {}.", rc_file.display());
            return Ok(());
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&rc_file)?;
        writeln!(file, "\n# opskit auto-completion\n{source_line}")?;
    }

    println!("Auto-completion setup complete.");
    println!(
        "Please run 'source {}' to reload your shell configuration.",
        rc_file.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_script_lands_per_shell() {
        let home = Path::new("/home/ops");
        assert_eq!(
            ShellKind::Bash.completion_path(home),
            PathBuf::from("/home/ops/.opskit-complete-bash.sh")
        );
        assert_eq!(
            ShellKind::Zsh.completion_path(home),
            PathBuf::from("/home/ops/.opskit-complete-zsh.sh")
        );
        assert_eq!(
            ShellKind::Fish.completion_path(home),
            PathBuf::from("/home/ops/.config/fish/completions/opskit.fish")
        );
    }

    #[test]
    fn fish_has_no_rc_file() {
        let home = Path::new("/home/ops");
        assert_eq!(
            ShellKind::Bash.rc_file(home),
            Some(PathBuf::from("/home/ops/.bashrc"))
        );
        assert_eq!(
            ShellKind::Zsh.rc_file(home),
            Some(PathBuf::from("/home/ops/.zshrc"))
        );
        assert_eq!(ShellKind::Fish.rc_file(home), None);
    }
}
