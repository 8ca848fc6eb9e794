//! Shell completions generation and installation.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::{Cli, CompletionsAction, ShellType};

const BIN_NAME: &str = "lumiq";

impl From<ShellType> for Shell {
    fn from(shell: ShellType) -> Self {
        match shell {
            ShellType::Bash => Self::Bash,
            ShellType::Zsh => Self::Zsh,
            ShellType::Fish => Self::Fish,
            ShellType::PowerShell => Self::PowerShell,
            ShellType::Elvish => Self::Elvish,
        }
    }
}

/// Run the completions command.
pub fn run(action: CompletionsAction) -> Result<()> {
    match action {
        CompletionsAction::Install { shell } => install(shell),
        CompletionsAction::Uninstall { shell } => uninstall(shell),
        CompletionsAction::Generate { shell } => {
            let mut cmd = Cli::command();
            generate(Shell::from(shell), &mut cmd, BIN_NAME, &mut io::stdout());
            Ok(())
        }
    }
}

fn generate_completions(shell: ShellType) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(Shell::from(shell), &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).context("Generated completions were not valid UTF-8")
}

/// Map a `$SHELL` value to a supported shell.
fn shell_from_path(shell_path: &str) -> Result<ShellType> {
    let shell_name = shell_path
        .rsplit('/')
        .next()
        .unwrap_or(shell_path)
        .to_lowercase();

    match shell_name.as_str() {
        "bash" => Ok(ShellType::Bash),
        "zsh" => Ok(ShellType::Zsh),
        "fish" => Ok(ShellType::Fish),
        "pwsh" | "powershell" => Ok(ShellType::PowerShell),
        "elvish" => Ok(ShellType::Elvish),
        other => bail!(
            "Unknown shell: {other}\n\
             Supported shells: bash, zsh, fish, powershell, elvish\n\
             Use --shell to specify your shell manually."
        ),
    }
}

fn detect_shell() -> Result<ShellType> {
    let shell_path = env::var("SHELL").context(
        "Could not detect shell from $SHELL environment variable.\n\
         Use --shell to specify your shell manually.",
    )?;
    shell_from_path(&shell_path)
}

/// Get the completions file path for a shell.
fn completions_path(shell: ShellType, home: &Path) -> PathBuf {
    let xdg_data =
        || env::var("XDG_DATA_HOME").map_or_else(|_| home.join(".local/share"), PathBuf::from);

    match shell {
        ShellType::Bash => xdg_data().join("bash-completion/completions/lumiq"),
        ShellType::Zsh => xdg_data().join("zsh/site-functions/_lumiq"),
        ShellType::Fish => env::var("XDG_CONFIG_HOME")
            .map_or_else(|_| home.join(".config"), PathBuf::from)
            .join("fish/completions/lumiq.fish"),
        ShellType::PowerShell => {
            if cfg!(windows) {
                home.join("Documents/PowerShell/Modules/LumiqCompletion/LumiqCompletion.psm1")
            } else {
                home.join(".config/powershell/Microsoft.PowerShell_profile.d/lumiq.ps1")
            }
        }
        ShellType::Elvish => home.join(".elvish/lib/lumiq.elv"),
    }
}

fn resolve(shell_override: Option<ShellType>) -> Result<(ShellType, PathBuf)> {
    let shell = match shell_override {
        Some(s) => s,
        None => detect_shell()?,
    };
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok((shell, completions_path(shell, &home)))
}

/// Install completions for the detected or specified shell.
fn install(shell_override: Option<ShellType>) -> Result<()> {
    let (shell, path) = resolve(shell_override)?;
    let completions = generate_completions(shell)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, &completions)
        .with_context(|| format!("Failed to write completions to: {}", path.display()))?;

    println!("✓ Installed {shell:?} completions to: {}", path.display());
    println!("  Restart your shell to pick them up.");

    Ok(())
}

/// Uninstall completions for the detected or specified shell.
fn uninstall(shell_override: Option<ShellType>) -> Result<()> {
    let (shell, path) = resolve(shell_override)?;

    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("Failed to remove: {}", path.display()))?;
        println!("✓ Removed {shell:?} completions from: {}", path.display());
    } else {
        println!("No completions file found at: {}", path.display());
    }

    Ok(())
}
