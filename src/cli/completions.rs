use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    flashsync completions bash > ~/.bash_completion.d/flashsync\n\n\
                  Generate zsh completions:\n    flashsync completions zsh > ~/.zfunc/_flashsync\n\n\
                  Generate fish completions:\n    flashsync completions fish > ~/.config/fish/completions/flashsync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
