use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    droidify completions bash > ~/.bash_completion.d/droidify\n\n\
                  Generate zsh completions:\n    droidify completions zsh > ~/.zfunc/_droidify\n\n\
                  Generate fish completions:\n    droidify completions fish > ~/.config/fish/completions/droidify.fish\n\n\
                  Generate PowerShell completions:\n    droidify completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
