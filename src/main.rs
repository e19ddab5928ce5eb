use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlauth::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the authorization URL
    Authorize(AuthorizeOptions),

    /// Authorize in the browser and exchange the code via the local callback server
    Login(LoginOptions),

    /// Exchange an authorization code for tokens
    Token(TokenOptions),

    /// Get a new access token with a refresh token
    Refresh(RefreshOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthorizeOptions {
    /// Scope to request; can be repeated (defaults to SPOTIFY_API_AUTH_SCOPE)
    #[clap(long, action = ArgAction::Append)]
    pub scope: Vec<String>,

    /// Force the consent dialog even if the user already approved
    #[clap(long)]
    pub show_dialog: bool,

    /// CSRF token echoed back on the redirect
    #[clap(long)]
    pub state: Option<String>,

    /// Open the URL in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Scope to request; can be repeated (defaults to SPOTIFY_API_AUTH_SCOPE)
    #[clap(long, action = ArgAction::Append)]
    pub scope: Vec<String>,

    /// Force the consent dialog even if the user already approved
    #[clap(long)]
    pub show_dialog: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    /// Authorization code from the redirect
    #[clap(long)]
    pub code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RefreshOptions {
    /// Refresh token from an earlier token exchange
    #[clap(long)]
    pub refresh_token: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Authorize(opt) => {
            cli::authorize(opt.scope, opt.show_dialog, opt.state, opt.open).await
        }
        Command::Login(opt) => cli::login(opt.scope, opt.show_dialog).await,
        Command::Token(opt) => cli::token(opt.code).await,
        Command::Refresh(opt) => cli::refresh(opt.refresh_token).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
