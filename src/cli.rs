use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pitwall::types::{Language, SummaryLength};

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(about = "Favorite team and AI race-analysis tools for the pitwall dashboard", version)]
#[command(after_help = "EXAMPLES:
    pitwall team set ferrari            Save your favorite team
    pitwall team show                   Show the dashboard team badge
    pitwall sentiment \"great race\"      Detect the mood of a text
    pitwall summary -                   Summarize text read from stdin
    pitwall ask \"Who won Monza?\"        Ask the Q&A agent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the full error chain on failure
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config file and PITWALL_API_BASE)
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the favorite team
    #[command(after_help = "EXAMPLES:
    pitwall team list
    pitwall team set redbull
    pitwall team set williams --name \"Williams\"
    pitwall team show")]
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// Detect the sentiment of a text
    #[command(after_help = "EXAMPLES:
    pitwall sentiment \"What a comeback from P15!\"
    pitwall sentiment --language ar \"سباق رائع\"")]
    Sentiment(SentimentArgs),
    /// Summarize a text
    #[command(after_help = "EXAMPLES:
    pitwall summary \"...long race report...\"
    cat report.txt | pitwall summary - --length short")]
    Summary(SummaryArgs),
    /// Ask the F1 Q&A agent a question
    #[command(after_help = "EXAMPLES:
    pitwall ask \"When is the next race?\"
    pitwall ask \"Who pitted first?\" --context \"Lap 12: NOR pits...\"")]
    Ask(AskArgs),
    /// Check that the backend is reachable
    Health,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    pitwall completions bash > ~/.bash_completion.d/pitwall
    pitwall completions zsh > ~/.zfunc/_pitwall")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List the teams that have a logo
    List,
    /// Save the favorite team
    Set {
        /// Team key (e.g., ferrari)
        key: String,

        /// Display name; required for teams not in the list
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the saved team as the dashboard renders it
    Show,
    /// Forget the saved team
    Clear,
}

#[derive(Args)]
pub struct SentimentArgs {
    /// Text to analyze ("-" reads stdin)
    pub text: Option<String>,

    /// Language hint
    #[arg(long, value_enum, default_value_t = Language::Auto)]
    pub language: Language,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Text to summarize ("-" reads stdin)
    pub text: Option<String>,

    /// Language hint
    #[arg(long, value_enum, default_value_t = Language::En)]
    pub language: Language,

    /// Summary length
    #[arg(long, value_enum, default_value_t = SummaryLength::Medium)]
    pub length: SummaryLength,
}

#[derive(Args)]
pub struct AskArgs {
    /// Question to ask ("-" reads stdin)
    pub question: Option<String>,

    /// Passage the answer should come from
    #[arg(long, short)]
    pub context: Option<String>,

    /// Language hint
    #[arg(long, value_enum, default_value_t = Language::Auto)]
    pub language: Language,
}
