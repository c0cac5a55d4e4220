use clap::{Parser, ValueEnum};
use petname_canvas::{generate, GenerationOptions, StartingLetterStyle, WordCategories};

/// pn_cli - Pet Name Generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of words per name
    #[arg(short, long, default_value_t = 2)]
    words: i32,

    /// Separator between words
    #[arg(short, long, default_value = "-")]
    separator: String,

    /// Maximum word length in characters
    #[arg(short = 'l', long)]
    max_word_length: Option<usize>,

    /// Starting-letter style
    #[arg(long, value_enum, default_value_t = StyleArg::Ubuntu)]
    style: StyleArg,

    /// How many names to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

/// Command-line mirror of the library's starting-letter styles
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    /// Every word starts with the same letter
    Ubuntu,
    /// No starting-letter constraint
    Random,
}

impl From<StyleArg> for StartingLetterStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Ubuntu => StartingLetterStyle::Ubuntu,
            StyleArg::Random => StartingLetterStyle::Random,
        }
    }
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let categories = WordCategories::builtin();
    let options = GenerationOptions::new()
        .with_word_count(args.words)
        .with_word_separator(args.separator)
        .with_max_word_length(args.max_word_length)
        .with_starting_letter_style(args.style.into());

    for _ in 0..args.count {
        println!("{}", generate(&options, &categories));
    }
}
