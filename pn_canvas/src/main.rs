use clap::Parser;
use console::{style, Key, Term};
use petname_canvas::{
    ControllerFlow, FontName, GenerationOptions, InMemoryCanvas, PluginController, PluginMessage,
    SceneElement, StartingLetterStyle,
};

/// pn_canvas - Pet Name Canvas Demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of text elements to seed on the canvas
    #[arg(short, long, default_value_t = 3)]
    elements: usize,

    /// Number of words per name
    #[arg(short, long, default_value_t = 2)]
    words: i32,

    /// Separator between words
    #[arg(short, long, default_value = "-")]
    separator: String,

    /// Maximum word length in characters
    #[arg(short = 'l', long)]
    max_word_length: Option<usize>,

    /// Pick starting letters independently instead of ubuntu style
    #[arg(short, long)]
    random_style: bool,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 1)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Seed an in-memory canvas with selected text elements
    let mut canvas = InMemoryCanvas::new();
    let font = FontName::new("Ubuntu Sans", "Regular");
    let mut seeded = Vec::with_capacity(args.elements);
    for index in 0..args.elements {
        seeded.push(canvas.add_text_element(format!("text {}", index + 1), font.clone()));
    }
    canvas.select(seeded);

    let style_choice = if args.random_style {
        StartingLetterStyle::Random
    } else {
        StartingLetterStyle::Ubuntu
    };
    let options = GenerationOptions::new()
        .with_word_count(args.words)
        .with_word_separator(args.separator.clone())
        .with_max_word_length(args.max_word_length)
        .with_starting_letter_style(style_choice);

    let mut controller = PluginController::new(canvas);

    println!("=== pn_canvas - Pet Name Canvas Demo ===");
    println!("Elements: {}", args.elements);
    println!("Words: {} (separator '{}')", args.words, args.separator);
    if let Some(max) = args.max_word_length {
        println!("Max word length: {}", max);
    }
    println!("Commands:");
    println!("  g - Generate pet names into the selection");
    println!("  x - Generate pet names, then close the panel");
    println!("  c - Close the panel");
    println!("  q - Quit");
    println!();

    // Get message sender for the controller
    let message_sender = controller.sender();

    // Spawn keyboard input task
    let keyboard_sender = message_sender.clone();
    let keyboard_options = options.clone();
    let keyboard_task = tokio::task::spawn_blocking(move || {
        let input_term = Term::stdout();
        loop {
            let Ok(key) = input_term.read_key() else {
                break;
            };
            let message = match key {
                Key::Char('g') | Key::Char('G') => {
                    Some(PluginMessage::GeneratePetnames(keyboard_options.clone()))
                }
                Key::Char('x') | Key::Char('X') => {
                    Some(PluginMessage::GenerateAndClose(keyboard_options.clone()))
                }
                Key::Char('c') | Key::Char('C') | Key::Char('q') | Key::Char('Q') => {
                    Some(PluginMessage::Close)
                }
                _ => None,
            };
            if let Some(message) = message {
                let closing = matches!(
                    message,
                    PluginMessage::Close | PluginMessage::GenerateAndClose(_)
                );
                if keyboard_sender.send(message).is_err() || closing {
                    break;
                }
            }
        }
    });

    // Main step loop - processes messages and prints canvas state
    loop {
        match controller.step().await? {
            ControllerFlow::Continue => print_canvas(controller.host()),
            ControllerFlow::Closed => break,
        }
    }

    println!();
    println!("Panel closed. Final canvas:");
    print_canvas(controller.host());

    keyboard_task.await?;
    Ok(())
}

/// Print the canvas contents and collected notifications
fn print_canvas(canvas: &InMemoryCanvas) {
    for element in canvas.elements() {
        match element {
            SceneElement::Text(text) => {
                println!("  [text]  {}", style(&text.characters).green());
            }
            SceneElement::Shape(shape) => {
                println!("  [shape] {}", style(shape.id.as_str()).dim());
            }
        }
    }
    if let Some(note) = canvas.notifications().last() {
        println!("  {}", style(note).cyan());
    }
    println!();
}
