mod highlighter;
mod validator;

use clap::Parser;
use funclang::{
    DebugContext, Engine, ExecutionContext, OperatorTable, Runtime, register_demo_functions,
    render_error,
};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent,
    ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

use crate::highlighter::Highlighter;
use crate::validator::InputValidator;

/// Funclang - evaluate infix expressions with host functions
#[derive(Parser, Debug)]
#[command(name = "funclang")]
#[command(about = "Evaluate funclang expressions", long_about = None)]
struct Args {
    /// Log operations, conversions and calls instead of computing them
    #[arg(long)]
    debug: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

const EXIT_COMMAND: &str = "exit";

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline(engine: &Engine, function_names: Vec<String>) -> (Reedline, DefaultPrompt) {
    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(function_names);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new(engine.pattern().clone())))
        .with_validator(Box::new(InputValidator::new(engine.pattern().clone())))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

fn interpret_input(engine: &Engine, context: &mut dyn ExecutionContext, input: &str) {
    if input.trim().is_empty() {
        return;
    }
    match engine.execute(input, context) {
        Ok(value) => println!("{value}"),
        Err(e) => render_error(&e, input),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set; --debug raises it to INFO
    let default_level = if args.debug { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(OperatorTable::standard()).into_diagnostic()?;

    let mut runtime = Runtime::new();
    register_demo_functions(&mut runtime).into_diagnostic()?;
    let function_names: Vec<String> = runtime
        .function_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut context: Box<dyn ExecutionContext> = if args.debug {
        Box::new(DebugContext::new())
    } else {
        Box::new(runtime)
    };

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&engine, context.as_mut(), &expr);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);
    tracing::debug!(is_interactive, debug = args.debug, "Starting");

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(&engine, function_names);

        println!("Funclang REPL - Type expressions to evaluate (exit, Ctrl+D or Ctrl+C to quit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) if buffer.trim() == EXIT_COMMAND => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Signal::Success(buffer) => {
                    interpret_input(&engine, context.as_mut(), &buffer);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            if line.trim() == EXIT_COMMAND {
                break;
            }
            interpret_input(&engine, context.as_mut(), &line);
        }
    }

    Ok(())
}
