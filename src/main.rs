use std::{
    io::{
        self,
        BufRead,
    },
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tango::{
    export,
    i18n::Strings,
    settings::Settings,
    CardDirection,
    Command,
    Engine,
    Session,
    TargetLanguage,
    WordSource,
};

#[derive(Parser, Debug)]
#[command(name = "tango", version, about = "Vocabulary flashcards in the terminal")]
struct Args {
    /// Word list: a JSON file or an http(s) URL
    source: Option<WordSource>,

    /// Target language for translations (en, es)
    #[arg(long)]
    lang: Option<TargetLanguage>,

    /// Which side is shown first (source-first, target-first)
    #[arg(long)]
    direction: Option<CardDirection>,

    /// Directory for exported CSV files
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// JSON string tables used for captions and category labels
    #[arg(long)]
    strings: Option<PathBuf>,

    /// Remember the given options as defaults
    #[arg(long)]
    save_settings: bool,
}

#[derive(Debug, PartialEq)]
enum Input {
    Command(Command),
    Toggle(String),
    Stats,
    Export,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "n" | "next" | "" => Input::Command(Command::Next),
        "p" | "prev" => Input::Command(Command::Previous),
        "f" | "flip" => Input::Command(Command::Flip),
        "c" | "correct" => Input::Command(Command::Mark { correct: true }),
        "x" | "incorrect" => Input::Command(Command::Mark { correct: false }),
        "s" | "shuffle" => Input::Command(Command::Shuffle),
        "r" | "reset" => Input::Command(Command::Reset),
        "a" | "all" => Input::Command(Command::SelectAll),
        "0" | "none" => Input::Command(Command::SelectNone),
        "l" | "lang" => Input::Command(Command::ToggleLanguage),
        "d" | "direction" => Input::Command(Command::ToggleDirection),
        "only" if !rest.is_empty() => Input::Command(Command::SelectCategories(
            rest.split(',').map(|c| c.trim().to_string()).filter(|c| !c.is_empty()).collect(),
        )),
        "t" | "toggle" if !rest.is_empty() => Input::Toggle(rest.to_string()),
        "?" | "stats" => Input::Stats,
        "e" | "export" => Input::Export,
        "h" | "help" => Input::Help,
        "q" | "quit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!("  n / enter   next (skips an unanswered card)");
    println!("  p           previous");
    println!("  f           flip");
    println!("  c / x       mark correct / incorrect");
    println!("  s / r       shuffle / reset");
    println!("  a / 0       select all / no categories");
    println!("  t <cat>     toggle one category");
    println!("  only a,b    select exactly these categories");
    println!("  l / d       toggle language / direction");
    println!("  ? / e       show / export statistics");
    println!("  q           quit");
}

fn render_card(session: &Session, strings: &Strings) {
    let lang = session.language();
    let (Some(view), Some(progress)) = (session.card_view(), session.progress()) else {
        println!("\n{}", strings.t(lang, "no-cards"));
        return;
    };

    let category = strings.t(lang, &view.category);
    let status = strings.t(lang, view.outcome.status_key()).to_uppercase();
    println!(
        "\n[{} {} {} {} ({:.0}%)] {} · {}",
        strings.t(lang, "card"),
        progress.position,
        strings.t(lang, "of"),
        progress.total,
        progress.percentage(),
        category,
        status
    );

    let face = view.visible_face();
    println!("    {}", face.primary);
    if let Some(secondary) = &face.secondary {
        println!("    {}", secondary);
    }

    let next_key = if view.outcome.is_unanswered() { "skip" } else { "next" };
    let flip_key = if view.flipped { "show-front" } else { "flip-card" };
    println!(
        "  ({}: n, {}: f, ✓: c, ✗: x, h)",
        strings.t(lang, next_key),
        strings.t(lang, flip_key)
    );
}

fn render_stats(session: &Session, strings: &Strings) {
    let lang = session.language();
    let report = session.compute_stats();
    if report.is_empty() {
        println!("{}", strings.t(lang, "no-cards"));
        return;
    }

    println!(
        "{:<16} {:>6} {:>4} {:>4} {:>4} {:>6}",
        strings.t(lang, "categories"),
        strings.t(lang, "total"),
        "✓",
        "✗",
        "⏭",
        strings.t(lang, "remaining")
    );
    for row in &report.categories {
        let c = row.counts;
        println!(
            "{:<16} {:>6} {:>4} {:>4} {:>4} {:>6}",
            strings.t(lang, &row.category),
            c.total,
            c.correct,
            c.incorrect,
            c.skipped,
            c.unanswered
        );
    }
    let t = report.total;
    println!(
        "{:<16} {:>6} {:>4} {:>4} {:>4} {:>6}",
        "TOTAL", t.total, t.correct, t.incorrect, t.skipped, t.unanswered
    );
    println!("{}/{} {}", t.answered(), t.total, strings.t(lang, "answered"));
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load();
    if let Some(lang) = args.lang {
        settings.language = lang;
    }
    if let Some(direction) = args.direction {
        settings.direction = direction;
    }
    if let Some(dir) = args.export_dir {
        settings.export_dir = Some(dir);
    }
    if let Some(path) = args.strings {
        settings.strings_file = Some(path);
    }

    let source = match args.source {
        Some(source) => source,
        None => match settings.source.parse::<WordSource>() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Invalid word list source in settings: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    if args.save_settings {
        settings.source = source.to_string();
        match settings.save() {
            Ok(()) => println!("Settings saved to {}", Settings::path().display()),
            Err(e) => eprintln!("Failed to save settings: {e}"),
        }
    }

    let strings = match &settings.strings_file {
        Some(path) => Strings::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load strings from {}: {}", path.display(), e);
            Strings::default()
        }),
        None => Strings::default(),
    };

    let mut engine = Engine::new().with_display(settings.direction, settings.language);
    println!("{}", strings.t(settings.language, "loading"));
    engine.load(&source).await;

    if let Some(reason) = engine.error() {
        eprintln!("Failed to load vocabulary data: {reason}");
        return ExitCode::FAILURE;
    }

    if let Some(session) = engine.session() {
        render_card(session, &strings);
    }

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(session) = engine.session() else {
            break;
        };

        match parse_input(&line) {
            Input::Command(command) => {
                engine.dispatch(command);
            }
            Input::Toggle(category) => {
                let selected = !session.is_selected(&category);
                engine.dispatch(Command::ToggleCategory { category, selected });
            }
            Input::Stats => {
                render_stats(session, &strings);
                continue;
            }
            Input::Export => {
                let lang = session.language();
                let report = session.compute_stats();
                let label = |id: &str| strings.t(lang, id).to_string();
                match export::write_csv(&report, &settings.export_dir(), label) {
                    Ok(path) => println!("{} {}", strings.t(lang, "downloaded"), path.display()),
                    Err(e) => eprintln!("Export failed: {e}"),
                }
                continue;
            }
            Input::Help => {
                print_help();
                continue;
            }
            Input::Quit => break,
            Input::Unknown(input) => {
                println!("Unknown command: {input} (h for help)");
                continue;
            }
        }

        if let Some(session) = engine.session() {
            render_card(session, &strings);
        }
    }

    ExitCode::SUCCESS
}
