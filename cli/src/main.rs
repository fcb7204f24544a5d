//! deltadoc CLI - editor delta export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use deltadoc::{
    CaseMode, DeltaParser, DesignBrief, ExportOptions, ExportStats, ExporterRegistry, FontSize,
    JsonFormat, Menu, OutputFormat, PageSize, ParseOptions, RenderOptions,
};

#[derive(Parser)]
#[command(name = "deltadoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert rich-text editor deltas to Word documents, text, and JSON", long_about = None)]
struct Cli {
    /// Input delta file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a delta to a Word document (or another format)
    Export {
        /// Input delta file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input name with the format's extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format, used when no output file is given
        #[arg(short, long, value_enum, default_value = "docx")]
        format: FormatArg,

        /// Fallback font for runs without a font attribute
        #[arg(long, env = "DELTADOC_FONT", default_value = "Arial")]
        font: String,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Document author
        #[arg(long, env = "DELTADOC_AUTHOR")]
        author: Option<String>,

        /// Page size
        #[arg(long, default_value = "letter")]
        page_size: String,

        /// Keep embeds as placeholder paragraphs
        #[arg(long)]
        placeholders: bool,

        /// Skip retain/delete operations instead of failing
        #[arg(long)]
        lenient: bool,

        /// Print export statistics
        #[arg(long)]
        stats: bool,
    },

    /// Convert a delta to plain text
    Text {
        /// Input delta file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Drop empty paragraphs
        #[arg(long)]
        skip_empty: bool,
    },

    /// Convert a delta to the paragraph/run JSON structure
    Json {
        /// Input delta file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input delta file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the breadcrumb trail for a route
    Breadcrumb {
        /// Menu configuration (JSON array of items)
        #[arg(short, long, value_name = "FILE")]
        menu: PathBuf,

        /// Route path, e.g. /content/pages
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Transform text case
    Case {
        /// Text to transform
        #[arg(value_name = "TEXT")]
        text: String,

        /// Case mode
        #[arg(short, long, value_enum, default_value = "upper")]
        mode: CaseArg,

        /// Print every mode of the cycle, starting at --mode
        #[arg(long)]
        cycle: bool,
    },

    /// List the font-size scale
    Sizes,

    /// Build a design-suggestion request, or parse a reply
    Suggest {
        /// Input delta file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Intended audience
        #[arg(long)]
        audience: Option<String>,

        /// Desired tone
        #[arg(long)]
        tone: Option<String>,

        /// Maximum number of suggestions
        #[arg(long, default_value = "5")]
        max: usize,

        /// Model reply to parse instead of building a request
        #[arg(long, value_name = "FILE")]
        reply: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Word document
    Docx,
    /// Paragraph/run JSON
    Json,
    /// Plain text
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Docx => OutputFormat::Docx,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CaseArg {
    /// UPPER CASE
    Upper,
    /// lower case
    Lower,
    /// Title Case
    Title,
}

impl From<CaseArg> for CaseMode {
    fn from(mode: CaseArg) -> Self {
        match mode {
            CaseArg::Upper => CaseMode::Upper,
            CaseArg::Lower => CaseMode::Lower,
            CaseArg::Title => CaseMode::Title,
        }
    }
}

struct ExportArgs {
    format: FormatArg,
    font: String,
    title: Option<String>,
    author: Option<String>,
    page_size: String,
    placeholders: bool,
    lenient: bool,
    stats: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            format: FormatArg::Docx,
            font: deltadoc::model::DEFAULT_FONT.to_string(),
            title: None,
            author: None,
            page_size: "letter".to_string(),
            placeholders: false,
            lenient: false,
            stats: false,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Export {
            input,
            output,
            format,
            font,
            title,
            author,
            page_size,
            placeholders,
            lenient,
            stats,
        }) => cmd_export(
            &input,
            output.as_deref(),
            ExportArgs {
                format,
                font,
                title,
                author,
                page_size,
                placeholders,
                lenient,
                stats,
            },
        ),
        Some(Commands::Text {
            input,
            output,
            skip_empty,
        }) => cmd_text(&input, output.as_deref(), skip_empty),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Breadcrumb { menu, path }) => cmd_breadcrumb(&menu, &path),
        Some(Commands::Case { text, mode, cycle }) => {
            cmd_case(&text, mode.into(), cycle);
            Ok(())
        }
        Some(Commands::Sizes) => {
            cmd_sizes();
            Ok(())
        }
        Some(Commands::Suggest {
            input,
            audience,
            tone,
            max,
            reply,
        }) => cmd_suggest(&input, audience, tone, max, reply.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: export to docx if input is provided
            if let Some(input) = cli.input {
                cmd_export(&input, cli.output.as_deref(), ExportArgs::default())
            } else {
                println!("{}", "Usage: deltadoc <FILE> [OUTPUT]".yellow());
                println!("       deltadoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let path = input.with_extension(format.extension());
    if path != input {
        return path;
    }
    // delta.json exported as json must not replace its source
    input.with_extension(format!("export.{}", format.extension()))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    args: ExportArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_path(input, args.format.into()));
    if is_same_file(input, &output) {
        let msg = format!("Output {} would overwrite the input delta", output.display());
        return Err(msg.into());
    }

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading delta...");
    let mut options = ParseOptions::new().with_default_font(args.font);
    if let Some(title) = args.title {
        options = options.with_title(title);
    }
    if let Some(author) = args.author {
        options = options.with_author(author);
    }
    if args.placeholders {
        options = options.with_embed_placeholders();
    }
    if args.lenient {
        options = options.lenient();
    }
    let parser = DeltaParser::open_with_options(input, options)?;
    pb.inc(1);

    pb.set_message("Segmenting paragraphs...");
    let doc = parser.parse()?;
    pb.inc(1);

    pb.set_message("Encoding...");
    let page_size = PageSize::parse(&args.page_size)
        .map_err(|e| format!("Invalid page size: {}", e))?;
    let export_options = ExportOptions::new()
        .with_render_options(RenderOptions::new().with_page_size(page_size))
        .with_stats(args.stats);
    let result = ExporterRegistry::with_defaults().export_to_path(&doc, &output, &export_options)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        output.display(),
        result.content_len()
    );
    if let Some(ref stats) = result.stats {
        print_stats(stats);
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    skip_empty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = deltadoc::parse_file(input)?;
    let render_options = RenderOptions::new().with_empty_lines(!skip_empty);
    let text = deltadoc::render::to_text(&doc, &render_options)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = deltadoc::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = deltadoc::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = deltadoc::detect_format_from_path(input)?;
    // Lenient so that deltas with retain/delete still report
    let parser = DeltaParser::open_with_options(input, ParseOptions::new().lenient())?;
    let op_count = parser.operations().len();
    let embed_count = parser.operations().iter().filter(|op| op.is_embed()).count();
    let doc = parser.parse()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Operations".bold(), op_count);
    println!("{}: {}", "Embeds".bold(), embed_count);

    println!();
    print_stats(&ExportStats::collect(&doc));

    Ok(())
}

fn print_stats(stats: &ExportStats) {
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Empty paragraphs".bold(), stats.empty_paragraph_count);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Styled runs".bold(), stats.styled_run_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_breadcrumb(menu_path: &Path, route: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(menu_path)?;
    let menu = Menu::from_json(&json)?;
    let crumbs = menu.breadcrumbs(route);

    if crumbs.is_empty() {
        println!("{} {}", "No menu item for".yellow(), route);
        return Ok(());
    }

    let trail: Vec<String> = crumbs.iter().map(|c| c.title.clone()).collect();
    println!("{}", trail.join(&format!(" {} ", "›".dimmed())));

    Ok(())
}

fn cmd_case(text: &str, mode: CaseMode, cycle: bool) {
    if !cycle {
        println!("{}", mode.apply(text));
        return;
    }

    let mut current = mode;
    for _ in 0..CaseMode::ALL.len() {
        println!("{:>6}: {}", format!("{:?}", current).dimmed(), current.apply(text));
        current = current.next();
    }
}

fn cmd_sizes() {
    for size in FontSize::all() {
        let marker = if size == FontSize::DEFAULT {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{:>5}  {:>3} half-points{}", size.to_string(), size.half_points(), marker);
    }
}

fn cmd_suggest(
    input: &Path,
    audience: Option<String>,
    tone: Option<String>,
    max: usize,
    reply: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = deltadoc::parse_file(input)?;

    let mut brief = DesignBrief::new(doc.plain_text()).with_max_suggestions(max);
    if let Some(audience) = audience {
        brief = brief.with_audience(audience);
    }
    if let Some(tone) = tone {
        brief = brief.with_tone(tone);
    }

    match reply {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let suggestions = brief.parse_reply(&text);
            if suggestions.is_empty() {
                println!("{}", "No suggestions found in reply".yellow());
            }
            for (i, suggestion) in suggestions.iter().enumerate() {
                println!("{} {}", format!("{}.", i + 1).cyan(), suggestion);
            }
        }
        None => {
            let request = brief.to_request();
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "deltadoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Editor delta to Word document converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/deltadoc".dimmed());
    println!("License: MIT");
}
