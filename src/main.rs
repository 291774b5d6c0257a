//! mdview - preview plain-text Markdown the way the browser extension renders it

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use mdview::{Document, Outcome, RenderConfig, Renderer, Template, TextDocument};

#[derive(Parser)]
#[command(name = "mdview")]
#[command(version, about = "Render plain-text Markdown as a navigable HTML page", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdview README.md README.html    Render a Markdown file to a page
    mdview notes.txt                Write the page to stdout
    mdview --nav README.md          Print the heading outline as JSON")]
struct Cli {
    /// Input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Content type to treat the input as (guessed from the extension by default)
    #[arg(long, value_name = "TYPE")]
    content_type: Option<String>,

    /// Renderer configuration as JSON; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom Handlebars page template
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Class to set on the root element
    #[arg(long, value_name = "CLASS")]
    root_class: Option<String>,

    /// Disable GitHub-flavored extensions
    #[arg(long)]
    no_gfm: bool,

    /// Disable tables
    #[arg(long)]
    no_tables: bool,

    /// Pass raw HTML through unescaped
    #[arg(long)]
    no_sanitize: bool,

    /// Disable typographic punctuation
    #[arg(long)]
    no_smartypants: bool,

    /// Render single newlines as line breaks
    #[arg(long)]
    breaks: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_input_bytes: Option<usize>,

    /// Print the heading outline as JSON instead of the page
    #[arg(long)]
    nav: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match render(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<RenderConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            serde_json::from_str(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    let options = &mut config.options;
    options.gfm &= !cli.no_gfm;
    options.tables &= !cli.no_tables;
    options.sanitize &= !cli.no_sanitize;
    options.smartypants &= !cli.no_smartypants;
    options.breaks |= cli.breaks;
    if cli.max_input_bytes.is_some() {
        options.max_input_len = cli.max_input_bytes;
    }
    if let Some(class) = &cli.root_class {
        config.root_class = class.clone();
    }

    Ok(config)
}

fn render(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli)?;
    let renderer = match &cli.template {
        Some(path) => {
            let template = Template::from_file(path).map_err(|e| e.to_string())?;
            Renderer::with_template(config, template)
        }
        None => Renderer::new(config).map_err(|e| e.to_string())?,
    };

    let mut doc = TextDocument::open(&cli.input).map_err(|e| e.to_string())?;
    if let Some(content_type) = &cli.content_type {
        doc = doc.with_content_type(content_type.as_str());
    }

    if cli.nav {
        if !renderer.applies_to(&doc) {
            return skipped(cli, &doc);
        }
        let page = renderer.render_text(doc.text()).map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(&page.nav).map_err(|e| e.to_string())?;
        return write_output(cli.output.as_deref(), &json);
    }

    match renderer.run(&mut doc).map_err(|e| e.to_string())? {
        Outcome::Skipped => skipped(cli, &doc),
        Outcome::Rendered { headings } => {
            write_output(cli.output.as_deref(), &doc.to_html())?;
            if !cli.quiet && cli.output.is_some() {
                eprintln!(
                    "Rendered {} ({} outline entries)",
                    cli.input.display(),
                    headings
                );
            }
            Ok(())
        }
    }
}

fn skipped(cli: &Cli, doc: &TextDocument) -> Result<(), String> {
    if !cli.quiet {
        eprintln!(
            "{} is {}, not text/plain; nothing to render",
            cli.input.display(),
            doc.content_type()
        );
    }
    Ok(())
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), String> {
    match path {
        Some(path) => std::fs::write(path, text).map_err(|e| format!("{}: {e}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
