//! CLI tool for validating, rendering, and exporting markdown slide decks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slidemark_core::{
    default_rules, markdown_file_name, markdown_to_html, module_file_name,
    parse_slide_components, split_into_slides, to_lesson_module, validate_document,
    RuleSettings, ValidationRule,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Validate, render, and export markdown slide decks.
#[derive(Parser, Debug)]
#[command(name = "slidemark")]
#[command(version, about, long_about = None)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate slide decks against the rule set
    Check {
        /// Input markdown file(s)
        #[arg(required = true)]
        input: Vec<PathBuf>,

        /// Rule settings file (JSON); defaults apply when omitted
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Render a deck (or one slide of it) to an HTML fragment
    Render {
        /// Input markdown file
        input: PathBuf,

        /// 1-based slide number; renders every slide when omitted
        #[arg(short, long)]
        slide: Option<usize>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a deck as markdown or as a generated lesson module
    Export {
        /// Input markdown file
        input: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "module")]
        format: ExportFormat,

        /// Output directory (default: same as input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print output to stdout instead of writing to file
        #[arg(short, long)]
        print: bool,
    },

    /// Show the slide inventory of a deck
    Info {
        /// Input markdown file
        input: PathBuf,
    },

    /// Write the default rule settings to a JSON file
    InitRules {
        /// Settings file to create
        #[arg(default_value = "rules.json")]
        path: PathBuf,
    },
}

/// Export format for the export command.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Plain markdown passthrough
    Markdown,
    /// Generated TypeScript lesson module
    Module,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Command::Check { input, rules } => check(&input, rules.as_deref()),
        Command::Render {
            input,
            slide,
            output,
        } => render(&input, slide, output.as_deref()),
        Command::Export {
            input,
            format,
            output,
            print,
        } => export(&input, format, output.as_deref(), print),
        Command::Info { input } => info(&input),
        Command::InitRules { path } => init_rules(&path),
    }
}

/// Validate each input file, printing every rule failure. Files that cannot
/// be read are reported and skipped; a non-zero exit means at least one
/// slide failed validation.
fn check(inputs: &[PathBuf], settings_path: Option<&Path>) -> Result<()> {
    let rules = load_rules(settings_path)?;
    let mut failing_slides = 0usize;

    for input in inputs {
        let markdown = match fs::read_to_string(input) {
            Ok(markdown) => markdown,
            Err(e) => {
                eprintln!("Error reading {}: {}", input.display(), e);
                continue;
            }
        };

        let slides = split_into_slides(&markdown);
        log::debug!("{}: {} slides", input.display(), slides.len());

        for result in validate_document(&slides, &rules) {
            if result.valid {
                continue;
            }
            failing_slides += 1;
            for error in &result.errors {
                println!(
                    "{}: slide {}: [{}] {}",
                    input.display(),
                    error.slide_index + 1,
                    error.rule.id,
                    error.message
                );
            }
        }
    }

    if failing_slides > 0 {
        anyhow::bail!("{} slide(s) failed validation", failing_slides);
    }

    println!("All slides passed validation");
    Ok(())
}

/// Render one slide, or the whole deck with horizontal rules between
/// slides.
fn render(input: &Path, slide: Option<usize>, output: Option<&Path>) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let slides = split_into_slides(&markdown);

    let html = match slide {
        Some(number) => {
            let index = number
                .checked_sub(1)
                .context("Slide numbers start at 1")?;
            let slide_text = slides.get(index).with_context(|| {
                format!("Deck has {} slides, requested slide {}", slides.len(), number)
            })?;
            markdown_to_html(slide_text)
        }
        None => slides
            .iter()
            .map(|slide| markdown_to_html(slide))
            .collect::<Vec<_>>()
            .join("\n<hr>\n"),
    };

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Written to: {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Export a deck in the requested format, next to the input unless an
/// output directory is given.
fn export(
    input: &Path,
    format: ExportFormat,
    output_dir: Option<&Path>,
    print: bool,
) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("deck.md");

    let (content, output_name) = match format {
        ExportFormat::Markdown => (
            slidemark_core::export_markdown(&markdown),
            markdown_file_name(file_name),
        ),
        ExportFormat::Module => (
            to_lesson_module(&markdown, file_name),
            module_file_name(file_name),
        ),
    };

    if print {
        print!("{content}");
        return Ok(());
    }

    let output_path = resolve_output_path(input, output_dir, &output_name)?;
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("Written to: {}", output_path.display());

    Ok(())
}

/// Print the slide inventory: per-slide titles and component counts.
fn info(input: &Path) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let slides = split_into_slides(&markdown);

    println!("{}: {} slides", input.display(), slides.len());

    for (index, slide) in slides.iter().enumerate() {
        let components = parse_slide_components(slide);
        let title = if components.title.is_empty() {
            format!("Slide {}", index + 1)
        } else {
            components.title.clone()
        };
        println!(
            "  {}. {} ({} headings, {} paragraphs, {} lists, {} code blocks)",
            index + 1,
            title,
            components.headings.len(),
            components.paragraphs.len(),
            components.lists.len(),
            components.code_blocks.len()
        );
    }

    Ok(())
}

/// Seed a settings file with the default rule set, all rules active.
fn init_rules(path: &Path) -> Result<()> {
    let settings = RuleSettings::from_rules(&default_rules());
    settings
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Written to: {}", path.display());
    Ok(())
}

/// Build the active rule set: defaults, with saved settings applied on top.
fn load_rules(settings_path: Option<&Path>) -> Result<Vec<ValidationRule>> {
    let mut rules = default_rules();

    if let Some(path) = settings_path {
        let settings = RuleSettings::load(path)
            .with_context(|| format!("Failed to load rule settings from {}", path.display()))?;
        settings.apply(&mut rules);
        log::debug!(
            "{} of {} rules active",
            rules.iter().filter(|rule| rule.active).count(),
            rules.len()
        );
    }

    Ok(rules)
}

/// Determine the output path for an exported file.
fn resolve_output_path(
    input: &Path,
    output_dir: Option<&Path>,
    file_name: &str,
) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            Ok(dir.join(file_name))
        }
        None => Ok(input
            .parent()
            .map(|parent| parent.join(file_name))
            .unwrap_or_else(|| PathBuf::from(file_name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rules_defaults_when_no_settings() {
        let rules = load_rules(None).unwrap();
        assert_eq!(rules.len(), 4);
        assert!(rules.iter().all(|rule| rule.active));
    }

    #[test]
    fn test_load_rules_applies_saved_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(
            &path,
            r#"{"rules": [{"id": "slide-length", "active": false}]}"#,
        )
        .unwrap();

        let rules = load_rules(Some(&path)).unwrap();
        assert!(!rules[0].active);
        assert!(rules[1..].iter().all(|rule| rule.active));
    }

    #[test]
    fn test_load_rules_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_rules(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn test_resolve_output_path_next_to_input() {
        let path =
            resolve_output_path(Path::new("decks/lesson.md"), None, "lesson.ts").unwrap();
        assert_eq!(path, PathBuf::from("decks/lesson.ts"));
    }

    #[test]
    fn test_resolve_output_path_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let path =
            resolve_output_path(Path::new("lesson.md"), Some(&out), "lesson.ts").unwrap();
        assert_eq!(path, out.join("lesson.ts"));
        assert!(out.is_dir());
    }
}
