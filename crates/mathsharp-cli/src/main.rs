//! Mathsharp CLI - Mathcad worksheet to C# translator.

mod batch;

use batch::BatchOptions;
use clap::{Parser, Subcommand};
use mathsharp::vocab::{Kind, math, ns, units, worksheet};
use mathsharp::{ConversionResult, EmitOptions, QName};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mathsharp")]
#[command(author, version, about = "Mathcad worksheet to C# translator", long_about = None)]
struct Cli {
    /// Suppress warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate every .xmcd worksheet below a directory
    Convert {
        /// Root directory to search
        root: PathBuf,

        /// Directory below the root that receives the generated tree
        #[arg(long, default_value = "Net")]
        output_subdir: String,

        /// Extension of generated files
        #[arg(long, default_value = "cs")]
        extension: String,

        /// Namespace wrapping the generated classes
        #[arg(long)]
        namespace: Option<String>,

        /// Do not extract embedded images
        #[arg(long)]
        no_binaries: bool,
    },

    /// Translate a single worksheet
    Translate {
        /// Input worksheet
        input: PathBuf,

        /// Output file (use - for stdout, or omit to use stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Namespace wrapping the generated class
        #[arg(long)]
        namespace: Option<String>,

        /// Class name (defaults to the file name)
        #[arg(long)]
        class_name: Option<String>,
    },

    /// List the worksheet elements the translator recognizes
    Kinds {
        /// Only list one namespace
        #[arg(long, value_enum)]
        namespace: Option<Vocabulary>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Vocabulary {
    Worksheet,
    Math,
    Units,
}

impl Vocabulary {
    const ALL: [Vocabulary; 3] = [Vocabulary::Worksheet, Vocabulary::Math, Vocabulary::Units];

    fn uri(&self) -> &'static str {
        match self {
            Vocabulary::Worksheet => ns::WORKSHEET,
            Vocabulary::Math => ns::MATH,
            Vocabulary::Units => ns::UNITS,
        }
    }

    fn tags(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::Worksheet => &[worksheet::MATH, worksheet::BINARY_CONTENT],
            Vocabulary::Math => math::TAGS,
            Vocabulary::Units => &[units::UNIT_MONOMIAL],
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            root,
            output_subdir,
            extension,
            namespace,
            no_binaries,
        } => {
            let options = BatchOptions {
                output_subdir,
                extension,
                namespace,
                binaries: !no_binaries,
                quiet: cli.quiet,
            };
            convert(root, &options)?;
        }
        Commands::Translate {
            input,
            output,
            namespace,
            class_name,
        } => {
            translate(input, output, namespace, class_name, cli.quiet)?;
        }
        Commands::Kinds { namespace } => {
            list_kinds(namespace);
        }
    }

    Ok(())
}

fn convert(root: PathBuf, options: &BatchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let summary = batch::convert(&root, options)?;

    if !summary.unimplemented.is_empty() {
        let kinds: Vec<&str> = summary.unimplemented.iter().map(String::as_str).collect();
        eprintln!("not yet implemented: {}", kinds.join(", "));
    }
    if !options.quiet {
        eprintln!(
            "translated {} worksheet(s), extracted {} attachment(s)",
            summary.translated, summary.attachments
        );
    }

    if summary.failed > 0 {
        return Err(format!("{} worksheet(s) failed", summary.failed).into());
    }
    Ok(())
}

fn translate(
    input: PathBuf,
    output: Option<PathBuf>,
    namespace: Option<String>,
    class_name: Option<String>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = EmitOptions::for_document(&input);
    if let Some(namespace) = namespace {
        options = options.with_namespace(namespace);
    }
    if let Some(class_name) = class_name {
        options = options.with_class_name(class_name);
    }

    let result = mathsharp::translate_file(&input, &options)?;
    report(&result, quiet);

    match output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(&path, &result.value)?;
        }
        _ => {
            io::stdout().write_all(result.value.as_bytes())?;
        }
    }

    Ok(())
}

/// Report warnings to stderr
fn report(result: &ConversionResult<String>, quiet: bool) {
    if quiet {
        return;
    }
    for warning in &result.warnings {
        eprintln!("warning: {}", warning.message);
    }
}

fn list_kinds(only: Option<Vocabulary>) {
    println!("Recognized elements:\n");
    println!("  {:10} {:18} KIND", "NAMESPACE", "TAG");
    println!("  {:10} {:18} ----", "---------", "---");

    let vocabularies = match only {
        Some(v) => vec![v],
        None => Vocabulary::ALL.to_vec(),
    };

    for vocabulary in vocabularies {
        let name = format!("{vocabulary:?}").to_lowercase();
        for tag in vocabulary.tags() {
            let kind = Kind::of(&QName::new(vocabulary.uri(), *tag));
            println!("  {:10} {:18} {:?}", name, tag, kind);
        }
    }
}
