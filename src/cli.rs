use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "chemnotes",
    version,
    about = "Structure chemistry study notes and render chemical notation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Structure(StructureArgs),
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StructureArgs {
    /// Source document: a PDF or an already extracted text dump.
    #[arg(long)]
    pub source: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceKind::Auto)]
    pub source_kind: SourceKind,

    #[arg(long, default_value = ".cache/chemnotes")]
    pub out_dir: PathBuf,

    /// JSON file overriding any subset of the structuring thresholds.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub merge_threshold_chars: Option<usize>,

    #[arg(long)]
    pub tip_max_chars: Option<usize>,

    /// Write an empty section list instead of failing when no heading is found.
    #[arg(long, default_value_t = false)]
    pub allow_empty: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SourceKind {
    Auto,
    Pdf,
    Text,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[arg(long, value_enum, default_value_t = NotationMode::Equation)]
    pub mode: NotationMode,

    #[arg(long)]
    pub text: Option<String>,

    /// Render every non-empty line of this file.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum NotationMode {
    Species,
    Equation,
}

impl NotationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Equation => "equation",
        }
    }
}
