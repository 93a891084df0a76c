use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::cli::{SourceKind, StructureArgs};
use crate::config::StructureConfig;
use crate::model::{
    Blocks, Heading, LabelCount, Section, SectionIndexEntry, StructureCounts, StructurePaths,
    StructureRunManifest,
};
use crate::util::{
    ensure_directory, now_utc_string, sha256_file, utc_compact_string, write_json_compact,
    write_json_pretty,
};

mod artifacts;
mod headings;
mod item_merge;
mod run;
mod section_parse;
mod source_extract;
mod summary;
mod vocabulary;

pub use run::run;

use artifacts::*;
use item_merge::*;
use section_parse::*;
use source_extract::*;
use summary::*;
use vocabulary::*;
