use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::info;

use crate::cli::{NotationMode, RenderArgs};

mod equation;
mod notation;
mod run;
mod species;
#[cfg(test)]
mod tests;

pub use run::run;

use notation::*;
use species::*;
