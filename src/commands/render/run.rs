use super::*;

pub fn run(args: RenderArgs) -> Result<()> {
    let inputs = match (&args.text, &args.input) {
        (Some(text), None) => vec![text.clone()],
        (None, Some(path)) => {
            let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            String::from_utf8_lossy(&raw)
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        }
        (Some(_), Some(_)) => bail!("pass either --text or --input, not both"),
        (None, None) => bail!("nothing to render: pass --text or --input"),
    };

    let renderer = NotationRenderer::new()?;
    let mut output = io::BufWriter::new(io::stdout().lock());
    for input in &inputs {
        writeln!(output, "{}", render_notation(&renderer, args.mode, input))?;
    }
    output.flush()?;

    info!(mode = args.mode.as_str(), rendered = inputs.len(), "render completed");
    Ok(())
}

pub(super) fn render_notation(renderer: &NotationRenderer, mode: NotationMode, input: &str) -> String {
    match mode {
        NotationMode::Species => renderer.render_species(input.trim()),
        NotationMode::Equation => renderer.render_equation(input),
    }
}
