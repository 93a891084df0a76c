use super::*;

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: StructureArgs) -> Result<()> {
    let started_ts = Utc::now();
    let run_id = format!("run-{}", utc_compact_string(started_ts));
    let config = StructureConfig::resolve(&args)?;

    if !args.source.is_file() {
        bail!("source document not found: {}", args.source.display());
    }

    let kind = resolve_source_kind(&args.source, args.source_kind);
    info!(
        source = %args.source.display(),
        backend = backend_name(kind),
        merge_threshold_chars = config.merge_threshold_chars,
        run_id = %run_id,
        "starting structure"
    );

    let lines = read_source_lines(&args.source, kind)?;
    let mut warnings = Vec::new();
    if lines.iter().all(|line| line.trim().is_empty()) {
        warnings.push(format!("source {} has no text", args.source.display()));
        warn!(source = %args.source.display(), "source has no text");
    }

    let parser = SectionParser::new(&config)?;
    let sections = parser.structure_document(&lines);
    if sections.is_empty() {
        if !args.allow_empty {
            bail!(
                "no section headings found in {} (pass --allow-empty to write an empty result)",
                args.source.display()
            );
        }
        warnings.push("no section headings found".to_string());
        warn!(source = %args.source.display(), "no section headings found");
    }

    let index = build_section_index(&sections, &config);

    for section in sections.iter().filter(|section| section.blocks.is_empty()) {
        warnings.push(format!("section '{}' has no content", section.title));
        warn!(title = %section.title, "section has no content");
    }

    ensure_directory(&args.out_dir)?;
    let sections_path = args.out_dir.join("sections.json");
    let index_path = args.out_dir.join("index.json");
    let manifest_path = args.out_dir.join("structure_manifest.json");

    write_json_compact(&sections_path, &sections)?;
    info!(path = %sections_path.display(), sections = sections.len(), "wrote sections");
    write_json_pretty(&index_path, &index)?;
    info!(path = %index_path.display(), "wrote section index");

    let manifest = StructureRunManifest {
        manifest_version: MANIFEST_VERSION,
        run_id,
        generated_at: now_utc_string(),
        source_sha256: sha256_file(&args.source)?,
        backend: backend_name(kind).to_string(),
        config,
        paths: StructurePaths {
            source_path: args.source.display().to_string(),
            out_dir: args.out_dir.display().to_string(),
            sections_path: sections_path.display().to_string(),
            index_path: index_path.display().to_string(),
        },
        counts: collect_counts(lines.len(), &sections),
        warnings,
    };

    write_json_pretty(&manifest_path, &manifest)?;

    info!(path = %manifest_path.display(), "wrote structure run manifest");
    info!(
        headings = manifest.counts.heading_count,
        sections = manifest.counts.section_count,
        items = manifest.counts.item_count,
        "structure completed"
    );

    Ok(())
}

/// Every accepted heading yields exactly one section.
pub(super) fn collect_counts(line_count: usize, sections: &[Section]) -> StructureCounts {
    let mut labels = Vec::<LabelCount>::new();
    for section in sections {
        for (label, items) in section.blocks.iter() {
            match labels.iter_mut().find(|entry| entry.label == label) {
                Some(entry) => {
                    entry.sections += 1;
                    entry.items += items.len();
                }
                None => labels.push(LabelCount {
                    label: label.to_string(),
                    sections: 1,
                    items: items.len(),
                }),
            }
        }
    }

    StructureCounts {
        line_count,
        heading_count: sections.len(),
        section_count: sections.len(),
        empty_section_count: sections
            .iter()
            .filter(|section| section.blocks.is_empty())
            .count(),
        item_count: sections
            .iter()
            .map(|section| section.blocks.item_count())
            .sum(),
        labels,
    }
}

