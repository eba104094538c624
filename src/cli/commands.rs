use crate::caption::loader::{load_caption_seeds, seeded_cache};
use crate::caption::storage::CaptionCache;
use crate::cli::config::Settings;
use crate::contents::locale::Locale;
use crate::contents::resolver::ImageContents;
use crate::element::element_model::ElementNode;
use crate::element::identity::display_name;
use crate::element::snapshot::load_snapshot;
use crate::label::loader::load_label_store;
use crate::label::store::LabelStore;
use crate::report::console::{format_console_report, format_json_report, format_needs_label};
use crate::report::report_model::{DescribeReport, ElementReport};
use crate::trace::logger::TraceLogger;

// ============================================================================
// Resolver construction
// ============================================================================

/// Build a resolver from settings. Stores without a configured file are left
/// out, so the resolver reports nothing for them.
pub fn build_resolver(settings: &Settings, verbose: u8) -> Result<ImageContents, Box<dyn std::error::Error>> {
    let label_store: Option<Box<dyn LabelStore>> = match &settings.labels {
        Some(path) => {
            let store = load_label_store(path)?;
            if verbose > 0 {
                eprintln!("Loaded {} labels from {}", store.len(), path);
            }
            Some(Box::new(store))
        }
        None => None,
    };

    let caption_cache: Option<Box<dyn CaptionCache>> = match &settings.captions {
        Some(path) => {
            let seeds = load_caption_seeds(path)?;
            let cache = seeded_cache(seeds, settings.cache_capacity);
            if verbose > 0 {
                eprintln!(
                    "Loaded {} caption records from {} (capacity {})",
                    cache.len(),
                    path,
                    cache.capacity()
                );
            }
            Some(Box::new(cache))
        }
        None => None,
    };

    let tracer = match &settings.trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    Ok(ImageContents::new(label_store, caption_cache).with_tracer(tracer))
}

pub fn parse_locale(tag: &str) -> Result<Locale, Box<dyn std::error::Error>> {
    Ok(tag.parse::<Locale>()?)
}

// ============================================================================
// Report building
// ============================================================================

/// Resolve each element once, in snapshot order.
pub fn describe_elements(
    resolver: &mut ImageContents,
    locale: &Locale,
    elements: &[ElementNode],
) -> DescribeReport {
    let reports = elements
        .iter()
        .map(|el| {
            let resolution = resolver.resolve(locale, el);
            ElementReport {
                element: display_name(el),
                label: resolution.label,
                caption_text: resolution.caption_text,
                icon_label: resolution.icon_label,
                needs_label: resolver.needs_label(el),
                description: resolution.description,
            }
        })
        .collect();

    DescribeReport::from_elements(locale.as_str(), reports)
}

// ============================================================================
// describe subcommand
// ============================================================================

pub fn cmd_describe(
    snapshot: &str,
    format: &str,
    output: Option<&str>,
    settings: &Settings,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let locale = parse_locale(&settings.locale)?;
    let elements = load_snapshot(snapshot)?;
    let mut resolver = build_resolver(settings, verbose)?;

    if verbose > 0 {
        eprintln!("Describing {} elements ({})...", elements.len(), locale);
    }

    let report = describe_elements(&mut resolver, &locale, &elements);

    let output_content = match format {
        "json" => format_json_report(&report)?,
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &output_content)?;
            if verbose > 0 {
                eprintln!("Report written to {}", path);
            }
        }
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// needs-label subcommand
// ============================================================================

/// Print unlabeled elements and return how many there were.
pub fn cmd_needs_label(
    snapshot: &str,
    settings: &Settings,
    verbose: u8,
) -> Result<usize, Box<dyn std::error::Error>> {
    let locale = parse_locale(&settings.locale)?;
    let elements = load_snapshot(snapshot)?;
    let mut resolver = build_resolver(settings, verbose)?;

    let report = describe_elements(&mut resolver, &locale, &elements);
    print!("{}", format_needs_label(&report));

    if verbose > 0 {
        eprintln!("{} of {} elements need a label", report.needing_label, report.total);
    }

    Ok(report.needing_label)
}
