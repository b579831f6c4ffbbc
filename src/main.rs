use anyhow::{bail, Context};
use std::env;
use std::io::Write;
use std::path::Path;
use std::process;
use word_navigate::{parse_command, BufferView, Navigation, Plugin, Region, Selection, View};

const USAGE: &str = "Usage: word-navigate <file> <command> <selection> [settings]";

/// Parses `a[:b]` regions joined by `,`.
fn parse_selection(input: &str) -> anyhow::Result<Selection> {
    let mut regions = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (a, b) = match part.split_once(':') {
            Some((a, b)) => (a, b),
            None => (part, part),
        };
        let a: usize = a.trim().parse().with_context(|| format!("Invalid offset '{}'", a))?;
        let b: usize = b.trim().parse().with_context(|| format!("Invalid offset '{}'", b))?;
        regions.push(Region::new(a, b));
    }
    match Selection::from_regions(regions) {
        Some(selection) => Ok(selection),
        None => bail!("Empty selection '{}'", input),
    }
}

/// Fails when a region reaches past the end of the buffer.
fn check_selection(selection: &Selection, view: &BufferView) -> anyhow::Result<()> {
    let size = view.size();
    match selection.regions().iter().find(|region| region.end() > size) {
        Some(region) => bail!(
            "Region {} is outside '{}' ({} characters)",
            region,
            view.buffer().file_name(),
            size
        ),
        None => Ok(()),
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 4 {
        bail!(USAGE);
    }
    let filename = &args[1];
    let command = parse_command(&args[2])?;
    let selection = parse_selection(&args[3])?;

    let mut view = BufferView::open(filename)
        .with_context(|| format!("Failed to open file '{}'", filename))?;
    check_selection(&selection, &view).context("Invalid selection")?;
    view.set_selection(selection);

    let settings_path = args.get(4).map(Path::new);
    let plugin = Plugin::activate(settings_path).context("Failed to load settings")?;

    let outcome = plugin.run(&mut view, command)?;
    match outcome {
        Navigation::Moved(region) => println!("moved {}", region),
        Navigation::Unchanged => println!("unchanged"),
        Navigation::Aborted => println!("aborted"),
    }
    for region in view.sel().regions() {
        println!("{} '{}'", region, view.substr(*region));
    }

    plugin.deactivate()?;
    Ok(())
}

fn main() {
    // The log_level setting narrows this down once settings are loaded
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.target(), record.level(), record.args())
        })
        .init();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("word-navigate: {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let selection = parse_selection("4:7, 12").unwrap();
        assert_eq!(selection.regions(), &[Region::new(4, 7), Region::new(12, 12)]);
        assert!(parse_selection("").is_err());
        assert!(parse_selection("x:3").is_err());
    }

    #[test]
    fn test_selection_past_buffer_end_is_rejected() {
        let view = BufferView::from_text("foo bar");
        assert!(check_selection(&parse_selection("7").unwrap(), &view).is_ok());
        assert!(check_selection(&parse_selection("4:7").unwrap(), &view).is_ok());
        assert!(check_selection(&parse_selection("100").unwrap(), &view).is_err());
        assert!(check_selection(&parse_selection("0:3,5:8").unwrap(), &view).is_err());
    }
}
