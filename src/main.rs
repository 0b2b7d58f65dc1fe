use anyhow::Result;
use clap::*;
use contact_cards::core::{CardParsed, ParserInput};
use contact_cards::parsers::build_registry;
use contact_cards::report;
use log::LevelFilter;

fn main() -> Result<()> {
    let matches = Command::new("contact_cards")
        .version(crate_version!())
        .about("Parse a vCard contact export and print its records sorted by name.")
        .arg(
            Arg::new("list_parsers")
                .long("list-parsers")
                .help("List available parsers (name + description) and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_parser(value_parser!(String))
                .default_value("Contacts.vcf")
                .help("Path to the contact export file."),
        )
        .arg(
            Arg::new("parser")
                .short('p')
                .long("parser")
                .value_parser(value_parser!(String))
                .default_value("galaxy_vcf")
                .help("Parser name"),
        )
        .arg(
            Arg::new("log_level")
                .short('l')
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
        .get_matches();

    let log_level_str = matches.get_one::<String>("log_level").unwrap();
    let level_filter = match log_level_str.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new().filter_level(level_filter).init();

    let registry = build_registry();

    if matches.get_flag("list_parsers") {
        println!("available parsers:");
        for p in contact_cards::list_parsers(&registry) {
            println!("  {:<20} {}", p.name, p.description);
        }
        return Ok(());
    }

    let file_path = matches.get_one::<String>("file").unwrap();
    let parser_name = matches.get_one::<String>("parser").unwrap();

    let parser = registry
        .get(parser_name.as_str())
        .ok_or_else(|| anyhow::anyhow!("unknown parser: {parser_name}"))?;

    let mut cards: Vec<CardParsed> = Vec::new();
    let mut sink = |card: CardParsed| -> Result<()> {
        cards.push(card);
        Ok(())
    };

    parser.run_into(ParserInput::Path(file_path.into()), &mut sink)?;

    report::write_report(&cards, &mut std::io::stdout().lock())?;

    eprintln!("done: emitted {} contacts", cards.len());
    Ok(())
}
