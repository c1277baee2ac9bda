mod prompt;

use std::io;

use clap::{Arg, ArgAction, Command, parser::ValueSource};
use heatsink_sizing::models::thermal::heatsink::{
    Concentration, ContactDrop, Convection, ElementSet, Exhaustion, ForcedConvection,
    SearchOutcome, SizingConfig, SizingReport, deck::Deck,
};
use uom::si::{
    area::square_meter,
    f64::{Area, Velocity},
    length::meter,
    power::watt,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::prompt::Prompter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("heatsink-sizing")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Picks the smallest standard finned radiator able to cool a set of components")
        .arg(
            Arg::new("deck")
                .value_name("DECK")
                .help("Semicolon-delimited input deck; prompts interactively when omitted"),
        )
        .arg(
            Arg::new("forced")
                .long("forced")
                .help("Size for fan-driven air instead of natural convection")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("velocity")
                .short('w')
                .long("velocity")
                .value_name("M_PER_S")
                .help("Air velocity for --forced")
                .value_parser(clap::value_parser!(f64))
                .default_value("1"),
        )
        .arg(
            Arg::new("contact-drop")
                .long("contact-drop")
                .value_name("CONVENTION")
                .help("Whether the contact-joint drop is subtracted from or added to the headroom")
                .value_parser(["subtract", "add"])
                .default_value("subtract"),
        )
        .arg(
            Arg::new("footprint")
                .long("footprint")
                .value_name("M2")
                .help("Fixed heat-source footprint area; defaults to the smallest contact area")
                .value_parser(clap::value_parser!(f64)),
        )
        .get_matches();

    let mut config = SizingConfig::default();
    let deck = matches.get_one::<String>("deck");

    let elements: ElementSet = if let Some(path) = deck {
        let deck = Deck::read(path)?;
        deck.apply(&mut config);
        deck.into_elements()
    } else {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.conditions(&mut config)?;
        prompter.elements()?
    };

    if matches.get_flag("forced") {
        let mut velocity = *matches.get_one::<f64>("velocity").unwrap_or(&1.0);
        if deck.is_none() && matches.value_source("velocity") == Some(ValueSource::DefaultValue) {
            let stdin = io::stdin();
            velocity = Prompter::new(stdin.lock(), io::stdout())
                .real("Air velocity, m/s", Some(velocity))?;
        }
        config.convection = Convection::Forced(ForcedConvection {
            velocity: Velocity::new::<meter_per_second>(velocity),
        });
    }

    if matches.get_one::<String>("contact-drop").map(String::as_str) == Some("add") {
        config.contact_drop = ContactDrop::Add;
    }

    if let Some(&area) = matches.get_one::<f64>("footprint") {
        config.concentration = Concentration::FixedArea(Area::new::<square_meter>(area));
    }

    #[cfg(feature = "parallel")]
    let report = heatsink_sizing::models::thermal::heatsink::size_parallel(&elements, &config)?;
    #[cfg(not(feature = "parallel"))]
    let report = heatsink_sizing::models::thermal::heatsink::size(&elements, &config)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &SizingReport) {
    let conditions = &report.conditions;
    println!(
        "Components: {}, total power {:.2} W, ambient {:.1} C, permissible overheat {:.2} K",
        conditions.component_count,
        conditions.required_power.get::<watt>(),
        conditions.ambient.get::<degree_celsius>(),
        conditions.overheat.get::<kelvin>(),
    );

    match &report.search.outcome {
        SearchOutcome::Found {
            radiator, capacity, ..
        } => {
            println!(
                "Radiator: length {:.3} m, width {:.3} m, fin height {:.4} m, base area {:.5} m2",
                radiator.length().get::<meter>(),
                radiator.width().get::<meter>(),
                radiator.fin_height().get::<meter>(),
                radiator.flat_surface().get::<square_meter>(),
            );
            println!("Capacity: {:.2} W", capacity.get::<watt>());
        }
        SearchOutcome::Exhausted { reason } => {
            let why = match reason {
                Exhaustion::NoOverheatMargin { overheat } => format!(
                    "the components have no headroom above ambient ({:.2} K)",
                    overheat.get::<kelvin>()
                ),
                Exhaustion::ExceedsLimits { size } => format!(
                    "the next candidate ({:.3} m x {:.3} m) exceeds the size limits",
                    size.length.get::<meter>(),
                    size.width.get::<meter>()
                ),
                Exhaustion::CatalogExhausted => "no catalog radiator carries the load".to_string(),
            };
            println!("No feasible radiator: {why}");
        }
    }
}
