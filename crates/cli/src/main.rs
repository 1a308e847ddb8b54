mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::{AssessmentRes, HospitalsRes};
use healthassist_core::{
    config::load_from_env, directions_url, source_from_config, AssessmentFlow, Coordinate,
    FacilityFinder, FacilityPanel, FixedLocation, IntakeForm, LocationProvider, NoLocation,
    TypedLocation,
};

#[derive(Parser)]
#[command(name = "healthassist")]
#[command(about = "HealthAssist symptom triage and hospital finder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess symptoms and print a prescription
    Assess {
        /// Age in years (1-120)
        #[arg(long)]
        age: String,
        /// Height in cm (50-250)
        #[arg(long)]
        height: String,
        /// Weight in kg (10-300)
        #[arg(long)]
        weight: String,
        /// Free-text description of symptoms
        #[arg(long)]
        symptoms: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List hospitals, nearest first when a location is given
    Hospitals {
        /// Latitude of your location
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude of your location
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Location as "lat, lon"
        #[arg(long, conflicts_with_all = ["lat", "lon"], allow_hyphen_values = true)]
        location: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a driving-directions link to a coordinate
    Directions {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthassist_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            age,
            height,
            weight,
            symptoms,
            json,
        }) => {
            let form = IntakeForm {
                age,
                height,
                weight,
                symptoms,
            };
            let input = form.parse()?;

            let mut flow = AssessmentFlow::new();
            let results = flow.submit(input);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&AssessmentRes::from(results))?
                );
            } else {
                print!("{}", render::results(results)?);
            }
        }
        Some(Commands::Hospitals {
            lat,
            lon,
            location,
            json,
        }) => {
            let cfg = load_from_env()?;
            let finder = FacilityFinder::new(source_from_config(cfg.facility_store())?);

            let provider: Box<dyn LocationProvider> = match (lat, lon, location) {
                (Some(lat), Some(lon), _) => Box::new(FixedLocation(Coordinate::new(lat, lon)?)),
                (_, _, Some(text)) => Box::new(TypedLocation(text)),
                _ => Box::new(NoLocation),
            };

            let view = match finder.activate(provider.as_ref()).await {
                FacilityPanel::Loaded(view) => view,
                FacilityPanel::Loading => Default::default(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&HospitalsRes::from(&view))?);
            } else {
                print!("{}", render::facilities(&view)?);
            }
        }
        Some(Commands::Directions { lat, lon }) => {
            println!("{}", directions_url(Coordinate::new(lat, lon)?));
        }
        None => {
            println!("Use 'healthassist --help' for commands");
        }
    }

    Ok(())
}
