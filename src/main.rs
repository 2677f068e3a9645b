//! Mediplan
//!
//! Day-view client for the patient medication schedule: fetches the
//! patient's prescriptions from the remote service and prints the selected
//! day's dose plan, low-stock warnings, and consultation requests.

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use mediplan::api::PrescriptionService;
use mediplan::build_info;
use mediplan::models::{Consultation, Medication, Prescription};
use mediplan::schedule::{active_on, low_stock, ColorMap};
use mediplan::state::{AppState, PatientSession};

/// Get the service endpoint from environment or use default
fn get_endpoint() -> String {
    std::env::var("MEDIPLAN_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mediplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let mut state = AppState::new();
    if let Some(id) = std::env::var("MEDIPLAN_PATIENT_ID")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        state.login(PatientSession {
            id,
            name: std::env::var("MEDIPLAN_PATIENT_NAME").ok(),
        });
    }

    let patient_id = match state.session() {
        Ok(session) => session.id,
        Err(e) => {
            eprintln!("{} (set MEDIPLAN_PATIENT_ID)", e);
            std::process::exit(1);
        }
    };

    // Selected day: first argument as YYYY-MM-DD, default today
    let today = Local::now().date_naive();
    let selected = std::env::args()
        .nth(1)
        .and_then(|arg| NaiveDate::parse_from_str(&arg, "%Y-%m-%d").ok())
        .unwrap_or(today);

    let service = PrescriptionService::new(get_endpoint());
    eprintln!("Fetching prescriptions for patient {}...", patient_id);

    // A failed fetch leaves prior state unchanged; no retry
    let recetas = match service.get_recipes_by_patient(patient_id).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("No se pudieron cargar las recetas: {}", e);
            return Ok(());
        }
    };

    let prescriptions: Vec<Prescription> = recetas
        .iter()
        .map(|r| Prescription::from_record(r, today))
        .collect();
    state.set_prescriptions(prescriptions);

    let colors = ColorMap::assign(state.medications().map(|m| m.name.as_str()));
    let all: Vec<Medication> = state.medications().cloned().collect();

    println!("\nMedicamentos para {}:", selected.format("%Y-%m-%d"));
    let day_meds = active_on(&all, selected);
    if day_meds.is_empty() {
        println!("  (ninguno)");
    }
    for med in &day_meds {
        println!(
            "  [{}] {} {} - {}",
            colors.color_for(&med.name),
            med.name,
            med.dose,
            med.dose_schedule
        );
        if let Some(instructions) = &med.instructions {
            println!("      {}", instructions);
        }
    }

    let flagged = low_stock(&all);
    if !flagged.is_empty() {
        println!("\nStock bajo:");
        for med in flagged {
            println!(
                "  {} ({} restantes)",
                med.name,
                med.stock_remaining.unwrap_or(0)
            );
        }
    }

    match service.get_consultas_by_patient(patient_id).await {
        Ok(records) => {
            let consultas: Vec<Consultation> =
                records.iter().map(Consultation::from_record).collect();
            if !consultas.is_empty() {
                println!("\nConsultas:");
                for consulta in consultas {
                    println!(
                        "  {} {} - {}",
                        consulta.date,
                        consulta.time,
                        consulta.status.display_name()
                    );
                }
            }
        }
        Err(e) => eprintln!("No se pudieron cargar las consultas: {}", e),
    }

    Ok(())
}
