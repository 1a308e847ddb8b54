//! Plain-text rendering of the view models for terminal output.

use healthassist_core::{AssessmentResults, FacilityListing, FacilityView};
use std::fmt::{self, Write};

pub fn results(results: &AssessmentResults) -> Result<String, fmt::Error> {
    let p = &results.prescription;
    let mut out = String::new();

    writeln!(out, "Medical Disclaimer: {}", results.disclaimer())?;
    writeln!(out)?;
    writeln!(out, "Health Assessment [{}]", results.severity_badge())?;
    writeln!(
        out,
        "Age: {} years | BMI: {} | Weight: {} kg",
        results.input.age,
        results.bmi_display(),
        results.input.weight_kg
    )?;
    writeln!(out)?;
    writeln!(out, "Possible Condition: {}", p.condition)?;

    if let Some(notice) = results.urgency_notice() {
        writeln!(out, "!! {notice}")?;
    }

    section(&mut out, "General Recommendations", &p.advice)?;
    if results.shows_medications() {
        section(&mut out, "Suggested Over-the-Counter Medications", &p.medications)?;
    }
    section(&mut out, "Lifestyle & Home Care Suggestions", &p.lifestyle)?;

    Ok(out)
}

pub fn facilities(view: &FacilityView) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if let Some(origin) = view.origin {
        writeln!(out, "Your location: {origin}")?;
    }
    if let Some(message) = view.status_message() {
        writeln!(out, "{message}")?;
    }

    for listing in &view.listings {
        writeln!(out)?;
        listing_block(&mut out, listing)?;
    }

    Ok(out)
}

fn listing_block(out: &mut String, listing: &FacilityListing) -> fmt::Result {
    let f = &listing.facility;
    match listing.distance_badge() {
        Some(badge) => writeln!(out, "{} ({badge})", f.name)?,
        None => writeln!(out, "{}", f.name)?,
    }
    writeln!(out, "  {}", f.display_address())?;
    writeln!(out, "  Rating: {:.1}", f.rating)?;
    writeln!(out, "  Phone: {} ({})", f.phone, f.tel_uri())?;

    let mut tags: Vec<&str> = Vec::new();
    if f.emergency_services {
        tags.push("Emergency Services");
    }
    tags.extend(f.specialty.iter().map(String::as_str));
    if !tags.is_empty() {
        writeln!(out, "  {}", tags.join(" | "))?;
    }

    writeln!(out, "  Get Directions: {}", listing.directions_url)
}

fn section(out: &mut String, title: &str, lines: &[String]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}:")?;
    for line in lines {
        writeln!(out, "  - {line}")?;
    }
    Ok(())
}
