//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage with a deterministic seeded run.
//! - Exercise add, filter, sort, update and delete end to end.
//!
//! Logging is enabled when `ROSTER_LOG_DIR` is set to an absolute directory;
//! `ROSTER_LOG_LEVEL` overrides the build-mode default level.

use chrono::NaiveDate;
use roster_core::{
    default_log_level, init_logging, CountryAddRequest, FilterField, Gender, PersonAddRequest,
    PersonService, ServiceResult, SortField, SortOrder,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        let level =
            std::env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("roster: logging disabled: {err}");
        }
    }

    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(
                "event=cli_run module=cli status=error error_code={}",
                err.code()
            );
            eprintln!("roster: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ServiceResult<()> {
    let persons = PersonService::in_memory_with_countries();
    let countries = persons.countries();

    let usa = countries.add(Some(CountryAddRequest::new("USA")))?;
    let india = countries.add(Some(CountryAddRequest::new("India")))?;

    let seed = [
        ("Pepito", "pepito@gmail.com", usa.id, (1998, 10, 3), Gender::Male),
        ("Pepapi", "pepapi@gmail.com", india.id, (1928, 11, 11), Gender::Female),
        ("Antonio", "antonio@gmail.com", usa.id, (1968, 7, 12), Gender::Male),
    ];
    for (name, email, country_id, (year, month, day), gender) in seed {
        persons.add(Some(PersonAddRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(year, month, day),
            gender: Some(gender),
            country_id: Some(country_id),
            address: None,
            receive_news_letters: true,
        }))?;
    }

    println!("countries={}", countries.len()?);
    println!("persons matching name~\"pe\":");
    for view in persons.filter(FilterField::Name, Some("pe"))? {
        println!("  {view}");
    }

    println!("persons by age, descending:");
    let sorted = persons.sort(persons.get_all()?, SortField::Age, SortOrder::Descending);
    for view in &sorted {
        println!(
            "  {} age={} country={}",
            view.name,
            view.age.map(|age| age.to_string()).unwrap_or_default(),
            view.country.as_deref().unwrap_or("-")
        );
    }

    if let Some(oldest) = sorted.first() {
        let mut update = oldest.to_update_request();
        update.address = Some("updated by smoke run".to_string());
        let updated = persons.update(Some(update))?;
        println!("updated {} address={:?}", updated.id, updated.address);

        let deleted = persons.delete(Some(updated.id))?;
        println!("deleted {} -> {deleted}, remaining={}", updated.id, persons.len()?);
    }

    Ok(())
}
