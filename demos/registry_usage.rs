//! Example demonstrating registration engine usage.
//!
//! Shows bootstrap population, the register/drop protocol, error handling,
//! and report rendering through the shared handle.

use crs_rust::models::parse_seed_json;
use crs_rust::services::export::render_course_report;
use crs_rust::{
    CourseId, RegisterOutcome, RegistrationEngine, RegistryError, SharedEngine, StudentId,
};

const SEED: &str = r#"{
    "students": [
        { "id": "S1", "name": "Eman" },
        { "id": "S2", "name": "Maimona" },
        { "id": "S3", "name": "Noor" }
    ],
    "courses": [
        { "id": "CS101", "title": "ITC", "instructor": "Bilal Hashmi", "time_slot": "Tue 10AM", "capacity": 2 },
        { "id": "CS102", "title": "OOP", "instructor": "Qazi Ammar", "time_slot": "Wed 11AM", "capacity": 1 },
        { "id": "CS103", "title": "DSA", "instructor": "Hammad Naveed", "time_slot": "Mon 4PM", "capacity": 3 }
    ]
}"#;

/// Example 1: seed a registry from a JSON catalog.
fn example_bootstrap() -> Result<RegistrationEngine, Box<dyn std::error::Error>> {
    println!("=== Example 1: Bootstrap ===");

    let catalog = parse_seed_json(SEED)?;
    println!("seed checksum: {}", catalog.checksum);

    let mut engine = RegistrationEngine::new();
    engine.apply_seed(&catalog)?;

    for course in engine.list_courses() {
        println!(
            "  - {} {} ({}) at {}: {}/{}",
            course.id,
            course.title,
            course.instructor,
            course.time_slot,
            course.enrolled_count,
            course.capacity
        );
    }
    Ok(engine)
}

/// Example 2: registration outcomes and waitlist promotion.
fn example_register_drop(engine: &mut RegistrationEngine) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 2: Register / Drop ===");

    let s1 = StudentId::new("S1");
    let s2 = StudentId::new("S2");
    let oop = CourseId::new("CS102");

    let outcome = engine.register(&s1, &oop)?;
    println!("S1 -> CS102: {:?}", outcome);

    let outcome = engine.register(&s2, &oop)?;
    assert_eq!(outcome, RegisterOutcome::Waitlisted);
    println!("S2 -> CS102: {:?}", outcome);

    let outcome = engine.drop(&s1, &oop)?;
    println!("S1 dropped CS102, promoted: {:?}", outcome.promoted);

    for entry in engine.timetable(&s2)? {
        println!("S2 timetable: {} - {}", entry.time_slot, entry.course_id);
    }
    Ok(())
}

/// Example 3: error handling.
fn example_error_handling(engine: &mut RegistrationEngine) {
    println!("\n=== Example 3: Error Handling ===");

    match engine.register(&StudentId::new("S9"), &CourseId::new("CS101")) {
        Ok(outcome) => println!("unexpected success: {:?}", outcome),
        Err(RegistryError::StudentNotFound { id }) => {
            println!("expected error - student not found: {}", id);
        }
        Err(e) => println!("unexpected error: {}", e),
    }
}

/// Example 4: shared handle and report rendering.
fn example_shared_reports(engine: RegistrationEngine) {
    println!("\n=== Example 4: Shared Handle & Reports ===");

    let shared = SharedEngine::new(engine);
    let reader = shared.clone();

    let report = reader.with_read(render_course_report);
    print!("{}", report);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = example_bootstrap()?;
    example_register_drop(&mut engine)?;
    example_error_handling(&mut engine);
    example_shared_reports(engine);

    println!("\nAll examples completed.");
    Ok(())
}
