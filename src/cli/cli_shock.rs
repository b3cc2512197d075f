use super::cli_main::get_user_input;
use super::shock_help::SHOCK_TASK_HELPER;
use crate::RadiativeShock::integrators::IntegrationMethod;
use crate::RadiativeShock::shock_structure::{ShockInputs, ShockStructure, ShockStructureSolver};
use crate::RadiativeShock::task_io::{ShockTask, save_profile_csv};
use crate::RadiativeShock::validation::{canonical_zones, validate_profile};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

const TEMPLATE_NAME: &str = "shock_task_template.json";

pub fn shock_menu() {
    loop {
        println!("\n=== Radiative Shock Problems ===");
        println!("\x1b[33m1. Solve from file\x1b[0m");
        println!("\x1b[33m2. Auto-discover task files\x1b[0m");
        println!("\x1b[33m3. Set up a run interactively\x1b[0m");
        println!("\x1b[33m4. Generate template\x1b[0m");
        println!("\x1b[33m5. Read help\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        let outcome = match choice.trim() {
            "1" => solve_from_file(),
            "2" => auto_solve_tasks(),
            "3" => run_interactive(),
            "4" => create_template(),
            "5" => {
                show_help();
                Ok(())
            }
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = outcome {
            println!("Error: {}", e);
        }
    }
}

fn prompt(message: &str) -> String {
    print!("\x1b[36m{}\x1b[0m", message);
    let _ = io::stdout().flush();
    get_user_input().trim().to_string()
}

/// parses the answer, keeping `default` on an empty line
fn prompt_f64(message: &str, default: f64) -> Result<f64, String> {
    let answer = prompt(&format!("{} [{:e}]: ", message, default));
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| format!("Invalid number format: {}", answer))
}

fn confirm(message: &str) -> bool {
    let answer = prompt(&format!("{} (y/n): ", message)).to_lowercase();
    answer == "y" || answer == "yes"
}

fn solve_from_file() -> Result<(), String> {
    let path = PathBuf::from(prompt("Enter file path: "));
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }
    solve_task_file(path)
}

fn auto_solve_tasks() -> Result<(), String> {
    use std::{env, fs};

    let current_dir = env::current_dir().map_err(|e| e.to_string())?;
    println!("Searching for task files in: {:?}", current_dir);

    let mut found_files = false;
    let entries = fs::read_dir(&current_dir).map_err(|e| e.to_string())?;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_task = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| name.starts_with("shock") && name.ends_with(".json"));
        if is_task && path.is_file() && path.file_name() != Some(OsStr::new(TEMPLATE_NAME)) {
            println!("Found task file: {:?}", path);
            found_files = true;
            if let Err(e) = solve_task_file(path) {
                println!("Error: {}", e);
            }
        }
    }

    if !found_files {
        println!("No files named 'shock*.json' found in current directory.");
    }
    Ok(())
}

/// loads a JSON task, solves it, prints the result and writes the profile next to the task
pub fn solve_task_file(path: PathBuf) -> Result<(), String> {
    let task = ShockTask::load(&path).map_err(|e| e.to_string())?;
    if let Some(name) = &task.problem_name {
        println!("Problem: {}", name);
    }
    if let Some(description) = &task.problem_description {
        println!("{}", description);
    }
    let inputs = task.to_inputs().map_err(|e| e.to_string())?;
    let result = run(inputs)?;
    let csv = path.with_extension("csv");
    save_profile_csv(&result.profile, &csv).map_err(|e| e.to_string())?;
    println!("Profile saved to {}", csv.display());
    Ok(())
}

fn run(inputs: ShockInputs) -> Result<ShockStructure, String> {
    inputs.pretty_print_task();
    println!("Solving...");
    let result = ShockStructureSolver::new(inputs)
        .solve()
        .map_err(|e| e.to_string())?;
    result.pretty_print_summary();
    let stride = (result.profile.len() / 25).max(1);
    result.pretty_print_profile(stride);
    Ok(result)
}

fn run_interactive() -> Result<(), String> {
    // Step 1: Choose scenario
    let mut inputs = choose_scenario()?;

    // Step 2: Choose integration method
    inputs.solver.method = choose_method()?;

    // Step 3: Upstream state
    println!("\nEnter upstream state (Enter keeps the value):");
    inputs.density = prompt_f64("density, g/cm3", inputs.density)?;
    inputs.velocity = prompt_f64("velocity, cm/s", inputs.velocity)?;
    inputs.temperature = prompt_f64("temperature, K", inputs.temperature)?;
    let radiation = prompt_f64(
        "incident radiation temperature, K (0 for equilibrium)",
        inputs.incident_radiation_temperature.unwrap_or(0.0),
    )?;
    inputs.incident_radiation_temperature = if radiation > 0.0 { Some(radiation) } else { None };

    // Step 4: Solve
    let task = ShockTask::from_inputs(&inputs);
    let result = run(inputs)?;

    if confirm("Compare with the canonical temperature zones?") {
        validate_profile(&result.profile, &canonical_zones()).pretty_print();
    }
    if confirm("Save profile to CSV?") {
        let name = prompt("File name [shock_profile.csv]: ");
        let name = if name.is_empty() {
            "shock_profile.csv".to_string()
        } else {
            name
        };
        save_profile_csv(&result.profile, &name).map_err(|e| e.to_string())?;
        println!("Profile saved to {}", name);
    }
    if confirm("Save task to JSON?") {
        task.save("shock_task.json").map_err(|e| e.to_string())?;
        println!("Task saved to shock_task.json");
    }
    Ok(())
}

fn choose_scenario() -> Result<ShockInputs, String> {
    println!("\nChoose scenario:");
    println!("1. Accretion shock, radiation in equilibrium with the gas");
    println!("2. Accretion shock with 111 K radiation injected at the upstream boundary");
    println!("3. Subcritical shock, full model, analytic opacity");
    match prompt("Enter choice (1-3): ").as_str() {
        "1" => Ok(ShockInputs::default()),
        "2" => Ok(ShockInputs::default().with_incident_radiation(111.0)),
        "3" => Ok(ShockInputs::subcritical()),
        _ => Err("Invalid scenario choice".to_string()),
    }
}

fn choose_method() -> Result<IntegrationMethod, String> {
    println!("\nChoose integration method:");
    println!("1. Auto (recommended)");
    println!("2. BDF (smooth regions near equilibrium)");
    println!("3. Radau IIA (stiff radiation-matter exchange)");
    match prompt("Enter choice (1-3): ").as_str() {
        "1" | "" => Ok(IntegrationMethod::Auto),
        "2" => Ok(IntegrationMethod::Bdf),
        "3" => Ok(IntegrationMethod::Radau),
        _ => Err("Invalid method choice".to_string()),
    }
}

fn create_template() -> Result<(), String> {
    let mut task = ShockTask::from_inputs(&ShockInputs::default().with_incident_radiation(111.0));
    task.problem_name = Some("accretion shock".to_string());
    task.problem_description = Some("1e-13 g/cm3 gas at 20 K hit at 50 km/s, 111 K radiation".to_string());
    task.save(TEMPLATE_NAME).map_err(|e| e.to_string())?;
    println!("Template generated successfully: {}", TEMPLATE_NAME);
    Ok(())
}

fn show_help() {
    println!("\n=== Radiative Shock Task Help ===");
    println!("{}", SHOCK_TASK_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}
