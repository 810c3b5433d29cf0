mod commands;
mod service;

use anyhow::Result;
use clap::Parser;
use commands::CliCommand;
use recipes_core::{Recipe, RecipeSearch};
use recipes_store::pg::PgRecipeStore;
use service::{RecipeService, ServiceError};
use std::io::{self, BufRead, Write};

type Service = RecipeService<PgRecipeStore>;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Recipes CLI", long_about = None)]
struct Cli {
    /// Postgres connection string for the recipe catalog
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = RecipeService::new(PgRecipeStore::open(&cli.database_url));

    display_help();

    let mut input = io::stdin().lock();

    loop {
        let Some(line) = read_command_line(&mut input)? else {
            break;
        };

        let Some(command) = CliCommand::parse(&line) else {
            eprintln!("Command not recognized: {line}");
            continue;
        };

        match command {
            CliCommand::List => list_recipes(&service),
            CliCommand::Search => search_recipes(&service, &mut input)?,
            CliCommand::Add => create_recipe(&service, &mut input)?,
            CliCommand::Delete => delete_recipe(&service, &mut input)?,
            CliCommand::Update => update_recipe(&service, &mut input)?,
            CliCommand::Help => display_help(),
            CliCommand::Quit => break,
        }
    }

    Ok(())
}

fn display_help() {
    println!(
        "\
Recipes CLI application

{list} - List all recipes from the catalog
{search} - Search recipes by duration range
{add} - Add a recipe to the catalog
{delete} - Delete a recipe from the catalog
{update} - Update an existing recipe
{help} - Display this menu
{quit} - Exit the CLI
",
        list = CliCommand::List,
        search = CliCommand::Search,
        add = CliCommand::Add,
        delete = CliCommand::Delete,
        update = CliCommand::Update,
        help = CliCommand::Help,
        quit = CliCommand::Quit,
    );
}

fn list_recipes(service: &Service) {
    match service.all_recipes() {
        Ok(recipes) => {
            for recipe in &recipes {
                println!("{recipe}");
            }
        }
        Err(e) => eprintln!("Failed to list recipes: {e}"),
    }
}

fn search_recipes(service: &Service, input: &mut impl BufRead) -> Result<()> {
    let search = RecipeSearch {
        duration_from: Some(prompt_i64(input, "Duration From: ")?),
        duration_to: Some(prompt_i64(input, "Duration To: ")?),
    };

    match service.find_recipes(&search) {
        Ok(recipes) => {
            for recipe in &recipes {
                println!("{recipe}");
            }
        }
        Err(e) => eprintln!("Failed to search recipes: {e}"),
    }

    Ok(())
}

fn create_recipe(service: &Service, input: &mut impl BufRead) -> Result<()> {
    let recipe = recipe_from_user(input)?;

    match service.create_recipe(&recipe) {
        Ok(_) => println!("Recipe successfully created"),
        Err(ServiceError::Constraints) => eprintln!("Recipe provided is not valid"),
        Err(e) => eprintln!("Failed to create recipe: {e}"),
    }

    Ok(())
}

fn delete_recipe(service: &Service, input: &mut impl BufRead) -> Result<()> {
    let id = prompt_i64(input, "Recipe ID: ")?;

    match service.delete_recipe(id) {
        Ok(()) => println!("Recipe {id} successfully deleted"),
        Err(ServiceError::NotFound) => eprintln!("Recipe with id {id} does not exist"),
        Err(e) => eprintln!("Failed to delete recipe: {e}"),
    }

    Ok(())
}

fn update_recipe(service: &Service, input: &mut impl BufRead) -> Result<()> {
    let id = prompt_i64(input, "Recipe ID: ")?;
    let recipe = recipe_from_user(input)?;

    match service.update_recipe(id, &recipe) {
        Ok(()) => println!("Recipe successfully updated"),
        Err(ServiceError::NotFound) => eprintln!("Recipe with id {id} does not exist"),
        Err(ServiceError::Constraints) => eprintln!("Recipe constraints violation"),
        Err(e) => eprintln!("Failed to update recipe: {e}"),
    }

    Ok(())
}

/// Prompts for the three user-supplied fields. Text answers are passed
/// through as entered; a blank answer means "keep existing" on update,
/// per the merge rule.
fn recipe_from_user(input: &mut impl BufRead) -> Result<Recipe> {
    let name = prompt(input, "Recipe Name: ")?;
    let description = prompt(input, "Recipe Description: ")?;
    let duration = prompt_i64(input, "Recipe Duration: ")?;

    Ok(Recipe {
        id: None,
        name: Some(name),
        description: Some(description),
        duration_in_minutes: Some(duration),
    })
}

/// Reads the next non-empty trimmed line; `None` on end of input.
fn read_command_line(input: &mut impl BufRead) -> Result<Option<String>> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }

    Ok(line.trim().to_string())
}

fn prompt_i64(input: &mut impl BufRead, label: &str) -> Result<i64> {
    loop {
        let value = prompt(input, label)?;

        if let Ok(value) = value.parse() {
            return Ok(value);
        }
    }
}
